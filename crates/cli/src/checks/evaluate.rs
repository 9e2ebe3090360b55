use tracing::debug;

use crate::browser::PageProbe;
use crate::checks::{CheckOutcome, CheckReport, CheckStatus, ElementCheck};

/// Evaluates one check against the page and classifies the result.
///
/// Never fails: engine errors and unmatched locators are folded into
/// [`CheckStatus::ResolutionError`] so a bad selector cannot abort the
/// remaining checks.
pub async fn evaluate_one(page: &dyn PageProbe, check: &ElementCheck) -> CheckOutcome {
	let (status, actual_text) = classify(page, check).await;
	debug!(name = %check.name, selector = %check.selector, ?status, "check evaluated");

	CheckOutcome {
		name: check.name.clone(),
		description: check.description.clone(),
		selector: check.selector.clone(),
		expected_text: check.expected_text.clone(),
		actual_text,
		status,
	}
}

/// Evaluates every check in order. No short-circuit: a failing check
/// never skips the ones after it.
pub async fn evaluate_checks(page: &dyn PageProbe, checks: &[ElementCheck]) -> CheckReport {
	let mut outcomes = Vec::with_capacity(checks.len());
	for check in checks {
		outcomes.push(evaluate_one(page, check).await);
	}
	CheckReport::new(outcomes)
}

async fn classify(page: &dyn PageProbe, check: &ElementCheck) -> (CheckStatus, Option<String>) {
	let count = match page.locator_count(&check.selector).await {
		Ok(count) => count,
		Err(err) => {
			return (
				CheckStatus::ResolutionError {
					message: err.to_string(),
				},
				None,
			);
		}
	};
	if count == 0 {
		return (
			CheckStatus::ResolutionError {
				message: format!("locator matched no elements: {}", check.selector),
			},
			None,
		);
	}

	let visible = match page.is_visible(&check.selector).await {
		Ok(visible) => visible,
		Err(err) => {
			return (
				CheckStatus::ResolutionError {
					message: err.to_string(),
				},
				None,
			);
		}
	};
	if !visible {
		return (CheckStatus::NotVisible, None);
	}

	let actual = match page.text_content(&check.selector).await {
		Ok(text) => text.unwrap_or_default(),
		Err(err) => {
			return (
				CheckStatus::ResolutionError {
					message: err.to_string(),
				},
				None,
			);
		}
	};

	// Only the page text is trimmed; the declared expectation is
	// compared verbatim.
	let status = if actual.trim() == check.expected_text {
		CheckStatus::Matched
	} else {
		CheckStatus::TextMismatch
	};
	(status, Some(actual))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::MockPage;

	fn check(name: &str, selector: &str, expected: &str) -> ElementCheck {
		ElementCheck {
			name: name.into(),
			description: name.into(),
			selector: selector.into(),
			expected_text: expected.into(),
		}
	}

	#[tokio::test]
	async fn visible_element_with_matching_text_passes() {
		let page = MockPage::new();
		page.set_element("h1", "  Welcome back  ");

		let outcome = evaluate_one(&page, &check("title", "h1", "Welcome back")).await;
		assert_eq!(outcome.status, CheckStatus::Matched);
		assert_eq!(outcome.actual_text.as_deref(), Some("  Welcome back  "));
	}

	#[tokio::test]
	async fn hidden_element_is_not_visible() {
		let page = MockPage::new();
		page.set_hidden_element("#banner", "ignored");

		let outcome = evaluate_one(&page, &check("banner", "#banner", "ignored")).await;
		assert_eq!(outcome.status, CheckStatus::NotVisible);
		assert!(outcome.actual_text.is_none());
	}

	#[tokio::test]
	async fn differing_text_is_a_mismatch() {
		let page = MockPage::new();
		page.set_element("h1", "Goodbye");

		let outcome = evaluate_one(&page, &check("title", "h1", "Welcome")).await;
		assert_eq!(outcome.status, CheckStatus::TextMismatch);
		assert_eq!(outcome.actual_text.as_deref(), Some("Goodbye"));
	}

	#[tokio::test]
	async fn unmatched_locator_is_a_resolution_error() {
		let page = MockPage::new();

		let outcome = evaluate_one(&page, &check("missing", "#nope", "x")).await;
		match outcome.status {
			CheckStatus::ResolutionError { ref message } => {
				assert!(message.contains("#nope"), "unexpected message: {message}");
			}
			ref other => panic!("expected resolution error, got {other:?}"),
		}
	}

	#[tokio::test]
	async fn engine_failure_is_a_resolution_error() {
		let page = MockPage::new();
		page.set_error_for_selector("h1", "strict mode violation");

		let outcome = evaluate_one(&page, &check("title", "h1", "x")).await;
		assert!(matches!(outcome.status, CheckStatus::ResolutionError { .. }));
	}

	#[tokio::test]
	async fn padded_expectation_is_a_mismatch() {
		let page = MockPage::new();
		page.set_element("h1", "Create Your Account");

		let outcome = evaluate_one(&page, &check("cta", "h1", " Create Your Account ")).await;
		assert_eq!(outcome.status, CheckStatus::TextMismatch);
		assert_eq!(outcome.actual_text.as_deref(), Some("Create Your Account"));
	}

	#[tokio::test]
	async fn empty_text_node_compares_as_empty_string() {
		let page = MockPage::new();
		page.set_element("span.empty", "");

		let outcome = evaluate_one(&page, &check("empty", "span.empty", "")).await;
		assert_eq!(outcome.status, CheckStatus::Matched);
	}

	#[tokio::test]
	async fn failing_check_does_not_skip_later_checks() {
		let page = MockPage::new();
		page.set_element("h1", "Welcome");
		page.set_element("footer", "© Example");

		let checks = [
			check("title", "h1", "Welcome"),
			check("missing", "#nope", "x"),
			check("footer", "footer", "© Example"),
		];
		let report = evaluate_checks(&page, &checks).await;
		assert_eq!(report.outcomes.len(), 3);
		assert!(!report.passed());
		assert_eq!(report.matched_count(), 2);
		assert_eq!(report.outcomes[2].status, CheckStatus::Matched);
	}
}
