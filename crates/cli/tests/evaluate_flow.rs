//! End-to-end evaluation flow against an in-memory page.

use uicheck_cli::browser::PageProbe;
use uicheck_cli::checks::{CheckStatus, ElementCheck, evaluate_checks};
use uicheck_cli::output::{CheckRunData, ResultBuilder};
use uicheck_cli::testing::MockPage;

fn check(name: &str, selector: &str, expected: &str) -> ElementCheck {
	ElementCheck {
		name: name.into(),
		description: name.into(),
		selector: selector.into(),
		expected_text: expected.into(),
	}
}

#[tokio::test]
async fn all_matching_checks_pass_the_run() {
	let page = MockPage::new();
	page.set_element("h1", "Dashboard");
	page.set_element("nav .user", "alex@example.com");

	let checks = [
		check("title", "h1", "Dashboard"),
		check("user", "nav .user", "alex@example.com"),
	];
	let report = evaluate_checks(&page, &checks).await;

	assert!(report.passed());
	assert_eq!(report.matched_count(), 2);
}

#[tokio::test]
async fn mixed_outcomes_are_all_reported_in_order() {
	let page = MockPage::new();
	page.set_element("h1", "Dashboard");
	page.set_hidden_element("#banner", "Sale!");
	page.set_element(".count", "41");
	page.set_error_for_selector(".flaky", "execution context destroyed");

	let checks = [
		check("title", "h1", "Dashboard"),
		check("banner", "#banner", "Sale!"),
		check("count", ".count", "42"),
		check("missing", "#gone", "x"),
		check("flaky", ".flaky", "x"),
	];
	let report = evaluate_checks(&page, &checks).await;

	assert!(!report.passed());
	assert_eq!(report.outcomes.len(), 5);
	assert_eq!(report.matched_count(), 1);
	assert_eq!(report.outcomes[0].status, CheckStatus::Matched);
	assert_eq!(report.outcomes[1].status, CheckStatus::NotVisible);
	assert_eq!(report.outcomes[2].status, CheckStatus::TextMismatch);
	assert_eq!(report.outcomes[2].actual_text.as_deref(), Some("41"));
	assert!(matches!(report.outcomes[3].status, CheckStatus::ResolutionError { .. }));
	assert!(matches!(report.outcomes[4].status, CheckStatus::ResolutionError { .. }));
}

#[tokio::test]
async fn surrounding_whitespace_is_ignored_in_comparison() {
	let page = MockPage::new();
	page.set_element("h1", "\n\t  Dashboard  \n");

	let report = evaluate_checks(&page, &[check("title", "h1", "Dashboard")]).await;
	assert!(report.passed());
}

#[tokio::test]
async fn envelope_reflects_the_report_verdict() {
	let page = MockPage::new();
	page.set_element("h1", "Dashboard");
	page.set_element("h2", "Wrong");

	let checks = [check("title", "h1", "Dashboard"), check("sub", "h2", "Right")];
	let report = evaluate_checks(&page, &checks).await;

	let result = ResultBuilder::new("check")
		.data(CheckRunData::new(page.url(), "chromium", report))
		.build();

	assert!(result.ok);
	let json = serde_json::to_value(&result).unwrap();
	assert_eq!(json["data"]["passed"], false);
	assert_eq!(json["data"]["matched"], 1);
	assert_eq!(json["data"]["total"], 2);
	assert_eq!(json["data"]["outcomes"][1]["status"], "text_mismatch");
	assert_eq!(json["data"]["outcomes"][1]["actualText"], "Wrong");
}
