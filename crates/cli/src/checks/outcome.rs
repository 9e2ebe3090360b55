use serde::{Deserialize, Serialize};

/// Classification of a single element check.
///
/// Exactly one variant applies per check. `ResolutionError` carries the
/// underlying engine message so the report stays useful without logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckStatus {
	/// Element is visible and its trimmed text equals the expectation.
	Matched,
	/// Element resolved but is not visible in the rendered page.
	NotVisible,
	/// Element is visible but its trimmed text differs.
	TextMismatch,
	/// The locator matched nothing or the query itself failed.
	ResolutionError { message: String },
}

impl CheckStatus {
	pub fn is_matched(&self) -> bool {
		matches!(self, CheckStatus::Matched)
	}
}

/// The evaluated result of one declared check.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutcome {
	/// Key of the check in the checks file.
	pub name: String,
	/// Human-readable label (falls back to the key).
	pub description: String,
	/// The locator that was queried.
	pub selector: String,
	/// Expected text, as declared.
	pub expected_text: String,
	/// Text observed on the page, when the element was read.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub actual_text: Option<String>,
	#[serde(flatten)]
	pub status: CheckStatus,
}

/// All outcomes of a run, in declaration order.
#[derive(Debug, Default)]
pub struct CheckReport {
	pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
	pub fn new(outcomes: Vec<CheckOutcome>) -> Self {
		Self { outcomes }
	}

	/// Aggregate verdict: true iff every check matched. An empty report
	/// passes vacuously.
	pub fn passed(&self) -> bool {
		self.outcomes.iter().all(|o| o.status.is_matched())
	}

	pub fn matched_count(&self) -> usize {
		self.outcomes.iter().filter(|o| o.status.is_matched()).count()
	}
}
