//! Structured output envelope for the validation run.
//!
//! Every run produces a result envelope on stdout when JSON output is
//! selected:
//!
//! ```json
//! {
//!   "ok": true,
//!   "command": "check",
//!   "data": { "passed": true, "outcomes": [ ... ] },
//!   "timings": { "durationMs": 1234 },
//!   "diagnostics": []
//! }
//! ```
//!
//! On failure the `error` object carries a stable machine-readable
//! code. The `ok` flag reflects the run mechanics, not the verdict:
//! a run that evaluated every check but found mismatches is `ok: true`
//! with `data.passed: false`.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::checks::{CheckOutcome, CheckReport, CheckStatus};

/// Output format for run results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text (default)
	#[default]
	Text,
	/// JSON envelope
	Json,
}

impl std::fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OutputFormat::Text => write!(f, "text"),
			OutputFormat::Json => write!(f, "json"),
		}
	}
}

/// The result envelope for a validation run.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult<T: Serialize> {
	/// Whether the run itself completed (independent of the verdict)
	pub ok: bool,

	/// Command name (always "check" for now)
	pub command: String,

	/// Run data (only present when the run completed)
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,

	/// Error information (only present on failure)
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<CommandError>,

	/// Timing information
	#[serde(skip_serializing_if = "Option::is_none")]
	pub timings: Option<Timings>,

	/// Diagnostics (e.g. a post-redirect URL mismatch warning)
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub diagnostics: Vec<Diagnostic>,
}

/// Error information for failed runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
	/// Error code (e.g. "NAVIGATION_FAILED", "INVALID_INPUT")
	pub code: ErrorCode,

	/// Human-readable error message
	pub message: String,

	/// Additional error details
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<serde_json::Value>,
}

/// Standardized error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	/// Browser failed to launch
	BrowserLaunchFailed,
	/// Navigation to the target URL failed
	NavigationFailed,
	/// Locator query failed against the live page
	SelectorNotFound,
	/// File I/O error
	IoError,
	/// Invalid input provided (browser kind, checks file shape)
	InvalidInput,
	/// Unknown/internal error
	InternalError,
}

impl std::fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ErrorCode::BrowserLaunchFailed => write!(f, "BROWSER_LAUNCH_FAILED"),
			ErrorCode::NavigationFailed => write!(f, "NAVIGATION_FAILED"),
			ErrorCode::SelectorNotFound => write!(f, "SELECTOR_NOT_FOUND"),
			ErrorCode::IoError => write!(f, "IO_ERROR"),
			ErrorCode::InvalidInput => write!(f, "INVALID_INPUT"),
			ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
		}
	}
}

/// Timing information for the run.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timings {
	/// Total duration in milliseconds
	pub duration_ms: u64,
}

impl From<Duration> for Timings {
	fn from(duration: Duration) -> Self {
		Timings {
			duration_ms: duration.as_millis() as u64,
		}
	}
}

/// Diagnostic messages (warnings, info).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
	/// Severity level
	pub level: DiagnosticLevel,

	/// Diagnostic message
	pub message: String,
}

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
	Info,
	Warning,
}

/// Result data for a validation run.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRunData {
	/// The URL that was validated
	pub url: String,
	/// Browser engine used
	pub browser: String,
	/// Aggregate verdict: true iff every outcome matched
	pub passed: bool,
	/// Total number of checks evaluated
	pub total: usize,
	/// Number of matched checks
	pub matched: usize,
	/// Per-check outcomes in declaration order
	pub outcomes: Vec<CheckOutcome>,
}

impl CheckRunData {
	pub fn new(url: impl Into<String>, browser: impl std::fmt::Display, report: CheckReport) -> Self {
		Self {
			url: url.into(),
			browser: browser.to_string(),
			passed: report.passed(),
			total: report.outcomes.len(),
			matched: report.matched_count(),
			outcomes: report.outcomes,
		}
	}
}

/// Builder for constructing run results.
pub struct ResultBuilder<T: Serialize> {
	command: String,
	data: Option<T>,
	error: Option<CommandError>,
	start_time: Instant,
	diagnostics: Vec<Diagnostic>,
}

impl<T: Serialize> ResultBuilder<T> {
	pub fn new(command: impl Into<String>) -> Self {
		Self {
			command: command.into(),
			data: None,
			error: None,
			start_time: Instant::now(),
			diagnostics: Vec::new(),
		}
	}

	/// Set the run data.
	pub fn data(mut self, data: T) -> Self {
		self.data = Some(data);
		self
	}

	/// Set an error.
	pub fn error(mut self, error: CommandError) -> Self {
		self.error = Some(error);
		self
	}

	/// Add a diagnostic.
	pub fn diagnostic(mut self, level: DiagnosticLevel, message: impl Into<String>) -> Self {
		self.diagnostics.push(Diagnostic {
			level,
			message: message.into(),
		});
		self
	}

	/// Build the final result.
	pub fn build(self) -> CommandResult<T> {
		let ok = self.error.is_none() && self.data.is_some();

		CommandResult {
			ok,
			command: self.command,
			data: self.data,
			error: self.error,
			timings: Some(Timings::from(self.start_time.elapsed())),
			diagnostics: self.diagnostics,
		}
	}
}

/// Print a run result to stdout in the specified format.
pub fn print_result<T: Serialize>(result: &CommandResult<T>, format: OutputFormat) {
	match format {
		OutputFormat::Json => {
			if let Ok(json) = serde_json::to_string_pretty(result) {
				println!("{json}");
			}
		}
		OutputFormat::Text => {
			if let Some(ref error) = result.error {
				print_error_stderr(error);
			}
			for diag in &result.diagnostics {
				let prefix = match diag.level {
					DiagnosticLevel::Info => "info",
					DiagnosticLevel::Warning => "warning",
				};
				eprintln!("[{prefix}] {}", diag.message);
			}
		}
	}
}

/// Print an error to stderr in human-readable format.
pub fn print_error_stderr(error: &CommandError) {
	eprintln!("Error [{}]: {}", error.code, error.message);
}

/// Print one human-readable progress line for an outcome.
pub fn print_outcome_line(outcome: &CheckOutcome) {
	let mut stdout = io::stdout().lock();

	match &outcome.status {
		CheckStatus::Matched => {
			let _ = writeln!(
				stdout,
				"{} {} - text matches: {:?}",
				"ok".green().bold(),
				outcome.description,
				outcome.actual_text.as_deref().unwrap_or_default()
			);
		}
		CheckStatus::NotVisible => {
			let _ = writeln!(
				stdout,
				"{} {} - element is not visible ({})",
				"fail".red().bold(),
				outcome.description,
				outcome.selector
			);
		}
		CheckStatus::TextMismatch => {
			let _ = writeln!(
				stdout,
				"{} {} - text mismatch: expected {:?}, got {:?}",
				"fail".red().bold(),
				outcome.description,
				outcome.expected_text,
				outcome.actual_text.as_deref().unwrap_or_default()
			);
		}
		CheckStatus::ResolutionError { message } => {
			let _ = writeln!(
				stdout,
				"{} {} - could not resolve {}: {message}",
				"fail".red().bold(),
				outcome.description,
				outcome.selector
			);
		}
	}
}

/// Print the final human-readable summary.
pub fn print_summary(data: &CheckRunData) {
	let mut stdout = io::stdout().lock();

	let verdict = if data.passed {
		"PASSED".green().bold()
	} else {
		"FAILED".red().bold()
	};
	let _ = writeln!(
		stdout,
		"\n{verdict}: {}/{} checks passed on {}",
		data.matched, data.total, data.url
	);
}
