use std::path::PathBuf;

use thiserror::Error;

use crate::output::{CommandError, ErrorCode};

pub type Result<T> = std::result::Result<T, CheckError>;

/// Fatal errors for a validation run.
///
/// Per-check failures (hidden element, text mismatch, unresolvable
/// selector) are not errors: they are classified into
/// [`CheckStatus`](crate::checks::CheckStatus) outcomes and never abort
/// the run. Everything here aborts.
#[derive(Debug, Error)]
pub enum CheckError {
	/// Invalid configuration input (browser kind, URL, flags).
	#[error("configuration error: {0}")]
	Config(String),

	/// The checks file could not be read or does not match the
	/// expected shape (top-level `elements` mapping).
	#[error("invalid checks file {}: {message}", path.display())]
	ChecksFile { path: PathBuf, message: String },

	#[error("browser launch failed: {0}")]
	BrowserLaunch(String),

	#[error("navigation failed: {url}")]
	Navigation {
		url: String,
		#[source]
		source: anyhow::Error,
	},

	/// A locator query against the live page failed. Produced by the
	/// page probe; the evaluator maps it to a `ResolutionError` outcome.
	#[error("locator query failed for {selector}: {message}")]
	Locator { selector: String, message: String },

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl CheckError {
	/// Convert this error to a CommandError for structured output.
	pub fn to_command_error(&self) -> CommandError {
		let (code, message, details) = match self {
			CheckError::Config(msg) => (ErrorCode::InvalidInput, msg.clone(), None),
			CheckError::ChecksFile { path, message } => (
				ErrorCode::InvalidInput,
				format!("invalid checks file {}: {message}", path.display()),
				Some(serde_json::json!({ "path": path })),
			),
			CheckError::BrowserLaunch(msg) => (ErrorCode::BrowserLaunchFailed, msg.clone(), None),
			CheckError::Navigation { url, source } => (
				ErrorCode::NavigationFailed,
				format!("Navigation to {url} failed: {source}"),
				Some(serde_json::json!({ "url": url })),
			),
			CheckError::Locator { selector, message } => (
				ErrorCode::SelectorNotFound,
				format!("Locator query failed for {selector}: {message}"),
				Some(serde_json::json!({ "selector": selector })),
			),
			CheckError::Io(err) => (ErrorCode::IoError, err.to_string(), None),
			CheckError::Json(err) => (ErrorCode::InternalError, format!("JSON error: {err}"), None),
		};

		CommandError {
			code,
			message,
			details,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn config_error_maps_to_invalid_input() {
		let err = CheckError::Config("unsupported browser kind: opera".into());
		let cmd = err.to_command_error();
		assert_eq!(cmd.code, ErrorCode::InvalidInput);
		assert!(cmd.message.contains("opera"));
	}

	#[test]
	fn navigation_error_carries_url_details() {
		let err = CheckError::Navigation {
			url: "https://example.com".into(),
			source: anyhow::anyhow!("net::ERR_NAME_NOT_RESOLVED"),
		};
		let cmd = err.to_command_error();
		assert_eq!(cmd.code, ErrorCode::NavigationFailed);
		assert_eq!(
			cmd.details.unwrap(),
			serde_json::json!({ "url": "https://example.com" })
		);
	}

	#[test]
	fn checks_file_error_maps_to_invalid_input() {
		let err = CheckError::ChecksFile {
			path: "locators.yaml".into(),
			message: "missing top-level `elements` key".into(),
		};
		let cmd = err.to_command_error();
		assert_eq!(cmd.code, ErrorCode::InvalidInput);
		assert!(cmd.message.contains("locators.yaml"));
	}

	#[test]
	fn locator_error_maps_to_selector_not_found() {
		let err = CheckError::Locator {
			selector: "#missing".into(),
			message: "page closed".into(),
		};
		assert_eq!(err.to_command_error().code, ErrorCode::SelectorNotFound);
	}
}
