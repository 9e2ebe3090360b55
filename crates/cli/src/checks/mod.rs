//! Declarative element checks loaded from a YAML file.
//!
//! The file declares a top-level `elements` mapping keyed by check
//! name. Each entry names a locator and the text the element must
//! carry:
//!
//! ```yaml
//! elements:
//!   page_title:
//!     locator: "h1.hero"
//!     expected_text: "Welcome back"
//!     description: "hero heading"
//! ```
//!
//! Declaration order is preserved; checks are evaluated and reported
//! in the order they appear in the file.

mod evaluate;
mod outcome;

use std::path::Path;

use serde::Deserialize;

use crate::error::{CheckError, Result};

pub use evaluate::{evaluate_checks, evaluate_one};
pub use outcome::{CheckOutcome, CheckReport, CheckStatus};

/// One declared element check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementCheck {
	/// Key of the entry in the `elements` mapping.
	pub name: String,
	/// Playwright-style locator (CSS, text=, xpath=, ...).
	pub selector: String,
	/// Text the element must carry, compared after trimming.
	pub expected_text: String,
	/// Label used in reports. Defaults to the entry key.
	pub description: String,
}

#[derive(Debug, Deserialize)]
struct ChecksFile {
	elements: serde_yaml_ng::Mapping,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
	locator: String,
	expected_text: String,
	#[serde(default)]
	description: Option<String>,
}

/// Loads and validates a checks file.
///
/// Fails on unreadable files, YAML that does not parse, a missing
/// top-level `elements` mapping, non-string entry keys, and entries
/// missing `locator` or `expected_text`.
pub fn load_checks(path: &Path) -> Result<Vec<ElementCheck>> {
	let contents = std::fs::read_to_string(path).map_err(|err| CheckError::ChecksFile {
		path: path.to_path_buf(),
		message: err.to_string(),
	})?;
	parse_checks(&contents).map_err(|message| CheckError::ChecksFile {
		path: path.to_path_buf(),
		message,
	})
}

fn parse_checks(contents: &str) -> std::result::Result<Vec<ElementCheck>, String> {
	let file: ChecksFile = serde_yaml_ng::from_str(contents)
		.map_err(|err| format!("expected a top-level `elements` mapping: {err}"))?;

	let mut checks = Vec::with_capacity(file.elements.len());
	for (key, value) in file.elements {
		let name = key
			.as_str()
			.ok_or_else(|| format!("element keys must be strings, got {key:?}"))?
			.to_string();
		let entry: RawEntry = serde_yaml_ng::from_value(value)
			.map_err(|err| format!("element `{name}`: {err}"))?;
		checks.push(ElementCheck {
			description: entry.description.unwrap_or_else(|| name.clone()),
			name,
			selector: entry.locator,
			expected_text: entry.expected_text,
		});
	}
	Ok(checks)
}
