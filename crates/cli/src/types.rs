use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::CheckError;

/// Browser engine used for a validation session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
	/// Chromium-based browser (Chrome, Edge)
	#[default]
	Chromium,
	/// Mozilla Firefox
	Firefox,
	/// WebKit (Safari)
	Webkit,
}

impl std::fmt::Display for BrowserKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			BrowserKind::Chromium => write!(f, "chromium"),
			BrowserKind::Firefox => write!(f, "firefox"),
			BrowserKind::Webkit => write!(f, "webkit"),
		}
	}
}

impl std::str::FromStr for BrowserKind {
	type Err = CheckError;

	/// Parses a browser name from configuration input.
	///
	/// Rejection happens here, before any browser resource is acquired,
	/// so an unsupported name never spawns a process.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"chromium" => Ok(BrowserKind::Chromium),
			"firefox" => Ok(BrowserKind::Firefox),
			"webkit" => Ok(BrowserKind::Webkit),
			other => Err(CheckError::Config(format!(
				"unsupported browser kind: {other} (expected chromium, firefox, or webkit)"
			))),
		}
	}
}
