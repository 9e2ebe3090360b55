use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_NAVIGATION_TIMEOUT_MS, DEFAULT_SETTLE_MS, DEFAULT_VIEWPORT};
use crate::output::OutputFormat;
use crate::types::BrowserKind;

#[derive(Parser, Debug)]
#[command(name = "uicheck")]
#[command(about = "Declarative UI validation - assert page elements from a checks file")]
#[command(version)]
pub struct Cli {
	/// Target URL to validate
	pub url: String,

	/// YAML file declaring the element checks
	#[arg(short = 'c', long = "checks", value_name = "FILE", default_value = "checks.yaml")]
	pub checks: PathBuf,

	/// Browser to use for the session
	#[arg(short, long, value_enum, default_value = "chromium")]
	pub browser: BrowserKind,

	/// Output format: text (default) or json
	#[arg(short = 'f', long, value_enum, default_value = "text")]
	pub format: OutputFormat,

	/// Navigation timeout in milliseconds
	#[arg(long, value_name = "MS", default_value_t = DEFAULT_NAVIGATION_TIMEOUT_MS)]
	pub timeout_ms: u64,

	/// Viewport width in pixels
	#[arg(long, value_name = "PX", default_value_t = DEFAULT_VIEWPORT.0)]
	pub viewport_width: u32,

	/// Viewport height in pixels
	#[arg(long, value_name = "PX", default_value_t = DEFAULT_VIEWPORT.1)]
	pub viewport_height: u32,

	/// Settle interval after the document finished parsing
	#[arg(long, value_name = "MS", default_value_t = DEFAULT_SETTLE_MS)]
	pub settle_ms: u64,

	/// Run with a visible browser window
	#[arg(long)]
	pub headful: bool,

	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,
}
