use crate::cli::Cli;
use crate::types::BrowserKind;

/// Default navigation timeout in milliseconds.
pub const DEFAULT_NAVIGATION_TIMEOUT_MS: u64 = 30_000;

/// Default interval to let client-side rendering settle after the
/// document has finished parsing.
pub const DEFAULT_SETTLE_MS: u64 = 500;

/// Default viewport dimensions.
pub const DEFAULT_VIEWPORT: (u32, u32) = (1280, 720);

/// Fully owned run configuration.
///
/// This type is the stable handoff between the CLI boundary and the
/// session controller; there is no process-wide configuration state.
#[derive(Debug, Clone)]
pub struct RunConfig {
	/// Absolute URL the session navigates to.
	pub target_url: String,
	/// Browser engine used for launch.
	pub browser_kind: BrowserKind,
	/// Viewport width in pixels.
	pub viewport_width: u32,
	/// Viewport height in pixels.
	pub viewport_height: u32,
	/// Upper bound for the initial navigation.
	pub navigation_timeout_ms: u64,
	/// Post-navigation settle interval before evaluation starts.
	pub settle_ms: u64,
	/// Whether the browser launches headless.
	pub headless: bool,
}

impl RunConfig {
	/// Creates a baseline config with default browser behavior.
	pub fn new(target_url: impl Into<String>) -> Self {
		Self {
			target_url: target_url.into(),
			browser_kind: BrowserKind::default(),
			viewport_width: DEFAULT_VIEWPORT.0,
			viewport_height: DEFAULT_VIEWPORT.1,
			navigation_timeout_ms: DEFAULT_NAVIGATION_TIMEOUT_MS,
			settle_ms: DEFAULT_SETTLE_MS,
			headless: true,
		}
	}

	/// Builds the effective configuration from parsed CLI arguments.
	pub fn from_cli(cli: &Cli) -> Self {
		Self {
			target_url: cli.url.clone(),
			browser_kind: cli.browser,
			viewport_width: cli.viewport_width,
			viewport_height: cli.viewport_height,
			navigation_timeout_ms: cli.timeout_ms,
			settle_ms: cli.settle_ms,
			headless: !cli.headful,
		}
	}
}
