//! Browser session lifecycle for a validation run.
//!
//! A session moves strictly `Idle -> Open -> Closed`. Opening acquires
//! resources in engine order (driver, browser, context, page) and
//! tears down whatever was acquired if any step fails. Closing is
//! idempotent and never fails: teardown errors are logged and
//! swallowed so cleanup cannot mask a run verdict.

use std::mem;
use std::time::Duration;

use pw::{BrowserContextOptions, GotoOptions, LaunchOptions, Playwright, Viewport, WaitUntil};
use tracing::{debug, warn};

use crate::config::RunConfig;
use crate::error::{CheckError, Result};
use crate::types::BrowserKind;

// Flags for unattended runs; meaningful to chromium only.
const CHROMIUM_ARGS: &[&str] = &[
	"--no-sandbox",
	"--disable-dev-shm-usage",
	"--disable-gpu",
	"--disable-web-security",
	"--disable-features=VizDisplayCompositor",
];

pub struct ValidationSession {
	state: SessionState,
}

enum SessionState {
	Idle,
	Open(Box<OpenHandles>),
	Closed,
}

struct OpenHandles {
	// Dropping the driver kills the engine process; hold it for the
	// session lifetime even though nothing reads it after open.
	_playwright: Playwright,
	browser: pw::Browser,
	context: pw::BrowserContext,
	page: pw::Page,
}

impl ValidationSession {
	pub fn new() -> Self {
		Self {
			state: SessionState::Idle,
		}
	}

	/// Launches the browser, navigates to the target URL, and waits
	/// for the document plus a fixed settle interval.
	///
	/// On any failure the resources acquired so far are torn down
	/// before the error is returned; the session ends up `Closed`.
	pub async fn open(&mut self, config: &RunConfig) -> Result<()> {
		if !matches!(self.state, SessionState::Idle) {
			return Err(CheckError::Config(
				"session already opened; a session cannot be reused".into(),
			));
		}

		// A failed open lands in Closed, never back in Idle; retrying
		// requires a fresh session.
		match Self::acquire(config).await {
			Ok(handles) => {
				self.state = SessionState::Open(handles);
				Ok(())
			}
			Err(err) => {
				self.state = SessionState::Closed;
				Err(err)
			}
		}
	}

	async fn acquire(config: &RunConfig) -> Result<Box<OpenHandles>> {
		debug!(browser = %config.browser_kind, "starting engine driver");
		let playwright = Playwright::launch()
			.await
			.map_err(|e| CheckError::BrowserLaunch(e.to_string()))?;

		let mut launch_options = LaunchOptions::default().headless(config.headless);
		if config.browser_kind == BrowserKind::Chromium {
			launch_options = launch_options.args(CHROMIUM_ARGS.iter().map(|a| a.to_string()).collect());
		}

		let browser_type = match config.browser_kind {
			BrowserKind::Chromium => playwright.chromium(),
			BrowserKind::Firefox => playwright.firefox(),
			BrowserKind::Webkit => playwright.webkit(),
		};
		let browser = browser_type
			.launch_with_options(launch_options)
			.await
			.map_err(|e| CheckError::BrowserLaunch(e.to_string()))?;

		let context_options = BrowserContextOptions::builder()
			.viewport(Viewport {
				width: config.viewport_width,
				height: config.viewport_height,
			})
			.build();
		let context = match browser.new_context_with_options(context_options).await {
			Ok(context) => context,
			Err(err) => {
				close_browser(&browser).await;
				return Err(CheckError::BrowserLaunch(format!("context creation failed: {err}")));
			}
		};

		let page = match context.new_page().await {
			Ok(page) => page,
			Err(err) => {
				close_context(&context).await;
				close_browser(&browser).await;
				return Err(CheckError::BrowserLaunch(format!("page creation failed: {err}")));
			}
		};

		// Waiting for network idle stalls forever on pages with
		// long-polling or websockets; wait for the document instead
		// and give client-side rendering a fixed settle interval.
		let goto_options = GotoOptions::new()
			.wait_until(WaitUntil::DomContentLoaded)
			.timeout(Duration::from_millis(config.navigation_timeout_ms));
		debug!(url = %config.target_url, timeout_ms = config.navigation_timeout_ms, "navigating");
		if let Err(err) = page.goto(&config.target_url, Some(goto_options)).await {
			close_page(&page).await;
			close_context(&context).await;
			close_browser(&browser).await;
			return Err(CheckError::Navigation {
				url: config.target_url.clone(),
				source: anyhow::Error::new(err),
			});
		}

		if config.settle_ms > 0 {
			tokio::time::sleep(Duration::from_millis(config.settle_ms)).await;
		}

		let resolved = page.url();
		if !urls_equivalent(&resolved, &config.target_url) {
			warn!(requested = %config.target_url, resolved = %resolved, "page URL differs from requested URL");
		}

		Ok(Box::new(OpenHandles {
			_playwright: playwright,
			browser,
			context,
			page,
		}))
	}

	/// The live page, when the session is open.
	pub fn page(&self) -> Option<&pw::Page> {
		match &self.state {
			SessionState::Open(handles) => Some(&handles.page),
			_ => None,
		}
	}

	/// The URL the page actually ended up on, when the session is open.
	pub fn resolved_url(&self) -> Option<String> {
		self.page().map(|p| p.url())
	}

	/// Tears down page, context, and browser, in that order.
	///
	/// Safe to call in any state and any number of times. Teardown
	/// failures are logged, never surfaced.
	pub async fn close(&mut self) {
		let state = mem::replace(&mut self.state, SessionState::Closed);
		if let SessionState::Open(handles) = state {
			close_page(&handles.page).await;
			close_context(&handles.context).await;
			close_browser(&handles.browser).await;
			debug!("session closed");
		}
	}
}

impl Default for ValidationSession {
	fn default() -> Self {
		Self::new()
	}
}

async fn close_page(page: &pw::Page) {
	if let Err(err) = page.close().await {
		warn!(error = %err, "page close failed");
	}
}

async fn close_context(context: &pw::BrowserContext) {
	if let Err(err) = context.close().await {
		warn!(error = %err, "context close failed");
	}
}

async fn close_browser(browser: &pw::Browser) {
	if let Err(err) = browser.close().await {
		warn!(error = %err, "browser close failed");
	}
}

/// Compares two URLs ignoring a single trailing slash.
///
/// Servers commonly redirect `/path` to `/path/`; that alone is not a
/// meaningful mismatch.
pub fn urls_equivalent(a: &str, b: &str) -> bool {
	a.trim_end_matches('/') == b.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn trailing_slash_does_not_count_as_a_mismatch() {
		assert!(urls_equivalent("https://example.com/", "https://example.com"));
		assert!(urls_equivalent("https://example.com/a/", "https://example.com/a"));
		assert!(urls_equivalent("https://example.com", "https://example.com"));
	}

	#[test]
	fn real_redirects_are_mismatches() {
		assert!(!urls_equivalent("https://example.com/login", "https://example.com"));
		assert!(!urls_equivalent("http://example.com", "https://example.com"));
	}

	#[tokio::test]
	async fn close_before_open_is_a_no_op() {
		let mut session = ValidationSession::new();
		session.close().await;
		session.close().await;
		assert!(session.page().is_none());
	}

	// Needs a Playwright driver installation.
	#[tokio::test]
	#[ignore]
	async fn failed_open_is_terminal() {
		let mut session = ValidationSession::new();
		let mut config = RunConfig::new("http://localhost:1/");
		config.navigation_timeout_ms = 3_000;

		assert!(session.open(&config).await.is_err());
		assert!(session.page().is_none());

		let err = session.open(&config).await.unwrap_err();
		assert!(matches!(err, CheckError::Config(_)));
	}

	#[tokio::test]
	async fn reopening_a_closed_session_is_rejected() {
		let mut session = ValidationSession::new();
		session.close().await;

		let config = RunConfig::new("https://example.com");
		let err = session.open(&config).await.unwrap_err();
		assert!(matches!(err, CheckError::Config(_)));
	}
}
