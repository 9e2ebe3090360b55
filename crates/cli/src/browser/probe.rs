use async_trait::async_trait;

use crate::error::{CheckError, Result};

/// Read-only view of a page, narrowed to what check evaluation needs.
///
/// The evaluator works against this trait so it can run without a
/// browser; tests substitute an in-memory page.
#[async_trait]
pub trait PageProbe: Send + Sync {
	/// Number of elements the raw selector matches.
	async fn locator_count(&self, selector: &str) -> Result<usize>;

	/// Whether the first matched element is visible.
	async fn is_visible(&self, selector: &str) -> Result<bool>;

	/// Text content of the first matched element. `None` when the node
	/// has no text property at all.
	async fn text_content(&self, selector: &str) -> Result<Option<String>>;

	/// Current page URL, after any redirects.
	fn url(&self) -> String;
}

/// [`PageProbe`] over a live engine page.
pub struct LivePage<'a> {
	page: &'a pw::Page,
}

impl<'a> LivePage<'a> {
	pub fn new(page: &'a pw::Page) -> Self {
		Self { page }
	}

	// Locator reads are strict by default and throw on multiple
	// matches; pinning to the first match keeps multi-match selectors
	// usable. Counting still sees the raw selector.
	fn first_match(selector: &str) -> String {
		format!("{selector} >> nth=0")
	}

	fn locator_error(selector: &str, err: pw::Error) -> CheckError {
		CheckError::Locator {
			selector: selector.to_string(),
			message: err.to_string(),
		}
	}
}

#[async_trait]
impl PageProbe for LivePage<'_> {
	async fn locator_count(&self, selector: &str) -> Result<usize> {
		self.page
			.locator(selector)
			.count()
			.await
			.map_err(|e| Self::locator_error(selector, e))
	}

	async fn is_visible(&self, selector: &str) -> Result<bool> {
		self.page
			.locator(&Self::first_match(selector))
			.is_visible()
			.await
			.map_err(|e| Self::locator_error(selector, e))
	}

	async fn text_content(&self, selector: &str) -> Result<Option<String>> {
		self.page
			.locator(&Self::first_match(selector))
			.text_content()
			.await
			.map_err(|e| Self::locator_error(selector, e))
	}

	fn url(&self) -> String {
		self.page.url()
	}
}
