//! In-memory page for browser-free tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::browser::PageProbe;
use crate::error::{CheckError, Result};

#[derive(Debug, Clone)]
struct MockElement {
	text: String,
	visible: bool,
}

/// A [`PageProbe`] backed by a selector map instead of a browser.
pub struct MockPage {
	elements: Mutex<HashMap<String, MockElement>>,
	errors: Mutex<HashMap<String, String>>,
	url: String,
}

impl MockPage {
	pub fn new() -> Self {
		Self {
			elements: Mutex::new(HashMap::new()),
			errors: Mutex::new(HashMap::new()),
			url: "https://example.com".to_string(),
		}
	}

	pub fn with_url(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			..Self::new()
		}
	}

	/// Registers a visible element with the given text.
	pub fn set_element(&self, selector: &str, text: &str) {
		self.elements.lock().unwrap().insert(
			selector.to_string(),
			MockElement {
				text: text.to_string(),
				visible: true,
			},
		);
	}

	/// Registers an element that resolves but is not visible.
	pub fn set_hidden_element(&self, selector: &str, text: &str) {
		self.elements.lock().unwrap().insert(
			selector.to_string(),
			MockElement {
				text: text.to_string(),
				visible: false,
			},
		);
	}

	/// Makes every query against the selector fail.
	pub fn set_error_for_selector(&self, selector: &str, message: &str) {
		self.errors
			.lock()
			.unwrap()
			.insert(selector.to_string(), message.to_string());
	}

	fn fail_if_poisoned(&self, selector: &str) -> Result<()> {
		if let Some(message) = self.errors.lock().unwrap().get(selector) {
			return Err(CheckError::Locator {
				selector: selector.to_string(),
				message: message.clone(),
			});
		}
		Ok(())
	}
}

impl Default for MockPage {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl PageProbe for MockPage {
	async fn locator_count(&self, selector: &str) -> Result<usize> {
		self.fail_if_poisoned(selector)?;
		Ok(usize::from(self.elements.lock().unwrap().contains_key(selector)))
	}

	async fn is_visible(&self, selector: &str) -> Result<bool> {
		self.fail_if_poisoned(selector)?;
		Ok(self
			.elements
			.lock()
			.unwrap()
			.get(selector)
			.is_some_and(|e| e.visible))
	}

	async fn text_content(&self, selector: &str) -> Result<Option<String>> {
		self.fail_if_poisoned(selector)?;
		Ok(self
			.elements
			.lock()
			.unwrap()
			.get(selector)
			.map(|e| e.text.clone()))
	}

	fn url(&self) -> String {
		self.url.clone()
	}
}
