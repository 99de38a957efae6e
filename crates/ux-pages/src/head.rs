//! Page-level setters and getters
//!
//! Title, named `<meta>` tags, the favicon and stylesheets. Setters create the
//! element in `<head>` the first time and update it afterwards, so calling one
//! twice never duplicates a tag.
//!
//! Each operation exists as a [`Document`] method and as a free function on
//! the thread's global document.
//!
//! ## Example
//!
//! ```
//! use ux_pages::head::{meta, set_meta, set_title, title};
//!
//! set_title("Dashboard");
//! set_meta("description", "Live numbers");
//! set_meta("description", "Live numbers, updated");
//!
//! assert_eq!(title(), "Dashboard");
//! assert_eq!(meta("description").as_deref(), Some("Live numbers, updated"));
//! assert_eq!(meta("author"), None);
//! ```

use crate::dom::{Document, Element};
use crate::error_log;

impl Document {
	/// Sets the text of the `<title>` element, creating it in `<head>` if needed.
	pub fn set_title(&self, title: &str) {
		let element = self
			.find_element(|el| el.tag_name() == "title")
			.unwrap_or_else(|| self.append_to_head("title", &[]));
		element.set_text_content(title);
	}

	/// Returns the text of the `<title>` element, or an empty string.
	pub fn title(&self) -> String {
		self.find_element(|el| el.tag_name() == "title")
			.map(|el| el.text_content())
			.unwrap_or_default()
	}

	/// Sets the `content` of `<meta name="{name}">`, creating it in `<head>` if needed.
	pub fn set_meta(&self, name: &str, content: &str) {
		match self.find_meta(name) {
			Some(element) => element.set_attribute("content", content),
			None => {
				self.append_to_head("meta", &[("name", name), ("content", content)]);
			}
		}
	}

	/// Returns the `content` of `<meta name="{name}">`.
	pub fn meta(&self, name: &str) -> Option<String> {
		self.find_meta(name)?.get_attribute("content")
	}

	/// Sets the `href` of `<link rel="icon">`, creating it in `<head>` if needed.
	pub fn set_favicon(&self, url: &str) {
		match self.find_favicon() {
			Some(element) => element.set_attribute("href", url),
			None => {
				self.append_to_head("link", &[("rel", "icon"), ("href", url)]);
			}
		}
	}

	/// Returns the `href` of `<link rel="icon">`.
	pub fn favicon(&self) -> Option<String> {
		self.find_favicon()?.get_attribute("href")
	}

	/// Displays a `<style>` element holding `code`.
	pub fn css(&self, code: &str) -> Element {
		let style = self.create_element("style");
		style.set_text_content(code);
		self.display([style.clone()]);
		style
	}

	/// Displays a `<link rel="stylesheet">` pointing at `url`.
	pub fn src_css(&self, url: &str) -> Element {
		let link = self.create_element("link");
		link.set_attribute("rel", "stylesheet");
		link.set_attribute("href", url);
		self.display([link.clone()]);
		link
	}

	fn find_meta(&self, name: &str) -> Option<Element> {
		self.find_element(|el| el.tag_name() == "meta" && el.get_attribute("name").as_deref() == Some(name))
	}

	fn find_favicon(&self) -> Option<Element> {
		self.find_element(|el| el.tag_name() == "link" && el.get_attribute("rel").as_deref() == Some("icon"))
	}

	fn append_to_head(&self, tag: &str, attributes: &[(&str, &str)]) -> Element {
		let element = self.create_element(tag);
		for (name, value) in attributes {
			element.set_attribute(name, value);
		}
		if let Err(err) = self.head().append_child(&element) {
			error_log!("failed to append <{}> to <head>: {}", tag, err);
		}
		element
	}
}

/// Sets the global document's title.
pub fn set_title(title: &str) {
	Document::global().set_title(title);
}

/// Returns the global document's title.
pub fn title() -> String {
	Document::global().title()
}

/// Sets a named `<meta>` tag of the global document.
pub fn set_meta(name: &str, content: &str) {
	Document::global().set_meta(name, content);
}

/// Returns the content of a named `<meta>` tag of the global document.
pub fn meta(name: &str) -> Option<String> {
	Document::global().meta(name)
}

/// Sets the global document's favicon URL.
pub fn set_favicon(url: &str) {
	Document::global().set_favicon(url);
}

/// Returns the global document's favicon URL.
pub fn favicon() -> Option<String> {
	Document::global().favicon()
}

/// Displays a `<style>` element in the global document.
///
/// # Example
///
/// ```
/// use ux_pages::dom::document;
/// use ux_pages::head::css;
///
/// css("body { margin: 0; }");
/// assert_eq!(document().body().to_html(), "<body><style>body { margin: 0; }</style></body>");
/// ```
pub fn css(code: &str) -> Element {
	Document::global().css(code)
}

/// Displays a `<link rel="stylesheet">` in the global document.
pub fn src_css(url: &str) -> Element {
	Document::global().src_css(url)
}
