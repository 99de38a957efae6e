//! Prebuilt widget constructors
//!
//! Each constructor creates one element with a fixed tag and a default inline
//! style taken from the global document's [`UxConfig`](crate::config::UxConfig).
//! The caller's `opts` are merged over the defaults, so any attribute,
//! `style` included, can be overridden.
//!
//! ## Example
//!
//! ```
//! use ux_core::Data;
//! use ux_pages::attrs;
//! use ux_pages::widgets::{button, heading};
//!
//! let clicks = Data::new(0);
//! let counter = clicks.clone();
//! let go = button("Go", move |_| { let _ = counter.update(|n| *n += 1); }, attrs! { "id" => "go" });
//! go.click();
//! assert_eq!(clicks.get(), 1);
//!
//! let title = heading(2, "Welcome", attrs! { "style" => "margin: 0;" });
//! assert_eq!(title.to_html(), r#"<h2 style="margin: 0;">Welcome</h2>"#);
//! ```

use std::fmt;

use crate::attrs;
use crate::builder::{AttrValue, Attributes, Child, create_element, on};
use crate::dom::{Document, Element, Event};
use crate::warn_log;

/// Error returned by [`HeadingLevel::new`] for a level outside `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("heading level must be between 1 and 6, got {0}")]
pub struct InvalidHeadingLevel(pub i32);

/// A heading level between 1 and 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
	/// `<h1>`
	pub const H1: HeadingLevel = HeadingLevel(1);

	/// Checks that `level` is between 1 and 6.
	///
	/// # Errors
	///
	/// Returns [`InvalidHeadingLevel`] otherwise, negative levels included.
	pub fn new(level: i32) -> Result<Self, InvalidHeadingLevel> {
		match u8::try_from(level) {
			Ok(level @ 1..=6) => Ok(Self(level)),
			_ => Err(InvalidHeadingLevel(level)),
		}
	}

	/// Like [`HeadingLevel::new`], but falls back to level 1 with a warning.
	pub fn clamped(level: i32) -> Self {
		Self::new(level).unwrap_or_else(|err| {
			warn_log!("{}; defaulting to level 1", err);
			Self::H1
		})
	}

	/// Returns the level as a number.
	pub fn get(self) -> u8 {
		self.0
	}

	/// Returns the tag name, `"h1"` to `"h6"`.
	pub fn tag(self) -> String {
		format!("h{}", self.0)
	}
}

impl fmt::Display for HeadingLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "h{}", self.0)
	}
}

impl TryFrom<i32> for HeadingLevel {
	type Error = InvalidHeadingLevel;

	fn try_from(level: i32) -> Result<Self, Self::Error> {
		Self::new(level)
	}
}

impl TryFrom<u8> for HeadingLevel {
	type Error = InvalidHeadingLevel;

	fn try_from(level: u8) -> Result<Self, Self::Error> {
		Self::new(i32::from(level))
	}
}

/// Merges `opts` over `defaults` and creates the element.
fn widget(tag: &str, mut defaults: Attributes, opts: Attributes, children: Vec<Child>) -> Element {
	defaults.merge(opts);
	create_element(tag, defaults, children)
}

/// Creates a `<button>` showing `text` that calls `on_click` when clicked.
pub fn button<F>(text: impl Into<Child>, on_click: F, opts: Attributes) -> Element
where
	F: Fn(&Event) + 'static,
{
	button_with_children(text, on_click, opts, Vec::<Child>::new())
}

/// Like [`button`], with `children` appended after `text`.
///
/// # Example
///
/// ```
/// use ux_pages::attrs;
/// use ux_pages::builder::Child;
/// use ux_pages::builder::html::span;
/// use ux_pages::widgets::button_with_children;
///
/// let hint = span().text(" (ctrl+s)").build();
/// let save = button_with_children("Save", |_| {}, attrs! {}, [Child::from(hint)]);
/// assert_eq!(save.text_content(), "Save (ctrl+s)");
/// ```
pub fn button_with_children<F, I>(text: impl Into<Child>, on_click: F, opts: Attributes, children: I) -> Element
where
	F: Fn(&Event) + 'static,
	I: IntoIterator<Item = Child>,
{
	let config = Document::global().config();
	widget(
		"button",
		attrs! { "onclick" => on(on_click), "style" => &config.styles.button },
		opts,
		std::iter::once(text.into()).chain(children).collect(),
	)
}

/// Creates an `<input>` of the given type.
///
/// `value` may be a literal or a [`Data`](ux_core::Data) cell. `on_input`
/// receives the element's current `value` on every `input` event.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use ux_pages::builder::Attributes;
/// use ux_pages::widgets::input;
///
/// let seen = Rc::new(RefCell::new(String::new()));
/// let sink = seen.clone();
/// let field = input("text", "hello", move |value| *sink.borrow_mut() = value.to_string(), Attributes::new());
///
/// field.dispatch_event("input");
/// assert_eq!(*seen.borrow(), "hello");
/// ```
pub fn input<F>(input_type: &str, value: impl Into<AttrValue>, on_input: F, opts: Attributes) -> Element
where
	F: Fn(&str) + 'static,
{
	let config = Document::global().config();
	let mut defaults = attrs! { "type" => input_type };
	defaults.insert("value", value);
	defaults.insert("oninput", on(move |event| on_input(&event.target().value())));
	defaults.insert("style", &config.styles.input);
	widget("input", defaults, opts, Vec::new())
}

/// Creates an `<a>` pointing at `href`.
pub fn link(href: &str, text: impl Into<Child>, opts: Attributes) -> Element {
	let config = Document::global().config();
	widget(
		"a",
		attrs! { "href" => href, "style" => &config.styles.link },
		opts,
		vec![text.into()],
	)
}

/// Same as [`link`].
pub fn a(href: &str, text: impl Into<Child>, opts: Attributes) -> Element {
	link(href, text, opts)
}

/// Creates an `<img>`.
pub fn image(src: &str, alt: &str, opts: Attributes) -> Element {
	let config = Document::global().config();
	widget(
		"img",
		attrs! { "src" => src, "alt" => alt, "style" => &config.styles.image },
		opts,
		Vec::new(),
	)
}

/// Creates an empty `<div>`.
pub fn container(opts: Attributes) -> Element {
	let config = Document::global().config();
	widget("div", attrs! { "style" => &config.styles.container }, opts, Vec::new())
}

/// Creates an `<h1>` to `<h6>` heading.
///
/// A level outside `1..=6`, negative ones included, falls back to `<h1>` and
/// logs a warning.
pub fn heading(level: i32, text: impl Into<Child>, opts: Attributes) -> Element {
	let level = HeadingLevel::clamped(level);
	let config = Document::global().config();
	widget(
		&level.tag(),
		attrs! { "style" => &config.styles.heading },
		opts,
		vec![text.into()],
	)
}
