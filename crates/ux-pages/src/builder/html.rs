//! HTML Element Builder
//!
//! A fluent API for constructing elements in the global document.
//!
//! ## Design Pattern
//!
//! - **Fluent API**: Method chaining for readable construction
//! - **Tagged attributes**: every attribute is an [`AttrValue`], resolved by kind
//! - **Reactive Binding**: a [`Data`] cell can drive any attribute

use ux_core::Data;

use super::attributes::{AttrValue, Attributes, apply_attribute, bind_attribute};
use crate::dom::{Document, Element, Event, EventHandle, Node};
use crate::error_log;

/// Most elements have 0-2 event listeners in practice
const TYPICAL_EVENT_COUNT: usize = 2;

/// A child passed to the builder.
#[derive(Debug, Clone)]
pub enum Child {
	/// Appended as-is.
	Node(Node),
	/// Appended as a new text node.
	Text(String),
}

impl Child {
	fn into_node(self) -> Node {
		match self {
			Child::Node(node) => node,
			Child::Text(text) => Node::from(text),
		}
	}
}

impl From<Node> for Child {
	fn from(node: Node) -> Self {
		Child::Node(node)
	}
}

impl From<Element> for Child {
	fn from(element: Element) -> Self {
		Child::Node(element.into_node())
	}
}

impl From<&str> for Child {
	fn from(text: &str) -> Self {
		Child::Text(text.to_string())
	}
}

impl From<String> for Child {
	fn from(text: String) -> Self {
		Child::Text(text)
	}
}

macro_rules! text_child_from_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Child {
				fn from(value: $ty) -> Self {
					Child::Text(value.to_string())
				}
			}
		)*
	};
}

text_child_from_display!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Builds a `Vec<Child>` from nodes, elements and text.
///
/// # Example
///
/// ```
/// use ux_pages::builder::html::strong;
/// use ux_pages::children;
///
/// let items = children!["Total: ", strong().text("3").build(), 4];
/// assert_eq!(items.len(), 3);
/// ```
#[macro_export]
macro_rules! children {
	($($child:expr),* $(,)?) => {
		::std::vec![$($crate::builder::Child::from($child)),*]
	};
}

/// HTML element builder with fluent API
///
/// ## Example
///
/// ```
/// use ux_pages::builder::html::button;
///
/// let el = button()
/// 	.class("btn btn-primary")
/// 	.id("submit-button")
/// 	.text("Submit")
/// 	.on_click(|_| {})
/// 	.build();
/// assert_eq!(el.to_html(), r#"<button class="btn btn-primary" id="submit-button">Submit</button>"#);
/// ```
pub struct ElementBuilder {
	/// The element under construction
	element: Element,
	/// Handles of the listeners added through the builder
	event_handles: Vec<EventHandle>,
}

impl ElementBuilder {
	/// Create a new builder from an element
	pub fn new(element: Element) -> Self {
		Self {
			element,
			event_handles: Vec::with_capacity(TYPICAL_EVENT_COUNT),
		}
	}

	/// Create a builder for a new `tag` element of the global document
	///
	/// The tag is not validated.
	pub fn from_tag(tag: &str) -> Self {
		Self::new(Document::global().create_element(tag))
	}

	/// Set the class attribute
	///
	/// Multiple calls will overwrite the previous value.
	/// Use space-separated values for multiple classes.
	pub fn class(self, class: &str) -> Self {
		self.element.set_attribute("class", class);
		self
	}

	/// Set the id attribute
	pub fn id(self, id: &str) -> Self {
		self.element.set_attribute("id", id);
		self
	}

	/// Set the style attribute
	///
	/// ## Example
	///
	/// ```
	/// use ux_pages::builder::html::div;
	///
	/// let el = div().style("color: red").build();
	/// assert_eq!(el.get_attribute("style").as_deref(), Some("color: red"));
	/// ```
	pub fn style(self, style: &str) -> Self {
		self.element.set_attribute("style", style);
		self
	}

	/// Set an attribute of any kind
	///
	/// Literals are set once, [`Data`] cells keep the attribute in sync, and
	/// handlers (see [`on`](super::on)) register a listener for the event the
	/// key names.
	pub fn attr(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
		if let Some(handle) = apply_attribute(&self.element, name, value.into()) {
			self.event_handles.push(handle);
		}
		self
	}

	/// Set every attribute of `attributes`, in order
	pub fn attrs(self, attributes: Attributes) -> Self {
		attributes
			.into_iter()
			.fold(self, |builder, (name, value)| builder.attr(&name, value))
	}

	/// Remove an attribute
	pub fn remove_attr(self, name: &str) -> Self {
		self.element.remove_attribute(name);
		self
	}

	/// Set a reactive attribute bound to a cell
	///
	/// The attribute starts with the cell's current value and is rewritten on
	/// every `set`.
	///
	/// ## Example
	///
	/// ```
	/// use ux_core::Data;
	/// use ux_pages::builder::html::div;
	///
	/// let color = Data::new("red");
	/// let el = div().reactive_attr("data-color", &color).build();
	/// color.set("blue").unwrap();
	/// assert_eq!(el.get_attribute("data-color").as_deref(), Some("blue"));
	/// ```
	pub fn reactive_attr<T>(self, name: &str, data: &Data<T>) -> Self
	where
		T: ToString + Clone + 'static,
	{
		bind_attribute(&self.element, name, data);
		self
	}

	/// Set text content
	///
	/// This will replace all children of the element.
	pub fn text(self, text: &str) -> Self {
		self.element.set_text_content(text);
		self
	}

	/// Append a child
	pub fn child(self, child: impl Into<Child>) -> Self {
		let node = child.into().into_node();
		if let Err(err) = self.element.append_child(&node) {
			error_log!("failed to append child to <{}>: {}", self.element.tag_name(), err);
		}
		self
	}

	/// Append every child of `children`, in order
	pub fn children<I>(self, children: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Child>,
	{
		children.into_iter().fold(self, |builder, child| builder.child(child))
	}

	/// Add an event listener for any event type
	///
	/// For common events, use the convenience methods (`on_click`, `on_input`, etc.).
	pub fn on<F>(mut self, event_type: &str, callback: F) -> Self
	where
		F: Fn(&Event) + 'static,
	{
		let handle = self.element.add_event_listener(event_type, callback);
		self.event_handles.push(handle);
		self
	}

	/// Add a click event listener
	#[inline]
	pub fn on_click<F>(self, callback: F) -> Self
	where
		F: Fn(&Event) + 'static,
	{
		self.on("click", callback)
	}

	/// Add an input event listener
	///
	/// Commonly used with `<input>` and `<textarea>` elements.
	#[inline]
	pub fn on_input<F>(self, callback: F) -> Self
	where
		F: Fn(&Event) + 'static,
	{
		self.on("input", callback)
	}

	/// Add a change event listener
	#[inline]
	pub fn on_change<F>(self, callback: F) -> Self
	where
		F: Fn(&Event) + 'static,
	{
		self.on("change", callback)
	}

	/// Add a submit event listener
	#[inline]
	pub fn on_submit<F>(self, callback: F) -> Self
	where
		F: Fn(&Event) + 'static,
	{
		self.on("submit", callback)
	}

	/// Finalize the builder and return the Element
	pub fn build(self) -> Element {
		self.element
	}

	/// Finalize the builder, also returning the handles of the listeners it added
	pub fn build_with_handles(self) -> (Element, Vec<EventHandle>) {
		(self.element, self.event_handles)
	}
}

/// Creates an element with the given attributes and children.
///
/// Attributes are applied in map order, then children are appended in order.
///
/// # Example
///
/// ```
/// use ux_pages::builder::create_element;
/// use ux_pages::{attrs, children};
///
/// let el = create_element("UL", attrs! { "class" => "list" }, children!["a", "b"]);
/// assert_eq!(el.to_html(), r#"<ul class="list">ab</ul>"#);
/// ```
pub fn create_element(tag: &str, attributes: Attributes, children: Vec<Child>) -> Element {
	ElementBuilder::from_tag(tag)
		.attrs(attributes)
		.children(children)
		.build()
}

/// Macro for defining HTML element creation functions
macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name() -> ElementBuilder {
			ElementBuilder::from_tag($tag)
		}
	};
}

// ============================================================================
// Document metadata
// ============================================================================

define_element!(
	/// Create a `<title>` element
	title, "title"
);

define_element!(
	/// Create a `<meta>` element
	meta, "meta"
);

define_element!(
	/// Create a `<link>` element
	link, "link"
);

define_element!(
	/// Create a `<style>` element
	///
	/// Its text is serialized without escaping.
	style, "style"
);

define_element!(
	/// Create a `<script>` element
	script, "script"
);

// ============================================================================
// Sections and grouping
// ============================================================================

define_element!(
	/// Create a `<div>` element
	///
	/// ## Example
	///
	/// ```
	/// use ux_pages::builder::html::{div, p};
	///
	/// let container = div()
	/// 	.class("container")
	/// 	.child(p().text("Content").build())
	/// 	.build();
	/// assert_eq!(container.child_count(), 1);
	/// ```
	div, "div"
);

define_element!(
	/// Create a `<span>` element
	span, "span"
);

define_element!(
	/// Create a `<p>` element (paragraph)
	p, "p"
);

define_element!(
	/// Create a `<section>` element
	section, "section"
);

define_element!(
	/// Create a `<header>` element
	header, "header"
);

define_element!(
	/// Create a `<footer>` element
	footer, "footer"
);

define_element!(
	/// Create a `<nav>` element
	nav, "nav"
);

define_element!(
	/// Create a `<main>` element
	main, "main"
);

define_element!(
	/// Create an `<article>` element
	article, "article"
);

define_element!(
	/// Create a `<ul>` element
	ul, "ul"
);

define_element!(
	/// Create an `<ol>` element
	ol, "ol"
);

define_element!(
	/// Create an `<li>` element
	li, "li"
);

define_element!(
	/// Create a `<pre>` element
	pre, "pre"
);

define_element!(
	/// Create an `<hr>` element
	hr, "hr"
);

// ============================================================================
// Headings
// ============================================================================

define_element!(
	/// Create an `<h1>` element
	h1, "h1"
);

define_element!(
	/// Create an `<h2>` element
	h2, "h2"
);

define_element!(
	/// Create an `<h3>` element
	h3, "h3"
);

define_element!(
	/// Create an `<h4>` element
	h4, "h4"
);

define_element!(
	/// Create an `<h5>` element
	h5, "h5"
);

define_element!(
	/// Create an `<h6>` element
	h6, "h6"
);

// ============================================================================
// Inline text
// ============================================================================

define_element!(
	/// Create an `<a>` element (hyperlink)
	a, "a"
);

define_element!(
	/// Create a `<strong>` element
	strong, "strong"
);

define_element!(
	/// Create an `<em>` element
	em, "em"
);

define_element!(
	/// Create a `<code>` element
	code, "code"
);

define_element!(
	/// Create a `<br>` element
	br, "br"
);

// ============================================================================
// Forms and media
// ============================================================================

define_element!(
	/// Create a `<form>` element
	form, "form"
);

define_element!(
	/// Create a `<label>` element
	label, "label"
);

define_element!(
	/// Create a `<button>` element
	button, "button"
);

define_element!(
	/// Create an `<input>` element
	///
	/// ## Example
	///
	/// ```
	/// use ux_pages::builder::html::input;
	///
	/// let field = input().attr("type", "text").attr("placeholder", "Enter text...").build();
	/// assert_eq!(field.to_html(), r#"<input type="text" placeholder="Enter text...">"#);
	/// ```
	input, "input"
);

define_element!(
	/// Create a `<textarea>` element
	textarea, "textarea"
);

define_element!(
	/// Create a `<select>` element (dropdown)
	select, "select"
);

define_element!(
	/// Create an `<option>` element
	option, "option"
);

define_element!(
	/// Create an `<img>` element
	img, "img"
);
