//! The host document.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::element::Element;
use super::node::Node;
use super::registry::CustomElementRegistry;
use crate::config::UxConfig;
use crate::error_log;

struct DocumentInner {
	root: Element,
	head: Element,
	body: Element,
	registry: CustomElementRegistry,
	config: Rc<UxConfig>,
}

/// Handle to a document: the `<html>` tree, its custom element registry and
/// its configuration.
///
/// Cloning a `Document` yields another handle to the same document. Each
/// thread has one global document, used by the free-function API
/// ([`display_element`], the widget constructors, the page setters); see
/// [`Document::global`] and [`Document::install`].
#[derive(Clone)]
pub struct Document {
	inner: Rc<DocumentInner>,
}

thread_local! {
	static GLOBAL_DOCUMENT: RefCell<Option<Document>> = const { RefCell::new(None) };
}

impl Document {
	/// Creates an empty document (`<html><head></head><body></body></html>`)
	/// with the default configuration.
	pub fn new() -> Self {
		Self::with_config(UxConfig::default())
	}

	/// Creates an empty document with the given configuration.
	pub fn with_config(config: UxConfig) -> Self {
		let root = Element::new("html");
		let head = Element::new("head");
		let body = Element::new("body");
		for section in [&head, &body] {
			if let Err(err) = root.append_child(section) {
				error_log!("failed to assemble document: {}", err);
			}
		}
		Self {
			inner: Rc::new(DocumentInner {
				root,
				head,
				body,
				registry: CustomElementRegistry::new(),
				config: Rc::new(config),
			}),
		}
	}

	/// Returns this thread's global document, creating a default one on first use.
	pub fn global() -> Self {
		GLOBAL_DOCUMENT.with(|slot| slot.borrow_mut().get_or_insert_with(Document::new).clone())
	}

	/// Makes `document` this thread's global document.
	///
	/// Returns the previously installed document, if any.
	pub fn install(document: Document) -> Option<Document> {
		GLOBAL_DOCUMENT.with(|slot| slot.borrow_mut().replace(document))
	}

	/// Creates an element.
	///
	/// The tag is lower-cased. When the registry defines the tag, its
	/// constructor runs and its result becomes the element's custom state.
	pub fn create_element(&self, tag: &str) -> Element {
		let tag = tag.to_ascii_lowercase();
		let element = Element::new(&tag);
		if let Some(constructor) = self.inner.registry.get(&tag) {
			let state = constructor(self, &element);
			element.set_custom_state(state);
		}
		element
	}

	/// Creates a text node.
	pub fn create_text_node(&self, text: &str) -> Node {
		Node::new_text(text)
	}

	/// Returns the `<html>` element.
	pub fn document_element(&self) -> Element {
		self.inner.root.clone()
	}

	/// Returns the `<head>` element.
	pub fn head(&self) -> Element {
		self.inner.head.clone()
	}

	/// Returns the `<body>` element.
	pub fn body(&self) -> Element {
		self.inner.body.clone()
	}

	/// Returns the custom element registry.
	pub fn registry(&self) -> &CustomElementRegistry {
		&self.inner.registry
	}

	/// Returns the configuration.
	pub fn config(&self) -> Rc<UxConfig> {
		self.inner.config.clone()
	}

	/// Appends each node to `<body>`, in order.
	pub fn display<I, N>(&self, nodes: I)
	where
		I: IntoIterator<Item = N>,
		N: Into<Node>,
	{
		for node in nodes {
			let node = node.into();
			if let Err(err) = self.inner.body.append_child(&node) {
				error_log!("failed to display node: {}", err);
			}
		}
	}

	/// Returns the first element, in document order, for which `predicate` holds.
	pub fn find_element(&self, mut predicate: impl FnMut(&Element) -> bool) -> Option<Element> {
		self.inner.root.find_map(&mut |node: &Node| {
			node.as_element().filter(|element| predicate(element))
		})
	}

	/// Returns `true` if both handles point to the same document.
	pub fn ptr_eq(&self, other: &Document) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}
}

impl Default for Document {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Document {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Document")
			.field("head", &self.inner.head.child_count())
			.field("body", &self.inner.body.child_count())
			.field("registry", &self.inner.registry)
			.finish()
	}
}

/// Returns this thread's global document.
pub fn document() -> Document {
	Document::global()
}

/// Appends each node to the global document's `<body>`, in order.
///
/// # Example
///
/// ```
/// use ux_pages::builder::html::p;
/// use ux_pages::dom::{display_element, document};
///
/// display_element([p().text("one").build(), p().text("two").build()]);
/// assert_eq!(document().body().text_content(), "onetwo");
/// ```
pub fn display_element<I, N>(nodes: I)
where
	I: IntoIterator<Item = N>,
	N: Into<Node>,
{
	Document::global().display(nodes);
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::any::Any;

	#[rstest]
	fn test_new_document_structure() {
		let doc = Document::new();
		let root = doc.document_element();
		assert_eq!(root.tag_name(), "html");
		let sections: Vec<String> = root
			.child_elements()
			.iter()
			.map(|el| el.tag_name().to_string())
			.collect();
		assert_eq!(sections, vec!["head", "body"]);
	}

	#[rstest]
	fn test_create_element_lowercases_tag() {
		let doc = Document::new();
		assert_eq!(doc.create_element("DIV").tag_name(), "div");
	}

	#[rstest]
	fn test_create_element_runs_registered_constructor() {
		let doc = Document::new();
		doc.registry()
			.define("x-greeting", |_: &Document, el: &Element| -> Rc<dyn Any> {
				el.set_attribute("upgraded", "yes");
				Rc::new(String::from("hello"))
			})
			.unwrap();

		let el = doc.create_element("x-greeting");

		assert_eq!(el.get_attribute("upgraded").as_deref(), Some("yes"));
		assert_eq!(el.custom_state::<String>().as_deref().map(String::as_str), Some("hello"));
		assert!(doc.create_element("div").custom_state::<String>().is_none());
	}

	#[rstest]
	fn test_display_appends_in_call_order() {
		let doc = Document::new();
		let first = doc.create_element("p");
		let second = doc.create_element("p");

		doc.display([first.clone(), second.clone()]);

		let children = doc.body().children();
		assert_eq!(children.len(), 2);
		assert!(children[0].ptr_eq(&first));
		assert!(children[1].ptr_eq(&second));
	}

	#[rstest]
	fn test_global_document_is_per_thread_and_replaceable() {
		let original = Document::global();
		assert!(original.ptr_eq(&document()));

		let replacement = Document::new();
		let previous = Document::install(replacement.clone());

		assert!(previous.is_some_and(|doc| doc.ptr_eq(&original)));
		assert!(Document::global().ptr_eq(&replacement));
	}

	#[rstest]
	fn test_find_element_in_document_order() {
		let doc = Document::new();
		let first = doc.create_element("meta");
		first.set_attribute("name", "a");
		let second = doc.create_element("meta");
		second.set_attribute("name", "b");
		doc.head().append_child(&first).unwrap();
		doc.body().append_child(&second).unwrap();

		let found = doc.find_element(|el| el.tag_name() == "meta");
		assert!(found.is_some_and(|el| el.ptr_eq(&first)));

		let named = doc.find_element(|el| el.get_attribute("name").as_deref() == Some("b"));
		assert!(named.is_some_and(|el| el.ptr_eq(&second)));

		assert!(doc.find_element(|el| el.tag_name() == "title").is_none());
	}
}
