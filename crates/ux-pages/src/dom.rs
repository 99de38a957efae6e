//! Document abstraction layer
//!
//! An in-memory document tree standing in for the host's document object.
//! Everything the builders produce lives here: elements with ordered
//! attributes and event listeners, text nodes, open shadow roots, and the
//! custom element registry that upgrades `<ux-if>` / `<ux-for>` on creation.
//!
//! - [`Document`]: owns `<html>`, `<head>`, `<body>`, the registry and the config
//! - [`Node`]: reference-counted handle to any node in the tree
//! - [`Element`]: typed handle to an element node
//! - [`Event`] / [`EventHandle`]: synchronous, non-bubbling event dispatch
//! - [`CustomElementRegistry`]: explicit, document-owned tag registry
//!
//! Trees serialize to HTML through [`Node::to_html`] and [`Document::to_html`].
//!
//! ## Example
//!
//! ```
//! use ux_pages::dom::Document;
//!
//! let doc = Document::new();
//! let p = doc.create_element("p");
//! p.set_attribute("class", "note");
//! p.set_text_content("hello");
//! doc.display([p]);
//!
//! assert_eq!(doc.body().to_html(), r#"<body><p class="note">hello</p></body>"#);
//! ```

mod document;
mod element;
mod event;
mod html;
mod node;
mod registry;

pub use document::{Document, display_element, document};
pub use element::{Element, WeakElement};
pub use event::{Event, EventHandle, EventListener};
pub use node::{Node, NodeType, WeakNode};
pub use registry::{CustomElementRegistry, ElementConstructor, is_valid_custom_element_name};
