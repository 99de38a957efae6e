//! Control-flow custom elements
//!
//! - `<ux-if>` ([`IfElement`]): shows one of two texts depending on a boolean
//! - `<ux-for>` ([`ForElement`]): renders one child per item of a list cell and
//!   rebuilds all of them whenever the cell is written
//!
//! Both render into a `<div>` inside an open shadow root they attach on
//! creation. Their definitions are registered lazily, per document, the first
//! time one of them is created there; [`register`] does it up front.

pub mod for_node;
pub mod if_node;

pub use for_node::{ForElement, UX_FOR_TAG, ux_for, ux_for_text};
pub use if_node::{IfElement, UX_IF_TAG, ux_if};

use crate::dom::{Document, Element};
use crate::error::DomError;
use crate::error_log;

/// Defines `<ux-if>` and `<ux-for>` in `document` unless already defined.
///
/// # Errors
///
/// Never fails for these names; the error is that of
/// [`CustomElementRegistry::ensure_defined`](crate::dom::CustomElementRegistry::ensure_defined).
pub fn register(document: &Document) -> Result<(), DomError> {
	let registry = document.registry();
	registry.ensure_defined(UX_IF_TAG, if_node::construct)?;
	registry.ensure_defined(UX_FOR_TAG, for_node::construct)?;
	Ok(())
}

/// Creates `tag` in `document`, registering the control-flow elements first.
fn create_registered(document: &Document, tag: &str) -> Element {
	if let Err(err) = register(document) {
		error_log!("failed to register control-flow elements: {}", err);
	}
	document.create_element(tag)
}

/// Attaches an open shadow root to `host` holding a fresh `<div>`, and returns the `<div>`.
fn shadow_container(document: &Document, host: &Element) -> Element {
	let container = document.create_element("div");
	let attached = host
		.attach_shadow()
		.and_then(|root| root.append_child(&container));
	if let Err(err) = attached {
		error_log!("failed to set up <{}> shadow root: {}", host.tag_name(), err);
	}
	container
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_register_is_idempotent() {
		let doc = Document::new();
		assert!(doc.registry().names().is_empty());

		register(&doc).unwrap();
		register(&doc).unwrap();

		assert_eq!(doc.registry().names(), vec!["ux-if".to_string(), "ux-for".to_string()]);
	}

	#[rstest]
	fn test_registered_elements_get_shadow_container() {
		let doc = Document::new();
		register(&doc).unwrap();

		let el = doc.create_element("ux-if");

		let shadow = el.shadow_root().unwrap();
		let container = shadow.first_child().and_then(|node| node.as_element()).unwrap();
		assert_eq!(container.tag_name(), "div");
	}
}
