//! Custom element registry.
//!
//! Each [`Document`] owns one registry. Defining a name attaches a constructor
//! that runs whenever the document creates an element with that tag; whatever
//! the constructor returns becomes the element's custom state (see
//! [`Element::custom_state`]).

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use super::document::Document;
use super::element::Element;
use crate::error::DomError;
use crate::{debug_log, info_log};

/// Constructor run for every element created with a defined custom tag.
pub type ElementConstructor = Rc<dyn Fn(&Document, &Element) -> Rc<dyn Any>>;

/// Names the HTML standard reserves even though they contain a hyphen.
const RESERVED_NAMES: &[&str] = &[
	"annotation-xml",
	"color-profile",
	"font-face",
	"font-face-src",
	"font-face-uri",
	"font-face-format",
	"font-face-name",
	"missing-glyph",
];

/// Returns `true` if `name` is usable as a custom element name.
///
/// The name must start with a lowercase ASCII letter, contain a hyphen, consist
/// of lowercase ASCII letters, digits, `-`, `.` and `_`, and not be reserved.
pub fn is_valid_custom_element_name(name: &str) -> bool {
	let mut chars = name.chars();
	let starts_lowercase = chars.next().is_some_and(|c| c.is_ascii_lowercase());
	starts_lowercase
		&& name.contains('-')
		&& name
			.chars()
			.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_'))
		&& !RESERVED_NAMES.contains(&name)
}

/// Registry of custom element definitions owned by a [`Document`].
#[derive(Default)]
pub struct CustomElementRegistry {
	definitions: RefCell<IndexMap<String, ElementConstructor>>,
}

impl CustomElementRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Defines a custom element.
	///
	/// # Errors
	///
	/// Returns [`DomError::InvalidCustomElementName`] for an invalid name and
	/// [`DomError::AlreadyDefined`] when the name is taken.
	pub fn define<F>(&self, name: &str, constructor: F) -> Result<(), DomError>
	where
		F: Fn(&Document, &Element) -> Rc<dyn Any> + 'static,
	{
		if !is_valid_custom_element_name(name) {
			return Err(DomError::InvalidCustomElementName(name.to_string()));
		}
		let mut definitions = self.definitions.borrow_mut();
		if definitions.contains_key(name) {
			return Err(DomError::AlreadyDefined(name.to_string()));
		}
		definitions.insert(name.to_string(), Rc::new(constructor));
		info_log!("custom element <{}> defined", name);
		Ok(())
	}

	/// Defines a custom element unless the name is already taken.
	///
	/// Returns `true` when this call registered the definition and `false` when
	/// an earlier definition is kept.
	///
	/// # Errors
	///
	/// Returns [`DomError::InvalidCustomElementName`] for an invalid name.
	pub fn ensure_defined<F>(&self, name: &str, constructor: F) -> Result<bool, DomError>
	where
		F: Fn(&Document, &Element) -> Rc<dyn Any> + 'static,
	{
		if self.is_defined(name) {
			debug_log!("custom element <{}> already defined", name);
			return Ok(false);
		}
		self.define(name, constructor).map(|()| true)
	}

	/// Returns `true` if `name` is defined.
	pub fn is_defined(&self, name: &str) -> bool {
		self.definitions.borrow().contains_key(name)
	}

	/// Returns the constructor defined for `name`.
	pub fn get(&self, name: &str) -> Option<ElementConstructor> {
		self.definitions.borrow().get(name).cloned()
	}

	/// Returns the defined names in definition order.
	pub fn names(&self) -> Vec<String> {
		self.definitions.borrow().keys().cloned().collect()
	}
}

impl fmt::Debug for CustomElementRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CustomElementRegistry")
			.field("names", &self.names())
			.finish()
	}
}
