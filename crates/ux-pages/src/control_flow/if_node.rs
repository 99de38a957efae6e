//! Conditional rendering with `<ux-if>`.
//!
//! The element stores its two texts in the `then` and `else` attributes and
//! shows exactly one text node: the then-text while the condition is `true`,
//! the else-text otherwise.

use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use ux_core::{Data, Subscription};

use super::{create_registered, shadow_container};
use crate::builder::Child;
use crate::dom::{Document, Element, Node};
use crate::{error_log, warn_log};

/// Tag name of the conditional element.
pub const UX_IF_TAG: &str = "ux-if";

pub(crate) struct IfState {
	container: Element,
	condition: Cell<bool>,
}

impl IfState {
	fn new(document: &Document, host: &Element) -> Self {
		Self {
			container: shadow_container(document, host),
			condition: Cell::new(false),
		}
	}
}

pub(crate) fn construct(document: &Document, host: &Element) -> Rc<dyn Any> {
	Rc::new(IfState::new(document, host))
}

/// Handle to a `<ux-if>` element.
///
/// # Example
///
/// ```
/// use ux_pages::control_flow::ux_if;
///
/// let status = ux_if(true, "online", "offline");
/// assert_eq!(status.visible_text(), "online");
///
/// status.set_condition(false);
/// assert_eq!(status.visible_text(), "offline");
/// ```
#[derive(Clone)]
pub struct IfElement {
	element: Element,
	state: Rc<IfState>,
}

impl IfElement {
	/// Creates an empty `<ux-if>` in `document`, with a false condition and
	/// empty texts.
	pub fn new(document: &Document) -> Self {
		let element = create_registered(document, UX_IF_TAG);
		let state = match element.custom_state::<IfState>() {
			Some(state) => state,
			None => {
				warn_log!("<{}> has a foreign definition; attaching state directly", UX_IF_TAG);
				let state = Rc::new(IfState::new(document, &element));
				element.set_custom_state(state.clone());
				state
			}
		};
		Self { element, state }
	}

	/// Wraps an element created from the `<ux-if>` definition.
	///
	/// Returns `None` for any other element.
	pub fn from_element(element: Element) -> Option<Self> {
		let state = element.custom_state::<IfState>()?;
		Some(Self { element, state })
	}

	/// Returns the current condition.
	pub fn condition(&self) -> bool {
		self.state.condition.get()
	}

	/// Stores `condition` and re-renders from it.
	pub fn set_condition(&self, condition: bool) {
		self.state.condition.set(condition);
		self.render();
	}

	/// Returns the text shown while the condition is `true`.
	pub fn then_text(&self) -> String {
		self.element.get_attribute("then").unwrap_or_default()
	}

	/// Returns the text shown while the condition is `false`.
	pub fn else_text(&self) -> String {
		self.element.get_attribute("else").unwrap_or_default()
	}

	/// Replaces the then-text and re-renders.
	pub fn set_then_text(&self, text: &str) {
		self.element.set_attribute("then", text);
		self.render();
	}

	/// Replaces the else-text and re-renders.
	pub fn set_else_text(&self, text: &str) {
		self.element.set_attribute("else", text);
		self.render();
	}

	/// Returns the text currently shown.
	pub fn visible_text(&self) -> String {
		self.state.container.text_content()
	}

	/// Drives the condition from `data`: applies its current value now and
	/// every value written to it later.
	///
	/// The listener holds the element weakly and is removed from `data` when
	/// the element is dropped. Pass the returned handle to
	/// [`Data::unsubscribe`] to stop following the cell earlier.
	///
	/// # Example
	///
	/// ```
	/// use ux_core::Data;
	/// use ux_pages::control_flow::ux_if;
	///
	/// let logged_in = Data::new(false);
	/// let greeting = ux_if(false, "Welcome back", "Please sign in");
	/// greeting.bind(&logged_in);
	///
	/// logged_in.set(true).unwrap();
	/// assert_eq!(greeting.visible_text(), "Welcome back");
	/// ```
	pub fn bind(&self, data: &Data<bool>) -> Subscription {
		self.set_condition(data.get());
		let target = self.element.downgrade();
		let subscription = data.listen(move |condition| {
			if let Some(element) = target.upgrade().and_then(IfElement::from_element) {
				element.set_condition(*condition);
			}
		});
		let cell = data.downgrade();
		self.element.on_drop(Box::new(move || {
			cell.unsubscribe(subscription);
		}));
		subscription
	}

	/// Returns the underlying element.
	pub fn element(&self) -> &Element {
		&self.element
	}

	/// Converts into the underlying element.
	pub fn into_element(self) -> Element {
		self.element
	}

	fn render(&self) {
		let text = if self.condition() {
			self.then_text()
		} else {
			self.else_text()
		};
		let container = &self.state.container;
		container.clear_children();
		if let Err(err) = container.append_child(&Node::from(text)) {
			error_log!("failed to render <{}>: {}", UX_IF_TAG, err);
		}
	}
}

impl From<IfElement> for Node {
	fn from(element: IfElement) -> Self {
		element.element.into_node()
	}
}

impl From<IfElement> for Child {
	fn from(element: IfElement) -> Self {
		Child::Node(element.into())
	}
}

/// Creates a `<ux-if>` in the global document.
///
/// The texts are stored first, then `condition` is applied.
pub fn ux_if(condition: bool, then_text: &str, else_text: &str) -> IfElement {
	let element = IfElement::new(&Document::global());
	element.element.set_attribute("then", then_text);
	element.element.set_attribute("else", else_text);
	element.set_condition(condition);
	element
}
