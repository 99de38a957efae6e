//! Element nodes.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use indexmap::IndexMap;

use super::event::{Event, EventHandle, EventListener, next_listener_id};
use super::node::{Node, NodeData, WeakNode};
use crate::error::DomError;

pub(crate) struct ElementData {
	pub(crate) tag: String,
	attributes: RefCell<IndexMap<String, String>>,
	listeners: RefCell<Vec<RegisteredListener>>,
	shadow_root: RefCell<Option<Node>>,
	custom_state: RefCell<Option<Rc<dyn Any>>>,
	teardown: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl Drop for ElementData {
	fn drop(&mut self) {
		for teardown in self.teardown.get_mut().drain(..) {
			teardown();
		}
	}
}

struct RegisteredListener {
	id: u64,
	event_type: String,
	listener: EventListener,
}

/// Typed handle to an element node.
///
/// `Element` dereferences to [`Node`], so tree operations such as
/// [`Node::append_child`] are available directly.
#[derive(Clone)]
pub struct Element {
	node: Node,
	data: Rc<ElementData>,
}

/// Non-owning handle to an [`Element`].
#[derive(Clone)]
pub struct WeakElement {
	node: WeakNode,
}

impl WeakElement {
	/// Returns a strong handle if the element is still alive.
	pub fn upgrade(&self) -> Option<Element> {
		self.node.upgrade().and_then(|node| node.as_element())
	}
}

impl fmt::Debug for WeakElement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WeakElement")
			.field("alive", &self.node.upgrade().is_some())
			.finish()
	}
}

impl Element {
	/// Creates a detached element without consulting any custom element registry.
	///
	/// Use [`Document::create_element`](super::Document::create_element) to get
	/// custom elements upgraded.
	pub(crate) fn new(tag: &str) -> Self {
		let data = Rc::new(ElementData {
			tag: tag.to_string(),
			attributes: RefCell::new(IndexMap::new()),
			listeners: RefCell::new(Vec::new()),
			shadow_root: RefCell::new(None),
			custom_state: RefCell::new(None),
			teardown: RefCell::new(Vec::new()),
		});
		let node = Node::from_data(NodeData::Element(data.clone()));
		Self { node, data }
	}

	pub(crate) fn from_parts(node: Node, data: Rc<ElementData>) -> Self {
		Self { node, data }
	}

	/// Returns the tag name, e.g. `"div"`.
	pub fn tag_name(&self) -> &str {
		&self.data.tag
	}

	/// Returns the value of an attribute.
	pub fn get_attribute(&self, name: &str) -> Option<String> {
		self.data.attributes.borrow().get(name).cloned()
	}

	/// Sets an attribute, replacing any previous value in place.
	pub fn set_attribute(&self, name: &str, value: &str) {
		self.data
			.attributes
			.borrow_mut()
			.insert(name.to_string(), value.to_string());
	}

	/// Removes an attribute. Returns whether it was present.
	pub fn remove_attribute(&self, name: &str) -> bool {
		self.data
			.attributes
			.borrow_mut()
			.shift_remove(name)
			.is_some()
	}

	/// Returns `true` if the attribute is present.
	pub fn has_attribute(&self, name: &str) -> bool {
		self.data.attributes.borrow().contains_key(name)
	}

	/// Returns all attributes in insertion order.
	pub fn attributes(&self) -> Vec<(String, String)> {
		self.data
			.attributes
			.borrow()
			.iter()
			.map(|(name, value)| (name.clone(), value.clone()))
			.collect()
	}

	/// Returns the `value` attribute, or an empty string.
	pub fn value(&self) -> String {
		self.get_attribute("value").unwrap_or_default()
	}

	/// Registers a listener for events of `event_type`.
	///
	/// Listeners run in registration order.
	pub fn add_event_listener<F>(&self, event_type: &str, listener: F) -> EventHandle
	where
		F: Fn(&Event) + 'static,
	{
		self.add_shared_listener(event_type, Rc::new(listener))
	}

	pub(crate) fn add_shared_listener(&self, event_type: &str, listener: EventListener) -> EventHandle {
		let id = next_listener_id();
		self.data.listeners.borrow_mut().push(RegisteredListener {
			id,
			event_type: event_type.to_string(),
			listener,
		});
		EventHandle::new(self.downgrade(), event_type, id)
	}

	pub(crate) fn remove_listener(&self, id: u64) -> bool {
		let mut listeners = self.data.listeners.borrow_mut();
		let before = listeners.len();
		listeners.retain(|registered| registered.id != id);
		listeners.len() != before
	}

	/// Returns the number of listeners registered for `event_type`.
	pub fn listener_count(&self, event_type: &str) -> usize {
		self.data
			.listeners
			.borrow()
			.iter()
			.filter(|registered| registered.event_type == event_type)
			.count()
	}

	/// Dispatches an event of `event_type` to this element's listeners.
	///
	/// Returns the number of listeners invoked. Listeners added while the event
	/// is being dispatched do not see it.
	pub fn dispatch_event(&self, event_type: &str) -> usize {
		let listeners: Vec<EventListener> = self
			.data
			.listeners
			.borrow()
			.iter()
			.filter(|registered| registered.event_type == event_type)
			.map(|registered| registered.listener.clone())
			.collect();
		let event = Event::new(event_type, self.clone());
		for listener in &listeners {
			listener(&event);
		}
		listeners.len()
	}

	/// Dispatches a `click` event.
	pub fn click(&self) -> usize {
		self.dispatch_event("click")
	}

	/// Attaches an open shadow root and returns it.
	///
	/// # Errors
	///
	/// Returns [`DomError::HierarchyRequest`] if a shadow root is already attached.
	pub fn attach_shadow(&self) -> Result<Node, DomError> {
		let mut slot = self.data.shadow_root.borrow_mut();
		if slot.is_some() {
			return Err(DomError::HierarchyRequest(format!(
				"<{}> already has a shadow root",
				self.data.tag
			)));
		}
		let root = Node::new_shadow_root();
		*slot = Some(root.clone());
		Ok(root)
	}

	/// Returns the attached shadow root.
	pub fn shadow_root(&self) -> Option<Node> {
		self.data.shadow_root.borrow().clone()
	}

	/// Returns the state a custom element constructor attached to this element,
	/// if it has the requested type.
	pub fn custom_state<T: 'static>(&self) -> Option<Rc<T>> {
		let state = self.data.custom_state.borrow().clone()?;
		state.downcast::<T>().ok()
	}

	pub(crate) fn set_custom_state(&self, state: Rc<dyn Any>) {
		*self.data.custom_state.borrow_mut() = Some(state);
	}

	/// Registers a callback that runs once when the last handle to this element
	/// is dropped.
	pub(crate) fn on_drop(&self, teardown: Box<dyn FnOnce()>) {
		self.data.teardown.borrow_mut().push(teardown);
	}

	/// Returns the underlying node handle.
	pub fn as_node(&self) -> &Node {
		&self.node
	}

	/// Converts into the underlying node handle.
	pub fn into_node(self) -> Node {
		self.node
	}

	/// Returns a non-owning handle to this element.
	pub fn downgrade(&self) -> WeakElement {
		WeakElement {
			node: self.node.downgrade(),
		}
	}
}

impl Deref for Element {
	type Target = Node;

	fn deref(&self) -> &Node {
		&self.node
	}
}

impl AsRef<Node> for Element {
	fn as_ref(&self) -> &Node {
		&self.node
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		element.node
	}
}

impl fmt::Debug for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Element")
			.field("tag", &self.data.tag)
			.field("attributes", &*self.data.attributes.borrow())
			.field("children", &self.node.child_count())
			.field("listeners", &self.data.listeners.borrow().len())
			.finish()
	}
}
