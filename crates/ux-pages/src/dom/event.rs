//! Events and listener handles.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::element::{Element, WeakElement};

static NEXT_LISTENER: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_listener_id() -> u64 {
	NEXT_LISTENER.fetch_add(1, Ordering::Relaxed)
}

/// Shared event listener callback.
pub type EventListener = Rc<dyn Fn(&Event)>;

/// An event delivered to the listeners of one element.
///
/// Events are dispatched synchronously and do not bubble.
pub struct Event {
	event_type: String,
	target: Element,
}

impl Event {
	pub(crate) fn new(event_type: &str, target: Element) -> Self {
		Self {
			event_type: event_type.to_string(),
			target,
		}
	}

	/// Returns the event type, e.g. `"click"`.
	pub fn event_type(&self) -> &str {
		&self.event_type
	}

	/// Returns the element the event was dispatched on.
	pub fn target(&self) -> &Element {
		&self.target
	}
}

impl fmt::Debug for Event {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Event")
			.field("event_type", &self.event_type)
			.field("target", &self.target.tag_name())
			.finish()
	}
}

/// Handle to a listener registered with [`Element::add_event_listener`].
///
/// Dropping the handle keeps the listener registered; call
/// [`EventHandle::remove`] to detach it.
#[derive(Debug, Clone)]
pub struct EventHandle {
	element: WeakElement,
	event_type: String,
	id: u64,
}

impl EventHandle {
	pub(crate) fn new(element: WeakElement, event_type: &str, id: u64) -> Self {
		Self {
			element,
			event_type: event_type.to_string(),
			id,
		}
	}

	/// Returns the event type the listener was registered for.
	pub fn event_type(&self) -> &str {
		&self.event_type
	}

	/// Detaches the listener.
	///
	/// Returns `false` if the element is gone or the listener was already removed.
	pub fn remove(self) -> bool {
		self.element
			.upgrade()
			.is_some_and(|element| element.remove_listener(self.id))
	}
}
