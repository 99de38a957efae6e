//! Attribute values and attribute maps
//!
//! Every attribute handed to the builder is one of three kinds, decided when
//! the value is converted into an [`AttrValue`]:
//!
//! - **Literal**: a plain string, set once. Numbers, booleans and characters
//!   convert through their string form.
//! - **Reactive**: a [`Data`] cell. The attribute starts with the cell's current
//!   value and is rewritten on every `set`.
//! - **Handler**: an event callback built with [`on`]. The attribute key names
//!   the event: `onClick` registers a `click` listener.
//!
//! ## Example
//!
//! ```
//! use ux_core::Data;
//! use ux_pages::attrs;
//! use ux_pages::builder::{create_element, on};
//!
//! let color = Data::new("red");
//! let el = create_element(
//! 	"div",
//! 	attrs! { "id" => "box", "data-color" => &color, "onClick" => on(|_| {}) },
//! 	vec![],
//! );
//! assert_eq!(el.get_attribute("data-color").as_deref(), Some("red"));
//!
//! color.set("blue").unwrap();
//! assert_eq!(el.get_attribute("data-color").as_deref(), Some("blue"));
//! assert_eq!(el.listener_count("click"), 1);
//! ```

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use ux_core::{Data, Subscription};

use crate::dom::{Element, Event, EventHandle, EventListener};
use crate::warn_log;

/// A value whose string form can drive an attribute.
///
/// Implemented for every [`Data<T>`] with `T: ToString + Clone`.
pub trait AttributeSource {
	/// Returns the current string form of the value.
	fn current(&self) -> String;

	/// Calls `apply` with the new string form after every write.
	fn subscribe(&self, apply: Box<dyn Fn(String)>) -> Subscription;

	/// Returns a callback that removes `subscription` without keeping the
	/// source alive.
	fn detach(&self, subscription: Subscription) -> Box<dyn FnOnce()>;
}

impl<T> AttributeSource for Data<T>
where
	T: ToString + Clone + 'static,
{
	fn current(&self) -> String {
		self.with(|value| value.to_string())
	}

	fn subscribe(&self, apply: Box<dyn Fn(String)>) -> Subscription {
		self.listen(move |value| apply(value.to_string()))
	}

	fn detach(&self, subscription: Subscription) -> Box<dyn FnOnce()> {
		let cell = self.downgrade();
		Box::new(move || {
			cell.unsubscribe(subscription);
		})
	}
}

/// One attribute value, as passed to the element builder.
#[derive(Clone)]
pub enum AttrValue {
	/// Set once as a static attribute.
	Literal(String),
	/// Kept in sync with a reactive cell.
	Reactive(Rc<dyn AttributeSource>),
	/// Registered as an event listener.
	Handler(EventListener),
}

impl fmt::Debug for AttrValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttrValue::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
			AttrValue::Reactive(source) => f.debug_tuple("Reactive").field(&source.current()).finish(),
			AttrValue::Handler(_) => f.write_str("Handler(..)"),
		}
	}
}

/// Wraps an event callback as an attribute value.
///
/// # Example
///
/// ```
/// use ux_pages::attrs;
/// use ux_pages::builder::{create_element, on};
///
/// let el = create_element("button", attrs! { "onClick" => on(|_| {}) }, vec![]);
/// assert_eq!(el.listener_count("click"), 1);
/// ```
pub fn on<F>(handler: F) -> AttrValue
where
	F: Fn(&Event) + 'static,
{
	AttrValue::Handler(Rc::new(handler))
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Literal(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Literal(value)
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		AttrValue::Literal(value.clone())
	}
}

macro_rules! literal_from_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for AttrValue {
				fn from(value: $ty) -> Self {
					AttrValue::Literal(value.to_string())
				}
			}
		)*
	};
}

literal_from_display!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T> From<Data<T>> for AttrValue
where
	T: ToString + Clone + 'static,
{
	fn from(data: Data<T>) -> Self {
		AttrValue::Reactive(Rc::new(data))
	}
}

impl<T> From<&Data<T>> for AttrValue
where
	T: ToString + Clone + 'static,
{
	fn from(data: &Data<T>) -> Self {
		AttrValue::Reactive(Rc::new(data.clone()))
	}
}

/// Ordered attribute map.
///
/// Inserting a key that is already present replaces its value in place, so
/// the last write wins and the original position is kept.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
	entries: IndexMap<String, AttrValue>,
}

impl Attributes {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts an attribute, returning the value it replaced.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
		self.entries.insert(name.into(), value.into())
	}

	/// Builder form of [`Attributes::insert`].
	pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Overlays `other` onto this map; its values win on conflicts.
	pub fn merge(&mut self, other: Attributes) {
		self.entries.extend(other.entries);
	}

	/// Returns the value stored under `name`.
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.entries.get(name)
	}

	/// Returns `true` if `name` is present.
	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if the map is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over the attributes in order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.entries.iter().map(|(name, value)| (name.as_str(), value))
	}
}

impl IntoIterator for Attributes {
	type Item = (String, AttrValue);
	type IntoIter = indexmap::map::IntoIter<String, AttrValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attributes = Attributes::new();
		for (name, value) in iter {
			attributes.insert(name, value);
		}
		attributes
	}
}

/// Builds an [`Attributes`] map.
///
/// # Example
///
/// ```
/// use ux_pages::attrs;
///
/// let attributes = attrs! { "class" => "card", "tabindex" => 0 };
/// assert_eq!(attributes.len(), 2);
/// ```
#[macro_export]
macro_rules! attrs {
	() => {
		$crate::builder::Attributes::new()
	};
	($($name:expr => $value:expr),+ $(,)?) => {{
		let mut attributes = $crate::builder::Attributes::new();
		$(
			attributes.insert($name, $value);
		)+
		attributes
	}};
}

/// Applies one attribute to `element`.
///
/// Returns the listener handle when the value is a handler.
pub(crate) fn apply_attribute(element: &Element, name: &str, value: AttrValue) -> Option<EventHandle> {
	match value {
		AttrValue::Literal(text) => {
			element.set_attribute(name, &text);
			None
		}
		AttrValue::Reactive(source) => {
			bind_attribute(element, name, source.as_ref());
			None
		}
		AttrValue::Handler(listener) => Some(element.add_shared_listener(&handler_event_name(name), listener)),
	}
}

/// Sets `name` from `source` now and after every write to it.
///
/// The listener holds the element weakly and is removed from `source` when
/// the element is dropped.
pub(crate) fn bind_attribute(element: &Element, name: &str, source: &dyn AttributeSource) -> Subscription {
	element.set_attribute(name, &source.current());
	let target = element.downgrade();
	let name = name.to_string();
	let subscription = source.subscribe(Box::new(move |value| {
		if let Some(element) = target.upgrade() {
			element.set_attribute(&name, &value);
		}
	}));
	element.on_drop(source.detach(subscription));
	subscription
}

/// Maps a handler attribute key to the event it listens for.
fn handler_event_name(key: &str) -> String {
	match key.strip_prefix("on") {
		Some(event) if !event.is_empty() => event.to_ascii_lowercase(),
		_ => {
			warn_log!("handler attribute {:?} does not start with \"on\"; listening for {:?}", key, key.to_ascii_lowercase());
			key.to_ascii_lowercase()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dom::Document;
	use rstest::rstest;
	use std::cell::Cell;

	#[rstest]
	#[case(AttrValue::from("x"), "x")]
	#[case(AttrValue::from(42), "42")]
	#[case(AttrValue::from(1.5), "1.5")]
	#[case(AttrValue::from(true), "true")]
	#[case(AttrValue::from('c'), "c")]
	fn test_primitives_become_literals(#[case] value: AttrValue, #[case] expected: &str) {
		assert!(matches!(value, AttrValue::Literal(text) if text == expected));
	}

	#[rstest]
	fn test_data_becomes_reactive() {
		let value = AttrValue::from(Data::new(7));
		assert!(matches!(&value, AttrValue::Reactive(source) if source.current() == "7"));
		assert_eq!(format!("{value:?}"), "Reactive(\"7\")");
	}

	#[rstest]
	fn test_insert_overwrites_in_place() {
		let mut attributes = Attributes::new();
		attributes.insert("style", "a");
		attributes.insert("href", "/");
		let previous = attributes.insert("style", "b");

		assert!(matches!(previous, Some(AttrValue::Literal(text)) if text == "a"));
		let names: Vec<&str> = attributes.iter().map(|(name, _)| name).collect();
		assert_eq!(names, vec!["style", "href"]);
		assert!(matches!(attributes.get("style"), Some(AttrValue::Literal(text)) if text == "b"));
	}

	#[rstest]
	fn test_merge_lets_other_win() {
		let mut defaults = attrs! { "style" => "default", "type" => "text" };
		defaults.merge(attrs! { "style" => "custom", "placeholder" => "name" });

		let collected: Vec<(String, String)> = defaults
			.into_iter()
			.map(|(name, value)| match value {
				AttrValue::Literal(text) => (name, text),
				other => panic!("unexpected {other:?}"),
			})
			.collect();
		assert_eq!(
			collected,
			vec![
				("style".to_string(), "custom".to_string()),
				("type".to_string(), "text".to_string()),
				("placeholder".to_string(), "name".to_string()),
			]
		);
	}

	#[rstest]
	fn test_from_iterator() {
		let attributes: Attributes = [("a", 1), ("b", 2)].into_iter().collect();
		assert_eq!(attributes.len(), 2);
		assert!(attributes.contains("b"));
		assert!(!attributes.is_empty());
	}

	#[rstest]
	#[case("onClick", "click")]
	#[case("onclick", "click")]
	#[case("onMouseEnter", "mouseenter")]
	fn test_on_prefixed_handler_keys(#[case] key: &str, #[case] event: &str) {
		let logs = crate::testing::capture_logs(|| {
			assert_eq!(handler_event_name(key), event);
		});
		assert!(logs.is_empty());
	}

	#[rstest]
	fn test_other_handler_keys_warn() {
		let logs = crate::testing::capture_logs(|| {
			assert_eq!(handler_event_name("Submit"), "submit");
		});
		assert_eq!(logs.len(), 1);
		assert!(logs[0].starts_with("[WARN] handler attribute \"Submit\""));
	}

	#[rstest]
	fn test_handler_is_registered_on_element() {
		let doc = Document::new();
		let el = doc.create_element("button");
		let hits = Rc::new(Cell::new(0));
		let counter = hits.clone();

		apply_attribute(&el, "onClick", on(move |_| counter.set(counter.get() + 1)));
		el.click();

		assert_eq!(hits.get(), 1);
		assert!(!el.has_attribute("onClick"));
	}

	#[rstest]
	fn test_bound_attribute_detaches_on_element_drop() {
		let doc = Document::new();
		let el = doc.create_element("div");
		let color = Data::new("red".to_string());

		bind_attribute(&el, "data-color", &color);
		assert_eq!(color.listener_count(), 1);
		drop(el);

		assert_eq!(color.listener_count(), 0);
		assert!(color.set("blue".to_string()).is_ok());
	}

	#[rstest]
	fn test_bound_attribute_survives_while_element_lives() {
		let doc = Document::new();
		let el = doc.create_element("div");
		let color = Data::new(1);

		let subscription = bind_attribute(&el, "data-color", &color);
		let handle = el.clone();
		drop(el);
		color.set(2).unwrap();

		assert_eq!(handle.get_attribute("data-color").as_deref(), Some("2"));
		assert!(color.unsubscribe(subscription));
		drop(handle);
		assert_eq!(color.listener_count(), 0);
	}
}
