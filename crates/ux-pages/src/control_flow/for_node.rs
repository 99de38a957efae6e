//! List rendering with `<ux-for>`.
//!
//! A `<ux-for>` element is bound to a `Data<Vec<T>>` and a render function.
//! Every write to the cell tears down all rendered children and rebuilds one
//! per item, in index order. There is no keyed reconciliation.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt::Display;
use std::rc::{Rc, Weak};

use ux_core::{Data, Subscription};

use super::{create_registered, shadow_container};
use crate::builder::Child;
use crate::builder::html::p;
use crate::dom::{Document, Element, Node};
use crate::{error_log, warn_log};

/// Tag name of the list element.
pub const UX_FOR_TAG: &str = "ux-for";

type RenderItem<T> = Rc<dyn Fn(&T, usize) -> Node>;

/// A list cell together with its render function, with the item type erased.
trait ListBinding {
	fn render_into(&self, container: &Element);

	fn unbind(&self);
}

struct Binding<T: 'static> {
	data: Data<Vec<T>>,
	render_item: RenderItem<T>,
	subscription: Cell<Option<Subscription>>,
}

impl<T: Clone + 'static> ListBinding for Binding<T> {
	fn render_into(&self, container: &Element) {
		let items = self.data.get();
		container.clear_children();
		for (index, item) in items.iter().enumerate() {
			let node = (self.render_item)(item, index);
			if let Err(err) = container.append_child(&node) {
				error_log!("failed to render <{}> item {}: {}", UX_FOR_TAG, index, err);
			}
		}
	}

	fn unbind(&self) {
		if let Some(subscription) = self.subscription.take() {
			self.data.unsubscribe(subscription);
		}
	}
}

impl<T: 'static> Drop for Binding<T> {
	fn drop(&mut self) {
		if let Some(subscription) = self.subscription.take() {
			self.data.unsubscribe(subscription);
		}
	}
}

pub(crate) struct ForState {
	container: Element,
	binding: RefCell<Option<Rc<dyn ListBinding>>>,
}

impl ForState {
	fn new(document: &Document, host: &Element) -> Self {
		Self {
			container: shadow_container(document, host),
			binding: RefCell::new(None),
		}
	}

	fn render(&self) {
		let binding = self.binding.borrow().clone();
		match binding {
			Some(binding) => binding.render_into(&self.container),
			None => error_log!("data or render function not set for <{}>", UX_FOR_TAG),
		}
	}
}

pub(crate) fn construct(document: &Document, host: &Element) -> Rc<dyn Any> {
	Rc::new(ForState::new(document, host))
}

/// Handle to a `<ux-for>` element.
///
/// # Example
///
/// ```
/// use ux_core::Data;
/// use ux_pages::builder::html::li;
/// use ux_pages::control_flow::ux_for;
///
/// let todos = Data::new(vec!["write", "test"]);
/// let list = ux_for(&todos, |todo, index| li().text(&format!("{}. {}", index + 1, todo)).build());
/// assert_eq!(list.rendered_texts(), vec!["1. write", "2. test"]);
///
/// todos.update(|items| items.push("ship")).unwrap();
/// assert_eq!(list.rendered().len(), 3);
/// ```
#[derive(Clone)]
pub struct ForElement {
	element: Element,
	state: Rc<ForState>,
}

impl ForElement {
	/// Creates an unbound `<ux-for>` in `document`.
	pub fn new(document: &Document) -> Self {
		let element = create_registered(document, UX_FOR_TAG);
		let state = match element.custom_state::<ForState>() {
			Some(state) => state,
			None => {
				warn_log!("<{}> has a foreign definition; attaching state directly", UX_FOR_TAG);
				let state = Rc::new(ForState::new(document, &element));
				element.set_custom_state(state.clone());
				state
			}
		};
		Self { element, state }
	}

	/// Wraps an element created from the `<ux-for>` definition.
	///
	/// Returns `None` for any other element.
	pub fn from_element(element: Element) -> Option<Self> {
		let state = element.custom_state::<ForState>()?;
		Some(Self { element, state })
	}

	/// Binds `data` and `render_item`, then renders.
	///
	/// Any previous binding is replaced and its listener detached, so only
	/// the latest cell drives the element.
	pub fn set_data<T, N, F>(&self, data: &Data<Vec<T>>, render_item: F)
	where
		T: Clone + 'static,
		N: Into<Node>,
		F: Fn(&T, usize) -> N + 'static,
	{
		let binding = Rc::new(Binding {
			data: data.clone(),
			render_item: Rc::new(move |item: &T, index: usize| render_item(item, index).into()),
			subscription: Cell::new(None),
		});
		let erased: Rc<dyn ListBinding> = binding.clone();
		if let Some(previous) = self.state.binding.replace(Some(erased)) {
			previous.unbind();
		}

		let state: Weak<ForState> = Rc::downgrade(&self.state);
		let subscription = data.listen(move |_| {
			if let Some(state) = state.upgrade() {
				state.render();
			}
		});
		binding.subscription.set(Some(subscription));
		self.state.render();
	}

	/// Binds `data` with the default renderer: one `<p>` per item holding the
	/// item's text.
	pub fn set_data_text<T>(&self, data: &Data<Vec<T>>)
	where
		T: Display + Clone + 'static,
	{
		self.set_data(data, |item: &T, _| p().text(&item.to_string()).build());
	}

	/// Returns `true` once data has been bound.
	pub fn is_bound(&self) -> bool {
		self.state.binding.borrow().is_some()
	}

	/// Rebuilds all children from the bound data.
	///
	/// Logs an error and does nothing when no data is bound.
	pub fn render(&self) {
		self.state.render();
	}

	/// Returns the rendered children, in order.
	pub fn rendered(&self) -> Vec<Node> {
		self.state.container.children()
	}

	/// Returns the text of each rendered child, in order.
	pub fn rendered_texts(&self) -> Vec<String> {
		self.rendered().iter().map(Node::text_content).collect()
	}

	/// Returns the underlying element.
	pub fn element(&self) -> &Element {
		&self.element
	}

	/// Converts into the underlying element.
	pub fn into_element(self) -> Element {
		self.element
	}
}

impl From<ForElement> for Node {
	fn from(element: ForElement) -> Self {
		element.element.into_node()
	}
}

impl From<ForElement> for Child {
	fn from(element: ForElement) -> Self {
		Child::Node(element.into())
	}
}

/// Creates a `<ux-for>` in the global document bound to `data`.
pub fn ux_for<T, N, F>(data: &Data<Vec<T>>, render_item: F) -> ForElement
where
	T: Clone + 'static,
	N: Into<Node>,
	F: Fn(&T, usize) -> N + 'static,
{
	let element = ForElement::new(&Document::global());
	element.set_data(data, render_item);
	element
}

/// Creates a `<ux-for>` in the global document bound to `data`, rendering
/// one `<p>` per item.
pub fn ux_for_text<T>(data: &Data<Vec<T>>) -> ForElement
where
	T: Display + Clone + 'static,
{
	let element = ForElement::new(&Document::global());
	element.set_data_text(data);
	element
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::builder::html::li;
	use crate::testing::capture_logs;
	use insta::assert_snapshot;
	use rstest::rstest;

	#[rstest]
	fn test_default_renderer_rebuilds_on_set() {
		// Arrange
		let numbers = Data::new(vec![1, 2, 3]);
		let list = ux_for_text(&numbers);
		assert_eq!(list.rendered_texts(), vec!["1", "2", "3"]);

		// Act
		numbers.set(vec![9]).unwrap();

		// Assert
		let rendered = list.rendered();
		assert_eq!(rendered.len(), 1);
		assert_eq!(rendered[0].as_element().map(|el| el.tag_name().to_string()), Some("p".to_string()));
		assert_eq!(list.rendered_texts(), vec!["9"]);
	}

	#[rstest]
	fn test_render_item_receives_index() {
		let letters = Data::new(vec!['a', 'b']);
		let list = ux_for(&letters, |letter, index| format!("{index}:{letter}"));
		assert_eq!(list.rendered_texts(), vec!["0:a", "1:b"]);
	}

	#[rstest]
	fn test_every_set_rebuilds_children() {
		let items = Data::new(vec!["x"]);
		let list = ux_for(&items, |item, _| li().text(item).build());
		let before = list.rendered();

		items.set(vec!["x"]).unwrap();

		let after = list.rendered();
		assert_eq!(after.len(), 1);
		assert!(!after[0].ptr_eq(&before[0]));
	}

	#[rstest]
	fn test_empty_list_renders_nothing() {
		let items: Data<Vec<u32>> = Data::new(Vec::new());
		let list = ux_for_text(&items);
		assert!(list.rendered().is_empty());
	}

	#[rstest]
	fn test_render_without_data_logs_error() {
		let logs = capture_logs(|| {
			let list = ForElement::new(&Document::new());
			assert!(!list.is_bound());
			list.render();
			assert!(list.rendered().is_empty());
		});

		let errors: Vec<&String> = logs.iter().filter(|line| line.starts_with("[ERROR]")).collect();
		assert_eq!(errors, vec!["[ERROR] data or render function not set for <ux-for>"]);
	}

	#[rstest]
	fn test_rebinding_detaches_previous_cell() {
		let first = Data::new(vec![1]);
		let second = Data::new(vec![2, 3]);
		let list = ux_for_text(&first);

		list.set_data_text(&second);
		first.set(vec![7, 7, 7]).unwrap();

		assert_eq!(first.listener_count(), 0);
		assert_eq!(list.rendered_texts(), vec!["2", "3"]);
	}

	#[rstest]
	fn test_dropped_element_stops_rendering() {
		let items = Data::new(vec![1]);
		let list = ux_for_text(&items);
		let container = list.state.container.clone();
		drop(list);

		assert_eq!(items.listener_count(), 0);
		items.set(vec![1, 2]).unwrap();

		assert_eq!(container.child_count(), 1);
	}

	#[rstest]
	fn test_rebuilt_items_release_shared_cell() {
		// Arrange
		let items = Data::new(vec![1, 2, 3]);
		let color = Data::new("red");
		let item_color = color.clone();
		let list = ux_for(&items, move |n, _| {
			li().reactive_attr("data-color", &item_color).text(&n.to_string()).build()
		});
		assert_eq!(color.listener_count(), 3);

		// Act
		for _ in 0..100 {
			items.set(vec![1, 2, 3]).unwrap();
		}
		color.set("blue").unwrap();

		// Assert
		assert_eq!(color.listener_count(), 3);
		let colors: Vec<Option<String>> = list
			.rendered()
			.iter()
			.map(|node| node.as_element().and_then(|el| el.get_attribute("data-color")))
			.collect();
		assert_eq!(colors, vec![Some("blue".to_string()); 3]);
	}

	#[rstest]
	fn test_serializes_items_in_shadow_container() {
		let items = Data::new(vec!["a", "b"]);
		let list = ux_for_text(&items);
		assert_snapshot!(
			Node::from(list).to_html(),
			@r#"<ux-for><template shadowrootmode="open"><div><p>a</p><p>b</p></div></template></ux-for>"#
		);
	}
}
