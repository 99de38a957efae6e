//! Tree nodes.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::element::{Element, ElementData};
use crate::error::DomError;

pub(crate) struct NodeInner {
	pub(crate) data: NodeData,
	parent: RefCell<Weak<NodeInner>>,
	children: RefCell<Vec<Node>>,
}

pub(crate) enum NodeData {
	Element(Rc<ElementData>),
	Text(RefCell<String>),
	ShadowRoot,
}

/// The kind of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
	/// An element such as `<div>`.
	Element,
	/// A text node.
	Text,
	/// An open shadow root attached to an element.
	ShadowRoot,
}

/// Handle to one node of a document tree.
///
/// Handles are reference counted; cloning one yields another handle to the
/// same node. A node has at most one parent, and appending a node that
/// already has a parent moves it.
#[derive(Clone)]
pub struct Node {
	pub(crate) inner: Rc<NodeInner>,
}

/// Non-owning handle to a [`Node`].
#[derive(Clone)]
pub struct WeakNode {
	inner: Weak<NodeInner>,
}

impl WeakNode {
	/// Returns a strong handle if the node is still alive.
	pub fn upgrade(&self) -> Option<Node> {
		self.inner.upgrade().map(|inner| Node { inner })
	}
}

impl Node {
	pub(crate) fn from_data(data: NodeData) -> Self {
		Self {
			inner: Rc::new(NodeInner {
				data,
				parent: RefCell::new(Weak::new()),
				children: RefCell::new(Vec::new()),
			}),
		}
	}

	pub(crate) fn new_text(text: impl Into<String>) -> Self {
		Self::from_data(NodeData::Text(RefCell::new(text.into())))
	}

	pub(crate) fn new_shadow_root() -> Self {
		Self::from_data(NodeData::ShadowRoot)
	}

	/// Returns the kind of this node.
	pub fn node_type(&self) -> NodeType {
		match &self.inner.data {
			NodeData::Element(_) => NodeType::Element,
			NodeData::Text(_) => NodeType::Text,
			NodeData::ShadowRoot => NodeType::ShadowRoot,
		}
	}

	/// Returns `true` for element nodes.
	pub fn is_element(&self) -> bool {
		self.node_type() == NodeType::Element
	}

	/// Returns `true` for text nodes.
	pub fn is_text(&self) -> bool {
		self.node_type() == NodeType::Text
	}

	/// Returns a typed element handle when this is an element node.
	pub fn as_element(&self) -> Option<Element> {
		match &self.inner.data {
			NodeData::Element(data) => Some(Element::from_parts(self.clone(), data.clone())),
			_ => None,
		}
	}

	/// Returns the parent node, if attached.
	pub fn parent(&self) -> Option<Node> {
		self.inner
			.parent
			.borrow()
			.upgrade()
			.map(|inner| Node { inner })
	}

	/// Returns the child nodes in order.
	pub fn children(&self) -> Vec<Node> {
		self.inner.children.borrow().clone()
	}

	/// Returns the child elements in order, skipping text nodes.
	pub fn child_elements(&self) -> Vec<Element> {
		self.inner
			.children
			.borrow()
			.iter()
			.filter_map(Node::as_element)
			.collect()
	}

	/// Returns the number of child nodes.
	pub fn child_count(&self) -> usize {
		self.inner.children.borrow().len()
	}

	/// Returns the first child node.
	pub fn first_child(&self) -> Option<Node> {
		self.inner.children.borrow().first().cloned()
	}

	/// Appends `child` as the last child of this node.
	///
	/// A child that is already attached elsewhere is moved.
	///
	/// # Errors
	///
	/// Returns [`DomError::HierarchyRequest`] when this node is a text node, when
	/// `child` is a shadow root, or when `child` is this node or one of its
	/// ancestors.
	pub fn append_child(&self, child: &Node) -> Result<(), DomError> {
		if self.is_text() {
			return Err(DomError::HierarchyRequest(
				"text nodes cannot have children".to_string(),
			));
		}
		if child.node_type() == NodeType::ShadowRoot {
			return Err(DomError::HierarchyRequest(
				"a shadow root cannot be inserted as a child".to_string(),
			));
		}
		if self.is_inclusive_descendant_of(child) {
			return Err(DomError::HierarchyRequest(
				"the new child is an ancestor of the parent".to_string(),
			));
		}

		child.detach();
		*child.inner.parent.borrow_mut() = Rc::downgrade(&self.inner);
		self.inner.children.borrow_mut().push(child.clone());
		Ok(())
	}

	/// Removes `child` from this node's children.
	///
	/// # Errors
	///
	/// Returns [`DomError::NotFound`] when `child` is not a child of this node.
	pub fn remove_child(&self, child: &Node) -> Result<(), DomError> {
		let mut children = self.inner.children.borrow_mut();
		let position = children
			.iter()
			.position(|candidate| candidate.ptr_eq(child))
			.ok_or_else(|| DomError::NotFound("the node is not a child of this node".to_string()))?;
		let removed = children.remove(position);
		*removed.inner.parent.borrow_mut() = Weak::new();
		Ok(())
	}

	/// Removes all children of this node.
	pub fn clear_children(&self) {
		let removed = std::mem::take(&mut *self.inner.children.borrow_mut());
		for child in &removed {
			*child.inner.parent.borrow_mut() = Weak::new();
		}
	}

	/// Removes this node from its parent, if it has one.
	pub fn detach(&self) {
		if let Some(parent) = self.parent() {
			// Parent links and child lists are kept in sync.
			let _ = parent.remove_child(self);
		}
	}

	/// Returns the concatenated text of this node and its descendants.
	///
	/// Shadow roots attached to descendant elements are not included.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		self.collect_text(&mut out);
		out
	}

	fn collect_text(&self, out: &mut String) {
		match &self.inner.data {
			NodeData::Text(text) => out.push_str(&text.borrow()),
			NodeData::Element(_) | NodeData::ShadowRoot => {
				for child in self.inner.children.borrow().iter() {
					child.collect_text(out);
				}
			}
		}
	}

	/// Replaces the text of this node.
	///
	/// For a text node this rewrites its data; for elements and shadow roots it
	/// removes all children and inserts a single text node (none for an empty
	/// string).
	pub fn set_text_content(&self, text: &str) {
		match &self.inner.data {
			NodeData::Text(data) => *data.borrow_mut() = text.to_string(),
			NodeData::Element(_) | NodeData::ShadowRoot => {
				self.clear_children();
				if !text.is_empty() {
					let node = Node::new_text(text);
					*node.inner.parent.borrow_mut() = Rc::downgrade(&self.inner);
					self.inner.children.borrow_mut().push(node);
				}
			}
		}
	}

	/// Returns `true` if both handles point to the same node.
	pub fn ptr_eq(&self, other: &Node) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}

	/// Returns a non-owning handle to this node.
	pub fn downgrade(&self) -> WeakNode {
		WeakNode {
			inner: Rc::downgrade(&self.inner),
		}
	}

	/// Visits this node and its descendants depth-first, in document order.
	///
	/// Shadow trees are not visited. The walk stops at the first node for which
	/// `f` returns `Some`.
	pub fn find_map<R>(&self, f: &mut impl FnMut(&Node) -> Option<R>) -> Option<R> {
		if let Some(found) = f(self) {
			return Some(found);
		}
		let children = self.children();
		children.iter().find_map(|child| child.find_map(&mut *f))
	}

	fn is_inclusive_descendant_of(&self, other: &Node) -> bool {
		let mut current = Some(self.clone());
		while let Some(node) = current {
			if node.ptr_eq(other) {
				return true;
			}
			current = node.parent();
		}
		false
	}

	pub(crate) fn text_data(&self) -> Option<String> {
		match &self.inner.data {
			NodeData::Text(text) => Some(text.borrow().clone()),
			_ => None,
		}
	}
}

impl fmt::Debug for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.inner.data {
			NodeData::Element(data) => f
				.debug_struct("Node")
				.field("type", &NodeType::Element)
				.field("tag", &data.tag)
				.field("children", &self.child_count())
				.finish(),
			NodeData::Text(text) => f
				.debug_struct("Node")
				.field("type", &NodeType::Text)
				.field("text", &*text.borrow())
				.finish(),
			NodeData::ShadowRoot => f
				.debug_struct("Node")
				.field("type", &NodeType::ShadowRoot)
				.field("children", &self.child_count())
				.finish(),
		}
	}
}

impl From<&str> for Node {
	fn from(text: &str) -> Self {
		Node::new_text(text)
	}
}

impl From<String> for Node {
	fn from(text: String) -> Self {
		Node::new_text(text)
	}
}
