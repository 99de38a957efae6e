//! HTML serialization of document trees.

use std::borrow::Cow;

use super::document::Document;
use super::node::{Node, NodeData};

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// Elements whose text content is written without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl Node {
	/// Serializes this node and its descendants to HTML.
	///
	/// Text and attribute values are escaped, except text inside `<script>` and
	/// `<style>`. Void elements get no closing tag. An attached shadow root is
	/// written first, as a declarative `<template shadowrootmode="open">`.
	pub fn to_html(&self) -> String {
		let mut out = String::new();
		write_node(self, &mut out, false);
		out
	}
}

impl Document {
	/// Serializes the whole document, starting with `<!DOCTYPE html>`.
	pub fn to_html(&self) -> String {
		let mut out = String::from("<!DOCTYPE html>");
		write_node(&self.document_element(), &mut out, false);
		out
	}
}

fn write_node(node: &Node, out: &mut String, raw_text: bool) {
	match &node.inner.data {
		NodeData::Text(text) => {
			let text = text.borrow();
			if raw_text {
				out.push_str(&text);
			} else {
				out.push_str(&html_escape(&text));
			}
		}
		NodeData::ShadowRoot => write_children(node, out, false),
		NodeData::Element(data) => {
			out.push('<');
			out.push_str(&data.tag);
			if let Some(element) = node.as_element() {
				for (name, value) in element.attributes() {
					out.push(' ');
					out.push_str(&name);
					out.push_str("=\"");
					out.push_str(&html_escape(&value));
					out.push('"');
				}
				out.push('>');
				if VOID_ELEMENTS.contains(&data.tag.as_str()) {
					return;
				}
				if let Some(shadow) = element.shadow_root() {
					out.push_str("<template shadowrootmode=\"open\">");
					write_children(&shadow, out, false);
					out.push_str("</template>");
				}
			}
			write_children(node, out, RAW_TEXT_ELEMENTS.contains(&data.tag.as_str()));
			out.push_str("</");
			out.push_str(&data.tag);
			out.push('>');
		}
	}
}

fn write_children(node: &Node, out: &mut String, raw_text: bool) {
	for child in node.children() {
		write_node(&child, out, raw_text);
	}
}

/// Escapes HTML special characters.
pub(crate) fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}
