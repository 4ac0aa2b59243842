//! Serialization of the element tree
//!
//! Elements are written in pre-order:
//!
//! - the root writes its children only;
//! - a void element writes `<name attrs />`;
//! - a normal element writes its open tag, its text content, its children
//!   and its closing tag.
//!
//! Text content and attribute values are stored already escaped, so the
//! serializer writes them as-is. Attributes are written in the iteration
//! order of the element's attribute map, which is not stable between runs.

use crate::element::Element;

/// Renders `element` and its descendants to a string.
pub(crate) fn render(element: &Element) -> String {
	let mut out = String::new();
	write_element(&mut out, element);
	out
}

fn write_element(out: &mut String, element: &Element) {
	let node = element.node();

	if node.tag.is_root() {
		for child in &node.children {
			write_element(out, child);
		}
		return;
	}

	let name = node.tag.name();
	out.push('<');
	out.push_str(name);
	for (key, value) in &node.attributes {
		out.push(' ');
		out.push_str(key);
		out.push_str("=\"");
		out.push_str(&value.join());
		out.push('"');
	}

	if node.tag.is_void() {
		out.push_str(" />");
		return;
	}

	out.push('>');
	out.push_str(&node.content);
	for child in &node.children {
		write_element(out, child);
	}
	out.push_str("</");
	out.push_str(name);
	out.push('>');
}
