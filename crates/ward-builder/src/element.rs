//! Element tree
//!
//! [`Element`] is a cheap, clonable handle to a node of the tree owned by a
//! [`Generator`](crate::Generator). Construction methods append a new child
//! and return its handle; attribute and text methods mutate the node in
//! place and return the same handle, so calls can be chained:
//!
//! ```
//! use ward_builder::Generator;
//!
//! let generator = Generator::default();
//! let list = generator.root().ul().attr("class", "menu");
//! list.li().add_text("Home");
//! list.li().add_text("About & contact");
//!
//! assert_eq!(
//!     generator.generate(),
//!     r#"<ul class="menu"><li>Home</li><li>About &amp; contact</li></ul>"#
//! );
//! ```
//!
//! ## Misuse
//!
//! Calls that would break the tree's invariants are ignored and reported
//! with a `tracing` warning:
//!
//! - adding a child to a void element, or with a malformed tag name, returns
//!   a detached element that is never rendered;
//! - adding text to a void element does nothing;
//! - adding text to, or assigning an attribute on, the document root does
//!   nothing, since the root renders only its children;
//! - assigning an attribute with a malformed name does nothing.

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use ward_security::PolicyTable;
use ward_security::policy::is_valid_attribute_name;
use ward_security::xss::escape_html;

use crate::attributes::AttributeValue;
use crate::render;
use crate::tag::{Tag, TagKind, is_valid_tag_name, lookup_tag};

/// Policy table shared by every element of one generator
pub(crate) type SharedPolicy = Rc<RefCell<PolicyTable>>;

/// Attribute key/value pair for [`Element::with_attrs`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
	pub key: String,
	pub value: String,
}

/// Creates a [`KeyValue`] pair.
pub fn kv(key: impl Into<String>, value: impl Into<String>) -> KeyValue {
	KeyValue {
		key: key.into(),
		value: value.into(),
	}
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for KeyValue {
	fn from((key, value): (K, V)) -> Self {
		kv(key, value)
	}
}

pub(crate) struct Node {
	pub(crate) tag: Tag,
	pub(crate) attributes: HashMap<String, AttributeValue>,
	pub(crate) children: Vec<Element>,
	pub(crate) content: String,
	parent: Weak<RefCell<Node>>,
	policy: SharedPolicy,
}

/// Handle to a node of the element tree
///
/// Clones share the same node. Handles are `!Send`: a tree belongs to the
/// thread that built it.
#[derive(Clone)]
pub struct Element {
	node: Rc<RefCell<Node>>,
}

impl fmt::Debug for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let node = self.node.borrow();
		f.debug_struct("Element")
			.field("tag", &node.tag)
			.field("attributes", &node.attributes)
			.field("content", &node.content)
			.field("children", &node.children)
			.finish()
	}
}

impl PartialEq for Element {
	/// Two handles are equal when they point at the same node.
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.node, &other.node)
	}
}

impl Eq for Element {}

impl Element {
	pub(crate) fn root(policy: SharedPolicy) -> Self {
		Self::detached(Tag::root(), policy)
	}

	fn detached(tag: Tag, policy: SharedPolicy) -> Self {
		Self {
			node: Rc::new(RefCell::new(Node {
				tag,
				attributes: HashMap::new(),
				children: Vec::new(),
				content: String::new(),
				parent: Weak::new(),
				policy,
			})),
		}
	}

	pub(crate) fn node(&self) -> std::cell::Ref<'_, Node> {
		self.node.borrow()
	}

	fn policy(&self) -> SharedPolicy {
		Rc::clone(&self.node.borrow().policy)
	}

	/// Appends a child with the given tag and returns it.
	fn append(&self, tag: Tag) -> Element {
		let policy = self.policy();
		let parent_tag = self.tag();

		if parent_tag.is_void() {
			tracing::warn!(parent = %parent_tag, child = %tag, "void elements cannot have children; child is detached");
			return Self::detached(tag, policy);
		}
		if !is_valid_tag_name(tag.name()) {
			tracing::warn!(tag = tag.name(), "malformed tag name; element is detached");
			return Self::detached(tag, policy);
		}

		let child = Self::detached(tag, policy);
		child.node.borrow_mut().parent = Rc::downgrade(&self.node);
		self.node.borrow_mut().children.push(child.clone());
		child
	}

	/// Appends a normal (non-void) child element and returns it.
	pub fn add(&self, tag: impl Into<Cow<'static, str>>) -> Element {
		self.append(Tag::Normal(tag.into()))
	}

	/// Appends a void child element and returns it.
	pub fn add_void(&self, tag: impl Into<Cow<'static, str>>) -> Element {
		self.append(Tag::Void(tag.into()))
	}

	/// Appends a child element, taking its kind from the tag table.
	///
	/// Names outside the table, such as custom elements, are normal tags.
	pub fn element(&self, name: impl Into<Cow<'static, str>>) -> Element {
		let name = name.into();
		let kind = lookup_tag(&name).unwrap_or(TagKind::Normal);
		self.append(Tag::new(name, kind))
	}

	/// Assigns an attribute through the generator's policy table.
	///
	/// - `class` values accumulate as space-separated tokens.
	/// - `style` values accumulate as `;`-terminated declarations.
	/// - URL attributes (`href`, `src`, ...) are validated; unsafe URLs
	///   become `#`.
	/// - Other allowed attributes are escaped and replaced.
	/// - Unknown attributes are stored as `data-<key>` unless they already
	///   carry a pass-through prefix (`data-`, `js-`).
	///
	/// # Example
	///
	/// ```
	/// use ward_builder::Generator;
	///
	/// let generator = Generator::default();
	/// let button = generator
	///     .root()
	///     .button()
	///     .attr("class", "btn")
	///     .attr("class", "primary")
	///     .attr("onclick", "alert('Hi')");
	///
	/// assert_eq!(button.attribute("class").as_deref(), Some("btn primary"));
	/// assert_eq!(button.attribute("onclick"), None);
	/// assert_eq!(
	///     button.attribute("data-onclick").as_deref(),
	///     Some("alert(&#x27;Hi&#x27;)")
	/// );
	/// ```
	pub fn attr(&self, key: &str, value: &str) -> Element {
		if !is_valid_attribute_name(key) {
			tracing::warn!(attribute = key, "malformed attribute name; assignment ignored");
			return self.clone();
		}
		if self.node.borrow().tag.is_root() {
			tracing::warn!(attribute = key, "the document root has no attributes; assignment ignored");
			return self.clone();
		}

		let policy = self.policy();
		let resolved = policy.borrow().resolve(key, value);
		let mut node = self.node.borrow_mut();
		node.attributes
			.entry(resolved.name.into_owned())
			.or_insert_with(|| AttributeValue::new(resolved.mode))
			.apply(resolved.mode, resolved.value);
		drop(node);
		self.clone()
	}

	/// Assigns several attributes in order, as repeated [`attr`](Self::attr)
	/// calls would.
	pub fn with_attrs<I>(&self, attrs: I) -> Element
	where
		I: IntoIterator,
		I::Item: Into<KeyValue>,
	{
		for pair in attrs {
			let KeyValue { key, value } = pair.into();
			self.attr(&key, &value);
		}
		self.clone()
	}

	/// Appends escaped text to the element's content.
	pub fn add_text(&self, content: &str) -> Element {
		let mut node = self.node.borrow_mut();
		if node.tag.is_void() {
			tracing::warn!(tag = %node.tag, "void elements cannot have text content; text ignored");
		} else if node.tag.is_root() {
			tracing::warn!("the document root has no text content; text ignored");
		} else {
			node.content.push_str(&escape_html(content));
		}
		drop(node);
		self.clone()
	}

	pub fn tag(&self) -> Tag {
		self.node.borrow().tag.clone()
	}

	pub fn is_void(&self) -> bool {
		self.node.borrow().tag.is_void()
	}

	/// Parent element, `None` for the root and for detached elements.
	pub fn parent(&self) -> Option<Element> {
		self.node
			.borrow()
			.parent
			.upgrade()
			.map(|node| Element { node })
	}

	pub fn children(&self) -> Vec<Element> {
		self.node.borrow().children.clone()
	}

	/// Escaped text content.
	pub fn text_content(&self) -> String {
		self.node.borrow().content.clone()
	}

	/// Serialized value of an attribute, as it will be rendered.
	pub fn attribute(&self, name: &str) -> Option<String> {
		self.node.borrow().attributes.get(name).map(AttributeValue::join)
	}

	/// Names of the attributes set on this element, in no particular order.
	pub fn attribute_names(&self) -> Vec<String> {
		self.node.borrow().attributes.keys().cloned().collect()
	}

	/// Renders this element and its descendants.
	pub fn render(&self) -> String {
		render::render(self)
	}
}
