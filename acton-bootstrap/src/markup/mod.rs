//! HTML markup tree
//!
//! Fields are rendered by building a small tree of [`Element`] nodes and
//! serializing it, so nesting is always balanced and every attribute value
//! passes through the same escaping path.
//!
//! # Examples
//!
//! ```rust
//! use acton_bootstrap::markup::Element;
//!
//! let html = Element::new("div")
//!     .attr("class", "form-check")
//!     .child(Element::new("input").attr("type", "radio").bare_attr("disabled"))
//!     .render();
//!
//! assert_eq!(html, r#"<div class="form-check"><input type="radio" disabled></div>"#);
//! ```

use std::fmt;

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Value of a single HTML attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Rendered by presence alone (`disabled`, `required`)
    Bare,
    /// Rendered as `name="value"`
    Value(String),
}

/// Ordered set of attributes keyed by name
///
/// Insertion order is preserved when serializing. Setting a name that is
/// already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    entries: Vec<(String, AttrValue)>,
}

impl AttributeSet {
    /// Create an empty attribute set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a `name="value"` attribute
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, AttrValue::Value(value.into()));
        self
    }

    /// Add a bare attribute
    #[must_use]
    pub fn with_bare(mut self, name: impl Into<String>) -> Self {
        self.set(name, AttrValue::Bare);
        self
    }

    /// Add a bare attribute only when `present` is true
    #[must_use]
    pub fn with_bare_if(self, name: impl Into<String>, present: bool) -> Self {
        if present {
            self.with_bare(name)
        } else {
            self
        }
    }

    /// Insert an attribute, replacing an existing value with the same name
    pub fn set(&mut self, name: impl Into<String>, value: AttrValue) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Look up an attribute by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Check whether an attribute is present (bare or valued)
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get the string value of a valued attribute
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(AttrValue::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// Number of attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no attributes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    fn write_html(&self, html: &mut String) {
        for (name, value) in &self.entries {
            html.push(' ');
            html.push_str(name);
            if let AttrValue::Value(value) = value {
                html.push_str("=\"");
                html.push_str(&escape_attr(value));
                html.push('"');
            }
        }
    }
}

/// Merge two attribute sets without mutating either
///
/// Attributes from `overrides` win over `base`. Names missing from `base`
/// are appended in the order they appear in `overrides`. A valued `class`
/// override is appended to the base class list rather than replacing it.
///
/// # Examples
///
/// ```rust
/// use acton_bootstrap::markup::{merge_attrs, AttributeSet};
///
/// let base = AttributeSet::new().with("class", "form-check-input").with("type", "radio");
/// let overrides = AttributeSet::new().with("class", "is-invalid").with_bare("disabled");
///
/// let merged = merge_attrs(&base, &overrides);
/// assert_eq!(merged.value_of("class"), Some("form-check-input is-invalid"));
/// assert!(merged.contains("disabled"));
/// ```
#[must_use]
pub fn merge_attrs(base: &AttributeSet, overrides: &AttributeSet) -> AttributeSet {
    let mut merged = base.clone();
    for (name, value) in overrides.iter() {
        let value = match (name, merged.get(name), value) {
            ("class", Some(AttrValue::Value(existing)), AttrValue::Value(extra)) => {
                AttrValue::Value(class_list([existing.as_str(), extra.as_str()]))
            }
            _ => value.clone(),
        };
        merged.set(name, value);
    }
    merged
}

/// Join class names into a single `class` value
///
/// Each entry may itself hold several space-separated classes. Empty entries
/// and repeated classes are dropped; first occurrence wins.
#[must_use]
pub fn class_list<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for class in classes.into_iter().flat_map(str::split_whitespace) {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}

/// A node in the markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element
    Element(Element),
    /// Text content, escaped on output
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// An HTML element with attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: AttributeSet,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: AttributeSet::new(),
            children: Vec::new(),
        }
    }

    /// Add or replace a `name="value"` attribute
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs = self.attrs.with(name, value);
        self
    }

    /// Add a bare attribute
    #[must_use]
    pub fn bare_attr(mut self, name: impl Into<String>) -> Self {
        self.attrs = self.attrs.with_bare(name);
        self
    }

    /// Add a bare attribute only when `present` is true
    #[must_use]
    pub fn bare_attr_if(mut self, name: impl Into<String>, present: bool) -> Self {
        self.attrs = self.attrs.with_bare_if(name, present);
        self
    }

    /// Merge an attribute set into this element's attributes
    #[must_use]
    pub fn merge(mut self, overrides: &AttributeSet) -> Self {
        self.attrs = merge_attrs(&self.attrs, overrides);
        self
    }

    /// Append a child node
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a child only when one is given
    #[must_use]
    pub fn child_opt(self, node: Option<impl Into<Node>>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }

    /// Append several children in order
    #[must_use]
    pub fn children(mut self, nodes: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append a text child
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Tag name
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in insertion order
    #[must_use]
    pub const fn attributes(&self) -> &AttributeSet {
        &self.attrs
    }

    /// Direct children
    #[must_use]
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Direct element children, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// All descendant elements with the given tag, in document order
    #[must_use]
    pub fn find_all(&self, tag: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    fn collect<'a>(&'a self, tag: &str, found: &mut Vec<&'a Self>) {
        for element in self.child_elements() {
            if element.tag == tag {
                found.push(element);
            }
            element.collect(tag, found);
        }
    }

    /// Concatenated text of this element and its descendants
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for node in &self.children {
            match node {
                Node::Text(t) => text.push_str(t),
                Node::Element(element) => text.push_str(&element.text_content()),
            }
        }
        text
    }

    /// Whether this element is written without a closing tag
    #[must_use]
    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    /// Serialize to an HTML string
    #[must_use]
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(256);
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, html: &mut String) {
        html.push('<');
        html.push_str(&self.tag);
        self.attrs.write_html(html);
        html.push('>');

        if self.is_void() {
            return;
        }

        for node in &self.children {
            match node {
                Node::Element(element) => element.write_html(html),
                Node::Text(text) => html.push_str(&escape_html(text)),
            }
        }

        html.push_str("</");
        html.push_str(&self.tag);
        html.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Escape a string for use in HTML attribute values
#[must_use]
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a string for use in HTML content
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
