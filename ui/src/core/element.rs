//! Runtime-independent element tree.
//!
//! Views describe their output as an `ElementTree` (kind + attributes +
//! children) rather than talking to a renderer directly. A host runtime maps
//! the tree to real output; two mappings ship with the crate: serde (JSON) and
//! static HTML via [`ElementTree::to_html`].

use std::fmt;

use askama_escape::{escape, Html};
use serde::{Deserialize, Serialize};

/// Node kinds the header vocabulary needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    #[serde(rename = "div")]
    Div,
    #[serde(rename = "a")]
    Anchor,
}

impl ElementKind {
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Div => "div",
            ElementKind::Anchor => "a",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// HTML attribute name rules: non-empty, no whitespace, controls,
    /// quotes, `>`, `/` or `=`.
    pub fn has_valid_name(&self) -> bool {
        !self.name.is_empty()
            && !self.name.chars().any(|c| {
                c.is_whitespace()
                    || c.is_control()
                    || matches!(c, '"' | '\'' | '>' | '/' | '=' | '<')
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementTree {
    Element {
        kind: ElementKind,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        attributes: Vec<Attribute>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<ElementTree>,
    },
    Text(String),
}

impl ElementTree {
    pub fn element(kind: ElementKind) -> Self {
        ElementTree::Element {
            kind,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// `div` carrying a style-class identifier.
    pub fn div(class: &str) -> Self {
        Self::element(ElementKind::Div).with_attribute("class", class)
    }

    /// `a` pointing at `href` with a single text child.
    pub fn anchor(href: &str, label: &str) -> Self {
        Self::element(ElementKind::Anchor)
            .with_attribute("href", href)
            .with_child(Self::text(label))
    }

    pub fn text(value: impl Into<String>) -> Self {
        ElementTree::Text(value.into())
    }

    /// Appends an attribute. Text nodes are returned unchanged, and names that
    /// are not valid HTML attribute names are dropped.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        if let ElementTree::Element { attributes, .. } = &mut self {
            let attr = Attribute::new(name, value);
            if attr.has_valid_name() {
                attributes.push(attr);
            } else {
                log::warn!("dropping invalid attribute name {name:?}");
            }
        }
        self
    }

    /// Appends a child. Text nodes are returned unchanged.
    pub fn with_child(mut self, child: ElementTree) -> Self {
        if let ElementTree::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn with_children<I>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = ElementTree>,
    {
        if let ElementTree::Element { children, .. } = &mut self {
            children.extend(iter);
        }
        self
    }

    pub fn kind(&self) -> Option<ElementKind> {
        match self {
            ElementTree::Element { kind, .. } => Some(*kind),
            ElementTree::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[ElementTree] {
        match self {
            ElementTree::Element { children, .. } => children,
            ElementTree::Text(_) => &[],
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            ElementTree::Element { attributes, .. } => attributes
                .iter()
                .find(|a| a.name == name)
                .map(|a| a.value.as_str()),
            ElementTree::Text(_) => None,
        }
    }

    pub fn class(&self) -> Option<&str> {
        self.attribute("class")
    }

    pub fn href(&self) -> Option<&str> {
        self.attribute("href")
    }

    /// Concatenated text of this node and all its descendants.
    pub fn text_content(&self) -> String {
        self.descendants()
            .filter_map(|node| match node {
                ElementTree::Text(t) => Some(t.as_str()),
                ElementTree::Element { .. } => None,
            })
            .collect()
    }

    /// Pre-order walk, starting with `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    pub fn find_by_class(&self, class: &str) -> Option<&ElementTree> {
        self.descendants().find(|node| node.class() == Some(class))
    }

    pub fn count_class(&self, class: &str) -> usize {
        self.descendants()
            .filter(|node| node.class() == Some(class))
            .count()
    }

    /// Every anchor in document order.
    pub fn links(&self) -> Vec<&ElementTree> {
        self.descendants()
            .filter(|node| node.kind() == Some(ElementKind::Anchor))
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(src: &str) -> serde_json::Result<Self> {
        serde_json::from_str(src)
    }

    /// Static markup for the tree.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ElementTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementTree::Text(t) => write!(f, "{}", escape(t, Html)),
            ElementTree::Element {
                kind,
                attributes,
                children,
            } => {
                write!(f, "<{}", kind.tag())?;
                // Deserialized trees bypass `with_attribute`, so names are checked here too.
                for attr in attributes.iter().filter(|a| a.has_valid_name()) {
                    write!(f, " {}=\"{}\"", attr.name, escape(&attr.value, Html))?;
                }
                f.write_str(">")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{}>", kind.tag())
            }
        }
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a ElementTree>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a ElementTree;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reverse push keeps document order on pop.
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
