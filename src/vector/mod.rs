//! Borrowed view over a parsed VectorDrawable document.
//!
//! Every attribute the converter reads is namespace-qualified. [`SourceElement`]
//! pairs a `roxmltree` node with the resolved namespace URI so lookups can't
//! accidentally match an unqualified or foreign-prefixed attribute.

mod value;

pub use value::{collapse_whitespace, strip_dimension_unit};

use roxmltree::Node;

/// Kind of a source element, decided by its tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Path,
    Group,
    ClipPath,
    /// Anything else (`aapt:attr`, future tags, ...). Skipped by the converter.
    Unknown,
}

impl SourceKind {
    /// Classify a node. Only unqualified tags are recognized.
    pub fn of(node: Node<'_, '_>) -> Self {
        let tag = node.tag_name();
        if tag.namespace().is_some() {
            return Self::Unknown;
        }
        match tag.name() {
            "path" => Self::Path,
            "group" => Self::Group,
            "clip-path" => Self::ClipPath,
            _ => Self::Unknown,
        }
    }
}

/// A source element with its attribute namespace attached.
#[derive(Debug, Clone, Copy)]
pub struct SourceElement<'a, 'input> {
    node: Node<'a, 'input>,
    namespace: &'a str,
}

impl<'a, 'input> SourceElement<'a, 'input> {
    pub fn new(node: Node<'a, 'input>, namespace: &'a str) -> Self {
        Self { node, namespace }
    }

    pub fn kind(&self) -> SourceKind {
        SourceKind::of(self.node)
    }

    /// Local tag name, used in diagnostics.
    pub fn tag(&self) -> &'a str {
        self.node.tag_name().name()
    }

    /// Look up `name` under the active namespace.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.attribute((self.namespace, name))
    }

    /// Child elements in document order; text and comments are skipped.
    pub fn children(&self) -> impl Iterator<Item = SourceElement<'a, 'input>> + use<'a, 'input> {
        let namespace = self.namespace;
        self.node
            .children()
            .filter(Node::is_element)
            .map(move |node| SourceElement::new(node, namespace))
    }
}
