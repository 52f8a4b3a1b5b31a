//! Owned SVG output tree.
//!
//! The converter builds an [`SvgElement`] tree in memory and hands it to
//! [`writer::write_document`] once the walk is complete. Attributes keep
//! insertion order so the output is stable and diff-friendly.

mod writer;

pub use writer::{WriteOptions, write_document};

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// SVG element kinds the converter emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgTag {
    Svg,
    Group,
    Path,
    Defs,
    ClipPath,
}

impl SvgTag {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Group => "g",
            Self::Path => "path",
            Self::Defs => "defs",
            Self::ClipPath => "clipPath",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgElement {
    pub tag: SvgTag,
    attrs: Vec<(&'static str, String)>,
    pub children: Vec<SvgElement>,
}

impl SvgElement {
    pub fn new(tag: SvgTag) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute. An existing value is replaced in place.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set `name` only when `value` is present.
    pub fn set_opt(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.attrs.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Append a child and return a handle to it for further mutation.
    pub fn push(&mut self, child: SvgElement) -> &mut SvgElement {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }
}
