//! `<group>` → `<g transform=..>`.

use std::fmt;

use super::{ConvertError, Converter};
use crate::svg::{SvgElement, SvgTag};
use crate::vector::SourceElement;

/// The seven group transform parameters, kept as source text.
///
/// Values are never parsed as numbers; whatever the drawable says is what
/// ends up in the `transform` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupTransform<'a> {
    pub translate: (&'a str, &'a str),
    pub rotation: &'a str,
    pub pivot: (&'a str, &'a str),
    pub scale: (&'a str, &'a str),
}

impl Default for GroupTransform<'_> {
    fn default() -> Self {
        Self {
            translate: ("0", "0"),
            rotation: "0",
            pivot: ("0", "0"),
            scale: ("1", "1"),
        }
    }
}

impl<'a> GroupTransform<'a> {
    /// Read overrides from a `<group>`.
    ///
    /// Translation and pivot only apply as complete pairs. A lone `scaleX` or
    /// `scaleY` scales both axes.
    pub fn from_group(group: &SourceElement<'a, '_>) -> Self {
        let mut transform = Self::default();

        if let (Some(x), Some(y)) = (group.attr("translateX"), group.attr("translateY")) {
            transform.translate = (x, y);
        }
        if let Some(rotation) = group.attr("rotation") {
            transform.rotation = rotation;
        }
        if let (Some(x), Some(y)) = (group.attr("pivotX"), group.attr("pivotY")) {
            transform.pivot = (x, y);
        }
        transform.scale = match (group.attr("scaleX"), group.attr("scaleY")) {
            (Some(x), Some(y)) => (x, y),
            (Some(s), None) | (None, Some(s)) => (s, s),
            (None, None) => transform.scale,
        };

        transform
    }
}

impl fmt::Display for GroupTransform<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({} {}) rotate({} {} {}) scale({} {})",
            self.translate.0,
            self.translate.1,
            self.rotation,
            self.pivot.0,
            self.pivot.1,
            self.scale.0,
            self.scale.1
        )
    }
}

impl Converter {
    /// Append a `<g>` for `group` to `parent`, converting its subtree into it.
    pub(super) fn convert_group(
        &mut self,
        group: &SourceElement<'_, '_>,
        parent: &mut SvgElement,
    ) -> Result<(), ConvertError> {
        let mut g = SvgElement::new(SvgTag::Group);
        g.set_opt("id", group.attr("name"));
        g.set("transform", GroupTransform::from_group(group).to_string());

        self.convert_children(group, &mut g)?;
        parent.push(g);
        Ok(())
    }
}
