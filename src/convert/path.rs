//! `<path>` → `<path>`.

use super::{ConvertError, required_attr};
use crate::svg::{SvgElement, SvgTag};
use crate::vector::{SourceElement, collapse_whitespace};

/// Paint attributes copied verbatim when present, omitted otherwise.
///
/// `fillColor` is handled separately since it defaults to `none`.
const PAINT_ATTRIBUTES: &[(&str, &str)] = &[
    ("fillType", "fill-rule"),
    ("fillAlpha", "fill-opacity"),
    ("strokeColor", "stroke"),
    ("strokeWidth", "stroke-width"),
    ("strokeAlpha", "stroke-opacity"),
    ("strokeLineCap", "stroke-linecap"),
    ("strokeLineJoin", "stroke-linejoin"),
    ("strokeMiterLimit", "stroke-miterlimit"),
];

/// Append the SVG equivalent of `path` to `parent` and return it.
///
/// Color values are not interpreted, so resource references such as
/// `@color/accent` or gradient ids pass through untouched.
pub fn convert_path<'p>(
    path: &SourceElement<'_, '_>,
    parent: &'p mut SvgElement,
) -> Result<&'p mut SvgElement, ConvertError> {
    let data = collapse_whitespace(required_attr(path, "pathData")?);

    let mut svg_path = SvgElement::new(SvgTag::Path).with("d", data);
    svg_path.set_opt("id", path.attr("name"));
    // SVG fills black by default; drawables don't.
    svg_path.set("fill", path.attr("fillColor").unwrap_or("none"));
    for &(source, target) in PAINT_ATTRIBUTES {
        svg_path.set_opt(target, path.attr(source));
    }

    Ok(parent.push(svg_path))
}
