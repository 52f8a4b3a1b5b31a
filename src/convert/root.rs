//! `<vector>` → `<svg>`.

use super::{ConvertError, required_attr};
use crate::svg::{SVG_NAMESPACE, SvgElement, SvgTag};
use crate::vector::{SourceElement, strip_dimension_unit};

/// Build the SVG root from the document-level sizing attributes.
pub fn convert_root(vector: &SourceElement<'_, '_>) -> Result<SvgElement, ConvertError> {
    let width = strip_dimension_unit(required_attr(vector, "width")?);
    let height = strip_dimension_unit(required_attr(vector, "height")?);
    let viewport_width = strip_dimension_unit(required_attr(vector, "viewportWidth")?);
    let viewport_height = strip_dimension_unit(required_attr(vector, "viewportHeight")?);

    let mut svg = SvgElement::new(SvgTag::Svg)
        .with("xmlns", SVG_NAMESPACE)
        .with("width", width)
        .with("height", height)
        .with("viewBox", format!("0 0 {viewport_width} {viewport_height}"));
    svg.set_opt("opacity", vector.attr("alpha"));

    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::tests::with_root;

    #[test]
    fn test_root_sizing() {
        with_root(
            r#"android:width="48dp" android:height="32dp"
               android:viewportWidth="960" android:viewportHeight="640""#,
            "",
            |vector| {
                let svg = convert_root(vector).unwrap();
                let attrs: Vec<_> = svg.attrs().collect();
                assert_eq!(
                    attrs,
                    vec![
                        ("xmlns", SVG_NAMESPACE),
                        ("width", "48"),
                        ("height", "32"),
                        ("viewBox", "0 0 960 640"),
                    ]
                );
            },
        );
    }

    #[test]
    fn test_root_alpha_becomes_opacity() {
        with_root(
            r#"android:width="24dp" android:height="24dp"
               android:viewportWidth="24" android:viewportHeight="24"
               android:alpha="0.6""#,
            "",
            |vector| {
                let svg = convert_root(vector).unwrap();
                assert_eq!(svg.get("opacity"), Some("0.6"));
            },
        );
    }

    #[test]
    fn test_root_missing_viewport() {
        with_root(
            r#"android:width="24dp" android:height="24dp" android:viewportWidth="24""#,
            "",
            |vector| {
                let err = convert_root(vector).unwrap_err();
                assert!(matches!(
                    err,
                    ConvertError::MissingAttribute {
                        attribute: "viewportHeight",
                        ..
                    }
                ));
            },
        );
    }

    #[test]
    fn test_root_unqualified_size_is_missing() {
        with_root(
            r#"width="24dp" android:height="24dp"
               android:viewportWidth="24" android:viewportHeight="24""#,
            "",
            |vector| {
                let err = convert_root(vector).unwrap_err();
                assert_eq!(
                    err.to_string(),
                    "<vector> is missing required attribute `width`"
                );
            },
        );
    }
}
