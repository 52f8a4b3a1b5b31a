//! Attribute value normalization.

/// Dimension suffixes Android accepts on `width` / `height`.
const DIMENSION_UNITS: &[&str] = &["dip", "dp", "sp", "px", "pt", "in", "mm"];

/// Collapse every run of whitespace into a single space and trim both ends.
///
/// Path data is often wrapped across lines in resource files; SVG doesn't care
/// but the output reads better on one line.
pub fn collapse_whitespace(data: &str) -> String {
    data.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip a trailing density unit, e.g. `"24dp"` -> `"24"`.
///
/// Values without a known unit are returned unchanged (trimmed).
pub fn strip_dimension_unit(value: &str) -> &str {
    let value = value.trim();
    DIMENSION_UNITS
        .iter()
        .find_map(|unit| value.strip_suffix(unit))
        .unwrap_or(value)
}
