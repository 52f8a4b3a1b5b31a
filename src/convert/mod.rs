//! VectorDrawable → SVG translation.
//!
//! # Architecture
//!
//! ```text
//! <vector>  ──► root::convert_root ──► <svg>
//!    │
//!    ├─ <path>       ──► path::convert_path ──► <path>
//!    ├─ <group>      ──► Converter::convert_group ──► <g transform=..> (recurses)
//!    ├─ <clip-path>  ──► ClipRegistry::collect ──► clip-path="url(#clipPathN)"
//!    └─ other        ──► skipped
//!
//! after the walk: ClipRegistry::flush_into ──► <defs><clipPath id="clipPathN">..</defs>
//! ```
//!
//! The attribute namespace is resolved once from the root element and carried by
//! every [`SourceElement`]; the clip registry lives on the [`Converter`] for the
//! duration of one call. Nothing is process-wide.

mod clip;
mod error;
mod group;
mod path;
mod root;


use clip::ClipRegistry;
pub use error::ConvertError;

use roxmltree::{Document, ParsingOptions};
use std::{fs, path::Path};

use crate::debug;
use crate::svg::{SvgElement, WriteOptions, write_document};
use crate::vector::{SourceElement, SourceKind};

/// Namespace prefix VectorDrawable files use for their attributes.
pub const DEFAULT_NAMESPACE_PREFIX: &str = "android";

/// Settings for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Prefix whose namespace URI qualifies every attribute lookup.
    pub namespace_prefix: String,
    pub write: WriteOptions,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            namespace_prefix: DEFAULT_NAMESPACE_PREFIX.to_string(),
            write: WriteOptions::default(),
        }
    }
}

/// What a file conversion produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub clip_regions: usize,
    pub bytes: usize,
}

/// Per-conversion walk state.
#[derive(Debug, Default)]
pub struct Converter {
    clips: ClipRegistry,
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert every child of `source` into `target`, in source order.
    fn convert_children(
        &mut self,
        source: &SourceElement<'_, '_>,
        target: &mut SvgElement,
    ) -> Result<(), ConvertError> {
        for child in source.children() {
            match child.kind() {
                SourceKind::Path => {
                    path::convert_path(&child, target)?;
                }
                SourceKind::Group => self.convert_group(&child, target)?,
                SourceKind::ClipPath => {
                    self.clips.collect(&child, target)?;
                }
                SourceKind::Unknown => {
                    debug!("convert"; "skipping unsupported <{}>", child.tag());
                }
            }
        }
        Ok(())
    }

    /// Walk the whole document and return the finished `<svg>` tree.
    pub fn convert(
        mut self,
        doc: &Document<'_>,
        namespace_prefix: &str,
    ) -> Result<(SvgElement, usize), ConvertError> {
        let root = doc.root_element();
        let namespace = root.lookup_namespace_uri(Some(namespace_prefix)).ok_or_else(|| {
            ConvertError::MissingNamespace {
                prefix: namespace_prefix.to_string(),
            }
        })?;
        debug!("convert"; "attribute namespace: {}", namespace);

        let source = SourceElement::new(root, namespace);
        let mut svg = root::convert_root(&source)?;
        self.convert_children(&source, &mut svg)?;

        let clip_regions = self.clips.len();
        debug!("convert"; "collected {} clip region(s)", clip_regions);
        self.clips.flush_into(&mut svg);

        Ok((svg, clip_regions))
    }
}

/// Look up an attribute the element can't do without.
fn required_attr<'a>(
    element: &SourceElement<'a, '_>,
    name: &'static str,
) -> Result<&'a str, ConvertError> {
    element
        .attr(name)
        .ok_or_else(|| ConvertError::missing_attribute(element.tag(), name))
}

/// Parse drawable source text. A `<!DOCTYPE>` prologue is accepted.
fn parse_document(input: &str) -> Result<Document<'_>, ConvertError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(input, options)?)
}

/// Convert VectorDrawable source text into serialized SVG bytes.
///
/// Also returns the number of clip regions that were hoisted into `<defs>`.
pub fn convert_str(
    input: &str,
    options: &ConvertOptions,
) -> Result<(Vec<u8>, usize), ConvertError> {
    let doc = parse_document(input)?;
    let (svg, clip_regions) = Converter::new().convert(&doc, &options.namespace_prefix)?;
    let bytes = write_document(&svg, options.write).map_err(ConvertError::Serialize)?;
    Ok((bytes, clip_regions))
}

/// Read `input`, convert it, and write the SVG to `output`.
///
/// The output file is only touched once the whole conversion has succeeded.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<ConvertSummary, ConvertError> {
    let text =
        fs::read_to_string(input).map_err(|err| ConvertError::Io(input.to_path_buf(), err))?;
    let (bytes, clip_regions) = convert_str(&text, options)?;
    fs::write(output, &bytes).map_err(|err| ConvertError::Io(output.to_path_buf(), err))?;
    debug!("convert"; "wrote {} bytes to {}", bytes.len(), output.display());

    Ok(ConvertSummary {
        clip_regions,
        bytes: bytes.len(),
    })
}
