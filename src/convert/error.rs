//! Conversion error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a conversion.
///
/// None of these are recovered from inside the tree walk; the first one
/// raised ends the conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("root element declares no `xmlns:{prefix}` namespace")]
    MissingNamespace { prefix: String },

    #[error("<{element}> is missing required attribute `{attribute}`")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    #[error("input is not well-formed XML")]
    MalformedInput(#[from] roxmltree::Error),

    #[error("IO error on `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to serialize SVG")]
    Serialize(#[source] std::io::Error),
}

impl ConvertError {
    pub fn missing_attribute(element: &str, attribute: &'static str) -> Self {
        Self::MissingAttribute {
            element: element.to_owned(),
            attribute,
        }
    }
}
