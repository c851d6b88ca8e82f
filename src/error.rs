use std::path::PathBuf;

use thiserror::Error;

use crate::data::model::Attribute;

/// Errors raised while reading dumps and composing figures.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// Dump file missing or unreadable
    #[error("cannot read dump file {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line does not match the nine-column schema
    #[error("{origin}:{line}: {reason}")]
    Parse {
        origin: String,
        line: usize,
        reason: String,
    },

    /// Requested column name is not one of the nine dump columns
    #[error("unknown attribute '{0}'")]
    AttributeNotFound(String),

    /// Column exists but cannot be used as a numeric axis
    #[error("attribute '{0}' is not numeric")]
    NonNumericAttribute(Attribute),

    /// Table or type subset has no rows; the panel is drawn empty
    #[error("no data for {0}")]
    EmptyData(String),

    /// Rendering the figure to an image failed
    #[error("export failed: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_messages() {
        assert_eq!(
            ViewerError::AttributeNotFound("Mass".into()).to_string(),
            "unknown attribute 'Mass'"
        );
        assert_eq!(
            ViewerError::NonNumericAttribute(Attribute::Type).to_string(),
            "attribute 'Type' is not numeric"
        );
    }

    #[test]
    fn test_parse_error_message_carries_location() {
        let err = ViewerError::Parse {
            origin: "dumps/0.txt".into(),
            line: 7,
            reason: "expected 9 fields, found 8".into(),
        };
        assert_eq!(err.to_string(), "dumps/0.txt:7: expected 9 fields, found 8");
    }
}
