//! Error types for loading listings and parsing strict input.
//!
//! Filtering, favourites and lookup never fail; only building a store from a
//! data source and strict parsing of ids or choice values can.

use crate::models::PropertyId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a listing dataset or building a store.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The listing file could not be read.
    #[error("failed to read listing file at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The listing JSON is malformed or missing required fields.
    #[error("invalid listing JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share an identifier.
    #[error("duplicate property id {0} in dataset")]
    DuplicateId(PropertyId),
}

/// Errors raised by strict parsing of user-supplied values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError {
    /// A choice field received a value outside its known set.
    #[error("unknown {field} '{value}'")]
    UnknownChoice { field: &'static str, value: String },

    /// A property id could not be parsed.
    #[error("invalid property id '{0}'")]
    InvalidId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_id_formats_correctly() {
        let err = ListingError::DuplicateId(PropertyId(4));
        assert_eq!(err.to_string(), "duplicate property id 4 in dataset");
    }

    #[test]
    fn unknown_choice_formats_correctly() {
        let err = CriteriaError::UnknownChoice {
            field: "type",
            value: "bungalow".to_string(),
        };
        assert_eq!(err.to_string(), "unknown type 'bungalow'");
    }
}
