//! Custom error types for the application.
//!
//! - [`DataError`] - Sample dataset decoding and integrity errors

use thiserror::Error;

/// Errors raised while loading the embedded sample dataset.
///
/// Pages return these from their render closures so the router's error
/// boundary can show a fallback instead of the failing page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// The TOML source could not be decoded.
    #[error("sample dataset is malformed: {0}")]
    Malformed(String),
    /// A record references a station id that is not declared.
    #[error("{record} `{id}` references unknown station `{station}`")]
    UnknownStation {
        record: &'static str,
        id: String,
        station: String,
    },
    /// A bulletin carries no text in any language.
    #[error("bulletin `{0}` has no text")]
    EmptyBulletin(String),
    /// A bulletin has text, but none of it in English.
    #[error("bulletin `{0}` has no English text")]
    MissingEnglish(String),
}
