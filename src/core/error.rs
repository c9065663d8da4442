use thiserror::Error;

/// Errors that can occur while turning a [`SepaDocument`](super::SepaDocument)
/// into a pain XML file.
///
/// Generation is fail-fast: the first error aborts the whole document and
/// no partial output is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SepaError {
    /// A length-constrained identifier or name exceeds its maximum.
    #[error("max length for {field} is {max_length}, got {actual_length}")]
    Length {
        /// Path to the offending field (e.g. "batches[0].payments[2].name").
        field: String,
        /// Maximum number of characters allowed.
        max_length: usize,
        /// Number of characters actually supplied.
        actual_length: usize,
    },

    /// The schema selector does not name a supported pain version.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An amount or sum cannot be represented with two decimals.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// XML serialization failed.
    #[error("XML error: {0}")]
    Xml(String),
}

impl SepaError {
    /// Path of the offending field for [`SepaError::Length`], `None` otherwise.
    pub fn field(&self) -> Option<&str> {
        match self {
            SepaError::Length { field, .. } => Some(field),
            _ => None,
        }
    }
}
