//! Error types for highlight_segmenter
//!
//! The segmentation core never fails: strategies that do not apply return an
//! empty list. Errors only arise in the caller-level flow (blank documents,
//! documents with no identifiable highlights), in review operations, and in
//! configuration handling. Messages are written to be shown to the user as-is.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Main error type for highlight_segmenter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    /// The normalized document text has no content
    #[error("No text found in the document or the document might be scanned images")]
    EmptyInput,

    /// Text existed but no strategy produced a candidate
    #[error("Could not identify individual highlights in the document")]
    NoSegmentation,

    /// The upstream extraction collaborator failed before segmentation ran
    #[error("Failed to parse the document. The file might be corrupted or password-protected. ({message})")]
    UpstreamExtraction { message: String },

    /// Confirmation was requested with every candidate deselected
    #[error("No highlights selected to save")]
    NothingSelected,

    /// A required attribution field was left blank
    #[error("Please enter the {field}")]
    MissingAttribution { field: &'static str },

    /// A review operation addressed a candidate that does not exist
    #[error("Candidate index {index} out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl HighlightError {
    /// Create an upstream extraction error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamExtraction {
            message: message.into(),
        }
    }

    /// Create a missing attribution error
    pub fn missing_attribution(field: &'static str) -> Self {
        Self::MissingAttribution { field }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error means the document had no usable text at all
    /// (as opposed to text that could not be split into highlights).
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    /// Check if this error describes the uploaded document rather than a
    /// programming or configuration mistake.
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::NoSegmentation | Self::UpstreamExtraction { .. }
        )
    }
}

impl From<serde_json::Error> for HighlightError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
