//! Error types for the docdown library.

use thiserror::Error;

/// Result type alias for docdown operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering a document.
///
/// Everything recoverable (unsupported styling, missing footnote or image
/// references) is reported as a warning and rendering continues; only
/// structural inconsistencies in the source tree are fatal.
#[derive(Error, Debug)]
pub enum Error {
    /// A bullet referenced a list id absent from the document's list table.
    #[error("bullet references unknown list {0:?}")]
    UnknownList(String),

    /// A bullet referenced a nesting level its list does not define.
    #[error("list {list_id:?} has no nesting level {nesting_level}")]
    UnknownListLevel {
        /// The list the bullet pointed at.
        list_id: String,
        /// The nesting level that was not found.
        nesting_level: u32,
    },

    /// A segment range does not fit inside the document body.
    #[error("segment {start}..{end} is out of range (document has {len} elements)")]
    SegmentOutOfRange {
        /// Start of the offending range.
        start: usize,
        /// End of the offending range.
        end: usize,
        /// Number of structural elements in the body.
        len: usize,
    },

    /// The document handed over by the fetch step could not be decoded.
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),
}
