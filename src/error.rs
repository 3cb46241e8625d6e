//! Error types for the textract-hocr library.

use std::io;
use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid Textract JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document carries no page count.
    #[error("Document metadata is missing or has no page count")]
    MissingMetadata,

    /// A requested page bound falls outside the document.
    #[error("Page {page} is out of range (document has {total} pages)")]
    PageOutOfRange {
        /// The offending page bound
        page: u32,
        /// Total pages in the document
        total: u32,
    },

    /// The requested page range is inverted.
    #[error("Invalid page range: first page {first} is greater than last page {last}")]
    InvalidPageRange {
        /// Requested first page
        first: u32,
        /// Requested last page
        last: u32,
    },

    /// Error while emitting hOCR markup.
    #[error("Rendering error: {0}")]
    Render(String),
}
