//! # textract-hocr
//!
//! Convert AWS Textract JSON output to hOCR markup.
//!
//! Textract reports a document as a flat list of relationship-linked
//! blocks (pages, lines, words, tables, cells) with normalized 0-1
//! geometry. This library rebuilds the implicit document tree, reconciles
//! table-owned content against free-standing lines, orders everything
//! top-to-bottom, and renders it as hOCR with pixel bounding boxes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use textract_hocr::{ConvertOptions, TextractDocument};
//!
//! fn main() -> textract_hocr::Result<()> {
//!     let doc = TextractDocument::from_file("analysis.json")?;
//!     let hocr = textract_hocr::to_hocr(&doc, &ConvertOptions::new())?;
//!     println!("{}", hocr);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Table reconciliation**: content linked under both a page and a
//!   table cell is rendered exactly once, inside the table
//! - **Reading order**: free lines grouped into paragraph blocks by
//!   vertical overlap; tables kept atomic
//! - **Pixel geometry**: coordinates rescaled from the source image or
//!   PDF page size, with the Textract 1000x1000 fallback
//! - **Tolerant of messy output**: dangling block references and
//!   unreadable source files never abort a conversion

pub mod convert;
pub mod dimensions;
pub mod error;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use convert::to_hocr;
pub use dimensions::{PageDimensions, TEXTRACT_DEFAULT_HEIGHT, TEXTRACT_DEFAULT_WIDTH};
pub use error::{Error, Result};
pub use model::{
    Block, BlockType, BoundingBox, Geometry, PixelBox, Point, Relationship, RelationshipType,
    TextractDocument,
};
pub use render::ConvertOptions;

use std::path::Path;

/// Convert a Textract JSON file to hOCR.
///
/// # Example
///
/// ```no_run
/// use textract_hocr::{convert_file, ConvertOptions};
///
/// let hocr = convert_file("analysis.json", &ConvertOptions::new()).unwrap();
/// std::fs::write("output.hocr", hocr).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<String> {
    let doc = TextractDocument::from_file(path)?;
    to_hocr(&doc, options)
}

/// Convert a Textract JSON string to hOCR.
pub fn convert_json(json: &str, options: &ConvertOptions) -> Result<String> {
    let doc = TextractDocument::from_json(json)?;
    to_hocr(&doc, options)
}

/// Builder for configuring and running conversions.
///
/// # Example
///
/// ```no_run
/// use textract_hocr::HocrConverter;
///
/// let hocr = HocrConverter::new()
///     .with_source("scan.pdf")
///     .with_pages(2, 5)
///     .convert_file("analysis.json")?;
/// # Ok::<(), textract_hocr::Error>(())
/// ```
pub struct HocrConverter {
    options: ConvertOptions,
}

impl HocrConverter {
    /// Create a new converter with default options.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::new(),
        }
    }

    /// Set the source image or PDF for dimension lookup.
    pub fn with_source(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.options = self.options.with_source(path);
        self
    }

    /// Restrict conversion to an inclusive 1-indexed page range.
    pub fn with_pages(mut self, first: u32, last: u32) -> Self {
        self.options = self.options.with_pages(first, last);
        self
    }

    /// Force explicit page dimensions.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.options = self.options.with_dimensions(width, height);
        self
    }

    /// Convert an already-parsed document.
    pub fn convert(&self, doc: &TextractDocument) -> Result<String> {
        to_hocr(doc, &self.options)
    }

    /// Convert a JSON string.
    pub fn convert_json(&self, json: &str) -> Result<String> {
        convert_json(json, &self.options)
    }

    /// Convert a JSON file.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        convert_file(path, &self.options)
    }
}

impl Default for HocrConverter {
    fn default() -> Self {
        Self::new()
    }
}
