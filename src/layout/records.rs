//! Derived, read-only views of page content.
//!
//! These records are built once per conversion from the block index and
//! never mutated afterwards; the renderer walks them directly.

use crate::model::{Block, BoundingBox, Point};

/// A word, with everything the renderer needs.
#[derive(Debug, Clone)]
pub struct WordRecord {
    /// Source block id
    pub id: String,
    /// Recognized text
    pub text: String,
    /// Confidence 0-100
    pub confidence: f64,
    /// Normalized bounding box
    pub bbox: BoundingBox,
    /// Normalized polygon
    pub polygon: Vec<Point>,
}

impl WordRecord {
    pub(crate) fn from_block(block: &Block) -> Self {
        Self {
            id: block.id.clone(),
            text: block.text().to_string(),
            confidence: block.confidence(),
            bbox: block.geometry.bounding_box,
            polygon: block.geometry.polygon.clone(),
        }
    }
}

/// A line and its words, in source relationship order.
#[derive(Debug, Clone)]
pub struct LineRecord {
    /// Source block id
    pub id: String,
    /// Recognized text
    pub text: String,
    /// Confidence 0-100
    pub confidence: f64,
    /// Normalized bounding box
    pub bbox: BoundingBox,
    /// Normalized polygon
    pub polygon: Vec<Point>,
    /// Word records, relationship order preserved
    pub words: Vec<WordRecord>,
}

/// A table and its cells.
#[derive(Debug, Clone)]
pub struct TableRecord {
    /// Source block id
    pub id: String,
    /// Confidence 0-100
    pub confidence: f64,
    /// Normalized bounding box
    pub bbox: BoundingBox,
    /// Normalized polygon
    pub polygon: Vec<Point>,
    /// Cell records, relationship order preserved
    pub cells: Vec<CellRecord>,
}

/// A table cell: grid position plus its content.
#[derive(Debug, Clone)]
pub struct CellRecord {
    /// Source block id
    pub id: String,
    /// Row position, 1-indexed
    pub row_index: u32,
    /// Column position, 1-indexed
    pub column_index: u32,
    /// Rows spanned
    pub row_span: u32,
    /// Columns spanned
    pub column_span: u32,
    /// Confidence 0-100
    pub confidence: f64,
    /// Normalized bounding box
    pub bbox: BoundingBox,
    /// Normalized polygon
    pub polygon: Vec<Point>,
    /// Cell content
    pub content: CellContent,
}

/// The content of a table cell.
///
/// A cell's direct children are either LINE blocks or, for span/merge
/// artifacts, bare WORD blocks with no intervening line. The two forms
/// never mix within one cell; a cell may also be empty.
#[derive(Debug, Clone)]
pub enum CellContent {
    /// The cell owns whole lines (the common case; empty list = empty cell)
    Lines(Vec<LineRecord>),
    /// The cell owns bare words directly
    Words(Vec<WordRecord>),
}

impl CellContent {
    /// Whether the cell has no text content at all.
    pub fn is_empty(&self) -> bool {
        match self {
            CellContent::Lines(lines) => lines.is_empty(),
            CellContent::Words(words) => words.is_empty(),
        }
    }
}
