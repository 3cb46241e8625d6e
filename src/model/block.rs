//! Textract block schema.
//!
//! A Textract result is a flat list of typed blocks; the document tree is
//! only implicit in the `CHILD` relationship links between them.

use serde::{Deserialize, Serialize};

use super::Geometry;

/// Default confidence when the field is absent.
pub const DEFAULT_CONFIDENCE: f64 = 100.0;

/// The type tag of a Textract block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    /// A physical page
    Page,
    /// A line of text
    Line,
    /// A single word
    Word,
    /// A detected table
    Table,
    /// A table cell
    Cell,
    /// Any block type this converter does not interpret
    #[serde(other)]
    Other,
}

/// The kind of a relationship between blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    /// Parent-to-child containment; the only kind this converter follows
    Child,
    /// Any other relationship kind (VALUE, MERGED_CELL, ...)
    #[serde(other)]
    Other,
}

/// A typed link from one block to an ordered list of others.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Relationship {
    /// Relationship kind
    #[serde(rename = "Type")]
    pub relationship_type: RelationshipType,
    /// Referenced block ids, in source order
    pub ids: Vec<String>,
}

/// A single block from a Textract result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Block {
    /// Block type tag
    pub block_type: BlockType,

    /// Unique id within the document
    pub id: String,

    /// Page number (1-indexed). Single-page results may omit it.
    #[serde(default = "default_page")]
    pub page: u32,

    /// Recognized text (LINE and WORD blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Recognition confidence, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// PRINTED or HANDWRITING (WORD blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_type: Option<String>,

    /// Bounding box and polygon
    #[serde(default)]
    pub geometry: Geometry,

    /// Typed links to other blocks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,

    /// Row position of a CELL block (1-indexed; 0 means unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_index: Option<u32>,

    /// Column position of a CELL block (1-indexed; 0 means unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_index: Option<u32>,

    /// Number of rows a CELL spans
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_span: Option<u32>,

    /// Number of columns a CELL spans
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_span: Option<u32>,
}

fn default_page() -> u32 {
    1
}

impl Block {
    /// Recognition confidence, defaulting to 100 when absent.
    pub fn confidence(&self) -> f64 {
        self.confidence.unwrap_or(DEFAULT_CONFIDENCE)
    }

    /// Recognized text, defaulting to empty when absent.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Ordered child ids across all CHILD relationships.
    pub fn child_ids(&self) -> impl Iterator<Item = &str> {
        self.relationships
            .iter()
            .filter(|r| r.relationship_type == RelationshipType::Child)
            .flat_map(|r| r.ids.iter().map(String::as_str))
    }

    /// Row index of a CELL, with the 0 sentinel coerced to 1.
    ///
    /// Textract indices are 1-based; 0 only appears in malformed output.
    pub fn row_index(&self) -> u32 {
        coerce_index(self.row_index, "RowIndex", &self.id)
    }

    /// Column index of a CELL, with the 0 sentinel coerced to 1.
    pub fn column_index(&self) -> u32 {
        coerce_index(self.column_index, "ColumnIndex", &self.id)
    }

    /// Row span of a CELL, defaulting to 1.
    pub fn row_span(&self) -> u32 {
        self.row_span.unwrap_or(1).max(1)
    }

    /// Column span of a CELL, defaulting to 1.
    pub fn column_span(&self) -> u32 {
        self.column_span.unwrap_or(1).max(1)
    }
}

fn coerce_index(value: Option<u32>, field: &str, id: &str) -> u32 {
    match value {
        Some(0) | None => {
            log::debug!("cell {} has unset {}, treating as 1", id, field);
            1
        }
        Some(n) => n,
    }
}
