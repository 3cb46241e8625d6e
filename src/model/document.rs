//! Top-level Textract document type.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Block;
use crate::error::{Error, Result};

/// Document-level metadata from a Textract result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentMetadata {
    /// Total number of pages Textract analyzed
    #[serde(default)]
    pub pages: u32,
}

/// A complete Textract analysis result: page count plus the flat block list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextractDocument {
    /// Document metadata; conversion requires a positive page count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_metadata: Option<DocumentMetadata>,

    /// The flat block list
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl TextractDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: TextractDocument = serde_json::from_str(json)?;
        Ok(doc)
    }

    /// Parse a document from an already-deserialized JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let doc: TextractDocument = serde_json::from_value(value)?;
        Ok(doc)
    }

    /// Read and parse a document from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Total page count.
    ///
    /// Fails with [`Error::MissingMetadata`] when the metadata is absent
    /// or reports zero pages.
    pub fn total_pages(&self) -> Result<u32> {
        match &self.document_metadata {
            Some(meta) if meta.pages >= 1 => Ok(meta.pages),
            _ => Err(Error::MissingMetadata),
        }
    }
}
