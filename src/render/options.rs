//! Conversion options.

use std::path::PathBuf;

use crate::dimensions::PageDimensions;

/// Options for one conversion call.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Path to the source image or PDF, used for dimension lookup
    pub source: Option<PathBuf>,

    /// Page range as (first, last), 1-indexed inclusive; `None` converts
    /// the whole document
    pub pages: Option<(u32, u32)>,

    /// Explicit page dimensions, overriding any source lookup
    pub dimensions: Option<PageDimensions>,
}

impl ConvertOptions {
    /// Create options with defaults: full document, no source, Textract
    /// default dimensions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source file for dimension lookup.
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Restrict conversion to an inclusive 1-indexed page range.
    pub fn with_pages(mut self, first: u32, last: u32) -> Self {
        self.pages = Some((first, last));
        self
    }

    /// Force explicit page dimensions.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = Some(PageDimensions { width, height });
        self
    }
}
