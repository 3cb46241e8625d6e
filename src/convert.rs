//! Conversion orchestration.
//!
//! Ties the pipeline together: range validation, block indexing, table
//! reconciliation, per-page assembly and dimension resolution, rendering.

use crate::dimensions::{self, PageDimensions};
use crate::error::{Error, Result};
use crate::layout::{BlockIndex, PageModel, TableOwnership};
use crate::model::TextractDocument;
use crate::render::{render_document, ConvertOptions};

/// Convert a Textract document to an hOCR string.
///
/// Validates the requested page range against the document's page count,
/// then runs the single pass: index → reconcile → per-page model +
/// dimensions → render. A page container is produced for every page
/// number in the range, even when no blocks reference it.
///
/// # Errors
///
/// [`Error::MissingMetadata`] when the document has no page count,
/// [`Error::PageOutOfRange`] / [`Error::InvalidPageRange`] for bad
/// ranges. Dangling block references and dimension-lookup failures are
/// tolerated and never fail the conversion.
pub fn to_hocr(doc: &TextractDocument, options: &ConvertOptions) -> Result<String> {
    let total = doc.total_pages()?;

    let (first, last) = options.pages.unwrap_or((1, total));
    if first < 1 || first > total {
        return Err(Error::PageOutOfRange { page: first, total });
    }
    if last < 1 || last > total {
        return Err(Error::PageOutOfRange { page: last, total });
    }
    if first > last {
        return Err(Error::InvalidPageRange { first, last });
    }

    // A one-page document always converts in full; the range above is
    // validated but cannot select anything else.
    let range = if total == 1 { 1..=1 } else { first..=last };

    let index = BlockIndex::new(&doc.blocks);
    let ownership = TableOwnership::collect(&index, range.clone());

    let mut pages: Vec<(PageModel, PageDimensions)> = Vec::new();
    for number in range {
        let model = PageModel::build(number, &index, &ownership);
        // One lookup per page per call; resolver failures fall back to
        // defaults internally.
        let dims = dimensions::resolve(options.source.as_deref(), number, options.dimensions);
        log::debug!(
            "page {}: {} free lines, {} tables, {}x{}",
            number,
            model.lines.len(),
            model.tables.len(),
            dims.width,
            dims.height
        );
        pages.push((model, dims));
    }

    render_document(&pages)
}
