//! Structure recovery: from a flat block list to ordered page content.
//!
//! The stages run strictly in order, each producing an immutable value
//! the next one consumes:
//!
//! 1. [`BlockIndex`] — id and (page, type) lookup over the flat list.
//! 2. [`TableOwnership`] — which lines/words belong to tables.
//! 3. [`PageModel`] — free lines and table records for one page.
//! 4. [`assemble`] — reading order and paragraph grouping.

mod assemble;
mod index;
mod page;
mod reconcile;
mod records;

pub use assemble::{assemble, PageItem, ParagraphBlock};
pub use index::BlockIndex;
pub use page::PageModel;
pub use reconcile::TableOwnership;
pub use records::{CellContent, CellRecord, LineRecord, TableRecord, WordRecord};
