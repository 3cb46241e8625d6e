//! Table ownership reconciliation.
//!
//! Textract emits line and word content twice: once reachable from the
//! page and once reachable from a table cell. Before free lines can be
//! extracted, every line and word reachable from a table has to be marked
//! table-owned so it is rendered exactly once, inside the table.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use super::BlockIndex;
use crate::model::BlockType;

/// The ids of all lines and words owned by some table.
///
/// Computed once per conversion, before free-line extraction. A line is
/// free iff its id is not in `line_ids`.
#[derive(Debug, Default)]
pub struct TableOwnership<'a> {
    /// Line ids reachable from a table cell (directly or by word overlap)
    pub line_ids: HashSet<&'a str>,
    /// Word ids reachable from a table cell
    pub word_ids: HashSet<&'a str>,
}

impl<'a> TableOwnership<'a> {
    /// Walk every table on the given pages and collect owned content.
    ///
    /// For each TABLE, each CELL child, each direct child of that cell:
    /// a WORD is owned directly; a LINE is owned together with all of its
    /// WORD children. Afterwards, any page-level LINE whose words overlap
    /// the owned-word set is reclassified as table-owned as well —
    /// Textract sometimes links a line under both its page and a cell,
    /// and a single shared word is enough to pull the whole line in.
    pub fn collect(index: &BlockIndex<'a>, pages: RangeInclusive<u32>) -> Self {
        let mut ownership = TableOwnership::default();

        for page in pages.clone() {
            for table in index.blocks_of_type(BlockType::Table, page) {
                for cell in index.children_of(table, BlockType::Cell) {
                    for child in index.children(cell) {
                        match child.block_type {
                            BlockType::Word => {
                                ownership.word_ids.insert(child.id.as_str());
                            }
                            BlockType::Line => {
                                ownership.line_ids.insert(child.id.as_str());
                                for word in index.children_of(child, BlockType::Word) {
                                    ownership.word_ids.insert(word.id.as_str());
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }
        }

        // Reclassify page-linked lines that share words with a table.
        for page in pages {
            for line in index.blocks_of_type(BlockType::Line, page) {
                if ownership.line_ids.contains(line.id.as_str()) {
                    continue;
                }
                if line
                    .child_ids()
                    .any(|id| ownership.word_ids.contains(id))
                {
                    log::debug!("line {} shares words with a table, reclassifying", line.id);
                    ownership.line_ids.insert(line.id.as_str());
                }
            }
        }

        ownership
    }

    /// Whether a line id is owned by a table.
    pub fn owns_line(&self, id: &str) -> bool {
        self.line_ids.contains(id)
    }

    /// Whether a word id is owned by a table.
    pub fn owns_word(&self, id: &str) -> bool {
        self.word_ids.contains(id)
    }
}
