//! Block lookup structures.
//!
//! The flat block list only encodes the document tree through id links.
//! `BlockIndex` is built once per conversion and gives O(1) id lookup and
//! per-page, per-type grouping so the later stages never re-scan the list.

use std::collections::HashMap;

use crate::model::{Block, BlockType};

/// Lookup structures over a flat block list.
///
/// Borrows the blocks; valid for the duration of one conversion call.
pub struct BlockIndex<'a> {
    by_id: HashMap<&'a str, &'a Block>,
    by_page_type: HashMap<(u32, BlockType), Vec<&'a Block>>,
}

impl<'a> BlockIndex<'a> {
    /// Build the index over a block list.
    ///
    /// Duplicate ids keep the first occurrence; source order is preserved
    /// within every (page, type) group.
    pub fn new(blocks: &'a [Block]) -> Self {
        let mut by_id = HashMap::with_capacity(blocks.len());
        let mut by_page_type: HashMap<(u32, BlockType), Vec<&'a Block>> = HashMap::new();

        for block in blocks {
            by_id.entry(block.id.as_str()).or_insert(block);
            by_page_type
                .entry((block.page, block.block_type))
                .or_default()
                .push(block);
        }

        Self { by_id, by_page_type }
    }

    /// Look up a block by id.
    pub fn by_id(&self, id: &str) -> Option<&'a Block> {
        self.by_id.get(id).copied()
    }

    /// All blocks of a type on one page, in source order.
    pub fn blocks_of_type(&self, block_type: BlockType, page: u32) -> &[&'a Block] {
        self.by_page_type
            .get(&(page, block_type))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolve a block's CHILD ids to blocks of the requested type.
    ///
    /// Preserves relationship order. Ids that resolve to a different type
    /// are filtered; ids with no matching block are skipped, since Textract
    /// output is occasionally internally inconsistent.
    pub fn children_of(&self, block: &Block, block_type: BlockType) -> Vec<&'a Block> {
        block
            .child_ids()
            .filter_map(|id| {
                let child = self.by_id(id);
                if child.is_none() {
                    log::debug!("block {} references missing child {}", block.id, id);
                }
                child
            })
            .filter(|child| child.block_type == block_type)
            .collect()
    }

    /// Resolve a block's CHILD ids to blocks of any type. Ids with no
    /// matching block are skipped, as in [`Self::children_of`].
    pub fn children(&self, block: &Block) -> Vec<&'a Block> {
        block
            .child_ids()
            .filter_map(|id| {
                let child = self.by_id(id);
                if child.is_none() {
                    log::debug!("block {} references missing child {}", block.id, id);
                }
                child
            })
            .collect()
    }
}
