//! Per-page content extraction.

use super::records::{CellContent, CellRecord, LineRecord, TableRecord, WordRecord};
use super::{BlockIndex, TableOwnership};
use crate::model::{Block, BlockType};

/// Everything on one page: free lines and tables, both in source order.
///
/// Built once per page per conversion, after table reconciliation; the
/// line list holds only free lines, so the table/free partition is
/// exhaustive and non-overlapping by construction.
#[derive(Debug)]
pub struct PageModel {
    /// Page number, 1-indexed
    pub number: u32,
    /// Free-standing lines (not owned by any table)
    pub lines: Vec<LineRecord>,
    /// Tables on the page
    pub tables: Vec<TableRecord>,
}

impl PageModel {
    /// Build the model for one page.
    pub fn build(number: u32, index: &BlockIndex<'_>, ownership: &TableOwnership<'_>) -> Self {
        let lines = index
            .blocks_of_type(BlockType::Line, number)
            .iter()
            .filter(|line| !ownership.owns_line(&line.id))
            .map(|line| line_record(line, index))
            .collect();

        let tables = index
            .blocks_of_type(BlockType::Table, number)
            .iter()
            .map(|table| table_record(table, index))
            .collect();

        Self {
            number,
            lines,
            tables,
        }
    }

    /// Whether the page has no content at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.tables.is_empty()
    }
}

fn line_record(line: &Block, index: &BlockIndex<'_>) -> LineRecord {
    let words = index
        .children_of(line, BlockType::Word)
        .into_iter()
        .map(WordRecord::from_block)
        .collect();

    LineRecord {
        id: line.id.clone(),
        text: line.text().to_string(),
        confidence: line.confidence(),
        bbox: line.geometry.bounding_box,
        polygon: line.geometry.polygon.clone(),
        words,
    }
}

fn table_record(table: &Block, index: &BlockIndex<'_>) -> TableRecord {
    let cells = index
        .children_of(table, BlockType::Cell)
        .into_iter()
        .map(|cell| cell_record(cell, index))
        .collect();

    TableRecord {
        id: table.id.clone(),
        confidence: table.confidence(),
        bbox: table.geometry.bounding_box,
        polygon: table.geometry.polygon.clone(),
        cells,
    }
}

fn cell_record(cell: &Block, index: &BlockIndex<'_>) -> CellRecord {
    let mut lines = Vec::new();
    let mut words = Vec::new();

    for child in index.children(cell) {
        match child.block_type {
            BlockType::Line => lines.push(line_record(child, index)),
            BlockType::Word => words.push(WordRecord::from_block(child)),
            _ => {}
        }
    }

    // Lines take precedence; direct words only exist when Textract emits
    // no intervening line (span/merge artifacts).
    let content = if !lines.is_empty() {
        CellContent::Lines(lines)
    } else if !words.is_empty() {
        CellContent::Words(words)
    } else {
        CellContent::Lines(Vec::new())
    };

    CellRecord {
        id: cell.id.clone(),
        row_index: cell.row_index(),
        column_index: cell.column_index(),
        row_span: cell.row_span(),
        column_span: cell.column_span(),
        confidence: cell.confidence(),
        bbox: cell.geometry.bounding_box,
        polygon: cell.geometry.polygon.clone(),
        content,
    }
}
