//! Reading-order assembly.
//!
//! Produces one ordered sequence per page that interleaves tables and
//! paragraph blocks of free lines. Tables are atomic; free lines are
//! grouped into a paragraph while each vertically overlaps the line
//! before it.

use super::records::{LineRecord, TableRecord};
use super::PageModel;
use crate::model::BoundingBox;

/// One unit of page content in reading order.
#[derive(Debug)]
pub enum PageItem<'a> {
    /// A group of vertically-adjacent free lines
    Paragraph(ParagraphBlock<'a>),
    /// A table, emitted as a single unit
    Table(&'a TableRecord),
}

/// A paragraph block: consecutive free lines sharing a vertical band.
#[derive(Debug)]
pub struct ParagraphBlock<'a> {
    /// Member lines, in reading order
    pub lines: Vec<&'a LineRecord>,
    /// Union of the member lines' boxes
    pub bbox: BoundingBox,
}

impl<'a> ParagraphBlock<'a> {
    fn new(first: &'a LineRecord) -> Self {
        Self {
            lines: vec![first],
            bbox: first.bbox,
        }
    }

    fn push(&mut self, line: &'a LineRecord) {
        self.bbox = self.bbox.union(&line.bbox);
        self.lines.push(line);
    }
}

enum ContentRef<'a> {
    Line(&'a LineRecord),
    Table(&'a TableRecord),
}

impl ContentRef<'_> {
    fn top(&self) -> f64 {
        match self {
            ContentRef::Line(line) => line.bbox.top,
            ContentRef::Table(table) => table.bbox.top,
        }
    }
}

/// Order a page's content top-to-bottom and group free lines into
/// paragraph blocks.
///
/// Items are sorted by top coordinate (stable, so ties keep source
/// order). A table always flushes the open paragraph and resets
/// adjacency; a free line joins the open paragraph only while its box
/// vertically overlaps the immediately preceding line's box.
pub fn assemble(page: &PageModel) -> Vec<PageItem<'_>> {
    let mut content: Vec<ContentRef<'_>> = Vec::with_capacity(page.lines.len() + page.tables.len());
    content.extend(page.tables.iter().map(ContentRef::Table));
    content.extend(page.lines.iter().map(ContentRef::Line));
    content.sort_by(|a, b| a.top().partial_cmp(&b.top()).unwrap_or(std::cmp::Ordering::Equal));

    let mut items = Vec::new();
    let mut open: Option<ParagraphBlock<'_>> = None;
    let mut last_line_bbox: Option<BoundingBox> = None;

    for item in content {
        match item {
            ContentRef::Table(table) => {
                if let Some(block) = open.take() {
                    items.push(PageItem::Paragraph(block));
                }
                items.push(PageItem::Table(table));
                last_line_bbox = None;
            }
            ContentRef::Line(line) => {
                let adjacent = last_line_bbox
                    .map(|prev| prev.intersects_vertically(&line.bbox))
                    .unwrap_or(false);

                match open.as_mut() {
                    Some(block) if adjacent => block.push(line),
                    Some(_) => {
                        items.push(PageItem::Paragraph(open.take().unwrap()));
                        open = Some(ParagraphBlock::new(line));
                    }
                    None => open = Some(ParagraphBlock::new(line)),
                }
                last_line_bbox = Some(line.bbox);
            }
        }
    }

    if let Some(block) = open {
        items.push(PageItem::Paragraph(block));
    }

    items
}
