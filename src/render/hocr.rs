//! hOCR document emission.
//!
//! Walks assembled page content and writes the hOCR element tree:
//! `div.ocr_page` > (`div.ocr_block` > `span.ocr_line` > `span.ocrx_word`
//! | `table.ocr_table` > `tr` > `td.ocr_cell`). All geometry is written
//! as pixel `bbox` title attributes; confidence as truncated `x_wconf`.

use super::markup::MarkupBuilder;
use crate::dimensions::PageDimensions;
use crate::error::Result;
use crate::layout::{
    assemble, CellContent, CellRecord, LineRecord, PageItem, PageModel, ParagraphBlock,
    TableRecord, WordRecord,
};

const XHTML_DOCTYPE: &str = "html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\" \
     \"http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd\"";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";
const OCR_SYSTEM: &str = concat!("textract-hocr ", env!("CARGO_PKG_VERSION"));
const OCR_CAPABILITIES: &str = "ocr_page ocr_block ocr_table ocr_cell ocr_line ocrx_word";

/// Render assembled pages into a complete hOCR document.
pub(crate) fn render_document(pages: &[(PageModel, PageDimensions)]) -> Result<String> {
    let mut b = MarkupBuilder::new();

    b.declaration()?;
    b.doctype(XHTML_DOCTYPE)?;
    b.start("html", &[("xmlns", XHTML_NS), ("lang", "en")])?;

    b.start("head", &[])?;
    b.start("title", &[])?;
    b.text("")?;
    b.end()?;
    b.empty(
        "meta",
        &[
            ("http-equiv", "Content-Type"),
            ("content", "text/html;charset=utf-8"),
        ],
    )?;
    b.empty("meta", &[("name", "ocr-system"), ("content", OCR_SYSTEM)])?;
    b.empty(
        "meta",
        &[("name", "ocr-capabilities"), ("content", OCR_CAPABILITIES)],
    )?;
    b.end()?;

    b.start("body", &[])?;
    for (page, dims) in pages {
        render_page(&mut b, page, *dims)?;
    }
    b.end()?;
    b.end()?;

    b.finish()
}

fn render_page(b: &mut MarkupBuilder, page: &PageModel, dims: PageDimensions) -> Result<()> {
    let id = format!("page_{}", page.number);
    let title = format!(
        "bbox 0 0 {} {}; ppageno {}",
        dims.width,
        dims.height,
        page.number - 1
    );
    b.start("div", &[("class", "ocr_page"), ("id", &id), ("title", &title)])?;

    let mut block_counter = 1u32;
    for item in assemble(page) {
        match item {
            PageItem::Paragraph(block) => {
                render_paragraph(b, &block, page.number, block_counter, dims)?;
                block_counter += 1;
            }
            PageItem::Table(table) => render_table(b, table, dims)?,
        }
    }

    b.end()
}

fn render_paragraph(
    b: &mut MarkupBuilder,
    block: &ParagraphBlock<'_>,
    page_number: u32,
    counter: u32,
    dims: PageDimensions,
) -> Result<()> {
    let id = format!("block_{}_{}", counter, page_number);
    let title = block.bbox.to_pixels(dims).to_bbox_title();
    b.start(
        "div",
        &[
            ("class", "ocr_block"),
            ("id", &id),
            ("title", &title),
            ("lang", "eng"),
        ],
    )?;
    for line in &block.lines {
        render_line(b, line, dims)?;
    }
    b.end()
}

fn render_line(b: &mut MarkupBuilder, line: &LineRecord, dims: PageDimensions) -> Result<()> {
    let title = format!("{}; baseline 0 0", line.bbox.to_pixels(dims).to_bbox_title());
    b.start(
        "span",
        &[("class", "ocr_line"), ("id", &line.id), ("title", &title)],
    )?;
    for word in &line.words {
        render_word(b, word, dims)?;
    }
    if line.words.is_empty() {
        b.text("")?;
    }
    b.end()
}

fn render_word(b: &mut MarkupBuilder, word: &WordRecord, dims: PageDimensions) -> Result<()> {
    let title = format!(
        "{}; x_wconf {}",
        word.bbox.to_pixels(dims).to_bbox_title(),
        word.confidence as i64
    );
    b.start(
        "span",
        &[("class", "ocrx_word"), ("id", &word.id), ("title", &title)],
    )?;
    b.text(&word.text)?;
    b.end()
}

fn render_table(b: &mut MarkupBuilder, table: &TableRecord, dims: PageDimensions) -> Result<()> {
    let title = format!(
        "{}; x_wconf {}",
        table.bbox.to_pixels(dims).to_bbox_title(),
        table.confidence as i64
    );
    b.start(
        "table",
        &[("class", "ocr_table"), ("id", &table.id), ("title", &title)],
    )?;

    // Row-major reading order; stable, so source order breaks ties.
    let mut cells: Vec<&CellRecord> = table.cells.iter().collect();
    cells.sort_by_key(|c| (c.row_index, c.column_index));

    let mut i = 0;
    while i < cells.len() {
        let row = cells[i].row_index;
        b.start("tr", &[])?;
        while i < cells.len() && cells[i].row_index == row {
            render_cell(b, cells[i], dims)?;
            i += 1;
        }
        b.end()?;
    }

    b.end()
}

fn render_cell(b: &mut MarkupBuilder, cell: &CellRecord, dims: PageDimensions) -> Result<()> {
    let title = format!(
        "{}; x_wconf {}",
        cell.bbox.to_pixels(dims).to_bbox_title(),
        cell.confidence as i64
    );
    let rowspan = cell.row_span.to_string();
    let colspan = cell.column_span.to_string();

    let mut attrs: Vec<(&str, &str)> = vec![
        ("class", "ocr_cell"),
        ("id", &cell.id),
        ("title", &title),
    ];
    if cell.row_span > 1 {
        attrs.push(("rowspan", &rowspan));
    }
    if cell.column_span > 1 {
        attrs.push(("colspan", &colspan));
    }
    b.start("td", &attrs)?;

    match &cell.content {
        CellContent::Lines(lines) if lines.is_empty() => b.text("")?,
        CellContent::Lines(lines) => {
            for line in lines {
                render_line(b, line, dims)?;
            }
        }
        CellContent::Words(words) => {
            // No intervening LINE block exists, so the cell's own box
            // stands in for the synthetic line.
            let line_id = format!("{}_line", cell.id);
            let line_title =
                format!("{}; baseline 0 0", cell.bbox.to_pixels(dims).to_bbox_title());
            b.start(
                "span",
                &[("class", "ocr_line"), ("id", &line_id), ("title", &line_title)],
            )?;
            for word in words {
                render_word(b, word, dims)?;
            }
            b.end()?;
        }
    }

    b.end()
}
