//! Shared Textract fixtures for integration tests.

use serde_json::{json, Value};
use textract_hocr::TextractDocument;

pub fn doc(value: Value) -> TextractDocument {
    TextractDocument::from_value(value).unwrap()
}

fn polygon(left: f64, top: f64, width: f64, height: f64) -> Value {
    json!([
        {"X": left, "Y": top},
        {"X": left + width, "Y": top},
        {"X": left + width, "Y": top + height},
        {"X": left, "Y": top + height},
    ])
}

fn geometry(left: f64, top: f64, width: f64, height: f64) -> Value {
    json!({
        "BoundingBox": {"Width": width, "Height": height, "Left": left, "Top": top},
        "Polygon": polygon(left, top, width, height),
    })
}

/// One page, one line "Hello World" split into two words.
pub fn single_page() -> TextractDocument {
    doc(json!({
        "DocumentMetadata": {"Pages": 1},
        "Blocks": [
            {
                "BlockType": "PAGE", "Id": "page-1", "Page": 1,
                "Geometry": geometry(0.0, 0.0, 1.0, 1.0),
                "Relationships": [{"Type": "CHILD", "Ids": ["line-1"]}],
            },
            {
                "BlockType": "LINE", "Id": "line-1", "Page": 1,
                "Text": "Hello World", "Confidence": 99.5,
                "Geometry": geometry(0.1, 0.1, 0.2, 0.05),
                "Relationships": [{"Type": "CHILD", "Ids": ["word-1", "word-2"]}],
            },
            {
                "BlockType": "WORD", "Id": "word-1", "Page": 1,
                "Text": "Hello", "Confidence": 99.8, "TextType": "PRINTED",
                "Geometry": geometry(0.1, 0.1, 0.08, 0.05),
            },
            {
                "BlockType": "WORD", "Id": "word-2", "Page": 1,
                "Text": "World", "Confidence": 99.2, "TextType": "PRINTED",
                "Geometry": geometry(0.2, 0.1, 0.1, 0.05),
            },
        ],
    }))
}

/// Three pages, one line and word per page.
pub fn multi_page() -> TextractDocument {
    let mut blocks = Vec::new();
    let texts = ["Page One", "Page Two", "Page Three"];
    for (i, text) in texts.iter().enumerate() {
        let page = (i + 1) as u32;
        let offset = 0.1 * (i + 1) as f64;
        blocks.push(json!({
            "BlockType": "PAGE", "Id": format!("page-{page}"), "Page": page,
            "Geometry": geometry(0.0, 0.0, 1.0, 1.0),
            "Relationships": [{"Type": "CHILD", "Ids": [format!("line-{page}-1")]}],
        }));
        blocks.push(json!({
            "BlockType": "LINE", "Id": format!("line-{page}-1"), "Page": page,
            "Text": text, "Confidence": 98.0,
            "Geometry": geometry(offset, offset, 0.2, 0.05),
            "Relationships": [{"Type": "CHILD", "Ids": [format!("word-{page}-1")]}],
        }));
        blocks.push(json!({
            "BlockType": "WORD", "Id": format!("word-{page}-1"), "Page": page,
            "Text": text, "Confidence": 98.0, "TextType": "PRINTED",
            "Geometry": geometry(offset, offset, 0.2, 0.05),
        }));
    }
    doc(json!({"DocumentMetadata": {"Pages": 3}, "Blocks": blocks}))
}

/// One page holding a 2x2 table whose cells own WORD blocks directly
/// (no intervening LINE), and no free lines.
pub fn with_table() -> TextractDocument {
    let cell = |id: &str, row: u32, col: u32, left: f64, top: f64, word_id: &str| {
        json!({
            "BlockType": "CELL", "Id": id, "Page": 1,
            "RowIndex": row, "ColumnIndex": col, "RowSpan": 1, "ColumnSpan": 1,
            "Confidence": 99.0,
            "Geometry": geometry(left, top, 0.3, 0.15),
            "Relationships": [{"Type": "CHILD", "Ids": [word_id]}],
        })
    };
    let word = |id: &str, text: &str, left: f64, top: f64| {
        json!({
            "BlockType": "WORD", "Id": id, "Page": 1,
            "Text": text, "Confidence": 98.5, "TextType": "PRINTED",
            "Geometry": geometry(left, top, 0.25, 0.1),
        })
    };

    doc(json!({
        "DocumentMetadata": {"Pages": 1},
        "Blocks": [
            {
                "BlockType": "PAGE", "Id": "page-1", "Page": 1,
                "Geometry": geometry(0.0, 0.0, 1.0, 1.0),
            },
            {
                "BlockType": "TABLE", "Id": "table-1", "Page": 1,
                "Confidence": 98.5,
                "Geometry": geometry(0.2, 0.3, 0.6, 0.3),
                "Relationships": [{
                    "Type": "CHILD",
                    "Ids": ["cell-1-1", "cell-1-2", "cell-2-1", "cell-2-2"],
                }],
            },
            cell("cell-1-1", 1, 1, 0.2, 0.3, "word-t1"),
            word("word-t1", "Header1", 0.22, 0.32),
            cell("cell-1-2", 1, 2, 0.5, 0.3, "word-t2"),
            word("word-t2", "Header2", 0.52, 0.32),
            cell("cell-2-1", 2, 1, 0.2, 0.45, "word-t3"),
            word("word-t3", "Value1", 0.22, 0.47),
            cell("cell-2-2", 2, 2, 0.5, 0.45, "word-t4"),
            word("word-t4", "Value2", 0.52, 0.47),
        ],
    }))
}

/// One page with a 1x2 table: the first cell owns a LINE block (which owns
/// two words), the second cell is empty.
pub fn lined_table() -> TextractDocument {
    doc(json!({
        "DocumentMetadata": {"Pages": 1},
        "Blocks": [
            {
                "BlockType": "PAGE", "Id": "page-1", "Page": 1,
                "Geometry": geometry(0.0, 0.0, 1.0, 1.0),
            },
            {
                "BlockType": "TABLE", "Id": "table-1", "Page": 1,
                "Confidence": 98.0,
                "Geometry": geometry(0.1, 0.2, 0.8, 0.15),
                "Relationships": [{"Type": "CHILD", "Ids": ["cell-a", "cell-b"]}],
            },
            {
                "BlockType": "CELL", "Id": "cell-a", "Page": 1,
                "RowIndex": 1, "ColumnIndex": 1, "Confidence": 98.0,
                "Geometry": geometry(0.1, 0.2, 0.4, 0.15),
                "Relationships": [{"Type": "CHILD", "Ids": ["line-a"]}],
            },
            {
                "BlockType": "CELL", "Id": "cell-b", "Page": 1,
                "RowIndex": 1, "ColumnIndex": 2, "Confidence": 98.0,
                "Geometry": geometry(0.5, 0.2, 0.4, 0.15),
            },
            {
                "BlockType": "LINE", "Id": "line-a", "Page": 1,
                "Text": "Total due", "Confidence": 97.5,
                "Geometry": geometry(0.12, 0.22, 0.3, 0.05),
                "Relationships": [{"Type": "CHILD", "Ids": ["word-a1", "word-a2"]}],
            },
            {
                "BlockType": "WORD", "Id": "word-a1", "Page": 1,
                "Text": "Total", "Confidence": 97.5, "TextType": "PRINTED",
                "Geometry": geometry(0.12, 0.22, 0.12, 0.05),
            },
            {
                "BlockType": "WORD", "Id": "word-a2", "Page": 1,
                "Text": "due", "Confidence": 97.5, "TextType": "PRINTED",
                "Geometry": geometry(0.26, 0.22, 0.08, 0.05),
            },
        ],
    }))
}

/// One page where the same line is linked under both the page and a table
/// cell, plus one genuinely free line below the table.
pub fn double_linked() -> TextractDocument {
    doc(json!({
        "DocumentMetadata": {"Pages": 1},
        "Blocks": [
            {
                "BlockType": "PAGE", "Id": "page-1", "Page": 1,
                "Geometry": geometry(0.0, 0.0, 1.0, 1.0),
                "Relationships": [{"Type": "CHILD", "Ids": ["line-t", "line-free"]}],
            },
            {
                "BlockType": "TABLE", "Id": "table-1", "Page": 1,
                "Confidence": 97.0,
                "Geometry": geometry(0.1, 0.2, 0.8, 0.2),
                "Relationships": [{"Type": "CHILD", "Ids": ["cell-1"]}],
            },
            {
                "BlockType": "CELL", "Id": "cell-1", "Page": 1,
                "RowIndex": 1, "ColumnIndex": 1,
                "Confidence": 97.0,
                "Geometry": geometry(0.1, 0.2, 0.4, 0.1),
                "Relationships": [{"Type": "CHILD", "Ids": ["word-t"]}],
            },
            {
                "BlockType": "LINE", "Id": "line-t", "Page": 1,
                "Text": "Inside table", "Confidence": 96.0,
                "Geometry": geometry(0.12, 0.22, 0.3, 0.05),
                "Relationships": [{"Type": "CHILD", "Ids": ["word-t", "word-t2"]}],
            },
            {
                "BlockType": "WORD", "Id": "word-t", "Page": 1,
                "Text": "Inside", "Confidence": 96.0, "TextType": "PRINTED",
                "Geometry": geometry(0.12, 0.22, 0.1, 0.05),
            },
            {
                "BlockType": "WORD", "Id": "word-t2", "Page": 1,
                "Text": "table", "Confidence": 96.0, "TextType": "PRINTED",
                "Geometry": geometry(0.24, 0.22, 0.1, 0.05),
            },
            {
                "BlockType": "LINE", "Id": "line-free", "Page": 1,
                "Text": "Below", "Confidence": 99.0,
                "Geometry": geometry(0.1, 0.6, 0.2, 0.05),
                "Relationships": [{"Type": "CHILD", "Ids": ["word-free"]}],
            },
            {
                "BlockType": "WORD", "Id": "word-free", "Page": 1,
                "Text": "Below", "Confidence": 99.0, "TextType": "PRINTED",
                "Geometry": geometry(0.1, 0.6, 0.2, 0.05),
            },
        ],
    }))
}
