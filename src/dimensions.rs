//! Page dimension resolution.
//!
//! Textract reports geometry in a normalized 0-1 space; producing pixel
//! coordinates requires the physical size of each page. This module looks
//! that size up from the source artifact when one is available and falls
//! back to Textract's 1000x1000 convention otherwise. Lookup failures are
//! never fatal.

use std::path::Path;

/// Default width when no source dimensions can be resolved.
pub const TEXTRACT_DEFAULT_WIDTH: u32 = 1000;
/// Default height when no source dimensions can be resolved.
pub const TEXTRACT_DEFAULT_HEIGHT: u32 = 1000;

/// Physical page dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDimensions {
    /// Page width in pixels
    pub width: u32,
    /// Page height in pixels
    pub height: u32,
}

impl Default for PageDimensions {
    fn default() -> Self {
        Self {
            width: TEXTRACT_DEFAULT_WIDTH,
            height: TEXTRACT_DEFAULT_HEIGHT,
        }
    }
}

/// Resolve the pixel dimensions for one page.
///
/// Strategies, in order:
/// 1. An explicit `override_dims` is returned verbatim.
/// 2. `source` opened as an image: native pixel size (header read only).
/// 3. `source` opened as a PDF: the page's media box at 1 point = 1 pixel.
/// 4. Textract's default 1000x1000.
///
/// This is the only I/O in the conversion pipeline. Every failure falls
/// through to the next strategy.
pub fn resolve(
    source: Option<&Path>,
    page_number: u32,
    override_dims: Option<PageDimensions>,
) -> PageDimensions {
    if let Some(dims) = override_dims {
        return dims;
    }
    let Some(path) = source else {
        return PageDimensions::default();
    };

    if let Some(dims) = image_dimensions(path) {
        return dims;
    }
    if let Some(dims) = pdf_page_dimensions(path, page_number) {
        return dims;
    }

    log::debug!(
        "could not resolve dimensions for {} page {}, using Textract defaults",
        path.display(),
        page_number
    );
    PageDimensions::default()
}

fn image_dimensions(path: &Path) -> Option<PageDimensions> {
    match image::image_dimensions(path) {
        Ok((width, height)) => Some(PageDimensions { width, height }),
        Err(err) => {
            log::debug!("{} is not a readable image: {}", path.display(), err);
            None
        }
    }
}

fn pdf_page_dimensions(path: &Path, page_number: u32) -> Option<PageDimensions> {
    let doc = match lopdf::Document::load(path) {
        Ok(doc) => doc,
        Err(err) => {
            log::debug!("{} is not a readable PDF: {}", path.display(), err);
            return None;
        }
    };

    let page_id = doc.get_pages().get(&page_number).copied()?;
    let (x0, y0, x1, y1) = inherited_media_box(&doc, page_id)?;
    // Media box values are in points; 1 point = 1 pixel.
    let width = (x1 - x0).abs() as u32;
    let height = (y1 - y0).abs() as u32;
    if width == 0 || height == 0 {
        return None;
    }
    Some(PageDimensions { width, height })
}

/// MediaBox is inheritable: when the page dict lacks it, the nearest
/// ancestor Pages node supplies it. Depth-capped against parent cycles.
fn inherited_media_box(
    doc: &lopdf::Document,
    page_id: lopdf::ObjectId,
) -> Option<(f64, f64, f64, f64)> {
    let mut dict = doc.get_object(page_id).and_then(|obj| obj.as_dict()).ok()?;
    for _ in 0..32 {
        if let Ok(obj) = dict.get(b"MediaBox") {
            let resolved = match obj {
                lopdf::Object::Reference(id) => doc.get_object(*id).ok()?,
                other => other,
            };
            return media_box_rect(resolved);
        }
        let parent_id = dict.get(b"Parent").ok()?.as_reference().ok()?;
        dict = doc
            .get_object(parent_id)
            .and_then(|obj| obj.as_dict())
            .ok()?;
    }
    None
}

fn media_box_rect(obj: &lopdf::Object) -> Option<(f64, f64, f64, f64)> {
    let arr = obj.as_array().ok()?;
    if arr.len() != 4 {
        return None;
    }
    let mut vals = [0f64; 4];
    for (i, item) in arr.iter().enumerate() {
        vals[i] = item.as_float().ok()? as f64;
    }
    Some((vals[0], vals[1], vals[2], vals[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let dims = resolve(
            Some(Path::new("/nonexistent.png")),
            1,
            Some(PageDimensions {
                width: 2550,
                height: 3300,
            }),
        );
        assert_eq!(dims.width, 2550);
        assert_eq!(dims.height, 3300);
    }

    #[test]
    fn test_no_source_uses_defaults() {
        let dims = resolve(None, 1, None);
        assert_eq!(dims, PageDimensions::default());
        assert_eq!(dims.width, TEXTRACT_DEFAULT_WIDTH);
        assert_eq!(dims.height, TEXTRACT_DEFAULT_HEIGHT);
    }

    #[test]
    fn test_unreadable_source_falls_back() {
        let dims = resolve(Some(Path::new("/no/such/file.png")), 1, None);
        assert_eq!(dims, PageDimensions::default());
    }
}
