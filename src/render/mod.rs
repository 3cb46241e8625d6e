//! hOCR output emission.

mod hocr;
mod markup;
mod options;

pub(crate) use hocr::render_document;
pub use markup::MarkupBuilder;
pub use options::ConvertOptions;
