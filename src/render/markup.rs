//! Markup emission backed by `quick-xml`.
//!
//! [`MarkupBuilder`] is the only way the renderer touches the output
//! stream. It tracks the open-element stack, so nesting is always
//! balanced, and routes all text through `quick-xml` escaping.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};

/// Indented XML writer with guaranteed nesting and escaping.
pub struct MarkupBuilder {
    writer: Writer<Vec<u8>>,
    open: Vec<String>,
}

impl MarkupBuilder {
    /// Create a builder producing two-space-indented output.
    pub fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
            open: Vec::new(),
        }
    }

    /// Write the XML declaration.
    pub fn declaration(&mut self) -> Result<()> {
        self.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    /// Write a raw doctype.
    pub fn doctype(&mut self, content: &str) -> Result<()> {
        self.write(Event::DocType(BytesText::from_escaped(content)))
    }

    /// Open an element with the given attributes.
    pub fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut element = BytesStart::new(name);
        for attr in attrs {
            element.push_attribute(*attr);
        }
        self.open.push(name.to_string());
        self.write(Event::Start(element))
    }

    /// Write a self-closing element.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut element = BytesStart::new(name);
        for attr in attrs {
            element.push_attribute(*attr);
        }
        self.write(Event::Empty(element))
    }

    /// Write escaped text content inside the current element.
    pub fn text(&mut self, content: &str) -> Result<()> {
        self.write(Event::Text(BytesText::new(content)))
    }

    /// Close the most recently opened element.
    pub fn end(&mut self) -> Result<()> {
        let name = self
            .open
            .pop()
            .ok_or_else(|| Error::Render("end() with no open element".to_string()))?;
        self.write(Event::End(BytesEnd::new(name.as_str())))
    }

    /// Finish the document and return the markup string.
    pub fn finish(self) -> Result<String> {
        if let Some(name) = self.open.last() {
            return Err(Error::Render(format!("unclosed element <{}>", name)));
        }
        String::from_utf8(self.writer.into_inner())
            .map_err(|e| Error::Render(e.to_string()))
    }

    fn write(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| Error::Render(e.to_string()))
    }
}

impl Default for MarkupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_elements() {
        let mut b = MarkupBuilder::new();
        b.start("body", &[]).unwrap();
        b.start("div", &[("class", "ocr_page")]).unwrap();
        b.text("hello").unwrap();
        b.end().unwrap();
        b.end().unwrap();

        let out = b.finish().unwrap();
        assert!(out.contains(r#"<div class="ocr_page">hello</div>"#));
        assert!(out.trim_start().starts_with("<body>"));
        assert!(out.trim_end().ends_with("</body>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut b = MarkupBuilder::new();
        b.start("span", &[]).unwrap();
        b.text("a < b & c > d").unwrap();
        b.end().unwrap();

        let out = b.finish().unwrap();
        assert!(out.contains("a &lt; b &amp; c &gt; d"));
    }

    #[test]
    fn test_unbalanced_end_fails() {
        let mut b = MarkupBuilder::new();
        assert!(b.end().is_err());
    }

    #[test]
    fn test_unclosed_element_fails_finish() {
        let mut b = MarkupBuilder::new();
        b.start("div", &[]).unwrap();
        assert!(b.finish().is_err());
    }

    #[test]
    fn test_empty_element() {
        let mut b = MarkupBuilder::new();
        b.empty("meta", &[("name", "ocr-system"), ("content", "x")])
            .unwrap();
        let out = b.finish().unwrap();
        assert!(out.contains(r#"<meta name="ocr-system" content="x"/>"#));
    }
}
