//! OOXML (DOCX) document assembly.
//!
//! The output format is a small fixed layout, so the WordprocessingML is
//! emitted directly and packaged with the `zip` crate
//! rather than through a document-object library. Five parts make a valid
//! minimal package: `[Content_Types].xml`, `_rels/.rels`,
//! `word/document.xml`, `word/_rels/document.xml.rels` and
//! `word/styles.xml`.
//!
//! Body layout per conversion:
//! 1. centered bold title (`Converted from: <basename>`),
//! 2. two centered italic metadata lines (timestamp, page count),
//! 3. a horizontal-rule paragraph (bottom border),
//! 4. per retained page: a `Page N` heading, its classified blocks, and a
//!    page-break paragraph after every page except the last.
//!
//! Font sizes are OOXML half-points. Paragraph and metadata runs carry
//! `xml:space="preserve"` so leading/trailing spaces survive readers'
//! XML parsers.

use crate::error::ConvertError;
use crate::output::PageContent;
use crate::pipeline::classify;
use chrono::Local;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Half-point font sizes and RGB colors for each block kind.
const TITLE_SIZE: u32 = 28;
const METADATA_SIZE: u32 = 18;
const PAGE_HEADING_SIZE: u32 = 20;
const HEADING_SIZE: u32 = 16;
const PARAGRAPH_SIZE: u32 = 22;

const TITLE_COLOR: &str = "2c3e50";
const METADATA_COLOR: &str = "7f8c8d";
const HEADING_COLOR: &str = "34495e";
const RULE_COLOR: &str = "bdc3c7";

/// Build a complete DOCX package for the given pages.
///
/// `pages` must already be filtered to retained pages in document order.
/// Zero pages is valid: the result still contains the title, both metadata
/// lines (`Total pages: 0`) and the horizontal rule.
pub fn build_document(
    original_file_name: &str,
    pages: &[PageContent],
) -> Result<Vec<u8>, ConvertError> {
    let mut builder = DocumentBuilder::new();

    let basename = file_basename(original_file_name);
    builder.add_title(&format!("Converted from: {basename}"));

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    builder.add_metadata_line(&format!("Converted on: {timestamp}"));
    builder.add_metadata_line(&format!("Total pages: {}", pages.len()));
    builder.add_horizontal_rule();

    for (i, page) in pages.iter().enumerate() {
        builder.add_heading(&format!("Page {}", page.page_number), PAGE_HEADING_SIZE);

        for element in classify::analyze_content(&page.processed_text) {
            if element.is_heading() {
                builder.add_heading(&element.text, HEADING_SIZE);
            } else {
                builder.add_paragraph(&element.text);
            }
        }

        if i + 1 < pages.len() {
            builder.add_page_break();
        }
    }

    builder.into_bytes()
}

/// File name with its final extension stripped, regardless of case.
pub(crate) fn file_basename(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| name.to_string())
}

/// Accumulates `<w:p>` elements and packages them into a DOCX archive.
pub struct DocumentBuilder {
    body: String,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            body: String::with_capacity(4 * 1024),
        }
    }

    /// Centered bold title paragraph.
    pub fn add_title(&mut self, text: &str) {
        self.body.push_str("<w:p><w:pPr><w:jc w:val=\"center\"/></w:pPr><w:r><w:rPr><w:b/>");
        self.push_size_and_color(TITLE_SIZE, Some(TITLE_COLOR));
        self.body.push_str("</w:rPr><w:t>");
        self.body.push_str(&xml_escape(text));
        self.body.push_str("</w:t></w:r></w:p>");
    }

    /// Centered italic metadata paragraph.
    pub fn add_metadata_line(&mut self, text: &str) {
        self.body.push_str("<w:p><w:pPr><w:jc w:val=\"center\"/></w:pPr><w:r><w:rPr><w:i/>");
        self.push_size_and_color(METADATA_SIZE, Some(METADATA_COLOR));
        self.body.push_str("</w:rPr><w:t xml:space=\"preserve\">");
        self.body.push_str(&xml_escape(text));
        self.body.push_str("</w:t></w:r></w:p>");
    }

    /// Empty paragraph with a single bottom border, rendered as a rule.
    pub fn add_horizontal_rule(&mut self) {
        self.body.push_str(
            "<w:p><w:pPr><w:pBdr><w:bottom w:val=\"single\" w:sz=\"6\" w:color=\"",
        );
        self.body.push_str(RULE_COLOR);
        self.body.push_str("\"/></w:pBdr></w:pPr></w:p>");
    }

    /// Bold heading paragraph at the given half-point size.
    pub fn add_heading(&mut self, text: &str, size: u32) {
        self.body.push_str("<w:p><w:r><w:rPr><w:b/>");
        self.push_size_and_color(size, Some(HEADING_COLOR));
        self.body.push_str("</w:rPr><w:t>");
        self.body.push_str(&xml_escape(text));
        self.body.push_str("</w:t></w:r></w:p>");
    }

    /// Body paragraph with default alignment and color.
    pub fn add_paragraph(&mut self, text: &str) {
        self.body.push_str("<w:p><w:r><w:rPr>");
        self.push_size_and_color(PARAGRAPH_SIZE, None);
        self.body.push_str("</w:rPr><w:t xml:space=\"preserve\">");
        self.body.push_str(&xml_escape(text));
        self.body.push_str("</w:t></w:r></w:p>");
    }

    /// Paragraph whose sole run is a page-type break.
    pub fn add_page_break(&mut self) {
        self.body
            .push_str("<w:p><w:r><w:br w:type=\"page\"/></w:r></w:p>");
    }

    fn push_size_and_color(&mut self, size: u32, color: Option<&str>) {
        self.body.push_str("<w:sz w:val=\"");
        self.body.push_str(&size.to_string());
        self.body.push_str("\"/>");
        if let Some(color) = color {
            self.body.push_str("<w:color w:val=\"");
            self.body.push_str(color);
            self.body.push_str("\"/>");
        }
    }

    /// Package the accumulated body into a DOCX zip archive.
    pub fn into_bytes(self) -> Result<Vec<u8>, ConvertError> {
        let document_xml = format!(
            "{}{}{}",
            DOCUMENT_XML_HEAD, self.body, DOCUMENT_XML_TAIL
        );

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let opt = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", opt)?;
        zip.write_all(CONTENT_TYPES_XML.as_bytes())?;

        zip.start_file("_rels/.rels", opt)?;
        zip.write_all(RELS_XML.as_bytes())?;

        zip.start_file("word/document.xml", opt)?;
        zip.write_all(document_xml.as_bytes())?;

        zip.start_file("word/_rels/document.xml.rels", opt)?;
        zip.write_all(WORD_RELS_XML.as_bytes())?;

        zip.start_file("word/styles.xml", opt)?;
        zip.write_all(STYLES_XML.as_bytes())?;

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

// ── Static package parts ─────────────────────────────────────────────────

const DOCUMENT_XML_HEAD: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#;

const DOCUMENT_XML_TAIL: &str = r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="708" w:footer="708" w:gutter="0"/><w:cols w:space="708"/></w:sectPr></w:body></w:document>"#;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

const RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const WORD_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
  </w:style>
</w:styles>"#;

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn page(n: usize, text: &str) -> PageContent {
        PageContent {
            page_number: n,
            raw_text: text.to_string(),
            processed_text: text.to_string(),
        }
    }

    /// Unzip the package and return word/document.xml as a string.
    fn document_xml(docx: &[u8]) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(docx.to_vec())).unwrap();
        let mut file = archive.by_name("word/document.xml").unwrap();
        let mut xml = String::new();
        file.read_to_string(&mut xml).unwrap();
        xml
    }

    #[test]
    fn package_contains_all_parts() {
        let docx = build_document("report.pdf", &[]).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(docx)).unwrap();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
        ] {
            assert!(archive.by_name(part).is_ok(), "missing part {part}");
        }
    }

    #[test]
    fn zero_pages_still_builds_valid_document() {
        let docx = build_document("empty.pdf", &[]).unwrap();
        let xml = document_xml(&docx);
        assert!(xml.contains("Converted from: empty"));
        assert!(xml.contains("Converted on: "));
        assert!(xml.contains("Total pages: 0"));
        assert!(xml.contains("<w:pBdr>"));
        assert!(!xml.contains("Page "));
        assert!(!xml.contains("w:type=\"page\""));
    }

    #[test]
    fn page_headings_appear_in_order() {
        let pages = vec![page(1, "HELLO"), page(3, "WORLD")];
        let xml = document_xml(&build_document("doc.pdf", &pages).unwrap());
        let first = xml.find("Page 1").unwrap();
        let third = xml.find("Page 3").unwrap();
        assert!(first < third);
    }

    #[test]
    fn page_break_count_is_pages_minus_one() {
        let pages = vec![page(1, "A one"), page(2, "B two"), page(3, "C three")];
        let xml = document_xml(&build_document("doc.pdf", &pages).unwrap());
        let breaks = xml.matches("<w:br w:type=\"page\"/>").count();
        assert_eq!(breaks, 2);
    }

    #[test]
    fn no_trailing_page_break() {
        let pages = vec![page(1, "Only page")];
        let xml = document_xml(&build_document("doc.pdf", &pages).unwrap());
        assert_eq!(xml.matches("w:type=\"page\"").count(), 0);
    }

    #[test]
    fn heading_and_paragraph_styling() {
        let pages = vec![page(
            1,
            "Introduction\n\nThis is the first sentence. This is the second.",
        )];
        let xml = document_xml(&build_document("doc.pdf", &pages).unwrap());
        // Page heading: bold, 20 half-points.
        assert!(xml.contains("<w:sz w:val=\"20\"/>"));
        // Classified heading: bold, 16 half-points, heading color.
        assert!(xml.contains("<w:sz w:val=\"16\"/>"));
        assert!(xml.contains("<w:color w:val=\"34495e\"/>"));
        // Paragraph: 22 half-points with preserved whitespace.
        assert!(xml.contains("<w:sz w:val=\"22\"/>"));
        assert!(xml.contains("xml:space=\"preserve\""));
        assert!(xml.contains("Introduction"));
        assert!(xml.contains("This is the first sentence. This is the second."));
    }

    #[test]
    fn text_is_xml_escaped() {
        let pages = vec![page(1, "Fish & chips <cheap>")];
        let xml = document_xml(&build_document("doc.pdf", &pages).unwrap());
        assert!(xml.contains("Fish &amp; chips &lt;cheap&gt;"));
        assert!(!xml.contains("<cheap>"));
    }

    #[test]
    fn basename_strips_extension() {
        assert_eq!(file_basename("annual report.pdf"), "annual report");
        assert_eq!(file_basename("noext"), "noext");
    }
}
