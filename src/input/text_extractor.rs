//! Text extraction from uploaded documents and job descriptions

use crate::error::{Result, ResumeRankerError};
use crate::processing::document::Document;
use log::debug;
use pulldown_cmark::{Event, Parser, Tag};

/// Converts one uploaded document into a single normalized text string.
pub trait TextExtractor {
    fn extract(&self, document: &Document) -> Result<String>;
}

/// Page-oriented PDF extraction backed by `lopdf`.
///
/// A document that cannot be loaded at all is a fatal error. A page whose text
/// cannot be decoded contributes nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, document: &Document) -> Result<String> {
        let pdf = lopdf::Document::load_mem(&document.bytes)
            .map_err(|e| ResumeRankerError::pdf_parse(&document.name, e))?;

        let pages = pdf.get_pages();
        debug!("'{}' has {} pages", document.name, pages.len());

        let texts = pages.keys().map(|&page_number| {
            match pdf.extract_text(&[page_number]) {
                Ok(text) => Some(text),
                Err(e) => {
                    debug!(
                        "No text on page {} of '{}': {}",
                        page_number, document.name, e
                    );
                    None
                }
            }
        });

        Ok(join_pages(texts))
    }
}

/// Concatenate page texts in order, each followed by a single space, then trim.
///
/// Missing and empty pages contribute nothing.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages.into_iter().flatten() {
        let page = page.as_ref();
        if page.is_empty() {
            continue;
        }
        text.push_str(page);
        text.push(' ');
    }
    text.trim().to_string()
}

/// Render Markdown to plain text, one line per block element.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(content) | Event::Code(content) => text.push_str(&content),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(Tag::Paragraph)
            | Event::End(Tag::Heading(..))
            | Event::End(Tag::Item)
            | Event::End(Tag::CodeBlock(_)) => text.push('\n'),
            _ => {}
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = lopdf::Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page_text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_join_pages_skips_missing_and_empty() {
        let pages = vec![Some("First page"), None, Some(""), Some("Second page")];
        assert_eq!(join_pages(pages), "First page Second page");
    }

    #[test]
    fn test_join_pages_trims_result() {
        let pages = vec![Some("  padded\n"), Some("text  ")];
        assert_eq!(join_pages(pages), "padded\n text");
    }

    #[test]
    fn test_join_pages_empty_document() {
        let pages: Vec<Option<String>> = Vec::new();
        assert_eq!(join_pages(pages), "");
        assert_eq!(join_pages(vec![None::<&str>, Some("")]), "");
    }

    #[test]
    fn test_extract_pdf_pages_in_order() {
        let bytes = build_pdf(&["Jane Doe", "Rust engineer"]);
        let document = Document::new("jane.pdf", bytes);

        let text = PdfTextExtractor.extract(&document).unwrap();
        let jane = text.find("Jane Doe").expect("first page text");
        let rust = text.find("Rust engineer").expect("second page text");
        assert!(jane < rust);
        assert_eq!(text, text.trim());
    }

    #[test]
    fn test_extract_rejects_non_pdf() {
        let document = Document::new("notes.pdf", b"definitely not a pdf".to_vec());

        let result = PdfTextExtractor.extract(&document);
        match result {
            Err(ResumeRankerError::PdfParse { file, .. }) => assert_eq!(file, "notes.pdf"),
            other => panic!("expected PdfParse error, got {:?}", other),
        }
    }

    #[test]
    fn test_markdown_to_text() {
        let markdown = "# Backend Engineer\n\nWe need **Python** and `Django`.\n\n- APIs\n- SQL\n";
        let text = markdown_to_text(markdown);

        assert!(text.contains("Backend Engineer"));
        assert!(text.contains("We need Python and Django."));
        assert!(text.contains("APIs"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
    }
}
