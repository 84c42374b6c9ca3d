//! PDF text extraction using lopdf, with pdf-extract as a fallback.

use std::collections::BTreeMap;

use lopdf::{Document, ObjectId};
use tracing::{debug, trace, warn};

use super::{PdfProcessor, Result};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// PDF text extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    /// Page number to page object, built once at load.
    pages: BTreeMap<u32, ObjectId>,
    raw_data: Vec<u8>,
    config: PdfConfig,
}

impl PdfExtractor {
    /// Create a new PDF extractor with default settings.
    pub fn new() -> Self {
        Self::with_config(PdfConfig::default())
    }

    /// Create a new PDF extractor with the given settings.
    pub fn with_config(config: PdfConfig) -> Self {
        Self {
            document: None,
            pages: BTreeMap::new(),
            raw_data: Vec::new(),
            config,
        }
    }

    /// Number of pages that `extract_text` will read.
    fn pages_to_read(&self) -> u32 {
        let count = self.page_count();
        match self.config.max_pages {
            0 => count,
            max => count.min(max as u32),
        }
    }

    /// Extraction through pdf-extract, limited to the pages lopdf would read.
    ///
    /// pdf-extract panics on some malformed fonts, so the call is isolated.
    fn extract_with_pdf_extract(&self) -> Option<String> {
        let data = &self.raw_data;
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(data)
        }));

        match outcome {
            Ok(Ok(pages)) => {
                let text = join_pages(pages, self.pages_to_read() as usize);
                Some(text).filter(|t| !t.trim().is_empty())
            }
            Ok(Err(e)) => {
                warn!("pdf-extract fallback failed: {}", e);
                None
            }
            Err(_) => {
                warn!("pdf-extract fallback panicked");
                None
            }
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            if !self.config.decrypt_empty_password || doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract needs the decrypted bytes for the fallback path
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let pages = doc.get_pages();
        if pages.is_empty() {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", pages.len());
        self.pages = pages;
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn extract_page_text(&self, page: u32) -> Result<Option<String>> {
        let doc = self
            .document
            .as_ref()
            .ok_or(PdfError::Parse("No document loaded".to_string()))?;

        if !self.pages.contains_key(&page) {
            return Err(PdfError::InvalidPage(page));
        }

        match doc.extract_text(&[page]) {
            Ok(text) if !text.is_empty() => Ok(Some(text)),
            Ok(_) => {
                trace!("Page {} has no text", page);
                Ok(None)
            }
            Err(e) => {
                debug!("Could not extract text from page {}: {}", page, e);
                Ok(None)
            }
        }
    }

    fn extract_text(&self) -> Result<String> {
        let doc = self
            .document
            .as_ref()
            .ok_or(PdfError::Parse("No document loaded".to_string()))?;

        let pages = self.pages_to_read();
        let page_numbers: Vec<u32> = self.pages.keys().copied().take(pages as usize).collect();

        // One pass over all pages; page by page only when a page breaks it
        let text = match doc.extract_text(&page_numbers) {
            Ok(text) => text,
            Err(e) => {
                debug!("Whole-document text extraction failed ({}), reading pages one by one", e);
                let mut text = String::new();
                let mut empty_pages = 0;
                for &page in &page_numbers {
                    match self.extract_page_text(page)? {
                        Some(page_text) => text.push_str(&page_text),
                        None => empty_pages += 1,
                    }
                }
                debug!("{} of {} pages yielded no text", empty_pages, pages);
                text
            }
        };

        debug!("Extracted {} chars from {} pages", text.len(), pages);

        if text.trim().is_empty() && self.config.fallback_to_pdf_extract {
            debug!("No page text from lopdf, trying pdf-extract");
            if let Some(fallback) = self.extract_with_pdf_extract() {
                return Ok(fallback);
            }
        }

        Ok(text)
    }
}

/// Concatenate the first `limit` page texts (0 = all) with no separator.
fn join_pages(pages: Vec<String>, limit: usize) -> String {
    let limit = if limit == 0 { pages.len() } else { limit };
    pages.into_iter().take(limit).collect()
}

/// Load a PDF from memory and return its concatenated page text.
pub fn extract_document_text(data: &[u8], config: &PdfConfig) -> Result<String> {
    let mut extractor = PdfExtractor::with_config(config.clone());
    extractor.load(data)?;
    extractor.extract_text()
}

/// Minimal PDF documents for tests.
#[cfg(test)]
pub(crate) mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Build a PDF with one page per entry; each entry is a list of text lines.
    /// An empty entry produces a page with no text.
    pub fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });

        let mut kids: Vec<Object> = Vec::new();
        for lines in pages {
            let mut operations = Vec::new();
            for (i, line) in lines.iter().enumerate() {
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
                operations.push(Operation::new(
                    "Td",
                    vec![72.into(), (720 - 16 * i as i64).into()],
                ));
                operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
                operations.push(Operation::new("ET", vec![]));
            }
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().unwrap(),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => dictionary! {
                    "Font" => dictionary! { "F1" => font_id },
                },
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

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }
}
