//! PDF processing module.

mod extractor;

pub use extractor::{extract_document_text, PdfExtractor};
#[cfg(test)]
pub(crate) use extractor::fixtures;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from a specific page (1-indexed).
    ///
    /// `Ok(None)` means the page exists but yielded no text.
    fn extract_page_text(&self, page: u32) -> Result<Option<String>>;

    /// Extract text from every page in order, concatenated with no separator.
    ///
    /// Pages that yield nothing contribute an empty string.
    fn extract_text(&self) -> Result<String> {
        let mut text = String::new();
        for page in 1..=self.page_count() {
            text.push_str(&self.extract_page_text(page)?.unwrap_or_default());
        }
        Ok(text)
    }
}
