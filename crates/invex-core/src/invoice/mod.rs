//! Invoice field extraction module.

mod extractor;
pub mod rules;

pub use extractor::{extract_fields, RuleExtractor};

use crate::models::result::ExtractionResult;

/// Trait for whole-document field extractors.
pub trait InvoiceExtractor {
    /// Extract all fields from the concatenated document text.
    fn extract(&self, text: &str) -> ExtractionResult;
}
