//! GST/HST business number extraction.
//!
//! Canadian business numbers used for GST/HST registration have the shape
//! `123456789 RT 0001`: nine digits, a two-letter program identifier and a
//! four-digit reference, with at most one space between the parts.

use super::patterns::{HST_NUMBER, TAX_NUMBER};
use super::{ExtractionMatch, FieldExtractor};

/// Extracts the first GST/HST-shaped number.
#[derive(Debug, Default, Clone, Copy)]
pub struct TaxNumberExtractor;

impl FieldExtractor for TaxNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        TAX_NUMBER
            .find(text)
            .map(|m| ExtractionMatch::new(m.as_str().trim().to_string(), m))
    }
}

/// Detects a business number labelled `HST`.
///
/// Independent of [`TaxNumberExtractor`]: the generic number may come from
/// a different occurrence.
#[derive(Debug, Default, Clone, Copy)]
pub struct HstExtractor;

impl FieldExtractor for HstExtractor {
    type Output = ExtractionMatch<()>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        HST_NUMBER.find(text).map(|m| ExtractionMatch::new((), m))
    }

    fn is_match(&self, text: &str) -> bool {
        HST_NUMBER.is_match(text)
    }
}

/// Extract the first GST/HST number from text.
pub fn extract_tax_number(text: &str) -> Option<String> {
    TaxNumberExtractor.extract(text).map(|m| m.value)
}

/// Whether an `HST`-labelled business number appears in text.
pub fn is_hst_number(text: &str) -> bool {
    HstExtractor.is_match(text)
}
