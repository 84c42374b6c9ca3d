//! Vendor name detection.

use super::patterns::VENDOR_NAME;
use super::{ExtractionMatch, FieldExtractor};

/// Finds the vendor's letter-spaced brand phrase.
#[derive(Debug, Default, Clone, Copy)]
pub struct VendorExtractor;

impl FieldExtractor for VendorExtractor {
    type Output = ExtractionMatch<()>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        VENDOR_NAME.find(text).map(|m| ExtractionMatch::new((), m))
    }

    fn is_match(&self, text: &str) -> bool {
        VENDOR_NAME.is_match(text)
    }
}

/// Whether the vendor name appears in text.
pub fn match_vendor(text: &str) -> bool {
    VendorExtractor.is_match(text)
}
