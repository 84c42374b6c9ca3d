//! Vendor address detection.

use super::patterns::VENDOR_ADDRESS;
use super::{ExtractionMatch, FieldExtractor};

/// Finds the vendor's street address.
#[derive(Debug, Default, Clone, Copy)]
pub struct AddressExtractor;

impl FieldExtractor for AddressExtractor {
    type Output = ExtractionMatch<()>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        VENDOR_ADDRESS.find(text).map(|m| ExtractionMatch::new((), m))
    }

    fn is_match(&self, text: &str) -> bool {
        VENDOR_ADDRESS.is_match(text)
    }
}

/// Whether the vendor address appears in text.
pub fn match_address(text: &str) -> bool {
    AddressExtractor.is_match(text)
}
