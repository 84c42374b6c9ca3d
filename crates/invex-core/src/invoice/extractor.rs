//! Rule-based invoice field extractor.

use tracing::debug;

use crate::models::result::ExtractionResult;

use super::rules::{
    AddressExtractor, FieldExtractor as _, HstExtractor, InvoiceNumberExtractor,
    TaxNumberExtractor, VendorExtractor,
};
use super::InvoiceExtractor;

/// Runs every field rule over the document text.
///
/// Rules are independent of each other and hold no state, so one extractor
/// can be shared across any number of documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleExtractor;

impl RuleExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl InvoiceExtractor for RuleExtractor {
    fn extract(&self, text: &str) -> ExtractionResult {
        let vendor = VendorExtractor.extract(text);
        let address = AddressExtractor.extract(text);
        let tax_number = TaxNumberExtractor.extract(text);
        let hst = HstExtractor.extract(text);
        let invoice_number = InvoiceNumberExtractor.extract(text);

        debug!(
            vendor = ?vendor.as_ref().map(|m| m.position),
            address = ?address.as_ref().map(|m| m.position),
            tax_number = ?tax_number.as_ref().map(|m| m.position),
            hst = ?hst.as_ref().map(|m| m.position),
            invoice_number = ?invoice_number.as_ref().map(|m| m.position),
            "Field matches over {} chars",
            text.len()
        );

        ExtractionResult {
            vendor_matched: vendor.is_some(),
            address_matched: address.is_some(),
            tax_number: tax_number.map(|m| m.value),
            tax_number_is_hst: hst.is_some(),
            invoice_number: invoice_number.map(|m| m.value),
        }
    }
}

/// Extract invoice fields from document text.
pub fn extract_fields(text: &str) -> ExtractionResult {
    RuleExtractor.extract(text)
}
