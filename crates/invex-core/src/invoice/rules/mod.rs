//! Rule-based field extractors for vendor invoices.

pub mod address;
pub mod invoice_number;
pub mod patterns;
pub mod tax;
pub mod vendor;

pub use address::{match_address, AddressExtractor};
pub use invoice_number::{extract_invoice_number, InvoiceNumberExtractor};
pub use patterns::*;
pub use tax::{extract_tax_number, is_hst_number, HstExtractor, TaxNumberExtractor};
pub use vendor::{match_vendor, VendorExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from the leftmost match in `text`.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Whether the field is present at all.
    fn is_match(&self, text: &str) -> bool {
        self.extract(text).is_some()
    }
}

/// A located field match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in source text.
    pub position: (usize, usize),
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, m: regex::Match<'_>) -> Self {
        Self {
            value,
            position: (m.start(), m.end()),
            source: m.as_str().to_string(),
        }
    }
}
