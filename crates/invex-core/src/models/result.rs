//! Extraction result model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel rendered when an invoice-number label was found with no value.
pub const BLANK_SENTINEL: &str = "Blank";

/// Fields extracted from one document's text.
///
/// Every document produces one independent result. The record is never
/// mutated after extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// The known vendor name was found (letter-spacing tolerant).
    pub vendor_matched: bool,

    /// The known vendor address was found (comma and spacing tolerant).
    pub address_matched: bool,

    /// First GST/HST-shaped identifier in the text.
    pub tax_number: Option<String>,

    /// An identifier of the same shape appears right after an `HST` label.
    pub tax_number_is_hst: bool,

    /// Invoice number, if an invoice-number label was found.
    pub invoice_number: Option<InvoiceNumber>,
}

/// Value captured after an invoice-number label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceNumber {
    /// A non-empty value.
    Value(String),
    /// The label was present but nothing followed it.
    Blank,
}

impl InvoiceNumber {
    /// Build from a captured run, mapping an empty run to [`InvoiceNumber::Blank`].
    pub fn from_capture(captured: &str) -> Self {
        let trimmed = captured.trim();
        if trimmed.is_empty() {
            InvoiceNumber::Blank
        } else {
            InvoiceNumber::Value(trimmed.to_string())
        }
    }

    /// Parse a rendered value back. The sentinel maps to `Blank`.
    pub fn parse(s: &str) -> Self {
        if s == BLANK_SENTINEL {
            InvoiceNumber::Blank
        } else {
            InvoiceNumber::from_capture(s)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            InvoiceNumber::Value(v) => v,
            InvoiceNumber::Blank => BLANK_SENTINEL,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, InvoiceNumber::Blank)
    }
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized as a plain string so JSON output shows "Blank" like the text view.
impl Serialize for InvoiceNumber {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InvoiceNumber {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(InvoiceNumber::parse(&s))
    }
}

impl ExtractionResult {
    /// Invoice number rendered for display, `None` when absent.
    pub fn invoice_number_str(&self) -> Option<&str> {
        self.invoice_number.as_ref().map(InvoiceNumber::as_str)
    }

    /// Whether any rule produced a positive outcome.
    pub fn is_empty(&self) -> bool {
        !self.vendor_matched
            && !self.address_matched
            && self.tax_number.is_none()
            && !self.tax_number_is_hst
            && self.invoice_number.is_none()
    }
}
