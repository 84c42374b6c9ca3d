//! Invoice number extraction.

use super::patterns::INVOICE_NUMBER;
use super::{ExtractionMatch, FieldExtractor};
use crate::models::result::InvoiceNumber;

/// Extracts the value following the first `Invoice Number` / `Invoice No.` /
/// `Invoice #` label.
#[derive(Debug, Default, Clone, Copy)]
pub struct InvoiceNumberExtractor;

impl FieldExtractor for InvoiceNumberExtractor {
    type Output = ExtractionMatch<InvoiceNumber>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = INVOICE_NUMBER.captures(text)?;
        let full = caps.get(0)?;
        let value = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        Some(ExtractionMatch::new(InvoiceNumber::from_capture(value), full))
    }
}

/// Extract the invoice number from text.
///
/// Returns `None` when no label is present and [`InvoiceNumber::Blank`]
/// when the label has no value after it.
pub fn extract_invoice_number(text: &str) -> Option<InvoiceNumber> {
    InvoiceNumberExtractor.extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn value(s: &str) -> Option<InvoiceNumber> {
        Some(InvoiceNumber::Value(s.to_string()))
    }

    #[test]
    fn test_label_variants() {
        assert_eq!(
            extract_invoice_number("Invoice Number: INV-2024/001"),
            value("INV-2024/001")
        );
        assert_eq!(extract_invoice_number("INVOICE NO. 10452"), value("10452"));
        assert_eq!(extract_invoice_number("Invoice # 77_3"), value("77_3"));
        assert_eq!(extract_invoice_number("invoice#:[A12](3)"), value("[A12](3)"));
        assert_eq!(extract_invoice_number("Invoice No.:2024.11.05"), value("2024.11.05"));
    }

    #[test]
    fn test_label_on_separate_line_from_word() {
        assert_eq!(extract_invoice_number("INVOICE\nNumber: 5501"), value("5501"));
    }

    #[test]
    fn test_value_stops_at_other_characters() {
        assert_eq!(
            extract_invoice_number("Invoice Number: 4471, dated 2024-01-02"),
            value("4471")
        );
    }

    #[test]
    fn test_blank_when_label_followed_by_line_break() {
        assert_eq!(
            extract_invoice_number("Invoice #:\nDate: 2024-01-02"),
            Some(InvoiceNumber::Blank)
        );
        assert_eq!(extract_invoice_number("Invoice Number:"), Some(InvoiceNumber::Blank));
        assert_eq!(
            extract_invoice_number("Invoice No. , PO 17"),
            Some(InvoiceNumber::Blank)
        );
    }

    #[test]
    fn test_value_on_next_line() {
        assert_eq!(extract_invoice_number("Invoice Number:\n10452"), value("10452"));
        assert_eq!(
            extract_invoice_number("INVOICE #\n  INV-88/2\nDate: 2024-01-02"),
            value("INV-88/2")
        );
    }

    #[test]
    fn test_plain_word_after_label_is_not_a_number() {
        assert_eq!(
            extract_invoice_number("Please quote invoice numbers on remittance. Invoice No. 10452"),
            Some(InvoiceNumber::Blank)
        );
        assert_eq!(
            extract_invoice_number("Your Invoice # is 1234"),
            Some(InvoiceNumber::Blank)
        );
        assert_eq!(
            extract_invoice_number("Invoice Number Date Amount\n10452 2024-01-02 99.00"),
            Some(InvoiceNumber::Blank)
        );
    }

    #[test]
    fn test_value_needs_a_digit() {
        assert_eq!(extract_invoice_number("Invoice #: Blank"), Some(InvoiceNumber::Blank));
        assert_eq!(extract_invoice_number("Invoice No. A7"), value("A7"));
        assert_eq!(extract_invoice_number("Invoice No. 7A"), value("7A"));
    }

    #[test]
    fn test_absent_without_label() {
        assert_eq!(extract_invoice_number("Statement of account"), None);
        assert_eq!(extract_invoice_number("Invoice Date: 2024-01-02"), None);
    }

    #[test]
    fn test_first_label_wins() {
        assert_eq!(
            extract_invoice_number("Invoice #:\nInvoice Number 99"),
            Some(InvoiceNumber::Blank)
        );
    }
}
