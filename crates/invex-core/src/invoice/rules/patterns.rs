//! Regex patterns for invoice field extraction.
//!
//! All patterns are case-insensitive and are applied to the whole
//! concatenated document text. Only the leftmost match is ever used.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Vendor name; the logo is letter-spaced so whitespace may appear
    // between any two letters of "emile".
    pub static ref VENDOR_NAME: Regex = Regex::new(
        r"(?i)e\s*m\s*i\s*l\s*e\s*corporation"
    ).unwrap();

    // Vendor street address, commas between components optional
    pub static ref VENDOR_ADDRESS: Regex = Regex::new(
        r"(?i)134\s*Bethridge\s*Rd\s*,?\s*Etobicoke\s*,?\s*ON\s*,?\s*M9W\s*1N3"
    ).unwrap();

    // GST/HST business number: 9 digits, 2 letters, 4 digits
    pub static ref TAX_NUMBER: Regex = Regex::new(
        r"(?i)\d{9}\s?[A-Z]{2}\s?\d{4}"
    ).unwrap();

    pub static ref HST_NUMBER: Regex = Regex::new(
        r"(?i)HST\s*[:#]?\s*\d{9}\s?[A-Z]{2}\s?\d{4}"
    ).unwrap();

    // Invoice number label followed by an optional value run. Letters are only
    // accepted in a run that also contains a digit, so a plain word after the
    // label is not taken as the number.
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)invoice\s*(?:number|no\.|#)\s*[:#]?\s*([A-Za-z\-/._\[\]()]*[0-9][A-Za-z0-9\-/._\[\]()]*)?"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        for re in [
            &*VENDOR_NAME,
            &*VENDOR_ADDRESS,
            &*TAX_NUMBER,
            &*HST_NUMBER,
            &*INVOICE_NUMBER,
        ] {
            assert!(!re.as_str().is_empty());
        }
    }

    #[test]
    fn test_tax_number_single_space_only() {
        assert!(TAX_NUMBER.is_match("123456789 RT 0001"));
        assert!(!TAX_NUMBER.is_match("123456789  RT0001"));
    }
}
