//! Error types for the invex-core library.

use thiserror::Error;

/// Main error type for the invex library.
#[derive(Error, Debug)]
pub enum InvexError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Result export/import error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors related to writing and reading result tables.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV encoding or decoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Written CSV was not valid UTF-8.
    #[error("invalid UTF-8 in CSV output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A required column is missing from the header row.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// A cell could not be parsed.
    #[error("invalid value for {column}: {value}")]
    InvalidValue { column: String, value: String },
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for ExportError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        ExportError::Csv(csv::Error::from(err.into_error()))
    }
}

/// Result type for the invex library.
pub type Result<T> = std::result::Result<T, InvexError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf_message(err: &PdfError) -> String {
        match err {
            PdfError::Parse(_) | PdfError::Encrypted | PdfError::NoPages => err.to_string(),
            PdfError::InvalidPage(_) => err.to_string(),
        }
    }

    #[test]
    fn test_pdf_error_messages() {
        assert_eq!(
            pdf_message(&PdfError::Parse("bad xref".to_string())),
            "failed to parse PDF: bad xref"
        );
        assert_eq!(pdf_message(&PdfError::Encrypted), "PDF is encrypted");
        assert_eq!(pdf_message(&PdfError::NoPages), "PDF has no pages");
        assert_eq!(pdf_message(&PdfError::InvalidPage(4)), "invalid page number: 4");
    }

    #[test]
    fn test_pdf_error_wraps_into_invex_error() {
        let err: InvexError = PdfError::NoPages.into();
        assert_eq!(err.to_string(), "PDF error: PDF has no pages");
    }
}
