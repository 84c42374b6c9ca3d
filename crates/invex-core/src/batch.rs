//! Sequential processing of uploaded documents.

use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::invoice::extract_fields;
use crate::models::config::PdfConfig;
use crate::models::result::ExtractionResult;
use crate::pdf::extract_document_text;

/// An uploaded document held in memory.
#[derive(Debug, Clone)]
pub struct Document {
    /// File name shown next to the results.
    pub name: String,
    /// Raw PDF bytes.
    pub data: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Read a file from disk, named by [`document_name`].
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let data = std::fs::read(path)?;
        Ok(Self::new(document_name(path), data))
    }
}

/// Name shown next to a file's results: its final path component.
pub fn document_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

/// Outcome of processing one document.
///
/// Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReport {
    /// File name of the source document.
    pub file_name: String,
    /// Extracted fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ExtractionResult>,
    /// Why the document could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Processing time in milliseconds.
    #[serde(skip)]
    pub processing_time_ms: u64,
}

impl DocumentReport {
    pub fn success(file_name: impl Into<String>, result: ExtractionResult) -> Self {
        Self {
            file_name: file_name.into(),
            result: Some(result),
            error: None,
            processing_time_ms: 0,
        }
    }

    pub fn failure(file_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            result: None,
            error: Some(error.into()),
            processing_time_ms: 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }
}

/// Extract fields from one PDF held in memory.
pub fn process_document(document: &Document, config: &PdfConfig) -> DocumentReport {
    let start = Instant::now();

    let mut report = match extract_document_text(&document.data, config) {
        Ok(text) => {
            debug!("{}: {} chars of text", document.name, text.len());
            DocumentReport::success(&document.name, extract_fields(&text))
        }
        Err(e) => {
            warn!("Failed to process {}: {}", document.name, e);
            DocumentReport::failure(&document.name, e.to_string())
        }
    };

    report.processing_time_ms = start.elapsed().as_millis() as u64;
    report
}

/// Process documents one at a time in submission order.
///
/// A document that cannot be read yields a failed report; the remaining
/// documents are still processed.
pub fn process_batch<'a, I>(documents: I, config: &PdfConfig) -> Vec<DocumentReport>
where
    I: IntoIterator<Item = &'a Document>,
{
    let reports: Vec<DocumentReport> = documents
        .into_iter()
        .map(|document| process_document(document, config))
        .collect();

    let failed = reports.iter().filter(|r| !r.is_success()).count();
    info!(
        "Processed {} documents ({} failed)",
        reports.len(),
        failed
    );

    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::result::InvoiceNumber;
    use crate::pdf::fixtures::pdf_with_pages;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unreadable_document_does_not_stop_batch() {
        let documents = vec![
            Document::new(
                "good.pdf",
                pdf_with_pages(&[&["Emile Corporation", "Invoice No. 1001"]]),
            ),
            Document::new("broken.pdf", b"not a pdf".to_vec()),
            Document::new("second.pdf", pdf_with_pages(&[&["HST: 123456789RT0001"]])),
        ];

        let reports = process_batch(&documents, &PdfConfig::default());

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].file_name, "good.pdf");
        assert_eq!(reports[1].file_name, "broken.pdf");
        assert_eq!(reports[2].file_name, "second.pdf");

        let first = reports[0].result.as_ref().unwrap();
        assert!(first.vendor_matched);
        assert_eq!(
            first.invoice_number,
            Some(InvoiceNumber::Value("1001".to_string()))
        );

        assert!(reports[1].result.is_none());
        assert!(reports[1].error.as_deref().unwrap().contains("failed to parse PDF"));

        let second = reports[2].result.as_ref().unwrap();
        assert!(second.tax_number_is_hst);
        assert_eq!(second.tax_number.as_deref(), Some("123456789RT0001"));
    }

    #[test]
    fn test_document_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.pdf");
        std::fs::write(&path, b"bytes").unwrap();

        let document = Document::from_path(&path).unwrap();
        assert_eq!(document.name, "scan.pdf");
        assert_eq!(document.data, b"bytes");

        let err = Document::from_path(&dir.path().join("missing.pdf")).unwrap_err();
        assert!(matches!(err, crate::InvexError::Io(_)));
    }

    #[test]
    fn test_document_name() {
        assert_eq!(document_name(Path::new("invoices/2024/a.pdf")), "a.pdf");
        assert_eq!(document_name(Path::new("b.pdf")), "b.pdf");
        assert_eq!(document_name(Path::new("/")), "/");
    }

    #[test]
    fn test_empty_batch() {
        let documents: Vec<Document> = Vec::new();
        let reports = process_batch(&documents, &PdfConfig::default());
        assert!(reports.is_empty());
    }

    #[test]
    fn test_report_json_omits_missing_side() {
        let report = DocumentReport::failure("x.pdf", "PDF is encrypted");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["file_name"], "x.pdf");
        assert!(json.get("result").is_none());
        assert_eq!(json["error"], "PDF is encrypted");
    }
}
