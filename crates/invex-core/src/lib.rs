//! Core library for invoice field extraction.
//!
//! This crate provides:
//! - PDF text extraction (per-page, concatenated in document order)
//! - Rule-based field extraction (vendor, address, GST/HST number, invoice number)
//! - Sequential batch processing with per-document error isolation
//! - CSV export and import of extraction results

pub mod batch;
pub mod error;
pub mod export;
pub mod invoice;
pub mod models;
pub mod pdf;

pub use batch::{document_name, process_batch, process_document, Document, DocumentReport};
pub use error::{ExportError, InvexError, PdfError, Result};
pub use export::{LabelStyle, read_csv, render_text, write_csv};
pub use invoice::{extract_fields, InvoiceExtractor, RuleExtractor};
pub use models::config::InvexConfig;
pub use models::result::{ExtractionResult, InvoiceNumber};
pub use pdf::{extract_document_text, PdfExtractor, PdfProcessor};
