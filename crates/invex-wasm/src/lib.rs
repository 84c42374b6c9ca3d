//! WASM bindings for invoice field extraction.
//!
//! This crate backs the browser upload page: PDFs chosen in a file input are
//! read into byte arrays, extracted one at a time, and the results can be
//! downloaded as CSV.

use wasm_bindgen::prelude::*;

use invex_core::models::config::OutputConfig;
use invex_core::models::result::ExtractionResult;
use invex_core::{
    extract_fields, process_document, render_text, write_csv, Document, DocumentReport,
    InvexConfig, LabelStyle,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract invoice fields from already-extracted document text.
#[wasm_bindgen]
pub fn extract_fields_from_text(text: &str) -> Result<JsValue, JsValue> {
    let result: ExtractionResult = extract_fields(text);
    to_js(&result)
}

/// Extract invoice fields from PDF bytes.
///
/// Unreadable documents produce a report with an `error` field instead of
/// throwing.
#[wasm_bindgen]
pub fn extract_fields_from_pdf(name: &str, data: &[u8]) -> Result<JsValue, JsValue> {
    let document = Document::new(name, data.to_vec());
    let report = process_document(&document, &InvexConfig::default().pdf);
    to_js(&report)
}

/// Collects results for a set of uploaded PDFs.
#[wasm_bindgen]
pub struct BatchExtractor {
    config: InvexConfig,
    reports: Vec<DocumentReport>,
}

#[wasm_bindgen]
impl BatchExtractor {
    /// Create a new batch extractor with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: InvexConfig::default(),
            reports: Vec::new(),
        }
    }

    /// Use data-model field names instead of display labels.
    #[wasm_bindgen]
    pub fn set_internal_labels(&mut self, internal: bool) {
        self.config.output.labels = if internal {
            LabelStyle::Internal
        } else {
            LabelStyle::Display
        };
    }

    /// Show the HST flag as its own field.
    #[wasm_bindgen]
    pub fn set_split_hst(&mut self, split: bool) {
        self.config.output.split_hst = split;
    }

    /// Process one uploaded PDF and return its report.
    #[wasm_bindgen]
    pub fn add_document(&mut self, name: &str, data: &[u8]) -> Result<JsValue, JsValue> {
        let document = Document::new(name, data.to_vec());
        let report = process_document(&document, &self.config.pdf);

        if let Some(error) = &report.error {
            web_sys::console::warn_1(&JsValue::from_str(&format!("{}: {}", name, error)));
        }

        let value = to_js(&report)?;
        self.reports.push(report);
        Ok(value)
    }

    /// Number of processed documents.
    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// All reports in upload order.
    #[wasm_bindgen]
    pub fn results(&self) -> Result<JsValue, JsValue> {
        to_js(&self.reports)
    }

    /// Results rendered as labelled text.
    #[wasm_bindgen]
    pub fn render_text(&self) -> String {
        let OutputConfig {
            labels, split_hst, ..
        } = self.config.output;
        self.reports
            .iter()
            .map(|r| render_text(r, labels, split_hst))
            .collect()
    }

    /// Results as a CSV table for download.
    #[wasm_bindgen]
    pub fn to_csv(&self) -> Result<String, JsValue> {
        write_csv(
            &self.reports,
            self.config.output.labels,
            self.config.output.split_hst,
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Suggested file name for the CSV download.
    #[wasm_bindgen]
    pub fn csv_file_name(&self) -> String {
        self.config.output.csv_file_name.clone()
    }

    /// Forget all processed documents.
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.reports.clear();
    }
}

impl Default for BatchExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Blob parts for a CSV download link, for use with `new Blob(parts)`.
#[wasm_bindgen]
pub fn csv_blob_parts(csv: &str) -> js_sys::Array {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(csv));
    parts
}
