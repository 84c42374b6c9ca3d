//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::InvexError;
use crate::export::LabelStyle;

/// Main configuration for invex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvexConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Result rendering and export configuration.
    pub output: OutputConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Try to open PDFs encrypted with an empty user password.
    pub decrypt_empty_password: bool,

    /// Retry with whole-document extraction when no page yielded text.
    pub fallback_to_pdf_extract: bool,

    /// Maximum pages to read (0 = unlimited).
    pub max_pages: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            decrypt_empty_password: true,
            fallback_to_pdf_extract: true,
            max_pages: 0,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Field labels used in text and CSV output.
    pub labels: LabelStyle,

    /// Show the HST flag as its own field.
    pub split_hst: bool,

    /// Default file name for CSV exports.
    pub csv_file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            labels: LabelStyle::Display,
            split_hst: true,
            csv_file_name: "invoice_extraction_results.csv".to_string(),
        }
    }
}

impl InvexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| InvexError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
