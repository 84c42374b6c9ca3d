//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use invex_core::{Document, InvexConfig, LabelStyle};

/// Output options shared by `extract` and `batch`.
#[derive(Args, Clone, Debug)]
pub struct OutputOptions {
    /// Field labels used in text and CSV output
    #[arg(long, value_enum)]
    labels: Option<Labels>,

    /// Hide the separate HST field (show the combined GST/HST number only)
    #[arg(long)]
    no_hst: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Labels {
    /// "Emile Corporation Found", "Invoice Number", ...
    Display,
    /// "vendor_matched", "invoice_number", ...
    Internal,
}

impl OutputOptions {
    /// Apply command-line overrides on top of the configuration.
    pub fn apply(&self, config: &mut InvexConfig) {
        if let Some(labels) = self.labels {
            config.output.labels = match labels {
                Labels::Display => LabelStyle::Display,
                Labels::Internal => LabelStyle::Internal,
            };
        }
        if self.no_hst {
            config.output.split_hst = false;
        }
    }
}

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("invex")
        .join("config.json")
}

/// Load configuration from an explicit path, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<InvexConfig> {
    if let Some(path) = config_path {
        return Ok(InvexConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config from {}", default_path.display());
        Ok(InvexConfig::from_file(&default_path)?)
    } else {
        Ok(InvexConfig::default())
    }
}

/// Read a file into memory as an uploaded document.
pub fn read_document(path: &Path) -> anyhow::Result<Document> {
    Document::from_path(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
}
