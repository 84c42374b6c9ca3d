//! Extract command - pull invoice fields from one or more PDF files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use invex_core::models::config::InvexConfig;
use invex_core::{document_name, process_batch, render_text, write_csv, DocumentReport};

use super::{load_config, read_document, OutputOptions};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF files, processed in the given order
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also export all results as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    #[command(flatten)]
    labels: OutputOptions,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Labelled lines per document
    Text,
    /// JSON array of reports
    Json,
    /// CSV table
    Csv,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    args.labels.apply(&mut config);

    let mut documents = Vec::with_capacity(args.inputs.len());
    let mut unreadable = Vec::new();
    for (index, path) in args.inputs.iter().enumerate() {
        info!("Reading file: {}", path.display());
        match read_document(path) {
            Ok(document) => documents.push(document),
            Err(e) => {
                let report = DocumentReport::failure(document_name(path), e.to_string());
                unreadable.push((index, report));
            }
        }
    }

    let mut reports = process_batch(&documents, &config.pdf);

    // Ascending indices, so each earlier slot is already filled
    for (index, report) in unreadable {
        reports.insert(index, report);
    }

    let output = format_reports(&reports, args.format, &config)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    if let Some(csv_path) = &args.csv {
        let data = write_csv(&reports, config.output.labels, config.output.split_hst)?;
        fs::write(csv_path, data)?;
        eprintln!(
            "{} Results exported to {}",
            style("✓").green(),
            csv_path.display()
        );
    }

    let failed = reports.iter().filter(|r| !r.is_success()).count();
    if failed > 0 {
        eprintln!(
            "{} {} of {} documents could not be read",
            style("!").yellow(),
            failed,
            reports.len()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_reports(
    reports: &[DocumentReport],
    format: OutputFormat,
    config: &InvexConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|r| render_text(r, config.output.labels, config.output.split_hst))
            .collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(reports)?)),
        OutputFormat::Csv => Ok(write_csv(
            reports,
            config.output.labels,
            config.output.split_hst,
        )?),
    }
}
