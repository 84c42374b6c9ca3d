//! Batch processing command for multiple invoice files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use invex_core::{document_name, process_document, write_csv, DocumentReport};

use super::{load_config, read_document, OutputOptions};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input glob pattern (e.g. "invoices/*.pdf")
    #[arg(required = true)]
    input: String,

    /// Summary CSV path (default: configured CSV file name)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stop at the first document that cannot be read
    #[arg(long)]
    fail_fast: bool,

    #[command(flatten)]
    labels: OutputOptions,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    args.labels.apply(&mut config);

    // Expand glob pattern; sorted so submission order is stable
    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("pdf")
        })
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut reports = Vec::with_capacity(files.len());

    for path in &files {
        let report = match read_document(path) {
            Ok(document) => process_document(&document, &config.pdf),
            Err(e) => DocumentReport::failure(document_name(path), e.to_string()),
        };

        if let Some(err) = &report.error {
            if args.fail_fast {
                error!("Failed to process {}: {}", path.display(), err);
                pb.abandon();
                anyhow::bail!("Processing failed: {}", err);
            }
        } else {
            debug!("Processed {} in {}ms", path.display(), report.processing_time_ms);
        }

        reports.push(report);
        pb.inc(1);
    }

    pb.finish_and_clear();

    let summary_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.csv_file_name));

    let data = write_csv(&reports, config.output.labels, config.output.split_hst)?;
    fs::write(&summary_path, data)?;

    let successful = reports.iter().filter(|r| r.is_success()).count();
    let failed: Vec<_> = reports.iter().filter(|r| !r.is_success()).collect();

    println!(
        "{} Summary written to {}",
        style("✓").green(),
        summary_path.display()
    );
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        reports.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for report in &failed {
            println!(
                "  - {}: {}",
                report.file_name,
                report.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}
