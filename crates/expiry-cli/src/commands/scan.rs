//! Scan command - read one label image or OCR text dump.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use tracing::info;

use expiry_core::extract::find_all_dates;
use expiry_core::{assess, ExpiryStatus, ScanPolicy};

use super::output::{format_reports, status_label, OutputFormat, ScanReport};
use super::{load_config, reference_date, LabelReader};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Input file (label image or .txt OCR output)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Reference date for validation and status (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<NaiveDate>,

    /// Also list every date found on the label
    #[arg(long)]
    all_dates: bool,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(model_dir) = &args.model_dir {
        config.ocr.model_dir = model_dir.clone();
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Scanning file: {}", args.input.display());

    let mut reader = LabelReader::new(config.ocr.clone());
    let text = reader.read(&args.input)?;

    let now = reference_date(args.today);
    let policy = ScanPolicy::from(&config.extraction);
    let outcome = assess(&text, now, &policy);
    let status = outcome.status;

    let mut report = ScanReport::ok(args.input.display().to_string(), outcome);
    if args.all_dates {
        report.candidates = find_all_dates(&text, now);
    }

    let output = format_reports(std::slice::from_ref(&report), args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        let label = match status {
            ExpiryStatus::Expired => style(status_label(status)).red(),
            ExpiryStatus::ExpiringSoon => style(status_label(status)).yellow(),
            ExpiryStatus::Fresh => style(status_label(status)).green(),
            ExpiryStatus::Unknown => style(status_label(status)).dim(),
        };
        eprintln!(
            "{} Output written to {} ({})",
            style("✓").green(),
            output_path.display(),
            label
        );
    } else {
        println!("{}", output);
    }

    info!("Scanned {} in {:?}", args.input.display(), start.elapsed());

    Ok(())
}
