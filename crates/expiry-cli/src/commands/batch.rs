//! Batch processing command for multiple label files.

use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use expiry_core::models::config::OcrConfig;
use expiry_core::{assess, ExpiryStatus, ScanPolicy};

use super::output::{format_reports, OutputFormat, ScanReport};
use super::{load_config, reference_date, InputKind, LabelReader};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern of label files (e.g. "scans/*.jpg")
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Number of parallel workers (default: batch.workers)
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Stop at the first file that fails
    #[arg(long)]
    fail_fast: bool,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Reference date for validation and status (default: today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<NaiveDate>,
}

/// Files still waiting for a worker, with their position in the input.
type WorkQueue = Arc<Mutex<VecDeque<(usize, PathBuf)>>>;

struct Worker {
    queue: WorkQueue,
    ocr_config: OcrConfig,
    now: NaiveDate,
    policy: ScanPolicy,
    continue_on_error: bool,
    abort: Arc<AtomicBool>,
    progress: ProgressBar,
}

impl Worker {
    fn next(&self) -> Option<(usize, PathBuf)> {
        if self.abort.load(Ordering::Relaxed) {
            return None;
        }
        self.queue.lock().ok()?.pop_front()
    }

    fn run(self) -> anyhow::Result<Vec<(usize, ScanReport)>> {
        let mut reader = LabelReader::new(self.ocr_config.clone());
        let mut done = Vec::new();

        while let Some((index, path)) = self.next() {
            let file = path.display().to_string();
            let report = match reader.read(&path) {
                Ok(text) => ScanReport::ok(file, assess(&text, self.now, &self.policy)),
                Err(e) if self.continue_on_error => {
                    warn!("Failed to scan {}: {}", path.display(), e);
                    ScanReport::failed(file, e)
                }
                Err(e) => {
                    error!("Failed to scan {}: {}", path.display(), e);
                    self.abort.store(true, Ordering::Relaxed);
                    anyhow::bail!("Scanning {} failed: {}", path.display(), e);
                }
            };

            done.push((index, report));
            self.progress.inc(1);
        }

        Ok(done)
    }
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(model_dir) = &args.model_dir {
        config.ocr.model_dir = model_dir.clone();
    }
    let continue_on_error = config.batch.continue_on_error && !args.fail_fast;

    // Expand glob pattern
    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| InputKind::from_path(p).is_some())
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to scan",
        style("ℹ").blue(),
        files.len()
    );

    let workers = args.jobs.unwrap_or(config.batch.workers).clamp(1, files.len());
    debug!("Scanning with {} workers", workers);

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let total = files.len();
    let queue: WorkQueue = Arc::new(Mutex::new(files.into_iter().enumerate().collect()));
    let abort = Arc::new(AtomicBool::new(false));
    let now = reference_date(args.today);
    let policy = ScanPolicy::from(&config.extraction);

    let handles: Vec<_> = (0..workers)
        .map(|_| {
            let worker = Worker {
                queue: Arc::clone(&queue),
                ocr_config: config.ocr.clone(),
                now,
                policy,
                continue_on_error,
                abort: Arc::clone(&abort),
                progress: progress.clone(),
            };
            tokio::task::spawn_blocking(move || worker.run())
        })
        .collect();

    let mut indexed = Vec::with_capacity(total);
    let mut first_error = None;
    for handle in handles {
        match handle.await? {
            Ok(done) => indexed.extend(done),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    if let Some(e) = first_error {
        progress.abandon();
        return Err(e);
    }
    progress.finish_and_clear();

    indexed.sort_by_key(|(index, _)| *index);
    let reports: Vec<ScanReport> = indexed.into_iter().map(|(_, report)| report).collect();

    let output = format_reports(&reports, args.format)?;
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    print_summary(&reports, start);

    Ok(())
}

fn print_summary(reports: &[ScanReport], start: Instant) {
    let failed: Vec<_> = reports.iter().filter(|r| r.error.is_some()).collect();
    let outcomes: Vec<_> = reports.iter().filter_map(|r| r.outcome.as_ref()).collect();
    let dated = outcomes.iter().filter(|o| o.detected_date.is_some()).count();
    let count = |status: ExpiryStatus| outcomes.iter().filter(|o| o.status == status).count();

    eprintln!();
    eprintln!(
        "{} Scanned {} files in {:?}",
        style("✓").green(),
        reports.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} with dates, {} expiring soon, {} expired, {} failed",
        style(dated).green(),
        style(count(ExpiryStatus::ExpiringSoon)).yellow(),
        style(count(ExpiryStatus::Expired)).red(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for report in &failed {
            eprintln!(
                "  - {}: {}",
                report.file,
                report.error.as_deref().unwrap_or("unknown error")
            );
        }
    }
}
