//! Subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod output;
pub mod scan;

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing::debug;

use expiry_core::models::config::{ExpiryConfig, OcrConfig};
use expiry_core::{OcrEngine, PureOcrEngine};

/// Load the config from `--config`, else the user config file, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ExpiryConfig> {
    if let Some(path) = config_path {
        return Ok(ExpiryConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        Ok(ExpiryConfig::from_file(&default_path)?)
    } else {
        Ok(ExpiryConfig::default())
    }
}

/// `--today` if given, otherwise the local calendar date.
pub fn reference_date(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

/// How a label file is turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Raw OCR output saved as text.
    Text,
    /// Label photo that needs OCR.
    Image,
}

impl InputKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "txt" => Some(Self::Text),
            "png" | "jpg" | "jpeg" | "tiff" | "bmp" => Some(Self::Image),
            _ => None,
        }
    }
}

/// Reads label text, loading the OCR engine on first image.
pub struct LabelReader {
    ocr_config: OcrConfig,
    engine: Option<PureOcrEngine>,
}

impl LabelReader {
    pub fn new(ocr_config: OcrConfig) -> Self {
        Self {
            ocr_config,
            engine: None,
        }
    }

    pub fn read(&mut self, path: &Path) -> anyhow::Result<String> {
        match InputKind::from_path(path) {
            Some(InputKind::Text) => Ok(fs::read_to_string(path)?),
            Some(InputKind::Image) => {
                let engine = match self.engine.take() {
                    Some(engine) => engine,
                    None => PureOcrEngine::from_config(self.ocr_config.clone()).map_err(|e| {
                        anyhow::anyhow!(
                            "{}\n\nPlace the OCR models in {} or set ocr.model_dir.",
                            e,
                            self.ocr_config.model_dir.display()
                        )
                    })?,
                };
                let text = engine.run_ocr_file(path);
                self.engine = Some(engine);
                Ok(text?)
            }
            None => anyhow::bail!("Unsupported file format: {}", path.display()),
        }
    }
}
