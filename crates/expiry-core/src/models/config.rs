//! Configuration structures for label scanning.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ExpiryError;

/// Main configuration for the expiry pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpiryConfig {
    /// OCR configuration.
    pub ocr: OcrConfig,

    /// Date interpretation configuration.
    pub extraction: ExtractionConfig,

    /// Batch processing configuration.
    pub batch: BatchConfig,
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Directory containing model files.
    pub model_dir: PathBuf,

    /// Text detection model file name.
    pub detection_model: String,

    /// Text recognition model file name.
    pub recognition_model: String,

    /// Character dictionary file name.
    pub dictionary: String,

    /// Keep `[UNK]` tokens emitted for unknown glyphs instead of blanking them.
    pub keep_unk: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            detection_model: "det.onnx".to_string(),
            recognition_model: "latin_rec.onnx".to_string(),
            dictionary: "latin_dict.txt".to_string(),
            keep_unk: false,
        }
    }
}

impl OcrConfig {
    /// Whether the detection and recognition models exist on disk.
    pub fn models_present(&self) -> bool {
        self.model_dir.join(&self.detection_model).exists()
            && self.model_dir.join(&self.recognition_model).exists()
            && self.model_dir.join(&self.dictionary).exists()
    }
}

/// Date interpretation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Shelf life added to a manufacture date to estimate expiry.
    pub shelf_life_months: u32,

    /// Items expiring within this many days are flagged as expiring soon.
    pub expiring_soon_days: i64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            shelf_life_months: 6,
            expiring_soon_days: 14,
        }
    }
}

/// Batch processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Number of files processed concurrently.
    pub workers: usize,

    /// Keep going when a single file fails.
    pub continue_on_error: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            workers: 4,
            continue_on_error: true,
        }
    }
}

impl ExpiryConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ExpiryError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no pipeline can run with.
    pub fn validate(&self) -> crate::Result<()> {
        if self.batch.workers == 0 {
            return Err(ExpiryError::Config("batch.workers must be at least 1".to_string()));
        }
        if self.extraction.expiring_soon_days < 0 {
            return Err(ExpiryError::Config(
                "extraction.expiring_soon_days must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: ExpiryConfig =
            serde_json::from_str(r#"{"extraction": {"shelf_life_months": 3}}"#).unwrap();
        assert_eq!(config.extraction.shelf_life_months, 3);
        assert_eq!(config.extraction.expiring_soon_days, 14);
        assert_eq!(config.batch.workers, 4);
        assert_eq!(config.ocr.detection_model, "det.onnx");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ExpiryConfig::default();
        config.batch.workers = 2;
        config.save(&path).unwrap();

        let loaded = ExpiryConfig::from_file(&path).unwrap();
        assert_eq!(loaded.batch.workers, 2);
        assert!(!loaded.ocr.models_present());
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = ExpiryConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ExpiryError::Config(_)));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"batch": {"workers": 0}}"#).unwrap();

        let err = ExpiryConfig::from_file(&path).unwrap_err();
        assert_eq!(err.to_string(), "configuration error: batch.workers must be at least 1");
    }
}
