//! Error types for the expiry-core library.
//!
//! The extraction engine itself never fails; these cover the collaborators
//! around it (OCR, configuration, image loading).

use thiserror::Error;

/// Main error type for the expiry library.
#[derive(Error, Debug)]
pub enum ExpiryError {
    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image loading error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors reported by an OCR engine.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The engine is not initialized or its models are unavailable.
    #[error("OCR engine not initialized: {0}")]
    NotInitialized(String),

    /// Failed to load OCR models.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// The underlying recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the expiry library.
pub type Result<T> = std::result::Result<T, ExpiryError>;
