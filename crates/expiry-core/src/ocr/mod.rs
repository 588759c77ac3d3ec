//! OCR collaborator.
//!
//! Extraction only needs the recognized text; any engine that turns an
//! image into text can sit behind [`OcrEngine`]. With the `native`
//! feature, [`PureOcrEngine`] provides one built on `pure-onnx-ocr`.

#[cfg(feature = "native")]
mod pure_engine;

#[cfg(feature = "native")]
pub use pure_engine::PureOcrEngine;

use std::path::Path;

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::{OcrError, Result};

/// Anything that can read text from a label image.
pub trait OcrEngine {
    /// Recognize the text in `image`, lines separated by `\n`.
    fn run_ocr(&self, image: &DynamicImage) -> std::result::Result<String, OcrError>;

    /// Load an image from disk and recognize it.
    fn run_ocr_file(&self, path: &Path) -> Result<String> {
        let image = image::open(path)?;
        Ok(self.run_ocr(&image)?)
    }
}

/// A recognized line of text with its quadrilateral.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextLine {
    /// Bounding box coordinates (x1, y1, x2, y2, x3, y3, x4, y4).
    pub bbox: [f32; 8],

    /// Recognized text content.
    pub text: String,

    /// Recognition confidence score (0.0 - 1.0).
    pub confidence: f32,
}

impl TextLine {
    /// Get the axis-aligned bounding rectangle.
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        let xs = [self.bbox[0], self.bbox[2], self.bbox[4], self.bbox[6]];
        let ys = [self.bbox[1], self.bbox[3], self.bbox[5], self.bbox[7]];

        let min_x = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_x = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let min_y = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_y = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

        (min_x, min_y, max_x, max_y)
    }
}

/// Result of OCR processing on an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrResult {
    /// Recognized lines in reading order.
    pub lines: Vec<TextLine>,

    /// Full text (lines joined with newlines).
    pub text: String,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,

    /// Image dimensions (width, height).
    pub image_size: (u32, u32),
}

/// Sort lines top-to-bottom, then left-to-right within a 20px band.
pub fn sort_by_reading_order(lines: &mut [TextLine]) {
    lines.sort_by(|a, b| {
        let (ax, ay, _, _) = a.rect();
        let (bx, by, _, _) = b.rect();
        let row_a = (ay / 20.0) as i32;
        let row_b = (by / 20.0) as i32;
        if row_a != row_b {
            row_a.cmp(&row_b)
        } else {
            ax.partial_cmp(&bx).unwrap_or(std::cmp::Ordering::Equal)
        }
    });
}
