//! OCR boundary for profcheck.
//!
//! The analyzer only ever sees text. This crate owns the step before it:
//! turning an uploaded screenshot into raw multi-line text.

pub mod error;
pub mod tesseract;

use async_trait::async_trait;

pub use error::OcrError;
pub use tesseract::TesseractEngine;

/// Converts image bytes into raw text, top-to-bottom.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, image: &[u8]) -> Result<String, OcrError>;
}
