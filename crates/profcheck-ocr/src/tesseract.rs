//! [`OcrEngine`] backed by the `tesseract` command-line tool.
//!
//! Image bytes are piped through `tesseract stdin stdout -l <lang>`, so no
//! temporary files are written.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use profcheck_core::AppConfig;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::{OcrEngine, OcrError};

#[derive(Debug, Clone)]
pub struct TesseractEngine {
    bin: PathBuf,
    lang: String,
    timeout: Duration,
}

impl TesseractEngine {
    #[must_use]
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self {
            bin: bin.into(),
            lang: "eng".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.tesseract_bin.clone())
            .with_lang(config.ocr_lang.clone())
            .with_timeout(config.ocr_timeout())
    }

    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn run(&self, image: &[u8]) -> Result<String, OcrError> {
        let mut child = Command::new(&self.bin)
            .args(["stdin", "stdout", "-l", &self.lang])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| OcrError::Spawn {
                bin: self.bin.display().to_string(),
                source,
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| std::io::Error::other("OCR engine stdin was not captured"))?;
        let payload = image.to_vec();
        let writer = tokio::spawn(async move {
            let written = stdin.write_all(&payload).await;
            drop(stdin);
            written
        });

        let Ok(output) = tokio::time::timeout(self.timeout, child.wait_with_output()).await else {
            writer.abort();
            return Err(OcrError::Timeout {
                secs: self.timeout.as_secs(),
            });
        };
        let output = output?;

        // The engine may exit before reading everything; its exit status is
        // what decides success.
        if let Ok(Err(e)) = writer.await {
            tracing::debug!(error = %e, "OCR engine closed stdin early");
        }

        if !output.status.success() {
            return Err(OcrError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    async fn recognize(&self, image: &[u8]) -> Result<String, OcrError> {
        if image.is_empty() {
            return Err(OcrError::EmptyImage);
        }

        let text = self.run(image).await.inspect_err(|e| {
            tracing::warn!(error = %e, bin = %self.bin.display(), "OCR failed");
        })?;
        tracing::debug!(
            image_bytes = image.len(),
            text_lines = text.lines().count(),
            "OCR complete"
        );
        Ok(text)
    }
}
