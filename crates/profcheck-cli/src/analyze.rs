//! Command handlers for `analyze` and `extract`.
//!
//! Output goes to stdout as pretty JSON; logs go to stderr so the output can
//! be piped.

use std::io::Read;
use std::path::Path;

use profcheck_core::{AppConfig, FieldOverrides};
use profcheck_ocr::{OcrEngine, TesseractEngine};

use crate::SourceArgs;

/// Collect OCR lines for the given source. No source means no lines.
pub(crate) async fn load_lines(
    config: &AppConfig,
    source: &SourceArgs,
) -> anyhow::Result<Vec<String>> {
    let raw = match (&source.image, &source.text) {
        (Some(image), _) => {
            let bytes = tokio::fs::read(image)
                .await
                .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", image.display()))?;
            let engine = TesseractEngine::from_config(config);
            engine.recognize(&bytes).await?
        }
        (None, Some(text)) => read_text(text)?,
        (None, None) => return Ok(Vec::new()),
    };

    let lines = profcheck_analyzer::to_lines(&raw);
    tracing::debug!(lines = lines.len(), "loaded profile text");
    Ok(lines)
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))
}

/// Classify and print `{"result", "explanation"}`.
///
/// # Errors
///
/// Returns an error if the source cannot be read or OCR fails.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    source: &SourceArgs,
    overrides: &FieldOverrides,
    posted_same_day: bool,
) -> anyhow::Result<()> {
    let lines = load_lines(config, source).await?;
    let verdict = profcheck_analyzer::analyze(&lines, overrides, posted_same_day);
    println!("{}", serde_json::to_string_pretty(&verdict)?);
    Ok(())
}

/// Print the raw extraction result without merging or scoring.
///
/// # Errors
///
/// Returns an error if the source cannot be read or OCR fails.
pub(crate) async fn run_extract(config: &AppConfig, source: &SourceArgs) -> anyhow::Result<()> {
    let lines = load_lines(config, source).await?;
    let extracted = profcheck_analyzer::extract_profile(&lines);
    println!("{}", serde_json::to_string_pretty(&extracted)?);
    Ok(())
}
