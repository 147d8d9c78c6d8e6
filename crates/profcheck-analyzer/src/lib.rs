//! Profile analysis for profcheck.
//!
//! Turns OCR text lines into an [`ExtractionResult`], merges caller overrides,
//! and scores the resolved profile with a fixed rule set. Everything here is
//! synchronous and free of shared state, so requests can run in parallel.

pub mod classify;
pub mod extract;

pub use classify::{classify, score_profile, ScoreCard, SUSPICIOUS_KEYWORDS};
pub use extract::{extract_profile, to_lines};

use profcheck_core::{merge_profile, ClassificationVerdict, ExtractionResult, FieldOverrides};

/// Run the full pipeline: extract, merge overrides, classify.
///
/// `lines` may be empty (no screenshot), in which case only the overrides
/// and defaults feed the classifier.
#[must_use]
pub fn analyze<I, S>(
    lines: I,
    overrides: &FieldOverrides,
    posted_same_day: bool,
) -> ClassificationVerdict
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let extracted = extract_profile(lines);
    analyze_extracted(&extracted, overrides, posted_same_day)
}

/// Same as [`analyze`] for callers that already hold an [`ExtractionResult`].
#[must_use]
pub fn analyze_extracted(
    extracted: &ExtractionResult,
    overrides: &FieldOverrides,
    posted_same_day: bool,
) -> ClassificationVerdict {
    let profile = merge_profile(extracted, overrides);
    tracing::debug!(
        followers = profile.followers,
        following = profile.following,
        posts = profile.posts,
        username = %profile.username,
        posted_same_day,
        "resolved profile"
    );
    classify(&profile, posted_same_day)
}
