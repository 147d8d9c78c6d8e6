//! Field extraction from OCR text lines.
//!
//! Each line is checked once, top to bottom, against every rule:
//!
//! - count lines (`"12,345 followers"`, `"80 following"`, `"1 post"`): later
//!   matches overwrite earlier ones;
//! - any line containing `@` becomes the username, last one wins;
//! - the first line with more than two words becomes the bio and is never
//!   replaced.
//!
//! Rules are independent, so one line can feed several fields. Nothing here
//! fails: a line that does not match simply leaves the field as it was.

use std::sync::LazyLock;

use profcheck_core::ExtractionResult;
use regex::Regex;

static FOLLOWERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9][0-9,.]*)\s*followers").expect("valid followers regex"));

static FOLLOWING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9][0-9,.]*)\s*following").expect("valid following regex"));

static POSTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9][0-9,.]*)\s*posts?").expect("valid posts regex"));

/// Split raw OCR output into trimmed, non-empty lines in reading order.
#[must_use]
pub fn to_lines(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Extract profile fields from trimmed, non-empty OCR lines.
///
/// An empty input yields an [`ExtractionResult`] with every field unset.
#[must_use]
pub fn extract_profile<I, S>(lines: I) -> ExtractionResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = ExtractionResult::default();

    for line in lines {
        let line = line.as_ref();
        let lower = line.to_lowercase();

        if lower.contains("followers") {
            if let Some(n) = capture_count(&FOLLOWERS_RE, line) {
                result.followers = Some(n);
            }
        }
        if lower.contains("following") {
            if let Some(n) = capture_count(&FOLLOWING_RE, line) {
                result.following = Some(n);
            }
        }
        // Gate is the plural form; the pattern also accepts "1 post" once
        // the line mentions "posts" somewhere.
        if lower.contains("posts") {
            if let Some(n) = capture_count(&POSTS_RE, line) {
                result.posts = Some(n);
            }
        }

        if line.contains('@') {
            result.username = Some(line.trim().to_string());
        }

        if result.bio.is_none() && line.split_whitespace().count() > 2 {
            result.bio = Some(line.trim().to_string());
        }
    }

    result
}

/// Find the first `<digits> <label>` match in `line` and normalize its number.
fn capture_count(re: &Regex, line: &str) -> Option<u64> {
    let digits = re.captures(line)?.get(1)?.as_str();
    normalize_count(digits)
}

/// Strip `,` and `.` separators and parse what remains.
///
/// `"12,345"` → `12345`, `"1.2"` → `12`. Fractions are never kept. Values that
/// do not fit in a `u64` yield `None`.
pub(crate) fn normalize_count(digits: &str) -> Option<u64> {
    let stripped: String = digits.chars().filter(|c| !matches!(c, ',' | '.')).collect();
    stripped.parse::<u64>().ok()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
