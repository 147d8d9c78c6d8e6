//! Profile records shared by the extractor, the classifier, and the hosts.
//!
//! [`ExtractionResult`] is what a single OCR pass produced, [`FieldOverrides`]
//! is what the caller typed in, and [`merge_profile`] resolves both into the
//! [`ProfileData`] the classifier consumes.

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Fields found in one OCR pass. `None` means "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub posts: Option<u64>,
    pub username: Option<String>,
    pub bio: Option<String>,
}

/// Fully resolved profile. Unknown counts are already `0` and unknown text
/// is already empty, so the classifier cannot tell "unknown" from "zero".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    pub followers: u64,
    pub following: u64,
    pub posts: u64,
    pub username: String,
    pub bio: String,
}

/// Override values exactly as the caller sent them, before coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawOverrides {
    pub followers: Option<String>,
    pub following: Option<String>,
    pub posts: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
}

/// Caller-supplied values that win over OCR output when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOverrides {
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub posts: Option<u64>,
    pub username: Option<String>,
    pub bio: Option<String>,
}

impl FieldOverrides {
    /// Coerce raw override strings into typed overrides.
    ///
    /// Absent or empty values become `None`. Counts must be decimal integers;
    /// surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidOverride`] when a count is not a
    /// non-negative integer.
    pub fn from_raw(raw: RawOverrides) -> Result<Self, CoreError> {
        Ok(Self {
            followers: parse_count("followers", raw.followers.as_deref())?,
            following: parse_count("following", raw.following.as_deref())?,
            posts: parse_count("posts", raw.posts.as_deref())?,
            username: raw.username.filter(|s| !s.is_empty()),
            bio: raw.bio.filter(|s| !s.is_empty()),
        })
    }
}

fn parse_count(field: &'static str, raw: Option<&str>) -> Result<Option<u64>, CoreError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| CoreError::InvalidOverride {
                field,
                value: value.to_string(),
            }),
    }
}

/// Resolve overrides against OCR output: override, then extracted, then default.
#[must_use]
pub fn merge_profile(extracted: &ExtractionResult, overrides: &FieldOverrides) -> ProfileData {
    let pick_text = |over: Option<&String>, found: Option<&String>| -> String {
        over.filter(|s| !s.is_empty())
            .or(found)
            .cloned()
            .unwrap_or_default()
    };

    ProfileData {
        followers: overrides.followers.or(extracted.followers).unwrap_or(0),
        following: overrides.following.or(extracted.following).unwrap_or(0),
        posts: overrides.posts.or(extracted.posts).unwrap_or(0),
        username: pick_text(overrides.username.as_ref(), extracted.username.as_ref()),
        bio: pick_text(overrides.bio.as_ref(), extracted.bio.as_ref()),
    }
}

/// Classification outcome, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Real,
    #[serde(rename = "Likely Fake")]
    LikelyFake,
    Fake,
}

impl Verdict {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Real => "Real",
            Verdict::LikelyFake => "Likely Fake",
            Verdict::Fake => "Fake",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationVerdict {
    pub result: Verdict,
    /// One entry per triggered rule, in rule-evaluation order.
    pub explanation: Vec<String>,
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
