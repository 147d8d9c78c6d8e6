//! Rule-based fake-profile scoring.
//!
//! Every rule adds a fixed number of points to a fake score and appends one
//! explanation line. Rules run in a fixed order and never suppress each other;
//! the verdict is read off the final score.

use profcheck_core::{ClassificationVerdict, ProfileData, Verdict};

/// Phrases that mark spam or scam accounts, matched case-insensitively
/// against both bio and username. Order drives explanation order.
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "lottery",
    "click here",
    "dm for",
    "money back",
    "investment",
    "crypto",
    "free followers",
];

const ZERO_FOLLOWERS_POINTS: u32 = 3;
const FOLLOW_FOR_FOLLOW_POINTS: u32 = 2;
const SAME_DAY_POINTS: u32 = 2;
const KEYWORD_POINTS: u32 = 2;

const FEW_FOLLOWERS_BELOW: u64 = 50;
const MANY_FOLLOWING_ABOVE: u64 = 1000;

const LIKELY_FAKE_AT: u32 = 4;
const FAKE_AT: u32 = 6;

/// Accumulated score and the reasons behind it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreCard {
    pub fake_score: u32,
    pub explanation: Vec<String>,
}

impl ScoreCard {
    fn add(&mut self, points: u32, reason: impl Into<String>) {
        self.fake_score += points;
        self.explanation.push(reason.into());
    }

    /// Map the score onto a verdict; the highest satisfied threshold wins.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        verdict_for(self.fake_score)
    }
}

/// Apply every rule to `profile` and return the raw score card.
#[must_use]
pub fn score_profile(profile: &ProfileData, posted_same_day: bool) -> ScoreCard {
    let mut card = ScoreCard::default();

    if profile.followers == 0 {
        card.add(
            ZERO_FOLLOWERS_POINTS,
            "Followers count is 0 – highly suspicious.",
        );
    }

    if profile.followers < FEW_FOLLOWERS_BELOW && profile.following > MANY_FOLLOWING_ABOVE {
        card.add(
            FOLLOW_FOR_FOLLOW_POINTS,
            "High following but very few followers – follow-for-follow behavior.",
        );
    }

    if posted_same_day {
        card.add(
            SAME_DAY_POINTS,
            "All posts posted on the same day – bot-like behavior.",
        );
    }

    let bio = profile.bio.to_lowercase();
    let username = profile.username.to_lowercase();
    for &keyword in SUSPICIOUS_KEYWORDS {
        if bio.contains(keyword) || username.contains(keyword) {
            card.add(
                KEYWORD_POINTS,
                format!("Suspicious keyword found: '{keyword}' in bio/username."),
            );
        }
    }

    card
}

/// Classify a resolved profile. Pure and infallible.
#[must_use]
pub fn classify(profile: &ProfileData, posted_same_day: bool) -> ClassificationVerdict {
    let card = score_profile(profile, posted_same_day);
    ClassificationVerdict {
        result: card.verdict(),
        explanation: card.explanation,
    }
}

fn verdict_for(fake_score: u32) -> Verdict {
    if fake_score >= FAKE_AT {
        Verdict::Fake
    } else if fake_score >= LIKELY_FAKE_AT {
        Verdict::LikelyFake
    } else {
        Verdict::Real
    }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
