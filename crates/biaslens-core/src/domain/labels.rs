//! Seven-bucket labels shared by the political and emotional axes.
//!
//! Both axes use the same score thresholds; only the human-readable names
//! differ. Bucket boundaries, low to high:
//! `-0.6, -0.3, -0.1, 0.1, 0.3, 0.6`.

use serde::{Deserialize, Serialize};

/// Map a score in [-1, 1] onto a bucket index 0..=6.
fn bucket(score: f64) -> usize {
    if score < -0.6 {
        0
    } else if score < -0.3 {
        1
    } else if score < -0.1 {
        2
    } else if score < 0.1 {
        3
    } else if score < 0.3 {
        4
    } else if score < 0.6 {
        5
    } else {
        6
    }
}

/// Political-leaning label. Negative scores lean conservative, positive liberal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaningLabel {
    Conservative,
    ModeratelyConservative,
    SlightlyConservative,
    Moderate,
    SlightlyLiberal,
    ModeratelyLiberal,
    Liberal,
}

impl LeaningLabel {
    /// Bucket a combined leaning score.
    pub fn from_score(score: f64) -> Self {
        match bucket(score) {
            0 => Self::Conservative,
            1 => Self::ModeratelyConservative,
            2 => Self::SlightlyConservative,
            3 => Self::Moderate,
            4 => Self::SlightlyLiberal,
            5 => Self::ModeratelyLiberal,
            _ => Self::Liberal,
        }
    }

    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conservative => "Conservative (strong)",
            Self::ModeratelyConservative => "Moderately Conservative",
            Self::SlightlyConservative => "Slightly Conservative",
            Self::Moderate => "Moderate",
            Self::SlightlyLiberal => "Slightly Liberal",
            Self::ModeratelyLiberal => "Moderately Liberal",
            Self::Liberal => "Liberal (strong)",
        }
    }
}

impl std::fmt::Display for LeaningLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emotional-charge label. Negative scores read emotional, positive analytical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionLabel {
    HighlyEmotional,
    EmotionallyCharged,
    SomewhatEmotional,
    Neutral,
    SomewhatAnalytical,
    Analytical,
    Emotionless,
}

impl EmotionLabel {
    /// Bucket an emotional charge score.
    pub fn from_score(score: f64) -> Self {
        match bucket(score) {
            0 => Self::HighlyEmotional,
            1 => Self::EmotionallyCharged,
            2 => Self::SomewhatEmotional,
            3 => Self::Neutral,
            4 => Self::SomewhatAnalytical,
            5 => Self::Analytical,
            _ => Self::Emotionless,
        }
    }

    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HighlyEmotional => "Highly Emotional",
            Self::EmotionallyCharged => "Emotionally Charged",
            Self::SomewhatEmotional => "Somewhat Emotional",
            Self::Neutral => "Neutral",
            Self::SomewhatAnalytical => "Somewhat Analytical",
            Self::Analytical => "Analytical",
            Self::Emotionless => "Emotionless",
        }
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
