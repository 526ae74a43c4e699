//! Presentation policy shared by every report format, so HTML and XLSX
//! output always agree on tiers and statuses.

/// Score difference (in points) beyond which a page counts as changed.
pub const CHANGE_THRESHOLD: f64 = 5.0;
pub const GOOD_SCORE: f64 = 90.0;
pub const MEDIUM_SCORE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Good,
    Medium,
    Bad,
}

impl ScoreTier {
    pub fn of(score: f64) -> Self {
        if score >= GOOD_SCORE {
            ScoreTier::Good
        } else if score >= MEDIUM_SCORE {
            ScoreTier::Medium
        } else {
            ScoreTier::Bad
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ScoreTier::Good => "score-good",
            ScoreTier::Medium => "score-medium",
            ScoreTier::Bad => "score-bad",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStatus {
    Improved,
    Regressed,
    Unchanged,
}

impl DiffStatus {
    /// Classifies `after - before`. Exactly ±5 is still unchanged.
    pub fn of(diff: f64) -> Self {
        if diff > CHANGE_THRESHOLD {
            DiffStatus::Improved
        } else if diff < -CHANGE_THRESHOLD {
            DiffStatus::Regressed
        } else {
            DiffStatus::Unchanged
        }
    }

    pub fn between(before: f64, after: f64) -> Self {
        Self::of(after - before)
    }

    pub fn label(self) -> &'static str {
        match self {
            DiffStatus::Improved => "Improved",
            DiffStatus::Regressed => "Regressed",
            DiffStatus::Unchanged => "Unchanged",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            DiffStatus::Improved => "diff-improved",
            DiffStatus::Regressed => "diff-worse",
            DiffStatus::Unchanged => "diff-neutral",
        }
    }
}

/// `+12.50`, `-3.00`, `0.00`
pub fn diff_display(before: f64, after: f64) -> String {
    let diff = after - before;
    let prefix = if diff > 0.0 { "+" } else { "" };
    format!("{}{:.2}", prefix, diff)
}

pub fn round2(value: f64) -> String {
    format!("{:.2}", value)
}

/// Two decimals, or `N/A` when the value is unavailable.
pub fn round2_or_na(value: Option<f64>) -> String {
    value.map(round2).unwrap_or_else(|| "N/A".to_string())
}
