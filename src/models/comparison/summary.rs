use crate::models::comparison::page::PageComparison;
use crate::models::lighthouse::ScoreStats;
use serde::{Deserialize, Serialize};

/// Aggregates over the comparisons where both sides succeeded.
///
/// Averages are `None` when there is nothing to average, and
/// `improvement_percent` is also `None` when the before average is zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub before_average: Option<f64>,
    pub after_average: Option<f64>,
    pub average_improvement: Option<f64>,
    pub improvement_percent: Option<f64>,
    pub pages_improved: usize,
    pub pages_regressed: usize,
    pub pages_unchanged: usize,
    pub valid_page_count: usize,
}

// pub struct for final report with statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub comparisons: Vec<PageComparison>,
    pub summary: RunSummary,
    pub before_stats: Option<ScoreStats>,
    pub after_stats: Option<ScoreStats>,
    pub best_page: Option<String>,
    pub worst_page: Option<String>,
}

impl ComparisonReport {
    pub fn failed_measurements(&self) -> usize {
        self.comparisons
            .iter()
            .map(PageComparison::failed_measurements)
            .sum()
    }
}
