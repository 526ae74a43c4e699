pub mod policy;
pub mod stats;

pub use policy::{diff_display, round2, round2_or_na, DiffStatus, ScoreTier, CHANGE_THRESHOLD};
pub use stats::{build_report, compute_score_stats, compute_summary, sort_comparisons};
