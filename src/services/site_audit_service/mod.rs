// src/services/site_audit_service/mod.rs

pub mod batch;
pub mod compute;
pub mod lighthouse;
pub mod run;

pub use batch::process_pages_in_batches;
pub use compute::{build_report, compute_score_stats, compute_summary, sort_comparisons};
pub use lighthouse::{extract_result, Measure, PageSpeedClient};
pub use run::{collect_comparisons, run_comparison_process};
