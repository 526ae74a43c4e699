pub mod report_service;
pub mod site_audit_service;

pub use report_service::{write_report, ReportInput};
pub use site_audit_service::{
    build_report, collect_comparisons, process_pages_in_batches, run_comparison_process, Measure,
    PageSpeedClient,
};
