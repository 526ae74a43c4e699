// src/services/report_service/mod.rs

pub mod html;
pub mod xlsx;

pub use html::{generate_html_report, render_html};
pub use xlsx::{generate_xlsx_report, render_xlsx};

use crate::error::ReportError;
use crate::models::app::OutputFormat;
use crate::models::comparison::ComparisonReport;
use chrono::{DateTime, Utc};
use std::path::Path;
use std::time::Duration;

/// Everything an emitter renders. The comparisons inside `report` are
/// already sorted.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub report: &'a ComparisonReport,
    pub total_pages: usize,
    pub elapsed: Duration,
    pub generated_at: DateTime<Utc>,
}

impl ReportInput<'_> {
    /// Two PSI calls per page.
    pub fn measurements(&self) -> usize {
        self.total_pages * 2
    }

    pub fn elapsed_secs(&self) -> String {
        format!("{:.2}", self.elapsed.as_secs_f64())
    }
}

pub fn write_report(
    format: OutputFormat,
    input: &ReportInput<'_>,
    path: &Path,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Html => generate_html_report(input, path),
        OutputFormat::Xlsx => generate_xlsx_report(input, path),
    }
}
