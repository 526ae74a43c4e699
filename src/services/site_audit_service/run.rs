use crate::models::app::Config;
use crate::models::comparison::PageComparison;
use crate::services::report_service::{write_report, ReportInput};
use crate::services::site_audit_service::batch::process_pages_in_batches;
use crate::services::site_audit_service::compute::build_report;
use crate::services::site_audit_service::lighthouse::{Measure, PageSpeedClient};
use crate::utils::{log_run_banner, log_run_footer, save_json_report};

use anyhow::{Context, Result};
use chrono::Utc;
use futures::StreamExt;
use log::info;
use std::path::PathBuf;
use std::pin::pin;
use std::time::Instant;

/// Drains the batch stream into a list, logging progress as batches land.
pub async fn collect_comparisons<M: Measure>(config: &Config, client: &M) -> Vec<PageComparison> {
    let total = config.page_slugs.len();
    let mut comparisons = Vec::with_capacity(total);

    let mut stream = pin!(process_pages_in_batches(
        &config.page_slugs,
        &config.old_base_url,
        &config.new_base_url,
        client,
        config.concurrency,
    ));

    while let Some(comparison) = stream.next().await {
        comparisons.push(comparison);
        info!("📄 {}/{} pages compared", comparisons.len(), total);
    }

    comparisons
}

/// Measures every configured page on both deployments and writes the report.
/// Returns the path of the rendered report.
pub async fn run_comparison_process(config: &Config) -> Result<PathBuf> {
    let started = Instant::now();
    log_run_banner(
        &config.old_base_url,
        &config.new_base_url,
        config.page_slugs.len(),
        config.concurrency.get(),
    );

    let client = PageSpeedClient::from_config(config);
    let comparisons = collect_comparisons(config, &client).await;
    let report = build_report(comparisons);
    let elapsed = started.elapsed();

    info!("📝 Generating {} report...", config.output_format);
    let report_path = config.report_path();
    let input = ReportInput {
        report: &report,
        total_pages: config.page_slugs.len(),
        elapsed,
        generated_at: Utc::now(),
    };
    write_report(config.output_format, &input, &report_path)
        .with_context(|| format!("Failed to write report to {}", report_path.display()))?;

    if config.save_json {
        let json_path = save_json_report(&config.output_dir, &report)
            .context("Failed to write JSON report")?;
        info!("🗂️  Raw data saved to {}", json_path.display());
    }

    log_run_footer(
        &report_path,
        input.measurements(),
        elapsed,
        report.failed_measurements(),
    );

    Ok(report_path)
}
