use std::path::Path;
use std::time::Duration;

use log::{info, warn};
use tracing_subscriber::filter::LevelFilter;

/// Installs the fmt subscriber; `log` records are forwarded to it.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

pub fn log_run_banner(old_base_url: &str, new_base_url: &str, pages: usize, concurrency: usize) {
    info!("🚀 PageSpeed Insights comparison started");
    info!("📊 Old Base URL: {}", old_base_url);
    info!("📊 New Base URL: {}", new_base_url);
    info!(
        "📋 Analyzing {} pages, {} at a time...",
        pages, concurrency
    );
}

pub fn log_run_footer(
    report_path: &Path,
    measurements: usize,
    elapsed: Duration,
    failed_measurements: usize,
) {
    let rule = "=".repeat(50);
    info!("{}", rule);
    info!("✨ Report generated successfully!");
    info!("📄 Location: {}", report_path.display());
    info!("📊 Total measurements: {}", measurements);
    info!("⚡ Processing time: {:.2}s", elapsed.as_secs_f64());
    if failed_measurements > 0 {
        warn!("⚠️  Failed measurements: {}", failed_measurements);
    }
    info!("{}", rule);
}
