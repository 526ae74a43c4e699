use crate::models::app::{DEFAULT_CONCURRENCY, PSI_ENDPOINT};
use clap::Parser;
use std::path::PathBuf;

/// Compare PageSpeed Insights scores for the same pages on two deployments.
///
/// Every flag can also be set through the environment (or a `.env` file).
#[derive(Debug, Clone, Parser)]
#[command(name = "lightdiff", version)]
pub struct Params {
    /// PageSpeed Insights API key
    #[arg(long, env = "GOOGLE_PSI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the deployment being compared against
    #[arg(long, env = "OLD_BASE_URL", default_value = "")]
    pub old_base_url: String,

    /// Base URL of the new deployment
    #[arg(long, env = "NEW_BASE_URL", default_value = "")]
    pub new_base_url: String,

    /// Report format: html or xlsx
    #[arg(long, env = "REPORT_FORMAT", default_value = "html")]
    pub format: String,

    /// Comma separated page slugs, e.g. `about,contact-us,blog/latest`
    #[arg(long, env = "PAGE_SLUGS", value_delimiter = ',')]
    pub pages: Vec<String>,

    /// File with one page slug per line
    #[arg(long, env = "PAGE_SLUGS_FILE")]
    pub pages_file: Option<PathBuf>,

    /// Pages measured at once (each page issues two calls)
    #[arg(long, env = "PSI_CONCURRENCY", default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Seconds before a single PSI call is abandoned
    #[arg(long, env = "PSI_TIMEOUT_SECS", default_value_t = 120)]
    pub timeout_secs: u64,

    #[arg(long, env = "PSI_ENDPOINT", default_value = PSI_ENDPOINT, hide = true)]
    pub endpoint: String,

    /// Directory the report is written to
    #[arg(long, env = "REPORT_OUTPUT_DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Also write the raw comparison data as report.json
    #[arg(long)]
    pub save_json: bool,

    #[arg(short, long)]
    pub verbose: bool,
}
