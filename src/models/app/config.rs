use crate::error::ConfigError;
use crate::models::cli::Params;
use crate::utils::read_page_slugs;
use log::warn;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PAGE_SLUGS: [&str; 5] = ["about", "contact", "services", "blog", "portfolio"];
pub const DEFAULT_CONCURRENCY: usize = 3;
pub const PSI_ENDPOINT: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Xlsx,
}

impl OutputFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            OutputFormat::Html => "report.html",
            OutputFormat::Xlsx => "report.xlsx",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "xlsx" => Ok(OutputFormat::Xlsx),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Xlsx => write!(f, "xlsx"),
        }
    }
}

/// Everything a run needs, resolved once at startup and passed down.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub old_base_url: String,
    pub new_base_url: String,
    pub output_format: OutputFormat,
    pub page_slugs: Vec<String>,
    pub concurrency: NonZeroUsize,
    pub timeout: Duration,
    pub endpoint: String,
    pub output_dir: PathBuf,
    pub save_json: bool,
}

impl Config {
    pub fn from_params(params: Params) -> Result<Self, ConfigError> {
        let api_key = params
            .api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let output_format: OutputFormat = params.format.parse()?;
        let concurrency =
            NonZeroUsize::new(params.concurrency).ok_or(ConfigError::InvalidConcurrency)?;
        if params.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        let page_slugs = resolve_page_slugs(params.pages, params.pages_file)?;

        if params.old_base_url.is_empty() {
            warn!("⚠️  OLD_BASE_URL is not set, before measurements will fail");
        }
        if params.new_base_url.is_empty() {
            warn!("⚠️  NEW_BASE_URL is not set, after measurements will fail");
        }

        Ok(Config {
            api_key,
            old_base_url: params.old_base_url,
            new_base_url: params.new_base_url,
            output_format,
            page_slugs,
            concurrency,
            timeout: Duration::from_secs(params.timeout_secs),
            endpoint: params.endpoint,
            output_dir: params.output_dir,
            save_json: params.save_json,
        })
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(self.output_format.file_name())
    }
}

// --pages beats --pages-file, which beats the built-in list
fn resolve_page_slugs(
    pages: Vec<String>,
    pages_file: Option<PathBuf>,
) -> Result<Vec<String>, ConfigError> {
    let pages: Vec<String> = pages
        .into_iter()
        .map(|slug| slug.trim().to_string())
        .filter(|slug| !slug.is_empty())
        .collect();
    if !pages.is_empty() {
        return Ok(pages);
    }

    if let Some(path) = pages_file {
        return read_page_slugs(&path).map_err(|source| ConfigError::PagesFile { path, source });
    }

    Ok(DEFAULT_PAGE_SLUGS.iter().map(|s| s.to_string()).collect())
}
