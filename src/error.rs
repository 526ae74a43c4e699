use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Problems with the run configuration. Always fatal, raised before any
/// measurement is attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing GOOGLE_PSI_API_KEY (set it in .env or pass --api-key)")]
    MissingApiKey,
    #[error("invalid format `{0}`, use --format=html or --format=xlsx")]
    InvalidFormat(String),
    #[error("concurrency must be a positive integer")]
    InvalidConcurrency,
    #[error("timeout must be at least one second")]
    InvalidTimeout,
    #[error("failed to read pages file {}", .path.display())]
    PagesFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single PSI call did not produce metrics. Never leaves the
/// measurement client; it is logged and folded into a failed outcome.
#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("PSI returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("response is missing {0}")]
    MissingField(&'static str),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to build spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
