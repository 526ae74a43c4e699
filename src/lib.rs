//! Compare PageSpeed Insights performance between two deployments of the
//! same site and render the result as an HTML or XLSX report.

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{ConfigError, MeasureError, ReportError};
pub use models::{Config, OutputFormat, Params};
pub use services::run_comparison_process;
