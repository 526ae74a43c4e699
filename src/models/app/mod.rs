pub mod config;

pub use config::{Config, OutputFormat, DEFAULT_CONCURRENCY, DEFAULT_PAGE_SLUGS, PSI_ENDPOINT};
