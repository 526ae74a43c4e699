// src/models/mod.rs

pub mod app;
pub mod cli;
pub mod comparison;
pub mod lighthouse;

pub use app::{Config, OutputFormat};
pub use cli::Params;
pub use comparison::{
    ComparisonReport, MeasurementOutcome, MeasurementResult, PageComparison, RunSummary, Variant,
};
pub use lighthouse::{PsiResponse, ScoreStats};
