pub mod outcome;
pub mod page;
pub mod summary;

pub use outcome::{MeasurementOutcome, MeasurementResult, Variant};
pub use page::PageComparison;
pub use summary::{ComparisonReport, RunSummary};
