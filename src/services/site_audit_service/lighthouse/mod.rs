pub mod lighthouse;

pub use lighthouse::{extract_result, Measure, PageSpeedClient};
