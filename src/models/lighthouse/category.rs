use serde::{Deserialize, Serialize};

// pub struct for each category score
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Category {
    pub score: Option<f64>,
}

// PSI is asked for the performance category only
#[derive(Debug, Deserialize, Serialize)]
pub struct Categories {
    pub performance: Option<Category>,
}

// pub struct to store score statistics (min, max, median, std deviation)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScoreStats {
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub std_dev: f64,
}
