use crate::error::ReportError;
use crate::models::ComparisonReport;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub fn ensure_output_dir(dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

pub fn write_report_bytes(path: &Path, contents: &[u8]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent() {
        ensure_output_dir(parent)?;
    }
    fs::write(path, contents).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the sorted comparisons and summary next to the rendered report.
pub fn save_json_report(
    output_dir: &Path,
    report: &ComparisonReport,
) -> Result<PathBuf, ReportError> {
    ensure_output_dir(output_dir)?;
    let output_path = output_dir.join("report.json");
    let file = File::create(&output_path).map_err(|source| ReportError::Io {
        path: output_path.clone(),
        source,
    })?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(output_path)
}
