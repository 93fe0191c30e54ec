//! CSV and JSON report writers.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use twinlink_core::errors::StudyError;
use twinlink_core::tracing::events;

use crate::record::StudyRecord;
use crate::summary::CellSummary;

/// Write one CSV row per record, with a header. Parent directories are created.
pub fn write_records_csv(path: &Path, records: &[StudyRecord]) -> Result<(), StudyError> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| report_error(path, e))?;
    for record in records {
        writer.serialize(record).map_err(|e| report_error(path, e))?;
    }
    writer.flush().map_err(|e| report_error(path, e))?;
    events::report_written(&path.display().to_string(), records.len());
    Ok(())
}

/// Write the cell summaries as a pretty-printed JSON array.
pub fn write_summary_json(path: &Path, summaries: &[CellSummary]) -> Result<(), StudyError> {
    ensure_parent(path)?;
    let file = File::create(path).map_err(|e| report_error(path, e))?;
    serde_json::to_writer_pretty(BufWriter::new(file), summaries)
        .map_err(|e| report_error(path, e))?;
    events::report_written(&path.display().to_string(), summaries.len());
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), StudyError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| report_error(dir, e))
        }
        _ => Ok(()),
    }
}

fn report_error(path: &Path, e: impl std::fmt::Display) -> StudyError {
    StudyError::Report {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}
