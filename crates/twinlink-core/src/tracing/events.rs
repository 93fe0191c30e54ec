//! Structured log events for key study operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed twin-error model build.
pub fn model_built(error_rate: f64, nodes: usize, edges: usize) {
    ::tracing::debug!(
        event = "model_built",
        error_rate = error_rate,
        nodes = nodes,
        edges = edges,
        "twin-error model built"
    );
}

/// Log a grid cell that was skipped because its model could not be built.
pub fn cell_skipped(error_rate: f64, recall_rate: f64, code: &str, reason: &str) {
    ::tracing::warn!(
        event = "cell_skipped",
        error_rate = error_rate,
        recall_rate = recall_rate,
        code = %code,
        reason = %reason,
        "grid cell skipped"
    );
}

/// Log a replicate whose estimation failed.
pub fn replicate_failed(
    error_rate: f64,
    recall_rate: f64,
    replicate: usize,
    code: &str,
    reason: &str,
) {
    ::tracing::warn!(
        event = "replicate_failed",
        error_rate = error_rate,
        recall_rate = recall_rate,
        replicate = replicate,
        code = %code,
        reason = %reason,
        "replicate failed"
    );
}

/// Log a replicate whose odds ratio is undefined or infinite.
pub fn replicate_degenerate(error_rate: f64, recall_rate: f64, replicate: usize, y0: f64, y1: f64) {
    ::tracing::warn!(
        event = "replicate_degenerate",
        error_rate = error_rate,
        recall_rate = recall_rate,
        replicate = replicate,
        y0 = y0,
        y1 = y1,
        "degenerate odds ratio"
    );
}

/// Log the end of a study run.
pub fn study_completed(records: usize, failures: usize, elapsed_ms: u128) {
    ::tracing::info!(
        event = "study_completed",
        records = records,
        failures = failures,
        elapsed_ms = elapsed_ms as u64,
        "study completed"
    );
}

/// Log a written report file.
pub fn report_written(path: &str, rows: usize) {
    ::tracing::info!(
        event = "report_written",
        path = %path,
        rows = rows,
        "report written"
    );
}
