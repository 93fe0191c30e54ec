//! Tracing setup is idempotent and events can be emitted before or after it.

use twinlink_core::tracing::{events, init_tracing, init_tracing_with_filter};

#[test]
fn test_init_is_idempotent() {
    events::model_built(0.05, 10, 15);
    init_tracing();
    init_tracing();
    init_tracing_with_filter("debug");
    events::cell_skipped(1.5, 0.8, "INVALID_PARAMETER", "error_rate out of range");
    events::study_completed(12, 0, 3);
}
