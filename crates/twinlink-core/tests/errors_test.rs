//! Error display strings and error codes.

use twinlink_core::errors::{
    error_code, DataError, EstimationError, ModelError, StudyError, TwinlinkErrorCode,
};

#[test]
fn test_model_error_codes() {
    let err = ModelError::out_of_range("error_rate", 1.5);
    assert_eq!(err.error_code(), error_code::INVALID_PARAMETER);
    assert!(err.to_string().contains("error_rate"));
    assert!(err.coded_string().starts_with("[INVALID_PARAMETER]"));

    let err = ModelError::mismatch("missing CPD for Y_obs");
    assert_eq!(err.error_code(), error_code::STRUCTURAL_MISMATCH);
    assert_eq!(
        err.to_string(),
        "structural mismatch: missing CPD for Y_obs"
    );
}

#[test]
fn test_estimation_error_wraps_data_error() {
    let err: EstimationError = DataError::MissingColumn {
        name: "A_obs".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::DATA_ERROR);
    assert!(err.to_string().contains("A_obs"));

    let err = EstimationError::DegenerateEstimate { y0: 0.0, y1: 0.5 };
    assert_eq!(err.error_code(), error_code::DEGENERATE_ESTIMATE);
}

#[test]
fn test_study_error_delegates_codes() {
    let err: StudyError = ModelError::mismatch("x").into();
    assert_eq!(err.error_code(), error_code::STRUCTURAL_MISMATCH);

    let err = StudyError::Report {
        path: "out.csv".to_string(),
        message: "disk full".to_string(),
    };
    assert_eq!(err.error_code(), error_code::REPORT_ERROR);
}
