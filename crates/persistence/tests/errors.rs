//! Integration tests for PersistenceError variants.

use topf_persistence::{
    PersistenceConfig, PersistenceError, compute, compute_with_config, keep_n_peaks,
    transform_points,
};

#[test]
fn error_empty_input() {
    assert_eq!(compute(&[]), Err(PersistenceError::EmptyInput));
}

#[test]
fn error_empty_points() {
    let result = transform_points(&[], &PersistenceConfig::default());
    assert_eq!(result, Err(PersistenceError::EmptyInput));
}

#[test]
fn error_nan() {
    let result = compute(&[1.0, f64::NAN, 2.0]);
    assert!(
        matches!(
            result,
            Err(PersistenceError::NonFiniteValue { index: 1, value }) if value.is_nan()
        ),
        "expected NonFiniteValue, got {result:?}"
    );
}

#[test]
fn error_infinity() {
    let result = compute(&[f64::INFINITY, 0.0]);
    assert_eq!(
        result,
        Err(PersistenceError::NonFiniteValue {
            index: 0,
            value: f64::INFINITY
        })
    );

    let result = compute(&[0.0, 1.0, f64::NEG_INFINITY]);
    assert!(matches!(
        result,
        Err(PersistenceError::NonFiniteValue { index: 2, .. })
    ));
}

#[test]
fn error_reports_first_non_finite() {
    let result = compute(&[0.0, f64::INFINITY, f64::NAN]);
    assert!(matches!(
        result,
        Err(PersistenceError::NonFiniteValue { index: 1, .. })
    ));
}

#[test]
fn error_non_finite_x_is_ignored() {
    // Only y values take part in the computation.
    let points = [[f64::NAN, 0.0], [1.0, 1.0]];
    let out = transform_points(&points, &PersistenceConfig::default()).unwrap();
    assert_eq!(out[1], [1.0, 1.0]);
    assert!(out[0][0].is_nan());
}

#[test]
fn error_zero_peaks_in_config() {
    let config = PersistenceConfig::new().with_n_peaks(0);
    let result = compute_with_config(&[0.0, 1.0, 0.0], &config);
    assert_eq!(result, Err(PersistenceError::InvalidPeakCount { n: 0 }));
}

#[test]
fn error_config_checked_before_values() {
    let config = PersistenceConfig::new().with_n_peaks(0);
    let result = compute_with_config(&[], &config);
    assert!(
        matches!(result, Err(PersistenceError::InvalidPeakCount { n: 0 })),
        "expected InvalidPeakCount to be returned first, got {result:?}"
    );
}

#[test]
fn error_zero_peaks_filter() {
    assert_eq!(
        keep_n_peaks(&[1.0, 0.0], 0),
        Err(PersistenceError::InvalidPeakCount { n: 0 })
    );
}

#[test]
fn error_range_overflow() {
    let result = compute(&[f64::MAX, -f64::MAX]);
    assert!(
        matches!(result, Err(PersistenceError::RangeOverflow { .. })),
        "expected RangeOverflow, got {result:?}"
    );
}

#[test]
fn huge_range_within_f64_is_accepted() {
    let result = compute(&[f64::MAX / 2.0, -f64::MAX / 2.0]).unwrap();
    assert_eq!(result, vec![f64::MAX, 0.0]);
}
