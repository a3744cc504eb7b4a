//! Shared test utilities for pine-ta integration tests.

/// Approximate equality check for floating-point values.
///
/// Two NaN values are considered equal for testing purposes.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Tolerance for hand-computed reference vectors.
#[allow(dead_code)]
pub const REFERENCE_EPSILON: f64 = 1e-9;

/// Count the number of NaN values at the start of a slice.
#[allow(dead_code)]
pub fn nan_prefix(data: &[f64]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}

/// Deterministic synthetic close series for tests that want "market-like"
/// data without pulling in an RNG.
#[allow(dead_code)]
pub fn synthetic_closes(len: usize) -> Vec<f64> {
    let mut price = 100.0;
    (0..len)
        .map(|i| {
            let drift = ((i as f64) * 0.11).sin() * 1.8 + ((i as f64) * 0.043).cos() * 1.2;
            price += drift;
            price
        })
        .collect()
}
