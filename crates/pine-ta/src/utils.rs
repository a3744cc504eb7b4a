//! Utility functions for pine-ta.
//!
//! Floating-point comparison helpers for testing and validation, plus small
//! NaN bookkeeping and repair helpers for working with series that use NaN
//! as the "missing" marker.

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point
/// operations.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other, or if
/// both are NaN (for testing convenience).
///
/// # Example
///
/// ```
/// use pine_ta::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Relative approximate equality check for floating-point values.
///
/// More appropriate than absolute tolerance when comparing values of varying
/// magnitudes.
#[inline]
#[must_use]
pub fn approx_eq_relative<T: SeriesElement>(a: T, b: T, rel_tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }

    let diff = (a - b).abs();
    let max_abs = a.abs().max(b.abs());

    if max_abs == T::zero() {
        return diff == T::zero();
    }

    diff / max_abs < rel_tolerance
}

/// Count the number of NaN values in a slice.
#[inline]
#[must_use]
pub fn count_nans<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Count the number of NaN values at the beginning of a slice.
///
/// Useful for verifying the warm-up period of indicator outputs.
///
/// # Example
///
/// ```
/// use pine_ta::utils::count_nan_prefix;
///
/// let data = vec![f64::NAN, f64::NAN, 1.0, 2.0, f64::NAN];
/// assert_eq!(count_nan_prefix(&data), 2);
/// ```
#[inline]
#[must_use]
pub fn count_nan_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}

/// Replaces every NaN with `replacement`, leaving other values untouched.
///
/// # Example
///
/// ```
/// use pine_ta::utils::nan_to;
///
/// let repaired = nan_to(&[1.0, f64::NAN, 3.0], 0.0);
/// assert_eq!(repaired, vec![1.0, 0.0, 3.0]);
/// ```
#[must_use]
pub fn nan_to<T: SeriesElement>(data: &[T], replacement: T) -> Vec<T> {
    data.iter()
        .map(|&x| if x.is_nan() { replacement } else { x })
        .collect()
}

/// Replaces each NaN with the nearest previous non-NaN value.
///
/// Leading NaN values have no predecessor and stay NaN.
///
/// # Example
///
/// ```
/// use pine_ta::utils::fill_forward;
///
/// let filled = fill_forward(&[f64::NAN, 2.0, f64::NAN, f64::NAN, 5.0]);
/// assert!(filled[0].is_nan());
/// assert_eq!(&filled[1..], &[2.0, 2.0, 2.0, 5.0]);
/// ```
#[must_use]
pub fn fill_forward<T: SeriesElement>(data: &[T]) -> Vec<T> {
    let mut last = T::nan();
    data.iter()
        .map(|&x| {
            if x.is_nan() {
                last
            } else {
                last = x;
                x
            }
        })
        .collect()
}
