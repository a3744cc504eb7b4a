//! Rolling-window statistics.
//!
//! Mean and sample standard deviation run in O(n) via rolling sums with an
//! explicit NaN count per window, so a NaN entering a window marks the output
//! missing without poisoning the accumulators. Extrema use a monotonic index
//! deque, also O(n) amortized.
//!
//! All kernels return a vector the same length as the input; positions whose
//! window has not filled, or whose window contains a NaN, are NaN. A window
//! longer than the input therefore yields an all-NaN output rather than an
//! error.

use std::collections::VecDeque;

use num_traits::NumCast;

use crate::traits::SeriesElement;

/// Rolling arithmetic mean over a trailing window of `period` values.
#[must_use]
pub fn rolling_mean<T: SeriesElement>(data: &[T], period: usize) -> Vec<T> {
    let n = data.len();
    let mut out = vec![T::nan(); n];
    if period == 0 {
        return out;
    }

    // Safe unwrap: usize is always representable in Float types
    let period_t: T = <T as NumCast>::from(period).unwrap();

    let mut sum = T::zero();
    let mut nan_count = 0usize;

    for i in 0..n {
        let value = data[i];
        if value.is_nan() {
            nan_count += 1;
        } else {
            sum = sum + value;
        }

        if i >= period {
            let old = data[i - period];
            if old.is_nan() {
                nan_count -= 1;
            } else {
                sum = sum - old;
            }
        }

        if i + 1 >= period && nan_count == 0 {
            out[i] = sum / period_t;
        }
    }

    out
}

/// Rolling sample standard deviation (`n-1` divisor) over a trailing window.
///
/// A single-observation window has no sample deviation, so `period == 1`
/// yields all NaN. Uses the rolling sum-of-squares form; tiny negative
/// variances from cancellation are clamped to zero before the square root.
#[must_use]
pub fn rolling_stddev<T: SeriesElement>(data: &[T], period: usize) -> Vec<T> {
    let n = data.len();
    let mut out = vec![T::nan(); n];
    if period < 2 {
        return out;
    }

    // Safe unwrap: usize is always representable in Float types
    let period_t: T = <T as NumCast>::from(period).unwrap();
    let ddof_t = period_t - T::one();

    let mut sum = T::zero();
    let mut sum_sq = T::zero();
    let mut nan_count = 0usize;

    for i in 0..n {
        let value = data[i];
        if value.is_nan() {
            nan_count += 1;
        } else {
            sum = sum + value;
            sum_sq = sum_sq + value * value;
        }

        if i >= period {
            let old = data[i - period];
            if old.is_nan() {
                nan_count -= 1;
            } else {
                sum = sum - old;
                sum_sq = sum_sq - old * old;
            }
        }

        if i + 1 >= period && nan_count == 0 {
            let variance = (sum_sq - sum * sum / period_t) / ddof_t;
            out[i] = variance.max(T::zero()).sqrt();
        }
    }

    out
}

/// Rolling maximum over a trailing window of `period` values.
#[must_use]
pub fn rolling_max<T: SeriesElement>(data: &[T], period: usize) -> Vec<T> {
    rolling_extreme(data, period, |candidate, incoming| candidate <= incoming)
}

/// Rolling minimum over a trailing window of `period` values.
#[must_use]
pub fn rolling_min<T: SeriesElement>(data: &[T], period: usize) -> Vec<T> {
    rolling_extreme(data, period, |candidate, incoming| candidate >= incoming)
}

/// Monotonic-deque extremum scan. `evict(candidate, incoming)` returns true
/// when `candidate` can never again be the window extremum once `incoming`
/// has arrived.
fn rolling_extreme<T, F>(data: &[T], period: usize, evict: F) -> Vec<T>
where
    T: SeriesElement,
    F: Fn(T, T) -> bool,
{
    let n = data.len();
    let mut out = vec![T::nan(); n];
    if period == 0 {
        return out;
    }

    let mut deque: VecDeque<usize> = VecDeque::new();
    let mut nan_count = 0usize;

    for i in 0..n {
        let value = data[i];
        if value.is_nan() {
            nan_count += 1;
        } else {
            while let Some(&back) = deque.back() {
                if evict(data[back], value) {
                    deque.pop_back();
                } else {
                    break;
                }
            }
            deque.push_back(i);
        }

        if i >= period && data[i - period].is_nan() {
            nan_count -= 1;
        }

        while let Some(&front) = deque.front() {
            if front + period <= i {
                deque.pop_front();
            } else {
                break;
            }
        }

        if i + 1 >= period && nan_count == 0 {
            if let Some(&front) = deque.front() {
                out[i] = data[front];
            }
        }
    }

    out
}
