//! Exponential-recurrence cores.
//!
//! Every EMA-family smoother in this library is one of three recurrences over
//! a dense buffer, differing only in how the state is seeded and whether the
//! weight mass is tracked explicitly:
//!
//! - [`ewm_from_first`]: state seeded from the first element. The classic
//!   `y[i] = α·x[i] + (1-α)·y[i-1]` with `y[0] = x[0]`.
//! - [`ewm_with_seed`]: same recurrence, but the caller provides `y[0]`
//!   (e.g. the mean of the first window for Wilder smoothing).
//! - [`ewm_weighted`]: the adjusted form that divides by the accumulated
//!   weight mass, `y[i] = num[i]/den[i]` with `num[i] = x[i] + (1-α)·num[i-1]`
//!   and `den[i] = 1 + (1-α)·den[i-1]`. Leading NaN values carry no weight;
//!   an interior NaN adds no observation, so the running mean holds its
//!   previous value.
//!
//! NaN propagation differs by design: the plain recurrences poison their
//! state on the first NaN input (there is no way to recover a lost term),
//! while the weighted form skips missing observations the way a weighted
//! average of the observed values must.

use crate::traits::SeriesElement;

/// Runs the exponential recurrence seeded from the first element.
///
/// Returns a vector the same length as `data`, valid from index 0. An empty
/// input yields an empty output.
#[must_use]
pub fn ewm_from_first<T: SeriesElement>(data: &[T], alpha: T) -> Vec<T> {
    match data.first() {
        Some(&first) => ewm_with_seed(data, alpha, first),
        None => Vec::new(),
    }
}

/// Runs the exponential recurrence with a caller-provided seed at index 0.
///
/// `out[0] = seed`; for `i ≥ 1`, `out[i] = α·data[i] + (1-α)·out[i-1]`.
/// A NaN input value (or seed) poisons every subsequent position.
#[must_use]
pub fn ewm_with_seed<T: SeriesElement>(data: &[T], alpha: T, seed: T) -> Vec<T> {
    if data.is_empty() {
        return Vec::new();
    }

    let one_minus_alpha = T::one() - alpha;
    let mut out = Vec::with_capacity(data.len());

    let mut prev = seed;
    out.push(prev);
    for &value in &data[1..] {
        prev = alpha * value + one_minus_alpha * prev;
        out.push(prev);
    }

    out
}

/// Runs the adjusted (weight-normalized) exponential recurrence.
///
/// Positions before the first non-NaN observation are NaN. From then on the
/// output is the exponentially weighted mean of the observations seen so
/// far, with relative weights `(1-α)^k` by age. Positions holding a NaN
/// input repeat the previous mean (no new observation, all existing weights
/// decay equally, the ratio is unchanged).
#[must_use]
pub fn ewm_weighted<T: SeriesElement>(data: &[T], alpha: T) -> Vec<T> {
    let one_minus_alpha = T::one() - alpha;
    let mut out = Vec::with_capacity(data.len());

    let mut num = T::zero();
    let mut den = T::zero();
    let mut started = false;

    for &value in data {
        if value.is_nan() {
            if started {
                // ratio is invariant under uniform decay; keep state exact
                out.push(num / den);
            } else {
                out.push(T::nan());
            }
            continue;
        }

        num = value + one_minus_alpha * num;
        den = T::one() + one_minus_alpha * den;
        started = true;
        out.push(num / den);
    }

    out
}
