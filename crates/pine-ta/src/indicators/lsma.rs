//! Polynomial kernel smoother (tame LSMA).
//!
//! A least-squares-style smoother that avoids the ringing of a raw
//! polynomial fit by building its convolution weights from a sigma-tapered
//! sine kernel:
//!
//! ```text
//! s[k]   = sin(kπ/order) / (kπ/order)                  k = 1..=order
//! K(x)   = x² + Σ s[k] · sin(x·k·π) / k                x ∈ [0, 1]
//! w[j]   = K((j+1)/period) - K(j/period)               j = 0..period-1
//! out[i] = Σ w[j] · P[i-period+j]                      i >= period
//! ```
//!
//! The taper factors `s[k]` shrink the higher-frequency sine terms the same
//! way a sigma-approximation damps Gibbs oscillation in a truncated Fourier
//! series. Since the weights telescope through `K`, they sum to
//! `K(1) - K(0) = 1` (up to the residual of `sin(kπ)` in floating point), so
//! the smoother preserves level. Larger orders add more basis terms and give
//! a smoother, more lagged curve.
//!
//! Note the window ends at the PREVIOUS bar: output `i` convolves
//! `P[i-period .. i-1]`, and the first defined position is `i = period`.
//!
//! Unlike the recursive smoothers, a window longer than the input is a hard
//! error here rather than an empty result; with no full window the operation
//! is meaningless.
//!
//! # Performance
//!
//! O(n × period) after an O(period × order) weight precomputation per call.
//! This is the expensive path of the library; all other smoothers are O(n)
//! or O(n × period) with small constants.

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Computes the convolution weights for a `(period, order)` pair.
///
/// Exposed for inspection and testing; [`poly_lsma`] computes these once per
/// call. The weights sum to `K(1) - K(0) ≈ 1` for every valid pair.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` / `Error::InvalidOrder` when either
/// parameter is zero, or `Error::NumericConversion` for unrepresentable
/// parameters.
pub fn lsma_weights<T: SeriesElement>(period: usize, order: usize) -> Result<Vec<T>> {
    if period < 1 {
        return Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        });
    }
    if order < 1 {
        return Err(Error::InvalidOrder {
            order,
            reason: "order must be at least 1",
        });
    }

    let pi = T::pi();
    let order_t = T::from_usize(order)?;

    // Sigma taper: s[k] = sin(kπ/order) / (kπ/order)
    let mut taper = Vec::with_capacity(order);
    for k in 1..=order {
        let x = T::from_usize(k)? * pi / order_t;
        taper.push(x.sin() / x);
    }

    let kernel = |x: T| -> T {
        let mut b = T::zero();
        for (k, &s) in taper.iter().enumerate() {
            let k_t = taper_index_t::<T>(k);
            b = b + s * (x * k_t * pi).sin() / k_t;
        }
        x * x + b
    };

    let period_t = T::from_usize(period)?;
    let mut weights = Vec::with_capacity(period);
    for j in 0..period {
        let lo = T::from_usize(j)? / period_t;
        let hi = T::from_usize(j + 1)? / period_t;
        weights.push(kernel(hi) - kernel(lo));
    }

    Ok(weights)
}

// k is a small loop index; the cast cannot fail for Float targets.
#[inline]
fn taper_index_t<T: SeriesElement>(k: usize) -> T {
    T::from_usize(k + 1).unwrap()
}

/// Computes the tame polynomial LSMA of a data series.
///
/// Returns a vector of the same length as the input; the first `period`
/// positions are NaN (the convolution window ends at the previous bar). A
/// NaN inside a window surfaces at that output position only.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The convolution window length
/// * `order` - The number of tapered sine basis terms
///
/// # Errors
///
/// - `Error::InsufficientData` when `period > data.len()`
/// - `Error::InvalidPeriod` / `Error::InvalidOrder` when either parameter
///   is zero
///
/// # Example
///
/// ```
/// use pine_ta::indicators::lsma::poly_lsma;
///
/// let data: Vec<f64> = (0..32).map(|i| ((i as f64) * 0.2).sin()).collect();
/// let result = poly_lsma(&data, 8, 2).unwrap();
///
/// assert_eq!(result.len(), data.len());
/// assert!(result[7].is_nan());
/// assert!(!result[8].is_nan());
/// ```
#[must_use = "this returns a Result with the smoothed values, which should be used"]
pub fn poly_lsma<T: SeriesElement>(data: &[T], period: usize, order: usize) -> Result<Vec<T>> {
    let weights = lsma_weights::<T>(period, order)?;

    if period > data.len() {
        return Err(Error::InsufficientData {
            required: period,
            actual: data.len(),
            indicator: "poly_lsma",
        });
    }

    let mut out = vec![T::nan(); data.len()];
    for i in period..data.len() {
        let window = &data[i - period..i];
        let mut acc = T::zero();
        for (w, &value) in weights.iter().zip(window) {
            acc = acc + *w * value;
        }
        out[i] = acc;
    }

    Ok(out)
}
