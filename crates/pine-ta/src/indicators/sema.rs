//! Smoothed EMA cascade (SEMA) and its DEMA / TEMA wrappers.
//!
//! The cascade applies the EMA `smooth` times in a row (each pass smooths
//! the previous pass's output), then combines the passes with a weighted
//! difference to strip out most of the lag the repeated smoothing added:
//!
//! ```text
//! e1 = EMA(P), e2 = EMA(e1), ..., eS = EMA(e(S-1))
//! SEMA = eS - S × Σ (e(k) - e(k-1))     for k = 2..=S
//! ```
//!
//! The inner sum telescopes to `eS - e1`, so the combination is equivalently
//! `S·e1 + (1-S)·eS`. For `smooth = 2` this is the classic Double EMA
//! `2·e1 - e2`. For `smooth = 3` it gives `3·e1 - 2·e3`, which is a
//! different (more aggressive) lag correction than the three-term
//! `3·e1 - 3·e2 + e3` found in some charting packages; the reference trace
//! in the integration tests pins the behavior implemented here.
//!
//! Every pass runs the index-0-seeded recurrence, so a full-length input
//! produces full-length passes and a full-length cascade.

use crate::error::{Error, Result};
use crate::indicators::ema::ema_alpha;
use crate::kernels::ewm::ewm_from_first;
use crate::traits::SeriesElement;

/// Computes the smoothed EMA cascade of depth `smooth`.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The span for every EMA pass
/// * `smooth` - The number of cascaded passes (at least 2)
///
/// # Returns
///
/// The cascade values, or an empty vector when `data.len() < period`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero or `smooth < 2`.
///
/// # Example
///
/// ```
/// use pine_ta::indicators::sema::{dema, sema};
///
/// let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
/// let cascade = sema(&data, 3, 2).unwrap();
/// let double = dema(&data, 3).unwrap();
/// assert_eq!(cascade.len(), double.len());
/// ```
#[must_use = "this returns a Result with the cascade values, which should be used"]
pub fn sema<T: SeriesElement>(data: &[T], period: usize, smooth: usize) -> Result<Vec<T>> {
    let alpha = ema_alpha::<T>(period)?;

    if smooth < 2 {
        return Err(Error::InvalidPeriod {
            period: smooth,
            reason: "cascade depth must be at least 2",
        });
    }

    if data.len() < period {
        return Ok(Vec::new());
    }

    let mut passes: Vec<Vec<T>> = Vec::with_capacity(smooth);
    passes.push(ewm_from_first(data, alpha));
    for k in 1..smooth {
        let next = ewm_from_first(&passes[k - 1], alpha);
        passes.push(next);
    }

    let smooth_t = T::from_usize(smooth)?;
    let n = data.len();
    let last = &passes[smooth - 1];

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let mut diff_sum = T::zero();
        for k in 1..smooth {
            diff_sum = diff_sum + (passes[k][i] - passes[k - 1][i]);
        }
        out.push(last[i] - smooth_t * diff_sum);
    }

    Ok(out)
}

/// Double EMA: the depth-2 cascade, `2·EMA(P) - EMA(EMA(P))`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
#[must_use = "this returns a Result with the DEMA values, which should be used"]
pub fn dema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    sema(data, period, 2)
}

/// Triple-smoothed cascade: depth 3, `3·EMA(P) - 2·EMA³(P)`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
#[must_use = "this returns a Result with the TEMA values, which should be used"]
pub fn tema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    sema(data, period, 3)
}
