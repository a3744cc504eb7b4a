//! Rolling linear regression curve.
//!
//! Fits an ordinary least-squares line to each trailing window (x = bar
//! offset 0..period-1) and evaluates it at `period - 1 - offset`. With
//! `offset = 0` that is the line's value at the window's newest bar, the
//! usual "linear regression curve" overlay. Positive offsets step back
//! toward older bars, negative offsets project past the newest one.
//!
//! This is the plain least-squares fit; it tracks tightly but rings on
//! choppy data, which is what the tapered kernel in
//! [`crate::indicators::lsma`] exists to avoid.

use crate::error::Result;
use crate::traits::{validate_period, SeriesElement};

/// Computes the rolling linear regression value for each trailing window.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The regression window
/// * `offset` - Bars back from the newest window position to evaluate at
///
/// # Returns
///
/// The regression values (NaN for the first `period - 1` positions), or an
/// empty vector when `data.len() < period`. A one-bar window has no defined
/// slope and yields NaN at every position.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[must_use = "this returns a Result with the regression values, which should be used"]
pub fn linreg<T: SeriesElement>(data: &[T], period: usize, offset: isize) -> Result<Vec<T>> {
    validate_period(period)?;

    if data.len() < period {
        return Ok(Vec::new());
    }

    let period_t = T::from_usize(period)?;
    let two = T::two();
    let x_mean = (period_t - T::one()) / two;

    // Σ (x - x̄)² for x = 0..period-1: period (period² - 1) / 12
    let denom = period_t * (period_t * period_t - T::one()) / T::from_f64(12.0)?;

    let eval_x = T::from_f64((period as f64) - 1.0 - (offset as f64))?;

    let mut out = vec![T::nan(); data.len()];
    for i in (period - 1)..data.len() {
        let window = &data[i + 1 - period..=i];

        let mut y_sum = T::zero();
        for &y in window {
            y_sum = y_sum + y;
        }
        let y_mean = y_sum / period_t;

        let mut cov = T::zero();
        for (j, &y) in window.iter().enumerate() {
            let x = T::from_usize(j)?;
            cov = cov + (y - y_mean) * (x - x_mean);
        }

        let slope = cov / denom;
        let intercept = y_mean - slope * x_mean;
        out[i] = intercept + slope * eval_x;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, count_nan_prefix, EPSILON};

    #[test]
    fn test_linreg_exact_on_linear_data() {
        let data: Vec<f64> = (0..12).map(|i| 3.0 + 2.0 * i as f64).collect();
        let result = linreg(&data, 5, 0).unwrap();

        assert_eq!(count_nan_prefix(&result), 4);
        for i in 4..12 {
            assert!(approx_eq(result[i], data[i], 1e-9), "mismatch at {i}");
        }
    }

    #[test]
    fn test_linreg_offset_steps_back_along_the_line() {
        let data: Vec<f64> = (0..12).map(|i| 10.0 - 1.5 * i as f64).collect();
        let result = linreg(&data, 4, 2).unwrap();
        for i in 3..12 {
            assert!(approx_eq(result[i], data[i - 2], 1e-9));
        }
    }

    #[test]
    fn test_linreg_negative_offset_extrapolates() {
        let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let result = linreg(&data, 4, -1).unwrap();
        for i in 3..10 {
            assert!(approx_eq(result[i], data[i] + 1.0, 1e-9));
        }
    }

    #[test]
    fn test_linreg_constant_input() {
        let data = vec![7.0_f64; 8];
        let result = linreg(&data, 3, 0).unwrap();
        for &value in result.iter().skip(2) {
            assert!(approx_eq(value, 7.0, EPSILON));
        }
    }

    #[test]
    fn test_linreg_period_one_is_degenerate() {
        let data = vec![1.0_f64, 2.0, 3.0];
        let result = linreg(&data, 1, 0).unwrap();
        assert!(result.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_linreg_short_input_returns_empty() {
        let data = vec![1.0_f64, 2.0];
        assert!(linreg(&data, 3, 0).unwrap().is_empty());
    }

    #[test]
    fn test_linreg_zero_period() {
        let data = vec![1.0_f64];
        assert!(matches!(
            linreg(&data, 0, 0),
            Err(Error::InvalidPeriod { period: 0, .. })
        ));
    }
}
