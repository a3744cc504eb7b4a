//! Core traits for pine-ta numeric operations.
//!
//! The primary item is [`SeriesElement`], the bound used by every indicator
//! to abstract over `f32` and `f64`. It extends `num_traits::Float` with the
//! handful of conversions and constants that show up in indicator math.
//!
//! # Example
//!
//! ```
//! use pine_ta::traits::SeriesElement;
//!
//! fn mean<T: SeriesElement>(data: &[T]) -> pine_ta::error::Result<T> {
//!     let n = T::from_usize(data.len())?;
//!     let sum = data.iter().fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / n)
//! }
//!
//! let m = mean(&[1.0_f64, 2.0, 3.0]).unwrap();
//! assert!((m - 2.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a data series.
///
/// Requires `Float` (NaN handling, infinity, arithmetic), `NumCast` (safe
/// conversion from integer parameters) and `Copy`. A blanket impl covers
/// `f32` and `f64`.
pub trait SeriesElement: Float + NumCast + Copy + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// Commonly used for converting period parameters to the element type.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented
    /// in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented
    /// in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 as this type.
    #[inline]
    #[must_use]
    fn two() -> Self {
        // Safe unwrap: 2 is always representable in Float types
        <Self as NumCast>::from(2).unwrap()
    }

    /// Returns the constant 100 as this type.
    ///
    /// Used for percentage scaling in RSI, stochastics and percent rank.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        // Safe unwrap: 100 is always representable in Float types
        <Self as NumCast>::from(100).unwrap()
    }

    /// Returns π as this type.
    #[inline]
    #[must_use]
    fn pi() -> Self {
        // Safe unwrap: π is always representable in Float types
        <Self as NumCast>::from(std::f64::consts::PI).unwrap()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Send + Sync + 'static> SeriesElement for T {}

/// Validates that a period is at least 1.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
pub const fn validate_period(period: usize) -> Result<()> {
    if period == 0 {
        Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates that two index-aligned series have the same length.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the lengths differ.
#[inline]
pub fn validate_same_length<T: SeriesElement>(left: &[T], right: &[T]) -> Result<()> {
    if left.len() != right.len() {
        Err(Error::LengthMismatch {
            left: left.len(),
            right: right.len(),
        })
    } else {
        Ok(())
    }
}
