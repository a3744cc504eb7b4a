//! pine-ta: batch technical-analysis indicators for numeric series
//!
//! This crate implements the classic charting-platform indicator set as
//! pure functions over complete historical series: moving averages (simple,
//! exponential, Wilder, Hull, weighted, cascaded, kernel-smoothed),
//! oscillators (RSI, stochastic %K, z-score), volatility bands and
//! bar-over-bar signal detection.
//!
//! # Design
//!
//! - **Pure transforms**: every function takes slices and scalars, returns a
//!   fresh vector, and holds no state between calls. Identical inputs give
//!   bit-identical outputs.
//! - **Index alignment**: outputs are the same length as their inputs, with
//!   NaN marking warm-up positions and missing data.
//! - **Two failure policies**: inputs shorter than the window soft-fail to
//!   an empty vector; invalid arguments (zero periods, mismatched lengths,
//!   unknown method tags) return typed errors. See [`error`].
//! - **Degenerate math passes through**: division by zero saturates RSI at
//!   100 and sends z-scores to ±inf, exactly as the underlying formulas say.
//!
//! # Quick Start
//!
//! ```
//! use pine_ta::prelude::*;
//!
//! let closes = vec![
//!     44.34_f64, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42,
//!     45.84, 46.08, 45.89, 46.03, 45.61, 46.28, 46.28, 46.00,
//! ];
//!
//! let momentum = rsi(&closes, 14).unwrap();
//! assert!(momentum.iter().all(|&v| v.is_nan() || (0.0..=100.0).contains(&v)));
//!
//! // Short history is not an error, just an empty answer.
//! assert!(rsi(&closes[..5], 14).unwrap().is_empty());
//! ```
//!
//! # Picking a smoother
//!
//! | Function | Character |
//! |----------|-----------|
//! | [`indicators::sma()`] | plain rolling mean, windowed warm-up |
//! | [`indicators::ema()`] | recurrence from the first bar, no warm-up gap |
//! | [`indicators::rma()`] | Wilder's slow EMA, seeds from the first window's mean |
//! | [`indicators::dema()`] / [`indicators::tema()`] | reduced-lag EMA cascades |
//! | [`indicators::wma()`] / [`indicators::hma()`] | linear weighting, Hull's near-zero-lag stack |
//! | [`indicators::poly_lsma()`] | tapered polynomial kernel, heaviest but smoothest |

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_range_loop)]

pub mod error;
pub mod indicators;
pub mod kernels;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use traits::SeriesElement;
pub use utils::{approx_eq, approx_eq_relative, count_nan_prefix, count_nans, EPSILON, LOOSE_EPSILON};
