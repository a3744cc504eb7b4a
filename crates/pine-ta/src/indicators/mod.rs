//! Technical analysis indicators.
//!
//! Every indicator in this module is a pure, stateless transform: one or
//! more input slices plus scalar parameters in, a freshly allocated output
//! vector out, nothing retained between calls. Shared properties:
//!
//! - **Generic**: `f32` and `f64` via [`SeriesElement`](crate::traits::SeriesElement)
//! - **Aligned**: outputs are index-aligned with their inputs; warm-up
//!   positions are NaN, never fabricated values
//! - **Composable**: inputs shorter than the requested window return an
//!   empty vector instead of an error, so indicator chains run over
//!   variable-length history without per-call length checks (the polynomial
//!   kernel smoother is the one deliberate exception)
//! - **Honest about NaN**: missing data propagates according to each
//!   algorithm's structure. Windowed functions mark only the affected
//!   windows; recurrences stay poisoned once a term is lost
//!
//! # Categories
//!
//! Moving averages: [`sma()`], [`ema()`], [`rma()`] (Wilder), the [`sema()`] cascade
//! with its [`dema()`]/[`tema()`] wrappers, [`wma()`], [`hma()`] and the polynomial
//! kernel smoother [`poly_lsma()`].
//!
//! Oscillators and composites: [`rsi()`] (with selectable leg smoothing),
//! [`zscore_ema()`], [`stoch()`], [`percent_rank()`], [`correlation()`],
//! [`linreg()`].
//!
//! Volatility: [`true_range()`], [`atr()`], [`bollinger()`].
//!
//! Signals: [`crossover()`], [`crossunder()`].

pub mod atr;
pub mod bollinger;
pub mod cross;
pub mod ema;
pub mod hma;
pub mod linreg;
pub mod lsma;
pub mod rma;
pub mod rsi;
pub mod sema;
pub mod sma;
pub mod statistics;
pub mod stochastic;
pub mod wma;
pub mod zscore;

pub use atr::{atr, true_range};
pub use bollinger::{bollinger, BollingerOutput};
pub use cross::{crossover, crossunder};
pub use ema::{ema, ema_alpha};
pub use hma::hma;
pub use linreg::linreg;
pub use lsma::{lsma_weights, poly_lsma};
pub use rma::{rma, rma_weighted, rma_with_method, RmaMethod};
pub use rsi::{rsi, rsi_with_method, MaMethod};
pub use sema::{dema, sema, tema};
pub use sma::{sma, sma_lookback};
pub use statistics::{correlation, percent_rank};
pub use stochastic::stoch;
pub use wma::{wma, wma_lookback};
pub use zscore::zscore_ema;
