//! Low-level computational kernels shared by the indicators.
//!
//! These are the tight loops the indicator layer is built on: exponential
//! recurrence cores ([`ewm`]) and rolling-window statistics ([`rolling`]).
//! They operate on plain slices, never allocate more than their output, and
//! are total over their inputs: a window that never fills simply yields NaN,
//! validation happens in the indicator layer.

pub mod ewm;
pub mod rolling;

pub use ewm::{ewm_from_first, ewm_weighted, ewm_with_seed};
pub use rolling::{rolling_max, rolling_mean, rolling_min, rolling_stddev};
