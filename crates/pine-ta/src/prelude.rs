//! Commonly used types and functions for convenient importing.
//!
//! # Usage
//!
//! ```
//! use pine_ta::prelude::*;
//!
//! let prices = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//!
//! let trend = hma(&prices, 4).unwrap();
//! let momentum = rsi(&prices, 5).unwrap();
//! let signals = crossover(&trend, &prices).unwrap();
//! # let _ = (momentum, signals);
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::SeriesElement;

// Indicator functions
pub use crate::indicators::{
    atr, bollinger, correlation, crossover, crossunder, dema, ema, hma, linreg, percent_rank,
    poly_lsma, rma, rma_weighted, rma_with_method, rsi, rsi_with_method, sema, sma, stoch, tema,
    true_range, wma, zscore_ema,
};

// Method selectors and multi-output types
pub use crate::indicators::{BollingerOutput, MaMethod, RmaMethod};

// Rolling-window primitives
pub use crate::kernels::rolling::{rolling_max, rolling_mean, rolling_min, rolling_stddev};
