//! Compares the moving-average family on one small series.
//!
//! Run with: `cargo run --example basic_moving_averages`

use pine_ta::prelude::*;

fn main() -> Result<()> {
    let closes = vec![
        44.34_f64, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03,
        45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
    ];
    let period = 5;

    let simple = sma(&closes, period)?;
    let exponential = ema(&closes, period)?;
    let wilder = rma(&closes, period)?;
    let hull = hma(&closes, period)?;
    let kernel = poly_lsma(&closes, period, 2)?;

    println!("{:>3} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}", "bar", "close", "sma", "ema", "rma", "hma", "lsma");
    for i in 0..closes.len() {
        println!(
            "{:>3} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
            i, closes[i], simple[i], exponential[i], wilder[i], hull[i], kernel[i]
        );
    }

    // Short history soft-fails to an empty answer rather than erroring.
    let short = &closes[..3];
    assert!(sma(short, period)?.is_empty());
    println!("\nsma over {} bars with period {period}: empty result", short.len());

    Ok(())
}
