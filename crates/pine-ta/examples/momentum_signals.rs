//! RSI momentum plus moving-average cross signals.
//!
//! Run with: `cargo run --example momentum_signals`

use pine_ta::prelude::*;

fn main() -> Result<()> {
    // A drifting series with a mid-stream reversal.
    let mut closes: Vec<f64> = Vec::new();
    let mut price = 50.0;
    for i in 0..60 {
        let trend = if i < 30 { 0.6 } else { -0.8 };
        price += trend + ((i as f64) * 0.9).sin() * 0.7;
        closes.push(price);
    }

    // Momentum with the default Wilder smoothing and a faster EMA variant.
    let wilder = rsi(&closes, 14)?;
    let fast = rsi_with_method(&closes, 14, MaMethod::Ema)?;

    let overbought = wilder.iter().filter(|&&v| v > 70.0).count();
    let oversold = wilder.iter().filter(|&&v| v < 30.0).count();
    println!("rsi(14): {overbought} overbought bars, {oversold} oversold bars");
    println!(
        "last bar: wilder {:.1}, ema-smoothed {:.1}",
        wilder.last().unwrap(),
        fast.last().unwrap()
    );

    // Trend-following cross of a fast and a slow moving average.
    let fast_ma = ema(&closes, 5)?;
    let slow_ma = ema(&closes, 20)?;
    let entries = crossover(&fast_ma, &slow_ma)?;
    let exits = crossunder(&fast_ma, &slow_ma)?;

    for i in 0..closes.len() {
        if entries[i] {
            println!("bar {i:>2}: fast crossed above slow at {:.2}", closes[i]);
        }
        if exits[i] {
            println!("bar {i:>2}: fast crossed below slow at {:.2}", closes[i]);
        }
    }

    Ok(())
}
