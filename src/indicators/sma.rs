//! Paired SMA (Simple Moving Average) tracker
//!
//! Computes the short/long trailing close averages for every index where
//! both windows are fully populated. The trailing window ending at index
//! `i` includes `close[i]`, so for `short < long` the first defined index
//! is `long - 1` and the number of defined windows is `len - long + 1`.

use crate::models::{PriceBar, SignalWindow};

/// Compute the rolling short/long average pair over a normalized series.
///
/// Uses running sums, one add and at most two subtracts per bar. Indices
/// with a partially filled window are skipped rather than averaged over
/// fewer samples, so a series shorter than the long window yields an empty
/// result (an expected condition, not an error).
pub fn rolling_windows(
    bars: &[PriceBar],
    short_window: usize,
    long_window: usize,
) -> Vec<SignalWindow> {
    if short_window == 0 || long_window == 0 {
        return Vec::new();
    }

    // Convention is short < long, but it is not enforced; warm up until
    // the larger of the two windows is full.
    let warmup = short_window.max(long_window);
    if bars.len() < warmup {
        return Vec::new();
    }

    let mut windows = Vec::with_capacity(bars.len() - warmup + 1);
    let mut short_sum = 0.0;
    let mut long_sum = 0.0;

    for (i, bar) in bars.iter().enumerate() {
        short_sum += bar.close;
        long_sum += bar.close;
        if i >= short_window {
            short_sum -= bars[i - short_window].close;
        }
        if i >= long_window {
            long_sum -= bars[i - long_window].close;
        }

        if i + 1 >= warmup {
            windows.push(SignalWindow {
                index: i,
                short_avg: short_sum / short_window as f64,
                long_avg: long_sum / long_window as f64,
            });
        }
    }

    windows
}
