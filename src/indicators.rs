//! Technical indicators over a series of close prices
//!
//! Every indicator yields one entry per input close. Entries without enough
//! history behind them are `None`, so results line up index-for-index with
//! the closes they were computed from.

pub mod macd;
pub mod rsi;
pub mod sma;

pub use macd::{Macd, MacdPoint};
pub use rsi::Rsi;
pub use sma::Sma;

/// An indicator computed from close prices
pub trait Indicator {
    /// Value produced at each position
    type Output;

    /// Short display name, e.g. `SMA(14)`
    fn name(&self) -> String;

    /// One entry per close; `None` until the warm-up period is covered
    fn calculate(&self, closes: &[f64]) -> Vec<Option<Self::Output>>;
}

/// Direction of a close relative to its moving average
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Close above the average
    Up,
    /// Close below the average
    Down,
}

/// Classify each close against the matching moving-average entry.
///
/// Closes equal to the average, or without an average yet, are `None`.
pub fn trend(closes: &[f64], average: &[Option<f64>]) -> Vec<Option<Trend>> {
    closes
        .iter()
        .zip(average)
        .map(|(close, avg)| match avg {
            Some(avg) if close > avg => Some(Trend::Up),
            Some(avg) if close < avg => Some(Trend::Down),
            _ => None,
        })
        .collect()
}

/// Exponentially weighted mean with adjusted (normalised) weights.
///
/// Weights decay by `1 - alpha` per position whether or not the position has a
/// value; an entry is emitted once `min_periods` values have been seen.
pub(crate) fn ewm_mean(values: &[Option<f64>], alpha: f64, min_periods: usize) -> Vec<Option<f64>> {
    let decay = 1.0 - alpha;
    let (mut num, mut den, mut seen) = (0.0_f64, 0.0_f64, 0_usize);
    values
        .iter()
        .map(|value| {
            num *= decay;
            den *= decay;
            if let Some(x) = value {
                num += x;
                den += 1.0;
                seen += 1;
            }
            (seen >= min_periods.max(1) && den > 0.0).then(|| num / den)
        })
        .collect()
}

/// Smoothing factor of an EMA with the given span
pub(crate) fn span_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}
