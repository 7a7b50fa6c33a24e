//! Indicator suite over a daily close series

use binance_price::indicators::{Indicator, Macd, Rsi, Sma, Trend, trend};

fn closes() -> Vec<f64> {
    // Rise for 30 days, then fall for 20
    (0..50)
        .map(|day| if day < 30 { 100.0 + day as f64 } else { 129.0 - 2.0 * (day - 29) as f64 })
        .collect()
}

#[test]
fn test_series_align_with_closes() {
    let closes = closes();
    assert_eq!(Sma::default().calculate(&closes).len(), closes.len());
    assert_eq!(Rsi::default().calculate(&closes).len(), closes.len());
    assert_eq!(Macd::default().calculate(&closes).len(), closes.len());
}

#[test]
fn test_trend_follows_direction() {
    let closes = closes();
    let sma = Sma::default().calculate(&closes);
    let trends = trend(&closes, &sma);

    assert_eq!(trends[13..30].iter().flatten().count(), 17);
    assert!(trends[13..30].iter().all(|t| *t == Some(Trend::Up)));
    assert_eq!(trends[49], Some(Trend::Down));
}

#[test]
fn test_rsi_reacts_to_reversal() {
    let closes = closes();
    let rsi = Rsi::default().calculate(&closes);

    assert_eq!(rsi[29], Some(100.0));
    let late = rsi[49].expect("RSI defined after warm-up");
    assert!(late < 50.0, "RSI should drop in a downtrend, got {late}");
}

#[test]
fn test_macd_crosses_below_signal() {
    let closes = closes();
    let macd = Macd::default().calculate(&closes);

    let last = macd[49].expect("MACD defined after warm-up");
    assert!(last.histogram().expect("signal defined after warm-up") < 0.0, "{last:?}");
}
