// Moving average convergence/divergence
use crate::indicators::{Indicator, ewm_mean, span_alpha};

/// MACD line and its signal line at one position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdPoint {
    /// Fast EMA minus slow EMA
    pub macd: f64,
    /// EMA of the MACD line; `None` until its own warm-up is covered
    pub signal: Option<f64>,
}

impl MacdPoint {
    /// MACD minus signal, once the signal exists
    pub fn histogram(&self) -> Option<f64> {
        self.signal.map(|signal| self.macd - signal)
    }
}

/// MACD with fast, slow and signal EMA spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal: usize,
}

impl Macd {
    /// Spans of 0 are treated as 1.
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Macd {
            fast: fast.max(1),
            slow: slow.max(1),
            signal: signal.max(1),
        }
    }
}

impl Default for Macd {
    fn default() -> Self {
        Macd::new(12, 26, 9)
    }
}

impl Indicator for Macd {
    type Output = MacdPoint;

    fn name(&self) -> String {
        format!("MACD({},{},{})", self.fast, self.slow, self.signal)
    }

    fn calculate(&self, closes: &[f64]) -> Vec<Option<MacdPoint>> {
        let values: Vec<Option<f64>> = closes.iter().copied().map(Some).collect();
        let fast = ewm_mean(&values, span_alpha(self.fast), self.fast);
        let slow = ewm_mean(&values, span_alpha(self.slow), self.slow);

        let line: Vec<Option<f64>> = fast
            .iter()
            .zip(&slow)
            .map(|(fast, slow)| Some((*fast)? - (*slow)?))
            .collect();
        let signal = ewm_mean(&line, span_alpha(self.signal), self.signal);

        line.iter()
            .zip(signal)
            .map(|(macd, signal)| macd.map(|macd| MacdPoint { macd, signal }))
            .collect()
    }
}
