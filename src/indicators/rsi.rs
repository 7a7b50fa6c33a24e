// Relative strength index with Wilder smoothing
use crate::indicators::{Indicator, ewm_mean};

/// Window used when none is given
pub const DEFAULT_WINDOW: usize = 14;

/// RSI over `window` closes.
///
/// Average gain and loss are exponentially weighted with `alpha = 1 / window`.
/// The first close has no prior change and counts as zero gain and zero loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rsi {
    window: usize,
}

impl Rsi {
    /// A window of 0 is treated as 1.
    pub fn new(window: usize) -> Self {
        Rsi {
            window: window.max(1),
        }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Rsi::new(DEFAULT_WINDOW)
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn name(&self) -> String {
        format!("RSI({})", self.window)
    }

    fn calculate(&self, closes: &[f64]) -> Vec<Option<f64>> {
        let change = |i: usize| if i == 0 { 0.0 } else { closes[i] - closes[i - 1] };
        let gains: Vec<Option<f64>> = (0..closes.len()).map(|i| Some(change(i).max(0.0))).collect();
        let losses: Vec<Option<f64>> = (0..closes.len()).map(|i| Some((-change(i)).max(0.0))).collect();

        let alpha = 1.0 / self.window as f64;
        let avg_gain = ewm_mean(&gains, alpha, self.window);
        let avg_loss = ewm_mean(&losses, alpha, self.window);

        avg_gain
            .into_iter()
            .zip(avg_loss)
            .map(|(gain, loss)| match (gain?, loss?) {
                (gain, loss) if loss == 0.0 => (gain > 0.0).then_some(100.0),
                (gain, loss) => Some(100.0 - 100.0 / (1.0 + gain / loss)),
            })
            .collect()
    }
}
