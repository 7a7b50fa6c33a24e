// Simple moving average
use crate::indicators::Indicator;

/// Window used when none is given
pub const DEFAULT_WINDOW: usize = 14;

/// Rolling arithmetic mean of the last `window` closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sma {
    window: usize,
}

impl Sma {
    /// A window of 0 is treated as 1.
    pub fn new(window: usize) -> Self {
        Sma {
            window: window.max(1),
        }
    }
}

impl Default for Sma {
    fn default() -> Self {
        Sma::new(DEFAULT_WINDOW)
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn name(&self) -> String {
        format!("SMA({})", self.window)
    }

    fn calculate(&self, closes: &[f64]) -> Vec<Option<f64>> {
        let window = self.window;
        (0..closes.len())
            .map(|i| {
                (i + 1 >= window).then(|| closes[i + 1 - window..=i].iter().sum::<f64>() / window as f64)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::tests::assert_close;

    #[test]
    fn test_sma_rolling() {
        let out = Sma::new(3).calculate(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(out[..2].iter().all(Option::is_none));
        assert_close(out[2], 2.0);
        assert_close(out[3], 3.0);
        assert_close(out[4], 4.0);
    }

    #[test]
    fn test_sma_short_series() {
        let out = Sma::default().calculate(&[1.0; 13]);
        assert!(out.iter().all(Option::is_none));
        assert_eq!(Sma::default().name(), "SMA(14)");
    }
}
