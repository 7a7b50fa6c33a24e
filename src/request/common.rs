//! Common types used across endpoints
use std::str::FromStr;

use serde::Serialize;

/// Trading pair symbol as Binance expects it, e.g. `BTCUSDT`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// The symbol text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Symbol {
    type Err = crate::error::Error;

    /// Uppercases the input; rejects empty or non-alphanumeric symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(crate::error::Error::InvalidSymbol(s.to_string()));
        }
        Ok(Symbol(trimmed.to_ascii_uppercase()))
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_symbol_uppercases() {
        let symbol: Symbol = "btcusdt".parse().unwrap();
        assert_eq!(symbol.as_str(), "BTCUSDT");
        assert_eq!(symbol.to_string(), "BTCUSDT");
    }

    #[test]
    fn test_symbol_rejects_garbage() {
        for bad in ["", "   ", "BTC/USDT", "BTC&x=1", "BTC USDT"] {
            let result = bad.parse::<Symbol>();
            assert!(
                matches!(result, Err(Error::InvalidSymbol(_))),
                "{bad:?} should be rejected, got {result:?}"
            );
        }
    }
}
