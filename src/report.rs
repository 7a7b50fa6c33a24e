//! Fetch the BTCUSDT price and render it for the terminal
use std::io::{self, Write};

use crate::client::Binance;
use crate::error::Result;
use crate::processor::PriceQuote;
use crate::request::Request;
use crate::rest;

/// Symbol the binary reports on
pub const SYMBOL: &str = "BTCUSDT";

/// Label in front of the printed price
pub const LABEL: &str = "Bitcoin Price";

/// Write a pipeline outcome.
///
/// A quote becomes `Bitcoin Price: <price>` on `out`; an error becomes its
/// one-line diagnostic on `err`. Returns whether a price was printed.
pub fn render<O: Write, E: Write>(outcome: &Result<PriceQuote>, out: &mut O, err: &mut E) -> io::Result<bool> {
    match outcome {
        Ok(quote) => {
            writeln!(out, "{LABEL}: {}", quote.price)?;
            Ok(true)
        }
        Err(e) => {
            writeln!(err, "{e}")?;
            Ok(false)
        }
    }
}

/// Run the whole pipeline once: request, parse, extract, print.
pub async fn run<C: Request, O: Write, E: Write>(
    client: &Binance<C>,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    let outcome = rest::ticker::price(client, SYMBOL).get().await;
    if let Err(e) = &outcome {
        tracing::debug!(stage = ?e.stage(), error = ?e, "pipeline stopped");
    }
    render(&outcome, out, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_render_price() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let quote = PriceQuote {
            symbol: Some(SYMBOL.to_string()),
            price: "65000.12".to_string(),
        };
        assert!(render(&Ok(quote), &mut out, &mut err).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "Bitcoin Price: 65000.12\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_render_error() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let outcome = Err(Error::MissingField("price".to_string()));
        assert!(!render(&outcome, &mut out, &mut err).unwrap());
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error extracting price: response has no `price` field\n"
        );
    }
}
