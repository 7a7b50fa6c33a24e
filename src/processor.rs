//! Response processors
//!
//! A processor turns the outcome of an HTTP request into the value a request
//! builder hands back from `.get()`. Every processor rejects non-2xx
//! responses before looking at the body.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::response::Response;

pub mod field;
pub mod quote;

pub use quote::{PriceQuote, Quote};

/// Converts a raw HTTP response into a typed result
pub trait Processor {
    /// The output type of the processor
    type Output;

    /// Process the response of a request
    fn process<R: Response>(&self, response: Result<R>) -> Result<Self::Output>;
}

/// Returns the response body as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct Raw;

impl Processor for Raw {
    type Output = String;

    fn process<R: Response>(&self, response: Result<R>) -> Result<String> {
        let resp = ensure_success(response?)?;
        Ok(resp.body().to_owned())
    }
}

/// Decodes the response body into a JSON tree
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Processor for Json {
    type Output = serde_json::Value;

    fn process<R: Response>(&self, response: Result<R>) -> Result<serde_json::Value> {
        let resp = ensure_success(response?)?;
        Ok(serde_json::from_str(resp.body())?)
    }
}

/// Error body Binance sends alongside 4xx/5xx statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: i64,
    msg: String,
}

/// Longest error message kept from a non-2xx body, in characters
pub const MAX_ERROR_MESSAGE: usize = 200;

/// Collapse all whitespace runs (newlines included) into single spaces and
/// cap the result at [`MAX_ERROR_MESSAGE`] characters.
pub fn one_line(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= MAX_ERROR_MESSAGE {
        return collapsed;
    }
    let mut capped: String = collapsed.chars().take(MAX_ERROR_MESSAGE).collect();
    capped.push('…');
    capped
}

/// Pass 2xx responses through, turn anything else into [`Error::Api`].
pub(crate) fn ensure_success<R: Response>(resp: R) -> Result<R> {
    tracing::debug!(status = resp.status(), request_id = ?resp.request_id(), "response received");
    if resp.is_success() {
        return Ok(resp);
    }

    let (code, message) = match serde_json::from_str::<ApiErrorBody>(resp.body()) {
        Ok(body) => (Some(body.code), one_line(&body.msg)),
        Err(_) => (None, one_line(resp.body())),
    };
    Err(Error::Api {
        status: resp.status(),
        code,
        message,
        request_id: resp.request_id().to_owned(),
    })
}
