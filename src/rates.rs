//! Live exchange-rate lookup against open.er-api.com.

use std::collections::HashMap;
use std::time::Duration;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Rate API endpoint; the base currency code is appended as a path segment.
const API_BASE_URL: &str = "https://open.er-api.com/v6/latest";

/// How long to wait for the rate API before giving up. One request, no
/// retries.
const FETCH_TIMEOUT: Duration = Duration::from_secs(8);

/// Failure to resolve an exchange rate.
#[derive(Debug, Error)]
pub enum RateError {
    /// The API has no rate for the requested target currency.
    #[error("Currency '{0}' not supported")]
    UnsupportedCurrency(String),

    /// The API answered, but not with a success result.
    #[error("API error: {0}")]
    Api(String),

    /// The request never produced a usable response.
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// A resolved exchange rate between two currencies.
#[derive(Debug, Clone)]
pub struct RateQuote {
    /// Uppercased source currency code.
    pub base: String,
    /// Uppercased target currency code.
    pub target: String,
    /// Units of target per one unit of base.
    pub rate: f64,
    /// API-reported timestamp of the rate table.
    pub updated: String,
}

/// Wire shape of the latest-rates response.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    #[serde(default)]
    result: String,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    #[serde(default)]
    rates: HashMap<String, f64>,
    time_last_update_utc: Option<String>,
}

/// Fetches the current rate from `base` to `target`.
///
/// Currency codes are uppercased before the lookup.
pub fn fetch_rate(base: &str, target: &str) -> Result<RateQuote, RateError> {
    let base = base.to_uppercase();
    let target = target.to_uppercase();
    let url = format!("{API_BASE_URL}/{base}");
    debug!("GET {url}");

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let response: LatestRatesResponse =
        client.get(&url).send()?.error_for_status()?.json()?;

    quote_from_response(base, target, response)
}

/// Builds a quote from an already-parsed API response.
fn quote_from_response(
    base: String,
    target: String,
    response: LatestRatesResponse,
) -> Result<RateQuote, RateError> {
    if response.result != "success" {
        let kind = response.error_type.unwrap_or_else(|| "unknown".to_string());
        return Err(RateError::Api(kind));
    }

    let rate = response
        .rates
        .get(&target)
        .copied()
        .ok_or_else(|| RateError::UnsupportedCurrency(target.clone()))?;

    Ok(RateQuote {
        base,
        target,
        rate,
        updated: response
            .time_last_update_utc
            .unwrap_or_else(|| "unknown time".to_string()),
    })
}

/// Converts an amount using a resolved quote.
pub fn convert(amount: f64, quote: &RateQuote) -> f64 {
    amount * quote.rate
}
