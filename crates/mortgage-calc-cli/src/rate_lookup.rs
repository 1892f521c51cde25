//! Blocking HTTP lookup of the prevailing annual rate.

use std::time::Duration;

use mortgage_calc_core::rate_source::{rate_or, RateSource};
use mortgage_calc_core::{MortgageError, MortgageResult, Percent};
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::RateSourceConfig;

#[derive(Debug, Deserialize)]
struct RateResponse {
    annual_rate_percent: Percent,
}

/// Fetches `{"annual_rate_percent": ...}` from a fixed URL. No retries,
/// no caching, no authentication.
pub struct HttpRateSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpRateSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

impl RateSource for HttpRateSource {
    fn current_annual_rate_percent(&self) -> MortgageResult<Percent> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| MortgageError::RateSource(e.to_string()))?;
        let body: RateResponse = response
            .json()
            .map_err(|e| MortgageError::RateSource(format!("malformed rate response: {e}")))?;
        Ok(body.annual_rate_percent)
    }
}

/// Default rate for commands run without `--rate`. Never fails.
pub fn resolve_default_rate(config: &RateSourceConfig) -> Percent {
    let fallback = config.fallback_rate_percent;
    let Some(url) = config.url.as_deref() else {
        info!(rate = %fallback, "no rate source configured, using fallback rate");
        return fallback;
    };

    match HttpRateSource::new(url, Duration::from_millis(config.timeout_ms)) {
        Ok(source) => rate_or(&source, fallback),
        Err(e) => {
            warn!(error = %e, "could not build rate lookup client, using fallback rate");
            fallback
        }
    }
}
