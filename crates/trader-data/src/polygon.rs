//! Polygon indicator client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use trader_config::RateLimitSettings;
use trader_core::error::ProviderError;
use trader_core::traits::IndicatorProvider;
use trader_core::types::Macd;
use tracing::debug;

use crate::rate_limit::RateLimiter;

const BASE_URL: &str = "https://api.polygon.io";

/// Indicator parameters mirror the strategy's hourly tuning: a short
/// 3-period RSI and standard 12/26/9 MACD, latest value only.
const RSI_WINDOW: u32 = 3;
const MACD_SHORT: u32 = 12;
const MACD_LONG: u32 = 26;
const MACD_SIGNAL: u32 = 9;

#[derive(Debug, Deserialize)]
struct IndicatorValue {
    #[allow(dead_code)]
    timestamp: i64,
    value: f64,
    signal: Option<f64>,
    histogram: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct IndicatorResults {
    values: Option<Vec<IndicatorValue>>,
}

#[derive(Debug, Deserialize)]
struct IndicatorResponse {
    results: Option<IndicatorResults>,
    status: String,
}

/// Polygon technical-indicator gateway, throttled to the provider quota.
pub struct PolygonIndicators {
    client: Client,
    api_key: String,
    limiter: RateLimiter,
}

impl PolygonIndicators {
    pub fn new(api_key: String, limit: RateLimitSettings) -> Self {
        Self {
            client: Client::new(),
            api_key,
            limiter: RateLimiter::new(limit.calls, Duration::from_secs(limit.period_secs)),
        }
    }

    async fn fetch_latest(
        &self,
        indicator: &str,
        symbol: &str,
        extra: &[(&str, String)],
    ) -> Result<IndicatorValue, ProviderError> {
        self.limiter.acquire().await;

        let url = format!("{BASE_URL}/v1/indicators/{indicator}/{}", symbol.to_uppercase());
        let mut params = vec![
            ("timespan", "hour".to_string()),
            ("series_type", "close".to_string()),
            ("limit", "1".to_string()),
            ("apiKey", self.api_key.clone()),
        ];
        params.extend(extra.iter().cloned());

        debug!("Fetching {} for {}", indicator, symbol);

        let resp = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let data: IndicatorResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        data.results
            .and_then(|r| r.values)
            .and_then(|mut v| if v.is_empty() { None } else { Some(v.remove(0)) })
            .ok_or_else(|| {
                ProviderError::Decode(format!(
                    "No {indicator} values for {symbol} (status {})",
                    data.status
                ))
            })
    }
}

#[async_trait]
impl IndicatorProvider for PolygonIndicators {
    async fn rsi(&self, symbol: &str) -> Result<f64, ProviderError> {
        let value = self
            .fetch_latest("rsi", symbol, &[("window", RSI_WINDOW.to_string())])
            .await?;
        Ok(value.value)
    }

    async fn macd(&self, symbol: &str) -> Result<Macd, ProviderError> {
        let value = self
            .fetch_latest(
                "macd",
                symbol,
                &[
                    ("short_window", MACD_SHORT.to_string()),
                    ("long_window", MACD_LONG.to_string()),
                    ("signal_window", MACD_SIGNAL.to_string()),
                ],
            )
            .await?;

        let signal = value
            .signal
            .ok_or_else(|| ProviderError::Decode(format!("MACD missing signal for {symbol}")))?;
        let histogram = value
            .histogram
            .ok_or_else(|| ProviderError::Decode(format!("MACD missing histogram for {symbol}")))?;

        Ok(Macd { value: value.value, signal, histogram })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rsi_response() {
        let json = r#"{
            "results": {
                "underlying": {"url": "https://api.polygon.io/v2/aggs/..."},
                "values": [{"timestamp": 1717423200000, "value": 31.42}]
            },
            "status": "OK",
            "request_id": "abc123"
        }"#;
        let data: IndicatorResponse = serde_json::from_str(json).unwrap();
        let values = data.results.unwrap().values.unwrap();
        assert_eq!(values[0].value, 31.42);
        assert!(values[0].signal.is_none());
    }

    #[test]
    fn test_decode_macd_response() {
        let json = r#"{
            "results": {
                "values": [{
                    "timestamp": 1717423200000,
                    "value": 2.1,
                    "signal": 1.4,
                    "histogram": 0.7
                }]
            },
            "status": "OK"
        }"#;
        let data: IndicatorResponse = serde_json::from_str(json).unwrap();
        let values = data.results.unwrap().values.unwrap();
        assert_eq!(values[0].signal, Some(1.4));
        assert_eq!(values[0].histogram, Some(0.7));
    }

    #[test]
    fn test_decode_empty_results() {
        let json = r#"{"results": {"values": []}, "status": "OK"}"#;
        let data: IndicatorResponse = serde_json::from_str(json).unwrap();
        assert!(data.results.unwrap().values.unwrap().is_empty());
    }
}
