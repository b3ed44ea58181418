//! Financial Modeling Prep screener client.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use trader_core::error::ProviderError;
use trader_core::traits::Screener;
use trader_core::types::ScreenerEntry;
use tracing::debug;

const BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

#[derive(Debug, Deserialize)]
struct FmpActive {
    symbol: String,
    price: f64,
}

/// FMP most-actives screen. The provider ranks the list; the runner keeps
/// its order.
pub struct FmpScreener {
    client: Client,
    api_key: String,
}

impl FmpScreener {
    pub fn new(api_key: String) -> Self {
        Self { client: Client::new(), api_key }
    }
}

#[async_trait]
impl Screener for FmpScreener {
    async fn most_active(&self) -> Result<Vec<ScreenerEntry>, ProviderError> {
        let url = format!("{BASE_URL}/stock_market/actives");

        let resp = self
            .client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let actives: Vec<FmpActive> = resp
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        debug!("Screener returned {} candidates", actives.len());

        Ok(actives
            .into_iter()
            .filter_map(|a| {
                Decimal::from_f64_retain(a.price).map(|price| ScreenerEntry {
                    symbol: a.symbol,
                    price,
                })
            })
            .collect())
    }
}
