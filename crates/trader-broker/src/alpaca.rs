//! Alpaca broker integration for paper and live accounts.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{header, Client};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use trader_config::Credentials;
use trader_core::error::ProviderError;
use trader_core::traits::{Broker, QuoteProvider};
use trader_core::types::{
    Account, Order, OrderFilter, OrderRequest, OrderStatus, Position, Side, TimeInForce,
};
use tracing::{debug, info};
use uuid::Uuid;

/// Alpaca API configuration.
#[derive(Debug, Clone)]
pub struct AlpacaConfig {
    pub api_key: String,
    pub api_secret: String,
    pub paper: bool,
}

impl AlpacaConfig {
    /// Create config directly with key and secret.
    pub fn new(api_key: String, api_secret: String, paper: bool) -> Self {
        Self { api_key, api_secret, paper }
    }

    /// Build from preloaded credentials.
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self::new(
            credentials.alpaca_key.clone(),
            credentials.alpaca_secret.clone(),
            credentials.alpaca_paper,
        )
    }

    pub fn base_url(&self) -> &str {
        if self.paper {
            "https://paper-api.alpaca.markets"
        } else {
            "https://api.alpaca.markets"
        }
    }

    pub fn data_url(&self) -> &str {
        "https://data.alpaca.markets"
    }
}

/// Alpaca API response types
#[derive(Debug, Deserialize)]
struct AlpacaAccount {
    #[allow(dead_code)]
    id: String,
    #[allow(dead_code)]
    status: String,
    cash: String,
    equity: String,
    buying_power: String,
    pattern_day_trader: bool,
}

#[derive(Debug, Deserialize)]
struct AlpacaPosition {
    symbol: String,
    qty: String,
    qty_available: Option<String>,
    avg_entry_price: String,
    current_price: String,
    market_value: String,
    unrealized_pl: String,
    unrealized_plpc: String,
}

#[derive(Debug, Deserialize)]
struct AlpacaOrder {
    id: String,
    client_order_id: String,
    status: String,
    symbol: String,
    qty: String,
    filled_qty: String,
    side: String,
    filled_avg_price: Option<String>,
    created_at: String,
    filled_at: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateOrderRequest {
    symbol: String,
    qty: String,
    side: String,
    #[serde(rename = "type")]
    order_type: String,
    time_in_force: String,
}

#[derive(Debug, Deserialize)]
struct AlpacaLatestQuote {
    ap: f64,
    #[allow(dead_code)]
    bp: f64,
    #[serde(rename = "as")]
    #[allow(dead_code)]
    ask_size: u64,
    #[allow(dead_code)]
    bs: u64,
    #[allow(dead_code)]
    t: String,
}

#[derive(Debug, Deserialize)]
struct AlpacaLatestQuotesResponse {
    quotes: HashMap<String, AlpacaLatestQuote>,
}

/// Alpaca broker client.
pub struct AlpacaBroker {
    config: AlpacaConfig,
    client: Client,
}

impl AlpacaBroker {
    /// Create a new Alpaca broker client.
    pub fn new(config: AlpacaConfig) -> Result<Self, ProviderError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            "APCA-API-KEY-ID",
            header::HeaderValue::from_str(&config.api_key)
                .map_err(|e| ProviderError::Connection(e.to_string()))?,
        );
        headers.insert(
            "APCA-API-SECRET-KEY",
            header::HeaderValue::from_str(&config.api_secret)
                .map_err(|e| ProviderError::Connection(e.to_string()))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        Ok(Self { config, client })
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Err(ProviderError::Api { status, body })
    }

    fn parse_order(&self, order: AlpacaOrder) -> Result<Order, ProviderError> {
        let id = Uuid::parse_str(&order.id).unwrap_or_else(|_| Uuid::new_v4());

        let side = match order.side.as_str() {
            "buy" => Side::Buy,
            "sell" => Side::Sell,
            other => {
                return Err(ProviderError::Decode(format!("Unknown side: {other}")));
            }
        };

        let status = match order.status.as_str() {
            "partially_filled" => OrderStatus::PartiallyFilled,
            "filled" => OrderStatus::Filled,
            "canceled" | "expired" | "rejected" => OrderStatus::Canceled,
            _ => OrderStatus::Pending,
        };

        let qty: Decimal = order.qty.parse().unwrap_or(dec!(0));
        let filled_qty: Decimal = order.filled_qty.parse().unwrap_or(dec!(0));
        let filled_avg_price = order.filled_avg_price.as_ref().and_then(|p| p.parse().ok());

        let created_at = DateTime::parse_from_rfc3339(&order.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());
        let filled_at = order
            .filled_at
            .as_ref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Ok(Order {
            id,
            client_order_id: order.client_order_id,
            symbol: order.symbol,
            side,
            status,
            qty,
            filled_qty,
            filled_avg_price,
            created_at,
            filled_at,
        })
    }

    fn parse_position(&self, p: AlpacaPosition) -> Position {
        let qty: Decimal = p.qty.parse().unwrap_or(dec!(0));
        Position {
            symbol: p.symbol,
            qty,
            qty_available: p
                .qty_available
                .as_ref()
                .and_then(|q| q.parse().ok())
                .unwrap_or(qty),
            avg_entry_price: p.avg_entry_price.parse().unwrap_or(dec!(0)),
            current_price: p.current_price.parse().unwrap_or(dec!(0)),
            market_value: p.market_value.parse().unwrap_or(dec!(0)),
            unrealized_pl: p.unrealized_pl.parse().unwrap_or(dec!(0)),
            unrealized_plpc: p.unrealized_plpc.parse().unwrap_or(dec!(0)),
        }
    }
}

#[async_trait]
impl Broker for AlpacaBroker {
    async fn get_account(&self) -> Result<Account, ProviderError> {
        let url = format!("{}/v2/account", self.config.base_url());

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;
        let resp = Self::check(resp).await?;

        let account: AlpacaAccount = resp
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(Account {
            cash: account.cash.parse().unwrap_or(dec!(0)),
            equity: account.equity.parse().unwrap_or(dec!(0)),
            buying_power: account.buying_power.parse().unwrap_or(dec!(0)),
            pattern_day_trader: account.pattern_day_trader,
        })
    }

    async fn submit_order(&self, request: OrderRequest) -> Result<Order, ProviderError> {
        let url = format!("{}/v2/orders", self.config.base_url());

        let side = match request.side {
            Side::Buy => "buy",
            Side::Sell => "sell",
        };
        let time_in_force = match request.time_in_force {
            TimeInForce::Day => "day",
            TimeInForce::GTC => "gtc",
        };

        let create_req = CreateOrderRequest {
            symbol: request.symbol.clone(),
            qty: request.qty.to_string(),
            side: side.to_string(),
            order_type: "market".to_string(),
            time_in_force: time_in_force.to_string(),
        };

        debug!("Submitting order: {:?}", create_req);

        let resp = self
            .client
            .post(&url)
            .json(&create_req)
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::OrderRejected(format!("{status}: {body}")));
        }

        let order: AlpacaOrder = resp
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        info!("Order submitted: {} {} {}", order.side, order.qty, order.symbol);
        self.parse_order(order)
    }

    async fn get_position(&self, symbol: &str) -> Result<Option<Position>, ProviderError> {
        let url = format!("{}/v2/positions/{}", self.config.base_url(), symbol);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = Self::check(resp).await?;

        let p: AlpacaPosition = resp
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        Ok(Some(self.parse_position(p)))
    }

    async fn get_positions(&self) -> Result<Vec<Position>, ProviderError> {
        let url = format!("{}/v2/positions", self.config.base_url());
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;
        let resp = Self::check(resp).await?;

        let positions: Vec<AlpacaPosition> = resp
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        Ok(positions.into_iter().map(|p| self.parse_position(p)).collect())
    }

    async fn get_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, ProviderError> {
        let url = format!("{}/v2/orders", self.config.base_url());
        let status = if filter.closed { "closed" } else { "open" };

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("status", status.to_string()),
                ("after", filter.after.to_rfc3339()),
                ("limit", filter.limit.to_string()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;
        let resp = Self::check(resp).await?;

        let orders: Vec<AlpacaOrder> = resp
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        orders.into_iter().map(|o| self.parse_order(o)).collect()
    }

    fn name(&self) -> &str {
        if self.config.paper {
            "Alpaca Paper"
        } else {
            "Alpaca Live"
        }
    }
}

#[async_trait]
impl QuoteProvider for AlpacaBroker {
    async fn latest_ask(&self, symbol: &str) -> Result<Decimal, ProviderError> {
        let symbol = symbol.to_uppercase();
        let url = format!("{}/v2/stocks/quotes/latest", self.config.data_url());

        let resp = self
            .client
            .get(&url)
            .query(&[("symbols", symbol.as_str()), ("feed", "iex")])
            .send()
            .await
            .map_err(|e| ProviderError::Connection(e.to_string()))?;
        let resp = Self::check(resp).await?;

        let data: AlpacaLatestQuotesResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        let quote = data
            .quotes
            .get(&symbol)
            .ok_or_else(|| ProviderError::Decode(format!("No quote returned for {symbol}")))?;

        Decimal::from_f64_retain(quote.ap)
            .ok_or_else(|| ProviderError::Decode(format!("Bad ask price for {symbol}")))
    }
}
