//! Firestore REST snapshot store.
//!
//! Documents are keyed by calendar date: the portfolio snapshot lands at
//! `portfolio/{date}`, order records in a per-category subcollection under
//! `{collection}/{date}`.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};
use trader_core::error::PersistenceError;
use trader_core::traits::SnapshotStore;
use trader_core::types::{AccountSnapshot, OrderCategory, OrderRecord};
use tracing::debug;

const BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Firestore REST client.
pub struct FirestoreStore {
    client: Client,
    project_id: String,
    token: Option<String>,
}

impl FirestoreStore {
    pub fn new(project_id: String, token: Option<String>) -> Self {
        Self { client: Client::new(), project_id, token }
    }

    fn documents_url(&self, path: &str) -> String {
        format!(
            "{BASE_URL}/projects/{}/databases/(default)/documents/{path}",
            self.project_id
        )
    }

    fn collections(category: OrderCategory) -> (&'static str, &'static str) {
        match category {
            OrderCategory::EndOfDay => ("orders", "orders"),
            OrderCategory::BuyExecution => ("buy_executions", "buy_orders"),
            OrderCategory::SellExecution => ("sell_executions", "sell_orders"),
        }
    }

    async fn write(&self, url: &str, patch: bool, document: Value) -> Result<(), PersistenceError> {
        let mut req = if patch {
            self.client.patch(url)
        } else {
            self.client.post(url)
        };
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .json(&document)
            .send()
            .await
            .map_err(|e| PersistenceError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(PersistenceError::Api { status, body });
        }
        Ok(())
    }

    fn document<T: serde::Serialize>(record: &T) -> Result<Value, PersistenceError> {
        let value = serde_json::to_value(record).map_err(|e| PersistenceError::Encode(e.to_string()))?;
        Ok(json!({ "fields": fields(&value) }))
    }
}

/// Map a JSON object into Firestore's typed field encoding.
fn fields(value: &Value) -> Value {
    let map = value.as_object().cloned().unwrap_or_default();
    Value::Object(
        map.iter()
            .map(|(k, v)| (k.clone(), typed_value(v)))
            .collect(),
    )
}

fn typed_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                json!({ "integerValue": n.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => json!({
            "arrayValue": { "values": items.iter().map(typed_value).collect::<Vec<_>>() }
        }),
        Value::Object(_) => json!({ "mapValue": { "fields": fields(value) } }),
    }
}

#[async_trait]
impl SnapshotStore for FirestoreStore {
    async fn push_portfolio(&self, snapshot: &AccountSnapshot) -> Result<(), PersistenceError> {
        let url = self.documents_url(&format!("portfolio/{}", snapshot.date));
        debug!("Pushing portfolio snapshot for {}", snapshot.date);
        self.write(&url, true, Self::document(snapshot)?).await
    }

    async fn push_orders(
        &self,
        records: &[OrderRecord],
        category: OrderCategory,
    ) -> Result<(), PersistenceError> {
        let (collection, subcollection) = Self::collections(category);
        let date = Utc::now().date_naive().to_string();
        let url = self.documents_url(&format!("{collection}/{date}/{subcollection}"));

        for record in records {
            self.write(&url, false, Self::document(record)?).await?;
        }
        debug!("Pushed {} order records to {}", records.len(), collection);
        Ok(())
    }
}
