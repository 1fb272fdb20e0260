//! Market data abstractions and core types

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("asset not found: {0}")]
    NotFound(String),
}

/// One asset's market snapshot as returned by the ranked list endpoint.
///
/// Percentage changes may be absent for thinly traded assets; everything
/// else is guaranteed by the upstream API.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub current_price: f64,
    pub market_cap: f64,
    pub change_1h: Option<f64>,
    pub change_24h: Option<f64>,
    pub change_7d: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Extended per-asset record for the detail view.
///
/// Monetary fields are per-currency sub-mappings keyed by lowercase
/// currency code. Callers must only look up codes the record actually
/// contains; the upstream data leaves other codes undefined.
#[derive(Debug, Clone)]
pub struct ExtendedAssetRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub description: String,
    pub market_cap_rank: u32,
    pub circulating_supply: f64,
    pub total_supply: Option<f64>,
    pub market_cap_change_percentage_24h: f64,
    pub current_price: HashMap<String, f64>,
    pub market_cap: HashMap<String, f64>,
    pub high_24h: HashMap<String, f64>,
    pub low_24h: HashMap<String, f64>,
    pub total_volume: HashMap<String, f64>,
    pub homepage: Vec<String>,
}

#[async_trait]
pub trait MarketProvider: Send + Sync {
    /// Fetches the top 100 assets ranked by market cap descending,
    /// denominated in `currency`, with 1h/24h/7d percentage changes.
    async fn fetch_ranked(&self, currency: &str) -> Result<Vec<AssetRecord>, FetchError>;

    /// Fetches the extended record for a single asset id.
    async fn fetch_by_id(&self, id: &str) -> Result<ExtendedAssetRecord, FetchError>;
}
