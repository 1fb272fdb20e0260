use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::market_provider::{AssetRecord, ExtendedAssetRecord, FetchError, MarketProvider};

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com";

/// Client-side budget for the ranked list request.
const LIST_TIMEOUT: Duration = Duration::from_millis(5000);

pub struct CoinGeckoProvider {
    base_url: String,
    list_timeout: Duration,
}

impl CoinGeckoProvider {
    pub fn new(base_url: &str) -> Self {
        CoinGeckoProvider {
            base_url: base_url.to_string(),
            list_timeout: LIST_TIMEOUT,
        }
    }

    /// Overrides the ranked list timeout, mainly for tests.
    pub fn with_list_timeout(mut self, timeout: Duration) -> Self {
        self.list_timeout = timeout;
        self
    }

    fn client() -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .user_agent("coinlens/0.1")
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

fn transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(e.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct MarketCoin {
    id: String,
    name: String,
    symbol: String,
    image: String,
    current_price: f64,
    market_cap: f64,
    price_change_percentage_1h_in_currency: Option<f64>,
    price_change_percentage_24h_in_currency: Option<f64>,
    price_change_percentage_7d_in_currency: Option<f64>,
    last_updated: Option<DateTime<Utc>>,
}

impl From<MarketCoin> for AssetRecord {
    fn from(coin: MarketCoin) -> AssetRecord {
        AssetRecord {
            id: coin.id,
            name: coin.name,
            symbol: coin.symbol,
            image: coin.image,
            current_price: coin.current_price,
            market_cap: coin.market_cap,
            change_1h: coin.price_change_percentage_1h_in_currency,
            change_24h: coin.price_change_percentage_24h_in_currency,
            change_7d: coin.price_change_percentage_7d_in_currency,
            last_updated: coin.last_updated,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CoinDetailResponse {
    id: String,
    name: String,
    symbol: String,
    #[serde(default)]
    description: LocalizedText,
    image: DetailImage,
    market_cap_rank: u32,
    links: DetailLinks,
    market_data: DetailMarketData,
}

#[derive(Debug, Deserialize, Default)]
struct LocalizedText {
    #[serde(default)]
    en: String,
}

#[derive(Debug, Deserialize)]
struct DetailImage {
    large: String,
}

#[derive(Debug, Deserialize)]
struct DetailLinks {
    #[serde(default)]
    homepage: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DetailMarketData {
    current_price: HashMap<String, f64>,
    market_cap: HashMap<String, f64>,
    high_24h: HashMap<String, f64>,
    low_24h: HashMap<String, f64>,
    total_volume: HashMap<String, f64>,
    circulating_supply: f64,
    total_supply: Option<f64>,
    market_cap_change_percentage_24h: f64,
}

impl From<CoinDetailResponse> for ExtendedAssetRecord {
    fn from(coin: CoinDetailResponse) -> ExtendedAssetRecord {
        ExtendedAssetRecord {
            id: coin.id,
            name: coin.name,
            symbol: coin.symbol,
            image: coin.image.large,
            description: coin.description.en,
            market_cap_rank: coin.market_cap_rank,
            circulating_supply: coin.market_data.circulating_supply,
            total_supply: coin.market_data.total_supply,
            market_cap_change_percentage_24h: coin.market_data.market_cap_change_percentage_24h,
            current_price: coin.market_data.current_price,
            market_cap: coin.market_data.market_cap,
            high_24h: coin.market_data.high_24h,
            low_24h: coin.market_data.low_24h,
            total_volume: coin.market_data.total_volume,
            homepage: coin.links.homepage,
        }
    }
}

#[async_trait]
impl MarketProvider for CoinGeckoProvider {
    #[instrument(name = "RankedFetch", skip(self), fields(currency = %currency))]
    async fn fetch_ranked(&self, currency: &str) -> Result<Vec<AssetRecord>, FetchError> {
        let url = format!(
            "{}/api/v3/coins/markets?vs_currency={}&order=market_cap_desc&per_page=100&page=1&sparkline=false&price_change_percentage=1h%2C24h%2C7d",
            self.base_url, currency
        );
        debug!("Requesting ranked market data from {}", url);

        let response = Self::client()?
            .get(&url)
            .timeout(self.list_timeout)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(FetchError::Network(format!(
                "HTTP error: {} for currency: {}",
                response.status(),
                currency
            )));
        }

        let coins = response
            .json::<Vec<MarketCoin>>()
            .await
            .map_err(transport_error)?;

        debug!("Received {} ranked assets", coins.len());
        Ok(coins.into_iter().map(AssetRecord::from).collect())
    }

    #[instrument(name = "DetailFetch", skip(self), fields(id = %id))]
    async fn fetch_by_id(&self, id: &str) -> Result<ExtendedAssetRecord, FetchError> {
        let url = format!("{}/api/v3/coins/{}", self.base_url, id);
        debug!("Requesting asset detail from {}", url);

        let response = Self::client()?
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(id.to_string()));
        }
        if !response.status().is_success() {
            return Err(FetchError::Network(format!(
                "HTTP error: {} for asset: {}",
                response.status(),
                id
            )));
        }

        let text = response.text().await.map_err(transport_error)?;
        let detail: CoinDetailResponse = serde_json::from_str(&text)
            .map_err(|e| FetchError::Network(format!("Failed to parse response for {id}: {e}")))?;

        Ok(detail.into())
    }
}
