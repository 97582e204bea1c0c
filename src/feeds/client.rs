//! Feed Client
//!
//! A client for the three dashboard sources: the backend weather and
//! crypto-news endpoints, and the public market-data endpoint.

use crate::consts::cli_consts::feed_requests;
use crate::environment::Environment;
use crate::feeds::FeedFetcher;
use crate::feeds::crypto::{self, CoinQuote, CryptoEntry};
use crate::feeds::error::FeedError;
use crate::feeds::news::NewsEntry;
use crate::feeds::weather::{WeatherEntry, WeatherReport};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

// Identifies this CLI and its version to the feed endpoints
const USER_AGENT: &str = concat!("triptych/", env!("CARGO_PKG_VERSION"));

/// Public market-data endpoint, quoting the tracked coins in USD with
/// market cap and 24h change attached. Not routed through the backend.
const MARKET_DATA_URL: &str = "https://api.coingecko.com/api/v3/simple/price?ids=bitcoin,ethereum,dogecoin&vs_currencies=usd&include_market_cap=true&include_24hr_change=true";

#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    environment: Environment,
}

impl FeedClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(feed_requests::connect_timeout())
                .timeout(feed_requests::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.backend_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, FeedError> {
        if !response.status().is_success() {
            return Err(FeedError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FeedError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl FeedFetcher for FeedClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn fetch_weather(&self) -> Result<Vec<WeatherEntry>, FeedError> {
        let url = self.build_url("weather");
        let reports: Vec<WeatherReport> = self.get_json(&url).await?;
        Ok(reports.into_iter().map(WeatherEntry::from).collect())
    }

    async fn fetch_crypto(&self) -> Result<Vec<CryptoEntry>, FeedError> {
        let quotes: HashMap<String, CoinQuote> = self.get_json(MARKET_DATA_URL).await?;
        crypto::project_quotes(&quotes)
    }

    async fn fetch_news(&self) -> Result<Vec<NewsEntry>, FeedError> {
        let url = self.build_url("crypto-news");
        self.get_json(&url).await
    }
}
