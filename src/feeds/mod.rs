use crate::environment::Environment;
use crate::feeds::crypto::CryptoEntry;
use crate::feeds::error::FeedError;
use crate::feeds::news::NewsEntry;
use crate::feeds::weather::WeatherEntry;

pub(crate) mod client;
pub use client::FeedClient;
pub mod crypto;
pub mod error;
pub mod news;
pub mod weather;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait FeedFetcher: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch and normalize weather reports for the backend's locations.
    async fn fetch_weather(&self) -> Result<Vec<WeatherEntry>, FeedError>;

    /// Fetch quotes for the tracked coins, re-projected into display order.
    async fn fetch_crypto(&self) -> Result<Vec<CryptoEntry>, FeedError>;

    /// Fetch the latest crypto-news articles in upstream order.
    async fn fetch_news(&self) -> Result<Vec<NewsEntry>, FeedError>;
}
