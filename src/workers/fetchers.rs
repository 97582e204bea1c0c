//! One-shot feed fetch workers
//!
//! Each worker performs its source's fetch exactly once per view activation,
//! racing the request against the shutdown signal, and reports the outcome as
//! a settlement event. The workers share nothing but the event channel, so a
//! fault in one source never touches another section.

use super::core::EventSender;
use crate::events::{Event, EventType, Source, SourceData};
use crate::feeds::FeedFetcher;
use crate::logging::LogLevel;
use tokio::sync::broadcast;

/// Fetch weather reports once and settle the weather section.
pub async fn fetch_weather_once(
    feeds: Box<dyn FeedFetcher>,
    event_sender: EventSender,
    mut shutdown: broadcast::Receiver<()>,
) {
    event_sender
        .send_weather_event(
            "Fetching weather reports...".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        )
        .await;

    tokio::select! {
        _ = shutdown.recv() => {}
        result = feeds.fetch_weather() => match result {
            Ok(entries) => {
                let msg = format!("Got {} weather reports", entries.len());
                event_sender
                    .send_event(Event::settled(SourceData::Weather(entries), msg))
                    .await;
            }
            Err(e) => {
                let log_level = e.log_level();
                event_sender
                    .send_event(Event::failed(
                        Source::Weather,
                        format!("Failed to fetch weather reports: {}", e),
                        log_level,
                    ))
                    .await;
            }
        }
    }
}

/// Fetch coin quotes once and settle the crypto section.
pub async fn fetch_crypto_once(
    feeds: Box<dyn FeedFetcher>,
    event_sender: EventSender,
    mut shutdown: broadcast::Receiver<()>,
) {
    event_sender
        .send_crypto_event(
            "Fetching coin quotes...".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        )
        .await;

    tokio::select! {
        _ = shutdown.recv() => {}
        result = feeds.fetch_crypto() => match result {
            Ok(entries) => {
                let msg = format!("Got quotes for {} coins", entries.len());
                event_sender
                    .send_event(Event::settled(SourceData::Crypto(entries), msg))
                    .await;
            }
            Err(e) => {
                let log_level = e.log_level();
                event_sender
                    .send_event(Event::failed(
                        Source::Crypto,
                        format!("Failed to fetch coin quotes: {}", e),
                        log_level,
                    ))
                    .await;
            }
        }
    }
}

/// Fetch crypto-news articles once and settle the news section.
pub async fn fetch_news_once(
    feeds: Box<dyn FeedFetcher>,
    event_sender: EventSender,
    mut shutdown: broadcast::Receiver<()>,
) {
    event_sender
        .send_news_event(
            "Fetching crypto news...".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        )
        .await;

    tokio::select! {
        _ = shutdown.recv() => {}
        result = feeds.fetch_news() => match result {
            Ok(entries) => {
                let msg = format!("Got {} news articles", entries.len());
                event_sender
                    .send_event(Event::settled(SourceData::News(entries), msg))
                    .await;
            }
            Err(e) => {
                let log_level = e.log_level();
                event_sender
                    .send_event(Event::failed(
                        Source::News,
                        format!("Failed to fetch crypto news: {}", e),
                        log_level,
                    ))
                    .await;
            }
        }
    }
}
