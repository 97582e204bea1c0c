//! Core worker utilities

use crate::events::{Event, EventType, Source};
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Common event sending utilities for the fetch workers
#[derive(Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event. Sends to a closed channel are discarded, so a
    /// worker outliving its view settles into silence instead of erroring.
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send_weather_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_source_event(Source::Weather, message, event_type, log_level)
            .await;
    }

    pub async fn send_crypto_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_source_event(Source::Crypto, message, event_type, log_level)
            .await;
    }

    pub async fn send_news_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_source_event(Source::News, message, event_type, log_level)
            .await;
    }

    async fn send_source_event(
        &self,
        source: Source,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::source_with_level(
                source, message, event_type, log_level,
            ))
            .await;
    }
}
