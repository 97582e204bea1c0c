//! Events flowing from the feed workers to the UI and console

use crate::feeds::crypto::CryptoEntry;
use crate::feeds::news::NewsEntry;
use crate::feeds::weather::WeatherEntry;
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display)]
pub enum Source {
    /// Weather reports fetched from the backend.
    Weather,
    /// Coin quotes fetched from the market-data endpoint.
    Crypto,
    /// Crypto-news articles fetched from the backend.
    News,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

/// Entries carried by a successful settlement, typed per source.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceData {
    Weather(Vec<WeatherEntry>),
    Crypto(Vec<CryptoEntry>),
    News(Vec<NewsEntry>),
}

impl SourceData {
    /// The source these entries belong to.
    pub fn source(&self) -> Source {
        match self {
            SourceData::Weather(_) => Source::Weather,
            SourceData::Crypto(_) => Source::Crypto,
            SourceData::News(_) => Source::News,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Fetched entries, present on successful settlements only
    pub data: Option<SourceData>,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            data: None,
        }
    }

    /// A successful settlement carrying the source's normalized entries.
    pub fn settled(data: SourceData, msg: String) -> Self {
        Self {
            source: data.source(),
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type: EventType::Success,
            log_level: LogLevel::Info,
            data: Some(data),
        }
    }

    /// A failed settlement. The section settles empty; no entries attached.
    pub fn failed(source: Source, msg: String, log_level: LogLevel) -> Self {
        Self::new(source, msg, EventType::Error, log_level)
    }

    /// Constructor for the worker helpers; the event type passes through.
    pub fn source_with_level(
        source: Source,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(source, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Successes and info-or-louder events are never filtered; quieter
        // ones defer to the RUST_LOG threshold
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::news::NewsEntry;

    #[test]
    fn test_settled_event_carries_source_and_data() {
        let entries = vec![NewsEntry {
            title: "Bitcoin rallies".to_string(),
            url: "https://example.com/btc".to_string(),
        }];
        let event = Event::settled(
            SourceData::News(entries.clone()),
            "Got 1 news articles".to_string(),
        );
        assert_eq!(event.source, Source::News);
        assert_eq!(event.event_type, EventType::Success);
        assert_eq!(event.data, Some(SourceData::News(entries)));
    }

    #[test]
    fn test_failed_event_has_no_data() {
        let event = Event::failed(
            Source::Weather,
            "Failed to fetch weather reports".to_string(),
            LogLevel::Warn,
        );
        assert_eq!(event.source, Source::Weather);
        assert_eq!(event.event_type, EventType::Error);
        assert!(event.data.is_none());
    }

    #[test]
    fn test_refresh_event_carries_no_data() {
        let event = Event::source_with_level(
            Source::Crypto,
            "Fetching coin quotes...".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        );
        assert_eq!(event.event_type, EventType::Refresh);
        assert!(event.data.is_none());
    }

    #[test]
    fn test_event_display_format() {
        let event = Event::source_with_level(
            Source::Crypto,
            "Fetching coin quotes...".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        );
        let formatted = format!("{}", event);
        assert!(formatted.starts_with("Refresh ["));
        assert!(formatted.ends_with("] Fetching coin quotes..."));
    }

    #[test]
    fn test_success_events_always_display() {
        let event = Event::settled(SourceData::News(vec![]), "Got 0 news articles".to_string());
        assert!(event.should_display());
    }

    #[test]
    fn test_source_data_maps_to_its_source() {
        assert_eq!(SourceData::Weather(vec![]).source(), Source::Weather);
        assert_eq!(SourceData::Crypto(vec![]).source(), Source::Crypto);
        assert_eq!(SourceData::News(vec![]).source(), Source::News);
    }
}
