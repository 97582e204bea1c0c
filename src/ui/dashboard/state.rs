//! Per-section fetch slots and the dashboard state they roll up into

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event as FeedEvent;
use crate::feeds::crypto::CryptoEntry;
use crate::feeds::news::NewsEntry;
use crate::feeds::weather::WeatherEntry;

use std::collections::VecDeque;
use std::time::Instant;

/// Per-section fetch state: the loading flag plus the normalized entries.
///
/// A slot starts loading and settles exactly once. Settlement is monotonic:
/// once `loading` has flipped to false, later writes are ignored, so a
/// section can never return to the pending state or flicker between results.
#[derive(Debug, Clone)]
pub struct FetchSlot<T> {
    items: Vec<T>,
    loading: bool,
}

impl<T> FetchSlot<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }

    /// Whether the slot is still waiting for its first settlement.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The normalized entries. Empty while loading and after a failed fetch.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Settle the slot with fetched entries. A no-op once settled.
    pub fn settle(&mut self, items: Vec<T>) {
        if self.loading {
            self.items = items;
            self.loading = false;
        }
    }

    /// Settle the slot with no entries after a failed fetch. A no-op once settled.
    pub fn settle_empty(&mut self) {
        if self.loading {
            self.loading = false;
        }
    }
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Dashboard state: three independent section slots plus display bookkeeping.
#[derive(Debug)]
pub struct DashboardState {
    /// Backend environment the feeds point at.
    pub environment: Environment,
    /// Session start, shown as uptime in the footer.
    pub start_time: Instant,
    /// Weather section slot.
    pub weather: FetchSlot<WeatherEntry>,
    /// Crypto section slot.
    pub crypto: FetchSlot<CryptoEntry>,
    /// News section slot.
    pub news: FetchSlot<NewsEntry>,
    /// Events waiting to be applied on the next update.
    pub pending_events: VecDeque<FeedEvent>,
    /// Recent events shown in the log panel.
    pub activity_logs: VecDeque<FeedEvent>,
    /// Paint a background color behind the dashboard.
    pub with_background_color: bool,
    /// Frame counter driving the progress sweep.
    pub tick: usize,
}

impl DashboardState {
    /// A fresh dashboard with all three sections loading.
    pub fn new(environment: Environment, start_time: Instant, with_background_color: bool) -> Self {
        Self {
            environment,
            start_time,
            weather: FetchSlot::new(),
            crypto: FetchSlot::new(),
            news: FetchSlot::new(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color,
            tick: 0,
        }
    }

    /// True once every section has settled, successfully or not.
    pub fn all_settled(&self) -> bool {
        !self.weather.is_loading() && !self.crypto.is_loading() && !self.news.is_loading()
    }

    /// How many of the three sections have settled so far.
    pub fn settled_count(&self) -> usize {
        [
            !self.weather.is_loading(),
            !self.crypto.is_loading(),
            !self.news.is_loading(),
        ]
        .iter()
        .filter(|settled| **settled)
        .count()
    }

    /// Record an event in the activity log, dropping the oldest entry once
    /// the log is full.
    pub fn add_to_activity_log(&mut self, event: FeedEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Queue an event for the next update pass.
    pub fn add_event(&mut self, event: FeedEvent) {
        self.pending_events.push_back(event);
    }
}
