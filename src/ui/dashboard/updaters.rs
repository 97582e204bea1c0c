//! Applying queued worker events to the dashboard state

use super::state::DashboardState;

use crate::events::{Event as FeedEvent, EventType, Source, SourceData};

impl DashboardState {
    /// Advance the animation tick and drain the pending event queue.
    pub fn update(&mut self) {
        self.tick += 1;

        // Each queued event lands in the activity log, then in its section
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event.clone());
            self.process_event(&event);
        }
    }

    /// Apply a single event to the slot it belongs to.
    ///
    /// Each event touches exactly one section; the other two are never read
    /// or written, whatever the event carries.
    fn process_event(&mut self, event: &FeedEvent) {
        match event.event_type {
            EventType::Success => match &event.data {
                Some(SourceData::Weather(entries)) => self.weather.settle(entries.clone()),
                Some(SourceData::Crypto(entries)) => self.crypto.settle(entries.clone()),
                Some(SourceData::News(entries)) => self.news.settle(entries.clone()),
                // A success without entries carries no settlement
                None => {}
            },
            EventType::Error => match event.source {
                Source::Weather => self.weather.settle_empty(),
                Source::Crypto => self.crypto.settle_empty(),
                Source::News => self.news.settle_empty(),
            },
            EventType::Refresh => {}
        }
    }
}
