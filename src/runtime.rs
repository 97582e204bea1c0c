//! Runtime for launching the per-source feed workers

use crate::events::Event;
use crate::feeds::FeedClient;
use crate::workers::core::EventSender;
use crate::workers::fetchers;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the three feed workers, one per dashboard section.
///
/// All three are spawned immediately and complete independently; there is no
/// join barrier, so each section settles the moment its own fetch does. The
/// returned receiver yields their events until every worker has finished.
pub async fn start_feed_workers(
    feeds: FeedClient,
    shutdown: broadcast::Receiver<()>,
) -> (mpsc::Receiver<Event>, Vec<JoinHandle<()>>) {
    let (event_sender, event_receiver) =
        mpsc::channel::<Event>(crate::consts::cli_consts::EVENT_QUEUE_SIZE);
    let event_sender = EventSender::new(event_sender);

    let mut join_handles = Vec::new();

    let weather_handle = {
        let feeds = Box::new(feeds.clone());
        let event_sender = event_sender.clone();
        let shutdown = shutdown.resubscribe();
        tokio::spawn(async move {
            fetchers::fetch_weather_once(feeds, event_sender, shutdown).await;
        })
    };
    join_handles.push(weather_handle);

    let crypto_handle = {
        let feeds = Box::new(feeds.clone());
        let event_sender = event_sender.clone();
        let shutdown = shutdown.resubscribe();
        tokio::spawn(async move {
            fetchers::fetch_crypto_once(feeds, event_sender, shutdown).await;
        })
    };
    join_handles.push(crypto_handle);

    let news_handle = {
        let feeds = Box::new(feeds);
        tokio::spawn(async move {
            fetchers::fetch_news_once(feeds, event_sender, shutdown).await;
        })
    };
    join_handles.push(news_handle);

    (event_receiver, join_handles)
}

#[cfg(test)]
mod tests {
    use crate::events::{EventType, Source, SourceData};
    use crate::feeds::MockFeedFetcher;
    use crate::feeds::error::FeedError;
    use crate::feeds::news::NewsEntry;
    use crate::workers::core::EventSender;
    use crate::workers::fetchers;
    use std::collections::HashMap;
    use tokio::sync::{broadcast, mpsc};

    #[tokio::test]
    /// Each source settles on its own; one failure never blocks the others.
    async fn test_sections_settle_independently() {
        let mut mock = MockFeedFetcher::new();
        mock.expect_fetch_weather().returning(|| {
            Err(FeedError::Http {
                status: 500,
                message: "Internal Server Error".to_string(),
            })
        });
        mock.expect_fetch_crypto().returning(|| Ok(vec![]));
        mock.expect_fetch_news().returning(|| {
            Ok(vec![NewsEntry {
                title: "Markets steady".to_string(),
                url: "https://example.com/steady".to_string(),
            }])
        });

        let feeds = std::sync::Arc::new(mock);
        let (event_sender, mut event_receiver) = mpsc::channel(32);
        let event_sender = EventSender::new(event_sender);
        let (shutdown_sender, _) = broadcast::channel(1);

        let handles = vec![
            tokio::spawn(fetchers::fetch_weather_once(
                Box::new(SharedFetcher(feeds.clone())),
                event_sender.clone(),
                shutdown_sender.subscribe(),
            )),
            tokio::spawn(fetchers::fetch_crypto_once(
                Box::new(SharedFetcher(feeds.clone())),
                event_sender.clone(),
                shutdown_sender.subscribe(),
            )),
            tokio::spawn(fetchers::fetch_news_once(
                Box::new(SharedFetcher(feeds)),
                event_sender,
                shutdown_sender.subscribe(),
            )),
        ];
        for handle in handles {
            handle.await.unwrap();
        }

        let mut settlements: HashMap<Source, EventType> = HashMap::new();
        while let Some(event) = event_receiver.recv().await {
            if matches!(event.event_type, EventType::Success | EventType::Error) {
                settlements.insert(event.source, event.event_type);
                if event.source == Source::News {
                    assert!(matches!(event.data, Some(SourceData::News(ref e)) if e.len() == 1));
                }
            }
        }

        assert_eq!(settlements.len(), 3);
        assert_eq!(settlements[&Source::Weather], EventType::Error);
        assert_eq!(settlements[&Source::Crypto], EventType::Success);
        assert_eq!(settlements[&Source::News], EventType::Success);
    }

    /// Wraps a shared mock so each spawned worker can own a fetcher handle.
    struct SharedFetcher(std::sync::Arc<MockFeedFetcher>);

    #[async_trait::async_trait]
    impl crate::feeds::FeedFetcher for SharedFetcher {
        fn environment(&self) -> &crate::environment::Environment {
            self.0.environment()
        }

        async fn fetch_weather(
            &self,
        ) -> Result<Vec<crate::feeds::weather::WeatherEntry>, FeedError> {
            self.0.fetch_weather().await
        }

        async fn fetch_crypto(&self) -> Result<Vec<crate::feeds::crypto::CryptoEntry>, FeedError> {
            self.0.fetch_crypto().await
        }

        async fn fetch_news(&self) -> Result<Vec<NewsEntry>, FeedError> {
            self.0.fetch_news().await
        }
    }
}
