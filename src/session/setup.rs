//! Session setup shared by the TUI and headless modes

use crate::environment::Environment;
use crate::events::Event;
use crate::feeds::FeedClient;
use crate::runtime::start_feed_workers;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Everything a running session owns.
#[derive(Debug)]
pub struct SessionData {
    /// Settlement and progress events arriving from the feed workers
    pub event_receiver: mpsc::Receiver<Event>,
    /// Handles of the three spawned workers
    pub join_handles: Vec<JoinHandle<()>>,
    /// Broadcasts the shutdown signal to every worker
    pub shutdown_sender: broadcast::Sender<()>,
    /// Shared HTTP client for the three feeds
    pub feeds: FeedClient,
}

/// Builds a session: creates the feed client, opens the shutdown channel,
/// and launches one worker per source. The caller picks the mode that
/// consumes the returned data.
pub async fn setup_session(environment: Environment) -> SessionData {
    let feed_client = FeedClient::new(environment);

    // A single shutdown signal is ever sent, so capacity 1 suffices
    let (shutdown_sender, _) = broadcast::channel(1);

    let (event_receiver, join_handles) =
        start_feed_workers(feed_client.clone(), shutdown_sender.subscribe()).await;

    SessionData {
        event_receiver,
        join_handles,
        shutdown_sender,
        feeds: feed_client,
    }
}
