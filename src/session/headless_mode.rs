//! Console-only session mode

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::feeds::FeedFetcher;
use crate::print_cmd_info;
use std::error::Error;

/// Runs the dashboard without a terminal UI, logging feed events to the
/// console as they arrive.
///
/// The loop ends on its own once every worker has settled and dropped its
/// sender, so a headless run exits after the three fetches complete.
/// Ctrl+C ends it early through the shutdown channel.
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", session.feeds.environment());
    print_cmd_info!(
        "Feeds",
        "Backend: {}",
        session.feeds.environment().backend_base_url()
    );

    let ctrl_c_shutdown = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = ctrl_c_shutdown.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    loop {
        tokio::select! {
            maybe_event = session.event_receiver.recv() => {
                match maybe_event {
                    Some(event) => println!("{}", event),
                    // Closed channel means all three sections have settled
                    None => break,
                }
            }
            _ = shutdown_receiver.recv() => break,
        }
    }

    print_session_shutdown();
    for handle in session.join_handles {
        let _ = handle.await;
    }
    print_session_exit_success();

    Ok(())
}
