// Events that flow from background fetch tasks to the TUI event loop
//
// Fetches run on spawned tasks; their outcome comes back over an mpsc channel
// so feed state is only ever mutated by the event loop.

use crate::feed::FetchTicket;
use crate::news::{FeedResponse, FetchError, NewsClient};
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppEvent {
    /// A fetch attempt settled (success or failure)
    FetchSettled {
        ticket: FetchTicket,
        result: Result<FeedResponse, FetchError>,
    },
}

/// Run one fetch on a background task and report the outcome
pub fn spawn_fetch(client: NewsClient, ticket: FetchTicket, tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let result = client.get(ticket.url.clone()).await;
        // Receiver gone means the TUI is shutting down
        let _ = tx.send(AppEvent::FetchSettled { ticket, result }).await;
    });
}
