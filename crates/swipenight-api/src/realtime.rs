//! Per-party realtime fan-out.
//!
//! Each party gets its own `tokio::sync::broadcast` channel, created lazily
//! on first use. The store assigns event sequences at commit time; this layer
//! only delivers. A lagging subscriber loses old events from the ring buffer
//! and is expected to resync through the regular read endpoints.

use std::{
  collections::HashMap,
  convert::Infallible,
  sync::{Arc, Mutex},
  time::Duration,
};

use axum::{
  extract::{Path, State},
  response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{Stream, StreamExt};
use swipenight_core::{events::PartyEvent, store::PartyStore};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use uuid::Uuid;

use crate::{AppState, error::ApiError, resolve_party};

/// Events buffered per party before slow subscribers start lagging.
const CHANNEL_CAPACITY: usize = 64;

/// Registry of per-party broadcast senders.
#[derive(Clone, Default)]
pub struct PartyChannels {
  inner: Arc<Mutex<HashMap<Uuid, broadcast::Sender<PartyEvent>>>>,
}

impl PartyChannels {
  fn sender(&self, party_id: Uuid) -> broadcast::Sender<PartyEvent> {
    let mut map = self.inner.lock().expect("channel registry poisoned");
    map
      .entry(party_id)
      .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
      .clone()
  }

  /// Deliver `events` to every subscriber of `party_id`.
  ///
  /// Lossy: with no subscribers the events are simply dropped, since every
  /// event is recoverable from the store.
  pub fn publish(&self, party_id: Uuid, events: &[PartyEvent]) {
    if events.is_empty() {
      return;
    }
    let tx = self.sender(party_id);
    for event in events {
      let _ = tx.send(event.clone());
    }
  }

  pub fn subscribe(&self, party_id: Uuid) -> broadcast::Receiver<PartyEvent> {
    self.sender(party_id).subscribe()
  }

  #[cfg(test)]
  pub fn subscriber_count(&self, party_id: Uuid) -> usize {
    self.sender(party_id).receiver_count()
  }
}

// ─── SSE handler ─────────────────────────────────────────────────────────────

/// `GET /party/{slug}/events` — stream party events as SSE.
pub async fn stream<S>(
  State(state): State<AppState<S>>,
  Path(slug): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError>
where
  S: PartyStore + Clone + Send + Sync + 'static,
{
  let party = resolve_party(&*state.store, &slug).await?;
  tracing::debug!(party = %party.party_id, "sse client connected");

  let rx = state.channels.subscribe(party.party_id);
  let stream = BroadcastStream::new(rx).filter_map(|result| async move {
    match result {
      Ok(event) => Event::default()
        .event(event.kind())
        .json_data(&event)
        .ok()
        .map(Ok),
      Err(e) => {
        // Lagged or closed; the client resyncs via the read endpoints.
        tracing::warn!("sse stream error: {e:?}");
        None
      },
    }
  });

  Ok(
    Sse::new(stream).keep_alive(
      KeepAlive::new()
        .interval(Duration::from_secs(15))
        .text("keep-alive"),
    ),
  )
}

#[cfg(test)]
mod tests {
  use swipenight_core::party::PartyStatus;

  use super::*;

  #[tokio::test]
  async fn publish_reaches_only_that_party() {
    let channels = PartyChannels::default();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    let mut rx_a = channels.subscribe(a);
    let mut rx_b = channels.subscribe(b);

    channels.publish(
      a,
      &[PartyEvent::PartyStatusChanged {
        status:   PartyStatus::Swiping,
        sequence: 1,
      }],
    );

    let got = rx_a.recv().await.unwrap();
    assert_eq!(got.kind(), "party_status_changed");
    assert!(rx_b.try_recv().is_err());
  }

  #[tokio::test]
  async fn dropping_a_receiver_releases_its_subscription() {
    let channels = PartyChannels::default();
    let party = Uuid::new_v4();

    let rx1 = channels.subscribe(party);
    let rx2 = channels.subscribe(party);
    assert_eq!(channels.subscriber_count(party), 2);

    drop(rx1);
    assert_eq!(channels.subscriber_count(party), 1);
    drop(rx2);

    // Publishing with no subscribers is a no-op, not an error.
    channels.publish(
      party,
      &[PartyEvent::PartyStatusChanged {
        status:   PartyStatus::Completed,
        sequence: 9,
      }],
    );
  }
}
