//! Realtime event variants published on a party's channel.
//!
//! `sequence` is assigned per party at commit time by the store. Subscribers
//! use it to discard stale or duplicate deliveries per key: per `movie_id`
//! for `MovieUpdated`, per party for `PartyStatusChanged`. Ordering across
//! different keys is unspecified; delivery is at-least-once.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  movie::Movie,
  party::PartyStatus,
  swipe::SwipeOutcome,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PartyEvent {
  /// A movie's rating state changed (exactly one accepted swipe).
  MovieUpdated {
    movie_id:       Uuid,
    rating:         f64,
    right_swipes:   u32,
    left_swipes:    u32,
    expected_score: f64,
    sequence:       u64,
  },
  /// The party moved to a new lifecycle status.
  PartyStatusChanged {
    status:   PartyStatus,
    sequence: u64,
  },
}

impl PartyEvent {
  /// SSE event name for this variant.
  pub fn kind(&self) -> &'static str {
    match self {
      PartyEvent::MovieUpdated { .. } => "movie_updated",
      PartyEvent::PartyStatusChanged { .. } => "party_status_changed",
    }
  }

  pub fn movie_updated(movie: &Movie, sequence: u64) -> Self {
    PartyEvent::MovieUpdated {
      movie_id:       movie.movie_id,
      rating:         movie.rating,
      right_swipes:   movie.right_swipes,
      left_swipes:    movie.left_swipes,
      expected_score: movie.expected_score,
      sequence,
    }
  }

  /// The events implied by a swipe outcome, in commit order. Empty for
  /// duplicates — nothing changed, nothing is published.
  pub fn from_outcome(outcome: &SwipeOutcome) -> Vec<Self> {
    match outcome {
      SwipeOutcome::Recorded { movie, sequence, completion, .. } => {
        let mut events = vec![Self::movie_updated(movie, *sequence)];
        if let Some(seq) = completion {
          events.push(PartyEvent::PartyStatusChanged {
            status:   PartyStatus::Completed,
            sequence: *seq,
          });
        }
        events
      }
      SwipeOutcome::AlreadyRecorded { .. } => Vec::new(),
    }
  }
}
