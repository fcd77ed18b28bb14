//! Candidate movies — the items of a party's fixed swipeable pool.
//!
//! Pool membership is immutable once generated; only the rating, the swipe
//! counters, and the derived expected score ever change.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A candidate in a party's pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
  pub movie_id:       Uuid,
  pub party_id:       Uuid,
  pub title:          String,
  pub genres:         Vec<String>,
  /// Running preference score; starts at [`crate::rating::BASELINE_RATING`].
  pub rating:         f64,
  /// Pre-update win probability computed immediately before the most
  /// recently applied swipe; 0.5 while the movie has no swipes.
  pub expected_score: f64,
  pub right_swipes:   u32,
  pub left_swipes:    u32,
}

/// Input to pool generation — title and genres come from the external
/// recommendation source; everything else starts at the baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMovie {
  pub title:  String,
  #[serde(default)]
  pub genres: Vec<String>,
}

impl NewMovie {
  pub fn new(title: impl Into<String>, genres: Vec<String>) -> Self {
    Self { title: title.into(), genres }
  }
}

/// The pool as created by a Lobby→Swiping transition, together with the
/// sequence number assigned to the accompanying status-change event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolGenerated {
  pub movies:   Vec<Movie>,
  pub sequence: u64,
}
