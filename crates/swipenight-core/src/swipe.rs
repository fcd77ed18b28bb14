//! Swipe types — one member's immutable like/pass decision on one candidate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, movie::Movie};

/// The direction of a swipe. Right = like (a win for the movie),
/// Left = pass (a loss).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Right,
  Left,
}

impl Direction {
  /// The string stored in the `direction` column and accepted on the wire.
  pub fn as_str(self) -> &'static str {
    match self {
      Direction::Right => "right",
      Direction::Left => "left",
    }
  }

  /// Parse a wire/storage direction. Anything other than the two exact
  /// lowercase forms is a validation error.
  pub fn parse(s: &str) -> Result<Self> {
    match s {
      "right" => Ok(Direction::Right),
      "left" => Ok(Direction::Left),
      other => Err(Error::InvalidDirection(other.to_string())),
    }
  }
}

/// A recorded swipe. Immutable once created; at most one exists per
/// `(movie_id, member_id)` pair, enforced by the store's uniqueness
/// constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swipe {
  pub swipe_id:   Uuid,
  pub party_id:   Uuid,
  pub movie_id:   Uuid,
  pub member_id:  Uuid,
  pub direction:  Direction,
  pub created_at: DateTime<Utc>,
}

/// Result of [`crate::store::PartyStore::record_swipe`].
///
/// A duplicate submission is a success, not an error: the caller gets the
/// current movie snapshot and no rating update is re-applied.
#[derive(Debug, Clone)]
pub enum SwipeOutcome {
  /// First swipe by this member on this movie; the rating update was
  /// committed atomically with the swipe row.
  Recorded {
    swipe: Swipe,
    /// Post-update movie snapshot.
    movie: Movie,
    /// Sequence number assigned to the `MovieUpdated` event.
    sequence: u64,
    /// If this swipe completed the party, the sequence number assigned to
    /// the `PartyStatusChanged` event committed in the same transaction.
    completion: Option<u64>,
  },
  /// A swipe already existed for this `(movie, member)` pair. The stored
  /// state is untouched; `movie` is its current snapshot.
  AlreadyRecorded { movie: Movie },
}

impl SwipeOutcome {
  /// The current movie snapshot, whichever way the call went.
  pub fn movie(&self) -> &Movie {
    match self {
      SwipeOutcome::Recorded { movie, .. } => movie,
      SwipeOutcome::AlreadyRecorded { movie } => movie,
    }
  }

  pub fn is_duplicate(&self) -> bool {
    matches!(self, SwipeOutcome::AlreadyRecorded { .. })
  }
}
