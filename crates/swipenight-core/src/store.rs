//! The `PartyStore` trait — the durable-storage boundary.
//!
//! Implemented by storage backends (e.g. `swipenight-store-sqlite`); the
//! HTTP layer depends on this abstraction, not on any concrete backend.
//!
//! All methods return [`crate::Error`] directly rather than a
//! backend-specific associated type: the HTTP layer must map the error
//! taxonomy onto status codes, which it could not do through an opaque
//! `Self::Error`. Backends fold their internal failures into
//! [`crate::Error::Storage`].

use std::future::Future;

use uuid::Uuid;

use crate::{
  Result,
  movie::{Movie, NewMovie, PoolGenerated},
  party::{Member, Party, PartyProgress},
  swipe::{Direction, Swipe, SwipeOutcome},
};

/// Abstraction over a Swipenight party store backend.
///
/// Swipes are append-only; candidate pool membership is immutable once
/// generated; party status moves only forward. All methods return `Send`
/// futures so the trait can be used in multi-threaded async runtimes.
pub trait PartyStore: Send + Sync {
  // ── Parties & members ─────────────────────────────────────────────────

  /// Create a party in Lobby status together with its host member.
  /// The slug is generated by the store and unique.
  fn create_party(
    &self,
    host_name: Option<String>,
  ) -> impl Future<Output = Result<(Party, Member)>> + Send + '_;

  /// Look up a party by slug. Returns `None` if unknown.
  fn get_party<'a>(
    &'a self,
    slug: &'a str,
  ) -> impl Future<Output = Result<Option<Party>>> + Send + 'a;

  /// Add a member to a party. Only possible while the party is in Lobby —
  /// the pool is fixed at generation time, so later joiners could never
  /// complete it.
  fn join_party(
    &self,
    party_id: Uuid,
    display_name: Option<String>,
  ) -> impl Future<Output = Result<Member>> + Send + '_;

  /// All members of a party, in join order.
  fn list_members(
    &self,
    party_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Member>>> + Send + '_;

  /// Flag a member's pre-swiping intake as submitted. The flag is read by
  /// host UIs; the swipe path never consults it.
  fn mark_preferences_submitted(
    &self,
    party_id: Uuid,
    member_id: Uuid,
  ) -> impl Future<Output = Result<Member>> + Send + '_;

  // ── Candidate pool ────────────────────────────────────────────────────

  /// Create the candidate pool in bulk and transition Lobby→Swiping.
  ///
  /// Host-only. Fails with [`crate::Error::PoolAlreadyGenerated`] if the
  /// party has left Lobby, and [`crate::Error::EmptyPool`] for an empty
  /// candidate list.
  fn generate_pool(
    &self,
    party_id: Uuid,
    host_id: Uuid,
    movies: Vec<NewMovie>,
  ) -> impl Future<Output = Result<PoolGenerated>> + Send + '_;

  /// All candidates of a party, unordered.
  fn list_movies(
    &self,
    party_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Movie>>> + Send + '_;

  // ── Swipes ────────────────────────────────────────────────────────────

  /// Record one member's swipe on one candidate.
  ///
  /// Preconditions: party is Swiping, the movie belongs to the party, the
  /// member belongs to the party. The swipe row, the rating update, the
  /// event sequence assignment, and (when this swipe completes the party)
  /// the Swiping→Completed transition commit as one atomic unit.
  ///
  /// If a swipe already exists for `(movie_id, member_id)` the call
  /// succeeds with [`SwipeOutcome::AlreadyRecorded`] and changes nothing.
  fn record_swipe(
    &self,
    party_id: Uuid,
    movie_id: Uuid,
    member_id: Uuid,
    direction: Direction,
  ) -> impl Future<Output = Result<SwipeOutcome>> + Send + '_;

  /// A member's previously recorded swipes, for client rehydration.
  fn member_swipes(
    &self,
    party_id: Uuid,
    member_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Swipe>>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Candidates ordered by rating descending, then net right swipes
  /// descending, then title (case-insensitive) ascending. Stable absent
  /// intervening writes.
  fn rankings(
    &self,
    party_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Movie>>> + Send + '_;

  /// Per-member and party-wide completion, derived from swipe counts.
  fn progress(
    &self,
    party_id: Uuid,
  ) -> impl Future<Output = Result<PartyProgress>> + Send + '_;
}
