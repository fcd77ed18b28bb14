//! Error taxonomy for `swipenight-core`.
//!
//! Duplicate swipes are *not* represented here — a resubmitted swipe is a
//! successful no-op ([`crate::swipe::SwipeOutcome::AlreadyRecorded`]).

use thiserror::Error;
use uuid::Uuid;

use crate::party::PartyStatus;

#[derive(Debug, Error)]
pub enum Error {
  // ── Not found ─────────────────────────────────────────────────────────
  #[error("party not found: {0:?}")]
  PartyNotFound(String),

  #[error("member not found: {0}")]
  MemberNotFound(Uuid),

  #[error("movie not found: {0}")]
  MovieNotFound(Uuid),

  // ── State ─────────────────────────────────────────────────────────────
  #[error("party is {actual}, operation requires {expected}")]
  WrongStatus {
    expected: PartyStatus,
    actual:   PartyStatus,
  },

  #[error("candidate pool has already been generated")]
  PoolAlreadyGenerated,

  #[error("candidate pool must contain at least one movie")]
  EmptyPool,

  // ── Authorization ─────────────────────────────────────────────────────
  #[error("member {0} is not the party host")]
  NotHost(Uuid),

  // ── Validation ────────────────────────────────────────────────────────
  #[error("invalid swipe direction: {0:?} (expected \"right\" or \"left\")")]
  InvalidDirection(String),

  // ── Transient ─────────────────────────────────────────────────────────
  /// Storage or connection failure. Retryable by the caller; swipe retries
  /// are safe because the uniqueness constraint makes them idempotent.
  #[error("storage error: {0}")]
  Storage(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
