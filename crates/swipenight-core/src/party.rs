//! Party and member types.
//!
//! A party is a group session with a shared candidate pool. Its status only
//! ever moves forward: Lobby → Swiping → Completed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a party. Monotonic — there are no reverse
/// transitions. Lobby→Swiping happens when the pool is generated,
/// Swiping→Completed when every member has swiped the whole pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyStatus {
  Lobby,
  Swiping,
  Completed,
}

impl std::fmt::Display for PartyStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let s = match self {
      PartyStatus::Lobby => "lobby",
      PartyStatus::Swiping => "swiping",
      PartyStatus::Completed => "completed",
    };
    f.write_str(s)
  }
}

/// A group session. `event_seq` is the party-scoped monotone counter from
/// which realtime event sequence numbers are assigned at commit time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
  pub party_id:   Uuid,
  pub slug:       String,
  pub host_id:    Uuid,
  pub status:     PartyStatus,
  pub event_seq:  u64,
  pub created_at: DateTime<Utc>,
}

/// A participant in a party, identified by an opaque id.
///
/// `has_submitted_preferences` is an intake marker checked by host UIs
/// before starting the swipe phase; the swipe core itself never gates on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
  pub member_id:                 Uuid,
  pub party_id:                  Uuid,
  pub display_name:              Option<String>,
  pub has_submitted_preferences: bool,
  pub joined_at:                 DateTime<Utc>,
}

// ─── Completion tracking ─────────────────────────────────────────────────────

/// One member's swipe progress. `done` when the member has swiped every
/// movie in the party's candidate pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberProgress {
  pub member: Member,
  /// Distinct movies this member has swiped.
  pub swiped: u32,
  pub done:   bool,
}

/// Party-wide completion snapshot, derived entirely from swipe counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyProgress {
  pub status:        PartyStatus,
  pub pool_size:     u32,
  pub done_members:  u32,
  pub total_members: u32,
  pub members:       Vec<MemberProgress>,
}
