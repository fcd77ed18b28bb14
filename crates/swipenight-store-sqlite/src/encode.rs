//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, UUIDs as hyphenated lowercase
//! strings, genre sets as compact JSON arrays. Decode failures indicate a
//! corrupted store and surface as [`Error::Storage`].

use chrono::{DateTime, Utc};
use swipenight_core::{
  Error, Result,
  movie::Movie,
  party::{Member, Party, PartyStatus},
  swipe::{Direction, Swipe},
};
use uuid::Uuid;

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> {
  Uuid::parse_str(s).map_err(|e| Error::Storage(format!("bad uuid {s:?}: {e}")))
}

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::Storage(format!("bad timestamp {s:?}: {e}")))
}

// ─── PartyStatus ─────────────────────────────────────────────────────────────

pub fn encode_status(s: PartyStatus) -> &'static str {
  match s {
    PartyStatus::Lobby => "lobby",
    PartyStatus::Swiping => "swiping",
    PartyStatus::Completed => "completed",
  }
}

pub fn decode_status(s: &str) -> Result<PartyStatus> {
  match s {
    "lobby" => Ok(PartyStatus::Lobby),
    "swiping" => Ok(PartyStatus::Swiping),
    "completed" => Ok(PartyStatus::Completed),
    other => Err(Error::Storage(format!("unknown party status: {other:?}"))),
  }
}

// ─── Direction ───────────────────────────────────────────────────────────────

pub fn decode_direction(s: &str) -> Result<Direction> {
  // Stored values come from Direction::as_str, so anything else is
  // corruption rather than caller input.
  Direction::parse(s)
    .map_err(|_| Error::Storage(format!("unknown direction: {s:?}")))
}

// ─── Genres ──────────────────────────────────────────────────────────────────

pub fn encode_genres(genres: &[String]) -> Result<String> {
  serde_json::to_string(genres)
    .map_err(|e| Error::Storage(format!("genre encode: {e}")))
}

pub fn decode_genres(s: &str) -> Result<Vec<String>> {
  serde_json::from_str(s)
    .map_err(|e| Error::Storage(format!("bad genres {s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `parties` row.
pub struct RawParty {
  pub party_id:   String,
  pub slug:       String,
  pub host_id:    String,
  pub status:     String,
  pub event_seq:  i64,
  pub created_at: String,
}

impl RawParty {
  pub fn into_party(self) -> Result<Party> {
    Ok(Party {
      party_id:   decode_uuid(&self.party_id)?,
      slug:       self.slug,
      host_id:    decode_uuid(&self.host_id)?,
      status:     decode_status(&self.status)?,
      event_seq:  self.event_seq as u64,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `members` row.
pub struct RawMember {
  pub member_id:                 String,
  pub party_id:                  String,
  pub display_name:              Option<String>,
  pub has_submitted_preferences: bool,
  pub joined_at:                 String,
}

impl RawMember {
  pub fn into_member(self) -> Result<Member> {
    Ok(Member {
      member_id:                 decode_uuid(&self.member_id)?,
      party_id:                  decode_uuid(&self.party_id)?,
      display_name:              self.display_name,
      has_submitted_preferences: self.has_submitted_preferences,
      joined_at:                 decode_dt(&self.joined_at)?,
    })
  }
}

/// Raw values read directly from a `movies` row.
pub struct RawMovie {
  pub movie_id:       String,
  pub party_id:       String,
  pub title:          String,
  pub genres:         String,
  pub rating:         f64,
  pub expected_score: f64,
  pub right_swipes:   i64,
  pub left_swipes:    i64,
}

impl RawMovie {
  pub fn into_movie(self) -> Result<Movie> {
    Ok(Movie {
      movie_id:       decode_uuid(&self.movie_id)?,
      party_id:       decode_uuid(&self.party_id)?,
      title:          self.title,
      genres:         decode_genres(&self.genres)?,
      rating:         self.rating,
      expected_score: self.expected_score,
      right_swipes:   self.right_swipes as u32,
      left_swipes:    self.left_swipes as u32,
    })
  }
}

/// Raw strings read directly from a `swipes` row.
pub struct RawSwipe {
  pub swipe_id:   String,
  pub party_id:   String,
  pub movie_id:   String,
  pub member_id:  String,
  pub direction:  String,
  pub created_at: String,
}

impl RawSwipe {
  pub fn into_swipe(self) -> Result<Swipe> {
    Ok(Swipe {
      swipe_id:   decode_uuid(&self.swipe_id)?,
      party_id:   decode_uuid(&self.party_id)?,
      movie_id:   decode_uuid(&self.movie_id)?,
      member_id:  decode_uuid(&self.member_id)?,
      direction:  decode_direction(&self.direction)?,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
