//! SQL schema for the Swipenight SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS parties (
    party_id   TEXT PRIMARY KEY,
    slug       TEXT NOT NULL UNIQUE,
    host_id    TEXT NOT NULL,   -- member_id of the host; the member row is
                                -- inserted in the same transaction, so no
                                -- forward FK is declared
    status     TEXT NOT NULL DEFAULT 'lobby',   -- 'lobby'|'swiping'|'completed'
    event_seq  INTEGER NOT NULL DEFAULT 0,      -- per-party realtime sequence
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS members (
    member_id                 TEXT PRIMARY KEY,
    party_id                  TEXT NOT NULL REFERENCES parties(party_id),
    display_name              TEXT,
    has_submitted_preferences INTEGER NOT NULL DEFAULT 0,
    joined_at                 TEXT NOT NULL
);

-- Pool membership is immutable after generation; only rating,
-- expected_score and the two counters are ever updated.
CREATE TABLE IF NOT EXISTS movies (
    movie_id       TEXT PRIMARY KEY,
    party_id       TEXT NOT NULL REFERENCES parties(party_id),
    title          TEXT NOT NULL,
    genres         TEXT NOT NULL DEFAULT '[]',  -- JSON array of strings
    rating         REAL NOT NULL DEFAULT 1500.0,
    expected_score REAL NOT NULL DEFAULT 0.5,
    right_swipes   INTEGER NOT NULL DEFAULT 0,
    left_swipes    INTEGER NOT NULL DEFAULT 0
);

-- Swipes are strictly append-only.
-- The UNIQUE constraint is the idempotency authority: a losing racer hits
-- it and is reported as AlreadyRecorded.
CREATE TABLE IF NOT EXISTS swipes (
    swipe_id   TEXT PRIMARY KEY,
    party_id   TEXT NOT NULL REFERENCES parties(party_id),
    movie_id   TEXT NOT NULL REFERENCES movies(movie_id),
    member_id  TEXT NOT NULL REFERENCES members(member_id),
    direction  TEXT NOT NULL,   -- 'right' | 'left'
    created_at TEXT NOT NULL,
    UNIQUE (movie_id, member_id)
);

CREATE INDEX IF NOT EXISTS members_party_idx ON members(party_id);
CREATE INDEX IF NOT EXISTS movies_party_idx  ON movies(party_id);
CREATE INDEX IF NOT EXISTS swipes_party_idx  ON swipes(party_id);
CREATE INDEX IF NOT EXISTS swipes_member_idx ON swipes(member_id);

PRAGMA user_version = 1;
";
