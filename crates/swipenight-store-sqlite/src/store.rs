//! [`SqliteStore`] — the SQLite implementation of [`PartyStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::{OptionalExtension as _, TransactionBehavior, params};
use uuid::Uuid;

use swipenight_core::{
  Error, Result,
  movie::{Movie, NewMovie, PoolGenerated},
  party::{Member, MemberProgress, Party, PartyProgress, PartyStatus},
  rating,
  store::PartyStore,
  swipe::{Direction, Swipe, SwipeOutcome},
};

use crate::{
  encode::{
    RawMember, RawMovie, RawParty, RawSwipe, encode_dt, encode_genres,
    encode_status, encode_uuid,
  },
  schema::SCHEMA,
};

// ─── Error helpers ───────────────────────────────────────────────────────────

/// Database failures are transient; callers may retry (swipe retries are
/// idempotent thanks to the uniqueness constraint).
fn db_err(e: tokio_rusqlite::Error) -> Error { Error::Storage(e.to_string()) }

fn sql_err(e: rusqlite::Error) -> Error { Error::Storage(e.to_string()) }

fn is_unique_violation(e: &rusqlite::Error) -> bool {
  matches!(
    e,
    rusqlite::Error::SqliteFailure(err, _)
      if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        || err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
  )
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Swipenight party store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. All writes
/// funnel through `BEGIN IMMEDIATE` transactions, so rating updates for a
/// movie apply one at a time in commit order without any in-process lock.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(db_err)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(db_err)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
      .map_err(db_err)
  }
}

// ─── Row queries (shared between transactions and plain reads) ───────────────

fn query_party(
  conn: &rusqlite::Connection,
  party_id: Uuid,
) -> Result<Option<Party>> {
  let raw: Option<RawParty> = conn
    .query_row(
      "SELECT party_id, slug, host_id, status, event_seq, created_at
       FROM parties WHERE party_id = ?1",
      params![encode_uuid(party_id)],
      |row| {
        Ok(RawParty {
          party_id:   row.get(0)?,
          slug:       row.get(1)?,
          host_id:    row.get(2)?,
          status:     row.get(3)?,
          event_seq:  row.get(4)?,
          created_at: row.get(5)?,
        })
      },
    )
    .optional()
    .map_err(sql_err)?;
  raw.map(RawParty::into_party).transpose()
}

fn require_party(conn: &rusqlite::Connection, party_id: Uuid) -> Result<Party> {
  query_party(conn, party_id)?
    .ok_or_else(|| Error::PartyNotFound(encode_uuid(party_id)))
}

/// Fetch a movie scoped to its party — a movie id from another party is
/// indistinguishable from an unknown one.
fn query_movie(
  conn: &rusqlite::Connection,
  party_id: Uuid,
  movie_id: Uuid,
) -> Result<Option<Movie>> {
  let raw: Option<RawMovie> = conn
    .query_row(
      "SELECT movie_id, party_id, title, genres, rating, expected_score,
              right_swipes, left_swipes
       FROM movies WHERE movie_id = ?1 AND party_id = ?2",
      params![encode_uuid(movie_id), encode_uuid(party_id)],
      |row| {
        Ok(RawMovie {
          movie_id:       row.get(0)?,
          party_id:       row.get(1)?,
          title:          row.get(2)?,
          genres:         row.get(3)?,
          rating:         row.get(4)?,
          expected_score: row.get(5)?,
          right_swipes:   row.get(6)?,
          left_swipes:    row.get(7)?,
        })
      },
    )
    .optional()
    .map_err(sql_err)?;
  raw.map(RawMovie::into_movie).transpose()
}

fn member_in_party(
  conn: &rusqlite::Connection,
  party_id: Uuid,
  member_id: Uuid,
) -> Result<bool> {
  let found: Option<i64> = conn
    .query_row(
      "SELECT 1 FROM members WHERE member_id = ?1 AND party_id = ?2",
      params![encode_uuid(member_id), encode_uuid(party_id)],
      |row| row.get(0),
    )
    .optional()
    .map_err(sql_err)?;
  Ok(found.is_some())
}

fn movie_row_mapper(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawMovie> {
  Ok(RawMovie {
    movie_id:       row.get(0)?,
    party_id:       row.get(1)?,
    title:          row.get(2)?,
    genres:         row.get(3)?,
    rating:         row.get(4)?,
    expected_score: row.get(5)?,
    right_swipes:   row.get(6)?,
    left_swipes:    row.get(7)?,
  })
}

// ─── The swipe transaction ───────────────────────────────────────────────────

/// Swipe insert, rating update, sequence assignment, and (when the swipe
/// finishes the party) the Swiping→Completed transition all commit together
/// or not at all.
///
/// The duplicate check deliberately runs before the status gate so that a
/// retry of the party-completing swipe still observes AlreadyRecorded
/// instead of a state error.
fn record_swipe_tx(
  conn:      &mut rusqlite::Connection,
  party_id:  Uuid,
  movie_id:  Uuid,
  member_id: Uuid,
  direction: Direction,
  swipe:     Swipe,
) -> Result<SwipeOutcome> {
  let tx = conn
    .transaction_with_behavior(TransactionBehavior::Immediate)
    .map_err(sql_err)?;

  let party = require_party(&tx, party_id)?;
  let movie = query_movie(&tx, party_id, movie_id)?
    .ok_or(Error::MovieNotFound(movie_id))?;
  if !member_in_party(&tx, party_id, member_id)? {
    return Err(Error::MemberNotFound(member_id));
  }

  let duplicate: Option<i64> = tx
    .query_row(
      "SELECT 1 FROM swipes WHERE movie_id = ?1 AND member_id = ?2",
      params![encode_uuid(movie_id), encode_uuid(member_id)],
      |row| row.get(0),
    )
    .optional()
    .map_err(sql_err)?;
  if duplicate.is_some() {
    // Dropping the transaction rolls it back; nothing was written.
    return Ok(SwipeOutcome::AlreadyRecorded { movie });
  }

  if party.status != PartyStatus::Swiping {
    return Err(Error::WrongStatus {
      expected: PartyStatus::Swiping,
      actual:   party.status,
    });
  }

  let inserted = tx.execute(
    "INSERT INTO swipes (swipe_id, party_id, movie_id, member_id, direction, created_at)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    params![
      encode_uuid(swipe.swipe_id),
      encode_uuid(party_id),
      encode_uuid(movie_id),
      encode_uuid(member_id),
      direction.as_str(),
      encode_dt(swipe.created_at),
    ],
  );
  if let Err(e) = inserted {
    // Race backstop: a concurrent writer committed between our duplicate
    // check and this insert. The constraint is the authority.
    if is_unique_violation(&e) {
      return Ok(SwipeOutcome::AlreadyRecorded { movie });
    }
    return Err(sql_err(e));
  }

  let update = rating::apply_swipe(movie.rating, direction);
  let (right_inc, left_inc) = match direction {
    Direction::Right => (1i64, 0i64),
    Direction::Left => (0, 1),
  };
  tx.execute(
    "UPDATE movies
     SET rating = ?1, expected_score = ?2,
         right_swipes = right_swipes + ?3, left_swipes = left_swipes + ?4
     WHERE movie_id = ?5",
    params![
      update.rating,
      update.expected,
      right_inc,
      left_inc,
      encode_uuid(movie_id)
    ],
  )
  .map_err(sql_err)?;

  let sequence: i64 = tx
    .query_row(
      "UPDATE parties SET event_seq = event_seq + 1
       WHERE party_id = ?1 RETURNING event_seq",
      params![encode_uuid(party_id)],
      |row| row.get(0),
    )
    .map_err(sql_err)?;

  // Completion check — accepted swipes only; a member is done when their
  // distinct swiped movies cover the whole pool.
  let pool: i64 = tx
    .query_row(
      "SELECT COUNT(*) FROM movies WHERE party_id = ?1",
      params![encode_uuid(party_id)],
      |row| row.get(0),
    )
    .map_err(sql_err)?;
  let total: i64 = tx
    .query_row(
      "SELECT COUNT(*) FROM members WHERE party_id = ?1",
      params![encode_uuid(party_id)],
      |row| row.get(0),
    )
    .map_err(sql_err)?;
  let done: i64 = tx
    .query_row(
      "SELECT COUNT(*) FROM members m
       WHERE m.party_id = ?1
         AND (SELECT COUNT(DISTINCT s.movie_id) FROM swipes s
              WHERE s.member_id = m.member_id) = ?2",
      params![encode_uuid(party_id), pool],
      |row| row.get(0),
    )
    .map_err(sql_err)?;

  let completion = if total > 0 && done == total {
    let seq: i64 = tx
      .query_row(
        "UPDATE parties SET status = 'completed', event_seq = event_seq + 1
         WHERE party_id = ?1 RETURNING event_seq",
        params![encode_uuid(party_id)],
        |row| row.get(0),
      )
      .map_err(sql_err)?;
    Some(seq as u64)
  } else {
    None
  };

  tx.commit().map_err(sql_err)?;

  let movie = Movie {
    rating: update.rating,
    expected_score: update.expected,
    right_swipes: movie.right_swipes + right_inc as u32,
    left_swipes: movie.left_swipes + left_inc as u32,
    ..movie
  };

  Ok(SwipeOutcome::Recorded {
    swipe,
    movie,
    sequence: sequence as u64,
    completion,
  })
}

// ─── Pool generation transaction ─────────────────────────────────────────────

fn generate_pool_tx(
  conn:     &mut rusqlite::Connection,
  party_id: Uuid,
  host_id:  Uuid,
  movies:   Vec<NewMovie>,
) -> Result<PoolGenerated> {
  let tx = conn
    .transaction_with_behavior(TransactionBehavior::Immediate)
    .map_err(sql_err)?;

  let party = require_party(&tx, party_id)?;
  if party.host_id != host_id {
    return Err(Error::NotHost(host_id));
  }
  if party.status != PartyStatus::Lobby {
    return Err(Error::PoolAlreadyGenerated);
  }

  let mut created = Vec::with_capacity(movies.len());
  for input in movies {
    let movie = Movie {
      movie_id:       Uuid::new_v4(),
      party_id,
      title:          input.title,
      genres:         input.genres,
      rating:         rating::BASELINE_RATING,
      expected_score: rating::BASELINE_EXPECTED,
      right_swipes:   0,
      left_swipes:    0,
    };
    tx.execute(
      "INSERT INTO movies (movie_id, party_id, title, genres, rating,
                           expected_score, right_swipes, left_swipes)
       VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, 0)",
      params![
        encode_uuid(movie.movie_id),
        encode_uuid(party_id),
        movie.title,
        encode_genres(&movie.genres)?,
        movie.rating,
        movie.expected_score,
      ],
    )
    .map_err(sql_err)?;
    created.push(movie);
  }

  let sequence: i64 = tx
    .query_row(
      "UPDATE parties SET status = 'swiping', event_seq = event_seq + 1
       WHERE party_id = ?1 RETURNING event_seq",
      params![encode_uuid(party_id)],
      |row| row.get(0),
    )
    .map_err(sql_err)?;

  tx.commit().map_err(sql_err)?;

  Ok(PoolGenerated { movies: created, sequence: sequence as u64 })
}

// ─── PartyStore impl ─────────────────────────────────────────────────────────

impl PartyStore for SqliteStore {
  // ── Parties & members ─────────────────────────────────────────────────────

  async fn create_party(
    &self,
    host_name: Option<String>,
  ) -> Result<(Party, Member)> {
    let now = Utc::now();
    let party_id = Uuid::new_v4();
    let host_id = Uuid::new_v4();
    // Eight hex characters of a fresh UUID; collisions hit the slug's
    // UNIQUE constraint and surface as a retryable storage error.
    let slug: String =
      Uuid::new_v4().simple().to_string().chars().take(8).collect();

    let party = Party {
      party_id,
      slug,
      host_id,
      status: PartyStatus::Lobby,
      event_seq: 0,
      created_at: now,
    };
    let host = Member {
      member_id: host_id,
      party_id,
      display_name: host_name,
      has_submitted_preferences: false,
      joined_at: now,
    };

    let p = party.clone();
    let m = host.clone();
    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO parties (party_id, slug, host_id, status, event_seq, created_at)
           VALUES (?1, ?2, ?3, ?4, 0, ?5)",
          params![
            encode_uuid(p.party_id),
            p.slug,
            encode_uuid(p.host_id),
            encode_status(p.status),
            encode_dt(p.created_at),
          ],
        )?;
        tx.execute(
          "INSERT INTO members (member_id, party_id, display_name,
                                has_submitted_preferences, joined_at)
           VALUES (?1, ?2, ?3, 0, ?4)",
          params![
            encode_uuid(m.member_id),
            encode_uuid(m.party_id),
            m.display_name,
            encode_dt(m.joined_at),
          ],
        )?;
        tx.commit()?;
        Ok(())
      })
      .await
      .map_err(db_err)?;

    Ok((party, host))
  }

  async fn get_party<'a>(&'a self, slug: &'a str) -> Result<Option<Party>> {
    let slug = slug.to_owned();
    self
      .conn
      .call(move |conn| {
        let raw: Option<RawParty> = conn
          .query_row(
            "SELECT party_id, slug, host_id, status, event_seq, created_at
             FROM parties WHERE slug = ?1",
            params![slug],
            |row| {
              Ok(RawParty {
                party_id:   row.get(0)?,
                slug:       row.get(1)?,
                host_id:    row.get(2)?,
                status:     row.get(3)?,
                event_seq:  row.get(4)?,
                created_at: row.get(5)?,
              })
            },
          )
          .optional()?;
        Ok(raw)
      })
      .await
      .map_err(db_err)?
      .map(RawParty::into_party)
      .transpose()
  }

  async fn join_party(
    &self,
    party_id: Uuid,
    display_name: Option<String>,
  ) -> Result<Member> {
    let member = Member {
      member_id: Uuid::new_v4(),
      party_id,
      display_name,
      has_submitted_preferences: false,
      joined_at: Utc::now(),
    };

    let m = member.clone();
    self
      .conn
      .call(move |conn| {
        Ok((|| {
          let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(sql_err)?;
          let party = require_party(&tx, m.party_id)?;
          if party.status != PartyStatus::Lobby {
            return Err(Error::WrongStatus {
              expected: PartyStatus::Lobby,
              actual:   party.status,
            });
          }
          tx.execute(
            "INSERT INTO members (member_id, party_id, display_name,
                                  has_submitted_preferences, joined_at)
             VALUES (?1, ?2, ?3, 0, ?4)",
            params![
              encode_uuid(m.member_id),
              encode_uuid(m.party_id),
              m.display_name,
              encode_dt(m.joined_at),
            ],
          )
          .map_err(sql_err)?;
          tx.commit().map_err(sql_err)
        })())
      })
      .await
      .map_err(db_err)??;

    Ok(member)
  }

  async fn list_members(&self, party_id: Uuid) -> Result<Vec<Member>> {
    let raws: Vec<RawMember> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT member_id, party_id, display_name,
                  has_submitted_preferences, joined_at
           FROM members WHERE party_id = ?1 ORDER BY joined_at, member_id",
        )?;
        let rows = stmt
          .query_map(params![encode_uuid(party_id)], |row| {
            Ok(RawMember {
              member_id:                 row.get(0)?,
              party_id:                  row.get(1)?,
              display_name:              row.get(2)?,
              has_submitted_preferences: row.get(3)?,
              joined_at:                 row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(db_err)?;

    raws.into_iter().map(RawMember::into_member).collect()
  }

  async fn mark_preferences_submitted(
    &self,
    party_id: Uuid,
    member_id: Uuid,
  ) -> Result<Member> {
    let raw: Option<RawMember> = self
      .conn
      .call(move |conn| {
        let raw = conn
          .query_row(
            "UPDATE members SET has_submitted_preferences = 1
             WHERE member_id = ?1 AND party_id = ?2
             RETURNING member_id, party_id, display_name,
                       has_submitted_preferences, joined_at",
            params![encode_uuid(member_id), encode_uuid(party_id)],
            |row| {
              Ok(RawMember {
                member_id:                 row.get(0)?,
                party_id:                  row.get(1)?,
                display_name:              row.get(2)?,
                has_submitted_preferences: row.get(3)?,
                joined_at:                 row.get(4)?,
              })
            },
          )
          .optional()?;
        Ok(raw)
      })
      .await
      .map_err(db_err)?;

    raw
      .ok_or(Error::MemberNotFound(member_id))?
      .into_member()
  }

  // ── Candidate pool ────────────────────────────────────────────────────────

  async fn generate_pool(
    &self,
    party_id: Uuid,
    host_id: Uuid,
    movies: Vec<NewMovie>,
  ) -> Result<PoolGenerated> {
    if movies.is_empty() {
      return Err(Error::EmptyPool);
    }
    self
      .conn
      .call(move |conn| Ok(generate_pool_tx(conn, party_id, host_id, movies)))
      .await
      .map_err(db_err)?
  }

  async fn list_movies(&self, party_id: Uuid) -> Result<Vec<Movie>> {
    let raws: Vec<RawMovie> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT movie_id, party_id, title, genres, rating, expected_score,
                  right_swipes, left_swipes
           FROM movies WHERE party_id = ?1",
        )?;
        let rows = stmt
          .query_map(params![encode_uuid(party_id)], movie_row_mapper)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(db_err)?;

    raws.into_iter().map(RawMovie::into_movie).collect()
  }

  // ── Swipes ────────────────────────────────────────────────────────────────

  async fn record_swipe(
    &self,
    party_id: Uuid,
    movie_id: Uuid,
    member_id: Uuid,
    direction: Direction,
  ) -> Result<SwipeOutcome> {
    let swipe = Swipe {
      swipe_id: Uuid::new_v4(),
      party_id,
      movie_id,
      member_id,
      direction,
      created_at: Utc::now(),
    };
    self
      .conn
      .call(move |conn| {
        Ok(record_swipe_tx(conn, party_id, movie_id, member_id, direction, swipe))
      })
      .await
      .map_err(db_err)?
  }

  async fn member_swipes(
    &self,
    party_id: Uuid,
    member_id: Uuid,
  ) -> Result<Vec<Swipe>> {
    let raws: Vec<RawSwipe> = self
      .conn
      .call(move |conn| {
        if !member_in_party(conn, party_id, member_id)
          .map_err(|e| tokio_rusqlite::Error::Other(Box::new(e)))?
        {
          return Err(tokio_rusqlite::Error::Other(Box::new(
            Error::MemberNotFound(member_id),
          )));
        }
        let mut stmt = conn.prepare(
          "SELECT swipe_id, party_id, movie_id, member_id, direction, created_at
           FROM swipes WHERE party_id = ?1 AND member_id = ?2
           ORDER BY created_at, swipe_id",
        )?;
        let rows = stmt
          .query_map(
            params![encode_uuid(party_id), encode_uuid(member_id)],
            |row| {
              Ok(RawSwipe {
                swipe_id:   row.get(0)?,
                party_id:   row.get(1)?,
                movie_id:   row.get(2)?,
                member_id:  row.get(3)?,
                direction:  row.get(4)?,
                created_at: row.get(5)?,
              })
            },
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(|e| match e {
        tokio_rusqlite::Error::Other(inner) => match inner.downcast::<Error>() {
          Ok(core) => *core,
          Err(other) => Error::Storage(other.to_string()),
        },
        other => db_err(other),
      })?;

    raws.into_iter().map(RawSwipe::into_swipe).collect()
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn rankings(&self, party_id: Uuid) -> Result<Vec<Movie>> {
    let raws: Vec<RawMovie> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT movie_id, party_id, title, genres, rating, expected_score,
                  right_swipes, left_swipes
           FROM movies WHERE party_id = ?1
           ORDER BY rating DESC,
                    (right_swipes - left_swipes) DESC,
                    title COLLATE NOCASE ASC,
                    movie_id ASC",
        )?;
        let rows = stmt
          .query_map(params![encode_uuid(party_id)], movie_row_mapper)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await
      .map_err(db_err)?;

    raws.into_iter().map(RawMovie::into_movie).collect()
  }

  async fn progress(&self, party_id: Uuid) -> Result<PartyProgress> {
    type Row = (RawMember, i64);
    let (status_str, pool, rows): (String, i64, Vec<Row>) = self
      .conn
      .call(move |conn| {
        let status: Option<String> = conn
          .query_row(
            "SELECT status FROM parties WHERE party_id = ?1",
            params![encode_uuid(party_id)],
            |row| row.get(0),
          )
          .optional()?;
        let Some(status) = status else {
          return Err(tokio_rusqlite::Error::Other(Box::new(
            Error::PartyNotFound(encode_uuid(party_id)),
          )));
        };

        let pool: i64 = conn.query_row(
          "SELECT COUNT(*) FROM movies WHERE party_id = ?1",
          params![encode_uuid(party_id)],
          |row| row.get(0),
        )?;

        let mut stmt = conn.prepare(
          "SELECT m.member_id, m.party_id, m.display_name,
                  m.has_submitted_preferences, m.joined_at,
                  (SELECT COUNT(DISTINCT s.movie_id) FROM swipes s
                   WHERE s.member_id = m.member_id) AS swiped
           FROM members m WHERE m.party_id = ?1
           ORDER BY m.joined_at, m.member_id",
        )?;
        let rows = stmt
          .query_map(params![encode_uuid(party_id)], |row| {
            Ok((
              RawMember {
                member_id:                 row.get(0)?,
                party_id:                  row.get(1)?,
                display_name:              row.get(2)?,
                has_submitted_preferences: row.get(3)?,
                joined_at:                 row.get(4)?,
              },
              row.get::<_, i64>(5)?,
            ))
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((status, pool, rows))
      })
      .await
      .map_err(|e| match e {
        tokio_rusqlite::Error::Other(inner) => match inner.downcast::<Error>() {
          Ok(core) => *core,
          Err(other) => Error::Storage(other.to_string()),
        },
        other => db_err(other),
      })?;

    let status = crate::encode::decode_status(&status_str)?;
    let total_members = rows.len() as u32;

    let members: Vec<MemberProgress> = rows
      .into_iter()
      .map(|(raw, swiped)| {
        let member = raw.into_member()?;
        Ok(MemberProgress {
          member,
          swiped: swiped as u32,
          done: pool > 0 && swiped >= pool,
        })
      })
      .collect::<Result<_>>()?;

    let done_members = members.iter().filter(|m| m.done).count() as u32;

    Ok(PartyProgress {
      status,
      pool_size: pool as u32,
      done_members,
      total_members,
      members,
    })
  }
}
