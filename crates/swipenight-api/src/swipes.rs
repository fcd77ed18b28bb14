//! Handlers for swipe recording and rehydration.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/party/{slug}/swipes` | 201 recorded, 200 duplicate |
//! | `GET`  | `/party/{slug}/swipes?userId=` | A member's recorded swipes |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use swipenight_core::{
  events::PartyEvent,
  movie::Movie,
  store::PartyStore,
  swipe::{Direction, Swipe, SwipeOutcome},
};
use uuid::Uuid;

use crate::{AppState, error::ApiError, resolve_party};

// ─── Record ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeBody {
  pub movie_id:  Uuid,
  pub user_id:   Uuid,
  /// `"right"` or `"left"`; validated before the store is touched.
  pub direction: String,
}

#[derive(Debug, Serialize)]
pub struct SwipeResponse {
  pub status:   &'static str,
  pub movie:    Movie,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sequence: Option<u64>,
}

/// `POST /party/{slug}/swipes`
///
/// Duplicates are a success: the response carries the current movie snapshot
/// either way, so clients can retry blindly. Realtime events are published
/// only for the accepted recording.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Path(slug): Path<String>,
  Json(body): Json<SwipeBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PartyStore + Clone + Send + Sync + 'static,
{
  let direction = Direction::parse(&body.direction)?;
  let party = resolve_party(&*state.store, &slug).await?;

  let outcome = state
    .store
    .record_swipe(party.party_id, body.movie_id, body.user_id, direction)
    .await?;

  state
    .channels
    .publish(party.party_id, &PartyEvent::from_outcome(&outcome));

  match outcome {
    SwipeOutcome::Recorded { movie, sequence, completion, .. } => {
      tracing::info!(
        party = %party.party_id,
        movie = %movie.movie_id,
        member = %body.user_id,
        direction = %body.direction,
        "swipe recorded"
      );
      if completion.is_some() {
        tracing::info!(party = %party.party_id, "party completed");
      }
      Ok((
        StatusCode::CREATED,
        Json(SwipeResponse {
          status:   "recorded",
          movie,
          sequence: Some(sequence),
        }),
      ))
    },
    SwipeOutcome::AlreadyRecorded { movie } => Ok((
      StatusCode::OK,
      Json(SwipeResponse { status: "already_recorded", movie, sequence: None }),
    )),
  }
}

// ─── Rehydration ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
  pub user_id: Uuid,
}

/// `GET /party/{slug}/swipes?userId=<uuid>`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Path(slug): Path<String>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Swipe>>, ApiError>
where
  S: PartyStore + Clone + Send + Sync + 'static,
{
  let party = resolve_party(&*state.store, &slug).await?;
  let swipes = state
    .store
    .member_swipes(party.party_id, params.user_id)
    .await?;
  Ok(Json(swipes))
}
