//! Handlers for the candidate pool endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/party/{slug}/movies` | Host only; generates the pool once |
//! | `GET`  | `/party/{slug}/movies` | Current pool with live rating state |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use swipenight_core::{
  events::PartyEvent,
  movie::Movie,
  party::PartyStatus,
  store::PartyStore,
};
use uuid::Uuid;

use crate::{AppState, error::ApiError, resolve_party};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBody {
  pub user_id: Uuid,
}

/// `POST /party/{slug}/movies` — pull candidates from the recommendation
/// source and generate the pool, transitioning the party to Swiping.
pub async fn generate<S>(
  State(state): State<AppState<S>>,
  Path(slug): Path<String>,
  Json(body): Json<GenerateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PartyStore + Clone + Send + Sync + 'static,
{
  let party = resolve_party(&*state.store, &slug).await?;

  let candidates = state
    .source
    .candidates(party.party_id)
    .await
    .map_err(|e| ApiError::Upstream(format!("recommendation source: {e}")))?;

  let generated = state
    .store
    .generate_pool(party.party_id, body.user_id, candidates)
    .await?;

  tracing::info!(
    party = %party.party_id,
    pool_size = generated.movies.len(),
    "pool generated"
  );
  state.channels.publish(
    party.party_id,
    &[PartyEvent::PartyStatusChanged {
      status:   PartyStatus::Swiping,
      sequence: generated.sequence,
    }],
  );

  Ok((StatusCode::CREATED, Json(generated)))
}

/// `GET /party/{slug}/movies`
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Path(slug): Path<String>,
) -> Result<Json<Vec<Movie>>, ApiError>
where
  S: PartyStore + Clone + Send + Sync + 'static,
{
  let party = resolve_party(&*state.store, &slug).await?;
  let movies = state.store.list_movies(party.party_id).await?;
  Ok(Json(movies))
}
