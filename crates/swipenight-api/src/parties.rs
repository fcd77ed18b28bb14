//! Handlers for party lifecycle and membership endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/party` | Body: `{"hostName":"..."}`, both optional |
//! | `GET`  | `/party/{slug}` | Party plus member roster |
//! | `POST` | `/party/{slug}/join` | Lobby only |
//! | `POST` | `/party/{slug}/preferences` | Body: `{"userId":"..."}` |
//! | `GET`  | `/party/{slug}/status` | Completion progress |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use swipenight_core::{
  party::{Member, Party, PartyProgress},
  store::PartyStore,
};
use uuid::Uuid;

use crate::{AppState, error::ApiError, resolve_party};

// ─── Create ──────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBody {
  pub host_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedParty {
  pub party: Party,
  pub host:  Member,
}

/// `POST /party` — create a party with its host member.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  body: Option<Json<CreateBody>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PartyStore + Clone + Send + Sync + 'static,
{
  let body = body.map(|Json(b)| b).unwrap_or_default();
  let (party, host) = state.store.create_party(body.host_name).await?;
  tracing::info!(party = %party.party_id, slug = %party.slug, "party created");
  Ok((StatusCode::CREATED, Json(CreatedParty { party, host })))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PartyWithMembers {
  pub party:   Party,
  pub members: Vec<Member>,
}

/// `GET /party/{slug}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(slug): Path<String>,
) -> Result<Json<PartyWithMembers>, ApiError>
where
  S: PartyStore + Clone + Send + Sync + 'static,
{
  let party = resolve_party(&*state.store, &slug).await?;
  let members = state.store.list_members(party.party_id).await?;
  Ok(Json(PartyWithMembers { party, members }))
}

// ─── Join ────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinBody {
  pub display_name: Option<String>,
}

/// `POST /party/{slug}/join` — 409 once the party has left Lobby.
pub async fn join<S>(
  State(state): State<AppState<S>>,
  Path(slug): Path<String>,
  body: Option<Json<JoinBody>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PartyStore + Clone + Send + Sync + 'static,
{
  let party = resolve_party(&*state.store, &slug).await?;
  let body = body.map(|Json(b)| b).unwrap_or_default();
  let member = state
    .store
    .join_party(party.party_id, body.display_name)
    .await?;
  tracing::info!(party = %party.party_id, member = %member.member_id, "member joined");
  Ok((StatusCode::CREATED, Json(member)))
}

// ─── Preferences intake ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesBody {
  pub user_id: Uuid,
}

/// `POST /party/{slug}/preferences` — mark a member's intake as submitted.
/// The preference content itself lives with the recommendation source.
pub async fn preferences<S>(
  State(state): State<AppState<S>>,
  Path(slug): Path<String>,
  Json(body): Json<PreferencesBody>,
) -> Result<Json<Member>, ApiError>
where
  S: PartyStore + Clone + Send + Sync + 'static,
{
  let party = resolve_party(&*state.store, &slug).await?;
  let member = state
    .store
    .mark_preferences_submitted(party.party_id, body.user_id)
    .await?;
  Ok(Json(member))
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// `GET /party/{slug}/status` — completion progress for the host UI.
pub async fn status<S>(
  State(state): State<AppState<S>>,
  Path(slug): Path<String>,
) -> Result<Json<PartyProgress>, ApiError>
where
  S: PartyStore + Clone + Send + Sync + 'static,
{
  let party = resolve_party(&*state.store, &slug).await?;
  let progress = state.store.progress(party.party_id).await?;
  Ok(Json(progress))
}
