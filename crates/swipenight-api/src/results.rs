//! Handler for the ranked results endpoint.

use axum::{
  Json,
  extract::{Path, State},
};
use serde::Serialize;
use swipenight_core::{movie::Movie, store::PartyStore};
use uuid::Uuid;

use crate::{AppState, error::ApiError, resolve_party};

/// One row of the ranked results, in the wire shape result screens consume.
#[derive(Debug, Serialize)]
pub struct RankedMovie {
  pub id:           Uuid,
  pub title:        String,
  pub genres:       Vec<String>,
  pub elo_rating:   f64,
  pub right_swipes: u32,
  pub left_swipes:  u32,
}

impl From<Movie> for RankedMovie {
  fn from(m: Movie) -> Self {
    RankedMovie {
      id:           m.movie_id,
      title:        m.title,
      genres:       m.genres,
      elo_rating:   m.rating,
      right_swipes: m.right_swipes,
      left_swipes:  m.left_swipes,
    }
  }
}

/// `GET /party/{slug}/results` — the full pool ranked best-first.
///
/// Readable at any point in the party's life; the ordering is only final
/// once the party has completed.
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Path(slug): Path<String>,
) -> Result<Json<Vec<RankedMovie>>, ApiError>
where
  S: PartyStore + Clone + Send + Sync + 'static,
{
  let party = resolve_party(&*state.store, &slug).await?;
  let ranked = state.store.rankings(party.party_id).await?;
  Ok(Json(ranked.into_iter().map(RankedMovie::from).collect()))
}
