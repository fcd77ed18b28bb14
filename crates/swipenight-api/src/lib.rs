//! JSON REST + SSE API for Swipenight.
//!
//! Exposes an axum [`Router`] backed by any
//! [`swipenight_core::store::PartyStore`]. Identity is an opaque member id
//! carried by clients; auth, TLS, and transport concerns are the caller's
//! responsibility.

pub mod error;
pub mod movies;
pub mod parties;
pub mod realtime;
pub mod recommend;
pub mod results;
pub mod swipes;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use serde::Deserialize;
use swipenight_core::{party::Party, store::PartyStore};

pub use error::ApiError;
pub use realtime::PartyChannels;
pub use recommend::{RecommendationSource, StaticCatalog};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` plus
/// `SWIPENIGHT_*` environment overrides.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: PartyStore> {
  pub store:    Arc<S>,
  pub channels: PartyChannels,
  pub source:   Arc<dyn RecommendationSource>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] for the Swipenight API.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: PartyStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/party", post(parties::create::<S>))
    .route("/party/{slug}", get(parties::get_one::<S>))
    .route("/party/{slug}/join", post(parties::join::<S>))
    .route("/party/{slug}/preferences", post(parties::preferences::<S>))
    .route(
      "/party/{slug}/movies",
      get(movies::list::<S>).post(movies::generate::<S>),
    )
    .route(
      "/party/{slug}/swipes",
      get(swipes::list::<S>).post(swipes::create::<S>),
    )
    .route("/party/{slug}/results", get(results::list::<S>))
    .route("/party/{slug}/status", get(parties::status::<S>))
    .route("/party/{slug}/events", get(realtime::stream::<S>))
    .with_state(state)
}

// ─── Slug resolution ──────────────────────────────────────────────────────────

/// Resolve a URL slug to its party, 404 if unknown.
pub(crate) async fn resolve_party<S: PartyStore>(
  store: &S,
  slug: &str,
) -> Result<Party, ApiError> {
  store
    .get_party(slug)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("party {slug:?} not found")))
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use serde_json::{Value, json};
  use swipenight_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;
  use uuid::Uuid;

  async fn make_state() -> AppState<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    AppState {
      store:    Arc::new(store),
      channels: PartyChannels::default(),
      source:   Arc::new(StaticCatalog),
    }
  }

  async fn send(
    state: &AppState<SqliteStore>,
    method: &str,
    uri: &str,
    body: Option<Value>,
  ) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(v) => {
        builder = builder.header("content-type", "application/json");
        Body::from(v.to_string())
      },
      None => Body::empty(),
    };
    let resp = router(state.clone())
      .oneshot(builder.body(body).unwrap())
      .await
      .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let value = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
  }

  /// Create a party and return `(slug, host_id)`.
  async fn make_party(state: &AppState<SqliteStore>) -> (String, String) {
    let (status, body) =
      send(state, "POST", "/party", Some(json!({"hostName": "host"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    (
      body["party"]["slug"].as_str().unwrap().to_string(),
      body["host"]["member_id"].as_str().unwrap().to_string(),
    )
  }

  // ── Party lifecycle ─────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_then_fetch_party() {
    let state = make_state().await;
    let (slug, host_id) = make_party(&state).await;

    let (status, body) = send(&state, "GET", &format!("/party/{slug}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["party"]["status"], "lobby");
    assert_eq!(body["members"][0]["member_id"], host_id.as_str());
    assert_eq!(body["members"][0]["display_name"], "host");
  }

  #[tokio::test]
  async fn unknown_slug_is_404() {
    let state = make_state().await;
    let (status, body) = send(&state, "GET", "/party/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
  }

  #[tokio::test]
  async fn join_and_preferences() {
    let state = make_state().await;
    let (slug, _) = make_party(&state).await;

    let (status, member) = send(
      &state,
      "POST",
      &format!("/party/{slug}/join"),
      Some(json!({"displayName": "guest"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let member_id = member["member_id"].as_str().unwrap().to_string();
    assert_eq!(member["has_submitted_preferences"], false);

    let (status, updated) = send(
      &state,
      "POST",
      &format!("/party/{slug}/preferences"),
      Some(json!({"userId": member_id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["has_submitted_preferences"], true);
  }

  // ── Pool generation ─────────────────────────────────────────────────────

  #[tokio::test]
  async fn host_generates_pool_once() {
    let state = make_state().await;
    let (slug, host_id) = make_party(&state).await;

    let (status, body) = send(
      &state,
      "POST",
      &format!("/party/{slug}/movies"),
      Some(json!({"userId": host_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let movies = body["movies"].as_array().unwrap();
    assert!(!movies.is_empty());
    assert_eq!(movies[0]["rating"], 1500.0);

    // A second attempt conflicts.
    let (status, _) = send(
      &state,
      "POST",
      &format!("/party/{slug}/movies"),
      Some(json!({"userId": host_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
  }

  #[tokio::test]
  async fn non_host_cannot_generate() {
    let state = make_state().await;
    let (slug, _) = make_party(&state).await;
    let (_, member) = send(
      &state,
      "POST",
      &format!("/party/{slug}/join"),
      Some(json!({})),
    )
    .await;

    let (status, _) = send(
      &state,
      "POST",
      &format!("/party/{slug}/movies"),
      Some(json!({"userId": member["member_id"]})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
  }

  // ── Swipes ──────────────────────────────────────────────────────────────

  /// Party with a generated pool; returns `(slug, host_id, movie_ids)`.
  async fn swiping_party(
    state: &AppState<SqliteStore>,
  ) -> (String, String, Vec<String>) {
    let (slug, host_id) = make_party(state).await;
    let (status, body) = send(
      state,
      "POST",
      &format!("/party/{slug}/movies"),
      Some(json!({"userId": host_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let ids = body["movies"]
      .as_array()
      .unwrap()
      .iter()
      .map(|m| m["movie_id"].as_str().unwrap().to_string())
      .collect();
    (slug, host_id, ids)
  }

  #[tokio::test]
  async fn swipe_then_duplicate() {
    let state = make_state().await;
    let (slug, host_id, movies) = swiping_party(&state).await;

    let (status, body) = send(
      &state,
      "POST",
      &format!("/party/{slug}/swipes"),
      Some(json!({
        "movieId":   movies[0],
        "userId":    host_id,
        "direction": "right",
      })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "recorded");
    assert_eq!(body["movie"]["rating"], 1516.0);
    assert!(body["sequence"].is_u64());

    // Retrying the same swipe is a 200 no-op with the same snapshot.
    let (status, body) = send(
      &state,
      "POST",
      &format!("/party/{slug}/swipes"),
      Some(json!({
        "movieId":   movies[0],
        "userId":    host_id,
        "direction": "left",
      })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "already_recorded");
    assert_eq!(body["movie"]["rating"], 1516.0);
    assert!(body.get("sequence").is_none());
  }

  #[tokio::test]
  async fn invalid_direction_is_400() {
    let state = make_state().await;
    let (slug, host_id, movies) = swiping_party(&state).await;

    let (status, _) = send(
      &state,
      "POST",
      &format!("/party/{slug}/swipes"),
      Some(json!({
        "movieId":   movies[0],
        "userId":    host_id,
        "direction": "up",
      })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn unknown_movie_is_404() {
    let state = make_state().await;
    let (slug, host_id, _) = swiping_party(&state).await;

    let (status, _) = send(
      &state,
      "POST",
      &format!("/party/{slug}/swipes"),
      Some(json!({
        "movieId":   Uuid::new_v4(),
        "userId":    host_id,
        "direction": "right",
      })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn swipe_list_rehydrates_a_member() {
    let state = make_state().await;
    let (slug, host_id, movies) = swiping_party(&state).await;

    for (movie, dir) in [(&movies[0], "right"), (&movies[1], "left")] {
      let (status, _) = send(
        &state,
        "POST",
        &format!("/party/{slug}/swipes"),
        Some(json!({"movieId": movie, "userId": host_id, "direction": dir})),
      )
      .await;
      assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(
      &state,
      "GET",
      &format!("/party/{slug}/swipes?userId={host_id}"),
      None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let swipes = body.as_array().unwrap();
    assert_eq!(swipes.len(), 2);
    assert!(swipes.iter().any(|s| s["direction"] == "right"));
    assert!(swipes.iter().any(|s| s["direction"] == "left"));
  }

  // ── Results & status ────────────────────────────────────────────────────

  #[tokio::test]
  async fn results_rank_swiped_movies_first() {
    let state = make_state().await;
    let (slug, host_id, movies) = swiping_party(&state).await;

    let (status, _) = send(
      &state,
      "POST",
      &format!("/party/{slug}/swipes"),
      Some(json!({
        "movieId":   movies[3],
        "userId":    host_id,
        "direction": "right",
      })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) =
      send(&state, "GET", &format!("/party/{slug}/results"), None).await;
    assert_eq!(status, StatusCode::OK);
    let ranked = body.as_array().unwrap();
    assert_eq!(ranked[0]["id"], movies[3].as_str());
    assert_eq!(ranked[0]["elo_rating"], 1516.0);
    assert_eq!(ranked[0]["right_swipes"], 1);
  }

  #[tokio::test]
  async fn status_reports_progress_and_completion() {
    let state = make_state().await;
    let (slug, host_id, movies) = swiping_party(&state).await;

    let (status, body) =
      send(&state, "GET", &format!("/party/{slug}/status"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "swiping");
    assert_eq!(body["done_members"], 0);
    assert_eq!(body["total_members"], 1);

    for movie in &movies {
      let (status, _) = send(
        &state,
        "POST",
        &format!("/party/{slug}/swipes"),
        Some(json!({"movieId": movie, "userId": host_id, "direction": "left"})),
      )
      .await;
      assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) =
      send(&state, "GET", &format!("/party/{slug}/status"), None).await;
    assert_eq!(body["status"], "completed");
    assert_eq!(body["done_members"], 1);
  }

  // ── Realtime ────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn accepted_swipes_publish_events() {
    let state = make_state().await;
    let (slug, host_id, movies) = swiping_party(&state).await;
    let party_id = state
      .store
      .get_party(&slug)
      .await
      .unwrap()
      .unwrap()
      .party_id;
    let mut rx = state.channels.subscribe(party_id);

    send(
      &state,
      "POST",
      &format!("/party/{slug}/swipes"),
      Some(json!({
        "movieId":   movies[0],
        "userId":    host_id,
        "direction": "right",
      })),
    )
    .await;

    let event = rx.recv().await.unwrap();
    assert_eq!(event.kind(), "movie_updated");

    // Duplicates publish nothing.
    send(
      &state,
      "POST",
      &format!("/party/{slug}/swipes"),
      Some(json!({
        "movieId":   movies[0],
        "userId":    host_id,
        "direction": "right",
      })),
    )
    .await;
    assert!(rx.try_recv().is_err());
  }
}
