//! Candidate pool sourcing.
//!
//! `RecommendationSource` is the seam where an external catalog or
//! recommendation service plugs in. The shipped default is a small bundled
//! catalog so the server works out of the box.

use async_trait::async_trait;
use swipenight_core::movie::NewMovie;
use uuid::Uuid;

/// Supplies swipe candidates for a party's pool.
///
/// Failures here are upstream failures: the pool was not generated and the
/// host may retry.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
  async fn candidates(&self, party_id: Uuid) -> anyhow::Result<Vec<NewMovie>>;
}

/// Bundled fixed catalog; ignores the party.
pub struct StaticCatalog;

const CATALOG: &[(&str, &[&str])] = &[
  ("The Grand Budapest Hotel", &["comedy", "drama"]),
  ("Mad Max: Fury Road", &["action", "sci-fi"]),
  ("Spirited Away", &["animation", "fantasy"]),
  ("Knives Out", &["mystery", "comedy"]),
  ("Arrival", &["sci-fi", "drama"]),
  ("The Princess Bride", &["adventure", "romance"]),
  ("Parasite", &["thriller", "drama"]),
  ("Paddington 2", &["comedy", "family"]),
  ("Blade Runner 2049", &["sci-fi"]),
  ("Little Women", &["drama", "romance"]),
  ("Everything Everywhere All at Once", &["sci-fi", "comedy"]),
  ("The Thing", &["horror", "sci-fi"]),
  ("Clue", &["comedy", "mystery"]),
  ("Whiplash", &["drama"]),
  ("Hot Fuzz", &["action", "comedy"]),
  ("Coco", &["animation", "family"]),
  ("Heat", &["crime", "thriller"]),
  ("Pride & Prejudice", &["romance", "drama"]),
  ("Galaxy Quest", &["comedy", "sci-fi"]),
  ("The Mitchells vs. the Machines", &["animation", "comedy"]),
];

#[async_trait]
impl RecommendationSource for StaticCatalog {
  async fn candidates(&self, _party_id: Uuid) -> anyhow::Result<Vec<NewMovie>> {
    Ok(
      CATALOG
        .iter()
        .map(|(title, genres)| {
          NewMovie::new(*title, genres.iter().map(|g| g.to_string()).collect())
        })
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn static_catalog_yields_a_nonempty_pool() {
    let movies = StaticCatalog.candidates(Uuid::new_v4()).await.unwrap();
    assert!(movies.len() >= 10);
    assert!(movies.iter().all(|m| !m.title.is_empty()));
  }
}
