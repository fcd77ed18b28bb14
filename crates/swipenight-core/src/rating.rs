//! The per-movie rating update.
//!
//! Every accepted swipe is scored as one match between the movie and a
//! fixed baseline opponent: a right swipe is a win (actual = 1), a left
//! swipe a loss (actual = 0). The baseline is a constant, not a
//! party-relative mean, so replaying the same commit-ordered swipe sequence
//! reproduces the exact final rating.

use crate::swipe::Direction;

/// Rating of the fixed baseline opponent, and the initial rating of every
/// candidate.
pub const BASELINE_RATING: f64 = 1500.0;

/// Uniform K-factor across all movies and parties.
pub const K_FACTOR: f64 = 32.0;

/// Expected score stored on a movie with no swipes: `1 / (1 + 10^0)`.
pub const BASELINE_EXPECTED: f64 = 0.5;

/// Pre-update probability that a movie at `rating` beats the baseline
/// opponent.
pub fn expected_score(rating: f64) -> f64 {
  1.0 / (1.0 + 10f64.powf((BASELINE_RATING - rating) / 400.0))
}

/// Outcome of applying one swipe: the expected score computed immediately
/// before the update (this is what gets stored on the movie) and the new
/// rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingUpdate {
  pub expected: f64,
  pub rating:   f64,
}

/// Apply one swipe to a movie currently at `rating`.
pub fn apply_swipe(rating: f64, direction: Direction) -> RatingUpdate {
  let expected = expected_score(rating);
  let actual = match direction {
    Direction::Right => 1.0,
    Direction::Left => 0.0,
  };
  RatingUpdate { expected, rating: rating + K_FACTOR * (actual - expected) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn baseline_expected_is_exactly_half() {
    assert_eq!(expected_score(BASELINE_RATING), 0.5);
    assert_eq!(BASELINE_EXPECTED, 0.5);
  }

  #[test]
  fn right_swipe_at_baseline_gains_half_k() {
    let u = apply_swipe(1500.0, Direction::Right);
    assert_eq!(u.expected, 0.5);
    assert_eq!(u.rating, 1516.0);
  }

  #[test]
  fn left_swipe_after_right_lands_just_below_baseline() {
    let first = apply_swipe(1500.0, Direction::Right);
    let second = apply_swipe(first.rating, Direction::Left);
    assert!((second.expected - 0.523).abs() < 1e-3, "expected {}", second.expected);
    assert!((second.rating - 1499.2637670579).abs() < 1e-9, "rating {}", second.rating);
  }

  #[test]
  fn higher_rated_movies_gain_less_per_like() {
    let a = apply_swipe(1600.0, Direction::Right);
    let b = apply_swipe(1400.0, Direction::Right);
    assert!((a.expected - 0.64).abs() < 5e-3);
    assert!((b.expected - 0.36).abs() < 5e-3);
    assert!((a.rating - 1611.5).abs() < 0.1, "a {}", a.rating);
    assert!((b.rating - 1420.5).abs() < 0.1, "b {}", b.rating);
    assert!(a.rating - 1600.0 < b.rating - 1400.0);
  }

  #[test]
  fn replay_is_bit_reproducible() {
    let seq = [
      Direction::Right,
      Direction::Right,
      Direction::Left,
      Direction::Right,
      Direction::Left,
    ];
    let run = |dirs: &[Direction]| {
      dirs.iter().fold(BASELINE_RATING, |r, d| apply_swipe(r, *d).rating)
    };
    assert_eq!(run(&seq).to_bits(), run(&seq).to_bits());
  }
}
