//! SQLite implementation of [`swipenight_core::store::PartyStore`].
//!
//! The `(movie_id, member_id)` uniqueness constraint lives here, at the
//! durable-storage boundary — it is the single source of truth for swipe
//! idempotency. Swipe insertion and the rating update commit in one
//! transaction.

pub mod encode;
pub mod schema;
pub mod store;


pub use store::SqliteStore;
