//! Quill Query
//!
//! Read-side operations over the entity store.
//!
//! Responsibilities:
//! - Single-entity lookups (person, post)
//! - List reads with optional substring filtering
//!
//! Reads never fail: a missing entity is `None` and an empty list is a
//! valid result. Queries mutate nothing and hold no state between calls,
//! so repeated reads with no intervening mutation return identical
//! results.

mod executor;
mod filter;

pub use executor::QueryExecutor;
pub use filter::{filter_persons, filter_posts};
