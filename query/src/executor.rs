//! Query executor - the read side of the store contract.

use quill_core::{Comment, Person, PersonId, Post, PostId};
use quill_store::EntityStore;

use crate::filter;

/// Query executor.
///
/// A borrowing view over the store; construct one per request.
pub struct QueryExecutor<'s> {
    store: &'s EntityStore,
}

impl<'s> QueryExecutor<'s> {
    /// Create a new executor.
    pub fn new(store: &'s EntityStore) -> Self {
        Self { store }
    }

    /// Get a person by id.
    pub fn person(&self, id: &PersonId) -> Option<&'s Person> {
        self.store.person(id)
    }

    /// List persons, optionally filtered by name substring.
    pub fn persons(&self, query: Option<&str>) -> Vec<&'s Person> {
        filter::filter_persons(self.store.persons(), query)
    }

    /// Get a post by id.
    pub fn post(&self, id: &PostId) -> Option<&'s Post> {
        self.store.post(id)
    }

    /// List posts, optionally filtered by title or body substring.
    pub fn posts(&self, query: Option<&str>) -> Vec<&'s Post> {
        filter::filter_posts(self.store.posts(), query)
    }

    /// List all comments.
    pub fn comments(&self) -> &'s [Comment] {
        self.store.comments()
    }
}
