//! Relationship field resolution.

use quill_core::{Comment, Person, Post};
use quill_store::EntityStore;

/// Resolves relationship fields against the store.
///
/// All resolutions are pure reads; each call re-scans the relevant
/// collection. No caching across calls.
pub struct ReferenceResolver<'s> {
    store: &'s EntityStore,
}

impl<'s> ReferenceResolver<'s> {
    /// Create a new resolver.
    pub fn new(store: &'s EntityStore) -> Self {
        Self { store }
    }

    /// Resolve a post's author.
    ///
    /// # Panics
    ///
    /// Panics if the author does not exist. The integrity layer guarantees
    /// every stored post references a live person, so absence here means
    /// that guarantee was broken.
    pub fn post_author(&self, post: &Post) -> &'s Person {
        self.store.person(&post.author_id).unwrap_or_else(|| {
            panic!(
                "integrity violation: post {} references missing person {}",
                post.id, post.author_id
            )
        })
    }

    /// Resolve all comments on a post, in insertion order.
    pub fn post_comments(&self, post: &Post) -> Vec<&'s Comment> {
        self.store
            .comments()
            .iter()
            .filter(|comment| comment.post_id == post.id)
            .collect()
    }

    /// Resolve all posts written by a person, in insertion order.
    pub fn person_posts(&self, person: &Person) -> Vec<&'s Post> {
        self.store
            .posts()
            .iter()
            .filter(|post| post.author_id == person.id)
            .collect()
    }

    /// Resolve all comments written by a person, in insertion order.
    pub fn person_comments(&self, person: &Person) -> Vec<&'s Comment> {
        self.store
            .comments()
            .iter()
            .filter(|comment| comment.author_id == person.id)
            .collect()
    }

    /// Resolve a comment's author.
    ///
    /// # Panics
    ///
    /// Panics if the author does not exist; see [`Self::post_author`].
    pub fn comment_author(&self, comment: &Comment) -> &'s Person {
        self.store.person(&comment.author_id).unwrap_or_else(|| {
            panic!(
                "integrity violation: comment {} references missing person {}",
                comment.id, comment.author_id
            )
        })
    }

    /// Resolve the post a comment was left on.
    ///
    /// # Panics
    ///
    /// Panics if the post does not exist; see [`Self::post_author`].
    pub fn comment_post(&self, comment: &Comment) -> &'s Post {
        self.store.post(&comment.post_id).unwrap_or_else(|| {
            panic!(
                "integrity violation: comment {} references missing post {}",
                comment.id, comment.post_id
            )
        })
    }
}
