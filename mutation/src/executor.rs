//! Mutation executor - coordinates mutation operations.
//!
//! The executor delegates to specialized operation modules in `ops/`:
//! - `ops/create.rs` - entity creation with precondition checks
//! - `ops/delete.rs` - entity deletion with cascade
//!
//! It borrows the store mutably for its whole lifetime, so the
//! precondition check and the write of each operation can never
//! interleave with another writer.

use quill_core::{Comment, CommentId, Person, PersonId, Post, PostId};
use quill_store::EntityStore;
use tracing::debug;

use crate::error::MutationResult;
use crate::input::{NewComment, NewPerson, NewPost};
use crate::ops;

/// Mutation executor.
pub struct MutationExecutor<'s> {
    store: &'s mut EntityStore,
}

impl<'s> MutationExecutor<'s> {
    /// Create a new executor.
    pub fn new(store: &'s mut EntityStore) -> Self {
        Self { store }
    }

    /// Create a person.
    pub fn create_person(&mut self, input: NewPerson) -> MutationResult<Person> {
        let person = ops::create_person(self.store, input)?;
        debug!("created person {}", person.id);
        Ok(person)
    }

    /// Delete a person, cascading through their posts and comments.
    pub fn delete_person(&mut self, id: &PersonId) -> MutationResult<Person> {
        let posts_before = self.store.posts().len();
        let comments_before = self.store.comments().len();

        let person = ops::delete_person(self.store, id)?;

        debug!(
            "deleted person {} ({} posts, {} comments cascaded)",
            person.id,
            posts_before - self.store.posts().len(),
            comments_before - self.store.comments().len(),
        );
        Ok(person)
    }

    /// Create a post.
    pub fn create_post(&mut self, input: NewPost) -> MutationResult<Post> {
        let post = ops::create_post(self.store, input)?;
        debug!("created post {} by person {}", post.id, post.author_id);
        Ok(post)
    }

    /// Delete a post, cascading through its comments.
    pub fn delete_post(&mut self, id: &PostId) -> MutationResult<Post> {
        let comments_before = self.store.comments().len();

        let post = ops::delete_post(self.store, id)?;

        debug!(
            "deleted post {} ({} comments cascaded)",
            post.id,
            comments_before - self.store.comments().len(),
        );
        Ok(post)
    }

    /// Create a comment.
    pub fn create_comment(&mut self, input: NewComment) -> MutationResult<Comment> {
        let comment = ops::create_comment(self.store, input)?;
        debug!("created comment {} on post {}", comment.id, comment.post_id);
        Ok(comment)
    }

    /// Delete a comment.
    pub fn delete_comment(&mut self, id: &CommentId) -> MutationResult<Comment> {
        let comment = ops::delete_comment(self.store, id)?;
        debug!("deleted comment {}", comment.id);
        Ok(comment)
    }
}
