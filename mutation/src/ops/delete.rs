//! Delete operations - remove entities with cascade support.
//!
//! The dependency graph is fixed and shallow (comment depends on post
//! depends on person), so cascades are a fixed sequence of ordinary
//! removals on dependents rather than a generic graph walk.

use quill_core::{Comment, CommentId, Person, PersonId, Post, PostId};
use quill_store::EntityStore;

use crate::error::{MutationError, MutationResult};

/// Delete a person and cascade through everything they own.
///
/// Removal order: the person's comments, then each authored post (its
/// remaining comments first), then the person itself. The returned record
/// is the pre-removal snapshot.
pub fn delete_person(store: &mut EntityStore, id: &PersonId) -> MutationResult<Person> {
    if store.person(id).is_none() {
        return Err(MutationError::PersonNotFound(id.clone()));
    }

    let authored_comments: Vec<CommentId> = store
        .comments()
        .iter()
        .filter(|comment| &comment.author_id == id)
        .map(|comment| comment.id.clone())
        .collect();
    for comment_id in &authored_comments {
        store.remove_comment(comment_id);
    }

    let authored_posts: Vec<PostId> = store
        .posts()
        .iter()
        .filter(|post| &post.author_id == id)
        .map(|post| post.id.clone())
        .collect();
    for post_id in &authored_posts {
        let dependents: Vec<CommentId> = store
            .comments()
            .iter()
            .filter(|comment| &comment.post_id == post_id)
            .map(|comment| comment.id.clone())
            .collect();
        for comment_id in &dependents {
            store.remove_comment(comment_id);
        }
        store.remove_post(post_id);
    }

    // Existence was checked above; the person is still present because no
    // cascade step touches the person collection.
    Ok(store.remove_person(id).unwrap())
}

/// Delete a post and every comment left on it.
pub fn delete_post(store: &mut EntityStore, id: &PostId) -> MutationResult<Post> {
    let post = store
        .remove_post(id)
        .ok_or_else(|| MutationError::PostNotFound(id.clone()))?;

    let dependents: Vec<CommentId> = store
        .comments()
        .iter()
        .filter(|comment| &comment.post_id == id)
        .map(|comment| comment.id.clone())
        .collect();
    for comment_id in &dependents {
        store.remove_comment(comment_id);
    }

    Ok(post)
}

/// Delete a comment. Comments are leaves; nothing cascades.
pub fn delete_comment(store: &mut EntityStore, id: &CommentId) -> MutationResult<Comment> {
    store
        .remove_comment(id)
        .ok_or_else(|| MutationError::CommentNotFound(id.clone()))
}
