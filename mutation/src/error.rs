//! Mutation error types.

use quill_core::{CommentId, PersonId, PostId};
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur during mutation execution.
///
/// Every variant is an input-validity error detected before any write,
/// never a transient fault; retrying without corrected input will fail
/// the same way.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MutationError {
    #[error("Email already in use: {email}")]
    DuplicateEmail { email: String },

    #[error("No such person: {id}")]
    DanglingReference { id: PersonId },

    #[error("Post missing or not published: {id}")]
    UnpublishedOrMissingPost { id: PostId },

    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),

    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),
}

impl MutationError {
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    pub fn dangling_reference(id: PersonId) -> Self {
        Self::DanglingReference { id }
    }

    pub fn unpublished_or_missing_post(id: PostId) -> Self {
        Self::UnpublishedOrMissingPost { id }
    }
}
