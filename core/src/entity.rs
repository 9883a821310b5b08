//! Entity records for Quill.
//!
//! Person, Post and Comment are the three entity kinds. Each record holds
//! only its own fields plus foreign keys; related entities are resolved
//! lazily by the resolver, never embedded.

use crate::{CommentId, PersonId, PostId};
use serde::{Deserialize, Serialize};

/// A person: author of posts and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier for this person.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Email address, unique across all persons.
    pub email: String,
    /// Age in years, if known.
    pub age: Option<u32>,
}

impl Person {
    /// Create a new person record.
    pub fn new(
        id: PersonId,
        name: impl Into<String>,
        email: impl Into<String>,
        age: Option<u32>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

/// A post written by a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier for this post.
    pub id: PostId,
    /// Post title.
    pub title: String,
    /// Post body; may be empty.
    pub body: String,
    /// Whether the post is visible and open for comments.
    pub published: bool,
    /// Foreign key to the authoring person.
    pub author_id: PersonId,
}

impl Post {
    /// Create a new post record.
    pub fn new(
        id: PostId,
        title: impl Into<String>,
        body: impl Into<String>,
        published: bool,
        author_id: PersonId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            published,
            author_id,
        }
    }
}

/// A comment left on a published post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier for this comment.
    pub id: CommentId,
    /// Comment text.
    pub text: String,
    /// Foreign key to the commenting person.
    pub author_id: PersonId,
    /// Foreign key to the commented post.
    pub post_id: PostId,
}

impl Comment {
    /// Create a new comment record.
    pub fn new(
        id: CommentId,
        text: impl Into<String>,
        author_id: PersonId,
        post_id: PostId,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            author_id,
            post_id,
        }
    }
}
