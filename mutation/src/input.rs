//! Plain input records for the create operations.
//!
//! Ids are never part of an input; the store assigns them on creation.

use quill_core::{PersonId, PostId};

/// Input for creating a person.
#[derive(Debug, Clone)]
pub struct NewPerson {
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: None,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }
}

/// Input for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub published: bool,
    pub author_id: PersonId,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        published: bool,
        author_id: PersonId,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            published,
            author_id,
        }
    }
}

/// Input for creating a comment.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub text: String,
    pub author_id: PersonId,
    pub post_id: PostId,
}

impl NewComment {
    pub fn new(text: impl Into<String>, author_id: PersonId, post_id: PostId) -> Self {
        Self {
            text: text.into(),
            author_id,
            post_id,
        }
    }
}
