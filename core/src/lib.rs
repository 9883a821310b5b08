//! Quill Core Types
//!
//! This crate provides the foundational types used throughout the Quill
//! data layer:
//! - Identity types (PersonId, PostId, CommentId)
//! - Entity records (Person, Post, Comment)
//!
//! Relationships between entities (a post's author, a person's comments)
//! are never stored on the records themselves; they are derived on demand
//! by the resolver so that the integrity layer remains the single place
//! where foreign keys are validated.

mod entity;
mod id;

pub use entity::*;
pub use id::*;
