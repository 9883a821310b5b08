//! Mutation operation implementations.
//!
//! Create and delete are implemented in their own modules; no entity kind
//! supports field updates.

mod create;
mod delete;

pub use create::{create_comment, create_person, create_post};
pub use delete::{delete_comment, delete_person, delete_post};
