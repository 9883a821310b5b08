//! Quill Mutation
//!
//! Execute write operations (create/delete) against the entity store.
//!
//! Responsibilities:
//! - Validate referential-integrity preconditions before any write
//! - Perform the write through the store primitives
//! - Cascade deletes through dependent entities
//! - Return the affected entity
//!
//! Validation strictly precedes effect: a failed precondition leaves the
//! store untouched, so no rollback logic exists anywhere in this crate.
//!
//! # Module Structure
//!
//! - `executor` - Main MutationExecutor that coordinates operations
//! - `ops/` - Individual operation implementations (create, delete)
//! - `input` - Plain input records for the create operations
//! - `error` - Error types for mutation failures

mod error;
mod executor;
mod input;
mod ops;

pub use error::{MutationError, MutationResult};
pub use executor::MutationExecutor;
pub use input::{NewComment, NewPerson, NewPost};
