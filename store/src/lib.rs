//! Quill Store
//!
//! In-memory storage for the three entity collections.
//!
//! Responsibilities:
//! - Sole ownership of the person, post and comment collections
//! - Primitive insert / lookup / remove-by-id operations
//! - Fresh id generation through an injectable [`IdSource`]
//!
//! The store performs no validation: every insert is assumed to have been
//! checked by the mutation layer first. Nothing outside the mutation layer
//! should insert or remove entities.

mod source;
mod store;

pub use source::{IdSource, SequenceSource, UuidSource};
pub use store::EntityStore;
