//! Quill Resolve
//!
//! Lazy relationship resolution.
//!
//! Relationship fields (a post's author, a person's comments) are not
//! stored; they are derived by scanning for matching foreign keys, and
//! only when a consumer actually asks for the field. This keeps response
//! shaping cheap for consumers that never touch the relationship.
//!
//! Single-entity resolutions rely on the integrity layer having upheld
//! its invariants: a foreign key that does not resolve is a programming
//! error in the mutation path, so these methods panic instead of
//! returning a user-facing not-found.

mod resolver;

pub use resolver::ReferenceResolver;
