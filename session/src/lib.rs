//! Quill Session
//!
//! The single in-process surface a host talks to. A session owns one
//! entity store and routes every call through the right component:
//! reads through the query executor, writes through the mutation
//! executor, relationship fields through the resolver.
//!
//! One session per logical consumer; mutations take `&mut self`, so the
//! borrow checker enforces the single-writer discipline the engine
//! assumes.

mod demo;
mod session;

pub use demo::demo_session;
pub use session::Session;
