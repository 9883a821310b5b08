//! Id sources.
//!
//! Identifier generation is injected into the store so the host decides
//! the concrete format. The only contract is that every call returns a
//! string never returned before by the same source.

use uuid::Uuid;

/// A source of fresh, never-repeating identifier strings.
pub trait IdSource {
    /// Return the next fresh identifier.
    fn next_id(&mut self) -> String;
}

/// Random uuid-v4 identifiers. The default for production stores.
#[derive(Debug, Default)]
pub struct UuidSource;

impl UuidSource {
    pub fn new() -> Self {
        Self
    }
}

impl IdSource for UuidSource {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Sequential numeric identifiers, starting at 1.
///
/// Deterministic, so tests and demo fixtures can refer to ids by value.
#[derive(Debug)]
pub struct SequenceSource {
    next: u64,
}

impl SequenceSource {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequenceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequenceSource {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}
