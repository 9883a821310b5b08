//! Core entity storage implementation.

use crate::source::{IdSource, UuidSource};
use quill_core::{Comment, CommentId, Person, PersonId, Post, PostId};

/// The in-memory entity store.
///
/// Collections are plain vectors: lookups are unordered, iteration order is
/// insertion order. Lookups are linear scans, which is fine at the scale
/// this store targets; a larger deployment would maintain foreign-key
/// indices without changing this interface.
pub struct EntityStore {
    /// Person storage
    persons: Vec<Person>,
    /// Post storage
    posts: Vec<Post>,
    /// Comment storage
    comments: Vec<Comment>,
    /// Id source
    ids: Box<dyn IdSource>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    /// Create a new empty store with uuid identifiers.
    pub fn new() -> Self {
        Self::with_id_source(Box::new(UuidSource::new()))
    }

    /// Create a new empty store drawing ids from the given source.
    pub fn with_id_source(ids: Box<dyn IdSource>) -> Self {
        Self {
            persons: Vec::new(),
            posts: Vec::new(),
            comments: Vec::new(),
            ids,
        }
    }

    // ==================== Id Generation ====================

    /// Generate a fresh person id.
    pub fn fresh_person_id(&mut self) -> PersonId {
        PersonId::new(self.ids.next_id())
    }

    /// Generate a fresh post id.
    pub fn fresh_post_id(&mut self) -> PostId {
        PostId::new(self.ids.next_id())
    }

    /// Generate a fresh comment id.
    pub fn fresh_comment_id(&mut self) -> CommentId {
        CommentId::new(self.ids.next_id())
    }

    // ==================== Person Operations ====================

    /// Append a person. The caller has already validated the record.
    pub fn insert_person(&mut self, person: Person) {
        self.persons.push(person);
    }

    /// Get a person by id.
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.persons.iter().find(|p| &p.id == id)
    }

    /// Remove a person by id, returning the removed record.
    pub fn remove_person(&mut self, id: &PersonId) -> Option<Person> {
        let index = self.persons.iter().position(|p| &p.id == id)?;
        Some(self.persons.remove(index))
    }

    /// All persons in insertion order.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    // ==================== Post Operations ====================

    /// Append a post. The caller has already validated the author reference.
    pub fn insert_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Get a post by id.
    pub fn post(&self, id: &PostId) -> Option<&Post> {
        self.posts.iter().find(|p| &p.id == id)
    }

    /// Remove a post by id, returning the removed record.
    pub fn remove_post(&mut self, id: &PostId) -> Option<Post> {
        let index = self.posts.iter().position(|p| &p.id == id)?;
        Some(self.posts.remove(index))
    }

    /// All posts in insertion order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    // ==================== Comment Operations ====================

    /// Append a comment. The caller has already validated both references.
    pub fn insert_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Get a comment by id.
    pub fn comment(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| &c.id == id)
    }

    /// Remove a comment by id, returning the removed record.
    pub fn remove_comment(&mut self, id: &CommentId) -> Option<Comment> {
        let index = self.comments.iter().position(|c| &c.id == id)?;
        Some(self.comments.remove(index))
    }

    /// All comments in insertion order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}
