//! Session - facade over store, query, resolve and mutation.

use quill_core::{Comment, CommentId, Person, PersonId, Post, PostId};
use quill_mutation::{MutationExecutor, MutationResult, NewComment, NewPerson, NewPost};
use quill_query::QueryExecutor;
use quill_resolve::ReferenceResolver;
use quill_store::{EntityStore, IdSource};

/// A Quill session.
///
/// Owns the store; lives from construction (empty collections) to drop.
pub struct Session {
    store: EntityStore,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session over an empty store with uuid identifiers.
    pub fn new() -> Self {
        Self {
            store: EntityStore::new(),
        }
    }

    /// Create a session drawing ids from the given source.
    pub fn with_id_source(ids: Box<dyn IdSource>) -> Self {
        Self {
            store: EntityStore::with_id_source(ids),
        }
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    // ==================== Queries ====================

    /// Get a person by id.
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        QueryExecutor::new(&self.store).person(id)
    }

    /// List persons, optionally filtered by name substring.
    pub fn persons(&self, query: Option<&str>) -> Vec<&Person> {
        QueryExecutor::new(&self.store).persons(query)
    }

    /// Get a post by id.
    pub fn post(&self, id: &PostId) -> Option<&Post> {
        QueryExecutor::new(&self.store).post(id)
    }

    /// List posts, optionally filtered by title or body substring.
    pub fn posts(&self, query: Option<&str>) -> Vec<&Post> {
        QueryExecutor::new(&self.store).posts(query)
    }

    /// List all comments.
    pub fn comments(&self) -> &[Comment] {
        QueryExecutor::new(&self.store).comments()
    }

    // ==================== Mutations ====================

    /// Create a person.
    pub fn create_person(&mut self, input: NewPerson) -> MutationResult<Person> {
        MutationExecutor::new(&mut self.store).create_person(input)
    }

    /// Delete a person, cascading through their posts and comments.
    pub fn delete_person(&mut self, id: &PersonId) -> MutationResult<Person> {
        MutationExecutor::new(&mut self.store).delete_person(id)
    }

    /// Create a post.
    pub fn create_post(&mut self, input: NewPost) -> MutationResult<Post> {
        MutationExecutor::new(&mut self.store).create_post(input)
    }

    /// Delete a post, cascading through its comments.
    pub fn delete_post(&mut self, id: &PostId) -> MutationResult<Post> {
        MutationExecutor::new(&mut self.store).delete_post(id)
    }

    /// Create a comment.
    pub fn create_comment(&mut self, input: NewComment) -> MutationResult<Comment> {
        MutationExecutor::new(&mut self.store).create_comment(input)
    }

    /// Delete a comment.
    pub fn delete_comment(&mut self, id: &CommentId) -> MutationResult<Comment> {
        MutationExecutor::new(&mut self.store).delete_comment(id)
    }

    // ==================== Relationship Resolution ====================

    /// Resolve a post's author.
    pub fn post_author(&self, post: &Post) -> &Person {
        ReferenceResolver::new(&self.store).post_author(post)
    }

    /// Resolve all comments on a post.
    pub fn post_comments(&self, post: &Post) -> Vec<&Comment> {
        ReferenceResolver::new(&self.store).post_comments(post)
    }

    /// Resolve all posts written by a person.
    pub fn person_posts(&self, person: &Person) -> Vec<&Post> {
        ReferenceResolver::new(&self.store).person_posts(person)
    }

    /// Resolve all comments written by a person.
    pub fn person_comments(&self, person: &Person) -> Vec<&Comment> {
        ReferenceResolver::new(&self.store).person_comments(person)
    }

    /// Resolve a comment's author.
    pub fn comment_author(&self, comment: &Comment) -> &Person {
        ReferenceResolver::new(&self.store).comment_author(comment)
    }

    /// Resolve the post a comment was left on.
    pub fn comment_post(&self, comment: &Comment) -> &Post {
        ReferenceResolver::new(&self.store).comment_post(comment)
    }
}
