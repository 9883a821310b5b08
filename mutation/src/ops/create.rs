//! Create operations - insert new entities after precondition checks.

use quill_core::{Comment, Person, Post};
use quill_store::EntityStore;

use crate::error::{MutationError, MutationResult};
use crate::input::{NewComment, NewPerson, NewPost};

/// Create a person.
///
/// Precondition: no existing person uses the same email (case-sensitive
/// exact match).
pub fn create_person(store: &mut EntityStore, input: NewPerson) -> MutationResult<Person> {
    if store.persons().iter().any(|p| p.email == input.email) {
        return Err(MutationError::duplicate_email(input.email));
    }

    let id = store.fresh_person_id();
    let person = Person::new(id, input.name, input.email, input.age);
    store.insert_person(person.clone());

    Ok(person)
}

/// Create a post.
///
/// Precondition: the author exists.
pub fn create_post(store: &mut EntityStore, input: NewPost) -> MutationResult<Post> {
    if store.person(&input.author_id).is_none() {
        return Err(MutationError::dangling_reference(input.author_id));
    }

    let id = store.fresh_post_id();
    let post = Post::new(id, input.title, input.body, input.published, input.author_id);
    store.insert_post(post.clone());

    Ok(post)
}

/// Create a comment.
///
/// Preconditions, first failure wins: the author exists; the post exists
/// and is published.
pub fn create_comment(store: &mut EntityStore, input: NewComment) -> MutationResult<Comment> {
    if store.person(&input.author_id).is_none() {
        return Err(MutationError::dangling_reference(input.author_id));
    }
    match store.post(&input.post_id) {
        Some(post) if post.published => {}
        _ => return Err(MutationError::unpublished_or_missing_post(input.post_id)),
    }

    let id = store.fresh_comment_id();
    let comment = Comment::new(id, input.text, input.author_id, input.post_id);
    store.insert_comment(comment.clone());

    Ok(comment)
}
