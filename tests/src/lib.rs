//! Shared helpers for Quill integration tests.

use quill_core::{Person, Post};
use quill_mutation::{NewPerson, NewPost};
pub use quill_session::demo_session;
use quill_session::Session;
use quill_store::SequenceSource;

/// Everything a test file needs in one import.
pub mod prelude {
    pub use crate::{assert_integrity, post, person, session};
    pub use quill_core::{Comment, CommentId, Person, PersonId, Post, PostId};
    pub use quill_mutation::{MutationError, NewComment, NewPerson, NewPost};
    pub use quill_session::{demo_session, Session};
}

/// A fresh session with deterministic sequential ids.
pub fn session() -> Session {
    Session::with_id_source(Box::new(SequenceSource::new()))
}

/// Create a person, panicking on failure.
pub fn person(session: &mut Session, name: &str, email: &str) -> Person {
    session
        .create_person(NewPerson::new(name, email))
        .expect("test person should be accepted")
}

/// Create a published post, panicking on failure.
pub fn post(session: &mut Session, author: &Person, title: &str) -> Post {
    session
        .create_post(NewPost::new(title, "", true, author.id.clone()))
        .expect("test post should be accepted")
}

/// Assert I2-I4: every stored foreign key resolves to a live entity.
pub fn assert_integrity(session: &Session) {
    for post in session.posts(None) {
        assert!(
            session.person(&post.author_id).is_some(),
            "post {} has dangling author {}",
            post.id,
            post.author_id
        );
    }
    for comment in session.comments() {
        assert!(
            session.person(&comment.author_id).is_some(),
            "comment {} has dangling author {}",
            comment.id,
            comment.author_id
        );
        assert!(
            session.post(&comment.post_id).is_some(),
            "comment {} has dangling post {}",
            comment.id,
            comment.post_id
        );
    }
}
