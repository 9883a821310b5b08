//! Demo fixture.
//!
//! A small seeded session: four people, three posts (one unpublished),
//! four comments on the published posts. Everything goes through the
//! mutation path so the result is known to satisfy every invariant.

use quill_mutation::{NewComment, NewPerson, NewPost};
use quill_store::SequenceSource;

use crate::session::Session;

/// Build a demo session with deterministic sequential ids.
///
/// # Panics
///
/// Panics if the fixture data stops satisfying the integrity rules, which
/// would be a bug in the fixture itself.
pub fn demo_session() -> Session {
    let mut session = Session::with_id_source(Box::new(SequenceSource::new()));

    let larry = session
        .create_person(NewPerson::new("Larry", "larry@example.com").with_age(40))
        .expect("demo person is valid");
    let lori = session
        .create_person(NewPerson::new("Lori", "lori@example.com").with_age(38))
        .expect("demo person is valid");
    let emily = session
        .create_person(NewPerson::new("Emily", "emily@example.com").with_age(15))
        .expect("demo person is valid");
    session
        .create_person(NewPerson::new("Sophia", "sophia@example.com").with_age(12))
        .expect("demo person is valid");

    let graphql = session
        .create_post(NewPost::new(
            "GraphQL is pretty cool",
            "This could be the future of API development.  We'll see.",
            true,
            larry.id.clone(),
        ))
        .expect("demo post is valid");
    let rest = session
        .create_post(NewPost::new(
            "Does it break the interface contracts of REST?",
            "REST provides a very predictable interface.  Will GraphQL generate APIs that are supportable?",
            true,
            larry.id.clone(),
        ))
        .expect("demo post is valid");
    session
        .create_post(NewPost::new("Time will tell", "", false, lori.id.clone()))
        .expect("demo post is valid");

    session
        .create_comment(NewComment::new(
            "I think it just might be.",
            larry.id.clone(),
            graphql.id.clone(),
        ))
        .expect("demo comment is valid");
    session
        .create_comment(NewComment::new(
            "This could really help us on core services.",
            larry.id,
            graphql.id,
        ))
        .expect("demo comment is valid");
    session
        .create_comment(NewComment::new(
            "Maybe not.  The resolvers seem to be written in such a way as to maximize performance.",
            lori.id,
            rest.id.clone(),
        ))
        .expect("demo comment is valid");
    session
        .create_comment(NewComment::new("This is fun", emily.id, rest.id))
        .expect("demo comment is valid");

    session
}
