//! Cascade completeness for person and post deletion.

use quill_tests::prelude::*;

/// Two authors with interleaved posts and comments, so a cascade has both
/// victims and survivors to distinguish.
fn two_author_session() -> (Session, Person, Person) {
    let mut session = quill_tests::session();
    let ann = quill_tests::person(&mut session, "Ann", "ann@x.com");
    let ben = quill_tests::person(&mut session, "Ben", "ben@x.com");

    let anns_post = quill_tests::post(&mut session, &ann, "anns post");
    let bens_post = quill_tests::post(&mut session, &ben, "bens post");

    // Each comments on the other's post and on their own.
    for (author, target) in [
        (&ann, &anns_post),
        (&ann, &bens_post),
        (&ben, &anns_post),
        (&ben, &bens_post),
    ] {
        session
            .create_comment(NewComment::new(
                "c",
                author.id.clone(),
                target.id.clone(),
            ))
            .unwrap();
    }

    (session, ann, ben)
}

#[test]
fn delete_person_removes_exactly_their_subtree() {
    let (mut session, ann, ben) = two_author_session();

    let removed = session.delete_person(&ann.id).unwrap();
    assert_eq!(removed.id, ann.id);

    // Ann, her post, her two comments, and Ben's comment on her post are
    // gone; Ben, his post and his comment on it remain.
    assert_eq!(session.persons(None).len(), 1);
    assert_eq!(session.persons(None)[0].id, ben.id);

    let posts = session.posts(None);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].author_id, ben.id);

    assert_eq!(session.comments().len(), 1);
    assert_eq!(session.comments()[0].author_id, ben.id);
    assert_eq!(session.comments()[0].post_id, posts[0].id);

    quill_tests::assert_integrity(&session);
}

#[test]
fn delete_post_removes_exactly_its_comments() {
    let (mut session, ann, _ben) = two_author_session();
    let anns_post = session.person_posts(&ann)[0].clone();

    session.delete_post(&anns_post.id).unwrap();

    // Both authors and the other post survive; only the two comments on
    // the deleted post are gone.
    assert_eq!(session.persons(None).len(), 2);
    assert_eq!(session.posts(None).len(), 1);
    assert_eq!(session.comments().len(), 2);
    for comment in session.comments() {
        assert_ne!(comment.post_id, anns_post.id);
    }

    quill_tests::assert_integrity(&session);
}

#[test]
fn delete_sole_author_empties_the_store() {
    // Ann, one published post, one comment on it.
    let mut session = quill_tests::session();
    let ann = quill_tests::person(&mut session, "Ann", "ann@x.com");
    let post = quill_tests::post(&mut session, &ann, "T");
    session
        .create_comment(NewComment::new("C", ann.id.clone(), post.id))
        .unwrap();

    session.delete_person(&ann.id).unwrap();

    assert!(session.persons(None).is_empty());
    assert!(session.posts(None).is_empty());
    assert!(session.comments().is_empty());
}

#[test]
fn delete_is_not_idempotent() {
    let mut session = quill_tests::session();
    let ann = quill_tests::person(&mut session, "Ann", "ann@x.com");

    session.delete_person(&ann.id).unwrap();
    let second = session.delete_person(&ann.id);

    assert_eq!(
        second.unwrap_err(),
        MutationError::PersonNotFound(ann.id)
    );
}

#[test]
fn cascade_only_follows_foreign_keys() {
    let mut session = quill_tests::demo_session();
    let lori = session.persons(Some("Lori"))[0].clone();

    // Lori authored one unpublished post and one comment; nothing else
    // references her.
    session.delete_person(&lori.id).unwrap();

    assert_eq!(session.persons(None).len(), 3);
    assert_eq!(session.posts(None).len(), 2);
    assert_eq!(session.comments().len(), 3);
    quill_tests::assert_integrity(&session);
}
