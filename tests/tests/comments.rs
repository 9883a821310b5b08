//! Comment creation preconditions.

use quill_tests::prelude::*;

#[test]
fn comment_on_published_post_succeeds() {
    let mut session = quill_tests::session();
    let ann = quill_tests::person(&mut session, "Ann", "ann@x.com");
    let post = session
        .create_post(NewPost::new("T", "B", true, ann.id.clone()))
        .unwrap();

    let comment = session
        .create_comment(NewComment::new("C", ann.id.clone(), post.id.clone()))
        .unwrap();

    assert_eq!(comment.text, "C");
    assert_eq!(session.comment_post(&comment).id, post.id);
    assert_eq!(session.comment_author(&comment).id, ann.id);
}

#[test]
fn comment_on_unpublished_post_rejected() {
    let mut session = quill_tests::session();
    let ann = quill_tests::person(&mut session, "Ann", "ann@x.com");
    let draft = session
        .create_post(NewPost::new("Draft", "", false, ann.id.clone()))
        .unwrap();

    let result = session.create_comment(NewComment::new("C", ann.id, draft.id.clone()));

    assert_eq!(
        result.unwrap_err(),
        MutationError::UnpublishedOrMissingPost { id: draft.id }
    );
    assert!(session.comments().is_empty());
}

#[test]
fn comment_on_missing_post_rejected_with_same_kind() {
    let mut session = quill_tests::session();
    let ann = quill_tests::person(&mut session, "Ann", "ann@x.com");

    let result = session.create_comment(NewComment::new("C", ann.id, PostId::new("404")));

    // Missing and unpublished posts report the same error kind.
    assert!(matches!(
        result.unwrap_err(),
        MutationError::UnpublishedOrMissingPost { .. }
    ));
}

#[test]
fn comment_author_precondition_checked_before_post() {
    let mut session = quill_tests::session();
    let ann = quill_tests::person(&mut session, "Ann", "ann@x.com");
    let draft = session
        .create_post(NewPost::new("Draft", "", false, ann.id))
        .unwrap();

    let result = session.create_comment(NewComment::new("C", PersonId::new("404"), draft.id));

    assert_eq!(
        result.unwrap_err(),
        MutationError::DanglingReference {
            id: PersonId::new("404")
        }
    );
}

#[test]
fn delete_comment_leaves_post_untouched() {
    let mut session = quill_tests::session();
    let ann = quill_tests::person(&mut session, "Ann", "ann@x.com");
    let post = quill_tests::post(&mut session, &ann, "T");
    let comment = session
        .create_comment(NewComment::new("C", ann.id, post.id.clone()))
        .unwrap();

    session.delete_comment(&comment.id).unwrap();
    assert!(session.comments().is_empty());
    assert!(session.post(&post.id).is_some());
}
