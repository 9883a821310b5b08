//! Substring filter predicates for list reads.

use quill_core::{Person, Post};

/// Filter persons by a case-insensitive substring match on name.
///
/// An absent or empty query returns the whole collection unchanged.
/// Order is preserved either way.
pub fn filter_persons<'a>(persons: &'a [Person], query: Option<&str>) -> Vec<&'a Person> {
    match query {
        Some(q) if !q.is_empty() => {
            let needle = q.to_lowercase();
            persons
                .iter()
                .filter(|person| person.name.to_lowercase().contains(&needle))
                .collect()
        }
        _ => persons.iter().collect(),
    }
}

/// Filter posts by a case-insensitive substring match on title or body.
///
/// An absent or empty query returns the whole collection unchanged.
/// Order is preserved either way.
pub fn filter_posts<'a>(posts: &'a [Post], query: Option<&str>) -> Vec<&'a Post> {
    match query {
        Some(q) if !q.is_empty() => {
            let needle = q.to_lowercase();
            posts
                .iter()
                .filter(|post| {
                    post.title.to_lowercase().contains(&needle)
                        || post.body.to_lowercase().contains(&needle)
                })
                .collect()
        }
        _ => posts.iter().collect(),
    }
}
