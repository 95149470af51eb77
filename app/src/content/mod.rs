//! Article bodies and reference lists, one module per post.
//!
//! Each post number in [`crate::posts::POSTS`] must have a matching arm in
//! [`post_content`].

mod accessibility;
mod aesthetics;
mod visualisation;

use leptos::prelude::*;

use crate::posts::Reference;

/// Authored content of a single post.
#[derive(Clone, Copy)]
pub struct PostContent {
    /// Renders the article body.
    pub body: fn() -> AnyView,

    /// Works cited by the post, in bibliography order.
    pub references: &'static [Reference],
}

/// Content for a one-based post number.
pub fn post_content(number: usize) -> Option<PostContent> {
    match number {
        1 => Some(PostContent {
            body: accessibility::body,
            references: accessibility::REFERENCES,
        }),
        2 => Some(PostContent {
            body: aesthetics::body,
            references: aesthetics::REFERENCES,
        }),
        3 => Some(PostContent {
            body: visualisation::body,
            references: visualisation::REFERENCES,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::POSTS;

    #[test]
    fn test_every_post_has_content() {
        for post in POSTS {
            let content = post_content(post.number);
            assert!(content.is_some(), "post {} has no body", post.number);
            assert!(!content.unwrap().references.is_empty());
        }
    }

    #[test]
    fn test_no_content_past_the_list() {
        assert!(post_content(0).is_none());
        assert!(post_content(POSTS.len() + 1).is_none());
    }

    #[test]
    fn test_aesthetics_body_renders() {
        let owner = Owner::new();
        let html = owner.with(|| (aesthetics::body)().to_html());
        assert!(html.contains("The Role Of Aesthetics In Web Design"));
        assert!(html.contains("<figcaption>"));
    }
}
