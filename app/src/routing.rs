//! Route paths and URL-to-post resolution.

use log::debug;

use crate::error::{PostLookupError, Result};
use crate::posts::{self, PostRecord};

pub const HOME: &str = "/";
pub const BLOG_SECTION: &str = "/BlogSection";
pub const DESIGN_SECTION: &str = "/DesignSection";
pub const ARTWORK_SECTION: &str = "/ArtworkSection";

/// Prefix of every post path.
pub const POSTS_PREFIX: &str = "/Blogs";

/// Links in the navigation bar, as `(label, path)`.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", HOME),
    ("Blogs", BLOG_SECTION),
    ("Design", DESIGN_SECTION),
    ("Artwork", ARTWORK_SECTION),
];

/// In-app path of a post, e.g. `/Blogs/Blog2`.
pub fn post_path(number: usize) -> String {
    format!("{POSTS_PREFIX}/Blog{number}")
}

/// Site-relative path of a post's preview image.
pub fn preview_image_path(number: usize) -> String {
    format!("/assets/PreviewImages/Blog{number}.svg")
}

/// Parses the number at the end of `path` and checks it names a post.
///
/// One trailing `/` and a trailing `.html` are ignored, so `/Blogs/Blog2`,
/// `/Blogs/Blog2/` and `/Blogs/Blog2.html` all give `2`. Zero and numbers
/// past the last post are [`PostLookupError::OutOfRange`].
pub fn post_number_from_path(path: &str) -> Result<usize> {
    let number = trailing_number(path)?;
    posts::post(number).map(|post| post.number)
}

/// Resolves `path` to a post.
pub fn post_from_path(path: &str) -> Result<&'static PostRecord> {
    let number = post_number_from_path(path)?;
    let post = posts::post(number)?;
    debug!("resolved {path} to post {number}");
    Ok(post)
}

fn trailing_number(path: &str) -> Result<usize> {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix(".html").unwrap_or(trimmed);
    let rest = trimmed.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &trimmed[rest.len()..];

    if digits.is_empty() {
        return Err(PostLookupError::missing_number(path));
    }

    digits
        .parse()
        .map_err(|_| PostLookupError::invalid_number(digits))
}

/// Whether the navigation link to `link` should be highlighted at `current`.
pub fn is_active(link: &str, current: &str) -> bool {
    if link == HOME {
        return current == HOME;
    }
    if link == BLOG_SECTION && is_post_path(current) {
        return true;
    }
    current == link || current.starts_with(&format!("{link}/"))
}

fn is_post_path(path: &str) -> bool {
    path == "/Blog" || path.starts_with(&format!("{POSTS_PREFIX}/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::POSTS;

    #[test]
    fn test_post_path() {
        assert_eq!(post_path(2), "/Blogs/Blog2");
        assert_eq!(preview_image_path(3), "/assets/PreviewImages/Blog3.svg");
    }

    #[test]
    fn test_number_from_path() {
        assert_eq!(post_number_from_path("/Blogs/Blog2"), Ok(2));
        assert_eq!(post_number_from_path("/Blogs/Blog2/"), Ok(2));
        assert_eq!(post_number_from_path("/Blogs/Blog2.html"), Ok(2));
    }

    #[test]
    fn test_number_from_path_checks_range() {
        assert_eq!(
            post_number_from_path("/Blogs/Blog12"),
            Err(PostLookupError::OutOfRange {
                number: 12,
                available: POSTS.len()
            })
        );
        assert_eq!(
            post_number_from_path("/Blogs/Blog0"),
            Err(PostLookupError::OutOfRange {
                number: 0,
                available: POSTS.len()
            })
        );
        assert_eq!(trailing_number("/Blog12"), Ok(12));
    }

    #[test]
    fn test_number_from_path_missing() {
        assert_eq!(
            post_number_from_path("/Blog"),
            Err(PostLookupError::missing_number("/Blog"))
        );
        assert!(post_number_from_path("").is_err());
        assert!(post_number_from_path("/Blogs/Blogé").is_err());
    }

    #[test]
    fn test_number_from_path_overflow() {
        let err = post_number_from_path("/Blogs/Blog99999999999999999999999999").unwrap_err();
        assert!(matches!(err, PostLookupError::InvalidNumber { .. }));
    }

    #[test]
    fn test_every_post_resolves_from_its_path() {
        for post in POSTS {
            let resolved = post_from_path(&post_path(post.number)).unwrap();
            assert_eq!(resolved, post);
        }
    }

    #[test]
    fn test_out_of_range_paths_do_not_resolve() {
        assert!(matches!(
            post_from_path("/Blogs/Blog0"),
            Err(PostLookupError::OutOfRange { number: 0, .. })
        ));
        let past_end = post_path(POSTS.len() + 1);
        assert!(matches!(
            post_from_path(&past_end),
            Err(PostLookupError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_preview_images_exist_in_public_dir() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../public");
        for post in POSTS {
            let file = public.join(preview_image_path(post.number).trim_start_matches('/'));
            assert!(file.is_file(), "missing {}", file.display());
        }
    }

    #[test]
    fn test_is_active() {
        assert!(is_active(HOME, "/"));
        assert!(!is_active(HOME, "/BlogSection"));
        assert!(is_active(BLOG_SECTION, "/BlogSection"));
        assert!(is_active(BLOG_SECTION, "/Blogs/Blog1"));
        assert!(is_active(BLOG_SECTION, "/Blog"));
        assert!(!is_active(DESIGN_SECTION, "/Blogs/Blog1"));
        assert!(!is_active(ARTWORK_SECTION, "/ArtworkSectionX"));
    }
}
