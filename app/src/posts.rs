//! The static list of blog posts.
//!
//! Posts are ordered oldest first. The post numbered `n` lives at index
//! `n - 1` and is served at `/Blogs/Blog{n}`.

use serde::Serialize;

use crate::error::{PostLookupError, Result};

/// Listing metadata for one blog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    /// One-based position in [`POSTS`].
    pub number: usize,

    /// Post title.
    pub title: &'static str,

    /// Short summary for cards and link previews.
    pub summary: &'static str,

    /// Publish date, `YYYY-MM-DD`.
    pub date: &'static str,

    /// Word count of the article body.
    pub words: u32,

    /// Alt text for the preview image.
    pub image_alt: &'static str,
}

impl PostRecord {
    /// Estimated reading time in whole minutes, never less than one.
    pub fn reading_minutes(&self) -> u32 {
        self.words.div_ceil(WORDS_PER_MINUTE).max(1)
    }
}

const WORDS_PER_MINUTE: u32 = 200;

/// One bibliography entry: `author`, then the cited `title`, then `source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    /// Author and year, e.g. `"Nielsen, J. 2012. "`.
    pub author: &'static str,

    /// Title of the cited work.
    pub title: &'static str,

    /// Publisher, journal or URL.
    pub source: &'static str,
}

/// Every published post.
pub static POSTS: &[PostRecord] = &[
    PostRecord {
        number: 1,
        title: "Designing a Web for Everyone",
        summary: "What web accessibility means, why it matters beyond disability, and four simple practices that let more people use the sites we build.",
        date: "2022-03-07",
        words: 409,
        image_alt: "A keyboard, a screen reader and a magnifier arranged around a browser window",
    },
    PostRecord {
        number: 2,
        title: "The Importance of Aesthetics in Web Design",
        summary: "Functionality is only half of good web design. Using Thorlacius' four principles and the Apple homepage, this post shows why aesthetics matter just as much.",
        date: "2022-03-21",
        words: 684,
        image_alt: "A minimal browser window with a large product image and a single call to action",
    },
    PostRecord {
        number: 3,
        title: "Showing the Data: Visualisation on the Web",
        summary: "Tufte's data-ink ratio, Cairo's truthful art and the interactivity of D3, and how they combine into honest, readable charts on the web.",
        date: "2022-04-11",
        words: 368,
        image_alt: "A bar chart and a line graph drawn inside a browser window",
    },
];

/// Looks up a post by its one-based number.
pub fn post(number: usize) -> Result<&'static PostRecord> {
    number
        .checked_sub(1)
        .and_then(|index| POSTS.get(index))
        .ok_or(PostLookupError::OutOfRange {
            number,
            available: POSTS.len(),
        })
}

/// The most recently published post.
pub fn latest() -> Option<&'static PostRecord> {
    POSTS.last()
}

/// The posts before and after `number`, if any.
pub fn neighbours(number: usize) -> (Option<&'static PostRecord>, Option<&'static PostRecord>) {
    let previous = number.checked_sub(1).and_then(|n| post(n).ok());
    let next = number.checked_add(1).and_then(|n| post(n).ok());
    (previous, next)
}
