//! Error types for post lookup.

use thiserror::Error;

/// Result type alias using `PostLookupError`.
pub type Result<T> = std::result::Result<T, PostLookupError>;

/// Why a URL did not resolve to a blog post.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostLookupError {
    /// The path does not end in a post number.
    #[error("No post number at the end of `{path}`")]
    MissingNumber { path: String },

    /// The trailing digits do not fit a post number.
    #[error("`{digits}` is not a valid post number")]
    InvalidNumber { digits: String },

    /// The number is zero or past the last post.
    #[error("Post {number} does not exist (there are {available} posts)")]
    OutOfRange { number: usize, available: usize },
}

impl PostLookupError {
    /// Create a new missing-number error.
    pub fn missing_number(path: impl Into<String>) -> Self {
        Self::MissingNumber { path: path.into() }
    }

    /// Create a new invalid-number error.
    pub fn invalid_number(digits: impl Into<String>) -> Self {
        Self::InvalidNumber {
            digits: digits.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_number_error() {
        let err = PostLookupError::missing_number("/Blog");
        assert!(err.to_string().contains("No post number"));
        assert!(err.to_string().contains("/Blog"));
    }

    #[test]
    fn test_out_of_range_error() {
        let err = PostLookupError::OutOfRange {
            number: 9,
            available: 3,
        };
        assert_eq!(err.to_string(), "Post 9 does not exist (there are 3 posts)");
    }

    #[test]
    fn test_invalid_number_error() {
        let err = PostLookupError::invalid_number("99999999999999999999999");
        assert!(err.to_string().contains("not a valid post number"));
    }
}
