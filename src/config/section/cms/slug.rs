//! Content slugs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("slug must not be empty")]
    Empty,

    #[error("slug `{0}` contains a path separator")]
    Separator(String),

    #[error("slug `{0}` must not start with '.'")]
    Hidden(String),
}

/// Check that `slug` names a single file inside a collection directory.
pub fn validate_slug(slug: &str) -> Result<&str, SlugError> {
    let slug = slug.trim();
    if slug.is_empty() {
        return Err(SlugError::Empty);
    }
    if slug.contains(['/', '\\']) {
        return Err(SlugError::Separator(slug.to_string()));
    }
    if slug.starts_with('.') {
        return Err(SlugError::Hidden(slug.to_string()));
    }
    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slug() {
        assert_eq!(validate_slug("hello-world"), Ok("hello-world"));
        assert_eq!(validate_slug(" primer-post "), Ok("primer-post"));
    }

    #[test]
    fn test_invalid_slugs() {
        assert_eq!(validate_slug("  "), Err(SlugError::Empty));
        assert!(matches!(validate_slug("a/b"), Err(SlugError::Separator(_))));
        assert!(matches!(validate_slug("a\\b"), Err(SlugError::Separator(_))));
        assert!(matches!(validate_slug(".."), Err(SlugError::Hidden(_))));
        assert!(matches!(validate_slug(".env"), Err(SlugError::Hidden(_))));
    }
}
