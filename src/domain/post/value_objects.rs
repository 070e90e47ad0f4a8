use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::slug::is_valid_slug;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(i64);

impl PostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("post id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PostId> for i64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A URL slug that is known to match `^[a-z0-9]+(-[a-z0-9]+)*$`.
///
/// Uniqueness is not part of the type; see
/// [`PostSlugService`](crate::domain::post::services::PostSlugService).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostSlug(String);

impl PostSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_valid_slug(&value) {
            return Err(DomainError::Validation(format!(
                "invalid slug '{value}': use lowercase letters, digits and single hyphens"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// `{self}-{n}`; a valid slug plus a numeric segment stays valid.
    pub fn with_suffix(&self, n: u64) -> Self {
        Self(format!("{}-{}", self.0, n))
    }
}

impl fmt::Display for PostSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostBody(String);

impl PostBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("body cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_id_rejects_non_positive() {
        assert!(PostId::new(0).is_err());
        assert!(PostId::new(-4).is_err());
        assert_eq!(i64::from(PostId::new(9).unwrap()), 9);
    }

    #[test]
    fn slug_requires_valid_pattern() {
        assert!(PostSlug::new("launch-day").is_ok());
        assert!(PostSlug::new("Launch-Day").is_err());
        assert!(PostSlug::new("launch--day").is_err());
        assert!(PostSlug::new("").is_err());
    }

    #[test]
    fn slug_suffix_appends_counter() {
        let slug = PostSlug::new("launch-day").unwrap();
        assert_eq!(slug.with_suffix(2).as_str(), "launch-day-2");
    }

    #[test]
    fn blank_title_and_body_are_rejected() {
        assert!(PostTitle::new("   ").is_err());
        assert!(PostBody::new("\n").is_err());
    }
}
