use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.chars().count() < 2 {
            return Err(CoreError::invalid("tag", "must be at least 2 characters"));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Tag;

    #[test]
    fn tag_trims_and_lowercases() {
        let tag = Tag::new(" Work ").unwrap();
        assert_eq!(tag.as_str(), "work");
    }

    #[test]
    fn tag_requires_two_characters() {
        assert!(Tag::new("a").is_err());
        assert!(Tag::new(" x ").is_err());
        assert!(Tag::new("ok").is_ok());
    }
}
