use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

const MIN_LEN: usize = 5;
const MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            return Err(CoreError::invalid(
                "address",
                format!("must be between {} and {} characters", MIN_LEN, MAX_LEN),
            ));
        }
        if !trimmed.chars().all(is_allowed_char) {
            return Err(CoreError::invalid("address", "contains unsupported characters"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_allowed_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch.is_whitespace() || matches!(ch, '.' | ',' | '-')
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
