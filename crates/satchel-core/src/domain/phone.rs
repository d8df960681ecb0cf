use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.len() != 10 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::invalid("phone", "must consist of 10 digits"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Phone;

    #[test]
    fn phone_accepts_ten_digits() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn phone_trims_surrounding_whitespace() {
        let phone = Phone::new(" 0501234567 ").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn phone_rejects_wrong_length() {
        assert!(Phone::new("050123456").is_err());
        assert!(Phone::new("05012345678").is_err());
    }

    #[test]
    fn phone_rejects_non_digits() {
        assert!(Phone::new("05O1234567").is_err());
        assert!(Phone::new("050-123-45").is_err());
    }
}
