use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if !has_email_shape(trimmed) {
            return Err(CoreError::invalid("email", "expected name@domain.tld"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn has_email_shape(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if !local
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '+' | '-'))
    {
        return false;
    }

    let Some((label, rest)) = domain.split_once('.') else {
        return false;
    };
    if label.is_empty() || rest.is_empty() {
        return false;
    }
    if !label.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-') {
        return false;
    }
    rest.chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::Email;

    #[test]
    fn email_accepts_common_shapes() {
        assert!(Email::new("ada@example.com").is_ok());
        assert!(Email::new("ada.lovelace+notes@mail-host.co.uk").is_ok());
    }

    #[test]
    fn email_trims_surrounding_whitespace() {
        let email = Email::new(" ada@example.com ").unwrap();
        assert_eq!(email.as_str(), "ada@example.com");
    }

    #[test]
    fn email_requires_domain_dot() {
        assert!(Email::new("ada@example").is_err());
    }

    #[test]
    fn email_rejects_malformed_input() {
        assert!(Email::new("adaexample.com").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("ada@.com").is_err());
        assert!(Email::new("ada@exa mple.com").is_err());
        assert!(Email::new("ada@one@two.com").is_err());
    }
}
