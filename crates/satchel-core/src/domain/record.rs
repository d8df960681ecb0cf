use crate::domain::{Address, Birthday, ContactName, Email, Phone};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

const PLACEHOLDER: &str = "-";

/// One contact: a name, any number of unique phones and emails (insertion
/// order preserved), and optional birthday and address. Failed mutations
/// leave the record unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,
    phones: Vec<Phone>,
    emails: Vec<Email>,
    birthday: Option<Birthday>,
    address: Option<Address>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self, CoreError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            emails: Vec::new(),
            birthday: None,
            address: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        let phone = Phone::new(raw)?;
        if self.phones.contains(&phone) {
            return Err(CoreError::duplicate("phone", phone.as_str()));
        }
        self.phones.push(phone);
        Ok(())
    }

    pub fn remove_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        let phone = Phone::new(raw)?;
        let index = self
            .phones
            .iter()
            .position(|existing| *existing == phone)
            .ok_or_else(|| CoreError::not_found("phone", phone.as_str()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replaces `old` with `new` in place, keeping its position in the list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), CoreError> {
        let old = Phone::new(old)?;
        let new = Phone::new(new)?;
        let index = self
            .phones
            .iter()
            .position(|existing| *existing == old)
            .ok_or_else(|| CoreError::not_found("phone", old.as_str()))?;
        if new != old && self.phones.contains(&new) {
            return Err(CoreError::duplicate("phone", new.as_str()));
        }
        self.phones[index] = new;
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Result<&Phone, CoreError> {
        let phone = Phone::new(raw)?;
        self.phones
            .iter()
            .find(|existing| **existing == phone)
            .ok_or_else(|| CoreError::not_found("phone", phone.as_str()))
    }

    pub fn add_email(&mut self, raw: &str) -> Result<(), CoreError> {
        let email = Email::new(raw)?;
        if self.emails.contains(&email) {
            return Err(CoreError::duplicate("email", email.as_str()));
        }
        self.emails.push(email);
        Ok(())
    }

    pub fn remove_email(&mut self, raw: &str) -> Result<(), CoreError> {
        let email = Email::new(raw)?;
        let index = self
            .emails
            .iter()
            .position(|existing| *existing == email)
            .ok_or_else(|| CoreError::not_found("email", email.as_str()))?;
        self.emails.remove(index);
        Ok(())
    }

    pub fn edit_email(&mut self, old: &str, new: &str) -> Result<(), CoreError> {
        let old = Email::new(old)?;
        let new = Email::new(new)?;
        let index = self
            .emails
            .iter()
            .position(|existing| *existing == old)
            .ok_or_else(|| CoreError::not_found("email", old.as_str()))?;
        if new != old && self.emails.contains(&new) {
            return Err(CoreError::duplicate("email", new.as_str()));
        }
        self.emails[index] = new;
        Ok(())
    }

    pub fn find_email(&self, raw: &str) -> Result<&Email, CoreError> {
        let email = Email::new(raw)?;
        self.emails
            .iter()
            .find(|existing| **existing == email)
            .ok_or_else(|| CoreError::not_found("email", email.as_str()))
    }

    /// Last write wins; an existing birthday is replaced without warning.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), CoreError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    pub fn remove_birthday(&mut self) {
        self.birthday = None;
    }

    pub fn set_address(&mut self, raw: &str) -> Result<(), CoreError> {
        self.address = Some(Address::new(raw)?);
        Ok(())
    }

    pub fn remove_address(&mut self) {
        self.address = None;
    }

    pub fn phone_matches(&self, term: &str) -> bool {
        self.phones.iter().any(|phone| phone.as_str().contains(term))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = join_or_placeholder(self.phones.iter().map(|phone| phone.as_str()));
        let emails = join_or_placeholder(self.emails.iter().map(|email| email.as_str()));
        let birthday = self
            .birthday
            .map(|birthday| birthday.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let address = self
            .address
            .as_ref()
            .map(|address| address.as_str().to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        write!(
            f,
            "name: {} | phones: {} | emails: {} | birthday: {} | address: {}",
            self.name, phones, emails, birthday, address
        )
    }
}

fn join_or_placeholder<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let joined = values.collect::<Vec<_>>().join("; ");
    if joined.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::error::CoreErrorKind;

    #[test]
    fn add_phone_rejects_duplicate_and_keeps_list_unchanged() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("0501234567").unwrap();
        let err = record.add_phone("0501234567").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Duplicate);
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("0501234567").unwrap();
        record.add_phone("0667654321").unwrap();
        record.edit_phone("0501234567", "0999999999").unwrap();

        assert_eq!(record.phones()[0].as_str(), "0999999999");
        assert!(record.find_phone("0999999999").is_ok());
        let err = record.find_phone("0501234567").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::NotFound);
    }

    #[test]
    fn edit_phone_rejects_collision_with_another_entry() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("0501234567").unwrap();
        record.add_phone("0667654321").unwrap();
        let err = record.edit_phone("0501234567", "0667654321").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Duplicate);
        assert_eq!(record.phones()[0].as_str(), "0501234567");
    }

    #[test]
    fn edit_phone_to_itself_is_allowed() {
        let mut record = Record::new("Ada").unwrap();
        record.add_phone("0501234567").unwrap();
        record.edit_phone("0501234567", "0501234567").unwrap();
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn remove_phone_requires_existing_entry() {
        let mut record = Record::new("Ada").unwrap();
        let err = record.remove_phone("0501234567").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::NotFound);
    }

    #[test]
    fn emails_follow_the_same_uniqueness_rules() {
        let mut record = Record::new("Ada").unwrap();
        record.add_email("ada@example.com").unwrap();
        let err = record.add_email("ada@example.com").unwrap_err();
        assert_eq!(err.kind(), CoreErrorKind::Duplicate);
        record.edit_email("ada@example.com", "ada@mail.org").unwrap();
        assert!(record.find_email("ada@mail.org").is_ok());
    }

    #[test]
    fn set_birthday_replaces_unconditionally() {
        let mut record = Record::new("Ada").unwrap();
        record.set_birthday("15.06.1990").unwrap();
        record.set_birthday("01.01.1991").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "01.01.1991");
        record.remove_birthday();
        assert!(record.birthday().is_none());
    }

    #[test]
    fn display_uses_placeholder_for_absent_fields() {
        let record = Record::new("Ada").unwrap();
        let rendered = record.to_string();
        assert_eq!(
            rendered,
            "name: Ada | phones: - | emails: - | birthday: - | address: -"
        );
    }
}
