//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use chrono::{Local, NaiveDate};
use std::fmt;

/// A single contact: a name, an ordered list of phone numbers, and an
/// optional birthday.
///
/// The name is fixed at construction and keys the contact inside an
/// [`AddressBook`](crate::AddressBook). Phone numbers keep their insertion
/// order and duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ContactName::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create a new record with a birthday, validating the date string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if `birthday` is not a
    /// valid `YYYY-MM-DD` date.
    pub fn with_birthday(
        name: impl Into<String>,
        birthday: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let mut record = Self::new(name);
        record.set_birthday(birthday)?;
        Ok(record)
    }

    /// Reassemble a record from already-validated parts (used when loading
    /// from storage).
    pub(crate) fn from_parts(
        name: ContactName,
        phones: Vec<PhoneNumber>,
        birthday: Option<Birthday>,
    ) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or replace the birthday, validating the date string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` on an invalid date; the
    /// existing birthday is left untouched.
    pub fn set_birthday(&mut self, birthday: impl AsRef<str>) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Remove the birthday, if any.
    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Validate and append a phone number. Duplicates are permitted.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `number` is not exactly
    /// 10 digits.
    pub fn add_phone(&mut self, number: impl Into<String>) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `number`. Silently does nothing if
    /// no phone matches.
    pub fn remove_phone(&mut self, number: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == number) {
            self.phones.remove(pos);
        }
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PhoneNotFound` if `old` is not on the
    /// record, or `ValidationError::InvalidPhone` if `new` fails
    /// validation. The phone list is unchanged on either error.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> Result<(), ValidationError> {
        let pos = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| ValidationError::PhoneNotFound(old.to_string()))?;
        self.phones[pos] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// Find the first phone equal to `number`, or `None`.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Days until the next occurrence of this contact's birthday, counted
    /// from today's local date. `None` if no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days until the next birthday occurrence counted from an explicit
    /// date. `None` if no birthday is set.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|b| b.days_until_next(today))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_record_new() {
        let record = Record::new("Alice");
        assert_eq!(record.name().as_str(), "Alice");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_with_birthday() {
        let record = Record::with_birthday("Alice", "1990-05-20").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "1990-05-20");

        assert!(Record::with_birthday("Alice", "garbage").is_err());
    }

    #[test]
    fn test_add_phone() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        assert_eq!(record.phones().len(), 2);
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn test_add_phone_invalid() {
        let mut record = Record::new("Alice");
        let err = record.add_phone("12345").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPhone(_)));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone_first_match_only() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        record.add_phone("1234567890").unwrap();

        record.remove_phone("1234567890");
        let remaining: Vec<_> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(remaining, vec!["0987654321", "1234567890"]);
    }

    #[test]
    fn test_remove_phone_missing_is_noop() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();
        record.remove_phone("5555555555");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();

        record.edit_phone("1234567890", "1112223333").unwrap();
        let phones: Vec<_> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1112223333", "0987654321"]);
    }

    #[test]
    fn test_edit_phone_missing_target() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();

        let err = record.edit_phone("5555555555", "1112223333").unwrap_err();
        assert!(matches!(err, ValidationError::PhoneNotFound(_)));
        assert_eq!(
            err.to_string(),
            "Phone number to edit does not exist in the contact's phone list."
        );
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn test_edit_phone_invalid_replacement_leaves_phones_unchanged() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();

        let err = record.edit_phone("1234567890", "bad").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPhone(_)));
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn test_find_phone() {
        let mut record = Record::new("Alice");
        record.add_phone("1234567890").unwrap();

        assert_eq!(
            record.find_phone("1234567890").map(|p| p.as_str()),
            Some("1234567890")
        );
        assert!(record.find_phone("5555555555").is_none());
    }

    #[test]
    fn test_days_to_birthday_scenarios() {
        let record = Record::with_birthday("Alice", "1990-05-20").unwrap();

        let day_before = NaiveDate::from_ymd_opt(2024, 5, 19).unwrap();
        assert_eq!(record.days_to_birthday_from(day_before), Some(1));

        let day_after = NaiveDate::from_ymd_opt(2024, 5, 21).unwrap();
        assert_eq!(record.days_to_birthday_from(day_after), Some(364));
    }

    #[test]
    fn test_days_to_birthday_without_birthday() {
        let record = Record::new("Alice");
        assert_eq!(record.days_to_birthday(), None);
    }

    #[test]
    fn test_display() {
        let mut record = Record::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 0987654321"
        );
    }

    #[test]
    fn test_display_no_phones() {
        let record = Record::new("John");
        assert_eq!(record.to_string(), "Contact name: John, phones: ");
    }

    #[test]
    fn test_clear_birthday() {
        let mut record = Record::with_birthday("Alice", "1990-05-20").unwrap();
        record.clear_birthday();
        assert!(record.birthday().is_none());
    }
}
