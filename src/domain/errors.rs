//! Domain validation errors.

use std::fmt;

/// Errors that can occur when validating contact field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not a string of exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a valid `YYYY-MM-DD` calendar date.
    InvalidBirthday(String),

    /// The phone number targeted by an edit is not on the record.
    PhoneNotFound(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(
                f,
                "Invalid phone number format. Please enter a 10 digit phone number."
            ),
            Self::InvalidBirthday(_) => {
                write!(f, "Incorrect birthday format. Use the YYYY-MM-DD format")
            }
            Self::PhoneNotFound(_) => write!(
                f,
                "Phone number to edit does not exist in the contact's phone list."
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
