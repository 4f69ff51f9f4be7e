//! Contact Book - a personal address book library.
//!
//! Stores contact records (name, 10-digit phone numbers, birthday), computes
//! days until the next birthday, persists the whole collection to a JSON
//! file, and supports substring search over names and phone numbers. All
//! operations are synchronous and in-process; the library is intended to be
//! driven by an outer CLI or UI layer.
//!
//! # Architecture
//!
//! - **domain**: validated value objects for names, phones, and birthdays
//! - **models**: the `Record` contact model
//! - **book**: the `AddressBook` collection with search and persistence
//! - **storage**: JSON snapshot save/load
//! - **error**: custom error types for precise error handling
//! - **config**: configuration from environment variables
//!
//! # Example
//!
//! ```
//! use contact_book::{AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//! let mut alice = Record::with_birthday("Alice", "1990-05-20").unwrap();
//! alice.add_phone("1234567890").unwrap();
//! book.add_record(alice);
//!
//! assert_eq!(book.search_contacts("Ali").len(), 1);
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
mod storage;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, StorageError};
pub use models::Record;
