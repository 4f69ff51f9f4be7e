//! The address book: an ordered mapping from contact name to record.

use crate::error::StorageResult;
use crate::models::Record;
use crate::storage;
use indexmap::IndexMap;
use std::path::Path;

/// The full collection of contact records, keyed by contact name.
///
/// Entries keep insertion order. Adding a record under a name that already
/// exists silently replaces the previous entry, mirroring plain mapping
/// semantics.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut alice = Record::new("Alice");
/// alice.add_phone("1234567890").unwrap();
/// book.add_record(alice);
///
/// assert!(book.get("Alice").is_some());
/// assert_eq!(book.search_contacts("123").len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its name, replacing and returning any
    /// previous record stored under the same name.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        self.records.insert(key, record)
    }

    /// Remove and return the record stored under `name`, if any.
    ///
    /// Remaining entries keep their relative order.
    pub fn remove_record(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    /// Look up a record by contact name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by contact name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Iterate over `(name, record)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find all records whose name or any phone number contains `query` as
    /// an exact, case-sensitive substring. Results follow insertion order.
    pub fn search_contacts(&self, query: &str) -> Vec<&Record> {
        let matches: Vec<&Record> = self
            .records
            .values()
            .filter(|record| {
                record.name().as_str().contains(query)
                    || record.phones().iter().any(|p| p.as_str().contains(query))
            })
            .collect();

        tracing::debug!(query, matches = matches.len(), "Searched contacts");
        matches
    }

    /// Write the entire book to `path` as pretty-printed JSON, overwriting
    /// any existing file.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the file cannot be created or written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        storage::save(path.as_ref(), &self.records)
    }

    /// Replace the entire contents of the book with the records stored at
    /// `path`, re-validating every phone and birthday.
    ///
    /// All-or-nothing: on any I/O, parse, or validation error the book's
    /// previous contents are left untouched.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the file is missing, is not valid JSON,
    /// or holds a record that fails re-validation.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> StorageResult<()> {
        let records = storage::load(path.as_ref())?;
        self.records = records;
        Ok(())
    }
}
