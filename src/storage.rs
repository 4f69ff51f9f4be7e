//! JSON persistence for the address book.
//!
//! The on-disk format is one pretty-printed JSON object keyed by contact
//! name, each entry holding `{name, phones, birthday}`. Phones and
//! birthdays pass through their validating deserializers on the way back
//! in, so a hand-edited file with bad values fails the whole load.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::StorageResult;
use crate::models::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Wire representation of one record, matching the stored file shape.
#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl From<&Record> for StoredRecord {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().as_str().to_string(),
            phones: record.phones().to_vec(),
            birthday: record.birthday().copied(),
        }
    }
}

impl From<StoredRecord> for Record {
    fn from(stored: StoredRecord) -> Self {
        Record::from_parts(
            ContactName::new(stored.name),
            stored.phones,
            stored.birthday,
        )
    }
}

/// Write the full snapshot of `records` to `path` as pretty-printed JSON
/// with 4-space indentation, overwriting any existing file.
pub(crate) fn save(path: &Path, records: &IndexMap<String, Record>) -> StorageResult<()> {
    let snapshot: IndexMap<&str, StoredRecord> = records
        .iter()
        .map(|(name, record)| (name.as_str(), StoredRecord::from(record)))
        .collect();

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    snapshot.serialize(&mut ser)?;
    writer.flush()?;

    tracing::debug!(path = %path.display(), records = snapshot.len(), "Saved address book");
    Ok(())
}

/// Read one JSON object from `path` and rebuild the full record mapping,
/// re-validating every phone and birthday. All-or-nothing: any I/O, parse,
/// or validation failure returns an error without producing a partial map.
pub(crate) fn load(path: &Path) -> StorageResult<IndexMap<String, Record>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let stored: IndexMap<String, StoredRecord> = serde_json::from_reader(reader)?;

    let records: IndexMap<String, Record> = stored
        .into_iter()
        .map(|(name, stored)| (name, Record::from(stored)))
        .collect();

    tracing::debug!(path = %path.display(), records = records.len(), "Loaded address book");
    Ok(records)
}
