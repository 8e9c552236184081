use std::collections::BTreeMap;

use crate::{RawRecord, SourceError};

/// Supplies raw records by key.
///
/// `Ok(None)` means the record is legitimately absent. Implementations should
/// return at most `page_size` posts.
pub trait RecordSource {
    fn fetch(&self, key: i64, page_size: usize) -> Result<Option<RawRecord>, SourceError>;
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn fetch(&self, key: i64, page_size: usize) -> Result<Option<RawRecord>, SourceError> {
        (**self).fetch(key, page_size)
    }
}

/// Canned records keyed by user id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordSource {
    records: BTreeMap<i64, RawRecord>,
}

impl InMemoryRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a source from records; two records for the same user are rejected.
    pub fn from_records(
        records: impl IntoIterator<Item = RawRecord>,
    ) -> Result<Self, SourceError> {
        let mut source = Self::new();
        for record in records {
            let key = record.user.id;
            if source.records.insert(key, record).is_some() {
                return Err(SourceError::Malformed(format!(
                    "duplicate record for user {key}"
                )));
            }
        }
        Ok(source)
    }

    /// Parses a JSON array of raw records.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let records: Vec<RawRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn insert(&mut self, record: RawRecord) -> Option<RawRecord> {
        self.records.insert(record.user.id, record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for InMemoryRecordSource {
    fn fetch(&self, key: i64, page_size: usize) -> Result<Option<RawRecord>, SourceError> {
        Ok(self.records.get(&key).map(|record| {
            let mut record = record.clone();
            record.posts.truncate(page_size);
            record
        }))
    }
}
