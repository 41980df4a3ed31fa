use super::{usable_keys, FieldRef, KeyOptions};

use fieldlink_core::stmt::CellSource;
use indexmap::IndexMap;
use tracing::debug;

/// Maps join keys to the source record they identify.
///
/// Each key maps to exactly one record. When several source records produce
/// the same key, the record that comes last in iteration order wins and the
/// earlier ones become unreachable through that key. Collisions are not
/// reported. Keys iterate in the order they were first seen.
#[derive(Debug)]
pub struct KeyIndex<'a, R> {
    entries: IndexMap<String, &'a R>,
}

impl<'a, R: CellSource> KeyIndex<'a, R> {
    /// Indexes `records` by the keys derived from `field_ids`.
    ///
    /// The index is empty when there are no records, no usable fields, or
    /// every derived key is empty.
    pub fn build(
        records: impl IntoIterator<Item = &'a R>,
        field_ids: &[impl FieldRef],
        options: KeyOptions,
    ) -> Self {
        let mut entries = IndexMap::new();
        let mut num_records = 0;

        for record in records {
            num_records += 1;

            for key in usable_keys(record, field_ids, options) {
                if key.is_empty() {
                    continue;
                }
                entries.insert(key, record);
            }
        }

        debug!(
            records = num_records,
            keys = entries.len(),
            "built join key index"
        );

        Self { entries }
    }
}

impl<'a, R> KeyIndex<'a, R> {
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a R> {
        self.entries.get(key).copied()
    }

    /// Returns the record for the first key that hits. Keys after the first
    /// hit are not consulted.
    pub fn probe<K: AsRef<str>>(&self, keys: impl IntoIterator<Item = K>) -> Option<&'a R> {
        keys.into_iter().find_map(|key| self.get(key.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a R)> + '_ {
        self.entries
            .iter()
            .map(|(key, record)| (key.as_str(), *record))
    }
}

impl<R> Default for KeyIndex<'_, R> {
    fn default() -> Self {
        Self::empty()
    }
}
