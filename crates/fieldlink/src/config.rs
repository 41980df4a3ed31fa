mod codec;

mod store;
pub use store::{ConfigStore, MemoryConfigStore};

use crate::{join::KeyOptions, MAX_FIELDS};

use fieldlink_core::{
    schema::{FieldId, TableId, ViewId},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Keys under which the host's configuration store keeps each setting.
pub mod keys {
    pub const DEST_TABLE_ID: &str = "destTableId";
    pub const DEST_VIEW_ID: &str = "destViewId";
    pub const DEST_FIELD_IDS: &str = "destFieldIds";
    pub const JOIN_FIELD_ID: &str = "joinFieldId";
    pub const SOURCE_VIEW_ID: &str = "sourceViewId";
    pub const SOURCE_FIELD_IDS: &str = "sourceFieldIds";
    pub const CASE_SENSITIVE: &str = "caseSensitive";
    pub const OVERWRITE_EXISTING: &str = "overwriteExisting";
    pub const JOIN_ON_ALL: &str = "joinOnAll";

    pub const ALL: [&str; 9] = [
        DEST_TABLE_ID,
        DEST_VIEW_ID,
        DEST_FIELD_IDS,
        JOIN_FIELD_ID,
        SOURCE_VIEW_ID,
        SOURCE_FIELD_IDS,
        CASE_SENSITIVE,
        OVERWRITE_EXISTING,
        JOIN_ON_ALL,
    ];
}

/// Everything a linking pass is configured with.
///
/// Ids are stored as picked and may have gone stale since; resolution
/// against the current schema treats unknown ids as absent. Field id lists
/// hold real ids only, never the empty slot an editor shows for adding one
/// more field.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkConfig {
    /// Table whose link field gets written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_table_id: Option<TableId>,

    /// Restricts destination records to one view of the destination table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest_view_id: Option<ViewId>,

    /// Destination fields whose values form the join keys
    #[serde(with = "codec::field_ids", skip_serializing_if = "Vec::is_empty")]
    pub dest_field_ids: Vec<FieldId>,

    /// Link field on the destination table. Its linked table is the source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_field_id: Option<FieldId>,

    /// Restricts source records to one view of the source table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_view_id: Option<ViewId>,

    /// Source fields whose values form the join keys
    #[serde(with = "codec::field_ids", skip_serializing_if = "Vec::is_empty")]
    pub source_field_ids: Vec<FieldId>,

    #[serde(deserialize_with = "codec::flag")]
    pub case_sensitive: bool,

    /// Re-link destination records whose link field already has a value
    #[serde(deserialize_with = "codec::flag")]
    pub overwrite_existing: bool,

    /// Require every configured field to match instead of any one of them
    #[serde(rename = "joinOnAll", deserialize_with = "codec::flag")]
    pub match_all_keys: bool,
}

impl LinkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every recognized key from the host's configuration store.
    ///
    /// Unset keys take their defaults. A key holding a value of the wrong
    /// shape is an error.
    pub fn from_store(store: &impl ConfigStore) -> Result<Self> {
        let values = keys::ALL
            .iter()
            .filter_map(|key| store.get(key).map(|value| (key.to_string(), value)))
            .collect::<serde_json::Map<_, _>>();

        serde_json::from_value(serde_json::Value::Object(values))
            .map_err(|err| Error::invalid_config(err.to_string()))
    }

    /// Sets the destination table.
    ///
    /// Fields picked for the previous table do not apply to the new one, so
    /// the destination view, destination fields and join field are cleared.
    pub fn dest_table(mut self, id: impl Into<TableId>) -> Self {
        self.dest_table_id = Some(id.into());
        self.dest_view_id = None;
        self.dest_field_ids.clear();
        self.join_field_id = None;
        self
    }

    pub fn dest_view(mut self, id: impl Into<ViewId>) -> Self {
        self.dest_view_id = Some(id.into());
        self
    }

    pub fn dest_fields<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldId>,
    {
        self.dest_field_ids = tighten(ids);
        self
    }

    /// Sets the join field.
    ///
    /// The join field decides the source table, so the source view and
    /// source fields are cleared.
    pub fn join_field(mut self, id: impl Into<FieldId>) -> Self {
        self.join_field_id = Some(id.into());
        self.source_view_id = None;
        self.source_field_ids.clear();
        self
    }

    pub fn source_view(mut self, id: impl Into<ViewId>) -> Self {
        self.source_view_id = Some(id.into());
        self
    }

    pub fn source_fields<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldId>,
    {
        self.source_field_ids = tighten(ids);
        self
    }

    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    pub fn overwrite_existing(mut self, value: bool) -> Self {
        self.overwrite_existing = value;
        self
    }

    pub fn match_all_keys(mut self, value: bool) -> Self {
        self.match_all_keys = value;
        self
    }

    pub fn key_options(&self) -> KeyOptions {
        KeyOptions::new(self.case_sensitive, self.match_all_keys)
    }
}

/// Drops duplicate ids, keeping the first occurrence, and caps the list at
/// [`MAX_FIELDS`].
pub fn tighten<I>(ids: I) -> Vec<FieldId>
where
    I: IntoIterator,
    I::Item: Into<FieldId>,
{
    let mut tight: Vec<FieldId> = Vec::with_capacity(MAX_FIELDS);
    for id in ids {
        let id = id.into();
        if tight.len() == MAX_FIELDS {
            break;
        }
        if !tight.contains(&id) {
            tight.push(id);
        }
    }
    tight
}

/// The editable view of a field list: every id plus one empty trailing slot
/// for adding a field, unless the list is already full.
pub fn field_slots(ids: &[FieldId]) -> Vec<Option<FieldId>> {
    let mut slots: Vec<_> = ids.iter().cloned().map(Some).collect();
    if slots.len() < MAX_FIELDS {
        slots.push(None);
    }
    slots
}

/// Applies an edit to one slot of the editable view and returns the stored
/// list. Picking nothing removes the field in that slot. A slot past the end
/// of the view appends the field.
pub fn edit_slot(ids: &[FieldId], slot: usize, field: Option<FieldId>) -> Vec<FieldId> {
    let mut slots = field_slots(ids);
    match slots.get_mut(slot) {
        Some(existing) => *existing = field,
        None => slots.push(field),
    }
    tighten(slots.into_iter().flatten())
}

impl FromStr for LinkConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s)
            .map_err(|err| Error::invalid_config(err.to_string()))
    }
}

impl fmt::Display for LinkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = toml::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&doc)
    }
}
