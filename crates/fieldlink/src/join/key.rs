use fieldlink_core::{schema::FieldId, stmt::CellSource};

/// Joins the per-field values of a composite key.
pub const KEY_DELIMITER: &str = ",";

/// How join keys are derived and compared.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyOptions {
    /// Compare keys verbatim. When false, keys are lowercased first.
    pub case_sensitive: bool,

    /// Match on one composite key built from every field instead of on any
    /// single field.
    pub match_all_keys: bool,
}

/// A field slot that may be empty.
///
/// Editable field lists carry an empty trailing slot; stored lists do not.
/// Both can be handed to key derivation, which skips empty slots.
pub trait FieldRef {
    fn field_id(&self) -> Option<&FieldId>;
}

impl FieldRef for FieldId {
    fn field_id(&self) -> Option<&FieldId> {
        Some(self)
    }
}

impl FieldRef for Option<FieldId> {
    fn field_id(&self) -> Option<&FieldId> {
        self.as_ref()
    }
}

impl<T: FieldRef + ?Sized> FieldRef for &T {
    fn field_id(&self) -> Option<&FieldId> {
        (**self).field_id()
    }
}

impl KeyOptions {
    pub fn new(case_sensitive: bool, match_all_keys: bool) -> Self {
        Self {
            case_sensitive,
            match_all_keys,
        }
    }

    fn normalize(&self, value: String) -> String {
        if self.case_sensitive {
            value
        } else {
            value.to_lowercase()
        }
    }
}

fn key_parts(
    record: &impl CellSource,
    field_ids: &[impl FieldRef],
    options: KeyOptions,
) -> Vec<String> {
    field_ids
        .iter()
        .filter_map(FieldRef::field_id)
        .map(|field| options.normalize(record.cell_value_as_string(field)))
        .collect()
}

/// Derives the join keys of one record.
///
/// Empty slots in `field_ids` are skipped. In any-key mode every non-empty
/// field value is a key, in field order. In all-keys mode the single key is
/// every value joined by [`KEY_DELIMITER`], empty values included, so a
/// record whose fields are all empty still yields one key made of bare
/// delimiters. Use [`usable_keys`] to get only keys that may match.
pub fn derive_keys(
    record: &impl CellSource,
    field_ids: &[impl FieldRef],
    options: KeyOptions,
) -> Vec<String> {
    let parts = key_parts(record, field_ids, options);

    if options.match_all_keys {
        vec![parts.join(KEY_DELIMITER)]
    } else {
        parts.into_iter().filter(|part| !part.is_empty()).collect()
    }
}

/// Like [`derive_keys`], minus keys that must never match: empty keys, and
/// composite keys whose every component is empty.
pub fn usable_keys(
    record: &impl CellSource,
    field_ids: &[impl FieldRef],
    options: KeyOptions,
) -> Vec<String> {
    if !options.match_all_keys {
        return derive_keys(record, field_ids, options);
    }

    let parts = key_parts(record, field_ids, options);
    if parts.iter().all(String::is_empty) {
        return vec![];
    }

    vec![parts.join(KEY_DELIMITER)]
}
