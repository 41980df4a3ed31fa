use crate::join::{usable_keys, FieldRef, KeyIndex, KeyOptions};

use fieldlink_core::{
    schema::FieldId,
    stmt::{Record, RecordId, RecordLink, RecordUpdate},
};

/// A destination record paired with the source record it will link to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkCandidate<'a> {
    pub record: &'a Record,
    pub matched: &'a Record,
}

impl LinkCandidate<'_> {
    /// The link written into the destination record's join field.
    pub fn link(&self) -> RecordLink {
        RecordLink::new(self.matched.id.clone(), self.matched.name.clone())
    }

    /// The update that links the destination record to its match.
    pub fn to_update(&self, join_field: &FieldId) -> RecordUpdate {
        link_update(&self.record.id, join_field, self.link())
    }
}

/// Sets the join field of `record` to a single reference to `link`,
/// replacing whatever links it held before.
pub(crate) fn link_update(
    record: &RecordId,
    join_field: &FieldId,
    link: RecordLink,
) -> RecordUpdate {
    RecordUpdate::new(record.clone()).set(join_field.clone(), vec![link])
}

/// Matches destination records against the source index.
///
/// Records are visited in input order. A record whose join field already
/// links somewhere is skipped unless `overwrite_existing` is set. Otherwise
/// its keys are probed in derivation order and the first key found in the
/// index decides the match; there is no scoring across keys. Records without
/// a match are left out.
///
/// The result depends only on the inputs, and no candidate depends on
/// another, so the derived updates may be submitted in any grouping.
pub fn plan_updates<'a>(
    destination: &'a [Record],
    dest_field_ids: &[impl FieldRef],
    index: &KeyIndex<'a, Record>,
    join_field: &FieldId,
    options: KeyOptions,
    overwrite_existing: bool,
) -> Vec<LinkCandidate<'a>> {
    destination
        .iter()
        .filter(|record| overwrite_existing || record.cell_value(join_field).link_count() == 0)
        .filter_map(|record| {
            let keys = usable_keys(record, dest_field_ids, options);
            index
                .probe(&keys)
                .map(|matched| LinkCandidate { record, matched })
        })
        .collect()
}
