use crate::{config::tighten, LinkConfig};

use fieldlink_core::schema::{Field, FieldId, Schema, Table, View};

/// A [`LinkConfig`] resolved against the current schema.
///
/// Every stored id that no longer resolves is treated as absent. A side is
/// only usable when all of its configured ids still resolve: a pass never
/// matches on a subset of the fields the user picked.
#[derive(Debug)]
pub struct Resolved<'a> {
    pub dest_table: Option<&'a Table>,

    pub dest_view: Option<&'a View>,

    /// Destination fields that still exist, in configured order
    pub dest_fields: Vec<&'a Field>,

    /// Configured destination field ids, deduplicated and capped
    pub dest_field_ids: Vec<FieldId>,

    /// The join field, if it still exists on the destination table
    pub join_field: Option<&'a Field>,

    /// The table the join field links to
    pub source_table: Option<&'a Table>,

    pub source_view: Option<&'a View>,

    /// Source fields that still exist, in configured order
    pub source_fields: Vec<&'a Field>,

    /// Configured source field ids, deduplicated and capped
    pub source_field_ids: Vec<FieldId>,
}

impl<'a> Resolved<'a> {
    pub fn new(schema: &'a Schema, config: &LinkConfig) -> Self {
        let dest_table = config
            .dest_table_id
            .as_ref()
            .and_then(|id| schema.table_if_exists(id));

        let dest_view = dest_table.and_then(|table| {
            config
                .dest_view_id
                .as_ref()
                .and_then(|id| table.view_if_exists(id))
        });

        let dest_field_ids = tighten(config.dest_field_ids.iter().cloned());
        let dest_fields = existing_fields(dest_table, &dest_field_ids);

        let join_field = dest_table.and_then(|table| {
            config
                .join_field_id
                .as_ref()
                .and_then(|id| table.field_if_exists(id))
        });

        let source_table = join_field.and_then(|field| schema.linked_table(field));

        let source_view = source_table.and_then(|table| {
            config
                .source_view_id
                .as_ref()
                .and_then(|id| table.view_if_exists(id))
        });

        let source_field_ids = tighten(config.source_field_ids.iter().cloned());
        let source_fields = existing_fields(source_table, &source_field_ids);

        Self {
            dest_table,
            dest_view,
            dest_fields,
            dest_field_ids,
            join_field,
            source_table,
            source_view,
            source_fields,
            source_field_ids,
        }
    }

    /// Source records can be indexed: the source table exists, at least one
    /// source field is configured, and every configured source field exists.
    pub fn source_ready(&self) -> bool {
        self.source_table.is_some()
            && !self.source_field_ids.is_empty()
            && self.source_fields.len() == self.source_field_ids.len()
    }

    /// Destination records can be matched: the join field exists and every
    /// configured destination field exists.
    pub fn dest_ready(&self) -> bool {
        self.join_field.is_some() && self.dest_fields.len() == self.dest_field_ids.len()
    }

    /// At least one field resolves on each side.
    pub fn has_match_fields(&self) -> bool {
        !self.dest_fields.is_empty() && !self.source_fields.is_empty()
    }
}

fn existing_fields<'a>(table: Option<&'a Table>, ids: &[FieldId]) -> Vec<&'a Field> {
    let Some(table) = table else {
        return vec![];
    };

    ids.iter()
        .filter_map(|id| table.field_if_exists(id))
        .collect()
}
