mod planner;
pub use planner::{plan_updates, LinkCandidate};

mod preview;
pub use preview::PreviewRow;

mod status;
pub use status::Status;

use crate::{join::KeyIndex, resolve::Resolved, LinkConfig};

use fieldlink_core::{
    schema::{Field, FieldId, TableId},
    stmt::{Record, RecordLink, RecordUpdate},
};
use tracing::debug;

const PROMPT: &str = "Pick a table, linked record field, and matching fields to update linked \
                      records based on matching field values";

/// The outcome of one matching pass, ready to be confirmed and applied.
///
/// A plan owns copies of the records it links, so it outlives the snapshots
/// it was computed from.
#[derive(Debug, Clone)]
pub struct Plan {
    dest_table: Option<(TableId, String)>,

    join_field: Option<Field>,

    /// Destination match fields that still exist
    dest_fields: Vec<Field>,

    primary_field: Option<FieldId>,

    links: Vec<PlannedLink>,

    status: Status,

    overwrite_existing: bool,
}

/// An owned [`LinkCandidate`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedLink {
    /// The destination record as read
    pub record: Record,

    /// The source record it will link to
    pub matched: RecordLink,
}

impl PlannedLink {
    /// The update that links the destination record to its match.
    pub fn to_update(&self, join_field: &FieldId) -> RecordUpdate {
        planner::link_update(&self.record.id, join_field, self.matched.clone())
    }
}

impl From<LinkCandidate<'_>> for PlannedLink {
    fn from(candidate: LinkCandidate<'_>) -> Self {
        PlannedLink {
            record: candidate.record.clone(),
            matched: candidate.link(),
        }
    }
}

impl Plan {
    /// Runs the matching pass over record snapshots.
    ///
    /// `dest_records` and `source_records` are the records of the resolved
    /// destination and source tables (or views). A side that is not ready
    /// contributes nothing, whatever records are passed for it.
    pub fn build(
        resolved: &Resolved<'_>,
        config: &LinkConfig,
        dest_records: &[Record],
        source_records: &[Record],
        updating: bool,
    ) -> Plan {
        let options = config.key_options();

        let index = if resolved.source_ready() {
            KeyIndex::build(source_records, &resolved.source_field_ids, options)
        } else {
            KeyIndex::empty()
        };

        let links = match resolved.join_field {
            Some(join_field) if resolved.dest_ready() => plan_updates(
                dest_records,
                &resolved.dest_field_ids,
                &index,
                &join_field.id,
                options,
                config.overwrite_existing,
            )
            .into_iter()
            .map(PlannedLink::from)
            .collect(),
            _ => vec![],
        };

        let status = if resolved.dest_table.is_none() {
            Status::NoDestinationTable
        } else if resolved.source_table.is_none() {
            Status::NoSourceTable
        } else if updating {
            Status::Updating
        } else if !resolved.has_match_fields() {
            Status::MissingMatchFields
        } else {
            Status::Ready
        };

        debug!(
            destination = dest_records.len(),
            source = source_records.len(),
            keys = index.len(),
            links = links.len(),
            ?status,
            "planned links"
        );

        Plan {
            dest_table: resolved
                .dest_table
                .map(|table| (table.id.clone(), table.name.clone())),
            join_field: resolved.join_field.cloned(),
            dest_fields: resolved
                .dest_fields
                .iter()
                .map(|field| (*field).clone())
                .collect(),
            primary_field: resolved
                .dest_table
                .and_then(|table| table.primary_field())
                .map(|field| field.id.clone()),
            links,
            status,
            overwrite_existing: config.overwrite_existing,
        }
    }

    pub fn links(&self) -> &[PlannedLink] {
        &self.links
    }

    /// Number of records the plan updates
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The link action is enabled: a field resolves on each side and no
    /// update is in flight.
    pub fn can_update(&self) -> bool {
        self.status.is_ready()
    }

    pub fn dest_table_id(&self) -> Option<&TableId> {
        self.dest_table.as_ref().map(|(id, _)| id)
    }

    /// One update per planned link, in destination record order. Each sets
    /// the join field to a single reference to the matched record.
    pub fn updates(&self) -> Vec<RecordUpdate> {
        let Some(join_field) = &self.join_field else {
            return vec![];
        };

        self.links
            .iter()
            .map(|link| link.to_update(&join_field.id))
            .collect()
    }

    /// Headline describing what applying the plan does.
    pub fn summary(&self) -> String {
        let (Some(join_field), Some((_, table_name))) = (&self.join_field, &self.dest_table) else {
            return PROMPT.to_string();
        };

        if self.status == Status::Updating {
            return Status::Updating.to_string();
        }

        format!(
            "The {} field of {} {} in the {} table will be updated",
            join_field.name,
            group_thousands(self.len()),
            if self.len() == 1 { "record" } else { "records" },
            table_name
        )
    }

    /// Text for the prompt shown before applying.
    pub fn confirmation(&self) -> String {
        format!("This will update {} records", self.len())
    }

    /// A row per planned link describing the change.
    pub fn preview(&self) -> Vec<PreviewRow<'_>> {
        let Some(join_field) = &self.join_field else {
            return vec![];
        };

        self.links
            .iter()
            .map(|link| {
                let existing = link.record.cell_value(&join_field.id);

                PreviewRow {
                    name: &link.record.name,
                    added: &link.matched,
                    removed: (self.overwrite_existing && existing.link_count() > 0)
                        .then_some(existing),
                    cells: self
                        .dest_fields
                        .iter()
                        .filter(|field| self.primary_field.as_ref() != Some(&field.id))
                        .map(|field| (field, link.record.cell_value(&field.id).to_cell_string()))
                        .collect(),
                }
            })
            .collect()
    }
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
