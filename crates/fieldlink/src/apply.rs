use fieldlink_core::{
    driver::{operation::UpdateRecords, Driver},
    schema::TableId,
    stmt::RecordUpdate,
    Error, Result,
};
use tracing::{info, trace, warn};

/// Submits `updates` to the store in sequential chunks.
///
/// Permission is checked once for the whole batch; when denied nothing is
/// written and [`Error::permission_denied`] is returned. Chunks hold at most
/// the driver's `max_records_per_update` records and each is awaited before
/// the next is sent. The first rejected chunk stops the submission with
/// [`Error::update_failed`]; earlier chunks stay applied.
///
/// Returns the number of records updated.
pub async fn apply_updates(
    driver: &dyn Driver,
    table: &TableId,
    updates: Vec<RecordUpdate>,
) -> Result<usize> {
    if updates.is_empty() {
        return Ok(0);
    }

    if !driver.has_permission_to_update(table, &updates) {
        warn!(%table, records = updates.len(), "update permission denied");
        return Err(Error::permission_denied(table.as_str(), updates.len()));
    }

    let chunk_size = driver.capability().max_records_per_update.max(1);
    let total = updates.len();

    info!(
        %table,
        records = total,
        chunks = total.div_ceil(chunk_size),
        "submitting link updates"
    );

    let mut applied = 0;

    for (i, chunk) in updates.chunks(chunk_size).enumerate() {
        trace!(chunk = i + 1, records = chunk.len(), "submitting chunk");

        let op = UpdateRecords {
            table: table.clone(),
            updates: chunk.to_vec(),
        };

        if let Err(err) = driver.exec(op.into()).await {
            warn!(chunk = i + 1, applied, error = %err, "update chunk rejected");
            return Err(Error::update_failed(i + 1, applied, err));
        }

        applied += chunk.len();
    }

    info!(%table, records = applied, "link updates applied");

    Ok(applied)
}
