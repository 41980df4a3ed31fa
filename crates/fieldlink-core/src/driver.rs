mod capability;
pub use capability::Capability;

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{
    async_trait,
    schema::{Schema, TableId},
    stmt::RecordUpdate,
};

use std::fmt::Debug;

/// The host store: schema, record reads, and record writes.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Describes the driver's capability, which informs how updates are
    /// batched.
    fn capability(&self) -> &Capability;

    /// A snapshot of the base's tables, views and fields.
    async fn schema(&self) -> crate::Result<Schema>;

    /// Whether the current user may apply every update in `updates`.
    ///
    /// Checked once for the whole batch before anything is written.
    fn has_permission_to_update(&self, table: &TableId, updates: &[RecordUpdate]) -> bool;

    /// Execute a store operation
    async fn exec(&self, op: Operation) -> crate::Result<Response>;
}
