//! Link records of one table to records of another by matching field values.
//!
//! A pass reads a snapshot of both tables, derives join keys from the
//! configured fields, indexes the source records by key and plans one
//! link-field update per destination record that finds a match. Planning is
//! pure and cheap; only reading records and submitting updates touch the
//! store.

pub mod apply;
pub use apply::apply_updates;

pub mod config;
pub use config::LinkConfig;

pub mod db;
pub use db::Db;

pub mod join;
pub use join::{KeyIndex, KeyOptions};

pub mod plan;
pub use plan::{LinkCandidate, Plan};

pub mod resolve;
pub use resolve::Resolved;

pub use fieldlink_core::{driver, schema, stmt, Error, Result};

#[cfg(feature = "memory")]
pub use fieldlink_driver_memory as memory;

/// Most fields that can be matched on, per side.
pub const MAX_FIELDS: usize = 3;
