mod cell_source;
pub use cell_source::CellSource;

mod record;
pub use record::{Record, RecordId};

mod record_link;
pub use record_link::RecordLink;

mod update;
pub use update::RecordUpdate;

mod value;
pub use value::Value;
