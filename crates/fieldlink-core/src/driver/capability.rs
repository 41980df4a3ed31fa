#[derive(Debug, Clone)]
pub struct Capability {
    /// Upper bound on the number of records a single update call may carry.
    pub max_records_per_update: usize,
}

impl Capability {
    /// Limits of the hosted grid store.
    pub const DEFAULT: Self = Self {
        max_records_per_update: 50,
    };
}

impl Default for Capability {
    fn default() -> Self {
        Self::DEFAULT
    }
}
