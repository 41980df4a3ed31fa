use std::fmt;

/// Where the configuration stands, as shown next to the link action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No destination table picked, or it was deleted
    NoDestinationTable,

    /// No join field picked, or it no longer links to an existing table
    NoSourceTable,

    /// An update is being submitted
    Updating,

    /// No field to match on, on at least one side
    MissingMatchFields,

    /// The plan can be applied
    Ready,
}

impl Status {
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoDestinationTable => "Pick a table to enable update options",
            Self::NoSourceTable => "Pick a linked record field to enable match options",
            Self::Updating => "Updating records...",
            Self::MissingMatchFields => "Pick fields to match on to link records",
            Self::Ready => "",
        };
        f.write_str(text)
    }
}
