use super::RecordLink;

/// A cell value.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Empty cell
    #[default]
    Null,

    /// Checkbox value
    Bool(bool),

    /// Numeric value
    Number(f64),

    /// Text of any kind (single line, long text, email, url, single select)
    String(String),

    /// Multiple values, such as a multiple select
    List(Vec<Value>),

    /// Links to records of another table
    Links(Vec<RecordLink>),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_links(&self) -> Option<&[RecordLink]> {
        match self {
            Self::Links(links) => Some(links),
            _ => None,
        }
    }

    /// Number of records this cell links to. Anything that is not a link
    /// list counts as zero.
    pub fn link_count(&self) -> usize {
        self.as_links().map_or(0, <[_]>::len)
    }

    /// Renders the value the way the host displays it in a grid cell.
    ///
    /// Empty cells render as `""`, unchecked boxes as `""` and checked boxes
    /// as `"checked"`. Whole numbers drop their fractional part. Lists and
    /// links are joined with `", "`, links by the linked record's name.
    pub fn to_cell_string(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(true) => "checked".to_string(),
            Self::Bool(false) => String::new(),
            Self::Number(v) => format_number(*v),
            Self::String(v) => v.clone(),
            Self::List(items) => items
                .iter()
                .map(Value::to_cell_string)
                .collect::<Vec<_>>()
                .join(", "),
            Self::Links(links) => links
                .iter()
                .map(|link| link.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

fn format_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::Number(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::Number(src as f64)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<Vec<RecordLink>> for Value {
    fn from(src: Vec<RecordLink>) -> Self {
        Self::Links(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
