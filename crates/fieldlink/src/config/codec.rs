//! Serde adapters for the shapes the host store uses.

use serde::{Deserialize, Deserializer};

/// Field id lists are stored comma-joined. Older configurations may hold a
/// list instead. Empty segments are dropped either way.
pub(super) mod field_ids {
    use fieldlink_core::schema::FieldId;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Joined(String),
        List(Vec<Option<String>>),
    }

    pub(crate) fn serialize<S: Serializer>(
        ids: &[FieldId],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let joined = ids
            .iter()
            .map(FieldId::as_str)
            .collect::<Vec<_>>()
            .join(",");
        serializer.serialize_str(&joined)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<FieldId>, D::Error> {
        let segments: Vec<String> = match Option::<Stored>::deserialize(deserializer)? {
            None => vec![],
            Some(Stored::Joined(joined)) => joined.split(',').map(str::to_string).collect(),
            Some(Stored::List(list)) => list.into_iter().flatten().collect(),
        };

        Ok(segments
            .into_iter()
            .filter(|segment| !segment.is_empty())
            .map(FieldId::from)
            .collect())
    }
}

/// Switches that were never set are stored as null.
pub(super) fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
