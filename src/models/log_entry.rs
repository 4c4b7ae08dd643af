use super::coffee_type::CoffeeType;
use chrono::{DateTime, Local, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// One logged coffee. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeLogEntry {
    pub id: String,              // ⇔ creation instant in epoch millis
    pub coffee_type: CoffeeType, // ⇔ {"id", "title"}, embedded by value
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>, // ⇔ "YYYY-MM-DDTHH:MM:SS.mmmZ"
}

impl CoffeeLogEntry {
    /// Build an entry for a coffee drunk at `at`.
    ///
    /// The instant is truncated to milliseconds, the precision kept in
    /// storage, so that a stored entry reloads equal to the original.
    pub fn new(coffee_type: CoffeeType, at: DateTime<Utc>) -> Self {
        let timestamp = at.trunc_subsecs(3);
        Self {
            id: timestamp.timestamp_millis().to_string(),
            coffee_type,
            timestamp,
        }
    }

    pub fn local_timestamp(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }
}

/// ISO-8601 in UTC with millisecond precision on write; any RFC 3339
/// offset accepted on read.
///
/// RFC 3339 only has four-digit years, so instants outside 0000..=9999
/// are refused on write: they could not be read back.
mod iso_millis {
    use chrono::{DateTime, Datelike, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de, ser};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        if !(0..=9999).contains(&dt.year()) {
            return Err(ser::Error::custom(format!(
                "timestamp year {} cannot be stored (expected 0000-9999)",
                dt.year()
            )));
        }
        s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| de::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
    }
}
