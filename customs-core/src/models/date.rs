//! Calendar dates in `YYYY-MM-DD` form.
//!
//! Dates arrive from HTML date inputs and JSON bodies as plain strings and
//! leave in the same shape, in the XML export as well as in the API.

use time::{Date, macros::format_description};

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace.
pub fn parse_date(text: &str) -> Result<Date, time::error::Parse> {
    Date::parse(text.trim(), format_description!("[year]-[month]-[day]"))
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> Result<String, time::error::Format> {
    date.format(format_description!("[year]-[month]-[day]"))
}

/// Serde adapter for a required `YYYY-MM-DD` date.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::Error as _};
    use time::Date;

    /// Serialize as `YYYY-MM-DD`.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text = super::format_date(*date).map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }

    /// Deserialize from `YYYY-MM-DD`.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_date(&text).map_err(D::Error::custom)
    }
}

/// Serde adapter for an optional `YYYY-MM-DD` date.
///
/// An empty string (what an untouched HTML date input submits) reads as
/// `None`, as does `null`.
pub mod optional_iso_date {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::Error as _};
    use time::Date;

    /// Serialize as `YYYY-MM-DD` or `null`.
    pub fn serialize<S: Serializer>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => {
                let text = super::format_date(*date).map_err(S::Error::custom)?;
                serializer.serialize_some(&text)
            }
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize from `YYYY-MM-DD`, an empty string or `null`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Date>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) if !text.trim().is_empty() => {
                super::parse_date(&text).map(Some).map_err(D::Error::custom)
            }
            _ => Ok(None),
        }
    }
}
