//! The persisted item record.
//!
//! An item is a dated entry: a one-off schedule, a recurring routine, or a
//! yearly anniversary. The serialized field names below are the storage wire
//! format and must stay stable across versions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DatebookError, DatebookResult};
use crate::store;

/// A single calendar item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    /// Anchor date the recurrence rule is computed from.
    pub date: NaiveDate,
    /// Serialized as `type`. Classification only; occurrence logic ignores it.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub title: String,
    /// Time of day, `None` for untimed and all-day items.
    #[serde(default, with = "hhmm")]
    pub time: Option<NaiveTime>,
    #[serde(rename = "allDay", default)]
    pub all_day: bool,
    #[serde(default)]
    pub repeat: Repeat,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Item classification. Used as a display tag and as the source of the
/// default repeat rule when creating items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Routine,
    Schedule,
    Anniversary,
}

/// Recurrence rule, evaluated against the anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repeat {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    /// Catch-all for rules written by newer or foreign writers. Items
    /// carrying one never occur.
    #[serde(other)]
    Unrecognized,
}

impl Repeat {
    /// Default repeat rule for a freshly created item of the given kind.
    pub fn default_for(kind: ItemKind) -> Repeat {
        match kind {
            ItemKind::Routine => Repeat::Daily,
            ItemKind::Schedule => Repeat::None,
            ItemKind::Anniversary => Repeat::Yearly,
        }
    }
}

impl Item {
    /// Create a new item with a generated id and current timestamps.
    pub fn new(kind: ItemKind, title: impl Into<String>, date: NaiveDate) -> Item {
        let now = Utc::now();
        Item {
            id: store::generate_id(),
            date,
            kind,
            title: title.into(),
            time: None,
            all_day: false,
            repeat: Repeat::default_for(kind),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set a time of day. Clears the all-day flag.
    pub fn with_time(mut self, time: NaiveTime) -> Item {
        self.time = Some(time);
        self.all_day = false;
        self
    }

    /// Mark as all-day. Clears any time of day.
    pub fn with_all_day(mut self) -> Item {
        self.all_day = true;
        self.time = None;
        self
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Item {
        self.repeat = repeat;
        self
    }

    /// Check the invariants enforced before persistence: a non-empty title,
    /// and no time of day on all-day items.
    pub fn validate(&self) -> DatebookResult<()> {
        if self.title.trim().is_empty() {
            return Err(DatebookError::InvalidItem("title must not be empty".into()));
        }
        if self.all_day && self.time.is_some() {
            return Err(DatebookError::InvalidItem(
                "all-day items cannot carry a time of day".into(),
            ));
        }
        Ok(())
    }
}

impl FromStr for ItemKind {
    type Err = DatebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "routine" => Ok(ItemKind::Routine),
            "schedule" => Ok(ItemKind::Schedule),
            "anniversary" => Ok(ItemKind::Anniversary),
            other => Err(DatebookError::InvalidItem(format!(
                "unknown item kind '{other}' (expected routine, schedule, or anniversary)"
            ))),
        }
    }
}

impl FromStr for Repeat {
    type Err = DatebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Repeat::None),
            "daily" => Ok(Repeat::Daily),
            "weekly" => Ok(Repeat::Weekly),
            "monthly" => Ok(Repeat::Monthly),
            "yearly" => Ok(Repeat::Yearly),
            other => Err(DatebookError::InvalidItem(format!(
                "unknown repeat rule '{other}' (expected none, daily, weekly, monthly, or yearly)"
            ))),
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            ItemKind::Routine => "routine",
            ItemKind::Schedule => "schedule",
            ItemKind::Anniversary => "anniversary",
        };
        write!(f, "{s}")
    }
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Repeat::None => "none",
            Repeat::Daily => "daily",
            Repeat::Weekly => "weekly",
            Repeat::Monthly => "monthly",
            Repeat::Yearly => "yearly",
            Repeat::Unrecognized => "unrecognized",
        };
        write!(f, "{s}")
    }
}

/// Serde helper for the `HH:MM` wire form of `time`.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&t.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => NaiveTime::parse_from_str(&raw, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let item = Item::new(ItemKind::Schedule, "Dentist", date(2026, 8, 10))
            .with_time(NaiveTime::from_hms_opt(9, 30, 0).unwrap());

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "schedule");
        assert_eq!(value["date"], "2026-08-10");
        assert_eq!(value["title"], "Dentist");
        assert_eq!(value["time"], "09:30");
        assert_eq!(value["allDay"], false);
        assert_eq!(value["repeat"], "none");
        assert!(value["id"].is_string());
        assert!(value["createdAt"].is_string());
        assert!(value["updatedAt"].is_string());
    }

    #[test]
    fn serializes_null_time_for_all_day_items() {
        let item = Item::new(ItemKind::Anniversary, "Wedding day", date(2020, 2, 29)).with_all_day();

        let value = serde_json::to_value(&item).unwrap();
        assert!(value["time"].is_null());
        assert_eq!(value["allDay"], true);
        assert_eq!(value["repeat"], "yearly");
    }

    #[test]
    fn round_trips_through_json() {
        let item = Item::new(ItemKind::Routine, "Morning run", date(2026, 1, 5))
            .with_time(NaiveTime::from_hms_opt(7, 0, 0).unwrap());

        let encoded = serde_json::to_string(&item).unwrap();
        let decoded: Item = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, item);
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let value = json!({
            "id": "abc",
            "date": "2026-01-05",
            "type": "schedule",
            "title": "Sparse",
            "createdAt": "2026-01-05T08:00:00Z",
            "updatedAt": "2026-01-05T08:00:00Z"
        });

        let item: Item = serde_json::from_value(value).unwrap();
        assert_eq!(item.time, None);
        assert!(!item.all_day);
        assert_eq!(item.repeat, Repeat::None);
    }

    #[test]
    fn unknown_repeat_becomes_unrecognized() {
        let value = json!({
            "id": "abc",
            "date": "2026-01-05",
            "type": "routine",
            "title": "Mystery",
            "time": null,
            "allDay": false,
            "repeat": "biweekly",
            "createdAt": "2026-01-05T08:00:00Z",
            "updatedAt": "2026-01-05T08:00:00Z"
        });

        let item: Item = serde_json::from_value(value).unwrap();
        assert_eq!(item.repeat, Repeat::Unrecognized);
    }

    #[test]
    fn validate_rejects_empty_title() {
        let item = Item::new(ItemKind::Schedule, "   ", date(2026, 8, 10));
        assert!(item.validate().is_err());
    }

    #[test]
    fn validate_rejects_all_day_with_time() {
        let mut item = Item::new(ItemKind::Schedule, "Clash", date(2026, 8, 10));
        item.all_day = true;
        item.time = NaiveTime::from_hms_opt(9, 0, 0);
        assert!(item.validate().is_err());
    }

    #[test]
    fn constructors_keep_time_and_all_day_exclusive() {
        let item = Item::new(ItemKind::Schedule, "Flip", date(2026, 8, 10))
            .with_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
            .with_all_day();
        assert_eq!(item.time, None);
        assert!(item.all_day);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn default_repeat_follows_kind() {
        assert_eq!(Repeat::default_for(ItemKind::Routine), Repeat::Daily);
        assert_eq!(Repeat::default_for(ItemKind::Schedule), Repeat::None);
        assert_eq!(Repeat::default_for(ItemKind::Anniversary), Repeat::Yearly);
    }

    #[test]
    fn from_str_rejects_unknown_input() {
        assert!("routine".parse::<ItemKind>().is_ok());
        assert!("meeting".parse::<ItemKind>().is_err());
        assert!("weekly".parse::<Repeat>().is_ok());
        assert!("biweekly".parse::<Repeat>().is_err());
        // The catch-all variant is reserved for persisted data.
        assert!("unrecognized".parse::<Repeat>().is_err());
    }
}
