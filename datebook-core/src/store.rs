//! Item storage.
//!
//! The whole collection persists as a single JSON document
//! `{ "events": [...] }` in one file. Reads are tolerant: a missing,
//! unreadable, or malformed document loads as an empty collection, and the
//! next append rewrites it whole. Writes go through a temp file + rename so
//! a failed write cannot clobber the previous document.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DatebookError, DatebookResult};
use crate::item::Item;
use crate::recurrence;

/// Generate a unique item id.
///
/// UUIDv7 combines a millisecond timestamp with random bits, so rapid
/// successive calls cannot collide at interactive scale.
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}

/// The persisted document layout.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    events: Vec<Item>,
}

/// The item collection and its backing file.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    items: Vec<Item>,
}

impl Store {
    /// Open the store at `path`, loading whatever is currently persisted.
    ///
    /// Corruption is non-fatal: anything that cannot be read as the expected
    /// document yields an empty collection, and items failing validation are
    /// dropped.
    pub fn open(path: impl Into<PathBuf>) -> Store {
        let path = path.into();
        let items = load_items(&path);
        Store { path, items }
    }

    /// All stored items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate `item`, add it to the collection, and persist the whole
    /// document. A failed write propagates to the caller and leaves both the
    /// previous file and the in-memory collection untouched.
    pub fn append(&mut self, item: Item) -> DatebookResult<()> {
        item.validate()?;
        self.items.push(item);
        if let Err(e) = self.save() {
            self.items.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Items occurring on `date` per their recurrence rules.
    pub fn occurrences_on(&self, date: NaiveDate) -> Vec<&Item> {
        recurrence::occurrences_on(&self.items, date)
    }

    fn save(&self) -> DatebookResult<()> {
        let document = StoreDocument {
            events: self.items.clone(),
        };
        let content = serde_json::to_string_pretty(&document)
            .map_err(|e| DatebookError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = self.path.with_extension("tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

fn load_items(path: &Path) -> Vec<Item> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return Vec::new(),
    };

    let document: StoreDocument = match serde_json::from_str(&raw) {
        Ok(document) => document,
        Err(_) => return Vec::new(),
    };

    document
        .events
        .into_iter()
        .filter(|item| item.validate().is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemKind, Repeat};
    use chrono::NaiveTime;
    use tempfile::tempdir;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_item(title: &str, date: &str) -> Item {
        Item::new(ItemKind::Schedule, title, d(date))
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = Store::open(dir.path().join("events.json"));
        assert!(store.items().is_empty());
    }

    #[test]
    fn append_then_reopen_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.json");

        let mut store = Store::open(&path);
        let a = sample_item("Dentist", "2026-08-10");
        let b = sample_item("Trip", "2026-09-01").with_repeat(Repeat::Yearly);
        let c = sample_item("Standup", "2026-08-03")
            .with_time(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
            .with_repeat(Repeat::Daily);
        store.append(a.clone()).unwrap();
        store.append(b.clone()).unwrap();
        store.append(c.clone()).unwrap();

        let reopened = Store::open(&path);
        assert_eq!(reopened.items(), &[a, b, c]);
    }

    #[test]
    fn persists_the_events_document_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.json");

        let mut store = Store::open(&path);
        store.append(sample_item("Dentist", "2026-08-10")).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value["events"].is_array());
        assert_eq!(value["events"][0]["title"], "Dentist");
    }

    #[test]
    fn corrupt_document_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.json");

        std::fs::write(&path, "not json").unwrap();
        assert!(Store::open(&path).items().is_empty());

        std::fs::write(&path, r#"{"events": "oops"}"#).unwrap();
        assert!(Store::open(&path).items().is_empty());

        std::fs::write(&path, "{}").unwrap();
        assert!(Store::open(&path).items().is_empty());
    }

    #[test]
    fn append_after_corruption_self_heals() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = Store::open(&path);
        store.append(sample_item("Fresh start", "2026-01-01")).unwrap();

        let reopened = Store::open(&path);
        assert_eq!(reopened.items().len(), 1);
        assert_eq!(reopened.items()[0].title, "Fresh start");
    }

    #[test]
    fn invalid_items_are_dropped_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.json");
        let doc = r#"{"events": [
            {"id": "ok", "date": "2026-08-10", "type": "schedule", "title": "Valid",
             "time": null, "allDay": false, "repeat": "none",
             "createdAt": "2026-08-01T00:00:00Z", "updatedAt": "2026-08-01T00:00:00Z"},
            {"id": "bad", "date": "2026-08-11", "type": "schedule", "title": "",
             "time": null, "allDay": false, "repeat": "none",
             "createdAt": "2026-08-01T00:00:00Z", "updatedAt": "2026-08-01T00:00:00Z"}
        ]}"#;
        std::fs::write(&path, doc).unwrap();

        let store = Store::open(&path);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].title, "Valid");
    }

    #[test]
    fn append_rejects_invalid_items() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.json");
        let mut store = Store::open(&path);

        assert!(store.append(sample_item("", "2026-08-10")).is_err());

        let mut clash = sample_item("Clash", "2026-08-10");
        clash.all_day = true;
        clash.time = NaiveTime::from_hms_opt(9, 0, 0);
        assert!(store.append(clash).is_err());

        assert!(store.items().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = generate_id();
        let b = generate_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn occurrences_on_queries_the_collection() {
        let dir = tempdir().unwrap();
        let mut store = Store::open(dir.path().join("events.json"));
        store
            .append(sample_item("Standup", "2026-08-03").with_repeat(Repeat::Daily))
            .unwrap();
        store.append(sample_item("Dentist", "2026-08-10")).unwrap();

        assert_eq!(store.occurrences_on(d("2026-08-10")).len(), 2);
        assert!(store.occurrences_on(d("2026-08-02")).is_empty());
    }
}
