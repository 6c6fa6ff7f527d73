//! The mood entry store.
//!
//! This module owns the canonical collection of mood entries. All reads and
//! writes of the persisted collection pass through [`EntryStore`]; other
//! components receive copies and must call back into the store to mutate
//! anything.
//!
//! The collection is persisted as a single JSON array under one storage key
//! and rewritten as a whole on every mutation. At the expected scale (a few
//! thousand entries at most) this is well under a millisecond per operation.

use crate::constants::KEY_ENTRIES;
use crate::errors::{AppResult, StorageError};
use crate::store::kv::KvStore;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One mood record for a single calendar date.
///
/// The `date` is the unique identity of the record: the store never holds
/// two entries for the same date. `timestamp` records the instant of the
/// last write and is informational only; no ordering or business logic
/// depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Calendar date the entry belongs to, unique across the collection.
    pub date: NaiveDate,
    /// The selected mood symbol. Not validated against the known mood set
    /// at this layer; any string is accepted.
    pub emoji: String,
    /// Free-text note, trimmed of surrounding whitespace. May be empty.
    #[serde(default)]
    pub note: String,
    /// Lowercase tags, no duplicates, insertion order preserved.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Instant the entry was last written.
    pub timestamp: DateTime<Utc>,
}

/// Policy for handling unreadable persisted entry data.
///
/// The default (`Empty`) logs the problem and treats the collection as
/// empty, so a corrupt value can never crash a caller. `Raise` surfaces the
/// corruption as a [`StorageError::Corrupt`] instead, for callers and tests
/// that want strict behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptDataPolicy {
    /// Log and degrade to an empty collection.
    #[default]
    Empty,
    /// Surface corruption as an error.
    Raise,
}

/// The single source of truth for mood entries.
///
/// Wraps the key-value store and exclusively owns the entries key. Storage
/// read failures degrade to an empty collection and write failures to a
/// logged no-op, so no storage fault propagates to callers as an unhandled
/// error.
pub struct EntryStore<'a> {
    kv: &'a KvStore,
    policy: CorruptDataPolicy,
}

impl<'a> EntryStore<'a> {
    /// Creates a store with the default corrupt-data policy
    /// ([`CorruptDataPolicy::Empty`]).
    pub fn new(kv: &'a KvStore) -> Self {
        EntryStore {
            kv,
            policy: CorruptDataPolicy::Empty,
        }
    }

    /// Creates a store with an explicit corrupt-data policy.
    pub fn with_policy(kv: &'a KvStore, policy: CorruptDataPolicy) -> Self {
        EntryStore { kv, policy }
    }

    /// Returns every entry, sorted by date descending (most recent first).
    ///
    /// The descending order is an observable contract of the store, not an
    /// accident of storage.
    ///
    /// # Errors
    ///
    /// With the default policy this never fails: a storage read failure or
    /// corrupt data is logged and yields an empty collection. Under
    /// [`CorruptDataPolicy::Raise`], corrupt data is returned as a
    /// [`StorageError::Corrupt`].
    pub fn get_all(&self) -> AppResult<Vec<MoodEntry>> {
        self.load()
    }

    /// Returns the entry for `date`, or `None` if no entry exists.
    ///
    /// Linear scan over the collection; acceptable at the expected scale.
    ///
    /// # Errors
    ///
    /// Same failure behavior as [`EntryStore::get_all`].
    pub fn get(&self, date: NaiveDate) -> AppResult<Option<MoodEntry>> {
        Ok(self.load()?.into_iter().find(|e| e.date == date))
    }

    /// Saves an entry for `date`, replacing any existing entry in place.
    ///
    /// `note` is trimmed before storage. Tags are replaced only when the
    /// caller explicitly passes `Some(tags)`; with `None`, an existing
    /// entry keeps its tags unchanged and a new entry starts with none.
    /// Supplied tags are lowercased and deduplicated, preserving insertion
    /// order. The whole collection is re-sorted and rewritten.
    ///
    /// Returns the stored entry.
    ///
    /// # Errors
    ///
    /// Same failure behavior as [`EntryStore::get_all`]; a failed write is
    /// logged and dropped rather than returned.
    pub fn save(
        &self,
        date: NaiveDate,
        emoji: &str,
        note: &str,
        tags: Option<Vec<String>>,
    ) -> AppResult<MoodEntry> {
        let mut entries = self.load()?;

        let existing_tags = entries
            .iter()
            .position(|e| e.date == date)
            .map(|i| entries.remove(i).tags);

        let tags = match tags {
            Some(supplied) => normalize_tags(&supplied),
            None => existing_tags.unwrap_or_default(),
        };

        let entry = MoodEntry {
            date,
            emoji: emoji.to_string(),
            note: note.trim().to_string(),
            tags,
            timestamp: Utc::now(),
        };

        debug!("Saving entry for {}", date);
        entries.push(entry.clone());
        self.persist(entries);
        Ok(entry)
    }

    /// Removes the entry for `date`. No-op if no entry exists.
    ///
    /// # Errors
    ///
    /// Same failure behavior as [`EntryStore::get_all`].
    pub fn delete(&self, date: NaiveDate) -> AppResult<()> {
        let mut entries = self.load()?;
        let before = entries.len();
        entries.retain(|e| e.date != date);
        if entries.len() != before {
            debug!("Deleting entry for {}", date);
            self.persist(entries);
        }
        Ok(())
    }

    /// Removes every entry. Used before a demo-data load or an explicit
    /// reset.
    ///
    /// # Errors
    ///
    /// Never fails; a failed delete is logged and dropped.
    pub fn clear_all(&self) -> AppResult<()> {
        debug!("Clearing all entries");
        if let Err(e) = self.kv.remove(KEY_ENTRIES) {
            warn!("Failed to clear entries, leaving storage untouched: {}", e);
        }
        Ok(())
    }

    /// Returns the entries whose date falls within the given calendar month.
    ///
    /// # Errors
    ///
    /// Same failure behavior as [`EntryStore::get_all`].
    pub fn get_for_month(&self, year: i32, month: u32) -> AppResult<Vec<MoodEntry>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .collect())
    }

    /// Adds a tag to the entry for `date`.
    ///
    /// Returns `true` if the entry was modified, `false` if no entry exists
    /// for the date or the tag (after normalization) is already present.
    ///
    /// # Errors
    ///
    /// Same failure behavior as [`EntryStore::get_all`].
    pub fn add_tag(&self, date: NaiveDate, tag: &str) -> AppResult<bool> {
        let Some(entry) = self.get(date)? else {
            return Ok(false);
        };
        let normalized = tag.trim().to_lowercase();
        if normalized.is_empty() || entry.tags.contains(&normalized) {
            return Ok(false);
        }
        let mut tags = entry.tags;
        tags.push(normalized);
        self.save(date, &entry.emoji, &entry.note, Some(tags))?;
        Ok(true)
    }

    /// Removes a tag from the entry for `date`.
    ///
    /// Returns `true` if the entry was modified, `false` if no entry exists
    /// for the date or the tag was not present.
    ///
    /// # Errors
    ///
    /// Same failure behavior as [`EntryStore::get_all`].
    pub fn remove_tag(&self, date: NaiveDate, tag: &str) -> AppResult<bool> {
        let Some(entry) = self.get(date)? else {
            return Ok(false);
        };
        let normalized = tag.trim().to_lowercase();
        if !entry.tags.contains(&normalized) {
            return Ok(false);
        }
        let mut tags = entry.tags;
        tags.retain(|t| t != &normalized);
        self.save(date, &entry.emoji, &entry.note, Some(tags))?;
        Ok(true)
    }

    /// Loads the collection, applying the degrade-on-failure policies.
    fn load(&self) -> AppResult<Vec<MoodEntry>> {
        let text = match self.kv.get(KEY_ENTRIES) {
            Ok(Some(text)) => text,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => {
                warn!("Failed to read entries, treating storage as empty: {}", e);
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str::<Vec<MoodEntry>>(&text) {
            Ok(mut entries) => {
                entries.sort_by(|a, b| b.date.cmp(&a.date));
                Ok(entries)
            }
            Err(e) => match self.policy {
                CorruptDataPolicy::Empty => {
                    warn!("Corrupt entry data, treating collection as empty: {}", e);
                    Ok(Vec::new())
                }
                CorruptDataPolicy::Raise => Err(StorageError::Corrupt {
                    key: KEY_ENTRIES.to_string(),
                    detail: e.to_string(),
                }
                .into()),
            },
        }
    }

    /// Sorts the collection date-descending and rewrites it as a whole.
    /// A failed write is logged and dropped.
    fn persist(&self, mut entries: Vec<MoodEntry>) {
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        let text = match serde_json::to_string(&entries) {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to encode entries, dropping write: {}", e);
                return;
            }
        };
        if let Err(e) = self.kv.set(KEY_ENTRIES, &text) {
            warn!("Failed to persist entries, dropping write: {}", e);
        }
    }
}

/// Lowercases, trims, and deduplicates tags, preserving insertion order.
fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn store(kv: &KvStore) -> EntryStore<'_> {
        EntryStore::new(kv)
    }

    #[test]
    fn test_save_creates_entry() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = store(&kv);

        let entry = store
            .save(date("2024-12-08"), "😊", "Had a great day!", None)
            .unwrap();
        assert_eq!(entry.emoji, "😊");
        assert_eq!(entry.note, "Had a great day!");
        assert!(entry.tags.is_empty());

        let fetched = store.get(date("2024-12-08")).unwrap().unwrap();
        assert_eq!(fetched.emoji, "😊");
    }

    #[test]
    fn test_save_replaces_in_place() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = store(&kv);
        let d = date("2024-12-08");

        store.save(d, "😊", "first", None).unwrap();
        store.save(d, "😢", "second", None).unwrap();

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].emoji, "😢");
        assert_eq!(all[0].note, "second");
    }

    #[test]
    fn test_save_preserves_tags_when_omitted() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = store(&kv);
        let d = date("2024-12-08");

        store
            .save(d, "😊", "", Some(vec!["work".to_string()]))
            .unwrap();
        store.save(d, "😄", "updated mood", None).unwrap();

        let entry = store.get(d).unwrap().unwrap();
        assert_eq!(entry.tags, vec!["work"]);
        assert_eq!(entry.emoji, "😄");
    }

    #[test]
    fn test_save_replaces_tags_when_supplied() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = store(&kv);
        let d = date("2024-12-08");

        store
            .save(d, "😊", "", Some(vec!["work".to_string()]))
            .unwrap();
        store
            .save(d, "😊", "", Some(vec!["gym".to_string()]))
            .unwrap();

        assert_eq!(store.get(d).unwrap().unwrap().tags, vec!["gym"]);
    }

    #[test]
    fn test_save_normalizes_tags() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = store(&kv);

        let entry = store
            .save(
                date("2024-12-08"),
                "😊",
                "",
                Some(vec![
                    " Work ".to_string(),
                    "GYM".to_string(),
                    "work".to_string(),
                    "".to_string(),
                ]),
            )
            .unwrap();
        assert_eq!(entry.tags, vec!["work", "gym"]);
    }

    #[test]
    fn test_save_trims_note() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = store(&kv);

        let entry = store
            .save(date("2024-12-08"), "😊", "  spaced out  ", None)
            .unwrap();
        assert_eq!(entry.note, "spaced out");
    }

    #[test]
    fn test_get_all_sorted_descending_regardless_of_insertion_order() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = store(&kv);

        store.save(date("2024-12-06"), "😐", "", None).unwrap();
        store.save(date("2024-12-08"), "😊", "", None).unwrap();
        store.save(date("2024-12-07"), "😢", "", None).unwrap();

        let dates: Vec<NaiveDate> = store.get_all().unwrap().iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![date("2024-12-08"), date("2024-12-07"), date("2024-12-06")]
        );
    }

    #[test]
    fn test_get_absent_returns_none() {
        let kv = KvStore::open_in_memory().unwrap();
        assert_eq!(store(&kv).get(date("2024-12-08")).unwrap(), None);
    }

    #[test]
    fn test_delete_removes_entry_and_is_noop_when_absent() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = store(&kv);
        let d = date("2024-12-08");

        store.save(d, "😊", "", None).unwrap();
        store.delete(d).unwrap();
        assert_eq!(store.get(d).unwrap(), None);

        // Deleting again must not error.
        store.delete(d).unwrap();
    }

    #[test]
    fn test_clear_all() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = store(&kv);

        store.save(date("2024-12-08"), "😊", "", None).unwrap();
        store.save(date("2024-12-09"), "😢", "", None).unwrap();
        store.clear_all().unwrap();

        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_get_for_month() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = store(&kv);

        store.save(date("2024-11-30"), "😐", "", None).unwrap();
        store.save(date("2024-12-01"), "😊", "", None).unwrap();
        store.save(date("2024-12-31"), "😄", "", None).unwrap();
        store.save(date("2025-01-01"), "😢", "", None).unwrap();

        let december = store.get_for_month(2024, 12).unwrap();
        assert_eq!(december.len(), 2);
        assert!(december.iter().all(|e| e.date.month() == 12));
    }

    #[test]
    fn test_add_and_remove_tag() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = store(&kv);
        let d = date("2024-12-08");

        store.save(d, "😊", "", None).unwrap();

        assert!(store.add_tag(d, "Work").unwrap());
        assert!(!store.add_tag(d, "work").unwrap()); // already present
        assert_eq!(store.get(d).unwrap().unwrap().tags, vec!["work"]);

        assert!(store.remove_tag(d, "work").unwrap());
        assert!(!store.remove_tag(d, "work").unwrap()); // already gone
        assert!(store.get(d).unwrap().unwrap().tags.is_empty());
    }

    #[test]
    fn test_add_tag_on_missing_entry() {
        let kv = KvStore::open_in_memory().unwrap();
        assert!(!store(&kv).add_tag(date("2024-12-08"), "work").unwrap());
    }

    #[test]
    fn test_corrupt_data_default_policy_yields_empty() {
        let kv = KvStore::open_in_memory().unwrap();
        kv.set(KEY_ENTRIES, "not json at all").unwrap();

        let store = EntryStore::new(&kv);
        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_data_raise_policy_errors() {
        let kv = KvStore::open_in_memory().unwrap();
        kv.set(KEY_ENTRIES, "{\"unexpected\": true}").unwrap();

        let store = EntryStore::with_policy(&kv, CorruptDataPolicy::Raise);
        assert!(store.get_all().is_err());
    }

    #[test]
    fn test_emoji_not_validated_at_store_layer() {
        let kv = KvStore::open_in_memory().unwrap();
        let store = store(&kv);

        let entry = store
            .save(date("2024-12-08"), "definitely-not-an-emoji", "", None)
            .unwrap();
        assert_eq!(entry.emoji, "definitely-not-an-emoji");
    }
}
