//! Integration tests for the entry store against an on-disk database.

use chrono::NaiveDate;
use moodlog::store::{CorruptDataPolicy, EntryStore, KvStore};
use tempfile::TempDir;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn entries_survive_reopening_the_database() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("moodlog.db");

    {
        let kv = KvStore::open(&path).unwrap();
        let store = EntryStore::new(&kv);
        store
            .save(date("2024-12-08"), "😊", "persisted", None)
            .unwrap();
        store
            .save(
                date("2024-12-07"),
                "😢",
                "",
                Some(vec!["work".to_string()]),
            )
            .unwrap();
    }

    let kv = KvStore::open(&path).unwrap();
    let store = EntryStore::new(&kv);
    let entries = store.get_all().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date, date("2024-12-08"));
    assert_eq!(entries[0].note, "persisted");
    assert_eq!(entries[1].tags, vec!["work"]);
}

#[test]
fn one_entry_per_date_across_many_saves() {
    let kv = KvStore::open_in_memory().unwrap();
    let store = EntryStore::new(&kv);

    let dates = ["2024-12-08", "2024-12-07", "2024-12-08", "2024-12-06"];
    for (i, d) in dates.iter().enumerate() {
        store
            .save(date(d), "😊", &format!("save {}", i), None)
            .unwrap();
    }

    let entries = store.get_all().unwrap();
    assert_eq!(entries.len(), 3);

    // The later save for the duplicated date won.
    let dec8 = store.get(date("2024-12-08")).unwrap().unwrap();
    assert_eq!(dec8.note, "save 2");
}

#[test]
fn tag_carry_over_and_descending_sort_together() {
    let kv = KvStore::open_in_memory().unwrap();
    let store = EntryStore::new(&kv);

    store
        .save(
            date("2024-12-05"),
            "😊",
            "",
            Some(vec!["work".to_string()]),
        )
        .unwrap();
    store.save(date("2024-12-09"), "😐", "", None).unwrap();
    store.save(date("2024-12-05"), "😄", "better now", None).unwrap();

    let entries = store.get_all().unwrap();
    assert_eq!(entries[0].date, date("2024-12-09"));
    assert_eq!(entries[1].date, date("2024-12-05"));
    assert_eq!(entries[1].emoji, "😄");
    assert_eq!(entries[1].tags, vec!["work"]);
}

#[test]
fn corrupt_database_content_degrades_or_raises_per_policy() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("moodlog.db");

    let kv = KvStore::open(&path).unwrap();
    kv.set("mood_entries", "[{\"this is\": \"not an entry\"}]")
        .unwrap();

    let lenient = EntryStore::new(&kv);
    assert!(lenient.get_all().unwrap().is_empty());
    assert_eq!(lenient.get(date("2024-12-08")).unwrap(), None);

    let strict = EntryStore::with_policy(&kv, CorruptDataPolicy::Raise);
    assert!(strict.get_all().is_err());
}

#[test]
fn saving_over_corrupt_data_starts_fresh() {
    let kv = KvStore::open_in_memory().unwrap();
    kv.set("mood_entries", "garbage").unwrap();

    let store = EntryStore::new(&kv);
    store.save(date("2024-12-08"), "😊", "", None).unwrap();

    let entries = store.get_all().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].emoji, "😊");
}
