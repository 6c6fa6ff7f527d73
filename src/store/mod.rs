//! Persistent state for the mood journal.
//!
//! # Module Structure
//!
//! - `kv`: the fallible key-value backing store (SQLite)
//! - `entries`: the canonical mood entry collection
//! - `settings`: theme, reminder, custom emoji, and demo-mode flags
//!
//! The entry store exclusively owns the entries key; everything else in the
//! crate works on copies it hands out and mutates state only through it.

pub mod entries;
pub mod kv;
pub mod settings;

pub use entries::{CorruptDataPolicy, EntryStore, MoodEntry};
pub use kv::KvStore;
pub use settings::{Settings, Theme};
