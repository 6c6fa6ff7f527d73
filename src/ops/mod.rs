//! Command implementations.
//!
//! Each function here coordinates the store and the analytics engine for
//! one CLI command and returns the text to print; `main` owns the actual
//! printing.
//!
//! # Module Structure
//!
//! - `entry`: logging, showing, deleting, and clearing entries
//! - `stats`: streaks, trend, insights, patterns, year review, tags
//! - `transfer`: CSV export and import
//! - `prefs`: theme, reminder, and custom emoji settings
//! - `demo`: generated demo data

pub mod demo;
pub mod entry;
pub mod prefs;
pub mod stats;
pub mod transfer;
