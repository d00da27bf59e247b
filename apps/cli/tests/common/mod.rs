//! Shared fixtures for the front-end integration tests.
//!
//! Every test gets its own temporary directory holding the item store; the
//! directory is removed when the context drops.

#![allow(dead_code)]

pub mod fixtures;

use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use cloze_core::{Item, LadderScheduler};
use tempfile::TempDir;

use cloze_review::store::ItemStore;

/// Temporary store plus a fixed clock.
pub struct TestContext {
    _dir: TempDir,
    pub path: PathBuf,
    pub scheduler: LadderScheduler,
    pub now: DateTime<Utc>,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("items.json");
        Self {
            _dir: dir,
            path,
            scheduler: LadderScheduler::default(),
            now: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        }
    }

    /// Context whose store already holds `items`, saved to disk.
    pub fn with_items(items: Vec<Item>) -> Self {
        let ctx = Self::new();
        let mut store = ctx.open();
        for item in items {
            store.insert(item).expect("fixture item should be valid");
        }
        store.save().expect("failed to save fixture store");
        ctx
    }

    pub fn open(&self) -> ItemStore {
        ItemStore::open(&self.path).expect("failed to open store")
    }
}

/// Collect writer output as a string.
pub fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("output should be utf-8")
}
