//! JSON file item store.
//!
//! The whole collection lives in one pretty-printed JSON array. Items keep
//! their insertion order, which is the order the review queue scans.

use std::fs;
use std::path::{Path, PathBuf};

use cloze_core::{Item, ItemId, IntervalLadder};

use crate::error::{Result, StoreError};

#[derive(Debug)]
pub struct ItemStore {
    path: PathBuf,
    items: Vec<Item>,
}

impl ItemStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            Vec::new()
        };

        tracing::info!(path = %path.display(), count = items.len(), "opened item store");
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn get(&self, id: ItemId) -> Result<&Item> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound(id))
    }

    pub fn get_mut(&mut self, id: ItemId) -> Result<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound(id))
    }

    /// Append a new item.
    pub fn insert(&mut self, item: Item) -> Result<()> {
        check_fields(&item.title, &item.body)?;
        if self.items.iter().any(|existing| existing.id == item.id) {
            return Err(StoreError::InvalidItem(format!("duplicate id {}", item.id)));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, id: ItemId) -> Result<Item> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound(id))?;
        Ok(self.items.remove(index))
    }

    /// Reject items whose stage does not fit `ladder`.
    pub fn validate(&self, ladder: &IntervalLadder) -> Result<()> {
        match self
            .items
            .iter()
            .find(|item| item.review.stage >= ladder.stage_count())
        {
            Some(item) => Err(StoreError::InvalidItem(format!(
                "item {} has stage {} beyond ladder length {}",
                item.id,
                item.review.stage,
                ladder.stage_count()
            ))),
            None => Ok(()),
        }
    }

    /// Write the collection back, replacing the file atomically.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&self.items)?)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), count = self.items.len(), "saved item store");
        Ok(())
    }
}

/// Reject a blank title or body.
pub fn check_fields(title: &str, body: &str) -> Result<()> {
    if title.trim().is_empty() || body.trim().is_empty() {
        return Err(StoreError::InvalidItem("title and body are required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use cloze_core::{ClozeSet, LadderScheduler};

    fn sample(title: &str) -> Item {
        Item::new(
            title,
            "**Courage** is not the absence of *fear*",
            ["Courage", "fear"].into_iter().collect::<ClozeSet>(),
            LadderScheduler::default().initial_state(Utc::now()),
        )
    }

    #[test]
    fn missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = ItemStore::open(dir.path().join("items.json")).unwrap();
        assert!(store.items().is_empty());
    }

    #[test]
    fn save_then_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("items.json");

        let mut store = ItemStore::open(&path).unwrap();
        let item = sample("Courage");
        store.insert(item.clone()).unwrap();
        store.save().unwrap();

        let reopened = ItemStore::open(&path).unwrap();
        assert_eq!(reopened.items(), &[item]);
    }

    #[test]
    fn insert_rejects_blank_items() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ItemStore::open(dir.path().join("items.json")).unwrap();
        let result = store.insert(sample("   "));
        assert!(matches!(result, Err(StoreError::InvalidItem(_))));
    }

    #[test]
    fn check_fields_rejects_blank_title_or_body() {
        assert!(check_fields("Courage", "body").is_ok());
        assert!(matches!(check_fields("  ", "body"), Err(StoreError::InvalidItem(_))));
        assert!(matches!(check_fields("Courage", "\n\t"), Err(StoreError::InvalidItem(_))));
    }

    #[test]
    fn get_unknown_id_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = ItemStore::open(dir.path().join("items.json")).unwrap();
        let id = uuid::Uuid::new_v4();
        assert!(matches!(store.get(id), Err(StoreError::ItemNotFound(found)) if found == id));
    }

    #[test]
    fn validate_flags_out_of_range_stage() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ItemStore::open(dir.path().join("items.json")).unwrap();
        let mut item = sample("Courage");
        item.review.stage = 8;
        store.insert(item).unwrap();

        assert!(store.validate(&IntervalLadder::default()).is_err());
    }

    #[test]
    fn remove_returns_item() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ItemStore::open(dir.path().join("items.json")).unwrap();
        let item = sample("Courage");
        store.insert(item.clone()).unwrap();

        assert_eq!(store.remove(item.id).unwrap(), item);
        assert!(store.items().is_empty());
    }

    #[test]
    fn corrupt_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(ItemStore::open(&path), Err(StoreError::Json(_))));
    }
}
