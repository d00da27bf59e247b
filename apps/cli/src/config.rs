//! Runtime configuration.

use std::path::PathBuf;

/// File name of the item store.
pub const STORE_FILE: &str = "cloze-items.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
}

impl Config {
    /// Use `store` when given (flag or `CLOZE_STORE`), else the default path.
    pub fn resolve(store: Option<PathBuf>) -> Self {
        Self {
            store_path: store.unwrap_or_else(default_store_path),
        }
    }
}

/// Store under the platform data directory, or the working directory when
/// there is none.
pub fn default_store_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("cloze-review").join(STORE_FILE))
        .unwrap_or_else(|| PathBuf::from(STORE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_store_wins() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/items.json")));
        assert_eq!(config.store_path, PathBuf::from("/tmp/items.json"));
    }

    #[test]
    fn default_store_file_name() {
        let config = Config::resolve(None);
        assert!(config.store_path.ends_with(STORE_FILE));
    }
}
