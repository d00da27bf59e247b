//! Item store error types.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("invalid item: {0}")]
    InvalidItem(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
