//! Error types for the résumé document model

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Document serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid item id: {0}")]
    InvalidItemId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
