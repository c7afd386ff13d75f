//! Error types for page planning

use cv_model::{PaperSize, SectionKind};
use thiserror::Error;

/// Which page class a capacity applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageClass {
    First,
    Continuation,
}

impl std::fmt::Display for PageClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageClass::First => f.write_str("first page"),
            PageClass::Continuation => f.write_str("continuation page"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PaginationError {
    #[error("No capacity profile configured for paper size {0}")]
    UnknownPaperSize(PaperSize),

    #[error("{section} capacity on the {page} must be at least 1 for {paper_size}")]
    ZeroCapacity {
        paper_size: PaperSize,
        page: PageClass,
        section: SectionKind,
    },

    #[error("Gallery items per page must be at least 1 for {0}")]
    ZeroGalleryCapacity(PaperSize),

    #[error("Invalid pagination config: {0}")]
    InvalidConfig(String),

    #[error("Config serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaginationError>;
