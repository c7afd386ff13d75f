//! CV Model - Résumé document structure and paper sizes
//!
//! This crate provides the document model consumed by the pagination engine:
//! ordered résumé sections whose items carry stable IDs, the portfolio gallery,
//! and the closed set of supported paper sizes.

mod document;
mod error;
mod item_id;
mod paper;
mod section;

pub use document::*;
pub use error::*;
pub use item_id::*;
pub use paper::*;
pub use section::*;
