//! CV Pagination - Page planning for résumé documents
//!
//! This crate decides how a résumé is split into fixed-size printable pages:
//! - Page 1 holds the first slice of each section, bounded by the paper
//!   profile's first-page capacities
//! - Overflowing sections continue on continuation pages in lock-step
//! - The portfolio gallery is chunked onto its own fixed-grid pages
//!
//! Capacities come from static per-paper-size tables ([`PaginationConfig`]);
//! no text is measured. Everything here is pure: the same document and
//! profile always yield the same plan.

mod capacity;
mod continuation;
mod error;
mod gallery;
mod plan;

pub use capacity::*;
pub use continuation::*;
pub use error::*;
pub use gallery::*;
pub use plan::*;
