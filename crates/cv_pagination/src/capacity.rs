//! Capacity Profiles - Per-paper-size page capacities
//!
//! Page capacity is not measured from rendered text. Each paper size has a
//! tuned table giving how many entries of each section fit on the first page
//! (which also carries the personal header) and on continuation pages, plus
//! the fixed grid size of portfolio gallery pages.
//!
//! The tables live in a [`PaginationConfig`] so that new paper sizes or
//! re-tuned capacities are a data change.

use crate::{PageClass, PaginationError, Result};
use cv_model::{PaperSize, SectionKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const POINTS_PER_MM: f32 = 72.0 / 25.4;

// =============================================================================
// Section Capacity
// =============================================================================

/// Maximum entries of each section on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCapacity {
    pub experience: usize,
    pub education: usize,
    pub certificates: usize,
}

impl SectionCapacity {
    pub const fn new(experience: usize, education: usize, certificates: usize) -> Self {
        Self {
            experience,
            education,
            certificates,
        }
    }

    pub fn get(&self, kind: SectionKind) -> usize {
        match kind {
            SectionKind::Experience => self.experience,
            SectionKind::Education => self.education,
            SectionKind::Certificates => self.certificates,
        }
    }
}

// =============================================================================
// Page Dimensions
// =============================================================================

/// Physical page size. Only renderers use this; it plays no part in
/// deciding which entries go on which page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageDimensions {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PageDimensions {
    pub const fn new(width_mm: f32, height_mm: f32) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }

    /// Width and height in points (1/72 inch)
    pub fn to_points(&self) -> (f32, f32) {
        (self.width_mm * POINTS_PER_MM, self.height_mm * POINTS_PER_MM)
    }

    fn is_valid(&self) -> bool {
        self.width_mm.is_finite()
            && self.height_mm.is_finite()
            && self.width_mm > 0.0
            && self.height_mm > 0.0
    }
}

// =============================================================================
// Capacity Profile
// =============================================================================

/// Everything pagination needs to know about one paper size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityProfile {
    /// Capacity of page 1, which shares space with the personal header
    pub first_page: SectionCapacity,
    /// Capacity of every overflow page
    pub continuation: SectionCapacity,
    /// Gallery grid size
    pub gallery_items_per_page: usize,
    pub dimensions: PageDimensions,
}

impl CapacityProfile {
    /// A4: 3 rows of 2 gallery cards
    pub const fn a4() -> Self {
        Self {
            first_page: SectionCapacity::new(4, 3, 3),
            continuation: SectionCapacity::new(6, 5, 5),
            gallery_items_per_page: 6,
            dimensions: PageDimensions::new(210.0, 297.0),
        }
    }

    /// Letter is shorter than A4, so every table is one row smaller
    pub const fn letter() -> Self {
        Self {
            first_page: SectionCapacity::new(3, 2, 2),
            continuation: SectionCapacity::new(5, 4, 4),
            gallery_items_per_page: 4,
            dimensions: PageDimensions::new(215.9, 279.4),
        }
    }

    /// The tuned profile shipped for a paper size
    pub const fn builtin(paper_size: PaperSize) -> Self {
        match paper_size {
            PaperSize::A4 => Self::a4(),
            PaperSize::Letter => Self::letter(),
        }
    }

    pub fn capacity(&self, page: PageClass) -> &SectionCapacity {
        match page {
            PageClass::First => &self.first_page,
            PageClass::Continuation => &self.continuation,
        }
    }

    /// Check that every capacity is positive, which pagination relies on to terminate
    pub fn validate(&self, paper_size: PaperSize) -> Result<()> {
        for page in [PageClass::First, PageClass::Continuation] {
            for section in SectionKind::ALL {
                if self.capacity(page).get(section) == 0 {
                    return Err(PaginationError::ZeroCapacity {
                        paper_size,
                        page,
                        section,
                    });
                }
            }
        }
        if self.gallery_items_per_page == 0 {
            return Err(PaginationError::ZeroGalleryCapacity(paper_size));
        }
        if !self.dimensions.is_valid() {
            return Err(PaginationError::InvalidConfig(format!(
                "page dimensions for {} must be positive, got {}mm x {}mm",
                paper_size, self.dimensions.width_mm, self.dimensions.height_mm
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Pagination Config
// =============================================================================

/// Capacity profiles keyed by paper size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    profiles: HashMap<PaperSize, CapacityProfile>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            profiles: PaperSize::ALL
                .into_iter()
                .map(|size| (size, CapacityProfile::builtin(size)))
                .collect(),
        }
    }
}

impl PaginationConfig {
    /// Create a config with the built-in profiles
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to replace the profile of one paper size
    pub fn with_profile(mut self, paper_size: PaperSize, profile: CapacityProfile) -> Self {
        self.profiles.insert(paper_size, profile);
        self
    }

    /// Look up the profile for a paper size
    pub fn profile(&self, paper_size: PaperSize) -> Result<&CapacityProfile> {
        self.profiles
            .get(&paper_size)
            .ok_or(PaginationError::UnknownPaperSize(paper_size))
    }

    /// Check that every paper size has a usable profile
    pub fn validate(&self) -> Result<()> {
        for paper_size in PaperSize::ALL {
            let result = self
                .profile(paper_size)
                .and_then(|profile| profile.validate(paper_size));
            if let Err(err) = result {
                tracing::warn!(
                    target: "cv_pagination::config",
                    paper_size = %paper_size,
                    error = %err,
                    "pagination config rejected"
                );
                return Err(err);
            }
        }
        Ok(())
    }

    /// Parse and validate a config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
