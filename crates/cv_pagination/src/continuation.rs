//! Section Pagination - Overflow of résumé sections onto continuation pages
//!
//! Page 1 holds up to the first-page capacity of each section. Whatever is
//! left flows onto continuation pages, where all three sections advance in
//! lock-step: each page takes the next slice of every section that still
//! has entries, up to the continuation capacity. A section that runs out
//! early contributes nothing to later pages while the others continue.
//!
//! [`paginate_sections`] is the only place this splitting is decided.
//! The page count used for numbering is derived from its output by
//! [`continuation_page_count`].

use crate::CapacityProfile;
use cv_model::{SectionKind, SectionLengths};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Start offsets and visibility of each section on one continuation page.
///
/// `show_*` is true when the section still had entries at `*_start` when the
/// page was built. How many entries the page actually holds is bounded by
/// the continuation capacity; see [`ContinuationPage::range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContinuationPage {
    pub experience_start: usize,
    pub education_start: usize,
    pub certificates_start: usize,
    pub show_experience: bool,
    pub show_education: bool,
    pub show_certificates: bool,
}

impl ContinuationPage {
    pub fn start(&self, kind: SectionKind) -> usize {
        match kind {
            SectionKind::Experience => self.experience_start,
            SectionKind::Education => self.education_start,
            SectionKind::Certificates => self.certificates_start,
        }
    }

    pub fn shows(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Experience => self.show_experience,
            SectionKind::Education => self.show_education,
            SectionKind::Certificates => self.show_certificates,
        }
    }

    /// Index range of `kind` rendered on this page, or `None` if the
    /// section is hidden here. `len` is the section's full length.
    pub fn range(
        &self,
        kind: SectionKind,
        len: usize,
        profile: &CapacityProfile,
    ) -> Option<Range<usize>> {
        if !self.shows(kind) {
            return None;
        }
        let start = self.start(kind);
        let end = start.saturating_add(profile.continuation.get(kind)).min(len);
        Some(start..end)
    }

    /// Sections visible on this page, in rendering order
    pub fn visible_sections(&self) -> impl Iterator<Item = SectionKind> + '_ {
        SectionKind::ALL.into_iter().filter(|kind| self.shows(*kind))
    }
}

/// Index range of `kind` rendered on page 1
pub fn first_page_range(kind: SectionKind, len: usize, profile: &CapacityProfile) -> Range<usize> {
    0..len.min(profile.first_page.get(kind))
}

/// Split the sections that overflow page 1 into continuation pages.
///
/// Each cursor starts at the first-page capacity even when the section is
/// shorter than that; such a section is simply never shown. After every
/// page each cursor moves to `min(cursor + continuation capacity, len)`,
/// so a short section's start offset settles at its length from the
/// second continuation page on.
/// Capacities must be positive (see [`CapacityProfile::validate`]).
pub fn paginate_sections(
    lengths: SectionLengths,
    profile: &CapacityProfile,
) -> Vec<ContinuationPage> {
    let first = profile.first_page;
    let mut cursor = SectionLengths::new(first.experience, first.education, first.certificates);
    let remaining = |cursor: &SectionLengths| {
        SectionKind::ALL
            .into_iter()
            .any(|kind| cursor.get(kind) < lengths.get(kind))
    };

    let mut pages = Vec::new();
    while remaining(&cursor) {
        let page = ContinuationPage {
            experience_start: cursor.experience,
            education_start: cursor.education,
            certificates_start: cursor.certificates,
            show_experience: cursor.experience < lengths.experience,
            show_education: cursor.education < lengths.education,
            show_certificates: cursor.certificates < lengths.certificates,
        };

        cursor.experience = advance(
            cursor.experience,
            profile.continuation.experience,
            lengths.experience,
        );
        cursor.education = advance(
            cursor.education,
            profile.continuation.education,
            lengths.education,
        );
        cursor.certificates = advance(
            cursor.certificates,
            profile.continuation.certificates,
            lengths.certificates,
        );

        tracing::trace!(
            target: "cv_pagination::sections",
            page = pages.len() + 1,
            experience_start = page.experience_start,
            education_start = page.education_start,
            certificates_start = page.certificates_start,
            "continuation page"
        );
        pages.push(page);
    }
    pages
}

/// Number of continuation pages [`paginate_sections`] produces for the same input
pub fn continuation_page_count(lengths: SectionLengths, profile: &CapacityProfile) -> usize {
    paginate_sections(lengths, profile).len()
}

fn advance(cursor: usize, capacity: usize, len: usize) -> usize {
    cursor.saturating_add(capacity).min(len)
}
