//! Page Plan - The full page sequence of a résumé document
//!
//! A plan lays out page 1, then the continuation pages, then the gallery
//! pages, numbering them contiguously from 1. Renderers receive the plan
//! one page at a time through [`PageRenderer`] and only draw; they never
//! decide which entries go where.

use crate::{
    first_page_range, paginate_gallery, paginate_sections, CapacityProfile, ContinuationPage,
    GalleryPage, PageDimensions, PaginationConfig, Result,
};
use cv_model::{Certificate, CvDocument, Education, PaperSize, SectionKind, WorkExperience};
use std::ops::Range;

// =============================================================================
// Section Slices
// =============================================================================

/// The entries of each section that one page renders
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSlices<'a> {
    pub experience: &'a [WorkExperience],
    pub education: &'a [Education],
    pub certificates: &'a [Certificate],
}

impl<'a> SectionSlices<'a> {
    /// Entries shown on page 1
    pub fn first_page(document: &'a CvDocument, profile: &CapacityProfile) -> Self {
        let lengths = document.section_lengths();
        Self::resolve(document, |kind| {
            Some(first_page_range(kind, lengths.get(kind), profile))
        })
    }

    /// Entries shown on a continuation page; hidden sections are empty
    pub fn continuation(
        document: &'a CvDocument,
        page: &ContinuationPage,
        profile: &CapacityProfile,
    ) -> Self {
        let lengths = document.section_lengths();
        Self::resolve(document, |kind| page.range(kind, lengths.get(kind), profile))
    }

    fn resolve(
        document: &'a CvDocument,
        range_of: impl Fn(SectionKind) -> Option<Range<usize>>,
    ) -> Self {
        fn slice<'t, T>(items: &'t [T], range: Option<Range<usize>>) -> &'t [T] {
            range.and_then(|range| items.get(range)).unwrap_or(&[])
        }

        Self {
            experience: slice(&document.experience, range_of(SectionKind::Experience)),
            education: slice(&document.education, range_of(SectionKind::Education)),
            certificates: slice(&document.certificates, range_of(SectionKind::Certificates)),
        }
    }

    pub fn len(&self, kind: SectionKind) -> usize {
        match kind {
            SectionKind::Experience => self.experience.len(),
            SectionKind::Education => self.education.len(),
            SectionKind::Certificates => self.certificates.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        SectionKind::ALL.into_iter().all(|kind| self.len(kind) == 0)
    }
}

// =============================================================================
// Planned Pages
// =============================================================================

/// What a page carries
#[derive(Debug, Clone, PartialEq)]
pub enum PageContent<'a> {
    /// Page 1: personal header plus the first slice of each section
    Primary(SectionSlices<'a>),
    /// Overflow of the résumé sections
    Continuation {
        descriptor: ContinuationPage,
        sections: SectionSlices<'a>,
        /// 1-based position among continuation pages, set only when there are several
        sequence: Option<usize>,
    },
    /// One grid of the portfolio gallery
    Gallery {
        page: GalleryPage<'a>,
        /// 1-based position among gallery pages, set only when there are several
        sequence: Option<usize>,
    },
}

/// A page in print order
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPage<'a> {
    /// 1-based page number within the whole document
    pub ordinal: usize,
    pub content: PageContent<'a>,
}

impl PlannedPage<'_> {
    /// Element id exporters use to locate the page
    pub fn anchor_id(&self) -> String {
        format!("cv-page-{}", self.ordinal)
    }

    /// Heading counter for "(Cont. n)" or "Portfolio (n)" style titles
    pub fn sequence(&self) -> Option<usize> {
        match &self.content {
            PageContent::Primary(_) => None,
            PageContent::Continuation { sequence, .. } | PageContent::Gallery { sequence, .. } => {
                *sequence
            }
        }
    }

    pub fn is_gallery(&self) -> bool {
        matches!(self.content, PageContent::Gallery { .. })
    }
}

/// Draws planned pages. Implemented by theme renderers and exporters.
pub trait PageRenderer {
    type Output;
    type Error;

    fn render_page(
        &mut self,
        document: &CvDocument,
        page: &PlannedPage<'_>,
        dimensions: PageDimensions,
    ) -> std::result::Result<Self::Output, Self::Error>;
}

// =============================================================================
// Page Plan
// =============================================================================

/// Every page of a document on one paper size
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan<'a> {
    document: &'a CvDocument,
    paper_size: PaperSize,
    profile: CapacityProfile,
    pages: Vec<PlannedPage<'a>>,
    continuation_pages: usize,
    gallery_pages: usize,
}

impl<'a> PagePlan<'a> {
    /// Plan `document` on `paper_size` using the profiles in `config`
    pub fn build(
        document: &'a CvDocument,
        paper_size: PaperSize,
        config: &PaginationConfig,
    ) -> Result<Self> {
        let profile = *config.profile(paper_size)?;
        profile.validate(paper_size)?;

        let continuation = paginate_sections(document.section_lengths(), &profile);
        let gallery = paginate_gallery(&document.portfolio, &profile);
        let continuation_pages = continuation.len();
        let gallery_pages = gallery.len();

        let mut pages = Vec::with_capacity(1 + continuation_pages + gallery_pages);
        pages.push(PlannedPage {
            ordinal: 1,
            content: PageContent::Primary(SectionSlices::first_page(document, &profile)),
        });

        for (index, descriptor) in continuation.into_iter().enumerate() {
            pages.push(PlannedPage {
                ordinal: pages.len() + 1,
                content: PageContent::Continuation {
                    descriptor,
                    sections: SectionSlices::continuation(document, &descriptor, &profile),
                    sequence: (continuation_pages > 1).then_some(index + 1),
                },
            });
        }

        for (index, page) in gallery.into_iter().enumerate() {
            pages.push(PlannedPage {
                ordinal: pages.len() + 1,
                content: PageContent::Gallery {
                    page,
                    sequence: (gallery_pages > 1).then_some(index + 1),
                },
            });
        }

        tracing::debug!(
            target: "cv_pagination::plan",
            paper_size = %paper_size,
            continuation_pages,
            gallery_pages,
            total_pages = pages.len(),
            "page plan built"
        );

        Ok(Self {
            document,
            paper_size,
            profile,
            pages,
            continuation_pages,
            gallery_pages,
        })
    }

    pub fn document(&self) -> &'a CvDocument {
        self.document
    }

    pub fn paper_size(&self) -> PaperSize {
        self.paper_size
    }

    pub fn profile(&self) -> &CapacityProfile {
        &self.profile
    }

    pub fn dimensions(&self) -> PageDimensions {
        self.profile.dimensions
    }

    pub fn pages(&self) -> &[PlannedPage<'a>] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn continuation_page_count(&self) -> usize {
        self.continuation_pages
    }

    pub fn gallery_page_count(&self) -> usize {
        self.gallery_pages
    }

    /// Ordinal of the first gallery page, if the gallery has any pages
    pub fn first_gallery_ordinal(&self) -> Option<usize> {
        (self.gallery_pages > 0).then_some(2 + self.continuation_pages)
    }

    /// Hand every page, in order, to `renderer`. Stops at the first error.
    pub fn render_with<R: PageRenderer>(
        &self,
        renderer: &mut R,
    ) -> std::result::Result<Vec<R::Output>, R::Error> {
        let dimensions = self.dimensions();
        self.pages
            .iter()
            .map(|page| renderer.render_page(self.document, page, dimensions))
            .collect()
    }
}
