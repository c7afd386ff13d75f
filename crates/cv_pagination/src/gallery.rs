//! Gallery Pagination - Fixed-grid pages for the portfolio
//!
//! The gallery is not split by section capacities. Presentable items are
//! chunked into pages of a fixed grid size taken from the paper profile.

use crate::CapacityProfile;
use cv_model::PortfolioItem;

/// One page of the portfolio gallery
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryPage<'a> {
    pub items: Vec<&'a PortfolioItem>,
}

impl GalleryPage<'_> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Chunk the presentable portfolio items into gallery pages.
///
/// Items without an image or a project name are skipped. No page is
/// produced when nothing is presentable. `gallery_items_per_page` must be
/// positive (see [`CapacityProfile::validate`]).
pub fn paginate_gallery<'a>(
    items: &'a [PortfolioItem],
    profile: &CapacityProfile,
) -> Vec<GalleryPage<'a>> {
    let presentable: Vec<&PortfolioItem> = items
        .iter()
        .filter(|item| item.is_presentable())
        .collect();

    let pages: Vec<GalleryPage<'a>> = presentable
        .chunks(profile.gallery_items_per_page)
        .map(|chunk| GalleryPage {
            items: chunk.to_vec(),
        })
        .collect();

    tracing::trace!(
        target: "cv_pagination::gallery",
        total = items.len(),
        presentable = presentable.len(),
        pages = pages.len(),
        "gallery paginated"
    );
    pages
}

/// Number of gallery pages for the given items
pub fn gallery_page_count(items: &[PortfolioItem], profile: &CapacityProfile) -> usize {
    paginate_gallery(items, profile).len()
}
