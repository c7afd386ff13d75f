//! Integration tests for résumé pagination
//!
//! Checks the guarantees renderers and page numbering rely on: every entry
//! lands on exactly one page in its original order, the continuation page
//! count agrees with the pages actually built, and the gallery is chunked
//! without losing presentable items.

use cv_model::{
    Certificate, CvDocument, Education, ItemId, PaperSize, PortfolioItem, SectionKind,
    SectionLengths, WorkExperience,
};
use cv_pagination::{
    continuation_page_count, paginate_gallery, paginate_sections, CapacityProfile,
    ContinuationPage, PageContent, PagePlan, PaginationConfig, SectionCapacity, SectionSlices,
};
use proptest::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn build_document(lengths: SectionLengths, gallery: &[(bool, bool)]) -> CvDocument {
    let mut doc = CvDocument::empty();
    doc.experience = (0..lengths.experience)
        .map(|i| WorkExperience::new(format!("Role {}", i), "Acme"))
        .collect();
    doc.education = (0..lengths.education)
        .map(|i| Education::new(format!("Degree {}", i), "University"))
        .collect();
    doc.certificates = (0..lengths.certificates)
        .map(|i| Certificate::new(format!("Cert {}", i), "Issuer"))
        .collect();
    doc.portfolio = gallery
        .iter()
        .enumerate()
        .map(|(i, &(has_image, has_name))| {
            let name = if has_name { format!("Project {}", i) } else { String::new() };
            PortfolioItem::new(name, has_image.then(|| format!("cover-{}.png", i)))
        })
        .collect();
    doc
}

fn section_ids(sections: &SectionSlices<'_>, kind: SectionKind) -> Vec<ItemId> {
    match kind {
        SectionKind::Experience => sections.experience.iter().map(|e| e.id).collect(),
        SectionKind::Education => sections.education.iter().map(|e| e.id).collect(),
        SectionKind::Certificates => sections.certificates.iter().map(|c| c.id).collect(),
    }
}

fn document_ids(doc: &CvDocument, kind: SectionKind) -> Vec<ItemId> {
    section_ids(
        &SectionSlices {
            experience: &doc.experience,
            education: &doc.education,
            certificates: &doc.certificates,
        },
        kind,
    )
}

fn paper_size() -> impl Strategy<Value = PaperSize> {
    prop_oneof![Just(PaperSize::A4), Just(PaperSize::Letter)]
}

fn section_lengths() -> impl Strategy<Value = SectionLengths> {
    (0usize..40, 0usize..40, 0usize..40).prop_map(|(e, d, c)| SectionLengths::new(e, d, c))
}

fn capacity() -> impl Strategy<Value = SectionCapacity> {
    (1usize..8, 1usize..8, 1usize..8).prop_map(|(e, d, c)| SectionCapacity::new(e, d, c))
}

fn custom_profile() -> impl Strategy<Value = CapacityProfile> {
    (capacity(), capacity(), 1usize..10).prop_map(|(first_page, continuation, gallery)| {
        CapacityProfile {
            first_page,
            continuation,
            gallery_items_per_page: gallery,
            ..CapacityProfile::a4()
        }
    })
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn test_a4_experience_overflow() {
    init_tracing();
    let pages = paginate_sections(SectionLengths::new(10, 2, 0), &CapacityProfile::a4());
    assert_eq!(
        pages,
        vec![ContinuationPage {
            experience_start: 4,
            education_start: 3,
            certificates_start: 3,
            show_experience: true,
            show_education: false,
            show_certificates: false,
        }]
    );
}

#[test]
fn test_a4_exact_first_page_fit() {
    let lengths = SectionLengths::new(4, 3, 3);
    assert_eq!(continuation_page_count(lengths, &CapacityProfile::a4()), 0);
}

#[test]
fn test_letter_gallery_of_seven() {
    let doc = build_document(SectionLengths::default(), &[(true, true); 7]);
    let pages = paginate_gallery(&doc.portfolio, &CapacityProfile::letter());
    let sizes: Vec<usize> = pages.iter().map(|page| page.len()).collect();
    assert_eq!(sizes, vec![4, 3]);
}

#[test]
fn test_letter_gallery_with_missing_images() {
    let gallery = [(true, true), (false, true), (true, true), (false, true), (true, true)];
    let doc = build_document(SectionLengths::default(), &gallery);
    let pages = paginate_gallery(&doc.portfolio, &CapacityProfile::letter());
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].len(), 3);
}

#[test]
fn test_plan_from_json_document() {
    init_tracing();
    let json = r#"{
        "personal": { "fullName": "Jane Doe" },
        "experience": [
            { "jobTitle": "A", "company": "X" }, { "jobTitle": "B", "company": "X" },
            { "jobTitle": "C", "company": "X" }, { "jobTitle": "D", "company": "X" },
            { "jobTitle": "E", "company": "X" }
        ],
        "certificates": [
            { "name": "One" }, { "name": "Two" }, { "name": "Three" }
        ],
        "portfolio": [
            { "projectName": "Shop", "image": "shop.png" },
            { "projectName": "Draft", "image": null }
        ]
    }"#;
    let doc = CvDocument::from_json(json).unwrap();
    let plan = PagePlan::build(&doc, PaperSize::Letter, &PaginationConfig::default()).unwrap();

    // Letter page 1 takes 3 experience and 2 certificates; the rest overflow once.
    assert_eq!(plan.continuation_page_count(), 1);
    assert_eq!(plan.gallery_page_count(), 1);
    assert_eq!(plan.page_count(), 3);
    assert_eq!(plan.first_gallery_ordinal(), Some(3));

    match &plan.pages()[1].content {
        PageContent::Continuation { sections, .. } => {
            let titles: Vec<&str> = sections
                .experience
                .iter()
                .map(|e| e.job_title.as_str())
                .collect();
            assert_eq!(titles, vec!["D", "E"]);
            assert_eq!(sections.certificates[0].name, "Three");
        }
        other => panic!("expected continuation page, got {:?}", other),
    }
}

#[test]
fn test_tuned_config_changes_the_split() {
    let mut tuned = CapacityProfile::a4();
    tuned.continuation.experience = 2;
    let config = PaginationConfig::new().with_profile(PaperSize::A4, tuned);

    let doc = build_document(SectionLengths::new(10, 0, 0), &[]);
    let plan = PagePlan::build(&doc, PaperSize::A4, &config).unwrap();
    assert_eq!(plan.continuation_page_count(), 3);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_sections_are_conserved(lengths in section_lengths(), size in paper_size()) {
        let doc = build_document(lengths, &[]);
        let plan = PagePlan::build(&doc, size, &PaginationConfig::default()).unwrap();

        for kind in SectionKind::ALL {
            let mut seen = Vec::new();
            for page in plan.pages() {
                match &page.content {
                    PageContent::Primary(sections) => seen.extend(section_ids(sections, kind)),
                    PageContent::Continuation { sections, .. } => {
                        seen.extend(section_ids(sections, kind))
                    }
                    PageContent::Gallery { .. } => {}
                }
            }
            prop_assert_eq!(seen, document_ids(&doc, kind));
        }
    }

    #[test]
    fn prop_conserved_under_any_positive_profile(
        lengths in section_lengths(),
        profile in custom_profile(),
    ) {
        let mut consumed = [0usize; 3];
        for (i, kind) in SectionKind::ALL.into_iter().enumerate() {
            consumed[i] = cv_pagination::first_page_range(kind, lengths.get(kind), &profile).end;
        }
        for page in paginate_sections(lengths, &profile) {
            for (i, kind) in SectionKind::ALL.into_iter().enumerate() {
                if let Some(range) = page.range(kind, lengths.get(kind), &profile) {
                    prop_assert_eq!(range.start, consumed[i]);
                    prop_assert!(range.end > range.start);
                    consumed[i] = range.end;
                }
            }
        }
        for (i, kind) in SectionKind::ALL.into_iter().enumerate() {
            prop_assert_eq!(consumed[i], lengths.get(kind));
        }
    }

    #[test]
    fn prop_count_agrees_with_pages(lengths in section_lengths(), profile in custom_profile()) {
        prop_assert_eq!(
            continuation_page_count(lengths, &profile),
            paginate_sections(lengths, &profile).len()
        );
    }

    #[test]
    fn prop_no_spurious_pages(lengths in section_lengths(), profile in custom_profile()) {
        for page in paginate_sections(lengths, &profile) {
            prop_assert!(page.visible_sections().next().is_some());
            for kind in SectionKind::ALL {
                prop_assert_eq!(page.shows(kind), page.start(kind) < lengths.get(kind));
            }
        }
    }

    #[test]
    fn prop_gallery_totals(
        gallery in prop::collection::vec((any::<bool>(), any::<bool>()), 0..30),
        size in paper_size(),
    ) {
        let doc = build_document(SectionLengths::default(), &gallery);
        let profile = CapacityProfile::builtin(size);
        let pages = paginate_gallery(&doc.portfolio, &profile);

        let expected: Vec<ItemId> = doc
            .portfolio
            .iter()
            .filter(|item| item.is_presentable())
            .map(|item| item.id)
            .collect();
        let placed: Vec<ItemId> = pages
            .iter()
            .flat_map(|page| page.items.iter().map(|item| item.id))
            .collect();
        prop_assert_eq!(placed, expected);

        if let Some((last, full)) = pages.split_last() {
            prop_assert!(!last.is_empty());
            prop_assert!(last.len() <= profile.gallery_items_per_page);
            prop_assert!(full.iter().all(|page| page.len() == profile.gallery_items_per_page));
        }
    }

    #[test]
    fn prop_planning_is_idempotent(
        lengths in section_lengths(),
        gallery in prop::collection::vec((any::<bool>(), any::<bool>()), 0..20),
        size in paper_size(),
    ) {
        let doc = build_document(lengths, &gallery);
        let config = PaginationConfig::default();
        let first = PagePlan::build(&doc, size, &config).unwrap();
        let second = PagePlan::build(&doc, size, &config).unwrap();
        prop_assert_eq!(first, second);
    }
}
