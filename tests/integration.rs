//! Integration tests for the ZenResume layout pipeline.
//!
//! These tests exercise the full path from document (or JSON snapshot) to
//! rendered pages and HTML. They verify:
//! - every non-empty section lands on exactly one page, in order
//! - sections stay atomic across page boundaries
//! - the pagination toggle switches between one page and many
//! - footer markers appear on every page except the last
//! - the HTML output carries the print break hints

use zenresume::estimate::{self, cost};
use zenresume::model::*;
use zenresume::paginate::{self, PAGE_CAPACITY};
use zenresume::render::{PageBlock, RenderedPage};
use zenresume::template;

// ─── Helpers ────────────────────────────────────────────────────

fn experience_entry(i: usize) -> ExperienceEntry {
    ExperienceEntry {
        id: format!("exp-{i}"),
        company: format!("Company {i}"),
        role: "Engineer".to_string(),
        dates: "2020 - 2024".to_string(),
        description: "Built things.".to_string(),
    }
}

fn education_entry(i: usize) -> EducationEntry {
    EducationEntry {
        id: format!("edu-{i}"),
        school: format!("University {i}"),
        degree: "BSc".to_string(),
        dates: "2016 - 2020".to_string(),
        description: "Studied things.".to_string(),
    }
}

/// A document sized so that header + summary + experience cannot share a
/// page: 6 experience entries, no projects, 2 education entries, 12 skills.
/// This is the canonical multi-page scenario.
fn crowded_doc() -> ResumeDocument {
    ResumeDocument {
        full_name: "Alex Chen".to_string(),
        title: "Senior Product Designer".to_string(),
        email: "alex.chen@example.com".to_string(),
        phone: String::new(),
        location: "San Francisco, CA".to_string(),
        website: String::new(),
        summary: "A summary long enough to matter.".to_string(),
        experience: (1..=6).map(experience_entry).collect(),
        education: (1..=2).map(education_entry).collect(),
        projects: vec![],
        skills: (1..=12).map(|i| format!("Skill {i}")).collect(),
        enable_pagination: true,
    }
}

fn section_kinds(page: &RenderedPage) -> Vec<&'static str> {
    page.blocks
        .iter()
        .map(|b| match b {
            PageBlock::Header { .. } => "header",
            PageBlock::Summary(_) => "summary",
            PageBlock::Experience(_) => "experience",
            PageBlock::Projects(_) => "projects",
            PageBlock::TwoColumn { .. } => "two-column",
        })
        .collect()
}

// ─── Packing Properties ─────────────────────────────────────────

#[test]
fn test_every_nonempty_section_assigned_exactly_once() {
    let doc = crowded_doc();
    let sections = estimate::estimate(&doc);
    let pages = paginate::pack(&sections, PAGE_CAPACITY);

    let mut seen: Vec<SectionKind> = Vec::new();
    for page in &pages {
        for &kind in &page.sections {
            assert!(!seen.contains(&kind), "{} assigned twice", kind.name());
            seen.push(kind);
        }
    }
    for section in &sections {
        assert!(
            seen.contains(&section.kind),
            "{} was dropped by the packer",
            section.kind.name()
        );
    }
}

#[test]
fn test_page_boundaries_never_reorder_sections() {
    let doc = crowded_doc();
    let sections = estimate::estimate(&doc);
    let pages = paginate::pack(&sections, PAGE_CAPACITY);

    let flat: Vec<SectionKind> = pages.iter().flat_map(|p| p.sections.clone()).collect();
    let expected: Vec<SectionKind> = sections.iter().map(|s| s.kind).collect();
    assert_eq!(flat, expected, "concatenated pages must equal input order");
}

#[test]
fn test_capacity_monotonicity() {
    let doc = crowded_doc();
    let sections = estimate::estimate(&doc);

    let mut previous = usize::MAX;
    for capacity in [60.0, 120.0, 180.0, 257.0, 400.0, 2000.0] {
        let count = paginate::pack(&sections, capacity).len();
        assert!(
            count <= previous,
            "capacity {} produced {} pages (> {} at the previous, smaller capacity)",
            capacity,
            count,
            previous
        );
        previous = count;
    }
}

#[test]
fn test_crowded_document_packs_into_expected_pages() {
    // Header + summary fill page 1; six experience entries exceed what's
    // left, so the whole experience section opens page 2; education and
    // skills pair up on page 3.
    let doc = crowded_doc();
    let sections = estimate::estimate(&doc);
    assert!(
        cost::HEADER + cost::SUMMARY + 6.0 * cost::PER_EXPERIENCE > PAGE_CAPACITY,
        "scenario precondition: header+summary+experience must overflow"
    );

    let pages = paginate::pack(&sections, PAGE_CAPACITY);
    assert_eq!(pages.len(), 3, "expected 3 pages, got {:?}", pages);
    assert_eq!(
        pages[0].sections,
        vec![SectionKind::Header, SectionKind::Summary]
    );
    assert_eq!(pages[1].sections, vec![SectionKind::Experience]);
    assert_eq!(
        pages[2].sections,
        vec![SectionKind::Education, SectionKind::Skills]
    );
}

#[test]
fn test_degenerate_document_is_one_header_page() {
    let doc = ResumeDocument {
        enable_pagination: true,
        ..Default::default()
    };
    let pages = zenresume::render(&doc);
    assert_eq!(pages.len(), 1);
    assert_eq!(section_kinds(&pages[0]), vec!["header"]);
    assert_eq!(pages[0].footer, None);
}

// ─── Full Pipeline ──────────────────────────────────────────────

#[test]
fn test_pagination_disabled_is_always_one_page() {
    let mut doc = crowded_doc();
    doc.enable_pagination = false;
    // Make it even bigger: still one page.
    doc.experience = (1..=40).map(experience_entry).collect();
    let pages = zenresume::render(&doc);
    assert_eq!(pages.len(), 1);
    assert_eq!(
        section_kinds(&pages[0]),
        vec!["header", "summary", "experience", "two-column"],
        "single page renders all non-empty sections in canonical order"
    );
}

#[test]
fn test_experience_stays_atomic_across_pages() {
    let doc = crowded_doc();
    let pages = zenresume::render(&doc);
    let experience_pages: Vec<&RenderedPage> = pages
        .iter()
        .filter(|p| p.blocks.iter().any(|b| matches!(b, PageBlock::Experience(_))))
        .collect();
    assert_eq!(experience_pages.len(), 1, "experience must be on one page only");
    match experience_pages[0]
        .blocks
        .iter()
        .find(|b| matches!(b, PageBlock::Experience(_)))
        .unwrap()
    {
        PageBlock::Experience(entries) => assert_eq!(entries.len(), 6),
        _ => unreachable!(),
    }
}

#[test]
fn test_footer_on_every_page_but_the_last() {
    let pages = zenresume::render(&crowded_doc());
    assert!(pages.len() > 1, "scenario must be multi-page");
    let (last, rest) = pages.split_last().unwrap();
    for page in rest {
        let footer = page.footer.expect("non-last page must carry a footer");
        assert_eq!(footer.number, page.index + 1);
        assert_eq!(footer.total, pages.len());
    }
    assert_eq!(last.footer, None);
}

#[test]
fn test_header_only_on_first_page() {
    let pages = zenresume::render(&crowded_doc());
    assert!(section_kinds(&pages[0]).contains(&"header"));
    for page in &pages[1..] {
        assert!(
            !section_kinds(page).contains(&"header"),
            "header should appear solely on page 1"
        );
    }
}

#[test]
fn test_render_is_deterministic() {
    let doc = crowded_doc();
    assert_eq!(zenresume::render(&doc), zenresume::render(&doc));
}

// ─── JSON → HTML ────────────────────────────────────────────────

#[test]
fn test_json_snapshot_to_html() {
    let mut doc = template::starter();
    doc.enable_pagination = true;
    let json = serde_json::to_string(&doc).unwrap();

    let html = zenresume::render_json(&json).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Alex Chen"));
    assert!(html.contains("break-inside-avoid"));
    assert!(html.contains("@media print"));
}

#[test]
fn test_invalid_json_reports_parse_error() {
    let err = zenresume::render_json("{ nope").unwrap_err();
    assert!(matches!(err, zenresume::ResumeError::Parse { .. }));
}

#[test]
fn test_multipage_html_has_review_footers_between_pages() {
    let json = serde_json::to_string(&crowded_doc()).unwrap();
    let html = zenresume::render_json(&json).unwrap();
    assert_eq!(html.matches("class=\"resume-page\"").count(), 3);
    assert!(html.contains("Page 1 of 3"));
    assert!(html.contains("Page 2 of 3"));
    assert!(
        !html.contains("Page 3 of 3"),
        "last page must not carry the review marker"
    );
}
