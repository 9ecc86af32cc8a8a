//! # Page Renderer
//!
//! Turns one `PageAssignment` into a typed block tree for a single page.
//!
//! The renderer owns the "atomic section" guarantee on the output side:
//! if a section is assigned to a page, ALL of its entries render there.
//! The estimator's per-entry costing decided which page gets the whole
//! section, never how to split it. The renderer also re-checks emptiness
//! against the document itself; the packer already filters empty sections,
//! but the pagination-disabled path assigns every section unconditionally
//! and relies on these guards.
//!
//! The block tree is serializer-agnostic, the same way the layout engine
//! hands positioned elements to a backend: the `html` module consumes it,
//! and a different output medium could consume it unchanged.

use crate::model::{
    EducationEntry, ExperienceEntry, PageAssignment, ProjectEntry, ResumeDocument, SectionKind,
};

/// One fully resolved output page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    /// Zero-based page index.
    pub index: usize,
    /// Total pages in this render pass.
    pub page_count: usize,
    /// Section blocks in canonical order.
    pub blocks: Vec<PageBlock>,
    /// "Page i of N" review marker. `None` on the last page (and therefore
    /// on a single-page render); the serializer keeps it out of print.
    pub footer: Option<PageFooter>,
}

/// On-screen page counter shown between pages during review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageFooter {
    /// One-based page number.
    pub number: usize,
    pub total: usize,
}

/// A labeled contact item in the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    /// Icon/label key: "email", "phone", "location" or "website".
    pub label: &'static str,
    pub value: String,
}

/// One atomic block on a page. Every block (and every list entry within
/// one) must reach print as an unbroken unit; the serializer attaches the
/// do-not-split hint.
#[derive(Debug, Clone, PartialEq)]
pub enum PageBlock {
    /// Name, title and the non-empty contact fields.
    Header {
        full_name: String,
        title: String,
        contacts: Vec<ContactItem>,
    },
    Summary(String),
    Experience(Vec<ExperienceEntry>),
    Projects(Vec<ProjectEntry>),
    /// Education and skills grouped side by side. Either column may be
    /// absent; a lone column takes the full width.
    TwoColumn {
        education: Vec<EducationEntry>,
        skills: Vec<String>,
    },
}

/// Render the sections assigned to one page.
///
/// `page_count` is the length of the full assignment list; the footer
/// marker appears on every page except the last.
pub fn render_page(
    document: &ResumeDocument,
    assignment: &PageAssignment,
    page_count: usize,
) -> RenderedPage {
    let mut blocks = Vec::new();

    if assignment.contains(SectionKind::Header) {
        blocks.push(header_block(document));
    }

    if assignment.contains(SectionKind::Summary) && !document.summary.is_empty() {
        blocks.push(PageBlock::Summary(document.summary.clone()));
    }

    if assignment.contains(SectionKind::Experience) && !document.experience.is_empty() {
        blocks.push(PageBlock::Experience(document.experience.clone()));
    }

    if assignment.contains(SectionKind::Projects) && !document.projects.is_empty() {
        blocks.push(PageBlock::Projects(document.projects.clone()));
    }

    let education = if assignment.contains(SectionKind::Education) {
        document.education.clone()
    } else {
        Vec::new()
    };
    let skills = if assignment.contains(SectionKind::Skills) {
        document.skills.clone()
    } else {
        Vec::new()
    };
    if !education.is_empty() || !skills.is_empty() {
        blocks.push(PageBlock::TwoColumn { education, skills });
    }

    let is_last = assignment.index + 1 >= page_count;
    RenderedPage {
        index: assignment.index,
        page_count,
        blocks,
        footer: if is_last {
            None
        } else {
            Some(PageFooter {
                number: assignment.index + 1,
                total: page_count,
            })
        },
    }
}

fn header_block(document: &ResumeDocument) -> PageBlock {
    let mut contacts = Vec::new();
    for (label, value) in [
        ("email", &document.email),
        ("phone", &document.phone),
        ("location", &document.location),
        ("website", &document.website),
    ] {
        if !value.is_empty() {
            contacts.push(ContactItem {
                label,
                value: value.clone(),
            });
        }
    }
    PageBlock::Header {
        full_name: document.full_name.clone(),
        title: document.title.clone(),
        contacts,
    }
}
