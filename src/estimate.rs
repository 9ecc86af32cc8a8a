//! # Height Estimator
//!
//! Assigns a heuristic height cost to each non-empty section of a document.
//!
//! There is no rendered box model to consult here: page-fit decisions have
//! to be made before anything is painted, so true text heights are simply
//! not available. Instead of measuring, we cost each section with a fixed
//! formula and tune the constants conservatively: overestimating biases the
//! packer toward under-filled pages, which prints fine, rather than toward
//! overflow into the margin, which doesn't.
//!
//! The estimator is an isolated pure function and the constants live in one
//! place, so a future measurement-feedback pass (render off-screen, measure,
//! re-pack) can replace it without touching the packer or renderer.

use crate::model::{ResumeDocument, SectionKind};

/// Heuristic section heights in millimeters of A4 content area.
///
/// Tuned empirically against the preview's typography, not derived from font
/// metrics. Only the formula shape is contract; the values are deliberately
/// on the high side.
pub mod cost {
    /// Name, title and the contact row. Always present.
    pub const HEADER: f64 = 45.0;
    /// A short summary paragraph.
    pub const SUMMARY: f64 = 30.0;
    /// One experience entry: role line, company line, description.
    pub const PER_EXPERIENCE: f64 = 35.0;
    /// One project entry: name, description, technology pills.
    pub const PER_PROJECT: f64 = 28.0;
    /// Section heading above the education list.
    pub const EDUCATION_BASE: f64 = 10.0;
    /// One education entry.
    pub const PER_EDUCATION: f64 = 30.0;
    /// Section heading above the skill pills.
    pub const SKILLS_BASE: f64 = 10.0;
    /// How many pills fit in one wrapped row.
    pub const SKILLS_PER_ROW: usize = 4;
    /// Height of one pill row.
    pub const SKILLS_ROW_HEIGHT: f64 = 10.0;
}

/// A section instance with its estimated height.
///
/// `items` is the entry count behind the estimate. It feeds the height
/// formula only; the section itself packs as one indivisible unit, never
/// per-entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionEstimate {
    pub kind: SectionKind,
    pub height: f64,
    pub items: usize,
}

/// Estimate the height of every non-empty section, in canonical order.
///
/// Empty sections produce no estimate at all: no summary text means no
/// summary section, zero experience entries means no experience section.
/// The header is the one unconditional entry, so even a blank document
/// yields a non-empty result.
pub fn estimate(document: &ResumeDocument) -> Vec<SectionEstimate> {
    let mut sections = Vec::with_capacity(SectionKind::ALL.len());

    sections.push(SectionEstimate {
        kind: SectionKind::Header,
        height: cost::HEADER,
        items: 1,
    });

    if !document.summary.is_empty() {
        sections.push(SectionEstimate {
            kind: SectionKind::Summary,
            height: cost::SUMMARY,
            items: 1,
        });
    }

    if !document.experience.is_empty() {
        let n = document.experience.len();
        sections.push(SectionEstimate {
            kind: SectionKind::Experience,
            height: n as f64 * cost::PER_EXPERIENCE,
            items: n,
        });
    }

    if !document.projects.is_empty() {
        let n = document.projects.len();
        sections.push(SectionEstimate {
            kind: SectionKind::Projects,
            height: n as f64 * cost::PER_PROJECT,
            items: n,
        });
    }

    if !document.education.is_empty() {
        let n = document.education.len();
        sections.push(SectionEstimate {
            kind: SectionKind::Education,
            height: cost::EDUCATION_BASE + n as f64 * cost::PER_EDUCATION,
            items: n,
        });
    }

    if !document.skills.is_empty() {
        let n = document.skills.len();
        let rows = n.div_ceil(cost::SKILLS_PER_ROW);
        sections.push(SectionEstimate {
            kind: SectionKind::Skills,
            height: cost::SKILLS_BASE + rows as f64 * cost::SKILLS_ROW_HEIGHT,
            items: n,
        });
    }

    log::debug!(
        "estimated {} sections, total height {:.1}mm",
        sections.len(),
        sections.iter().map(|s| s.height).sum::<f64>()
    );

    sections
}
