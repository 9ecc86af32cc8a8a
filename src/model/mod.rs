//! # Document Model
//!
//! The input representation for the layout engine. A résumé is not a
//! free-form node tree but a flat, typed record: contact fields, an optional
//! summary, and ordered lists of experience, education, projects and skills.
//! The order of each list is display order and is preserved end-to-end; the
//! engine never reorders entries.
//!
//! The serde wire format uses camelCase field names (`fullName`,
//! `enablePagination`, ...) so snapshots persisted by earlier versions of
//! the application deserialize unchanged.

use serde::{Deserialize, Serialize};

/// A complete résumé ready for layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub full_name: String,
    /// Job title shown under the name.
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,

    /// Professional summary. Empty string means "no summary section".
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub skills: Vec<String>,

    /// Whether the preview is split into fixed-size pages. When false, the
    /// whole résumé renders into one unbounded page.
    #[serde(default)]
    pub enable_pagination: bool,
}

/// One job in the experience list. Packed and rendered atomically with its
/// siblings: the experience section never splits across pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    /// Unique within the document. Assigned by the editor, opaque here.
    pub id: String,
    pub company: String,
    pub role: String,
    pub dates: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub dates: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// The named logical blocks of a résumé, in canonical display order.
///
/// Education and skills are separate packing units but render side by side
/// when they land on the same page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Header,
    Summary,
    Experience,
    Projects,
    Education,
    Skills,
}

impl SectionKind {
    /// All section kinds in canonical display order.
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Header,
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Education,
        SectionKind::Skills,
    ];

    /// Human-readable name, as used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
        }
    }
}

/// Which sections one output page carries.
///
/// Ephemeral: rebuilt from scratch on every render pass, owns no state
/// across renders. Every non-empty section of the document appears in
/// exactly one assignment; within a page, sections stay in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAssignment {
    /// Zero-based page index; assignments come out in increasing order.
    pub index: usize,
    pub sections: Vec<SectionKind>,
}

impl PageAssignment {
    pub fn contains(&self, kind: SectionKind) -> bool {
        self.sections.contains(&kind)
    }
}

impl ResumeDocument {
    /// True when nothing beyond the header would render.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.projects.is_empty()
            && self.skills.is_empty()
    }
}
