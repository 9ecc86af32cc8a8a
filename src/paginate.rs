//! # Page Packer
//!
//! Partitions the estimated sections into fixed-size pages.
//!
//! The algorithm is single-pass greedy first-fit-in-order bin packing:
//!
//! 1. Walk the sections in document order. Never reorder.
//! 2. Before placing, ask: "does this fit on the current page?"
//! 3. If it fits (or the page is still empty): place it, grow the running
//!    height.
//! 4. If it doesn't fit and the page already has content: close the page and
//!    open a new one with this section as its sole initial member.
//!
//! Sections are atomic. A section taller than a whole page is placed alone
//! and allowed to overflow: an accepted degradation, preferable to dropping
//! it or looping forever. The fit test is strict (`>`), so a section that
//! exactly fills the remaining capacity stays put; that favors denser pages.

use crate::estimate::SectionEstimate;
use crate::model::{PageAssignment, SectionKind};

/// Height budget of one A4 page's content area, in millimeters
/// (297mm minus a 20mm margin top and bottom).
pub const PAGE_CAPACITY: f64 = 257.0;

/// Pack ordered sections into pages under a capacity budget.
///
/// Every input section lands in exactly one assignment, assignments come out
/// in increasing page index, and the concatenation of their section lists is
/// the input order unchanged. With no input sections at all, one empty page
/// comes back so the caller always has a page to show (in practice the
/// estimator emits the header unconditionally, so this is unreachable
/// through the normal pipeline).
pub fn pack(sections: &[SectionEstimate], capacity: f64) -> Vec<PageAssignment> {
    let mut pages: Vec<PageAssignment> = Vec::new();
    let mut current: Vec<SectionKind> = Vec::new();
    let mut current_height = 0.0_f64;

    for section in sections {
        if current_height + section.height > capacity && !current.is_empty() {
            log::debug!(
                "page {} closed at {:.1}mm, {} does not fit ({:.1}mm)",
                pages.len(),
                current_height,
                section.kind.name(),
                section.height
            );
            pages.push(PageAssignment {
                index: pages.len(),
                sections: std::mem::take(&mut current),
            });
            current_height = 0.0;
        }
        current.push(section.kind);
        current_height += section.height;
    }

    pages.push(PageAssignment {
        index: pages.len(),
        sections: current,
    });
    pages
}

/// The pagination-disabled path: one synthetic page claiming every section,
/// including empty ones. The renderer re-checks emptiness against the
/// document itself, so unclaimed content can't leak in and empty sections
/// can't leak out.
pub fn all_on_one_page() -> Vec<PageAssignment> {
    vec![PageAssignment {
        index: 0,
        sections: SectionKind::ALL.to_vec(),
    }]
}
