//! # ZenResume Engine
//!
//! A page-aware résumé layout engine.
//!
//! The hard part of a print-ready résumé preview is pagination without
//! measurement: at the moment page-fit decisions are made, no real rendered
//! box heights exist. Rather than pretend to measure, this engine costs each
//! semantic section with a deliberately conservative heuristic and packs the
//! sections INTO fixed-size pages, with the page boundary as a hard
//! constraint. A section is atomic: one job entry, or the whole experience
//! list, is never sliced across two sheets. When the heuristic is wrong it
//! errs toward an under-filled page, which prints fine, instead of overflow
//! into the margin, which doesn't.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON/API)
//!       ↓
//!   [model]     — ResumeDocument: typed résumé data + pagination toggle
//!       ↓
//!   [estimate]  — heuristic height cost per non-empty section
//!       ↓
//!   [paginate]  — greedy first-fit-in-order packing into pages
//!       ↓
//!   [render]    — per-page block tree, atomic sections, footer marker
//!       ↓
//!   [html]      — print-ready markup with break hints
//! ```
//!
//! The pipeline is pure and synchronous: recomputed from scratch on every
//! document change, no cached partial state, and the document is read-only
//! input. Persistence lives behind [`store::DocumentStore`], owned by the
//! host.

pub mod error;
pub mod estimate;
pub mod html;
pub mod model;
pub mod paginate;
pub mod render;
pub mod store;
pub mod template;

pub use error::ResumeError;

use model::ResumeDocument;
use render::RenderedPage;

/// Lay out a document into rendered pages.
///
/// This is the primary entry point. With pagination enabled, sections are
/// estimated and packed into as many pages as they need; with it disabled,
/// everything lands on a single unbounded page.
pub fn render(document: &ResumeDocument) -> Vec<RenderedPage> {
    let assignments = if document.enable_pagination {
        let sections = estimate::estimate(document);
        paginate::pack(&sections, paginate::PAGE_CAPACITY)
    } else {
        paginate::all_on_one_page()
    };

    log::debug!(
        "render pass: {} page(s), pagination {}",
        assignments.len(),
        if document.enable_pagination { "on" } else { "off" }
    );

    let page_count = assignments.len();
    assignments
        .iter()
        .map(|assignment| render::render_page(document, assignment, page_count))
        .collect()
}

/// Lay out a document and serialize the pages to an HTML fragment.
pub fn render_html(document: &ResumeDocument) -> String {
    html::write_pages(&render(document))
}

/// Parse a document snapshot from JSON and render it to a complete
/// standalone HTML document.
pub fn render_json(json: &str) -> Result<String, ResumeError> {
    let document: ResumeDocument = serde_json::from_str(json)?;
    let pages = render(&document);
    Ok(html::write_standalone(&pages, &document.full_name))
}
