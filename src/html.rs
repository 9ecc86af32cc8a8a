//! # HTML Serializer
//!
//! The output backend: turns rendered pages into print-ready HTML.
//!
//! Two rules drive the markup. Every section block and every atomic list
//! entry carries the `break-inside-avoid` class so the host's print engine
//! never physically cuts one across a sheet boundary, and the between-page
//! "Page i of N" marker carries `no-print` so it exists only for on-screen
//! review. The accompanying [`PRINT_STYLES`] sheet wires both classes to
//! the CSS print model and pins the page geometry to A4.

use std::fmt::Write;

use crate::render::{PageBlock, RenderedPage};

/// Print stylesheet for the emitted markup. The host embeds this once,
/// next to the pages.
pub const PRINT_STYLES: &str = r#"@media print {
  @page {
    size: A4;
    margin: 15mm;
  }

  body {
    margin: 0;
    padding: 0;
    background: white;
  }

  .no-print {
    display: none !important;
  }

  .resume-page {
    width: 100% !important;
    height: auto !important;
    min-height: auto !important;
    margin: 0 !important;
    padding: 0 !important;
    box-shadow: none !important;
    page-break-after: always !important;
    break-after: page !important;
  }

  .resume-page:last-child {
    page-break-after: avoid !important;
    break-after: avoid !important;
    page-break-inside: avoid !important;
  }

  .break-inside-avoid, section, li, p {
    break-inside: avoid;
    page-break-inside: avoid;
  }
}
"#;

/// Serialize a sequence of rendered pages to an HTML fragment.
pub fn write_pages(pages: &[RenderedPage]) -> String {
    let mut out = String::new();
    for page in pages {
        write_page(&mut out, page);
    }
    out
}

/// Serialize pages into a complete standalone HTML document with the print
/// stylesheet embedded. This is what the CLI writes to disk.
pub fn write_standalone(pages: &[RenderedPage], title: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(title));
    out.push_str("<style>\n");
    out.push_str(PRINT_STYLES);
    out.push_str("</style>\n</head>\n<body>\n");
    for page in pages {
        write_page(&mut out, page);
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn write_page(out: &mut String, page: &RenderedPage) {
    let _ = writeln!(out, "<article class=\"resume-page\" data-page=\"{}\">", page.index);
    for block in &page.blocks {
        write_block(out, block);
    }
    out.push_str("</article>\n");
    if let Some(footer) = page.footer {
        let _ = writeln!(
            out,
            "<div class=\"page-footer no-print\">Page {} of {}</div>",
            footer.number, footer.total
        );
    }
}

fn write_block(out: &mut String, block: &PageBlock) {
    match block {
        PageBlock::Header {
            full_name,
            title,
            contacts,
        } => {
            out.push_str("<header class=\"resume-header break-inside-avoid\">\n");
            let _ = writeln!(out, "<h1>{}</h1>", escape(full_name));
            let _ = writeln!(out, "<p class=\"job-title\">{}</p>", escape(title));
            out.push_str("<ul class=\"contacts\">\n");
            for contact in contacts {
                let _ = writeln!(
                    out,
                    "<li class=\"contact contact-{}\">{}</li>",
                    contact.label,
                    escape(&contact.value)
                );
            }
            out.push_str("</ul>\n</header>\n");
        }

        PageBlock::Summary(text) => {
            out.push_str("<section class=\"summary break-inside-avoid\">\n<h2>Profile</h2>\n");
            let _ = writeln!(out, "<p>{}</p>", escape(text));
            out.push_str("</section>\n");
        }

        PageBlock::Experience(entries) => {
            out.push_str("<section class=\"experience\">\n<h2>Experience</h2>\n");
            for entry in entries {
                let _ = writeln!(
                    out,
                    "<div class=\"entry break-inside-avoid\" data-id=\"{}\">",
                    escape(&entry.id)
                );
                let _ = writeln!(out, "<h3>{}</h3>", escape(&entry.role));
                let _ = writeln!(out, "<span class=\"dates\">{}</span>", escape(&entry.dates));
                let _ = writeln!(out, "<div class=\"company\">{}</div>", escape(&entry.company));
                let _ = writeln!(out, "<p>{}</p>", escape(&entry.description));
                out.push_str("</div>\n");
            }
            out.push_str("</section>\n");
        }

        PageBlock::Projects(entries) => {
            out.push_str("<section class=\"projects\">\n<h2>Projects</h2>\n");
            for entry in entries {
                let _ = writeln!(
                    out,
                    "<div class=\"entry break-inside-avoid\" data-id=\"{}\">",
                    escape(&entry.id)
                );
                match &entry.link {
                    Some(link) => {
                        let _ = writeln!(
                            out,
                            "<h3>{} <span class=\"link\">({})</span></h3>",
                            escape(&entry.name),
                            escape(link)
                        );
                    }
                    None => {
                        let _ = writeln!(out, "<h3>{}</h3>", escape(&entry.name));
                    }
                }
                let _ = writeln!(out, "<p>{}</p>", escape(&entry.description));
                if !entry.technologies.is_empty() {
                    out.push_str("<ul class=\"tech-pills\">\n");
                    for tech in &entry.technologies {
                        let _ = writeln!(out, "<li class=\"pill\">{}</li>", escape(tech));
                    }
                    out.push_str("</ul>\n");
                }
                out.push_str("</div>\n");
            }
            out.push_str("</section>\n");
        }

        PageBlock::TwoColumn { education, skills } => {
            // Both columns present: side-by-side grid. One column: full width.
            let class = if !education.is_empty() && !skills.is_empty() {
                "two-column"
            } else {
                "one-column"
            };
            let _ = writeln!(out, "<div class=\"{}\">", class);
            if !education.is_empty() {
                out.push_str("<section class=\"education break-inside-avoid\">\n<h2>Education</h2>\n");
                for entry in education {
                    let _ = writeln!(
                        out,
                        "<div class=\"entry break-inside-avoid\" data-id=\"{}\">",
                        escape(&entry.id)
                    );
                    let _ = writeln!(out, "<h3>{}</h3>", escape(&entry.school));
                    let _ = writeln!(out, "<div class=\"degree\">{}</div>", escape(&entry.degree));
                    let _ = writeln!(out, "<span class=\"dates\">{}</span>", escape(&entry.dates));
                    let _ = writeln!(out, "<p>{}</p>", escape(&entry.description));
                    out.push_str("</div>\n");
                }
                out.push_str("</section>\n");
            }
            if !skills.is_empty() {
                out.push_str("<section class=\"skills break-inside-avoid\">\n<h2>Skills</h2>\n");
                out.push_str("<ul class=\"skill-pills\">\n");
                for skill in skills {
                    let _ = writeln!(out, "<li class=\"pill\">{}</li>", escape(skill));
                }
                out.push_str("</ul>\n</section>\n");
            }
            out.push_str("</div>\n");
        }
    }
}

/// Escape text for HTML element content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
