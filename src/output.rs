//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (article, author, category, page) is its semantic
//! identity: positional index and title. Slugs, references and output paths
//! are secondary context on indented lines or after an arrow.
//!
//! # Output Format
//!
//! ## Load
//!
//! ```text
//! Articles
//! 001 The River Returns (slide 1)
//!     Slug: the-river-returns
//!     By Mara Ellis in Environment
//!     Tags: Rivers, Restoration
//! 002 Night Shift at the Port
//!     Slug: night-shift-at-the-port
//!
//! Authors
//! 001 Mara Ellis (2 articles)
//!
//! Categories
//! 001 Environment (1 article)
//!
//! Pages
//! 001 About Us (nav 10)
//! 002 Archive (link)
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html (2 slides)
//!
//! Articles
//!     001 The River Returns → articles/the-river-returns/index.html
//!
//! Generated 4 articles, 2 authors, 3 categories, 6 tags, 2 pages
//! Files: 3 unchanged, 14 written (17 total)
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::generate::{GenerateReport, PageKind};
use crate::load::Manifest;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 article`, `3 articles`; irregular plurals pass `many` explicitly.
fn count_of(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 Mara Ellis (2 articles)
/// 001 Imprint
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}

// ============================================================================
// Stage 1: Load output
// ============================================================================

/// Format load stage output as a content inventory.
pub fn format_load_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Articles".to_string());
    if manifest.articles.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, article) in manifest.articles.iter().enumerate() {
        let slide = manifest
            .slides
            .iter()
            .position(|s| *s == article.slug)
            .map(|pos| format!("slide {}", pos + 1));
        lines.push(entity_header(i + 1, &article.title, slide.as_deref()));
        lines.push(format!("{}Slug: {}", indent(1), article.slug));

        let byline = match (&article.author, &article.category) {
            (Some(a), Some(c)) => Some(format!("By {} in {}", a.name, c.name)),
            (Some(a), None) => Some(format!("By {}", a.name)),
            (None, Some(c)) => Some(format!("In {}", c.name)),
            (None, None) => None,
        };
        if let Some(byline) = byline {
            lines.push(format!("{}{}", indent(1), byline));
        }
        if !article.tags.is_empty() {
            let names: Vec<&str> = article.tags.iter().map(|t| t.name.as_str()).collect();
            lines.push(format!("{}Tags: {}", indent(1), names.join(", ")));
        }
        if let Some(excerpt) = &article.excerpt {
            let preview = truncate_desc(excerpt.trim(), 60);
            if !preview.is_empty() {
                lines.push(format!("{}{}", indent(1), preview));
            }
        }
    }

    if !manifest.authors.is_empty() {
        lines.push(String::new());
        lines.push("Authors".to_string());
        for (i, author) in manifest.authors.iter().enumerate() {
            let count = manifest.articles_by_author(&author.slug).count();
            lines.push(entity_header(
                i + 1,
                &author.name,
                Some(&count_of(count, "article", "articles")),
            ));
        }
    }

    if !manifest.categories.is_empty() {
        lines.push(String::new());
        lines.push("Categories".to_string());
        for (i, category) in manifest.categories.iter().enumerate() {
            let count = manifest.articles_in_category(&category.slug).count();
            lines.push(entity_header(
                i + 1,
                &category.name,
                Some(&count_of(count, "article", "articles")),
            ));
        }
    }

    if !manifest.pages.is_empty() {
        lines.push(String::new());
        lines.push("Pages".to_string());
        for (i, page) in manifest.pages.iter().enumerate() {
            let detail = if page.is_link() {
                Some("link".to_string())
            } else {
                page.nav_order.map(|n| format!("nav {}", n))
            };
            lines.push(entity_header(i + 1, &page.title, detail.as_deref()));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    }
    if source_root.join(&manifest.config.assets_dir).is_dir() {
        lines.push(format!("{}{}/", indent(1), manifest.config.assets_dir));
    }

    lines
}

/// Print load output to stdout.
pub fn print_load_output(manifest: &Manifest, source_root: &Path) {
    for line in format_load_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Page kinds listed after the home page: kind, heading, singular, plural.
const SECTIONS: [(PageKind, &str, &str, &str); 5] = [
    (PageKind::Article, "Articles", "article", "articles"),
    (PageKind::Author, "Authors", "author", "authors"),
    (PageKind::Category, "Categories", "category", "categories"),
    (PageKind::Tag, "Tags", "tag", "tags"),
    (PageKind::Page, "Pages", "page", "pages"),
];

/// Format generate stage output: each page with its output path.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();

    for page in report.pages.iter().filter(|p| p.kind == PageKind::Home) {
        lines.push(format!(
            "Home \u{2192} {} ({})",
            page.path,
            count_of(report.slides, "slide", "slides")
        ));
    }
    for page in report.pages.iter().filter(|p| p.kind == PageKind::CategoryIndex) {
        lines.push(format!("{} \u{2192} {}", page.kind, page.path));
    }

    let mut totals = Vec::new();
    for (kind, heading, one, many) in SECTIONS {
        let pages: Vec<_> = report.pages.iter().filter(|p| p.kind == kind).collect();
        totals.push(count_of(pages.len(), one, many));
        if pages.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(heading.to_string());
        for (i, page) in pages.iter().enumerate() {
            lines.push(format!(
                "{}{} {} \u{2192} {}",
                indent(1),
                format_index(i + 1),
                page.title,
                page.path
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!("Generated {}", totals.join(", ")));
    if report.assets > 0 {
        lines.push(format!("Assets: {}", count_of(report.assets, "file", "files")));
    }
    lines.push(format!("Files: {}", report.cache));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
