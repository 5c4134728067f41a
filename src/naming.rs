//! Centralized slug handling.
//!
//! Every record from the content API carries a slug that becomes a URL path
//! segment (`/articles/{slug}/`, `/authors/{slug}/`, ...). This module is the
//! single place that decides what a valid slug looks like and how slugs are
//! derived for values the API does not slug itself (tags).
//!
//! ## Slug Rules
//!
//! A slug is non-empty, consists of lowercase ASCII letters, digits and
//! dashes, and neither starts nor ends with a dash:
//! - `"the-long-read"` → valid
//! - `"2026-budget"` → valid
//! - `"Long-Read"` → invalid (uppercase)
//! - `"-draft"` → invalid (leading dash)
//! - `"a/b"` → invalid (path separator)

/// Check a slug against the URL-segment rules above.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Top-level directories the generator writes itself. A static page at
/// one of these would share `index.html` with a generated page.
pub const RESERVED_PAGE_SLUGS: [&str; 4] = ["articles", "authors", "categories", "tags"];

pub fn is_reserved_page_slug(slug: &str) -> bool {
    RESERVED_PAGE_SLUGS.contains(&slug)
}

/// Derive a slug from a display name.
///
/// Returns `None` when nothing URL-safe is left (empty or punctuation-only
/// names), so callers can skip the value instead of producing `/tags//`.
///
/// - `"Climate Policy"` → `Some("climate-policy")`
/// - `"Économie"` → `Some("economie")`
/// - `"!!!"` → `None`
pub fn slug_for(name: &str) -> Option<String> {
    let slug = slug::slugify(name.trim());
    if slug.is_empty() { None } else { Some(slug) }
}

/// Display title for a slug: dashes become spaces.
///
/// Used where a record arrives without a title of its own.
pub fn display_title(slug: &str) -> String {
    slug.replace('-', " ")
}
