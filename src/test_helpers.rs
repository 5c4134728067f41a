//! Shared test utilities for the masthead test suite.
//!
//! Provides fixture setup, lookup helpers and bulk extractors that work with
//! load-stage data structures (`Manifest`, `Article`, `Page`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = load(tmp.path()).unwrap();
//!
//! let river = find_article(&manifest, "the-river-returns");
//! assert_eq!(tag_slugs(river), vec!["rivers", "restoration"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::load::Manifest;
use crate::types::{Article, Page};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups: panic with a clear message on miss
// =========================================================================

/// Find an article by slug. Panics if not found.
pub fn find_article<'a>(manifest: &'a Manifest, slug: &str) -> &'a Article {
    manifest.article(slug).unwrap_or_else(|| {
        let slugs: Vec<&str> = manifest.articles.iter().map(|a| a.slug.as_str()).collect();
        panic!("article '{slug}' not found. Available: {slugs:?}")
    })
}

/// Find a page by slug. Panics if not found.
pub fn find_page<'a>(manifest: &'a Manifest, slug: &str) -> &'a Page {
    manifest
        .pages
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = manifest.pages.iter().map(|p| p.slug.as_str()).collect();
            panic!("page '{slug}' not found. Available: {slugs:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All article titles in manifest order.
pub fn article_titles(manifest: &Manifest) -> Vec<&str> {
    manifest.articles.iter().map(|a| a.title.as_str()).collect()
}

/// Tag slugs of one article, in order.
pub fn tag_slugs(article: &Article) -> Vec<&str> {
    article.tags.iter().map(|t| t.slug.as_str()).collect()
}

/// Navigation titles in order.
pub fn nav_titles(manifest: &Manifest) -> Vec<&str> {
    manifest
        .navigation
        .iter()
        .map(|n| n.title.as_str())
        .collect()
}

/// Count non-overlapping occurrences of `needle` in rendered HTML.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
