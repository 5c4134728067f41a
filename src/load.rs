//! Content snapshot loading and manifest generation.
//!
//! Stage 1 of the build pipeline. Reads the JSON records exported from the
//! headless content API, validates them, resolves cross references, and
//! produces the [`Manifest`] that the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── articles.json                # Article records (optional, empty site without)
//! ├── authors.json                 # Author records (optional)
//! ├── categories.json              # Category records (optional)
//! ├── pages.json                   # Static pages and external nav links (optional)
//! └── assets/                      # Copied verbatim to the output root
//! ```
//!
//! Articles reference authors and categories by slug and carry tags as plain
//! display names:
//!
//! ```json
//! {
//!   "id": "a-101",
//!   "title": "The River Returns",
//!   "slug": "the-river-returns",
//!   "published_at": "2026-03-14T09:00:00Z",
//!   "featured": true,
//!   "image": { "url": "https://cdn.example.com/river.jpg", "alt": "A river" },
//!   "author": "mara-ellis",
//!   "category": "environment",
//!   "tags": ["Rivers", "Restoration"],
//!   "body": "Markdown **body**"
//! }
//! ```
//!
//! ## Validation
//!
//! - Every slug must pass [`naming::is_valid_slug`]
//! - Slugs and ids are unique within each collection
//! - Rendered pages may not use a slug reserved for generated routes
//!   (`articles`, `authors`, `categories`, `tags`)
//!
//! A reference to an author or category that does not exist is not an error:
//! the reference is dropped with a warning and the article renders without it.

use crate::config::{self, SiteConfig};
use crate::naming;
use crate::types::{Article, Author, AuthorRef, Category, CategoryRef, ImageRef, NavItem, Page, TagRef};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Content directory not found: {0}")]
    MissingRoot(PathBuf),
    #[error("JSON error in {file}: {source}")]
    Json {
        file: PathBuf,
        source: serde_json::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid {kind} slug {slug:?}")]
    InvalidSlug { kind: &'static str, slug: String },
    #[error("Duplicate {kind} slug {slug:?}")]
    DuplicateSlug { kind: &'static str, slug: String },
    #[error("Duplicate {kind} id {id:?}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("Page slug {slug:?} is reserved for generated pages")]
    ReservedSlug { slug: String },
}

/// Manifest output from the load stage, input of the generate stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub navigation: Vec<NavItem>,
    /// All articles, newest first.
    pub articles: Vec<Article>,
    /// Slugs of the articles shown in the home page slide navigator, in order.
    #[serde(default)]
    pub slides: Vec<String>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub pages: Vec<Page>,
    pub config: SiteConfig,
}

impl Manifest {
    pub fn article(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    /// Articles of the slide navigator, in slide order.
    pub fn slide_articles(&self) -> Vec<&Article> {
        self.slides.iter().filter_map(|s| self.article(s)).collect()
    }

    pub fn articles_by_author<'a>(&'a self, slug: &'a str) -> impl Iterator<Item = &'a Article> {
        self.articles
            .iter()
            .filter(move |a| a.author.as_ref().is_some_and(|r| r.slug == slug))
    }

    pub fn articles_in_category<'a>(
        &'a self,
        slug: &'a str,
    ) -> impl Iterator<Item = &'a Article> {
        self.articles
            .iter()
            .filter(move |a| a.category.as_ref().is_some_and(|r| r.slug == slug))
    }

    pub fn articles_tagged<'a>(&'a self, slug: &'a str) -> impl Iterator<Item = &'a Article> {
        self.articles
            .iter()
            .filter(move |a| a.tags.iter().any(|t| t.slug == slug))
    }

    /// Every distinct tag, in order of first appearance.
    pub fn tags(&self) -> Vec<&TagRef> {
        let mut seen = HashSet::new();
        self.articles
            .iter()
            .flat_map(|a| &a.tags)
            .filter(|t| seen.insert(t.slug.as_str()))
            .collect()
    }
}

// ============================================================================
// Snapshot records as exported by the content API
// ============================================================================

/// Record ids arrive as strings from some APIs and as numbers from others.
fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    #[serde(deserialize_with = "id_string")]
    id: String,
    #[serde(default)]
    title: String,
    slug: String,
    #[serde(default)]
    headline: Option<String>,
    #[serde(default)]
    subheading: Option<String>,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    read_time: Option<String>,
    #[serde(default)]
    body: String,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    image: Option<ImageRef>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawAuthor {
    #[serde(deserialize_with = "id_string")]
    id: String,
    name: String,
    slug: String,
    #[serde(default)]
    job_title: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    avatar: Option<ImageRef>,
    #[serde(default)]
    twitter: Option<String>,
    #[serde(default)]
    linkedin: Option<String>,
    #[serde(default)]
    website: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    #[serde(deserialize_with = "id_string")]
    id: String,
    name: String,
    slug: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    display_order: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    #[serde(deserialize_with = "id_string")]
    id: String,
    #[serde(default)]
    title: String,
    slug: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    nav_order: Option<u32>,
    #[serde(default)]
    link: Option<String>,
}

// ============================================================================
// Loading
// ============================================================================

pub fn load(root: &Path) -> Result<Manifest, LoadError> {
    if !root.is_dir() {
        return Err(LoadError::MissingRoot(root.to_path_buf()));
    }

    let config = config::load_config(root)?;

    let raw_authors: Vec<RawAuthor> = read_collection(root, "authors.json")?;
    let raw_categories: Vec<RawCategory> = read_collection(root, "categories.json")?;
    let raw_pages: Vec<RawPage> = read_collection(root, "pages.json")?;
    let raw_articles: Vec<RawArticle> = read_collection(root, "articles.json")?;

    check_records(
        "author",
        raw_authors.iter().map(|a| (a.id.as_str(), a.slug.as_str())),
    )?;
    check_records(
        "category",
        raw_categories.iter().map(|c| (c.id.as_str(), c.slug.as_str())),
    )?;
    check_records(
        "page",
        raw_pages.iter().map(|p| (p.id.as_str(), p.slug.as_str())),
    )?;
    // Link pages render nothing, so only rendered pages can collide
    if let Some(page) = raw_pages
        .iter()
        .find(|p| p.link.is_none() && naming::is_reserved_page_slug(&p.slug))
    {
        return Err(LoadError::ReservedSlug {
            slug: page.slug.clone(),
        });
    }
    check_records(
        "article",
        raw_articles.iter().map(|a| (a.id.as_str(), a.slug.as_str())),
    )?;

    let authors: Vec<Author> = raw_authors
        .into_iter()
        .map(|a| Author {
            id: a.id,
            name: a.name,
            slug: a.slug,
            job_title: non_blank(a.job_title),
            bio: non_blank(a.bio),
            avatar: a.avatar,
            twitter: non_blank(a.twitter),
            linkedin: non_blank(a.linkedin),
            website: non_blank(a.website),
        })
        .collect();

    let mut categories: Vec<Category> = raw_categories
        .into_iter()
        .map(|c| Category {
            id: c.id,
            name: c.name,
            slug: c.slug,
            description: non_blank(c.description),
            display_order: c.display_order,
        })
        .collect();
    sort_categories(&mut categories);

    let author_index: HashMap<&str, &Author> =
        authors.iter().map(|a| (a.slug.as_str(), a)).collect();
    let category_index: HashMap<&str, &Category> =
        categories.iter().map(|c| (c.slug.as_str(), c)).collect();

    let mut articles: Vec<Article> = raw_articles
        .into_iter()
        .map(|raw| resolve_article(raw, &author_index, &category_index))
        .collect();
    sort_newest_first(&mut articles);

    let mut pages: Vec<Page> = raw_pages
        .into_iter()
        .map(|p| Page {
            title: if p.title.trim().is_empty() {
                naming::display_title(&p.slug)
            } else {
                p.title
            },
            id: p.id,
            slug: p.slug,
            body: p.body,
            nav_order: p.nav_order,
            link: p.link,
        })
        .collect();
    pages.sort_by_key(|p| (p.nav_order.unwrap_or(u32::MAX), p.slug.clone()));

    let slides = select_slides(&articles, config.navigator.max_slides);
    let navigation = build_navigation(&categories, &articles, &pages);

    debug!(
        articles = articles.len(),
        authors = authors.len(),
        categories = categories.len(),
        pages = pages.len(),
        slides = slides.len(),
        "content loaded"
    );

    Ok(Manifest {
        navigation,
        articles,
        slides,
        authors,
        categories,
        pages,
        config,
    })
}

/// Read a JSON array file from the content root. A missing file is an empty list.
fn read_collection<T: DeserializeOwned>(root: &Path, file: &str) -> Result<Vec<T>, LoadError> {
    let path = root.join(file);
    if !path.exists() {
        debug!(file, "collection not present, treating as empty");
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path)?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json { file: path, source })
}

/// Validate slugs and enforce unique ids and slugs within one collection.
fn check_records<'a>(
    kind: &'static str,
    records: impl Iterator<Item = (&'a str, &'a str)>,
) -> Result<(), LoadError> {
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();
    for (id, slug) in records {
        if !naming::is_valid_slug(slug) {
            return Err(LoadError::InvalidSlug {
                kind,
                slug: slug.to_string(),
            });
        }
        if !ids.insert(id) {
            return Err(LoadError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
        if !slugs.insert(slug) {
            return Err(LoadError::DuplicateSlug {
                kind,
                slug: slug.to_string(),
            });
        }
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn resolve_article(
    raw: RawArticle,
    authors: &HashMap<&str, &Author>,
    categories: &HashMap<&str, &Category>,
) -> Article {
    let author = raw.author.as_deref().and_then(|slug| match authors.get(slug) {
        Some(a) => Some(AuthorRef {
            name: a.name.clone(),
            slug: a.slug.clone(),
        }),
        None => {
            warn!(article = %raw.slug, author = slug, "unknown author, reference dropped");
            None
        }
    });

    let category = raw
        .category
        .as_deref()
        .and_then(|slug| match categories.get(slug) {
            Some(c) => Some(CategoryRef {
                name: c.name.clone(),
                slug: c.slug.clone(),
            }),
            None => {
                warn!(article = %raw.slug, category = slug, "unknown category, reference dropped");
                None
            }
        });

    let title = if raw.title.trim().is_empty() {
        naming::display_title(&raw.slug)
    } else {
        raw.title
    };

    Article {
        id: raw.id,
        title,
        slug: raw.slug,
        headline: non_blank(raw.headline),
        subheading: non_blank(raw.subheading),
        excerpt: non_blank(raw.excerpt),
        read_time: non_blank(raw.read_time),
        body: raw.body,
        published_at: raw.published_at,
        featured: raw.featured,
        image: raw.image.filter(|i| !i.url.trim().is_empty()),
        author,
        category,
        tags: resolve_tags(&raw.tags),
    }
}

/// Turn tag display names into `TagRef`s, skipping unsluggable names and
/// duplicates (by slug) while keeping the original order.
pub fn resolve_tags(names: &[String]) -> Vec<TagRef> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter_map(|name| {
            let slug = naming::slug_for(name)?;
            seen.insert(slug.clone()).then(|| TagRef {
                name: name.trim().to_string(),
                slug,
            })
        })
        .collect()
}

/// Newest first; undated articles last; ties broken by title.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| {
        b.published_at
            .cmp(&a.published_at)
            .then_with(|| a.title.cmp(&b.title))
    });
}

/// Explicit `display_order` first (ascending), then the rest by name.
pub fn sort_categories(categories: &mut [Category]) {
    categories.sort_by(|a, b| {
        let rank = |c: &Category| (c.display_order.is_none(), c.display_order);
        rank(a).cmp(&rank(b)).then_with(|| a.name.cmp(&b.name))
    });
}

/// Pick the slide navigator's articles from an already sorted list.
///
/// Featured articles win; without any, the newest articles are used.
pub fn select_slides(articles: &[Article], max: usize) -> Vec<String> {
    let featured: Vec<String> = articles
        .iter()
        .filter(|a| a.featured)
        .take(max)
        .map(|a| a.slug.clone())
        .collect();
    if !featured.is_empty() {
        return featured;
    }
    articles.iter().take(max).map(|a| a.slug.clone()).collect()
}

/// Categories with at least one article (in category order), then navigable
/// pages. `categories` must already be sorted with [`sort_categories`].
pub fn build_navigation(
    categories: &[Category],
    articles: &[Article],
    pages: &[Page],
) -> Vec<NavItem> {
    let used: HashSet<&str> = articles
        .iter()
        .filter_map(|a| a.category.as_ref().map(|c| c.slug.as_str()))
        .collect();

    let mut nav: Vec<NavItem> = categories
        .iter()
        .filter(|c| used.contains(c.slug.as_str()))
        .map(|c| NavItem {
            title: c.name.clone(),
            href: format!("/categories/{}/", c.slug),
            external: false,
        })
        .collect();

    let mut nav_pages: Vec<&Page> = pages.iter().filter(|p| p.nav_order.is_some()).collect();
    nav_pages.sort_by_key(|p| p.nav_order);
    nav.extend(nav_pages.into_iter().map(|p| NavItem {
        title: p.title.clone(),
        href: p.href(),
        external: p.is_link(),
    }));

    nav
}
