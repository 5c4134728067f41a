//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the manifest produced by the load
//! stage and generates the final static HTML site.
//!
//! ## Generated Pages
//!
//! - **Home page** (`/index.html`): the slide navigator over the manifest's
//!   slides, followed by the latest articles
//! - **Article pages** (`/articles/{slug}/index.html`): headline, byline,
//!   image and markdown body
//! - **Author pages** (`/authors/{slug}/index.html`): bio and article list
//! - **Category pages** (`/categories/{slug}/index.html`)
//! - **Category index** (`/categories/index.html`): every category with its
//!   article count
//! - **Tag pages** (`/tags/{slug}/index.html`)
//! - **Static pages** (`/{slug}/index.html`): pages without an external link
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── style.css                  # Base styles with config-driven custom properties
//! ├── slides.js                  # Client runtime of the slide navigator
//! ├── .masthead-cache.json       # Output cache (see crate::cache)
//! ├── articles/the-river-returns/index.html
//! ├── authors/mara-ellis/index.html
//! ├── categories/index.html
//! ├── categories/environment/index.html
//! ├── tags/rivers/index.html
//! ├── about/index.html
//! └── robots.txt                 # Copied from content/assets/
//! ```
//!
//! ## The Slide Deck
//!
//! The home page renders the navigator's initial view (see
//! [`Navigator::view`]) directly into the markup, so the deck is laid out
//! correctly before `slides.js` runs. The deck element carries the navigator
//! settings as `data-*` attributes; the script reads them instead of
//! hard-coding its own thresholds.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping. Pages are
//! rendered in parallel with rayon; every renderer is a pure function from
//! manifest data to markup.

use crate::cache::{self, CacheManifest, CacheStats};
use crate::config::{self, NavigatorConfig, NewsletterConfig, SiteConfig};
use crate::load::Manifest;
use crate::navigator::view::DeckView;
use crate::navigator::{Geometry, Navigator, Settings};
use crate::types::{Article, Author, Category, ImageRef, NavItem, Page, TagRef};
use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};
use rayon::prelude::*;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset copy error: {0}")]
    Assets(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/slides.js");

/// What kind of page a rendered file is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Article,
    Author,
    Category,
    /// `categories/index.html`, the overview of every category.
    CategoryIndex,
    Tag,
    Page,
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PageKind::Home => "Home",
            PageKind::Article => "Article",
            PageKind::Author => "Author",
            PageKind::Category => "Category",
            PageKind::CategoryIndex => "Categories",
            PageKind::Tag => "Tag",
            PageKind::Page => "Page",
        };
        f.write_str(label)
    }
}

/// One rendered HTML file, path relative to the output directory.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub kind: PageKind,
    pub title: String,
    pub path: String,
    pub html: String,
}

/// Result of a generate run, for CLI reporting.
#[derive(Debug)]
pub struct GenerateReport {
    pub pages: Vec<RenderedPage>,
    pub assets: usize,
    pub slides: usize,
    pub cache: CacheStats,
}

pub fn generate(
    manifest_path: &Path,
    source_root: &Path,
    output_dir: &Path,
    use_cache: bool,
) -> Result<GenerateReport, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    generate_site(&manifest, source_root, output_dir, use_cache)
}

/// Render and write the whole site for an in-memory manifest.
pub fn generate_site(
    manifest: &Manifest,
    source_root: &Path,
    output_dir: &Path,
    use_cache: bool,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;
    let mut cache = if use_cache {
        CacheManifest::load(output_dir)
    } else {
        CacheManifest::empty()
    };
    let mut stats = CacheStats::default();
    let mut produced: Vec<String> = Vec::new();

    // Assets first: generated files win on path collisions
    let assets_dir = source_root.join(&manifest.config.assets_dir);
    let assets = copy_assets(&assets_dir, output_dir, &mut cache, &mut stats, &mut produced)?;

    let css = stylesheet(&manifest.config);
    for (path, contents) in [("style.css", css.as_str()), ("slides.js", JS)] {
        cache::write_cached(&mut cache, &mut stats, output_dir, path, contents.as_bytes())?;
        produced.push(path.to_string());
    }

    let pages = render_pages(manifest);
    for page in &pages {
        cache::write_cached(
            &mut cache,
            &mut stats,
            output_dir,
            &page.path,
            page.html.as_bytes(),
        )?;
        produced.push(page.path.clone());
    }

    cache.retain_paths(produced.iter().map(String::as_str));
    cache.save(output_dir)?;
    info!(pages = pages.len(), assets, %stats, "site generated");

    Ok(GenerateReport {
        pages,
        assets,
        slides: manifest.slides.len(),
        cache: stats,
    })
}

/// Config-driven custom properties followed by the base stylesheet.
pub fn stylesheet(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme),
        CSS_STATIC
    )
}

/// Copy the content assets directory verbatim. A missing directory is fine.
fn copy_assets(
    assets_dir: &Path,
    output_dir: &Path,
    cache: &mut CacheManifest,
    stats: &mut CacheStats,
    produced: &mut Vec<String>,
) -> Result<usize, GenerateError> {
    if !assets_dir.is_dir() {
        return Ok(0);
    }
    let mut count = 0;
    for entry in WalkDir::new(assets_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(assets_dir) else {
            continue;
        };
        let rel_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let bytes = fs::read(entry.path())?;
        cache::write_cached(cache, stats, output_dir, &rel_path, &bytes)?;
        debug!(asset = %rel_path, "asset copied");
        produced.push(rel_path);
        count += 1;
    }
    Ok(count)
}

// ============================================================================
// Page jobs
// ============================================================================

enum Job<'a> {
    Home,
    Article(&'a Article),
    Author(&'a Author),
    Category(&'a Category),
    CategoryIndex,
    Tag(&'a TagRef),
    Page(&'a Page),
}

/// Render every page of the site. Order: home, articles, authors,
/// categories, the category index, tags, static pages.
pub fn render_pages(manifest: &Manifest) -> Vec<RenderedPage> {
    let mut jobs = vec![Job::Home];
    jobs.extend(manifest.articles.iter().map(Job::Article));
    jobs.extend(manifest.authors.iter().map(Job::Author));
    jobs.extend(manifest.categories.iter().map(Job::Category));
    jobs.push(Job::CategoryIndex);
    jobs.extend(manifest.tags().into_iter().map(Job::Tag));
    jobs.extend(
        manifest
            .pages
            .iter()
            .filter(|p| !p.is_link())
            .map(Job::Page),
    );

    jobs.par_iter().map(|job| render_job(manifest, job)).collect()
}

fn render_job(manifest: &Manifest, job: &Job) -> RenderedPage {
    let (kind, title, path, markup) = match job {
        Job::Home => (
            PageKind::Home,
            manifest.config.site.title.clone(),
            "index.html".to_string(),
            render_home(manifest),
        ),
        Job::Article(article) => (
            PageKind::Article,
            article.title.clone(),
            format!("articles/{}/index.html", article.slug),
            render_article_page(article, manifest),
        ),
        Job::Author(author) => (
            PageKind::Author,
            author.name.clone(),
            format!("authors/{}/index.html", author.slug),
            render_author_page(author, manifest),
        ),
        Job::Category(category) => (
            PageKind::Category,
            category.name.clone(),
            format!("categories/{}/index.html", category.slug),
            render_category_page(category, manifest),
        ),
        Job::CategoryIndex => (
            PageKind::CategoryIndex,
            "Categories".to_string(),
            "categories/index.html".to_string(),
            render_category_index(manifest),
        ),
        Job::Tag(tag) => (
            PageKind::Tag,
            tag.name.clone(),
            format!("tags/{}/index.html", tag.slug),
            render_tag_page(tag, manifest),
        ),
        Job::Page(page) => (
            PageKind::Page,
            page.title.clone(),
            format!("{}/index.html", page.slug),
            render_static_page(page, manifest),
        ),
    };
    RenderedPage {
        kind,
        title,
        path,
        html: markup.into_string(),
    }
}

// ============================================================================
// Links and formatting
// ============================================================================

pub fn author_href(slug: &str) -> String {
    format!("/authors/{}/", slug)
}

pub fn category_href(slug: &str) -> String {
    format!("/categories/{}/", slug)
}

pub fn tag_href(slug: &str) -> String {
    format!("/tags/{}/", slug)
}

/// Long-form publication date, e.g. "March 14, 2026" (UTC).
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(source, options);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    title: &str,
    config: &SiteConfig,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    let full_title = if title == config.site.title {
        title.to_string()
    } else {
        format!("{} · {}", title, config.site.title)
    };
    html! {
        (DOCTYPE)
        html lang=(config.site.language) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (full_title) }
                @if !config.site.tagline.is_empty() {
                    meta name="description" content=(config.site.tagline);
                }
                link rel="stylesheet" href="/style.css";
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Renders the site header with masthead and navigation
fn site_header(config: &SiteConfig, nav: Markup) -> Markup {
    html! {
        header.site-header {
            div.masthead {
                a.site-title href="/" { (config.site.title) }
                @if !config.site.tagline.is_empty() {
                    span.site-tagline { (config.site.tagline) }
                }
            }
            nav.site-nav {
                (nav)
            }
        }
    }
}

/// Site footer. The about text, contact block and social links each render
/// only when configured.
fn site_footer(config: &SiteConfig) -> Markup {
    let site = &config.site;
    let social = site.social.entries();
    html! {
        footer.site-footer {
            div.footer-about {
                p.footer-title { (site.title) }
                @if let Some(about) = &site.footer_about {
                    p { (about) }
                }
            }
            @if site.has_contact() {
                address.footer-contact {
                    @if let Some(email) = &site.contact_email {
                        a href={ "mailto:" (email) } { (email) }
                    }
                    @if let Some(phone) = &site.phone {
                        a href={ "tel:" (phone.replace(' ', "")) } { (phone) }
                    }
                    @if let Some(street) = &site.address {
                        span { (street) }
                    }
                }
            }
            @if !social.is_empty() {
                ul.footer-social {
                    @for (name, url) in &social {
                        li { a href=(url) target="_blank" rel="noopener" { (name) } }
                    }
                }
            }
        }
    }
}

/// Renders the navigation menu (hamburger style, slides from right)
pub fn render_nav(items: &[NavItem], current_href: &str) -> Markup {
    html! {
        input.nav-toggle type="checkbox" id="nav-toggle";
        label.nav-hamburger for="nav-toggle" {
            span.hamburger-line {}
            span.hamburger-line {}
            span.hamburger-line {}
        }
        div.nav-panel {
            label.nav-close for="nav-toggle" { "×" }
            ul {
                @for item in items {
                    @let is_current = !item.external && !current_href.is_empty()
                        && current_href.starts_with(&item.href);
                    li class=[is_current.then_some("current")] {
                        @if item.external {
                            a href=(item.href) target="_blank" rel="noopener" { (item.title) }
                        } @else {
                            a href=(item.href) { (item.title) }
                        }
                    }
                }
            }
        }
    }
}

/// Every page except the home page: header, main content, footer.
fn page_shell(
    title: &str,
    current_href: &str,
    manifest: &Manifest,
    main_class: &str,
    content: Markup,
) -> Markup {
    let config = &manifest.config;
    let body = html! {
        (site_header(config, render_nav(&manifest.navigation, current_href)))
        main class=(main_class) {
            (content)
        }
        (site_footer(config))
    };
    base_document(title, config, None, body)
}

fn image(image: &ImageRef, fallback_alt: &str, lazy: bool) -> Markup {
    html! {
        img src=(image.url)
            alt=(image.alt_or(fallback_alt))
            width=[image.width]
            height=[image.height]
            loading=(if lazy { "lazy" } else { "eager" });
    }
}

/// Byline, date and read time; renders nothing when all are missing.
fn meta_line(article: &Article) -> Markup {
    let mut parts: Vec<Markup> = Vec::new();
    if let Some(author) = &article.author {
        parts.push(html! {
            span.byline {
                "By "
                a href=(author_href(&author.slug)) { (author.name) }
            }
        });
    }
    if let Some(date) = &article.published_at {
        parts.push(html! { time datetime=(date.to_rfc3339()) { (format_date(date)) } });
    }
    if let Some(read_time) = &article.read_time {
        parts.push(html! { span.read-time { (read_time) } });
    }
    html! {
        @if !parts.is_empty() {
            p.meta {
                @for (i, part) in parts.into_iter().enumerate() {
                    @if i > 0 { " · " }
                    (part)
                }
            }
        }
    }
}

fn tag_list(tags: &[TagRef]) -> Markup {
    html! {
        @if !tags.is_empty() {
            ul.tag-list {
                @for tag in tags {
                    li { a href=(tag_href(&tag.slug)) { (tag.name) } }
                }
            }
        }
    }
}

fn article_card(article: &Article) -> Markup {
    html! {
        article.card {
            @if let Some(img) = &article.image {
                a.card-image href=(article.href()) {
                    (image(img, &article.title, true))
                }
            }
            div.card-body {
                @if let Some(category) = &article.category {
                    a.card-category href=(category_href(&category.slug)) { (category.name) }
                }
                h3.card-title {
                    a href=(article.href()) { (article.title) }
                }
                @if let Some(excerpt) = &article.excerpt {
                    p.card-excerpt { (excerpt) }
                }
                (meta_line(article))
            }
        }
    }
}

fn article_list<'a>(articles: impl IntoIterator<Item = &'a Article>, empty: &str) -> Markup {
    let articles: Vec<&Article> = articles.into_iter().collect();
    html! {
        @if articles.is_empty() {
            p.empty-state { (empty) }
        } @else {
            div.card-grid {
                @for article in articles {
                    (article_card(article))
                }
            }
        }
    }
}

// ============================================================================
// Slide deck
// ============================================================================

/// Initial view of the deck, as the navigator computes it at mount.
pub fn initial_view(len: usize, config: &NavigatorConfig) -> Option<DeckView> {
    // Layout is unknown until the browser measures it; the view does not use it.
    let geometry = Geometry {
        origin: 0.0,
        viewport_height: 0.0,
    };
    Navigator::new(len, geometry, Settings::from(config)).map(|nav| nav.view())
}

/// The slide navigator, or the empty-state message when there are no slides.
pub fn render_deck(slides: &[&Article], config: &SiteConfig) -> Markup {
    let Some(view) = initial_view(slides.len(), &config.navigator) else {
        return html! {
            p.empty-state { "No stories to show yet." }
        };
    };
    let nav = &config.navigator;
    let count = slides.len();

    html! {
        div.deck id="deck"
            style={ "--slide-count: " (count) ";" }
            data-count=(count)
            data-wheel-threshold=(nav.wheel_threshold)
            data-wheel-debounce-ms=(nav.wheel_debounce_ms)
            data-touch-threshold-px=(nav.touch_threshold_px)
            data-settle-ms=(nav.settle_ms)
            data-inactive-opacity=(nav.inactive_opacity)
            data-inactive-scale=(nav.inactive_scale)
        {
            div.deck-stage {
                @for (article, style) in slides.iter().zip(&view.slides) {
                    section.slide.is-active[style.active]
                        data-index=(style.index)
                        style=(style.to_css())
                        aria-hidden=(if style.active { "false" } else { "true" })
                    {
                        (slide_content(article, style.index == 0))
                    }
                }
                div.deck-footer aria-hidden=(if view.at_footer { "false" } else { "true" }) {
                    p.deck-footer-title { (config.site.title) }
                    a.deck-footer-link href="#latest" { "Latest stories" }
                }
                div.deck-progress {
                    div.deck-progress-fill style={ "width: " (view.progress_css()) ";" } {}
                }
                p.deck-counter aria-live="polite" { (view.counter) }
                nav.deck-dots aria-label="Slides" {
                    @for style in &view.slides {
                        button.dot.is-active[style.active]
                            type="button"
                            data-target=(style.index)
                            aria-label={ "Go to slide " (style.index + 1) } {}
                    }
                    button.dot.dot-footer.is-active[view.at_footer]
                        type="button"
                        data-target="footer"
                        aria-label="Go to footer" {}
                }
            }
        }
    }
}

/// One slide. Each optional field is omitted on its own when absent.
fn slide_content(article: &Article, first: bool) -> Markup {
    html! {
        @if let Some(img) = &article.image {
            figure.slide-image {
                (image(img, &article.title, !first))
            }
        }
        div.slide-text {
            @if let Some(category) = &article.category {
                a.slide-category href=(category_href(&category.slug)) { (category.name) }
            }
            h2.slide-title {
                a href=(article.href()) { (article.display_headline()) }
            }
            @if let Some(subheading) = &article.subheading {
                p.slide-subheading { (subheading) }
            }
            @if let Some(excerpt) = &article.excerpt {
                p.slide-excerpt { (excerpt) }
            }
            @if article.author.is_some() || article.read_time.is_some() {
                p.slide-byline {
                    @if let Some(author) = &article.author {
                        "By "
                        a href=(author_href(&author.slug)) { (author.name) }
                    }
                    @if article.author.is_some() && article.read_time.is_some() {
                        " · "
                    }
                    @if let Some(read_time) = &article.read_time {
                        span.read-time { (read_time) }
                    }
                }
            }
            (tag_list(&article.tags))
            a.slide-link href=(article.href()) { "Read the story" }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the home page: slide deck, then the latest articles
fn render_home(manifest: &Manifest) -> Markup {
    let config = &manifest.config;
    let slides = manifest.slide_articles();
    let latest = manifest.articles.iter().take(config.listing.latest_count);

    let body = html! {
        (site_header(config, render_nav(&manifest.navigation, "")))
        main.home-page {
            (render_deck(&slides, config))
            section.latest id="latest" {
                h2 { "Latest" }
                (article_list(latest, "Nothing published yet."))
            }
            (newsletter(&config.newsletter))
        }
        (site_footer(config))
        @if !slides.is_empty() {
            script src="/slides.js" defer {}
        }
    };

    base_document(&config.site.title, config, Some("home"), body)
}

/// Newsletter signup block. The form needs a configured `action`; without
/// one only the heading and description render.
fn newsletter(config: &NewsletterConfig) -> Markup {
    html! {
        @if config.enabled {
            section.newsletter id="newsletter" {
                h2 { (config.heading) }
                @if !config.description.is_empty() {
                    p.newsletter-description { (config.description) }
                }
                @if let Some(action) = &config.action {
                    form.newsletter-form action=(action) method="post" {
                        label.visually-hidden for="newsletter-email" { "Email address" }
                        input type="email" id="newsletter-email" name="email"
                            placeholder="Your email address" required;
                        button type="submit" { "Subscribe" }
                    }
                }
            }
        }
    }
}

/// Renders an article detail page
fn render_article_page(article: &Article, manifest: &Manifest) -> Markup {
    let current = article
        .category
        .as_ref()
        .map(|c| category_href(&c.slug))
        .unwrap_or_default();

    let content = html! {
        article.story {
            header.story-header {
                @if let Some(category) = &article.category {
                    a.story-category href=(category_href(&category.slug)) { (category.name) }
                }
                h1 { (article.display_headline()) }
                @if let Some(subheading) = &article.subheading {
                    p.story-subheading { (subheading) }
                }
                @if let Some(excerpt) = &article.excerpt {
                    p.story-dek { (excerpt) }
                }
                (meta_line(article))
            }
            @if let Some(img) = &article.image {
                figure.story-image {
                    (image(img, &article.title, false))
                }
            }
            div.story-body {
                (PreEscaped(render_markdown(&article.body)))
            }
            @if !article.tags.is_empty() {
                footer.story-tags {
                    (tag_list(&article.tags))
                }
            }
        }
    };

    page_shell(&article.title, &current, manifest, "article-page", content)
}

/// Renders an author page with bio and article list
fn render_author_page(author: &Author, manifest: &Manifest) -> Markup {
    let content = html! {
        header.listing-header.author-header {
            @if let Some(avatar) = &author.avatar {
                (image(avatar, &author.name, false))
            }
            h1 { (author.name) }
            @if let Some(job_title) = &author.job_title {
                p.author-job { (job_title) }
            }
            @if let Some(bio) = &author.bio {
                p.listing-description { (bio) }
            }
            @let links = author.links();
            @if !links.is_empty() {
                ul.author-links {
                    @for (label, url) in &links {
                        li { a href=(url) target="_blank" rel="noopener" { (label) } }
                    }
                }
            }
        }
        (article_list(manifest.articles_by_author(&author.slug), "No articles yet."))
    };

    page_shell(
        &author.name,
        &author_href(&author.slug),
        manifest,
        "listing-page",
        content,
    )
}

/// Renders a category page
fn render_category_page(category: &Category, manifest: &Manifest) -> Markup {
    let href = category_href(&category.slug);
    let content = html! {
        header.listing-header {
            h1 { (category.name) }
            @if let Some(description) = &category.description {
                p.listing-description { (description) }
            }
        }
        (article_list(manifest.articles_in_category(&category.slug), "No articles yet."))
    };

    page_shell(&category.name, &href, manifest, "listing-page", content)
}

fn render_category_index(manifest: &Manifest) -> Markup {
    let content = html! {
        header.listing-header {
            h1 { "Categories" }
            p.listing-description { "Browse articles by topic." }
        }
        @if manifest.categories.is_empty() {
            p.empty-state { "No categories yet." }
        } @else {
            ul.category-grid {
                @for category in &manifest.categories {
                    @let count = manifest.articles_in_category(&category.slug).count();
                    li.category-tile {
                        a href=(category_href(&category.slug)) {
                            h2 { (category.name) }
                            @if let Some(description) = &category.description {
                                p.listing-description { (description) }
                            }
                            p.category-count {
                                (count) @if count == 1 { " article" } @else { " articles" }
                            }
                        }
                    }
                }
            }
        }
    };

    page_shell("Categories", "/categories/", manifest, "listing-page", content)
}

/// Renders a tag page
fn render_tag_page(tag: &TagRef, manifest: &Manifest) -> Markup {
    let content = html! {
        header.listing-header {
            p.listing-kicker { "Tag" }
            h1 { (tag.name) }
        }
        (article_list(manifest.articles_tagged(&tag.slug), "No articles yet."))
    };

    page_shell(&tag.name, &tag_href(&tag.slug), manifest, "listing-page", content)
}

/// Renders a static page from markdown content
fn render_static_page(page: &Page, manifest: &Manifest) -> Markup {
    let content = html! {
        article.page-content {
            (PreEscaped(render_markdown(&page.body)))
        }
    };

    page_shell(&page.title, &page.href(), manifest, "static-page", content)
}

// ============================================================================
// Tests
// ============================================================================
