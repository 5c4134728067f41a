//! Content records shared by the load and generate stages.
//!
//! These types are serialized into the manifest between stages and must stay
//! identical on both sides. Every optional sub-field is independently
//! absent-safe: renderers omit what is missing instead of failing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An image reference as delivered by the content API. URLs are used verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ImageRef {
    /// Alt text, falling back to the given caption when the API sent none.
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt.as_deref().unwrap_or(fallback)
    }
}

/// Resolved author summary embedded into articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub name: String,
    pub slug: String,
}

/// Resolved category summary embedded into articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
    pub slug: String,
}

/// Tag with a URL-safe slug derived from its display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRef {
    pub name: String,
    pub slug: String,
}

/// A published article with its references resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Display headline; the title is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Free-form reading time label, e.g. "6 min read".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
    /// Markdown body.
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagRef>,
}

impl Article {
    /// Site-absolute URL of the article detail page.
    pub fn href(&self) -> String {
        format!("/articles/{}/", self.slug)
    }

    pub fn display_headline(&self) -> &str {
        self.headline.as_deref().unwrap_or(&self.title)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ImageRef>,
    /// Twitter handle, with or without the leading `@`, or a profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Author {
    /// `(label, url)` for each profile link the author has.
    pub fn links(&self) -> Vec<(&'static str, String)> {
        let twitter = self.twitter.as_deref().map(|handle| {
            if handle.starts_with("http://") || handle.starts_with("https://") {
                handle.to_string()
            } else {
                format!("https://twitter.com/{}", handle.trim_start_matches('@'))
            }
        });
        [
            ("Twitter", twitter),
            ("LinkedIn", self.linkedin.clone()),
            ("Website", self.website.clone()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Position in category listings, ascending. Unordered categories follow
    /// by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<u32>,
}

/// A static page (about, contact, imprint, ...).
///
/// - `nav_order` present → shown in navigation, ascending
/// - `link` present → external navigation link, no page is rendered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub slug: String,
    /// Markdown body (ignored for link pages).
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Page {
    pub fn is_link(&self) -> bool {
        self.link.is_some()
    }

    /// Navigation target: the external link, or the rendered page.
    pub fn href(&self) -> String {
        match &self.link {
            Some(url) => url.clone(),
            None => format!("/{}/", self.slug),
        }
    }
}

/// Site navigation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub external: bool,
}
