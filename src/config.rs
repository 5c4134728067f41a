//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! the base layer; the `config.toml` in the content root is merged on top, so
//! a site only has to spell out the values it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! assets_dir = "assets"       # Copied verbatim to the output root
//!
//! [site]
//! title = "Masthead"
//! tagline = ""
//! language = "en"
//! footer_about = "..."        # Optional, like the contact details below
//! contact_email = "..."
//! phone = "..."
//! address = "..."
//!
//! [site.social]               # Optional full profile URLs
//! twitter = "..."
//! instagram = "..."
//! linkedin = "..."
//!
//! [navigator]
//! wheel_threshold = 50.0      # Accumulated wheel delta that fires one step
//! wheel_debounce_ms = 150     # Gap that resets the wheel accumulator
//! touch_threshold_px = 50.0   # Minimum vertical swipe distance
//! settle_ms = 800             # Transition lock duration
//! max_slides = 8              # Slides on the home page
//! inactive_opacity = 0.35     # Opacity of slides that are not active
//! inactive_scale = 0.92       # Scale of slides that are not active
//!
//! [listing]
//! latest_count = 12           # Articles in the "Latest" list on the home page
//!
//! [newsletter]
//! enabled = false
//! heading = "Stay Updated"
//! description = "Get our latest articles and insights delivered to your inbox."
//! action = "..."              # Optional form action URL
//!
//! [theme]
//! grid_gap = "1.5rem"
//!
//! [theme.measure]
//! size = "90vw"
//! min = "20rem"
//! max = "42rem"
//!
//! [theme.gutter]
//! size = "4vw"
//! min = "1rem"
//! max = "3rem"
//!
//! [colors.light]
//! background = "#fbfaf7"
//! text = "#1a1a1a"
//! text_muted = "#6b6b6b"
//! border = "#e2dfd8"
//! link = "#1a1a1a"
//! link_hover = "#b3261e"
//! accent = "#b3261e"
//!
//! [colors.dark]
//! background = "#111111"
//! text = "#ececec"
//! text_muted = "#9a9a9a"
//! border = "#2e2e2e"
//! link = "#ececec"
//! link_hover = "#ff6b5e"
//! accent = "#ff6b5e"
//!
//! [render]
//! max_processes = 4           # Max parallel render workers (omit for auto)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory (relative to the content root) copied to the output root.
    pub assets_dir: String,
    /// Site identity shown in the header and `<title>`.
    pub site: SiteMeta,
    /// Slide navigator tuning.
    pub navigator: NavigatorConfig,
    /// Article listing settings.
    pub listing: ListingConfig,
    /// Newsletter sign-up block on the home page.
    pub newsletter: NewsletterConfig,
    /// Layout settings.
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Parallel rendering settings.
    pub render: RenderConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            site: SiteMeta::default(),
            navigator: NavigatorConfig::default(),
            listing: ListingConfig::default(),
            newsletter: NewsletterConfig::default(),
            theme: ThemeConfig::default(),
            colors: ColorConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        let nav = &self.navigator;
        if self
            .newsletter
            .action
            .as_deref()
            .is_some_and(|a| a.trim().is_empty())
        {
            return Err(ConfigError::Validation(
                "newsletter.action must not be empty when set".into(),
            ));
        }
        if !is_positive(nav.wheel_threshold) {
            return Err(ConfigError::Validation(
                "navigator.wheel_threshold must be positive".into(),
            ));
        }
        if !is_positive(nav.touch_threshold_px) {
            return Err(ConfigError::Validation(
                "navigator.touch_threshold_px must be positive".into(),
            ));
        }
        if nav.settle_ms == 0 {
            return Err(ConfigError::Validation(
                "navigator.settle_ms must be non-zero".into(),
            ));
        }
        if nav.max_slides == 0 {
            return Err(ConfigError::Validation(
                "navigator.max_slides must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&nav.inactive_opacity) {
            return Err(ConfigError::Validation(
                "navigator.inactive_opacity must be 0.0-1.0".into(),
            ));
        }
        if !is_positive(nav.inactive_scale) || nav.inactive_scale > 1.0 {
            return Err(ConfigError::Validation(
                "navigator.inactive_scale must be in (0.0, 1.0]".into(),
            ));
        }
        Ok(())
    }
}

/// NaN-safe `value > 0`.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Site identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// Publication name.
    pub title: String,
    /// Short line under the publication name. Empty = not rendered.
    pub tagline: String,
    /// Value of the `<html lang>` attribute.
    pub language: String,
    /// Paragraph about the publication in the site footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Postal address, shown as plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Publication accounts linked from the footer.
    pub social: SocialLinks,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Masthead".to_string(),
            tagline: String::new(),
            language: "en".to_string(),
            footer_about: None,
            contact_email: None,
            phone: None,
            address: None,
            social: SocialLinks::default(),
        }
    }
}

impl SiteMeta {
    /// Whether the footer has any contact detail to show.
    pub fn has_contact(&self) -> bool {
        self.contact_email.is_some() || self.phone.is_some() || self.address.is_some()
    }
}

/// Full profile URLs. Each one is optional and rendered only when set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl SocialLinks {
    /// `(label, url)` for every configured account, in display order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Twitter", &self.twitter),
            ("Instagram", &self.instagram),
            ("LinkedIn", &self.linkedin),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.as_deref().map(|u| (label, u)))
        .collect()
    }
}

/// Newsletter sign-up block, rendered below the latest articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewsletterConfig {
    pub enabled: bool,
    pub heading: String,
    pub description: String,
    /// Form `action` URL of the mailing list provider. Without one the block
    /// is informational and renders no form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            heading: "Stay Updated".to_string(),
            description: "Get our latest articles and insights delivered to your inbox."
                .to_string(),
            action: None,
        }
    }
}

/// Slide navigator tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigatorConfig {
    /// Accumulated wheel delta (pixels) that fires one advance/retreat.
    pub wheel_threshold: f64,
    /// A gap between wheel events longer than this resets the accumulator.
    pub wheel_debounce_ms: u64,
    /// Minimum vertical swipe distance in pixels.
    pub touch_threshold_px: f64,
    /// How long the transition lock is held after a navigation.
    pub settle_ms: u64,
    /// Maximum number of slides on the home page.
    pub max_slides: usize,
    /// Opacity applied to slides that are not active.
    pub inactive_opacity: f64,
    /// Scale applied to slides that are not active.
    pub inactive_scale: f64,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            wheel_threshold: 50.0,
            wheel_debounce_ms: 150,
            touch_threshold_px: 50.0,
            settle_ms: 800,
            max_slides: 8,
            inactive_opacity: 0.35,
            inactive_scale: 0.92,
        }
    }
}

/// Article listing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListingConfig {
    /// Number of articles in the home page "Latest" list.
    pub latest_count: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self { latest_count: 12 }
    }
}

/// Parallel rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Maximum number of parallel render workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &RenderConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

/// A responsive CSS size expressed as `clamp(min, size, max)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClampSize {
    /// Preferred/fluid value, typically viewport-relative (e.g. `"4vw"`).
    pub size: String,
    /// Minimum bound (e.g. `"1rem"`).
    pub min: String,
    /// Maximum bound (e.g. `"3rem"`).
    pub max: String,
}

impl ClampSize {
    /// Render as a CSS `clamp()` expression.
    pub fn to_css(&self) -> String {
        format!("clamp({}, {}, {})", self.min, self.size, self.max)
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Width of article body text.
    pub measure: ClampSize,
    /// Horizontal page padding.
    pub gutter: ClampSize,
    /// Gap between article cards (CSS value).
    pub grid_gap: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            measure: ClampSize {
                size: "90vw".to_string(),
                min: "20rem".to_string(),
                max: "42rem".to_string(),
            },
            gutter: ClampSize {
                size: "4vw".to_string(),
                min: "1rem".to_string(),
                max: "3rem".to_string(),
            },
            grid_gap: "1.5rem".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Bylines, dates, captions.
    pub text_muted: String,
    pub border: String,
    pub link: String,
    pub link_hover: String,
    /// Progress bar, active indicator dot, category labels.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#fbfaf7".to_string(),
            text: "#1a1a1a".to_string(),
            text_muted: "#6b6b6b".to_string(),
            border: "#e2dfd8".to_string(),
            link: "#1a1a1a".to_string(),
            link_hover: "#b3261e".to_string(),
            accent: "#b3261e".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#111111".to_string(),
            text: "#ececec".to_string(),
            text_muted: "#9a9a9a".to_string(),
            border: "#2e2e2e".to_string(),
            link: "#ececec".to_string(),
            link_hover: "#ff6b5e".to_string(),
            accent: "#ff6b5e".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Masthead Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# Directory inside the content root copied verbatim to the output root.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
title = "Masthead"
# Short line under the publication name (empty = hidden).
tagline = ""
language = "en"
# Footer details. Each one is shown only when set.
# footer_about = "Independent local reporting since 1998."
# contact_email = "newsroom@example.com"
# phone = "+1 555 0100"
# address = "12 Quay Street, Riverside"

# Publication accounts linked from the footer (full URLs).
[site.social]
# twitter = "https://twitter.com/example"
# instagram = "https://instagram.com/example"
# linkedin = "https://www.linkedin.com/company/example"

# ---------------------------------------------------------------------------
# Home page slide navigator
# ---------------------------------------------------------------------------
[navigator]
# Accumulated wheel delta (pixels) that moves one slide.
wheel_threshold = 50.0
# Pause between wheel events (ms) after which the accumulated delta resets.
wheel_debounce_ms = 150
# Minimum vertical swipe distance (pixels) on touch screens.
touch_threshold_px = 50.0
# How long (ms) further input is ignored after a slide change. Should match
# the browser's smooth-scroll duration.
settle_ms = 800
# Maximum number of slides. Featured articles are used first, otherwise the
# newest articles.
max_slides = 8
# Appearance of slides that are not the active one.
inactive_opacity = 0.35
inactive_scale = 0.92

# ---------------------------------------------------------------------------
# Listings
# ---------------------------------------------------------------------------
[listing]
# Articles shown in the "Latest" list below the slides.
latest_count = 12

# ---------------------------------------------------------------------------
# Newsletter sign-up block on the home page
# ---------------------------------------------------------------------------
[newsletter]
enabled = false
heading = "Stay Updated"
description = "Get our latest articles and insights delivered to your inbox."
# Form action URL of your mailing list provider. Without it no form is shown.
# action = "https://lists.example.com/subscribe"

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
# Gap between article cards (CSS value).
grid_gap = "1.5rem"

# Width of article body text, as CSS clamp(min, size, max).
[theme.measure]
size = "90vw"
min = "20rem"
max = "42rem"

# Horizontal page padding, as CSS clamp(min, size, max).
[theme.gutter]
size = "4vw"
min = "1rem"
max = "3rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#fbfaf7"
text = "#1a1a1a"
text_muted = "#6b6b6b"    # Bylines, dates, captions
border = "#e2dfd8"
link = "#1a1a1a"
link_hover = "#b3261e"
accent = "#b3261e"        # Progress bar, active dot, category labels

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#111111"
text = "#ececec"
text_muted = "#9a9a9a"
border = "#2e2e2e"
link = "#ececec"
link_hover = "#ff6b5e"
accent = "#ff6b5e"

# ---------------------------------------------------------------------------
# Rendering
# ---------------------------------------------------------------------------
[render]
# Maximum parallel render workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-link: {light_link};
    --color-link-hover: {light_link_hover};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-link: {dark_link};
        --color-link-hover: {dark_link_hover};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_link = colors.light.link,
        light_link_hover = colors.light.link_hover,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_link = colors.dark.link,
        dark_link_hover = colors.dark.link_hover,
        dark_accent = colors.dark.accent,
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --measure: {measure};
    --gutter: {gutter};
    --grid-gap: {grid_gap};
}}"#,
        measure = theme.measure.to_css(),
        gutter = theme.gutter.to_css(),
        grid_gap = theme.grid_gap,
    )
}
