//! # Masthead
//!
//! A static site generator for editorial websites whose content lives in a
//! headless content API. Records are exported as JSON snapshots; Masthead
//! validates them, resolves cross references and renders a plain HTML site
//! whose home page presents featured stories as a scroll-driven slide deck.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Load      content/  →  manifest.json    (API snapshot → validated, resolved records)
//! 2. Generate  manifest  →  dist/            (final HTML site)
//! ```
//!
//! The manifest between the stages is human-readable JSON you can inspect,
//! and each stage is testable without the other.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`load`] | Stage 1: reads the JSON snapshot, validates slugs and ids, resolves references, picks slides |
//! | [`generate`] | Stage 2: renders the HTML site from the manifest using Maud |
//! | [`navigator`] | The slide navigator state machine, input mapping and rendering contract |
//! | [`cache`] | Content-hashed output cache so unchanged files are not rewritten |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | Content records serialized between stages (`Article`, `Author`, `Page`, ...) |
//! | [`naming`] | Slug validation and derivation |
//! | [`output`] | CLI output formatting for both stages |
//!
//! # Design Decisions
//!
//! ## One Navigator Model, Two Runtimes
//!
//! The slide navigator is specified once, as the pure state machine in
//! [`navigator`]. The generate stage renders its initial view into the HTML,
//! and the small `static/slides.js` runtime follows the same transitions in
//! the browser. The Rust model takes time as an argument instead of reading
//! a clock, so every timing rule (wheel debounce, settle delay) is unit
//! tested without sleeping.
//!
//! ## Absent-Safe Records
//!
//! Every optional field of a content record is independently optional. A
//! missing image, author, category or tag list is omitted from rendering;
//! a dangling author or category reference is dropped with a warning rather
//! than failing the build.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Malformed templates are build errors, template variables are
//! Rust expressions, and all interpolation is auto-escaped, which matters for
//! text coming from an external API.

pub mod cache;
pub mod config;
pub mod generate;
pub mod load;
pub mod naming;
pub mod navigator;
pub mod output;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
