//! Output cache for incremental builds.
//!
//! Most of a rebuild produces byte-identical pages: one edited article
//! changes its own page, the home deck and a handful of listings. This module
//! lets the generate stage skip rewriting files whose content has not changed,
//! which keeps modification times stable for rsync-style deploys and CDN
//! uploads that diff on mtime.
//!
//! ## Cache keys
//!
//! Entries map an output path, relative to the output directory, to the
//! SHA-256 of the content last written there. A write is skipped when:
//! 1. An entry for the path exists with the same content hash
//! 2. The file is still on disk
//!
//! ## Storage
//!
//! The cache manifest is a JSON file at `<output_dir>/.masthead-cache.json`,
//! so it travels with the output directory when cached in CI.
//!
//! ## Bypassing the cache
//!
//! Pass `--no-cache` to `generate` or `build` to start from an empty manifest.
//! Every file is then written again.

use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the cache manifest file within the output directory.
const MANIFEST_FILENAME: &str = ".masthead-cache.json";

/// Version of the cache manifest format. Bump this to invalidate all
/// existing caches when the format or key computation changes.
const MANIFEST_VERSION: u32 = 1;

/// On-disk cache manifest mapping output paths to content hashes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CacheManifest {
    pub version: u32,
    pub entries: BTreeMap<String, String>,
}

impl CacheManifest {
    /// Create an empty manifest (used for `--no-cache` or first build).
    pub fn empty() -> Self {
        Self {
            version: MANIFEST_VERSION,
            entries: BTreeMap::new(),
        }
    }

    /// Load from the output directory. Returns an empty manifest if the
    /// file doesn't exist or can't be parsed (version mismatch, corruption).
    pub fn load(output_dir: &Path) -> Self {
        let content = match std::fs::read_to_string(manifest_path(output_dir)) {
            Ok(c) => c,
            Err(_) => return Self::empty(),
        };
        match serde_json::from_str::<Self>(&content) {
            Ok(m) if m.version == MANIFEST_VERSION => m,
            _ => Self::empty(),
        }
    }

    pub fn save(&self, output_dir: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(manifest_path(output_dir), json)
    }

    /// Whether `rel_path` already holds content with hash `hash`.
    pub fn is_fresh(&self, rel_path: &str, hash: &str, output_dir: &Path) -> bool {
        self.entries.get(rel_path).is_some_and(|h| h == hash)
            && output_dir.join(rel_path).exists()
    }

    pub fn insert(&mut self, rel_path: String, hash: String) {
        self.entries.insert(rel_path, hash);
    }

    /// Drop entries for paths that were not produced by this run.
    pub fn retain_paths<'a>(&mut self, produced: impl IntoIterator<Item = &'a str>) {
        let produced: std::collections::HashSet<&str> = produced.into_iter().collect();
        self.entries.retain(|path, _| produced.contains(path.as_str()));
    }
}

/// SHA-256 of a byte slice, as a hex string.
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// SHA-256 hash of a file's contents, returned as a hex string.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(hash_bytes(&bytes))
}

/// Write `contents` to `output_dir/rel_path` unless the cache says the file
/// already holds exactly these bytes.
pub fn write_cached(
    cache: &mut CacheManifest,
    stats: &mut CacheStats,
    output_dir: &Path,
    rel_path: &str,
    contents: &[u8],
) -> io::Result<()> {
    let hash = hash_bytes(contents);
    if cache.is_fresh(rel_path, &hash, output_dir) {
        stats.unchanged();
        return Ok(());
    }

    let path = output_dir.join(rel_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, contents)?;
    debug!(path = rel_path, "wrote");
    cache.insert(rel_path.to_string(), hash);
    stats.written();
    Ok(())
}

/// Summary of cache effectiveness for a generate run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub written: u32,
    pub unchanged: u32,
}

impl CacheStats {
    pub fn written(&mut self) {
        self.written += 1;
    }

    pub fn unchanged(&mut self) {
        self.unchanged += 1;
    }

    pub fn total(&self) -> u32 {
        self.written + self.unchanged
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unchanged > 0 {
            write!(
                f,
                "{} unchanged, {} written ({} total)",
                self.unchanged,
                self.written,
                self.total()
            )
        } else {
            write!(f, "{} written", self.written)
        }
    }
}

/// Resolve the cache manifest path for an output directory.
pub fn manifest_path(output_dir: &Path) -> PathBuf {
    output_dir.join(MANIFEST_FILENAME)
}
