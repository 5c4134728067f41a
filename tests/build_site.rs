//! End-to-end runs of the `masthead` binary against the fixture content.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn masthead(args: &[&str], source: &Path, out: &Path, temp: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_masthead"))
        .args(args)
        .arg("--source")
        .arg(source)
        .arg("--output")
        .arg(out)
        .arg("--temp-dir")
        .arg(temp)
        .output()
        .expect("failed to run masthead")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Copy the fixture tree so a test can break it without touching the original.
fn copy_fixtures(dest: &Path) {
    for entry in walkdir::WalkDir::new(fixtures()) {
        let entry = entry.unwrap();
        let rel = entry.path().strip_prefix(fixtures()).unwrap();
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

#[test]
fn build_writes_the_site() {
    let out = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let result = masthead(&["build"], &fixtures(), out.path(), temp.path());
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    let text = stdout(&result);
    assert!(text.contains("==> Stage 1: Loading"));
    assert!(text.contains("==> Build complete"));

    for rel in [
        "index.html",
        "style.css",
        "slides.js",
        "robots.txt",
        "articles/the-river-returns/index.html",
        ".masthead-cache.json",
    ] {
        assert!(out.path().join(rel).exists(), "missing {rel}");
    }
    assert!(temp.path().join("manifest.json").exists());

    let home = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert_eq!(home.matches(r#"<section class="slide"#).count(), 2);
    assert!(home.contains("The Riverside Ledger"));
}

#[test]
fn second_build_reports_unchanged_files() {
    let out = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let first = masthead(&["build"], &fixtures(), out.path(), temp.path());
    assert!(first.status.success());
    assert!(!stdout(&first).contains("unchanged"));

    let second = masthead(&["build"], &fixtures(), out.path(), temp.path());
    assert!(second.status.success());
    assert!(stdout(&second).contains("unchanged, 0 written"));
}

#[test]
fn no_cache_rewrites_everything() {
    let out = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    assert!(masthead(&["build"], &fixtures(), out.path(), temp.path()).status.success());

    let again = masthead(&["build", "--no-cache"], &fixtures(), out.path(), temp.path());
    assert!(again.status.success());
    assert!(!stdout(&again).contains("unchanged"));
}

#[test]
fn load_then_generate_matches_build() {
    let out = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    assert!(masthead(&["load"], &fixtures(), out.path(), temp.path()).status.success());
    assert!(temp.path().join("manifest.json").exists());
    assert!(!out.path().join("index.html").exists());

    let generated = masthead(&["generate"], &fixtures(), out.path(), temp.path());
    assert!(generated.status.success());
    assert!(out.path().join("index.html").exists());
}

#[test]
fn check_accepts_fixtures_without_writing() {
    let out = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let result = masthead(&["check"], &fixtures(), out.path(), temp.path());
    assert!(result.status.success());
    assert!(stdout(&result).contains("==> Content is valid"));
    assert!(!out.path().join("index.html").exists());
    assert!(!temp.path().join("manifest.json").exists());
}

#[test]
fn check_rejects_invalid_slug() {
    let source = TempDir::new().unwrap();
    copy_fixtures(source.path());
    let articles = source.path().join("articles.json");
    let json = fs::read_to_string(&articles)
        .unwrap()
        .replace("\"the-river-returns\"", "\"The River Returns!\"");
    fs::write(&articles, json).unwrap();

    let out = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let result = masthead(&["check"], source.path(), out.path(), temp.path());
    assert!(!result.status.success());
}

#[test]
fn gen_config_prints_valid_toml() {
    let out = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let result = masthead(&["gen-config"], &fixtures(), out.path(), temp.path());
    assert!(result.status.success());
    let parsed: toml::Value = toml::from_str(&stdout(&result)).unwrap();
    assert!(parsed.get("navigator").is_some());
}
