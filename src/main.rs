use clap::{Parser, Subcommand};
use masthead::{config, generate, load, output};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Shared flags for commands that write the output directory.
#[derive(clap::Args, Clone)]
struct CacheArgs {
    /// Disable the output cache: rewrite every file
    #[arg(long)]
    no_cache: bool,
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "masthead")]
#[command(about = "Static site generator for editorial websites")]
#[command(long_about = "\
Static site generator for editorial websites

Content comes from a headless content API, exported as JSON. Articles,
authors, categories and pages are validated, cross-referenced and rendered
as plain HTML. The home page presents featured stories as a scroll-driven
slide deck.

Content structure:

  content/
  ├── config.toml        # Site config (optional)
  ├── articles.json      # Articles; author/category by slug, tags by name
  ├── authors.json       # Authors (optional)
  ├── categories.json    # Categories (optional)
  ├── pages.json         # Static pages and external nav links (optional)
  └── assets/            # Static assets (favicon, fonts) → copied to output root

Slides: featured articles, newest first (or the newest articles when none
are featured), capped at navigator.max_slides.

Run 'masthead gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".masthead-temp", global = true)]
    temp_dir: PathBuf,

    /// Log more (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load and validate the content snapshot into a manifest
    Load,
    /// Produce the HTML site from an existing manifest
    Generate(CacheArgs),
    /// Run the full pipeline: load → generate
    Build(CacheArgs),
    /// Validate the content directory without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Load => {
            let manifest = load::load(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_load_output(&manifest, &cli.source);
        }
        Command::Generate(cache_args) => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let manifest_content = std::fs::read_to_string(&manifest_path)?;
            let manifest: load::Manifest = serde_json::from_str(&manifest_content)?;
            init_thread_pool(&manifest.config.render);
            let report =
                generate::generate_site(&manifest, &cli.source, &cli.output, !cache_args.no_cache)?;
            output::print_generate_output(&report);
        }
        Command::Build(cache_args) => {
            std::fs::create_dir_all(&cli.temp_dir)?;

            println!("==> Stage 1: Loading {}", cli.source.display());
            let manifest = load::load(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_load_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            init_thread_pool(&manifest.config.render);
            let report =
                generate::generate_site(&manifest, &cli.source, &cli.output, !cache_args.no_cache)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = load::load(&cli.source)?;
            output::print_load_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn write_manifest(manifest: &load::Manifest, temp_dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(temp_dir)?;
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(temp_dir.join("manifest.json"), json)
}

/// Diagnostics go to stderr so stdout stays a clean report.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Initialize the rayon thread pool based on render config.
///
/// Caps at the number of available CPU cores; user can constrain down, not up.
fn init_thread_pool(render: &config::RenderConfig) {
    let threads = config::effective_threads(render);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
