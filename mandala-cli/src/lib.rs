//! mandala - asset and backend tooling for the Buddhist Character App
//!
//! # Usage
//!
//! - `mandala models` - placeholder GLB models, one per character
//! - `mandala images characters` - reference photos and character placeholders
//! - `mandala images chapters` - numbered chapter placeholders
//! - `mandala probe` - smoke-test the backend API
//! - `mandala inspect FILE.glb` - print what a model contains
//! - `mandala manifest` - hash the generated assets
//! - `mandala serve` - preview the assets over HTTP
//! - `mandala api` - run the stand-in backend

pub mod config;
pub mod manifest;
pub mod roster;
pub mod serve;

use clap::{Parser, Subcommand};
use config::Config;
use mandala_glb::PlaceholderModel;
use mandala_images::FontSet;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mandala")]
#[command(about = "Generate and check Buddhist Character App assets", long_about = None)]
struct Cli {
    /// Config file (defaults to $MANDALA_CONFIG or ./mandala.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write placeholder GLB models (modelo{n}.glb)
    Models {
        /// Output directory (defaults to public_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Number of models (defaults to the roster size)
        #[arg(long)]
        count: Option<u32>,
    },
    /// Write placeholder JPEG images
    Images {
        #[command(subcommand)]
        kind: ImagesCommand,
    },
    /// Smoke-test the backend API
    Probe {
        /// Backend base URL (without /api)
        #[arg(long)]
        backend_url: Option<String>,

        /// Env file holding REACT_APP_BACKEND_URL
        #[arg(long)]
        env_file: Option<PathBuf>,
    },
    /// Print a summary of a GLB model
    Inspect {
        file: PathBuf,
    },
    /// Write asset-manifest.json for the generated assets
    Manifest {
        /// Asset directory (defaults to public_dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// Serve the asset directory over HTTP
    Serve {
        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Directory to serve (defaults to public_dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// Run the stand-in backend
    Api {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8001")]
        addr: String,

        /// JSON file to keep status checks in
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ImagesCommand {
    /// Download reference photos and write {slug}.jpg per character
    Characters {
        /// Output directory (defaults to images_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Skip the reference photo downloads
        #[arg(long)]
        skip_downloads: bool,
    },
    /// Write character-{n}.jpg chapter placeholders
    Chapters {
        /// Output directory (defaults to images_dir)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Number of chapters (defaults to chapter_count)
        #[arg(long)]
        count: Option<u32>,
    },
}

/// Entry point for the `mandala` binary.
pub fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("mandala=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mandala=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Ok(false) means the command ran but reported failure (a failed probe).
fn run(cli: Cli) -> Result<bool, String> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Models { out, count } => {
            let out = out.unwrap_or_else(|| config.public_dir.clone());
            cmd_models(&config, &out, count)?;
        }
        Commands::Images {
            kind: ImagesCommand::Characters { out, skip_downloads },
        } => {
            let out = out.unwrap_or_else(|| config.images_dir());
            cmd_characters(&config, &out, skip_downloads)?;
        }
        Commands::Images {
            kind: ImagesCommand::Chapters { out, count },
        } => {
            let out = out.unwrap_or_else(|| config.images_dir());
            cmd_chapters(&config, &out, count.unwrap_or(config.chapter_count))?;
        }
        Commands::Probe {
            backend_url,
            env_file,
        } => return cmd_probe(&config, backend_url, env_file),
        Commands::Inspect { file } => cmd_inspect(&file)?,
        Commands::Manifest { dir } => {
            let dir = dir.unwrap_or_else(|| config.public_dir.clone());
            let entries = manifest::write_manifest(&dir)?;
            println!("✅ Listed {} assets in {}", entries.len(), dir.join(manifest::MANIFEST_FILE).display());
        }
        Commands::Serve { port, dir } => {
            let dir = dir.unwrap_or_else(|| config.public_dir.clone());
            println!("\nStarting HTTP server on http://localhost:{}", port);
            println!("Serving {}", dir.display());
            println!("Press Ctrl+C to stop\n");
            serve::serve_directory(&dir, port)?;
        }
        Commands::Api { addr, data } => cmd_api(&addr, data)?,
    }
    Ok(true)
}

fn runtime() -> Result<tokio::runtime::Runtime, String> {
    tokio::runtime::Runtime::new().map_err(|e| format!("Failed to start async runtime: {}", e))
}

fn fonts(config: &Config) -> FontSet {
    FontSet::discover(
        config.images.bold_font.as_deref(),
        config.images.regular_font.as_deref(),
    )
}

/// One placeholder model per number; returns the written paths.
pub fn cmd_models(config: &Config, out: &Path, count: Option<u32>) -> Result<Vec<PathBuf>, String> {
    let count = count.unwrap_or_else(|| config.characters.iter().map(|c| c.number).max().unwrap_or(0));

    let mut written = Vec::new();
    for number in 1..=count {
        let path = out.join(roster::model_file(number));
        let name = roster::model_name(&config.characters, number);

        println!("Creating {} for {}", path.display(), name);
        PlaceholderModel::new(name)
            .write(&path)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        written.push(path);
    }

    println!("✅ All placeholder GLB models created successfully!");
    Ok(written)
}

/// Reference downloads (best-effort), then a placeholder per character.
pub fn cmd_characters(config: &Config, out: &Path, skip_downloads: bool) -> Result<Vec<PathBuf>, String> {
    if !skip_downloads && !config.references.is_empty() {
        let outcomes = runtime()?.block_on(mandala_images::download_all(&config.references, out));
        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
        if failed > 0 {
            tracing::warn!("{} of {} reference downloads failed", failed, outcomes.len());
        }
    }

    let fonts = fonts(config);
    let mut written = Vec::new();
    for character in &config.characters {
        let path = out.join(character.image_file());
        mandala_images::write_character(&character.name, &path, &fonts, config.images.character_quality)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        println!("✅ Created placeholder: {}", path.display());
        written.push(path);
    }

    println!("✅ All character images created successfully!");
    Ok(written)
}

pub fn cmd_chapters(config: &Config, out: &Path, count: u32) -> Result<Vec<PathBuf>, String> {
    let fonts = fonts(config);
    let mut written = Vec::new();
    for chapter in 1..=count {
        let path = out.join(roster::chapter_file(chapter));
        mandala_images::write_chapter(chapter, &path, &fonts, config.images.chapter_quality)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        println!("✅ Created: {}", path.display());
        written.push(path);
    }

    println!("✅ All {} character placeholder images created successfully!", count);
    Ok(written)
}

/// Flag, then environment or config, then the frontend env file.
fn cmd_probe(config: &Config, backend_url: Option<String>, env_file: Option<PathBuf>) -> Result<bool, String> {
    let env_file = env_file.unwrap_or_else(|| config.env_file.clone());
    let url = mandala_probe::resolve_backend_url(
        backend_url.or_else(|| config.probe.backend_url.clone()),
        &env_file,
    )
    .map_err(|e| e.to_string())?;

    runtime()?
        .block_on(mandala_probe::run(&url, config.probe.options()))
        .map_err(|e| e.to_string())
}

fn cmd_inspect(file: &Path) -> Result<(), String> {
    let bytes = std::fs::read(file).map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
    let summary = mandala_glb::inspect(&bytes).map_err(|e| format!("{}: {}", file.display(), e))?;

    println!("{}", file.display());
    println!("  Generator: {}", summary.generator.as_deref().unwrap_or("-"));
    println!("  Nodes:     {}", summary.node_names.join(", "));
    println!("  Meshes:    {}", summary.mesh_count);
    println!("  Vertices:  {}", summary.vertex_count);
    println!("  Indices:   {}", summary.index_count);
    println!("  Bounds:    {:?} .. {:?}", summary.min, summary.max);
    Ok(())
}

fn cmd_api(addr: &str, data: Option<PathBuf>) -> Result<(), String> {
    runtime()?.block_on(async {
        let state = match data {
            Some(path) => mandala_devapi::ApiState::with_file(path)
                .await
                .map_err(|e| e.to_string())?,
            None => mandala_devapi::ApiState::in_memory(),
        };
        mandala_devapi::start_server(addr, state)
            .await
            .map_err(|e| format!("Failed to serve on {}: {}", addr, e))
    })
}
