use anyhow::{bail, Context, Result};
use clap::Parser;
use seestrees::{render_full_tree, Config, EnvironmentCache};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render an annotated project tree with file classification and environment detection",
    long_about = None
)]
struct Args {
    /// Directory to render (defaults to current directory)
    #[arg(default_value_t = String::from("."))]
    path: String,

    /// Additional ignore patterns (exact name, or .suffix)
    #[arg(long = "exclude", short = 'x', value_name = "PATTERN")]
    exclude: Vec<String>,

    /// TOML configuration file overriding the built-in defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable environment detection and power indicators
    #[arg(long)]
    no_environments: bool,

    /// Disable colored output
    #[arg(long)]
    plain: bool,

    /// Show detailed information while rendering
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.plain {
        colored::control::set_override(false);
    }

    let mut config = Config::load(args.config.as_deref())?;
    config.ignore.extend(args.exclude.iter().cloned());
    if args.no_environments {
        config.environments = false;
    }

    let root = PathBuf::from(&args.path);
    if !root.is_dir() {
        bail!("Not a directory: {}", root.display());
    }

    let mut cache = EnvironmentCache::new();

    if args.verbose {
        println!("DEBUG: Rendering directory {}", root.display());
        println!("DEBUG: Active ignore patterns: {:?}", config.ignore);
        if config.environments {
            // Seeds the cache, so the render below reuses this detection
            for info in cache.get_or_detect(&root).values() {
                println!(
                    "DEBUG: Root environment {}/{} (power {})",
                    info.ecosystem.id(),
                    info.variant,
                    info.power
                );
            }
        }
    }
    let lines = render_full_tree(&root, &mut cache, &config)
        .with_context(|| format!("Failed to read directory {}", root.display()))?;

    for line in lines {
        println!("{}", line);
    }

    if args.verbose {
        println!(
            "DEBUG: Cached environment sets for {} directories",
            cache.len()
        );
    }

    Ok(())
}
