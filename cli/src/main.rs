//! Converts Alfred 3 custom web searches into webq searcher tables.

use std::io;
use std::path::PathBuf;

use alfred_webq::{Config, Migration};
use anyhow::Context;
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "alfred-webq")]
#[command(about = "Migrate Alfred custom web searches to webq searchers")]
struct Args {
    /// Web search preferences plist (defaults to Alfred 3's location in your home directory)
    #[arg(long, value_name = "PATH")]
    prefs: Option<PathBuf>,

    /// Directory holding the custom search icons
    #[arg(long, value_name = "DIR")]
    resources: Option<PathBuf>,

    /// Write the searchers to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    setup_tracing(args.verbose);

    let config = resolve_config(args.prefs, args.resources)?;
    debug!(source = %config.source.display(), resources = %config.resources.display(), "paths");

    let migration = Migration::new(config);
    let source = migration.config().source.display().to_string();

    match args.output {
        Some(path) => {
            migration.write_to(&path).with_context(|| format!("failed to migrate {source}"))?;
        }
        None => {
            let mut out = io::stdout().lock();
            migration.run(&mut out).with_context(|| format!("failed to migrate {source}"))?;
        }
    }

    Ok(())
}

fn resolve_config(prefs: Option<PathBuf>, resources: Option<PathBuf>) -> anyhow::Result<Config> {
    if let (Some(prefs), Some(resources)) = (&prefs, &resources) {
        return Ok(Config::new(prefs, resources));
    }
    let home = dirs::home_dir().context("cannot locate the home directory, pass --prefs and --resources")?;
    let defaults = Config::alfred3(&home);
    Ok(Config::new(
        prefs.unwrap_or(defaults.source),
        resources.unwrap_or(defaults.resources),
    ))
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("alfred_webq=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
