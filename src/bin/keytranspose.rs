// Keytranspose CLI
// Prints dictionary words that type as other words when your hands slip on the keyboard

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use keytranspose_core::{
    parse_direction_args, Dictionary, Settings, Sweep, TransposeEngine, TranspositionResult,
};

/// Keyboard transposition finder
#[derive(Parser, Debug)]
#[command(name = "keytranspose")]
#[command(version)]
#[command(
    about = "Find words that become other words when typed with shifted hands",
    long_about = None
)]
struct Args {
    /// Direction strings over u, r, d, l (e.g. "rr" or "dl"); defaults to u r d l
    #[arg(value_name = "DIRECTIONS", allow_hyphen_values = true)]
    directions: Vec<String>,

    /// TOML settings file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Word list to sweep, one word per line
    #[arg(short, long, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Single-letter entry to ignore (can be used multiple times, replaces the configured list)
    #[arg(long, value_name = "LETTER", conflicts_with = "no_omit")]
    omit: Vec<String>,

    /// Keep every entry of the word list
    #[arg(long)]
    no_omit: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Settings file first, then command-line overrides
fn resolve_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::load_default().context("failed to load default settings")?,
    };

    if let Some(path) = &args.dictionary {
        settings.set_dictionary_path(path.clone());
    }

    if args.no_omit {
        settings.set_omissions(Vec::<String>::new())?;
    } else if !args.omit.is_empty() {
        settings.set_omissions(args.omit.iter().cloned())?;
    }

    Ok(settings)
}

fn write_results<W: Write>(out: W, results: &[TranspositionResult]) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    for result in results {
        writeln!(out, "{}", result)?;
    }
    out.flush()
}

fn run(args: Args) -> Result<Vec<TranspositionResult>> {
    // Directions are checked before anything touches the disk
    let sequences = parse_direction_args(&args.directions)?;
    let settings = resolve_settings(&args)?;

    let dictionary = Dictionary::from_path(settings.dictionary_path(), settings.omissions())?;
    log::info!(
        "sweeping {} words from {} with {} direction sequence(s)",
        dictionary.len(),
        settings.dictionary_path().display(),
        sequences.len()
    );

    let mut sweep = Sweep::new(TransposeEngine::default(), &dictionary);
    let results = sweep.run(&sequences);
    log::info!("{} pair(s) found", results.len());

    Ok(results)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let results = match run(args) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    if let Err(e) = write_results(io::stdout().lock(), &results) {
        eprintln!("Error: failed to write results: {e}");
        process::exit(1);
    }
}
