use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fretbook::fretboard::scale_overlay;
use fretbook::{build_song_book, build_song_book_in, ChordDiagram, ChordResolver, GuitarString, Scale};

/// Fretboard diagrams and lyric chord books for standard-tuned guitar
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Every position of a scale across the fretboard
    Scale {
        /// Key root, sharps only (e.g. C, F#)
        key: String,

        #[arg(long, default_value = "major")]
        scale: String,
    },

    /// Voicings for one or more chord symbols
    Chord {
        /// Chord symbols (e.g. G#m, C#m7, B@5)
        #[arg(required = true)]
        symbols: Vec<String>,

        #[arg(long, default_value = "C")]
        key: String,

        #[arg(long, default_value = "major")]
        scale: String,

        /// Anchor every chord on this string (5 or 6)
        #[arg(long)]
        string: Option<u8>,
    },

    /// Build a paginated chord book from a YAML song sheet
    Book {
        /// Song sheet path
        song: PathBuf,

        /// Override the sheet's key
        #[arg(long)]
        key: Option<String>,

        /// Override the sheet's scale (used with --key)
        #[arg(long, default_value = "major")]
        scale: String,

        /// Output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scale { key, scale } => {
            let scale = Scale::from_key(&key, &scale)?;
            emit(&scale_overlay(&scale), None)
        }
        Commands::Chord {
            symbols,
            key,
            scale,
            string,
        } => chords(&symbols, &key, &scale, string),
        Commands::Book {
            song,
            key,
            scale,
            output,
        } => {
            let source = fs::read_to_string(&song)
                .with_context(|| format!("reading song sheet {}", song.display()))?;
            let book = match key {
                Some(key) => build_song_book_in(&source, &key, &scale)?,
                None => build_song_book(&source)?,
            };
            for (symbol, reason) in book.skipped() {
                eprintln!("skipped {}: {}", symbol, reason);
            }
            emit(&book, output.as_ref())
        }
    }
}

fn chords(symbols: &[String], key: &str, scale: &str, string: Option<u8>) -> Result<()> {
    let preferred = match string {
        Some(n) => Some(GuitarString::new(n).with_context(|| format!("no string {}", n))?),
        None => None,
    };
    let resolver = ChordResolver::new(key, scale)?;

    let mut diagrams = Vec::new();
    for symbol in symbols {
        match resolver.resolve_with(symbol, preferred) {
            Ok(resolved) => diagrams.push(ChordDiagram::from(resolved.voicing)),
            Err(e) => eprintln!("{}: {}", symbol, e),
        }
    }
    if diagrams.is_empty() {
        bail!("no chord could be voiced");
    }
    emit(&diagrams, None)
}

fn emit<T: Serialize>(value: &T, output: Option<&PathBuf>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
