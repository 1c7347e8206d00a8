use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cantoria", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Assemble a songbook song file from a configuration file
    ///
    /// Reads the songbook configuration, transcodes every OpenLyrics song
    /// document it names, and writes one song file with each section wrapped
    /// in songs-environment markup. For each section:
    ///
    /// - Directory entries expand to the files directly inside them
    /// - An optional `sort = "filename"` directive orders the section
    /// - Songs that fail to parse or render are logged and skipped; the
    ///   build continues with the remaining songs
    ///
    /// Output:
    /// - The assembled song file (default: songfile.sbd)
    /// - One warning per skipped song, with the reason
    /// - A summary line with song and skip counts
    Build {
        /// Path to the songbook configuration file
        config: PathBuf,

        /// Path for the assembled song file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Transcode one OpenLyrics song document to stdout
    Song {
        /// Path to the song document
        file: PathBuf,
    },
    /// Build an index file from typesetter index data
    ///
    /// The data file's first line declares whether it holds author or
    /// title records; the matching index strategy runs and the formatted
    /// index is written next to the input (default: same name with the
    /// extension swapped to .sbx).
    Index {
        /// Path to the index data file
        file: PathBuf,

        /// Path for the formatted index file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Emit the title index as a flat list instead of letter blocks
        #[arg(long)]
        flat: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build { config, output } => {
            commands::run_build(config, output)?;
        }
        Commands::Song { file } => {
            commands::run_song(file)?;
        }
        Commands::Index { file, output, flat } => {
            commands::run_index(file, output, flat)?;
        }
    }

    Ok(())
}
