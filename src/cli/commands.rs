use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "audio-quality")]
#[command(version = "1.0")]
#[command(about = "Scan a directory tree and grade audio files by bitrate", long_about = None)]
pub struct Cli {
    /// Root directory for the detailed report and quick summary
    #[arg(short = 'r', long, default_value = ".")]
    pub root: PathBuf,

    /// Worker threads used to read metadata (0 = one per CPU)
    #[arg(short = 'j', long, default_value_t = 0)]
    pub jobs: usize,

    /// Run a single report instead of the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Per-file report with a bucketed quality summary
    Detailed,

    /// Quality distribution only
    Summary,

    /// Files grouped by quality for a specific folder
    Folder {
        /// Folder to scan
        dir: PathBuf,
    },
}

#[derive(Parser)]
#[command(name = "audio-inspect")]
#[command(version = "1.0")]
#[command(about = "Show tags, stream properties and cover art of an .m4a/.mp4 file", long_about = None)]
pub struct InspectCli {
    /// File to inspect
    pub file: PathBuf,
}
