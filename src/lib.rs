use std::path::{Path, PathBuf};

pub mod analyzers;
pub mod audio;
pub mod utils;
pub mod cli;

/// A discovered audio file. Built during the directory walk and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFileDescriptor {
    pub path: PathBuf,
    pub file_name: String,
    /// Lowercased extension without the dot.
    pub extension: String,
    pub size_bytes: u64,
}

impl AudioFileDescriptor {
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        Self {
            path,
            file_name,
            extension,
            size_bytes,
        }
    }

    /// Name of the directory directly containing the file.
    pub fn parent_name(&self) -> String {
        self.path
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn size_mb(&self) -> f64 {
        bytes_to_mb(self.size_bytes)
    }
}

pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Metadata extraction error: {0}")]
    Metadata(String),
    #[error("File not found: {}", .0.display())]
    PathNotFound(PathBuf),
    #[error("Only supports .m4a or .mp4 files")]
    UnsupportedFormat(String),
    #[error("Cover art error: {0}")]
    CoverArt(String),
}

pub type Result<T> = std::result::Result<T, AudioError>;

/// Installs the env_logger backend, defaulting to `warn` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

pub use audio::bitrate::{BitrateResolver, BitrateStrategy};
pub use audio::metadata::{CoverArt, TrackInspector, TrackMetadata};
pub use audio::scanner::DirectoryScanner;
pub use analyzers::aggregate::{AggregateReport, QualityAnalyzer, ResolvedFile};
pub use analyzers::quality::{InspectorQuality, QualityTier, ReportBucket};
