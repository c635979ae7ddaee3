use std::path::Path;
use lofty::file::{AudioFile, FileType};
use lofty::probe::Probe;
use log::{debug, warn};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use crate::{AudioError, AudioFileDescriptor, Result};

/// How the bitrate of a given extension is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitrateStrategy {
    /// MP4/M4A container bitrate, read directly.
    Mp4,
    /// MPEG audio frame bitrate, read directly.
    Mpeg,
    /// Direct field when available, otherwise size/duration.
    Flac,
    /// Uncompressed PCM: always size/duration.
    Wav,
    /// Content-sniffed container (AAC, OGG, Opus, WMA).
    Generic,
    Unsupported,
}

impl BitrateStrategy {
    pub fn for_extension(extension: &str) -> Self {
        match extension.trim_start_matches('.').to_lowercase().as_str() {
            "m4a" | "mp4" => BitrateStrategy::Mp4,
            "mp3" => BitrateStrategy::Mpeg,
            "flac" => BitrateStrategy::Flac,
            "wav" | "wave" => BitrateStrategy::Wav,
            "aac" | "ogg" | "opus" | "wma" => BitrateStrategy::Generic,
            _ => BitrateStrategy::Unsupported,
        }
    }
}

/// Approximate bitrate in kbps from the on-disk size and play time.
pub fn derive_kbps(size_bytes: u64, duration_secs: f64) -> u32 {
    if duration_secs.is_nan() || duration_secs <= 0.0 {
        return 0;
    }
    ((size_bytes as f64 * 8.0) / (duration_secs * 1000.0)) as u32
}

pub struct BitrateResolver;

impl BitrateResolver {
    /// Resolves the bitrate of `file` in kbps. A missing field yields `Ok(0)`,
    /// a file the metadata libraries can't parse yields `Err`.
    pub fn resolve(file: &AudioFileDescriptor) -> Result<u32> {
        let strategy = BitrateStrategy::for_extension(&file.extension);
        debug!("Resolving bitrate of '{}' with {:?} strategy", file.file_name, strategy);

        match strategy {
            BitrateStrategy::Mp4 => Self::direct(&file.path, FileType::Mp4),
            BitrateStrategy::Mpeg => Self::direct(&file.path, FileType::Mpeg),
            BitrateStrategy::Flac => {
                let direct = Self::direct(&file.path, FileType::Flac)?;
                if direct > 0 {
                    Ok(direct)
                } else {
                    Self::derived(file)
                }
            }
            BitrateStrategy::Wav => Self::derived(file),
            BitrateStrategy::Generic => Self::probed(&file.path),
            BitrateStrategy::Unsupported => Ok(0),
        }
    }

    /// Same as [`BitrateResolver::resolve`] but a read failure is logged and counted as 0.
    pub fn resolve_or_unknown(file: &AudioFileDescriptor) -> u32 {
        match Self::resolve(file) {
            Ok(kbps) => kbps,
            Err(e) => {
                warn!("Error reading {}: {}", file.file_name, e);
                0
            }
        }
    }

    fn direct(path: &Path, file_type: FileType) -> Result<u32> {
        let tagged_file = Probe::open(path)
            .map_err(|e| AudioError::Metadata(e.to_string()))?
            .set_file_type(file_type)
            .read()
            .map_err(|e| AudioError::Metadata(e.to_string()))?;

        Ok(tagged_file.properties().audio_bitrate().unwrap_or(0))
    }

    // A container lofty can't identify has no bitrate to report; that isn't a read failure.
    fn probed(path: &Path) -> Result<u32> {
        let probe = Probe::open(path)
            .map_err(|e| AudioError::Metadata(e.to_string()))?
            .guess_file_type()
            .map_err(|e| AudioError::Metadata(e.to_string()))?;

        if probe.file_type().is_none() {
            debug!("Unrecognised container for {}, bitrate unknown", path.display());
            return Ok(0);
        }

        let tagged_file = probe.read().map_err(|e| AudioError::Metadata(e.to_string()))?;
        Ok(tagged_file.properties().audio_bitrate().unwrap_or(0))
    }

    fn derived(file: &AudioFileDescriptor) -> Result<u32> {
        let duration = Self::stream_duration(&file.path, &file.extension)?;
        Ok(duration.map_or(0, |secs| derive_kbps(file.size_bytes, secs)))
    }

    /// Play time in seconds from the default track's frame count, if the container declares one.
    pub fn stream_duration(path: &Path, extension: &str) -> Result<Option<f64>> {
        let file = std::fs::File::open(path)?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if !extension.is_empty() {
            hint.with_extension(extension);
        }

        let probed = symphonia::default::get_probe()
            .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
            .map_err(|e| AudioError::Metadata(e.to_string()))?;

        let duration = probed.format.default_track().and_then(|track| {
            let params = &track.codec_params;
            let time_base = params.time_base?;
            let n_frames = params.n_frames?;
            let time = time_base.calc_time(n_frames);
            Some(time.seconds as f64 + time.frac)
        });

        Ok(duration)
    }
}
