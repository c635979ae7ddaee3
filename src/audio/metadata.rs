use std::io::Cursor;
use std::path::Path;
use image::ImageReader;
use lofty::file::{AudioFile, FileType, TaggedFileExt};
use lofty::picture::{MimeType, Picture};
use lofty::probe::Probe;
use lofty::tag::{Accessor, ItemKey, Tag};
use log::debug;
use crate::analyzers::quality::InspectorQuality;
use crate::{bytes_to_mb, AudioError, Result};

const UNKNOWN: &str = "Unknown";

/// Embedded artwork found in a track's tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverArt {
    /// Declared image format, e.g. `JPEG`.
    pub format: String,
    pub width: u32,
    pub height: u32,
    pub size_bytes: usize,
}

impl CoverArt {
    /// Reads the pixel dimensions of `picture` and records its declared format.
    pub fn from_picture(picture: &Picture) -> Result<Self> {
        let data = picture.data();
        let (width, height) = ImageReader::new(Cursor::new(data))
            .with_guessed_format()?
            .into_dimensions()
            .map_err(|e| AudioError::CoverArt(e.to_string()))?;

        Ok(Self {
            format: declared_format(picture.mime_type()),
            width,
            height,
            size_bytes: data.len(),
        })
    }

    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

fn declared_format(mime: Option<&MimeType>) -> String {
    match mime {
        Some(MimeType::Jpeg) => "JPEG".to_string(),
        Some(MimeType::Png) => "PNG".to_string(),
        Some(MimeType::Gif) => "GIF".to_string(),
        Some(MimeType::Bmp) => "BMP".to_string(),
        Some(MimeType::Tiff) => "TIFF".to_string(),
        Some(other) => other.as_str().to_uppercase(),
        None => UNKNOWN.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackMetadata {
    pub file_name: String,
    pub file_size_bytes: u64,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub album_artist: String,
    /// Bits per second.
    pub bitrate: u32,
    /// Hz.
    pub sample_rate: u32,
    pub duration_secs: f64,
    pub cover_art: Option<CoverArt>,
}

impl TrackMetadata {
    pub fn quality(&self) -> InspectorQuality {
        InspectorQuality::from_stream(self.sample_rate, self.bitrate)
    }

    /// `m:ss`
    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration_secs)
    }

    pub fn file_size_mb(&self) -> f64 {
        bytes_to_mb(self.file_size_bytes)
    }
}

pub fn format_duration(secs: f64) -> String {
    let whole = if secs.is_finite() && secs > 0.0 { secs as u64 } else { 0 };
    format!("{}:{:02}", whole / 60, whole % 60)
}

/// Reads tags, stream properties and artwork from a single MP4/M4A file.
pub struct TrackInspector;

impl TrackInspector {
    pub const SUPPORTED_EXTENSIONS: [&'static str; 2] = ["m4a", "mp4"];

    /// Checks that `path` exists and has an MP4 extension.
    pub fn validate(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(AudioError::PathNotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if !Self::SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AudioError::UnsupportedFormat(extension));
        }
        Ok(())
    }

    pub fn inspect(path: impl AsRef<Path>) -> Result<TrackMetadata> {
        let path = path.as_ref();
        Self::validate(path)?;

        let file_size_bytes = std::fs::metadata(path)?.len();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let tagged_file = Probe::open(path)
            .map_err(|e| AudioError::Metadata(e.to_string()))?
            .set_file_type(FileType::Mp4)
            .read()
            .map_err(|e| AudioError::Metadata(e.to_string()))?;

        let properties = tagged_file.properties();
        let bitrate = properties.audio_bitrate().unwrap_or(0).saturating_mul(1000);
        let sample_rate = properties.sample_rate().unwrap_or(0);
        let duration_secs = properties.duration().as_secs_f64();

        let tag = tagged_file.primary_tag().or_else(|| tagged_file.first_tag());
        let cover_art = match tag.and_then(|t| t.pictures().first()) {
            Some(picture) => Some(CoverArt::from_picture(picture)?),
            None => None,
        };
        debug!("Inspected '{}': cover art present: {}", file_name, cover_art.is_some());

        Ok(TrackMetadata {
            file_name,
            file_size_bytes,
            title: text_or_unknown(tag.and_then(|t| t.title().map(|s| s.into_owned()))),
            artist: text_or_unknown(tag.and_then(|t| t.artist().map(|s| s.into_owned()))),
            album: text_or_unknown(tag.and_then(|t| t.album().map(|s| s.into_owned()))),
            album_artist: text_or_unknown(tag.and_then(album_artist)),
            bitrate,
            sample_rate,
            duration_secs,
            cover_art,
        })
    }
}

fn album_artist(tag: &Tag) -> Option<String> {
    tag.get_string(&ItemKey::AlbumArtist).map(str::to_string)
}

fn text_or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNKNOWN.to_string())
}
