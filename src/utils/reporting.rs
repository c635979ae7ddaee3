use std::io::{self, Write};
use std::path::Path;
use crate::analyzers::aggregate::{AggregateReport, QualityAnalyzer, ResolvedFile};
use crate::audio::metadata::TrackMetadata;

pub const NO_AUDIO_FILES: &str = "No audio files found!";

/// Renders the scanner's three report modes and the inspector report as plain text.
pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    /// Every file with size, bitrate and tier, then the six-bucket summary.
    pub fn detailed_report(&self, out: &mut impl Write, files: &[ResolvedFile]) -> io::Result<()> {
        writeln!(out, "Audio Quality Checker")?;
        writeln!(out, "{}", "=".repeat(60))?;

        if files.is_empty() {
            writeln!(out, "{}", NO_AUDIO_FILES)?;
            return Ok(());
        }

        writeln!(out, "Found {} audio files\n", files.len())?;
        writeln!(out, "Audio File Quality Report:")?;
        writeln!(out, "{}", "-".repeat(60))?;

        for resolved in files {
            writeln!(out, "{}", resolved.file.file_name)?;
            writeln!(out, "   Location: {}/", resolved.file.parent_name())?;
            writeln!(out, "   Size: {:.2} MB", resolved.file.size_mb())?;
            writeln!(out, "   Bitrate: {} kbps", resolved.bitrate)?;
            writeln!(out, "   Quality: {}", resolved.tier)?;
            writeln!(out)?;
        }

        let report = AggregateReport::from_files(files);

        writeln!(out, "{}", "=".repeat(60))?;
        writeln!(out, "QUALITY SUMMARY:")?;
        writeln!(out, "{}", "=".repeat(60))?;

        for (bucket, count) in report.bucket_counts() {
            if count > 0 {
                writeln!(out, "{}: {} files ({:.1}%)", bucket, count, report.percentage(count))?;
            }
        }

        writeln!(out, "\nTotal files: {}", report.total_files())?;
        writeln!(out, "Total size: {:.2} MB", report.total_size_mb())?;
        Ok(())
    }

    /// Files listed under their exact tier label.
    pub fn folder_report(
        &self,
        out: &mut impl Write,
        root: &Path,
        files: &[ResolvedFile],
    ) -> io::Result<()> {
        writeln!(out, "\nChecking audio quality in: {}", root.display())?;
        writeln!(out, "{}", "=".repeat(60))?;

        if files.is_empty() {
            writeln!(out, "{}", NO_AUDIO_FILES)?;
            return Ok(());
        }

        writeln!(out, "Found {} audio files", files.len())?;

        for (tier, group) in QualityAnalyzer::group_by_tier(files) {
            writeln!(out, "\n{} ({} files):", tier, group.len())?;
            for resolved in group {
                let file = &resolved.file;
                writeln!(out, "   {} ({:.1} MB)", file.file_name, file.size_mb())?;
            }
        }
        Ok(())
    }

    /// Tier distribution only, most common tier first.
    pub fn summary_report(&self, out: &mut impl Write, files: &[ResolvedFile]) -> io::Result<()> {
        if files.is_empty() {
            writeln!(out, "{}", NO_AUDIO_FILES)?;
            return Ok(());
        }

        let report = AggregateReport::from_files(files);

        writeln!(out, "\nQUICK QUALITY CHECK:")?;
        writeln!(out, "{}", "=".repeat(40))?;
        writeln!(out, "Total files: {}", report.total_files())?;
        writeln!(out, "Total size: {:.1} MB", report.total_size_mb())?;
        writeln!(out, "\nQuality Distribution:")?;

        for (tier, count) in report.by_count() {
            writeln!(out, "  {}: {} files ({:.1}%)", tier, count, report.percentage(count))?;
        }
        Ok(())
    }

    pub fn track_report(&self, out: &mut impl Write, meta: &TrackMetadata) -> io::Result<()> {
        writeln!(out, "File: {}", meta.file_name)?;
        writeln!(out, "Title: {}", meta.title)?;
        writeln!(out, "Artist: {}", meta.artist)?;
        writeln!(out, "Album: {}", meta.album)?;
        writeln!(out, "Album Artist: {}", meta.album_artist)?;
        writeln!(out, "Bitrate: {} kbps", meta.bitrate / 1000)?;
        writeln!(out, "Sample Rate: {} Hz", meta.sample_rate)?;
        writeln!(out, "Duration: {}", meta.formatted_duration())?;
        writeln!(out, "File Size: {:.2} MB", meta.file_size_mb())?;
        writeln!(out, "Quality: {}", meta.quality())?;

        match &meta.cover_art {
            Some(cover) => writeln!(
                out,
                "Embedded Album Art: {}, {}x{} px, {:.2} KB",
                cover.format,
                cover.width,
                cover.height,
                cover.size_kb()
            )?,
            None => writeln!(out, "No embedded album art found")?,
        }
        Ok(())
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::metadata::CoverArt;
    use crate::AudioFileDescriptor;
    use pretty_assertions::assert_eq;

    fn resolved(path: &str, size_bytes: u64, kbps: u32) -> ResolvedFile {
        ResolvedFile::new(AudioFileDescriptor::new(path, size_bytes), kbps)
    }

    fn render(f: impl FnOnce(&Reporter, &mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&Reporter::new(), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn detailed_report_lists_files_and_buckets() {
        let files = vec![
            resolved("/lib/Album/song.mp3", 1_048_576, 320),
            resolved("/lib/Album/silence.wav", 0, 0),
        ];
        let text = render(|r, out| r.detailed_report(out, &files));

        assert!(text.contains("Found 2 audio files"));
        assert!(text.contains(
            "song.mp3\n   Location: Album/\n   Size: 1.00 MB\n   Bitrate: 320 kbps\n   \
             Quality: 320kbps (High Quality)"
        ));
        assert!(text.contains("320kbps (High Quality): 1 files (50.0%)"));
        assert!(text.contains("Unknown Quality: 1 files (50.0%)"));
        assert!(!text.contains("Low Quality:"));
        assert!(text.contains("Total files: 2"));
        assert!(text.contains("Total size: 1.00 MB"));
    }

    #[test]
    fn detailed_report_merges_low_tiers() {
        let files = vec![resolved("/x/a.mp3", 0, 96), resolved("/x/b.mp3", 0, 64)];
        let text = render(|r, out| r.detailed_report(out, &files));
        assert!(text.contains("Low Quality: 2 files (100.0%)"));
    }

    #[test]
    fn all_modes_share_the_empty_message() {
        let detailed = render(|r, out| r.detailed_report(out, &[]));
        let summary = render(|r, out| r.summary_report(out, &[]));
        let folder = render(|r, out| r.folder_report(out, Path::new("/music"), &[]));

        for text in [&detailed, &summary, &folder] {
            assert!(text.contains(NO_AUDIO_FILES));
            assert!(!text.contains("Total files"));
        }
    }

    #[test]
    fn folder_report_groups_by_exact_label() {
        let files = vec![
            resolved("/m/a.mp3", 2_097_152, 96),
            resolved("/m/b.mp3", 1_048_576, 320),
            resolved("/m/c.mp3", 1_048_576, 64),
        ];
        let text = render(|r, out| r.folder_report(out, Path::new("/m"), &files));

        let high = text.find("320kbps (High Quality) (1 files):").unwrap();
        let low96 = text.find("96kbps (Low Quality) (1 files):").unwrap();
        let low64 = text.find("64kbps (Low Quality) (1 files):").unwrap();
        assert!(high < low96 && low96 < low64);
        assert!(text.contains("   a.mp3 (2.0 MB)"));
    }

    #[test]
    fn summary_sorts_by_count() {
        let files = vec![
            resolved("/m/a.mp3", 0, 128),
            resolved("/m/b.mp3", 0, 0),
            resolved("/m/c.mp3", 0, 0),
        ];
        let text = render(|r, out| r.summary_report(out, &files));
        let lines: Vec<&str> = text.lines().filter(|l| l.starts_with("  ")).collect();
        assert_eq!(
            lines,
            vec![
                "  Unknown Quality: 2 files (66.7%)",
                "  128kbps (Standard Quality): 1 files (33.3%)",
            ]
        );
        assert!(text.contains("Total size: 0.0 MB"));
    }

    #[test]
    fn track_report_format() {
        let meta = TrackMetadata {
            file_name: "song.m4a".into(),
            file_size_bytes: 5 * 1_048_576,
            title: "Title".into(),
            artist: "Artist".into(),
            album: "Unknown".into(),
            album_artist: "Unknown".into(),
            bitrate: 1_100_000,
            sample_rate: 44_100,
            duration_secs: 185.4,
            cover_art: Some(CoverArt {
                format: "JPEG".into(),
                width: 600,
                height: 600,
                size_bytes: 2048,
            }),
        };
        let text = render(|r, out| r.track_report(out, &meta));
        assert_eq!(
            text,
            "File: song.m4a\n\
             Title: Title\n\
             Artist: Artist\n\
             Album: Unknown\n\
             Album Artist: Unknown\n\
             Bitrate: 1100 kbps\n\
             Sample Rate: 44100 Hz\n\
             Duration: 3:05\n\
             File Size: 5.00 MB\n\
             Quality: Lossless (44.1kHz)\n\
             Embedded Album Art: JPEG, 600x600 px, 2.00 KB\n"
        );
    }

    #[test]
    fn track_report_without_cover() {
        let meta = TrackMetadata {
            file_name: "a.m4a".into(),
            file_size_bytes: 0,
            title: "Unknown".into(),
            artist: "Unknown".into(),
            album: "Unknown".into(),
            album_artist: "Unknown".into(),
            bitrate: 256_000,
            sample_rate: 44_100,
            duration_secs: 0.0,
            cover_art: None,
        };
        let text = render(|r, out| r.track_report(out, &meta));
        assert!(text.ends_with("Quality: AAC 256kbps or lower\nNo embedded album art found\n"));
    }
}
