use std::path::Path;
use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};
use crate::AudioFileDescriptor;

/// Extensions picked up by the scanner, compared case-insensitively.
pub const AUDIO_EXTENSIONS: [&str; 8] = ["mp3", "m4a", "flac", "wav", "aac", "ogg", "wma", "opus"];

pub struct DirectoryScanner;

impl DirectoryScanner {
    pub fn is_audio_file(path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }

    /// Recursively collects every audio file beneath `root`, sorted by path.
    pub fn scan(root: impl AsRef<Path>) -> Vec<AudioFileDescriptor> {
        let root = root.as_ref();
        debug!("Scanning directory structure: {}", root.display());

        let mut files: Vec<AudioFileDescriptor> = WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Error accessing entry: {}", err);
                    None
                }
            })
            .filter(|e| e.file_type().is_file() && Self::is_audio_file(e.path()))
            .map(|e| Self::describe(&e))
            .collect();

        files.sort_by(|a, b| a.path.cmp(&b.path));
        debug!("Found {} audio files under {}", files.len(), root.display());
        files
    }

    // A file whose size can't be read is still reported, with size 0.
    fn describe(entry: &DirEntry) -> AudioFileDescriptor {
        let size_bytes = match entry.metadata() {
            Ok(meta) => meta.len(),
            Err(err) => {
                warn!("Could not read size of {}: {}", entry.path().display(), err);
                0
            }
        };
        AudioFileDescriptor::new(entry.path(), size_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn recognises_extensions_case_insensitively() {
        assert!(DirectoryScanner::is_audio_file(Path::new("a/Song.MP3")));
        assert!(DirectoryScanner::is_audio_file(Path::new("b.Opus")));
        assert!(!DirectoryScanner::is_audio_file(Path::new("notes.txt")));
        assert!(!DirectoryScanner::is_audio_file(Path::new("cover.wave")));
        assert!(!DirectoryScanner::is_audio_file(Path::new("no_extension")));
    }

    #[test]
    fn scan_is_recursive_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/b.flac"), b"xx").unwrap();
        fs::write(dir.path().join("a.MP3"), b"x").unwrap();
        fs::write(dir.path().join("readme.txt"), b"ignored").unwrap();

        let files = DirectoryScanner::scan(dir.path());
        let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.MP3", "b.flac"]);
        assert_eq!(files[0].extension, "mp3");
        assert_eq!(files[1].size_bytes, 2);
        assert_eq!(files[1].parent_name(), "sub");
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DirectoryScanner::scan(dir.path()).is_empty());
    }
}
