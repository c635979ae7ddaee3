use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::Ordering;
use log::info;
use rayon::prelude::*;
use crate::analyzers::quality::{QualityTier, ReportBucket};
use crate::audio::bitrate::BitrateResolver;
use crate::audio::scanner::DirectoryScanner;
use crate::utils::parallel::ParallelProcessor;
use crate::{bytes_to_mb, AudioFileDescriptor};

/// A scanned file together with its resolved bitrate and tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    pub file: AudioFileDescriptor,
    /// kbps, 0 when unknown.
    pub bitrate: u32,
    pub tier: QualityTier,
}

impl ResolvedFile {
    pub fn new(file: AudioFileDescriptor, bitrate: u32) -> Self {
        Self {
            file,
            bitrate,
            tier: QualityTier::from_bitrate(bitrate),
        }
    }
}

/// Tier counts and totals for one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateReport {
    tier_counts: BTreeMap<QualityTier, usize>,
    total_files: usize,
    total_bytes: u64,
}

impl AggregateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, tier: QualityTier, size_bytes: u64) {
        *self.tier_counts.entry(tier).or_insert(0) += 1;
        self.total_files += 1;
        self.total_bytes += size_bytes;
    }

    pub fn from_files<'a>(files: impl IntoIterator<Item = &'a ResolvedFile>) -> Self {
        let mut report = Self::new();
        for resolved in files {
            report.record(resolved.tier, resolved.file.size_bytes);
        }
        report
    }

    pub fn is_empty(&self) -> bool {
        self.total_files == 0
    }

    pub fn total_files(&self) -> usize {
        self.total_files
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn total_size_mb(&self) -> f64 {
        bytes_to_mb(self.total_bytes)
    }

    /// Exact tier counts, best tier first.
    pub fn tier_counts(&self) -> &BTreeMap<QualityTier, usize> {
        &self.tier_counts
    }

    /// Counts for all six report buckets in fixed order, including empty ones.
    pub fn bucket_counts(&self) -> Vec<(ReportBucket, usize)> {
        ReportBucket::ALL
            .iter()
            .map(|bucket| {
                let count: usize = self
                    .tier_counts
                    .iter()
                    .filter(|(tier, _)| tier.bucket() == *bucket)
                    .map(|(_, count)| count)
                    .sum();
                (*bucket, count)
            })
            .collect()
    }

    /// Exact tier counts sorted by descending count; equal counts keep tier order.
    pub fn by_count(&self) -> Vec<(QualityTier, usize)> {
        let mut counts: Vec<_> = self.tier_counts.iter().map(|(t, c)| (*t, *c)).collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        counts
    }

    pub fn percentage(&self, count: usize) -> f64 {
        if self.total_files == 0 {
            return 0.0;
        }
        count as f64 / self.total_files as f64 * 100.0
    }
}

/// Scanner + resolver + classifier pipeline shared by all report modes.
pub struct QualityAnalyzer;

impl ParallelProcessor for QualityAnalyzer {}

impl QualityAnalyzer {
    pub fn analyze(root: impl AsRef<Path>) -> Vec<ResolvedFile> {
        let files = DirectoryScanner::scan(root);
        if files.is_empty() {
            return Vec::new();
        }
        Self::resolve_all(files)
    }

    /// Resolves every file in parallel; output keeps input order.
    pub fn resolve_all(files: Vec<AudioFileDescriptor>) -> Vec<ResolvedFile> {
        let progress = Self::get_progress_counter();
        let total_files = files.len();
        info!(
            "Resolving bitrates of {} files using {} threads",
            total_files,
            rayon::current_num_threads()
        );

        files
            .into_par_iter()
            .map(|file| {
                let bitrate = BitrateResolver::resolve_or_unknown(&file);

                let processed = progress.fetch_add(1, Ordering::SeqCst) + 1;
                if processed % 100 == 0 || processed == total_files {
                    info!(
                        "Progress: {}/{} files ({:.1}%)",
                        processed,
                        total_files,
                        (processed as f64 / total_files as f64) * 100.0
                    );
                }

                ResolvedFile::new(file, bitrate)
            })
            .collect()
    }

    /// Groups files by their exact tier label, best tier first.
    pub fn group_by_tier(files: &[ResolvedFile]) -> BTreeMap<QualityTier, Vec<&ResolvedFile>> {
        let mut groups: BTreeMap<QualityTier, Vec<&ResolvedFile>> = BTreeMap::new();
        for resolved in files {
            groups.entry(resolved.tier).or_default().push(resolved);
        }
        groups
    }
}
