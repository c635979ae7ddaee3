use std::cmp::{Ordering, Reverse};
use std::fmt;

/// Bulk-scanner quality tier, derived from a kbps estimate.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum QualityTier {
    High,      // 320+ kbps
    Good,      // 256-319 kbps
    Medium,    // 192-255 kbps
    Standard,  // 128-191 kbps
    Low(u32),  // 1-127 kbps, keeps the measured value
    Unknown,   // 0 / unreadable
}

impl QualityTier {
    pub fn from_bitrate(kbps: u32) -> Self {
        match kbps {
            320.. => QualityTier::High,
            256..=319 => QualityTier::Good,
            192..=255 => QualityTier::Medium,
            128..=191 => QualityTier::Standard,
            1..=127 => QualityTier::Low(kbps),
            0 => QualityTier::Unknown,
        }
    }

    pub fn bucket(&self) -> ReportBucket {
        match self {
            QualityTier::High => ReportBucket::High,
            QualityTier::Good => ReportBucket::Good,
            QualityTier::Medium => ReportBucket::Medium,
            QualityTier::Standard => ReportBucket::Standard,
            QualityTier::Low(_) => ReportBucket::Low,
            QualityTier::Unknown => ReportBucket::Unknown,
        }
    }

    fn rank(&self) -> (ReportBucket, Reverse<u32>) {
        match self {
            QualityTier::Low(kbps) => (ReportBucket::Low, Reverse(*kbps)),
            other => (other.bucket(), Reverse(0)),
        }
    }
}

// Best tier sorts first; low tiers by descending bitrate.
impl Ord for QualityTier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for QualityTier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityTier::Low(kbps) => write!(f, "{}kbps (Low Quality)", kbps),
            other => f.write_str(other.bucket().as_str()),
        }
    }
}

/// The six fixed rows of the detailed report; all low tiers share one row.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ReportBucket {
    High,
    Good,
    Medium,
    Standard,
    Low,
    Unknown,
}

impl ReportBucket {
    pub const ALL: [ReportBucket; 6] = [
        ReportBucket::High,
        ReportBucket::Good,
        ReportBucket::Medium,
        ReportBucket::Standard,
        ReportBucket::Low,
        ReportBucket::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportBucket::High => "320kbps (High Quality)",
            ReportBucket::Good => "256kbps (Good Quality)",
            ReportBucket::Medium => "192kbps (Medium Quality)",
            ReportBucket::Standard => "128kbps (Standard Quality)",
            ReportBucket::Low => "Low Quality",
            ReportBucket::Unknown => "Unknown Quality",
        }
    }
}

impl fmt::Display for ReportBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-file inspector policy, driven by sample rate and bits per second.
/// Kept separate from [`QualityTier`]: the two tools grade on different inputs.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InspectorQuality {
    HiRes,
    Lossless48,
    Lossless44,
    HighAac,
    Aac320,
    AacLower,
}

impl InspectorQuality {
    pub fn from_stream(sample_rate_hz: u32, bitrate_bps: u32) -> Self {
        if sample_rate_hz >= 96_000 {
            InspectorQuality::HiRes
        } else if sample_rate_hz >= 48_000 && bitrate_bps >= 2_000_000 {
            InspectorQuality::Lossless48
        } else if sample_rate_hz >= 44_100 && bitrate_bps >= 1_000_000 {
            InspectorQuality::Lossless44
        } else if bitrate_bps >= 500_000 {
            InspectorQuality::HighAac
        } else if bitrate_bps >= 320_000 {
            InspectorQuality::Aac320
        } else {
            InspectorQuality::AacLower
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InspectorQuality::HiRes => "Hi-Res (96kHz+)",
            InspectorQuality::Lossless48 => "Lossless (48kHz)",
            InspectorQuality::Lossless44 => "Lossless (44.1kHz)",
            InspectorQuality::HighAac => "High Quality AAC 500kbps+",
            InspectorQuality::Aac320 => "AAC 320kbps",
            InspectorQuality::AacLower => "AAC 256kbps or lower",
        }
    }
}

impl fmt::Display for InspectorQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
