//! Redundancy compaction of sampled sequences.
//!
//! Two rules, each switchable:
//! - NaN rule: a frame whose sample contains a NaN in any component is dropped.
//!   Vector samples (rotation) are judged as a whole.
//! - Dedup rule: a frame is kept only if its value differs from the last kept
//!   value (exact equality on the whole sample). The first surviving frame is
//!   always kept.

use crate::data::Sample;

/// Which compaction rules apply.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CompactionPolicy {
    pub dedup: bool,
    pub nan_filter: bool,
}

impl CompactionPolicy {
    /// Keep every frame.
    pub const RAW: Self = Self {
        dedup: false,
        nan_filter: false,
    };
    /// Drop NaN frames and consecutive duplicates.
    pub const COMPACT: Self = Self {
        dedup: true,
        nan_filter: true,
    };
}

impl Default for CompactionPolicy {
    fn default() -> Self {
        Self::COMPACT
    }
}

/// A value that can be compacted as one unit.
pub trait SampleValue: Copy + PartialEq {
    fn has_nan(&self) -> bool;
}

impl SampleValue for f64 {
    #[inline]
    fn has_nan(&self) -> bool {
        self.is_nan()
    }
}

impl<const N: usize> SampleValue for [f64; N] {
    #[inline]
    fn has_nan(&self) -> bool {
        self.iter().any(|v| v.is_nan())
    }
}

/// Output of [`compact`] with drop counts for diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct Compacted<T> {
    pub samples: Vec<Sample<T>>,
    pub nan_dropped: usize,
    pub duplicates_dropped: usize,
}

/// Apply `policy` to `samples`. Order is preserved; the result is a subsequence
/// of the input.
pub fn compact<T: SampleValue>(samples: &[Sample<T>], policy: CompactionPolicy) -> Compacted<T> {
    let mut kept: Vec<Sample<T>> = Vec::with_capacity(samples.len());
    let mut nan_dropped = 0;
    let mut duplicates_dropped = 0;

    for s in samples {
        if policy.nan_filter && s.value.has_nan() {
            nan_dropped += 1;
            continue;
        }
        if policy.dedup {
            if let Some(last) = kept.last() {
                if last.value == s.value {
                    duplicates_dropped += 1;
                    continue;
                }
            }
        }
        kept.push(*s);
    }

    Compacted {
        samples: kept,
        nan_dropped,
        duplicates_dropped,
    }
}
