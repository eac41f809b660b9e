//! Linear address assignment for the fixed region sequence.
//!
//! Regions are packed back to back from address 0 in declared order, and every
//! address after the last region, up to `depth - 1`, is padded with 0.

pub mod region;

use std::iter;

use tracing::{debug, instrument, warn};

use self::region::{Region, RegionKind};
use crate::{config::MemoryConfig, errors::ConfigError};

/// One memory-initialization record: the value stored at an address.
#[derive(Eq, Ord, Hash, PartialEq, PartialOrd, Clone, Copy, Debug, Default)]
pub struct MemoryWord {
    pub address: usize,
    pub value: i64,
}

impl MemoryWord {
    #[must_use]
    pub const fn new(address: usize, value: i64) -> Self {
        Self { address, value }
    }
}

/// The half-open address range `[start, start + len)` held by a region.
#[derive(Eq, PartialEq, Hash, Clone, Copy, Debug)]
pub struct RegionSpan {
    pub kind: RegionKind,
    pub start: usize,
    pub len: usize,
}

impl RegionSpan {
    /// First address after the region.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    #[must_use]
    pub const fn contains(&self, address: usize) -> bool {
        self.start <= address && address < self.end()
    }
}

/// Total number of words the regions need.
///
/// Saturates at `usize::MAX`, which no memory depth can satisfy.
#[must_use]
pub fn total_needed(regions: &[Region]) -> usize {
    regions
        .iter()
        .try_fold(0usize, |acc, region| acc.checked_add(region.len()))
        .unwrap_or(usize::MAX)
}

/// Checks that every region fits in the memory.
///
/// # Errors
/// * `ConfigError::InsufficientDepth` carrying the required word count and the
///   configured depth when the regions do not fit.
pub fn validate(config: &MemoryConfig, regions: &[Region]) -> Result<(), ConfigError> {
    let total_needed = total_needed(regions);
    let depth = config.depth();

    if total_needed > depth {
        warn!(total_needed, depth, "layout does not fit in memory");
        return Err(ConfigError::InsufficientDepth {
            total_needed,
            depth,
        });
    }

    Ok(())
}

/// Assigns one word to every address in `[0, depth)`.
///
/// Region values come first, in region order and preserving each region's
/// internal order; the remaining addresses hold 0. The result always has exactly
/// `depth` words, so regions that were not [`validate`]d are truncated rather
/// than overflowing the memory.
#[must_use]
#[instrument(skip_all, fields(depth = config.depth()))]
pub fn assign_addresses(config: &MemoryConfig, regions: &[Region]) -> Vec<MemoryWord> {
    for span in region_spans(regions) {
        debug!(region = %span.kind, start = span.start, len = span.len, "placing region");
    }

    regions
        .iter()
        .flat_map(|region| region.values.iter().copied())
        .chain(iter::repeat(0))
        .take(config.depth())
        .enumerate()
        .map(|(address, value)| MemoryWord::new(address, value))
        .collect()
}

/// Computes the address range of each region, in layout order.
#[must_use]
pub fn region_spans(regions: &[Region]) -> Vec<RegionSpan> {
    let mut start = 0usize;
    regions
        .iter()
        .map(|region| {
            let span = RegionSpan {
                kind: region.kind,
                start,
                len: region.len(),
            };
            start = start.saturating_add(region.len());
            span
        })
        .collect()
}

/// First address of the zero padding, i.e. the number of words used by regions.
#[must_use]
pub fn padding_start(regions: &[Region]) -> usize {
    total_needed(regions)
}
