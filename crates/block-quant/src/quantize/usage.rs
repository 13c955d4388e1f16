//! Per-conversion usage accounting.
//!
//! Tracks how many blocks resolved to each palette color during one
//! quantization pass. Colors are keyed by their packed RGB value, a
//! structural key that cannot collide or need parsing, and the order in
//! which colors first appear is preserved so that equal counts keep their
//! first-encounter order in the final summary.

use std::collections::HashMap;

use crate::color::Rgb;
use crate::palette::{Palette, Swatch};

/// One row of the usage table: a swatch and the number of blocks that
/// resolved to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEntry {
    /// The palette swatch.
    pub swatch: Swatch,
    /// Number of blocks that resolved to this swatch.
    pub count: u64,
}

/// Accumulates block-to-swatch resolutions for one conversion.
///
/// # Example
///
/// ```
/// use block_quant::{Palette, Rgb, Swatch, UsageTally};
///
/// let palette = Palette::new(vec![
///     Swatch::new("black", Rgb::new(0, 0, 0)),
///     Swatch::new("white", Rgb::new(255, 255, 255)),
/// ])
/// .unwrap();
///
/// let mut tally = UsageTally::new();
/// tally.record(1, Rgb::new(255, 255, 255));
/// tally.record(0, Rgb::new(0, 0, 0));
/// tally.record(1, Rgb::new(255, 255, 255));
///
/// let usage = tally.finalize(&palette);
/// assert_eq!(usage[0].swatch.name, "white");
/// assert_eq!(usage[0].count, 2);
/// assert_eq!(tally.total(), 3);
/// ```
#[derive(Debug, Default)]
pub struct UsageTally {
    // (swatch index, count) in first-encounter order
    entries: Vec<(usize, u64)>,
    // packed RGB -> position in `entries`
    index: HashMap<u32, usize>,
}

impl UsageTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one block resolved to the swatch at `swatch_idx` with the
    /// given RGB value.
    pub fn record(&mut self, swatch_idx: usize, rgb: Rgb) {
        let key = rgb.packed();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((swatch_idx, 1));
            }
        }
    }

    /// Total number of recorded blocks.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Produce the usage table, sorted descending by count.
    ///
    /// The sort is stable over the first-encounter order of colors during
    /// the row-major scan, so equal counts appear in the order their colors
    /// were first produced. That ordering is preserved reference behavior,
    /// not a deliberate rule; callers must not read meaning into it beyond
    /// determinism.
    pub fn finalize(&self, palette: &Palette) -> Vec<UsageEntry> {
        let mut usage: Vec<UsageEntry> = self
            .entries
            .iter()
            .map(|&(swatch_idx, count)| UsageEntry {
                swatch: palette.swatch(swatch_idx).clone(),
                count,
            })
            .collect();
        usage.sort_by(|a, b| b.count.cmp(&a.count));
        usage
    }
}
