//! BlockImage and ConversionSummary.

use crate::buffer::PixelBuffer;
use crate::quantize::UsageEntry;

/// Aggregate report for one quantization run.
///
/// Derived once when the conversion finishes and immutable afterwards. The
/// quantized grid is `grid_width x grid_height =
/// ceil(width / block_size) x ceil(height / block_size)`, and the usage
/// counts always sum to `block_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Input (and output) width in pixels.
    pub width: u32,
    /// Input (and output) height in pixels.
    pub height: u32,
    /// Number of block columns.
    pub grid_width: u32,
    /// Number of block rows.
    pub grid_height: u32,
    /// Total input pixels (`width * height`).
    pub pixel_count: u64,
    /// Total blocks produced.
    pub block_count: u64,
    /// Usage table, sorted descending by count.
    pub usage: Vec<UsageEntry>,
}

impl ConversionSummary {
    /// Number of distinct palette colors used.
    #[inline]
    pub fn distinct_colors(&self) -> usize {
        self.usage.len()
    }
}

/// The result of one conversion: quantized pixels plus their summary.
///
/// # Example
///
/// ```
/// use block_quant::{quantize_blocks, Palette, PixelBuffer, Rgba, Swatch, Rgb};
///
/// let palette = Palette::new(vec![Swatch::new("black", Rgb::new(0, 0, 0))]).unwrap();
/// let input = PixelBuffer::filled(3, 3, Rgba::new(5, 5, 5, 255));
///
/// let art = quantize_blocks(&input, &palette, 2, None).unwrap();
/// assert_eq!(art.width(), 3);
/// assert_eq!(art.summary().distinct_colors(), 1);
///
/// let (pixels, summary) = art.into_parts();
/// assert_eq!(pixels.pixel_count(), summary.pixel_count);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockImage {
    pixels: PixelBuffer,
    summary: ConversionSummary,
}

impl BlockImage {
    /// Bundle a quantized buffer with its summary.
    pub(crate) fn new(pixels: PixelBuffer, summary: ConversionSummary) -> Self {
        debug_assert_eq!(pixels.width(), summary.width);
        debug_assert_eq!(pixels.height(), summary.height);
        Self { pixels, summary }
    }

    /// Output width in pixels (always equal to the input width).
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Output height in pixels (always equal to the input height).
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// The quantized pixel buffer.
    #[inline]
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// The conversion summary.
    #[inline]
    pub fn summary(&self) -> &ConversionSummary {
        &self.summary
    }

    /// Split into the owned buffer and summary.
    #[inline]
    pub fn into_parts(self) -> (PixelBuffer, ConversionSummary) {
        (self.pixels, self.summary)
    }
}
