//! Exact-match color inspection.

use crate::buffer::PixelBuffer;
use crate::palette::{Palette, Swatch};

/// Look up which swatch the pixel at `(x, y)` is, by exact RGB equality.
///
/// This backs inspection features (hovering over a quantized image and
/// asking "which color is this"). Unlike
/// [`Palette::nearest`], no approximation happens: a quantized output
/// pixel is expected to equal some swatch byte-for-byte, and anything else
/// returns `None`. `None` is also returned for out-of-bounds coordinates.
/// A miss is a normal answer, not an error; callers that hand in a buffer
/// that was never quantized simply get misses.
///
/// Alpha is ignored, matching is on the color channels only.
///
/// # Example
///
/// ```
/// use block_quant::{sample_at, Palette, PixelBuffer, Rgb, Rgba, Swatch};
///
/// let palette = Palette::new(vec![Swatch::new("red", Rgb::new(237, 28, 36))]).unwrap();
/// let buffer = PixelBuffer::filled(2, 2, Rgba::new(237, 28, 36, 255));
///
/// let swatch = sample_at(&buffer, &palette, 1, 1).unwrap();
/// assert_eq!(swatch.name, "red");
/// assert!(sample_at(&buffer, &palette, 5, 5).is_none());
/// ```
pub fn sample_at<'a>(
    buffer: &PixelBuffer,
    palette: &'a Palette,
    x: u32,
    y: u32,
) -> Option<&'a Swatch> {
    let pixel = buffer.get(x, y)?;
    palette.exact_match(pixel.rgb())
}
