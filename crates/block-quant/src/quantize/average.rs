//! Block mean computation.

use crate::buffer::PixelBuffer;
use crate::color::Rgba;

/// Compute the mean color of one block, clipped to the buffer bounds.
///
/// Sums every channel (alpha included) over the pixels in
/// `[x0, x0 + block_size) x [y0, y0 + block_size)` intersected with the
/// buffer, then divides each sum by the number of pixels actually visited
/// using integer floor division. The floor is part of the output contract:
/// a clipped edge block divides by its real pixel count, not the nominal
/// block area, and never rounds.
///
/// The caller must anchor the block inside the buffer (`x0 < width`,
/// `y0 < height`), which the quantizer loop guarantees, so the visited
/// count is always at least 1.
///
/// # Example
///
/// ```
/// use block_quant::{block_mean, PixelBuffer, Rgba};
///
/// let mut buffer = PixelBuffer::filled(2, 1, Rgba::new(10, 10, 10, 255));
/// buffer.set_pixel(1, 0, Rgba::new(21, 21, 21, 255));
///
/// // (10 + 21) / 2 floors to 15
/// assert_eq!(block_mean(&buffer, 0, 0, 2), Rgba::new(15, 15, 15, 255));
/// ```
pub fn block_mean(buffer: &PixelBuffer, x0: u32, y0: u32, block_size: u32) -> Rgba {
    debug_assert!(x0 < buffer.width() && y0 < buffer.height());
    debug_assert!(block_size >= 1);

    let x1 = x0.saturating_add(block_size).min(buffer.width());
    let y1 = y0.saturating_add(block_size).min(buffer.height());

    let mut r: u64 = 0;
    let mut g: u64 = 0;
    let mut b: u64 = 0;
    let mut a: u64 = 0;
    let mut count: u64 = 0;

    for y in y0..y1 {
        for x in x0..x1 {
            let px = buffer.pixel(x, y);
            r += u64::from(px.r);
            g += u64::from(px.g);
            b += u64::from(px.b);
            a += u64::from(px.a);
            count += 1;
        }
    }

    Rgba::new(
        (r / count) as u8,
        (g / count) as u8,
        (b / count) as u8,
        (a / count) as u8,
    )
}
