//! The block quantization loop.

use crate::api::QuantizeError;
use crate::buffer::PixelBuffer;
use crate::color::Rgba;
use crate::output::{BlockImage, ConversionSummary};
use crate::palette::Palette;

use super::average::block_mean;
use super::cancel::CancelToken;
use super::usage::UsageTally;

/// Quantize an image into fixed-palette block art.
///
/// Blocks are visited in row-major order (all blocks of the first block row
/// left to right, then the next row) with the block origin stepping by
/// `block_size` along both axes from `(0, 0)`. Right and bottom edge blocks
/// are clipped to the buffer bounds, never padded or skipped. For each
/// block the averaged color is resolved to the nearest swatch, the tally is
/// bumped, and the swatch RGB plus the block's averaged alpha is written
/// into every output pixel the block covers.
///
/// The pass is fully deterministic: identical input, palette and block size
/// produce bit-identical output and usage counts. The usage counts always
/// sum to `ceil(W / block_size) * ceil(H / block_size)`.
///
/// Averaging reads only source values because the input buffer is never
/// written; output goes to a separate buffer that is returned only on
/// success.
///
/// # Errors
///
/// - [`QuantizeError::InvalidBlockSize`] if `block_size` is zero. A zero
///   size is rejected rather than clamped; clamping would silently change
///   the output contract.
/// - [`QuantizeError::Cancelled`] if `cancel` fires; checked once per
///   block, and the partial output buffer is dropped.
///
/// # Example
///
/// ```
/// use block_quant::{quantize_blocks, Palette, PixelBuffer, Rgb, Rgba, Swatch};
///
/// let palette = Palette::new(vec![
///     Swatch::new("black", Rgb::new(0, 0, 0)),
///     Swatch::new("white", Rgb::new(255, 255, 255)),
/// ])
/// .unwrap();
///
/// let input = PixelBuffer::filled(4, 4, Rgba::new(10, 10, 10, 255));
/// let art = quantize_blocks(&input, &palette, 2, None).unwrap();
///
/// assert_eq!(art.pixels().pixel(0, 0), Rgba::new(0, 0, 0, 255));
/// assert_eq!(art.summary().block_count, 4);
/// ```
pub fn quantize_blocks(
    input: &PixelBuffer,
    palette: &Palette,
    block_size: u32,
    cancel: Option<&CancelToken>,
) -> Result<BlockImage, QuantizeError> {
    if block_size < 1 {
        return Err(QuantizeError::InvalidBlockSize { size: block_size });
    }

    let width = input.width();
    let height = input.height();
    let mut output = PixelBuffer::new(width, height);
    let mut tally = UsageTally::new();

    let mut y0 = 0;
    while y0 < height {
        let mut x0 = 0;
        while x0 < width {
            if let Some(token) = cancel {
                if token.is_cancelled() {
                    return Err(QuantizeError::Cancelled);
                }
            }

            let mean = block_mean(input, x0, y0, block_size);
            let (idx, _) = palette.nearest(mean.rgb());
            let swatch = palette.swatch(idx);
            tally.record(idx, swatch.rgb);

            let resolved = Rgba::from_rgb(swatch.rgb, mean.a);
            let x1 = x0.saturating_add(block_size).min(width);
            let y1 = y0.saturating_add(block_size).min(height);
            for y in y0..y1 {
                for x in x0..x1 {
                    output.set_pixel(x, y, resolved);
                }
            }

            x0 = x0.saturating_add(block_size);
        }
        y0 = y0.saturating_add(block_size);
    }

    let summary = ConversionSummary {
        width,
        height,
        grid_width: width.div_ceil(block_size),
        grid_height: height.div_ceil(block_size),
        pixel_count: input.pixel_count(),
        block_count: tally.total(),
        usage: tally.finalize(palette),
    };

    Ok(BlockImage::new(output, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Swatch;
    use crate::Rgb;

    fn bw_palette() -> Palette {
        Palette::new(vec![
            Swatch::new("black", Rgb::new(0, 0, 0)),
            Swatch::new("white", Rgb::new(255, 255, 255)),
        ])
        .unwrap()
    }

    #[test]
    fn test_zero_block_size_rejected() {
        let input = PixelBuffer::new(4, 4);
        let result = quantize_blocks(&input, &bw_palette(), 0, None);
        assert!(matches!(
            result,
            Err(QuantizeError::InvalidBlockSize { size: 0 })
        ));
    }

    #[test]
    fn test_output_dimensions_match_input() {
        let input = PixelBuffer::filled(7, 5, Rgba::new(30, 30, 30, 255));
        let art = quantize_blocks(&input, &bw_palette(), 3, None).unwrap();
        assert_eq!(art.pixels().width(), 7);
        assert_eq!(art.pixels().height(), 5);
    }

    #[test]
    fn test_counts_sum_to_block_count() {
        let input = PixelBuffer::filled(7, 5, Rgba::new(200, 200, 200, 255));
        let art = quantize_blocks(&input, &bw_palette(), 3, None).unwrap();
        let summary = art.summary();
        // ceil(7/3) * ceil(5/3) = 3 * 2
        assert_eq!(summary.grid_width, 3);
        assert_eq!(summary.grid_height, 2);
        assert_eq!(summary.block_count, 6);
        let total: u64 = summary.usage.iter().map(|e| e.count).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn test_single_block_collapse() {
        // block_size >= max(W, H) collapses the image to one block
        let input = PixelBuffer::filled(3, 2, Rgba::new(240, 240, 240, 255));
        let art = quantize_blocks(&input, &bw_palette(), 10, None).unwrap();
        let summary = art.summary();
        assert_eq!((summary.grid_width, summary.grid_height), (1, 1));
        assert_eq!(summary.block_count, 1);
        assert_eq!(summary.usage.len(), 1);
        assert_eq!(summary.usage[0].swatch.name, "white");
        assert_eq!(summary.usage[0].count, 1);
    }

    #[test]
    fn test_alpha_written_from_block_mean() {
        // Semi-transparent input keeps its averaged alpha in the output
        let input = PixelBuffer::filled(2, 2, Rgba::new(10, 10, 10, 128));
        let art = quantize_blocks(&input, &bw_palette(), 2, None).unwrap();
        assert_eq!(art.pixels().pixel(1, 1), Rgba::new(0, 0, 0, 128));
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancelToken::new();
        token.cancel();
        let input = PixelBuffer::filled(4, 4, Rgba::new(10, 10, 10, 255));
        let result = quantize_blocks(&input, &bw_palette(), 2, Some(&token));
        assert!(matches!(result, Err(QuantizeError::Cancelled)));
    }

    #[test]
    fn test_uncancelled_token_is_inert() {
        let token = CancelToken::new();
        let input = PixelBuffer::filled(4, 4, Rgba::new(10, 10, 10, 255));
        let with_token = quantize_blocks(&input, &bw_palette(), 2, Some(&token)).unwrap();
        let without = quantize_blocks(&input, &bw_palette(), 2, None).unwrap();
        assert_eq!(with_token.pixels(), without.pixels());
    }

    #[test]
    fn test_deterministic() {
        let mut input = PixelBuffer::new(9, 7);
        for y in 0..7 {
            for x in 0..9 {
                input.set_pixel(x, y, Rgba::new((x * 28) as u8, (y * 36) as u8, 77, 255));
            }
        }
        let a = quantize_blocks(&input, &bw_palette(), 4, None).unwrap();
        let b = quantize_blocks(&input, &bw_palette(), 4, None).unwrap();
        assert_eq!(a.pixels(), b.pixels());
        assert_eq!(a.summary().usage, b.summary().usage);
    }

    #[test]
    fn test_empty_input() {
        let input = PixelBuffer::new(0, 0);
        let art = quantize_blocks(&input, &bw_palette(), 5, None).unwrap();
        let summary = art.summary();
        assert_eq!(summary.block_count, 0);
        assert!(summary.usage.is_empty());
    }
}
