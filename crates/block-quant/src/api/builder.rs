//! BlockConverter builder -- the primary ergonomic entry point for the crate.

use crate::api::QuantizeError;
use crate::buffer::PixelBuffer;
use crate::output::BlockImage;
use crate::palette::Palette;
use crate::quantize::{quantize_blocks, CancelToken};

/// Default block edge length in pixels, matching the reference converter.
const DEFAULT_BLOCK_SIZE: u32 = 10;

/// High-level conversion builder.
///
/// `BlockConverter` is the recommended entry point for the crate. It owns
/// the palette and the conversion parameters behind a fluent builder API.
///
/// # Design
///
/// - Constructor requires a validated [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self`
/// - [`convert()`](Self::convert) takes `&self`, so one converter is
///   reusable across any number of images
///
/// # Example
///
/// ```
/// use block_quant::{BlockConverter, Palette, PixelBuffer, Rgb, Rgba, Swatch};
///
/// let palette = Palette::new(vec![
///     Swatch::new("black", Rgb::new(0, 0, 0)),
///     Swatch::new("white", Rgb::new(255, 255, 255)),
/// ])
/// .unwrap();
///
/// let converter = BlockConverter::new(palette).block_size(2);
/// let input = PixelBuffer::filled(4, 4, Rgba::new(10, 10, 10, 255));
///
/// let art = converter.convert(&input).unwrap();
/// assert_eq!(art.summary().usage[0].swatch.name, "black");
/// ```
pub struct BlockConverter {
    palette: Palette,
    block_size: u32,
    cancel: Option<CancelToken>,
}

impl BlockConverter {
    /// Create a converter with the given palette and the default block
    /// size of 10.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            block_size: DEFAULT_BLOCK_SIZE,
            cancel: None,
        }
    }

    /// Set the block edge length in pixels.
    ///
    /// Any value `>= 1` is accepted; zero is rejected by
    /// [`convert()`](Self::convert) with
    /// [`QuantizeError::InvalidBlockSize`].
    #[inline]
    pub fn block_size(mut self, size: u32) -> Self {
        self.block_size = size;
        self
    }

    /// Attach a cancellation token checked between blocks.
    #[inline]
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// The palette this converter resolves against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Quantize one image into block art.
    ///
    /// Reusable: takes `&self`, so the same converter can process many
    /// images with the same palette and parameters.
    pub fn convert(&self, input: &PixelBuffer) -> Result<BlockImage, QuantizeError> {
        quantize_blocks(input, &self.palette, self.block_size, self.cancel.as_ref())
    }
}
