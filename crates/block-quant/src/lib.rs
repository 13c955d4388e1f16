//! block-quant: fixed-palette block quantization for raster images
//!
//! This library turns an arbitrary RGBA image into "block art": the image
//! is tiled into fixed-size square blocks, each block is replaced by the
//! palette color nearest to its mean, and a usage table reports how many
//! blocks resolved to each color.
//!
//! # Quick Start
//!
//! The [`BlockConverter`] builder is the primary entry point:
//!
//! ```
//! use block_quant::{BlockConverter, Palette, PixelBuffer, Rgb, Rgba, Swatch};
//!
//! let palette = Palette::new(vec![
//!     Swatch::new("black", Rgb::new(0, 0, 0)),
//!     Swatch::new("white", Rgb::new(255, 255, 255)),
//! ])
//! .unwrap();
//!
//! let converter = BlockConverter::new(palette).block_size(2);
//! let input = PixelBuffer::filled(4, 4, Rgba::new(10, 10, 10, 255));
//!
//! let art = converter.convert(&input).unwrap();
//! assert_eq!(art.width(), 4);
//! assert_eq!(art.summary().block_count, 4);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGBA input buffer
//!     |
//!     v
//! row-major block walk           (quantize_blocks, step = block_size,
//!     |                           edge blocks clipped, never padded)
//!     +--> block_mean             (integer channel sums, floor division
//!     |                           by the real pixel count)
//!     +--> Palette::nearest       (linear scan, squared Euclidean RGB
//!     |                           distance, earliest swatch wins ties)
//!     +--> UsageTally::record     (packed-RGB key, first-encounter order)
//!     |
//!     v
//! swatch RGB + averaged alpha written over the block
//!     |
//!     v
//! BlockImage { pixels, ConversionSummary }
//! ```
//!
//! # Determinism
//!
//! The pipeline is deliberately boring: no randomness, no float distance,
//! no iteration-order surprises. Identical input, palette and block size
//! produce bit-identical output. The two documented tie-break rules are
//! the only places where "equally good" answers exist, and both resolve by
//! order: nearest-color ties pick the earliest swatch in palette order,
//! equal usage counts keep the order their colors first appeared in the
//! scan.
//!
//! # Scope
//!
//! Image decoding and encoding stay outside this crate; callers hand in a
//! decoded [`PixelBuffer`] and receive one back. Matching is plain
//! Euclidean distance in RGB — the palettes this targets are small, fixed
//! and externally chosen, and reproducibility beats perceptual nuance
//! here.

pub mod api;
pub mod buffer;
pub mod color;
pub mod output;
pub mod palette;
pub mod quantize;
pub mod sample;


pub use api::{BlockConverter, QuantizeError};
pub use buffer::{BufferError, PixelBuffer};
pub use color::{Rgb, Rgba};
pub use output::{BlockImage, ConversionSummary};
pub use palette::{Palette, PaletteError, ParseColorError, Swatch};
pub use quantize::{block_mean, quantize_blocks, CancelToken, UsageEntry, UsageTally};
pub use sample::sample_at;
