//! The quantization pipeline.
//!
//! [`quantize_blocks`] walks the image in fixed-size blocks in row-major
//! order. Each block is averaged ([`block_mean`]), resolved to the nearest
//! palette swatch, tallied ([`UsageTally`]) and written back as a solid
//! region of the swatch color carrying the block's averaged alpha. The
//! whole pass is a single bounded computation with no I/O; a
//! [`CancelToken`] can abort it between blocks.

mod average;
mod cancel;
mod quantizer;
mod usage;

pub use average::block_mean;
pub use cancel::CancelToken;
pub use quantizer::quantize_blocks;
pub use usage::{UsageEntry, UsageTally};
