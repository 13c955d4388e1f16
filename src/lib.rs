//! blockart: convert raster images into fixed-palette block art.
//!
//! The quantization core lives in the [`block_quant`] crate; this crate
//! wraps it with everything a command-line conversion needs: palette
//! resource loading, image decode/encode, and summary reporting.

pub mod error;
pub mod palette_source;
pub mod report;
