//! Output types for the quantization pipeline.
//!
//! [`BlockImage`] is the canonical result of a conversion: the quantized
//! pixel buffer together with its derived, read-only
//! [`ConversionSummary`].

mod block_image;

pub use block_image::{BlockImage, ConversionSummary};
