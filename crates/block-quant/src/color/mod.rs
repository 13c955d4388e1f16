//! Color value types shared across the quantization pipeline.
//!
//! Two plain 8-bit types cover the whole pipeline: [`Rgb`] for palette
//! entries and distance math, [`Rgba`] for buffer pixels where the averaged
//! alpha has to travel alongside the color.
//!
//! # Example
//!
//! ```
//! use block_quant::{Rgb, Rgba};
//!
//! let pixel = Rgba::new(120, 64, 32, 255);
//! let color = pixel.rgb();
//! assert_eq!(color, Rgb::new(120, 64, 32));
//! ```

mod rgb;
mod rgba;

pub use rgb::Rgb;
pub use rgba::Rgba;
