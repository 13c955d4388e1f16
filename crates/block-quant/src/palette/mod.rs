//! Palette types and utilities
//!
//! This module provides the named reference palette that all quantization
//! output is drawn from, plus the error types for parsing and validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, Swatch};
