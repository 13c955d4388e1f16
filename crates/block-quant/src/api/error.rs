//! Unified error type for the block-quant public API.

use std::fmt;

use crate::palette::PaletteError;

/// Unified error type for the block-quant public API.
///
/// Wraps the crate's failure modes into a single enum for convenient `?`
/// propagation in application code. All of these surface before any output
/// buffer is returned; there is no partially valid result.
///
/// # Example
///
/// ```
/// use block_quant::{Palette, QuantizeError};
///
/// fn build_palette() -> Result<Palette, QuantizeError> {
///     let palette = Palette::from_hex(&["#000000", "#FFFFFF"])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum QuantizeError {
    /// Palette construction or parsing failed.
    Palette(PaletteError),
    /// Block size below the minimum of 1. Rejected rather than clamped:
    /// clamping would silently change the output grid.
    InvalidBlockSize {
        /// The rejected size.
        size: u32,
    },
    /// The conversion was cancelled between blocks.
    Cancelled,
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::Palette(err) => write!(f, "palette error: {}", err),
            QuantizeError::InvalidBlockSize { size } => {
                write!(f, "invalid block size {} (must be at least 1)", size)
            }
            QuantizeError::Cancelled => write!(f, "conversion cancelled"),
        }
    }
}

impl std::error::Error for QuantizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuantizeError::Palette(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PaletteError> for QuantizeError {
    fn from(err: PaletteError) -> Self {
        QuantizeError::Palette(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            QuantizeError::InvalidBlockSize { size: 0 }.to_string(),
            "invalid block size 0 (must be at least 1)"
        );
        assert_eq!(QuantizeError::Cancelled.to_string(), "conversion cancelled");
        assert_eq!(
            QuantizeError::Palette(PaletteError::EmptyPalette).to_string(),
            "palette error: palette cannot be empty"
        );
    }

    #[test]
    fn test_from_palette_error() {
        let err: QuantizeError = PaletteError::EmptyPalette.into();
        assert!(matches!(err, QuantizeError::Palette(_)));
    }
}
