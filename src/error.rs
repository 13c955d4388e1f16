use thiserror::Error;

/// Application-level error for the blockart CLI.
///
/// Decode and palette failures surface before quantization starts; encode
/// failures surface before anything is reported as written. No partial
/// output file is ever produced on error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to decode image: {0}")]
    Decode(image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(image::ImageError),

    #[error("Palette resource error: {0}")]
    PaletteResource(String),

    #[error("Palette error: {0}")]
    Palette(#[from] block_quant::PaletteError),

    #[error("Buffer error: {0}")]
    Buffer(#[from] block_quant::BufferError),

    #[error("Quantization error: {0}")]
    Quantize(#[from] block_quant::QuantizeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use block_quant::{PaletteError, QuantizeError};

    #[test]
    fn test_palette_resource_message() {
        let error = AppError::PaletteResource("bad json".to_string());
        assert_eq!(error.to_string(), "Palette resource error: bad json");
    }

    #[test]
    fn test_from_palette_error() {
        let error: AppError = PaletteError::EmptyPalette.into();
        assert_eq!(error.to_string(), "Palette error: palette cannot be empty");
    }

    #[test]
    fn test_from_quantize_error() {
        let error: AppError = QuantizeError::Cancelled.into();
        assert_eq!(
            error.to_string(),
            "Quantization error: conversion cancelled"
        );
    }
}
