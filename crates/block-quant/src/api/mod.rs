//! Public API for the block-quant crate.
//!
//! This module provides the high-level API: the [`BlockConverter`] builder
//! and the [`QuantizeError`] unified error type.

mod builder;
mod error;

pub use builder::BlockConverter;
pub use error::QuantizeError;
