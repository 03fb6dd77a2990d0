#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
pub mod error;

/// High-level image reading and writing functions.
///
/// Decoding, encoding and the color to grayscale conversion are delegated to the
/// `image` crate.
pub mod functional;

pub use crate::error::IoError;
