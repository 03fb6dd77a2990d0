#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image representation for filtering purposes.
pub mod image;

/// sample types supported by the image container.
pub mod dtype;

/// Error types for the image module.
pub mod error;

pub use crate::dtype::ImageDtype;
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
