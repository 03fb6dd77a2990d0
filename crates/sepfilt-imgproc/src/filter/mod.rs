//! Filter operations
//!
//! This module provides the separable Gaussian filter and its building blocks.

/// Boundary policies
mod border;
pub use border::BorderPolicy;

/// Filter errors
mod error;
pub use error::FilterError;

/// Filter kernels
pub mod kernels;

/// Filter operations
mod ops;
pub use ops::*;

/// Separable filter operations
mod separable_filter;
pub use separable_filter::*;
