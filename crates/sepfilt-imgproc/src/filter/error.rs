use sepfilt_image::ImageError;

/// An error type for the filter module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterError {
    /// The gaussian sigma must be a finite value greater than zero.
    #[error("Invalid sigma value: {0}. Sigma must be finite and greater than zero")]
    InvalidSigma(f32),

    /// The kernel radius gives a length that does not fit in memory.
    #[error("Invalid kernel radius: {0}. The kernel length 2 * radius + 1 overflows")]
    InvalidKernelRadius(usize),

    /// The kernels must be non-empty and of odd length.
    #[error("Invalid kernel length: ({0}, {1}). Kernels must have an odd length")]
    InvalidKernelLength(usize, usize),

    /// The source image has no pixels.
    #[error("The source image is empty")]
    EmptyImage,

    /// The boundary policy identifier is not recognized.
    #[error("Unknown border policy: {0:?}. Expected one of: zero-paddle, mirroring, adjustkernel")]
    UnknownBorderPolicy(String),

    /// Error from the image container.
    #[error(transparent)]
    Image(#[from] ImageError),
}
