use sepfilt_image::{Image, ImageDtype};

use super::{kernels, separable_filter_with_strategy, BorderPolicy, FilterError};
use crate::parallel::ExecutionStrategy;

/// Blur an image using a separable gaussian filter.
///
/// Uses `ExecutionStrategy::Auto`. For explicit control, use
/// [`gaussian_blur_sep_with_strategy`].
///
/// # Arguments
///
/// * `src` - The source image.
/// * `radius` - The half width `n` of both kernels, which have `2n + 1` weights.
/// * `sigma_t` - The sigma of the horizontal kernel.
/// * `sigma_s` - The sigma of the vertical kernel.
/// * `policy` - The boundary policy.
///
/// # Returns
///
/// A new image with the same size and sample type as `src`.
///
/// # Example
///
/// ```
/// use sepfilt_image::Image;
/// use sepfilt_imgproc::filter::{gaussian_blur_sep, BorderPolicy};
///
/// let src = Image::<u8>::from_size_val([8, 6].into(), 100).unwrap();
/// let dst = gaussian_blur_sep(&src, 2, 1.0, 1.5, BorderPolicy::AdjustKernel).unwrap();
///
/// assert_eq!(dst.size(), src.size());
/// assert!(dst.as_slice().iter().all(|v| (99..=100).contains(v)));
/// ```
pub fn gaussian_blur_sep<T: ImageDtype>(
    src: &Image<T>,
    radius: usize,
    sigma_t: f32,
    sigma_s: f32,
    policy: BorderPolicy,
) -> Result<Image<T>, FilterError> {
    gaussian_blur_sep_with_strategy(
        src,
        radius,
        sigma_t,
        sigma_s,
        policy,
        ExecutionStrategy::Auto,
    )
}

/// Blur an image using a separable gaussian filter with execution strategy control.
///
/// The horizontal pass uses a kernel built from `sigma_t`, the vertical pass a kernel
/// built from `sigma_s`.
///
/// # Errors
///
/// * [`FilterError::InvalidSigma`] if a sigma is not finite or not greater than zero.
/// * [`FilterError::EmptyImage`] if `src` has no pixels.
pub fn gaussian_blur_sep_with_strategy<T: ImageDtype>(
    src: &Image<T>,
    radius: usize,
    sigma_t: f32,
    sigma_s: f32,
    policy: BorderPolicy,
    strategy: ExecutionStrategy,
) -> Result<Image<T>, FilterError> {
    kernels::validate_sigma(sigma_t)?;
    kernels::validate_sigma(sigma_s)?;

    if src.is_empty() {
        return Err(FilterError::EmptyImage);
    }

    let kernel_t = kernels::gaussian_kernel_1d(radius, sigma_t)?;
    let kernel_s = kernels::gaussian_kernel_1d(radius, sigma_s)?;

    separable_filter_with_strategy(src, &kernel_t, &kernel_s, policy, strategy)
}
