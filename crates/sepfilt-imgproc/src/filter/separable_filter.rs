use rayon::prelude::*;
use sepfilt_image::{Image, ImageDtype, ImageSize};

use super::border::{AdjustKernelRule, BorderPolicy, MirroringRule, TapRule, ZeroPaddleRule};
use super::FilterError;
use crate::parallel::ExecutionStrategy;

/// The axis a 1D convolution pass runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along a row, over column offsets.
    Horizontal,
    /// Along a column, over row offsets.
    Vertical,
}

impl Axis {
    /// Describe the line through pixel `(row, col)` along this axis.
    ///
    /// Returns `(center, len, start, stride)`: the position of the pixel on the line,
    /// the number of samples of the line, the buffer index of the first sample and
    /// the buffer distance between two consecutive samples.
    #[inline]
    fn line(&self, row: usize, col: usize, size: ImageSize) -> (usize, usize, usize, usize) {
        match self {
            Axis::Horizontal => (col, size.width, row * size.width, 1),
            Axis::Vertical => (row, size.height, col, size.width),
        }
    }
}

/// Convolve every pixel of `src` with `kernel` along `axis`.
///
/// `dst` must have the same length as `src`. The boundary rule `R` is resolved at
/// compile time.
fn convolve_axis<T, R>(
    src: &[T],
    dst: &mut [T],
    size: ImageSize,
    kernel: &[f32],
    axis: Axis,
    parallel: bool,
) where
    T: ImageDtype,
    R: TapRule,
{
    let convolve_row = |row: usize, dst_row: &mut [T]| {
        for (col, dst_pixel) in dst_row.iter_mut().enumerate() {
            let (center, len, start, stride) = axis.line(row, col, size);
            let acc = R::convolve(kernel, center, len, |k| src[start + k * stride].to_f64());
            *dst_pixel = T::from_f64(acc);
        }
    };

    if parallel {
        dst.par_chunks_exact_mut(size.width)
            .enumerate()
            .for_each(|(row, dst_row)| convolve_row(row, dst_row));
    } else {
        dst.chunks_exact_mut(size.width)
            .enumerate()
            .for_each(|(row, dst_row)| convolve_row(row, dst_row));
    }
}

fn convolve_axis_with_policy<T: ImageDtype>(
    src: &[T],
    dst: &mut [T],
    size: ImageSize,
    kernel: &[f32],
    axis: Axis,
    policy: BorderPolicy,
    parallel: bool,
) {
    match policy {
        BorderPolicy::ZeroPaddle => {
            convolve_axis::<T, ZeroPaddleRule>(src, dst, size, kernel, axis, parallel)
        }
        BorderPolicy::Mirroring => {
            convolve_axis::<T, MirroringRule>(src, dst, size, kernel, axis, parallel)
        }
        BorderPolicy::AdjustKernel => {
            convolve_axis::<T, AdjustKernelRule>(src, dst, size, kernel, axis, parallel)
        }
    }
}

/// Apply a 1D filter along one axis of an image.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel` - The kernel, of odd length and centered at `kernel.len() / 2`.
/// * `axis` - The axis the kernel runs along.
/// * `policy` - The boundary policy for the taps outside the image.
/// * `strategy` - Execution strategy: `Serial`, `Parallel`, or `Auto`.
///
/// # Returns
///
/// A new image with the same size as `src`.
pub fn filter_axis<T: ImageDtype>(
    src: &Image<T>,
    kernel: &[f32],
    axis: Axis,
    policy: BorderPolicy,
    strategy: ExecutionStrategy,
) -> Result<Image<T>, FilterError> {
    if kernel.len() % 2 == 0 {
        return Err(FilterError::InvalidKernelLength(kernel.len(), kernel.len()));
    }

    if src.is_empty() {
        return Err(FilterError::EmptyImage);
    }

    let mut dst = Image::from_size_val(src.size(), T::default())?;
    convolve_axis_with_policy(
        src.as_slice(),
        dst.as_slice_mut(),
        src.size(),
        kernel,
        axis,
        policy,
        strategy.is_parallel(src.num_pixels()),
    );

    Ok(dst)
}

/// Apply a separable filter with execution strategy control.
///
/// The horizontal pass runs first and writes an intermediate image of the same sample
/// type; the vertical pass starts once the whole intermediate image is available.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel_x` - The horizontal kernel, applied over column offsets.
/// * `kernel_y` - The vertical kernel, applied over row offsets.
/// * `policy` - The boundary policy, applied identically in both passes.
/// * `strategy` - Execution strategy: `Serial`, `Parallel`, or `Auto`.
///
/// # Errors
///
/// * [`FilterError::InvalidKernelLength`] if a kernel is empty or of even length.
/// * [`FilterError::EmptyImage`] if `src` has no pixels.
pub fn separable_filter_with_strategy<T: ImageDtype>(
    src: &Image<T>,
    kernel_x: &[f32],
    kernel_y: &[f32],
    policy: BorderPolicy,
    strategy: ExecutionStrategy,
) -> Result<Image<T>, FilterError> {
    if kernel_x.len() % 2 == 0 || kernel_y.len() % 2 == 0 {
        return Err(FilterError::InvalidKernelLength(
            kernel_x.len(),
            kernel_y.len(),
        ));
    }

    if src.is_empty() {
        return Err(FilterError::EmptyImage);
    }

    let parallel = strategy.is_parallel(src.num_pixels());

    log::debug!(
        "separable filter: {} {} policy={} kernel_x={} kernel_y={} parallel={}",
        src.size(),
        T::NAME,
        policy,
        kernel_x.len(),
        kernel_y.len(),
        parallel
    );

    let mut temp = Image::from_size_val(src.size(), T::default())?;
    convolve_axis_with_policy(
        src.as_slice(),
        temp.as_slice_mut(),
        src.size(),
        kernel_x,
        Axis::Horizontal,
        policy,
        parallel,
    );

    let mut dst = Image::from_size_val(src.size(), T::default())?;
    convolve_axis_with_policy(
        temp.as_slice(),
        dst.as_slice_mut(),
        src.size(),
        kernel_y,
        Axis::Vertical,
        policy,
        parallel,
    );

    Ok(dst)
}

/// Apply a separable filter to an image.
///
/// Uses `ExecutionStrategy::Auto`. For explicit control, use
/// [`separable_filter_with_strategy`].
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel_x` - The horizontal kernel.
/// * `kernel_y` - The vertical kernel.
/// * `policy` - The boundary policy.
pub fn separable_filter<T: ImageDtype>(
    src: &Image<T>,
    kernel_x: &[f32],
    kernel_y: &[f32],
    policy: BorderPolicy,
) -> Result<Image<T>, FilterError> {
    separable_filter_with_strategy(src, kernel_x, kernel_y, policy, ExecutionStrategy::Auto)
}
