use super::FilterError;

/// Create a normalized gaussian kernel.
///
/// The weight at offset `k` in `[-radius, radius]` is `exp(-k² / (2σ²))`, and the
/// weights are divided by their sum so the kernel sums to one.
///
/// # Arguments
///
/// * `radius` - The half width of the kernel. The kernel has `2 * radius + 1` weights.
/// * `sigma` - The sigma of the gaussian kernel. Must be finite and greater than zero.
///
/// # Returns
///
/// A vector of the kernel, symmetric around index `radius`.
///
/// # Errors
///
/// Returns [`FilterError::InvalidSigma`] if `sigma` is not a finite positive value, and
/// [`FilterError::InvalidKernelRadius`] if `2 * radius + 1` overflows.
///
/// # Example
///
/// ```
/// use sepfilt_imgproc::filter::kernels::gaussian_kernel_1d;
///
/// let kernel = gaussian_kernel_1d(0, 3.0).unwrap();
/// assert_eq!(kernel, vec![1.0]);
/// ```
pub fn gaussian_kernel_1d(radius: usize, sigma: f32) -> Result<Vec<f32>, FilterError> {
    validate_sigma(sigma)?;

    let len = kernel_len(radius)?;

    let sigma_sq = sigma * sigma;
    let mut kernel = (0..len)
        .map(|i| {
            let x = i as f32 - radius as f32;
            (-(x * x) / (2.0 * sigma_sq)).exp()
        })
        .collect::<Vec<_>>();

    // normalize the kernel
    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);

    log::debug!(
        "gaussian kernel: radius={} sigma={} weights={:?}",
        radius,
        sigma,
        kernel
    );

    Ok(kernel)
}

fn kernel_len(radius: usize) -> Result<usize, FilterError> {
    radius
        .checked_mul(2)
        .and_then(|len| len.checked_add(1))
        .filter(|&len| len <= isize::MAX as usize / std::mem::size_of::<f32>())
        .ok_or(FilterError::InvalidKernelRadius(radius))
}

pub(crate) fn validate_sigma(sigma: f32) -> Result<(), FilterError> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(FilterError::InvalidSigma(sigma));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_gaussian_kernel_1d() -> Result<(), FilterError> {
        let kernel = gaussian_kernel_1d(2, 0.5)?;

        let expected = [
            0.00026386508,
            0.10645077,
            0.78657067,
            0.10645077,
            0.00026386508,
        ];

        assert_eq!(kernel.len(), expected.len());
        for (k, e) in kernel.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*k, *e, epsilon = 1e-6);
        }

        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_sums_to_one() -> Result<(), FilterError> {
        for radius in 0..8 {
            for sigma in [0.1, 0.5, 1.0, 2.5, 10.0, 100.0] {
                let kernel = gaussian_kernel_1d(radius, sigma)?;
                assert_eq!(kernel.len(), 2 * radius + 1);
                assert_abs_diff_eq!(kernel.iter().sum::<f32>(), 1.0, epsilon = 1e-5);
            }
        }
        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_symmetric_peak_at_center() -> Result<(), FilterError> {
        let kernel = gaussian_kernel_1d(4, 1.7)?;
        for k in 0..4 {
            assert_eq!(kernel[k], kernel[8 - k]);
            assert!(kernel[k] < kernel[k + 1]);
        }
        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_radius_zero() -> Result<(), FilterError> {
        for sigma in [0.01, 1.0, 1e6] {
            assert_eq!(gaussian_kernel_1d(0, sigma)?, vec![1.0]);
        }
        Ok(())
    }

    #[test]
    fn test_gaussian_kernel_invalid_sigma() {
        assert_eq!(
            gaussian_kernel_1d(1, 0.0),
            Err(FilterError::InvalidSigma(0.0))
        );
        assert_eq!(
            gaussian_kernel_1d(1, -1.0),
            Err(FilterError::InvalidSigma(-1.0))
        );
        assert!(gaussian_kernel_1d(1, f32::NAN).is_err());
        assert!(gaussian_kernel_1d(1, f32::INFINITY).is_err());
    }

    #[test]
    fn test_gaussian_kernel_radius_overflow() {
        assert_eq!(
            gaussian_kernel_1d(usize::MAX, 1.0),
            Err(FilterError::InvalidKernelRadius(usize::MAX))
        );
        assert_eq!(
            gaussian_kernel_1d(usize::MAX / 2, 1.0),
            Err(FilterError::InvalidKernelRadius(usize::MAX / 2))
        );
        assert_eq!(kernel_len(3), Ok(7));
    }
}
