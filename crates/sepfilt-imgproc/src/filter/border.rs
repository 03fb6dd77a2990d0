use std::{fmt, str::FromStr};

use super::FilterError;

/// Boundary policy for the taps that fall outside the image.
///
/// Example for a line `a b c d` filtered with a 3-tap kernel `w0 w1 w2` at the left edge:
///
/// - `ZeroPaddle`: `w1·a + w2·b`
/// - `Mirroring`: `w0·b + w1·a + w2·b`
/// - `AdjustKernel`: `(w1·a + w2·b) / (w1 + w2)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderPolicy {
    /// Out-of-range taps are skipped and the sum is not renormalized, so the
    /// response is attenuated near the edges.
    ZeroPaddle,

    /// Out-of-range taps are reflected about the current pixel.
    ///
    /// A tap at `p = c + o` past the far edge reads `c - o`, a tap before the
    /// near edge reads `-p`. When the line is shorter than the kernel the
    /// reflected coordinate is clamped into the line.
    Mirroring,

    /// Out-of-range taps are skipped and the remaining weights are renormalized
    /// to sum to one.
    AdjustKernel,
}

impl BorderPolicy {
    /// All the policies, in declaration order.
    pub const ALL: [BorderPolicy; 3] = [
        BorderPolicy::ZeroPaddle,
        BorderPolicy::Mirroring,
        BorderPolicy::AdjustKernel,
    ];

    /// The identifier of the policy, as accepted by [`BorderPolicy::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderPolicy::ZeroPaddle => "zero-paddle",
            BorderPolicy::Mirroring => "mirroring",
            BorderPolicy::AdjustKernel => "adjustkernel",
        }
    }
}

impl fmt::Display for BorderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BorderPolicy {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BorderPolicy::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FilterError::UnknownBorderPolicy(s.to_string()))
    }
}

/// Accumulates the taps of a kernel centered at one sample of a line, in `f64`.
///
/// `sample(k)` reads the k-th sample of the line; it is only called with `k < len`.
pub(crate) trait TapRule {
    fn convolve(kernel: &[f32], center: usize, len: usize, sample: impl Fn(usize) -> f64) -> f64;
}

pub(crate) struct ZeroPaddleRule;

pub(crate) struct MirroringRule;

pub(crate) struct AdjustKernelRule;

#[inline]
fn tap_position(center: usize, tap: usize, radius: usize) -> (isize, isize) {
    let offset = tap as isize - radius as isize;
    (offset, center as isize + offset)
}

impl TapRule for ZeroPaddleRule {
    #[inline]
    fn convolve(kernel: &[f32], center: usize, len: usize, sample: impl Fn(usize) -> f64) -> f64 {
        let radius = kernel.len() / 2;
        let mut acc = 0.0f64;
        for (tap, &w) in kernel.iter().enumerate() {
            let (_, pos) = tap_position(center, tap, radius);
            if pos >= 0 && pos < len as isize {
                acc += w as f64 * sample(pos as usize);
            }
        }
        acc
    }
}

impl TapRule for MirroringRule {
    #[inline]
    fn convolve(kernel: &[f32], center: usize, len: usize, sample: impl Fn(usize) -> f64) -> f64 {
        let radius = kernel.len() / 2;
        let mut acc = 0.0f64;
        for (tap, &w) in kernel.iter().enumerate() {
            let (offset, _) = tap_position(center, tap, radius);
            acc += w as f64 * sample(mirror_index(center, offset, len));
        }
        acc
    }
}

impl TapRule for AdjustKernelRule {
    #[inline]
    fn convolve(kernel: &[f32], center: usize, len: usize, sample: impl Fn(usize) -> f64) -> f64 {
        let radius = kernel.len() / 2;
        let mut acc = 0.0f64;
        let mut weight_sum = 0.0f64;
        for (tap, &w) in kernel.iter().enumerate() {
            let (_, pos) = tap_position(center, tap, radius);
            if pos >= 0 && pos < len as isize {
                acc += w as f64 * sample(pos as usize);
                weight_sum += w as f64;
            }
        }
        if weight_sum == 0.0 {
            return acc;
        }
        acc / weight_sum
    }
}

/// Maps the tap at `center + offset` into `[0, len)` by negating the offset.
///
/// Past the far edge the tap reads `center - offset`, before the near edge it reads
/// `-(center + offset)`. The result is clamped into the line, which only matters
/// when `len` is smaller than the kernel radius.
#[inline]
pub(crate) fn mirror_index(center: usize, offset: isize, len: usize) -> usize {
    let last = len as isize - 1;
    let pos = center as isize + offset;
    let mirrored = if pos > last {
        center as isize - offset
    } else if pos < 0 {
        -pos
    } else {
        pos
    };
    mirrored.clamp(0, last) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_border_policy_from_str() -> Result<(), FilterError> {
        assert_eq!(
            "zero-paddle".parse::<BorderPolicy>()?,
            BorderPolicy::ZeroPaddle
        );
        assert_eq!("mirroring".parse::<BorderPolicy>()?, BorderPolicy::Mirroring);
        assert_eq!(
            "AdjustKernel".parse::<BorderPolicy>()?,
            BorderPolicy::AdjustKernel
        );

        for policy in BorderPolicy::ALL {
            assert_eq!(policy.to_string().parse::<BorderPolicy>()?, policy);
        }

        Ok(())
    }

    #[test]
    fn test_border_policy_unknown() {
        assert_eq!(
            "reflect101".parse::<BorderPolicy>(),
            Err(FilterError::UnknownBorderPolicy("reflect101".to_string()))
        );
        assert!("".parse::<BorderPolicy>().is_err());
        assert!("zero-padding".parse::<BorderPolicy>().is_err());
    }

    #[test]
    fn test_mirror_index() {
        // in range
        assert_eq!(mirror_index(2, -1, 5), 1);
        assert_eq!(mirror_index(2, 2, 5), 4);
        // before the near edge: -p
        assert_eq!(mirror_index(0, -1, 5), 1);
        assert_eq!(mirror_index(0, -2, 5), 2);
        assert_eq!(mirror_index(1, -2, 5), 1);
        // past the far edge: center - offset
        assert_eq!(mirror_index(4, 1, 5), 3);
        assert_eq!(mirror_index(4, 2, 5), 2);
        assert_eq!(mirror_index(3, 2, 5), 1);
    }

    #[test]
    fn test_mirror_index_short_line() {
        for offset in -3..=3 {
            assert_eq!(mirror_index(0, offset, 1), 0);
        }
        // 0 + 3 > 1 -> 0 - 3 = -3 -> clamped
        assert_eq!(mirror_index(0, 3, 2), 0);
        // 1 - 3 < 0 -> 2 -> clamped
        assert_eq!(mirror_index(1, -3, 2), 1);
    }

    #[test]
    fn test_rules_on_line() {
        let line = [1.0f64, 2.0, 3.0, 4.0];
        let kernel = [0.25f32, 0.5, 0.25];
        let sample = |k: usize| line[k];

        // interior: every rule agrees
        for center in 1..3 {
            let expected = 0.25 * line[center - 1] + 0.5 * line[center] + 0.25 * line[center + 1];
            assert_relative_eq!(ZeroPaddleRule::convolve(&kernel, center, 4, sample), expected);
            assert_relative_eq!(MirroringRule::convolve(&kernel, center, 4, sample), expected);
            assert_relative_eq!(AdjustKernelRule::convolve(&kernel, center, 4, sample), expected);
        }

        // left edge
        assert_relative_eq!(ZeroPaddleRule::convolve(&kernel, 0, 4, sample), 1.0);
        assert_relative_eq!(MirroringRule::convolve(&kernel, 0, 4, sample), 1.5);
        assert_relative_eq!(
            AdjustKernelRule::convolve(&kernel, 0, 4, sample),
            1.0 / 0.75
        );

        // right edge: mirroring reads center - offset = 2
        assert_relative_eq!(ZeroPaddleRule::convolve(&kernel, 3, 4, sample), 2.75);
        assert_relative_eq!(MirroringRule::convolve(&kernel, 3, 4, sample), 3.5);
        assert_relative_eq!(
            AdjustKernelRule::convolve(&kernel, 3, 4, sample),
            2.75 / 0.75
        );
    }
}
