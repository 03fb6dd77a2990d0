use argh::FromArgs;
use std::{path::PathBuf, str::FromStr};

use sepfilt::image::{Image, ImageDtype};
use sepfilt::imgproc::{
    filter::{gaussian_blur_sep_with_strategy, BorderPolicy},
    parallel::ExecutionStrategy,
};
use sepfilt::io::functional as F;

/// Sample type the gray image is filtered in.
#[derive(Debug, Clone, Copy)]
enum SampleType {
    U8,
    I16,
    I32,
    F32,
    F64,
}

impl FromStr for SampleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "u8" => Ok(SampleType::U8),
            "i16" => Ok(SampleType::I16),
            "i32" => Ok(SampleType::I32),
            "f32" => Ok(SampleType::F32),
            "f64" => Ok(SampleType::F64),
            _ => Err(format!(
                "invalid sample type: {s}. Expected one of: u8, i16, i32, f32, f64"
            )),
        }
    }
}

#[derive(FromArgs)]
/// Smooth the grayscale version of an image with a separable gaussian filter
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// path to the filtered grayscale image
    #[argh(option, short = 'o')]
    output_path: PathBuf,

    /// the half width of the kernels
    #[argh(option, default = "1")]
    radius: usize,

    /// the sigma of the horizontal kernel
    #[argh(option, default = "1.0")]
    sigma_t: f32,

    /// the sigma of the vertical kernel
    #[argh(option, default = "1.0")]
    sigma_s: f32,

    /// boundary process: zero-paddle, mirroring or adjustkernel
    #[argh(option, default = "BorderPolicy::ZeroPaddle")]
    border: BorderPolicy,

    /// sample type to filter in: u8, i16, i32, f32 or f64
    #[argh(option, default = "SampleType::U8")]
    dtype: SampleType,

    /// run both passes on the current thread
    #[argh(switch)]
    serial: bool,
}

fn filter_as<T>(
    gray: &Image<u8>,
    args: &Args,
    strategy: ExecutionStrategy,
) -> Result<Image<u8>, Box<dyn std::error::Error>>
where
    T: ImageDtype + num_traits::NumCast,
{
    let src = gray.cast::<T>()?;
    let dst = gaussian_blur_sep_with_strategy(
        &src,
        args.radius,
        args.sigma_t,
        args.sigma_s,
        args.border,
        strategy,
    )?;
    Ok(dst.cast::<u8>()?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    // read the image as grayscale
    let gray = F::read_image_gray8(&args.image_path)?;

    log::info!(
        "filtering {} ({}) radius={} sigma_t={} sigma_s={} border={} dtype={:?}",
        args.image_path.display(),
        gray.size(),
        args.radius,
        args.sigma_t,
        args.sigma_s,
        args.border,
        args.dtype
    );

    let strategy = if args.serial {
        ExecutionStrategy::Serial
    } else {
        ExecutionStrategy::Auto
    };

    let output = match args.dtype {
        SampleType::U8 => filter_as::<u8>(&gray, &args, strategy)?,
        SampleType::I16 => filter_as::<i16>(&gray, &args, strategy)?,
        SampleType::I32 => filter_as::<i32>(&gray, &args, strategy)?,
        SampleType::F32 => filter_as::<f32>(&gray, &args, strategy)?,
        SampleType::F64 => filter_as::<f64>(&gray, &args, strategy)?,
    };

    F::write_image_gray8(&args.output_path, &output)?;

    log::info!("wrote {}", args.output_path.display());

    Ok(())
}
