use std::path::Path;

use sepfilt_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path and converts it to 8-bit grayscale.
///
/// The method reads any image format supported by the image crate. Color images are
/// converted to luma by the image crate.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A single-channel image with the luma of the decoded image.
pub fn read_image_gray8(file_path: impl AsRef<Path>) -> Result<Image<u8>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()?;

    log::debug!(
        "decoded {} as {:?} {}x{}",
        file_path.display(),
        img.color(),
        img.width(),
        img.height()
    );

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_luma8().into_raw())?)
}

/// Writes an 8-bit grayscale image to the given file path.
///
/// The format is deduced from the file extension.
///
/// # Arguments
///
/// * `file_path` - The path to the output image.
/// * `image` - The image to encode.
pub fn write_image_gray8(file_path: impl AsRef<Path>, image: &Image<u8>) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let [width, height]: [u32; 2] = image.size().into();
    let buffer = image::GrayImage::from_raw(width, height, image.as_slice().to_vec())
        .ok_or(IoError::InvalidImageBuffer(image.width(), image.height()))?;

    buffer.save(file_path)?;

    log::debug!("wrote {} ({})", file_path.display(), image.size());

    Ok(())
}
