use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use sepfilt_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

impl From<ImageSize> for [u32; 2] {
    fn from(size: ImageSize) -> Self {
        [size.width as u32, size.height as u32]
    }
}

/// Represents a single-channel image with pixel data.
///
/// The samples are stored row-major in a contiguous buffer of `height * width` elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T> Image<T> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image, row-major.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use sepfilt_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size, every pixel set to `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sepfilt_image::{Image, ImageSize};
    ///
    /// let image = Image::<f32>::from_size_val([4, 3].into(), 1.5).unwrap();
    ///
    /// assert_eq!(image.cols(), 4);
    /// assert_eq!(image.rows(), 3);
    /// assert_eq!(image.get_pixel(3, 2), Ok(&1.5));
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        Image::new(size, vec![val; size.width * size.height])
    }

    /// Cast the pixel data of the image to a different type.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::CastError`] if a sample is not representable in `U`.
    pub fn cast<U>(&self) -> Result<Image<U>, ImageError>
    where
        T: Copy + num_traits::NumCast,
        U: num_traits::NumCast,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(ImageError::CastError))
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::new(self.size, casted_data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of pixels of the image.
    pub fn num_pixels(&self) -> usize {
        self.data.len()
    }

    /// Whether the image holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the pixel data as a row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a mutable row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get a reference to the sample at pixel `(x, y)`, where `x` is the column and `y`
    /// the row.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if the pixel is outside the image.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<&T, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        Ok(&self.data[y * self.cols() + x])
    }

    /// Set the sample at pixel `(x, y)`, where `x` is the column and `y` the row.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if the pixel is outside the image.
    pub fn set_pixel(&mut self, x: usize, y: usize, val: T) -> Result<(), ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        let cols = self.cols();
        self.data[y * cols + x] = val;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(
            image_size.to_string(),
            "ImageSize { width: 10, height: 20 }"
        );
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_pixels(), 200);
        assert!(!image.is_empty());

        Ok(())
    }

    #[test]
    fn image_wrong_data_length() {
        let res = Image::<f32>::new([3, 2].into(), vec![0.0; 5]);
        assert_eq!(res, Err(ImageError::InvalidChannelShape(5, 6)));
    }

    #[test]
    fn image_row_major_access() -> Result<(), ImageError> {
        let image = Image::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![0, 1, 2, 10, 11, 12],
        )?;
        assert_eq!(image.get_pixel(2, 0), Ok(&2));
        assert_eq!(image.get_pixel(0, 1), Ok(&10));
        assert_eq!(
            image.get_pixel(0, 2),
            Err(ImageError::PixelIndexOutOfBounds(0, 2, 3, 2))
        );
        assert_eq!(
            image.get_pixel(3, 0),
            Err(ImageError::PixelIndexOutOfBounds(3, 0, 3, 2))
        );

        Ok(())
    }

    #[test]
    fn image_size_to_u32() {
        let size = ImageSize {
            width: 640,
            height: 480,
        };
        let [width, height]: [u32; 2] = size.into();
        assert_eq!((width, height), (640, 480));
    }

    #[test]
    fn image_cast() -> Result<(), ImageError> {
        let image_u8 = Image::new([3, 1].into(), vec![0u8, 128, 255])?;
        let image_f64: Image<f64> = image_u8.cast()?;
        assert_eq!(image_f64.as_slice(), &[0.0, 128.0, 255.0]);

        let image_i16 = Image::new([2, 1].into(), vec![-1i16, 3])?;
        assert_eq!(image_i16.cast::<u8>(), Err(ImageError::CastError));

        Ok(())
    }

    #[test]
    fn image_set_pixel() -> Result<(), ImageError> {
        let mut image = Image::<i32>::from_size_val([2, 2].into(), 0)?;
        image.set_pixel(1, 0, 7)?;
        image.set_pixel(0, 1, 9)?;
        assert_eq!(image.as_slice(), &[0, 7, 9, 0]);
        // get_pixel and set_pixel share the (x, y) order
        assert_eq!(image.get_pixel(1, 0), Ok(&7));
        assert_eq!(image.get_pixel(0, 1), Ok(&9));
        assert_eq!(
            image.set_pixel(2, 0, 1),
            Err(ImageError::PixelIndexOutOfBounds(2, 0, 2, 2))
        );

        Ok(())
    }
}
