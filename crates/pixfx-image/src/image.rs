use crate::{color::Color, error::ImageError};

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixfx_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Total number of pixels.
    pub fn area(&self) -> usize {
        self.width * self.height
    }
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

/// Represents an image with pixel data.
///
/// The pixels are stored row-major with interleaved channels, i.e. the value of
/// channel `c` at `(x, y)` lives at `(y * width + x) * CHANNELS + c`.
///
/// An image is immutable once constructed. Pixel values can only be assigned
/// while building it, either from an owned vector or from a generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

/// An 8-bit RGB image, the buffer every filter reads from and produces.
pub type PixelBuffer = Image<u8, 3>;

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Returns
    ///
    /// A new image with the given pixel data.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixfx_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        // check if the data length matches the image size
        if data.len() != size.area() * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.area() * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The value of every channel of every pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixfx_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   }, 0u8).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.area() * CHANNELS];
        Image::new(size, data)
    }

    /// Create a new image by evaluating a generator at every coordinate.
    ///
    /// The generator is called once per pixel in row-major order with `(x, y)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixfx_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 1>::from_fn([3, 2].into(), |x, y| [(y * 3 + x) as u8]);
    ///
    /// assert_eq!(image.as_slice(), &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn from_fn(size: ImageSize, mut f: impl FnMut(usize, usize) -> [T; CHANNELS]) -> Self {
        let mut data = Vec::with_capacity(size.area() * CHANNELS);
        for y in 0..size.height {
            for x in 0..size.width {
                data.extend(f(x, y));
            }
        }
        Self { size, data }
    }

    /// Create a new image from a fallible generator.
    ///
    /// Stops at the first error and returns it; no image is built in that case.
    pub fn try_from_fn<E>(
        size: ImageSize,
        mut f: impl FnMut(usize, usize) -> Result<[T; CHANNELS], E>,
    ) -> Result<Self, E> {
        let mut data = Vec::with_capacity(size.area() * CHANNELS);
        for y in 0..size.height {
            for x in 0..size.width {
                data.extend(f(x, y)?);
            }
        }
        Ok(Self { size, data })
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Whether the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.size.area() == 0
    }

    /// Get the raw pixel data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the image and return the raw pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the channels of the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if `x >= width` or `y >= height`.
    pub fn pixel(&self, x: usize, y: usize) -> Result<&[T], ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }
        let offset = (y * self.width() + x) * CHANNELS;
        Ok(&self.data[offset..offset + CHANNELS])
    }

    /// Get the row `y` as a slice of `width * CHANNELS` values.
    pub fn row(&self, y: usize) -> Result<&[T], ImageError> {
        if y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                0,
                y,
                self.width(),
                self.height(),
            ));
        }
        let stride = self.width() * CHANNELS;
        Ok(&self.data[y * stride..(y + 1) * stride])
    }
}

impl Image<u8, 3> {
    /// Create a buffer with every pixel set to `fill`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixfx_image::{Color, PixelBuffer};
    ///
    /// let buffer = PixelBuffer::create([2, 2].into(), Color::RED);
    ///
    /// assert_eq!(buffer.get(1, 1).unwrap(), Color::RED);
    /// ```
    pub fn create(size: ImageSize, fill: Color) -> Self {
        Self::from_fn(size, |_, _| fill.to_array())
    }

    /// Create a buffer by evaluating a color generator at every coordinate.
    pub fn from_color_fn(size: ImageSize, mut f: impl FnMut(usize, usize) -> Color) -> Self {
        Self::from_fn(size, |x, y| f(x, y).to_array())
    }

    /// Create a buffer from row-major packed `0xRRGGBB` values.
    pub fn from_packed(size: ImageSize, packed: &[u32]) -> Result<Self, ImageError> {
        if packed.len() != size.area() {
            return Err(ImageError::InvalidChannelShape(packed.len(), size.area()));
        }
        let data = packed
            .iter()
            .flat_map(|&p| Color::from_packed(p).to_array())
            .collect();
        Self::new(size, data)
    }

    /// Row-major packed `0xRRGGBB` values of every pixel.
    pub fn to_packed(&self) -> Vec<u32> {
        self.as_slice()
            .chunks_exact(3)
            .map(|px| Color::new(px[0], px[1], px[2]).to_packed())
            .collect()
    }

    /// Get the color at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if the coordinate is outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Result<Color, ImageError> {
        let px = self.pixel(x, y)?;
        Ok(Color::new(px[0], px[1], px[2]))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Color, Image, ImageError, ImageSize, PixelBuffer};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(image_size.area(), 200);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);
        assert!(!image.is_empty());
        Ok(())
    }

    #[test]
    fn image_invalid_shape() {
        let res = Image::<u8, 3>::new([2, 2].into(), vec![0u8; 11]);
        assert_eq!(res, Err(ImageError::InvalidChannelShape(11, 12)));
    }

    #[test]
    fn image_empty() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new([0, 5].into(), vec![])?;
        assert!(image.is_empty());
        assert_eq!(image.height(), 5);
        assert!(image.pixel(0, 0).is_err());
        Ok(())
    }

    #[test]
    fn image_pixel_and_row() -> Result<(), ImageError> {
        let image = Image::<u8, 2>::new([2, 2].into(), vec![0, 1, 2, 3, 4, 5, 6, 7])?;
        assert_eq!(image.pixel(1, 0)?, &[2, 3]);
        assert_eq!(image.pixel(0, 1)?, &[4, 5]);
        assert_eq!(image.row(1)?, &[4, 5, 6, 7]);
        assert_eq!(
            image.pixel(2, 0),
            Err(ImageError::PixelIndexOutOfBounds(2, 0, 2, 2))
        );
        assert!(image.row(2).is_err());
        Ok(())
    }

    #[test]
    fn image_try_from_fn_stops_on_error() {
        let res = Image::<u8, 1>::try_from_fn([4, 4].into(), |x, y| {
            if x == 2 && y == 1 {
                Err("boom")
            } else {
                Ok([0])
            }
        });
        assert_eq!(res, Err("boom"));
    }

    #[test]
    fn pixel_buffer_get() -> Result<(), ImageError> {
        let buffer = PixelBuffer::from_color_fn([3, 2].into(), |x, y| {
            Color::new(x as u8, y as u8, 7)
        });
        assert_eq!(buffer.get(2, 1)?, Color::new(2, 1, 7));
        assert_eq!(
            buffer.get(0, 2),
            Err(ImageError::PixelIndexOutOfBounds(0, 2, 3, 2))
        );
        Ok(())
    }

    #[test]
    fn pixel_buffer_packed() -> Result<(), ImageError> {
        let packed = vec![0xff0000, 0x00ff00, 0xff0000ff, 0xffffff];
        let buffer = PixelBuffer::from_packed([2, 2].into(), &packed)?;
        assert_eq!(buffer.get(0, 1)?, Color::new(0, 0, 255));
        assert_eq!(buffer.to_packed(), vec![0xff0000, 0x00ff00, 0x0000ff, 0xffffff]);
        assert!(PixelBuffer::from_packed([2, 2].into(), &packed[..3]).is_err());
        Ok(())
    }

    #[test]
    fn pixel_buffer_create() {
        let buffer = PixelBuffer::create([2, 3].into(), Color::WHITE);
        assert_eq!(buffer.as_slice(), &[255u8; 2 * 3 * 3][..]);
    }
}
