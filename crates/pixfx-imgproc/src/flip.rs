use pixfx_image::{Color, ImageError, PixelBuffer};

/// Sample the horizontally mirrored pixel from the source image.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `x` - The output column.
/// * `y` - The output row.
///
/// # Returns
///
/// The color at `(width - 1 - x, y)` in the source.
///
/// # Example
///
/// ```
/// use pixfx_image::{Color, PixelBuffer};
/// use pixfx_imgproc::flip::mirror;
///
/// let image = PixelBuffer::from_color_fn([3, 1].into(), |x, _| Color::new(x as u8, 0, 0));
///
/// assert_eq!(mirror(&image, 0, 0).unwrap(), Color::new(2, 0, 0));
/// ```
pub fn mirror(src: &PixelBuffer, x: usize, y: usize) -> Result<Color, ImageError> {
    if x >= src.width() {
        return Err(ImageError::PixelIndexOutOfBounds(
            x,
            y,
            src.width(),
            src.height(),
        ));
    }
    src.get(src.width() - 1 - x, y)
}
