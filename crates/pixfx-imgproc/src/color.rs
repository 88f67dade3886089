//! Filters that only depend on the color of the pixel they map.
//!
//! Every function has the [`crate::FilterFn`] signature so it can be stored in
//! the registry; the coordinate is only used to read the source pixel.

use pixfx_image::{Color, ImageError, PixelBuffer};

/// Average above which a pixel turns white in [`black_white`].
pub const BLACK_WHITE_THRESHOLD: u16 = 127;

/// Quantization step of [`posterize`], giving the levels 0, 64, 128 and 192.
pub const POSTERIZE_STEP: u8 = 64;

/// Value the red channel is averaged with in [`tint`].
pub const TINT_OFFSET: u16 = 128;

/// Integer mean of the three channels.
fn channel_mean(c: Color) -> u16 {
    (c.r as u16 + c.g as u16 + c.b as u16) / 3
}

/// White if the channel mean is above [`BLACK_WHITE_THRESHOLD`], black otherwise.
///
/// # Example
///
/// ```
/// use pixfx_image::{Color, PixelBuffer};
/// use pixfx_imgproc::color::black_white;
///
/// let image = PixelBuffer::create([1, 1].into(), Color::new(200, 100, 50));
///
/// assert_eq!(black_white(&image, 0, 0).unwrap(), Color::BLACK);
/// ```
pub fn black_white(src: &PixelBuffer, x: usize, y: usize) -> Result<Color, ImageError> {
    let c = src.get(x, y)?;
    Ok(if channel_mean(c) > BLACK_WHITE_THRESHOLD {
        Color::WHITE
    } else {
        Color::BLACK
    })
}

/// Replace every channel by the integer mean of the three channels.
pub fn grayscale(src: &PixelBuffer, x: usize, y: usize) -> Result<Color, ImageError> {
    let avg = channel_mean(src.get(x, y)?) as u8;
    Ok(Color::new(avg, avg, avg))
}

/// Quantize every channel down to a multiple of [`POSTERIZE_STEP`].
pub fn posterize(src: &PixelBuffer, x: usize, y: usize) -> Result<Color, ImageError> {
    let c = src.get(x, y)?;
    let q = |v: u8| (v / POSTERIZE_STEP) * POSTERIZE_STEP;
    Ok(Color::new(q(c.r), q(c.g), q(c.b)))
}

/// Pull the red channel halfway towards [`TINT_OFFSET`].
pub fn tint(src: &PixelBuffer, x: usize, y: usize) -> Result<Color, ImageError> {
    let c = src.get(x, y)?;
    let r = (c.r as u16 + TINT_OFFSET) / 2;
    Ok(Color::new(r as u8, c.g, c.b))
}

/// Rotate the channels so that `(r, g, b)` becomes `(g, b, r)`.
pub fn color_shift_right(src: &PixelBuffer, x: usize, y: usize) -> Result<Color, ImageError> {
    let c = src.get(x, y)?;
    Ok(Color::new(c.g, c.b, c.r))
}

/// Rotate the channels so that `(r, g, b)` becomes `(b, r, g)`.
pub fn color_shift_left(src: &PixelBuffer, x: usize, y: usize) -> Result<Color, ImageError> {
    let c = src.get(x, y)?;
    Ok(Color::new(c.b, c.r, c.g))
}

/// Invert every channel.
pub fn negative(src: &PixelBuffer, x: usize, y: usize) -> Result<Color, ImageError> {
    let c = src.get(x, y)?;
    Ok(Color::new(255 - c.r, 255 - c.g, 255 - c.b))
}
