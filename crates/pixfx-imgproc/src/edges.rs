use pixfx_image::{Color, ImageError, PixelBuffer};

/// Gradient magnitude above which a pixel is marked as a border.
pub const SHOW_BORDERS_THRESHOLD: u32 = 100;

fn abs_diff(a: Color, b: Color) -> u32 {
    a.r.abs_diff(b.r) as u32 + a.g.abs_diff(b.g) as u32 + a.b.abs_diff(b.b) as u32
}

/// Mark strong color changes in black on a white background.
///
/// For interior pixels the gradient is the unnormalized sum of the absolute
/// channel differences between the left and right neighbours plus those
/// between the upper and lower neighbours. The pixel becomes black when the
/// sum exceeds [`SHOW_BORDERS_THRESHOLD`], white otherwise. Pixels on the
/// image border are returned unchanged.
///
/// # Example
///
/// ```
/// use pixfx_image::{Color, PixelBuffer};
/// use pixfx_imgproc::edges::show_borders;
///
/// let image = PixelBuffer::create([3, 3].into(), Color::new(10, 20, 30));
///
/// assert_eq!(show_borders(&image, 1, 1).unwrap(), Color::WHITE);
/// assert_eq!(show_borders(&image, 0, 1).unwrap(), Color::new(10, 20, 30));
/// ```
pub fn show_borders(src: &PixelBuffer, x: usize, y: usize) -> Result<Color, ImageError> {
    let c = src.get(x, y)?;
    let interior = x > 0 && y > 0 && x + 1 < src.width() && y + 1 < src.height();
    if !interior {
        return Ok(c);
    }

    let left = src.get(x - 1, y)?;
    let right = src.get(x + 1, y)?;
    let up = src.get(x, y - 1)?;
    let down = src.get(x, y + 1)?;

    let diff = abs_diff(left, right) + abs_diff(up, down);

    Ok(if diff > SHOW_BORDERS_THRESHOLD {
        Color::BLACK
    } else {
        Color::WHITE
    })
}
