use pixfx_image::{Color, ImageError, PixelBuffer};

/// Side of the square blocks sampled by [`pixelate`].
pub const PIXELATE_BLOCK_SIZE: usize = 10;

/// Replace a pixel with the top-left sample of its block.
///
/// Blocks are [`PIXELATE_BLOCK_SIZE`] pixels wide and tall and aligned to the
/// origin; blocks on the right and bottom border may be smaller.
pub fn pixelate(src: &PixelBuffer, x: usize, y: usize) -> Result<Color, ImageError> {
    let nx = (x / PIXELATE_BLOCK_SIZE) * PIXELATE_BLOCK_SIZE;
    let ny = (y / PIXELATE_BLOCK_SIZE) * PIXELATE_BLOCK_SIZE;
    // the block origin is always in range when (x, y) is
    src.pixel(x, y)?;
    src.get(nx, ny)
}

#[cfg(test)]
mod tests {
    use pixfx_image::{Color, ImageError, PixelBuffer};

    #[test]
    fn test_pixelate() -> Result<(), ImageError> {
        let image = PixelBuffer::from_color_fn([25, 12].into(), |x, y| {
            Color::new(x as u8, y as u8, 0)
        });
        assert_eq!(super::pixelate(&image, 0, 0)?, Color::new(0, 0, 0));
        assert_eq!(super::pixelate(&image, 9, 9)?, Color::new(0, 0, 0));
        assert_eq!(super::pixelate(&image, 10, 9)?, Color::new(10, 0, 0));
        assert_eq!(super::pixelate(&image, 24, 11)?, Color::new(20, 10, 0));
        Ok(())
    }

    #[test]
    fn test_pixelate_out_of_bounds() {
        let image = PixelBuffer::create([12, 12].into(), Color::WHITE);
        assert!(super::pixelate(&image, 12, 0).is_err());
    }
}
