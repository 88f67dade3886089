use log::warn;

use pixfx_image::{Color, Image, PixelBuffer};

use crate::{
    error::FilterError,
    parallel::{self, ExecutionStrategy},
};

/// Map a divider position in view coordinates to an image column.
///
/// The view shows the whole image stretched to `view_width` pixels, so the
/// column is `divider * image_width / view_width`, clamped to `image_width`.
///
/// # Example
///
/// ```
/// use pixfx_imgproc::compare::divider_to_image_x;
///
/// assert_eq!(divider_to_image_x(400, 800, 1000), 500);
/// assert_eq!(divider_to_image_x(900, 800, 1000), 1000);
/// assert_eq!(divider_to_image_x(10, 0, 1000), 0);
/// ```
pub fn divider_to_image_x(divider: usize, view_width: usize, image_width: usize) -> usize {
    if view_width == 0 {
        return 0;
    }
    (divider.saturating_mul(image_width) / view_width).min(image_width)
}

/// Show `filtered` left of a vertical divider and `original` right of it.
///
/// Columns `x < divider_x` are taken from `filtered`, all others from
/// `original`. When `line` is given and the divider falls strictly inside the
/// image, column `divider_x` is painted with that color. A divider beyond the
/// right edge is clamped, which shows the filtered image only.
///
/// # Arguments
///
/// * `original` - The unfiltered image.
/// * `filtered` - The filtered image, same size as `original`.
/// * `divider_x` - The first column showing the original.
/// * `line` - The color of the divider line, if any.
///
/// # Errors
///
/// Returns [`FilterError::SizeMismatch`] if the images differ in size.
///
/// # Example
///
/// ```
/// use pixfx_image::{Color, PixelBuffer};
/// use pixfx_imgproc::compare::compose_split;
///
/// let original = PixelBuffer::create([4, 1].into(), Color::WHITE);
/// let filtered = PixelBuffer::create([4, 1].into(), Color::BLACK);
///
/// let split = compose_split(&original, &filtered, 2, Some(Color::RED)).unwrap();
///
/// assert_eq!(split.get(1, 0).unwrap(), Color::BLACK);
/// assert_eq!(split.get(2, 0).unwrap(), Color::RED);
/// assert_eq!(split.get(3, 0).unwrap(), Color::WHITE);
/// ```
pub fn compose_split(
    original: &PixelBuffer,
    filtered: &PixelBuffer,
    divider_x: usize,
    line: Option<Color>,
) -> Result<PixelBuffer, FilterError> {
    if original.size() != filtered.size() {
        return Err(FilterError::SizeMismatch(original.size(), filtered.size()));
    }

    if original.is_empty() {
        return Ok(original.clone());
    }

    let width = original.cols();
    let divider_x = if divider_x > width {
        warn!("divider {divider_x} is beyond the image width {width}, clamping");
        width
    } else {
        divider_x
    };

    let line = line.filter(|_| divider_x > 0 && divider_x < width);
    let split = divider_x * 3;

    let mut data = vec![0u8; original.as_slice().len()];

    parallel::par_iter_rows_indexed(
        &mut data,
        width * 3,
        ExecutionStrategy::ParallelRows,
        |y, row| {
            row[..split].copy_from_slice(&filtered.row(y)?[..split]);
            row[split..].copy_from_slice(&original.row(y)?[split..]);
            if let Some(color) = line {
                row[split..split + 3].copy_from_slice(&color.to_array());
            }
            Ok::<(), FilterError>(())
        },
    )?;

    Ok(Image::new(original.size(), data)?)
}

#[cfg(test)]
mod tests {
    use pixfx_image::{Color, PixelBuffer};

    use crate::FilterError;

    fn pair() -> (PixelBuffer, PixelBuffer) {
        let original = PixelBuffer::from_color_fn([5, 2].into(), |x, y| {
            Color::new(x as u8, y as u8, 1)
        });
        let filtered = PixelBuffer::from_color_fn([5, 2].into(), |x, y| {
            Color::new(x as u8, y as u8, 2)
        });
        (original, filtered)
    }

    #[test]
    fn test_split_without_line() -> Result<(), FilterError> {
        let (original, filtered) = pair();
        let split = super::compose_split(&original, &filtered, 3, None)?;
        for y in 0..2 {
            for x in 0..5 {
                let expected = if x < 3 { 2 } else { 1 };
                assert_eq!(split.get(x, y)?.b, expected);
            }
        }
        Ok(())
    }

    #[test]
    fn test_split_edges() -> Result<(), FilterError> {
        let (original, filtered) = pair();
        // a divider on the left edge shows the original only, no line
        assert_eq!(
            super::compose_split(&original, &filtered, 0, Some(Color::RED))?,
            original
        );
        // a divider past the right edge shows the filtered image only
        assert_eq!(
            super::compose_split(&original, &filtered, 99, Some(Color::RED))?,
            filtered
        );
        Ok(())
    }

    #[test]
    fn test_split_line() -> Result<(), FilterError> {
        let (original, filtered) = pair();
        let split = super::compose_split(&original, &filtered, 4, Some(Color::RED))?;
        assert_eq!(split.get(4, 0)?, Color::RED);
        assert_eq!(split.get(4, 1)?, Color::RED);
        assert_eq!(split.get(3, 1)?, filtered.get(3, 1)?);
        Ok(())
    }

    #[test]
    fn test_split_size_mismatch() {
        let (original, _) = pair();
        let other = PixelBuffer::create([2, 2].into(), Color::BLACK);
        assert!(matches!(
            super::compose_split(&original, &other, 1, None),
            Err(FilterError::SizeMismatch(_, _))
        ));
    }

    #[test]
    fn test_divider_mapping() {
        assert_eq!(super::divider_to_image_x(0, 640, 1280), 0);
        assert_eq!(super::divider_to_image_x(320, 640, 1280), 640);
        assert_eq!(super::divider_to_image_x(639, 640, 100), 99);
        assert_eq!(super::divider_to_image_x(640, 640, 100), 100);
        assert_eq!(super::divider_to_image_x(usize::MAX / 2, 800, 1000), 1000);
        assert_eq!(super::divider_to_image_x(usize::MAX, 1, usize::MAX), usize::MAX);
    }
}
