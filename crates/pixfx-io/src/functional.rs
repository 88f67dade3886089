use std::path::Path;

use log::debug;
use pixfx_image::{ImageSize, PixelBuffer};

use crate::error::IoError;

/// Convert a decoded codec image into a pixel buffer.
///
/// Any color type is converted to 8-bit RGB; an alpha channel is dropped.
pub fn from_dynamic_image(img: image::DynamicImage) -> Result<PixelBuffer, IoError> {
    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };
    Ok(PixelBuffer::new(size, img.into_rgb8().into_raw())?)
}

/// Convert a pixel buffer into an RGB image of the codec crate.
pub fn to_rgb_image(image: &PixelBuffer) -> Result<image::RgbImage, IoError> {
    let invalid = || IoError::InvalidImageSize(image.width(), image.height());
    let width = u32::try_from(image.width()).map_err(|_| invalid())?;
    let height = u32::try_from(image.height()).map_err(|_| invalid())?;
    image::RgbImage::from_raw(width, height, image.as_slice().to_vec()).ok_or_else(invalid)
}

/// Decodes an image held in memory.
///
/// The format is guessed from the content.
pub fn decode_image_rgb8(bytes: &[u8]) -> Result<PixelBuffer, IoError> {
    let img = image::load_from_memory(bytes)?;
    from_dynamic_image(img)
}

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image crate
/// and converts the pixels to 8-bit RGB.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A pixel buffer containing the image data.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<PixelBuffer, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let bytes = std::fs::read(&file_path)?;
    let image = decode_image_rgb8(&bytes)?;

    debug!("read {} from {}", image.size(), file_path.display());

    Ok(image)
}

/// Writes a pixel buffer to the given file path.
///
/// The format is chosen from the file extension.
///
/// # Arguments
///
/// * `file_path` - The destination path, e.g. `out.png`.
/// * `image` - The pixel buffer to encode.
pub fn write_image_rgb8(file_path: impl AsRef<Path>, image: &PixelBuffer) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    to_rgb_image(image)?.save(file_path)?;

    debug!("wrote {} to {}", image.size(), file_path.display());

    Ok(())
}
