#![deny(missing_docs)]
//! Image types for pixel buffers and colors

/// image representation for pixel filtering purposes.
pub mod image;

/// 8-bit RGB color value type.
pub mod color;

/// Error types for the image module.
pub mod error;

pub use crate::color::Color;
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize, PixelBuffer};
