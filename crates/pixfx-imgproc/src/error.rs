use pixfx_image::{ImageError, ImageSize};

use crate::parallel::ParallelError;

/// An error type for the imgproc module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterError {
    /// The filter name is not one of the registered identifiers.
    #[error("Unknown filter: {0:?}")]
    UnknownFilter(String),

    /// A pixel access failed inside a filter.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The parallel executor could not run.
    #[error(transparent)]
    Parallel(#[from] ParallelError),

    /// Two images that must have the same size do not.
    #[error("Image sizes do not match: {0} vs {1}")]
    SizeMismatch(ImageSize, ImageSize),
}
