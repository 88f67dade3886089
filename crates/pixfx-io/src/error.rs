/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] pixfx_image::ImageError),

    /// Error from the image codec while decoding or encoding.
    #[error("Image codec error. {0}")]
    CodecError(#[from] image::ImageError),

    /// The image dimensions cannot be represented by the codec.
    #[error("Invalid image size for the codec: {0}x{1}")]
    InvalidImageSize(usize, usize),
}
