#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use pixfx_image as image;

#[doc(inline)]
pub use pixfx_imgproc as imgproc;

#[doc(inline)]
pub use pixfx_io as io;
