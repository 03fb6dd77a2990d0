#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use sepfilt_image as image;

#[doc(inline)]
pub use sepfilt_imgproc as imgproc;

#[doc(inline)]
pub use sepfilt_io as io;
