//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and codec errors, and provides semantic variants
//! for crop-box validation and processing failures.
use thiserror::Error;

use crate::types::CropBox;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GIF decode error: {0}")]
    GifDecode(#[from] gif::DecodingError),

    #[error("GIF encode error: {0}")]
    GifEncode(#[from] gif::EncodingError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error(
        "Crop box ({left}, {top}, {right}, {bottom}) must lie within the image boundaries: (0, 0) to ({width}, {height})"
    )]
    OutOfBounds {
        left: i64,
        top: i64,
        right: i64,
        bottom: i64,
        width: u32,
        height: u32,
    },

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub(crate) fn out_of_bounds(crop: CropBox, width: u32, height: u32) -> Self {
        Error::OutOfBounds {
            left: crop.left,
            top: crop.top,
            right: crop.right,
            bottom: crop.bottom,
            width,
            height,
        }
    }
}
