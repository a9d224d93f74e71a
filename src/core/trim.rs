//! Uniform-margin detection and trimming.
//!
//! The background color is sampled from the top-left pixel only; noisy or
//! non-uniform corners will mislead the scan. That matches the observed
//! behavior of the tool this replaces.
use image::{RgbaImage, imageops};
use tracing::debug;

use crate::types::CropBox;

/// Bounding box of every pixel that differs from the background sample at
/// (0, 0) in any channel.
///
/// `None` means the image is uniformly the background color (or empty) and
/// there is nothing to trim.
pub fn content_bbox(image: &RgbaImage) -> Option<CropBox> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return None;
    }
    let background = *image.get_pixel(0, 0);

    let mut min_x = width;
    let mut min_y = height;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;
    for (x, y, pixel) in image.enumerate_pixels() {
        if *pixel != background {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    found.then(|| {
        CropBox::new(
            i64::from(min_x),
            i64::from(min_y),
            i64::from(max_x) + 1,
            i64::from(max_y) + 1,
        )
    })
}

/// Crops away uniform margins. `None` when the whole image is background.
pub fn trim_margins(image: &RgbaImage) -> Option<RgbaImage> {
    let bbox = content_bbox(image)?;
    debug!("content bounding box {}", bbox);
    Some(imageops::crop_imm(image, bbox.x(), bbox.y(), bbox.width(), bbox.height()).to_image())
}
