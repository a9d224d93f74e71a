//! Circular avatar compositing: center square crop, inscribed-circle mask,
//! and a solid white border.
use image::{GrayImage, Luma, Rgba, RgbaImage, imageops};
use imageproc::drawing::draw_filled_ellipse_mut;
use tracing::debug;

pub const DEFAULT_BORDER: u32 = 10;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Center-crops to a `min(width, height)` square.
/// Odd size differences leave the extra pixel on the bottom/right.
fn center_square(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    let min_dim = width.min(height);
    let left = (width - min_dim) / 2;
    let top = (height - min_dim) / 2;
    imageops::crop_imm(image, left, top, min_dim, min_dim).to_image()
}

/// Single-channel mask selecting the inscribed circle of a `size` square:
/// 255 inside the circle, 0 outside.
fn circle_mask(size: u32) -> GrayImage {
    let mut mask = GrayImage::new(size, size);
    let center = (size / 2) as i32;
    let radius = (size / 2) as i32;
    draw_filled_ellipse_mut(&mut mask, (center, center), radius, radius, Luma([255u8]));
    mask
}

/// Applies `mask` as an alpha stencil: colors are kept, each pixel's alpha is
/// scaled by the mask weight. Mask 0 yields fully transparent pixels.
fn apply_stencil(image: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    let mut out = image.clone();
    for (pixel, weight) in out.pixels_mut().zip(mask.pixels()) {
        pixel[3] = (u16::from(pixel[3]) * u16::from(weight[0]) / 255) as u8;
    }
    out
}

/// Produces the bordered circular avatar: the circular cutout of the center
/// square, pasted onto an opaque white canvas of `min_dim + 2 * border` with
/// its own alpha as the paste mask.
pub fn circle_with_border(image: &RgbaImage, border: u32) -> RgbaImage {
    let square = center_square(image);
    let min_dim = square.width();
    debug!("square crop {}x{}, border {}", min_dim, min_dim, border);

    let cutout = apply_stencil(&square, &circle_mask(min_dim));

    let final_size = min_dim + 2 * border;
    let mut canvas = RgbaImage::from_pixel(final_size, final_size, WHITE);
    imageops::overlay(&mut canvas, &cutout, i64::from(border), i64::from(border));
    canvas
}
