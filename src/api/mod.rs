//! High-level, path-to-path entry points consumed by the binaries: crop an
//! animated GIF, build a bordered circular avatar, trim uniform margins.
//! Prefer these over the low-level `core` modules when embedding the crate.
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::{debug, info};

use crate::core::avatar::circle_with_border;
use crate::core::gif::{crop_frames, write_gif};
use crate::core::trim::trim_margins;
use crate::error::Result;
use crate::types::CropBox;

/// Crops the animated GIF at `input` to `crop` and writes the result to
/// `output`, preserving per-frame durations and the loop count.
///
/// The output file is created only once decoding, compositing, and cropping
/// have all succeeded, so a failed run leaves no partial output behind.
pub fn crop_gif_file(input: &Path, output: &Path, crop: CropBox) -> Result<()> {
    let reader = BufReader::new(File::open(input)?);
    let animation = crop_frames(reader, crop)?;
    info!(
        "cropped {} frames to {}x{}",
        animation.frames.len(),
        animation.width,
        animation.height
    );

    let mut writer = BufWriter::new(File::create(output)?);
    write_gif(&mut writer, &animation)
}

/// Crops the image at `input` to a circle with a white border of `border`
/// pixels and writes it to `output`. The output format follows the file
/// extension.
pub fn avatar_file(input: &Path, output: &Path, border: u32) -> Result<()> {
    let image = image::open(input)?.to_rgba8();
    let avatar = circle_with_border(&image, border);
    info!(
        "avatar canvas {}x{}",
        avatar.width(),
        avatar.height()
    );
    avatar.save(output)?;
    Ok(())
}

/// Trims uniform-color margins from the image at `input` and writes the
/// result to `output`.
///
/// Returns `Ok(true)` when a trimmed image was written, `Ok(false)` when the
/// input is uniformly the background color and no output was produced.
pub fn trim_file(input: &Path, output: &Path) -> Result<bool> {
    let image = image::open(input)?.to_rgba8();
    match trim_margins(&image) {
        Some(trimmed) => {
            info!(
                "trimmed {}x{} to {}x{}",
                image.width(),
                image.height(),
                trimmed.width(),
                trimmed.height()
            );
            trimmed.save(output)?;
            Ok(true)
        }
        None => {
            debug!("image is uniformly the background color; nothing written");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;
    use crate::error::Error;

    fn sample_gif(path: &Path) {
        let mut pixels = vec![0u8; 30 * 30 * 4];
        for pixel in pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[180, 40, 40, 255]);
        }
        let file = File::create(path).unwrap();
        let mut encoder = gif::Encoder::new(file, 30, 30, &[]).unwrap();
        let frame = gif::Frame::from_rgba_speed(30, 30, &mut pixels, 10);
        encoder.write_frame(&frame).unwrap();
    }

    #[test]
    fn out_of_bounds_crop_writes_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.gif");
        let output = dir.path().join("output.gif");
        sample_gif(&input);

        let result = crop_gif_file(&input, &output, CropBox::new(0, 0, 100, 100));
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn crop_gif_file_writes_the_cropped_animation() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.gif");
        let output = dir.path().join("output.gif");
        sample_gif(&input);

        crop_gif_file(&input, &output, CropBox::new(5, 5, 25, 25)).unwrap();
        let decoded = image::open(&output).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (20, 20));
    }

    #[test]
    fn missing_input_is_a_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let result = crop_gif_file(
            &dir.path().join("absent.gif"),
            &dir.path().join("out.gif"),
            CropBox::new(0, 0, 10, 10),
        );
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn avatar_file_writes_a_bordered_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("output.png");
        RgbaImage::from_pixel(60, 40, Rgba([10, 120, 200, 255]))
            .save(&input)
            .unwrap();

        avatar_file(&input, &output, 10).unwrap();
        let avatar = image::open(&output).unwrap();
        assert_eq!((avatar.width(), avatar.height()), (60, 60));
    }

    #[test]
    fn trim_file_is_a_silent_no_op_on_uniform_images() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("output.png");
        RgbaImage::from_pixel(25, 25, Rgba([255, 255, 255, 255]))
            .save(&input)
            .unwrap();

        assert!(!trim_file(&input, &output).unwrap());
        assert!(!output.exists());
    }

    #[test]
    fn trim_file_crops_the_margins() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("output.png");
        let mut image = RgbaImage::from_pixel(40, 40, Rgba([255, 255, 255, 255]));
        for y in 10..30 {
            for x in 10..30 {
                image.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
        image.save(&input).unwrap();

        assert!(trim_file(&input, &output).unwrap());
        let trimmed = image::open(&output).unwrap();
        assert_eq!((trimmed.width(), trimmed.height()), (20, 20));
    }
}
