//! GIF frame de-optimization, cropping, and re-encoding.
//!
//! Optimized GIFs may store each frame as a delta: only the pixels that
//! changed since the previous frame, offset inside the logical screen.
//! [`FrameCompositor`] reconstructs the full visual content of every frame by
//! source-over blending each stored delta onto the running composite, so the
//! frames can be cropped independently and re-encoded without ghosting.
use std::io::{Read, Write};

use gif::{ColorOutput, DecodeOptions, Decoder, DisposalMethod, Repeat};
use image::{RgbaImage, imageops};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::CropBox;

/// Speed/quality trade-off for the adaptive palette pass, 1 (best) to 30.
const QUANTIZE_SPEED: i32 = 10;

/// Fallback for frames that carry no delay of their own.
const DEFAULT_FRAME_DURATION_MS: u32 = 100;

/// A fully-reconstructed animation frame and its display duration.
pub struct ComposedFrame {
    pub image: RgbaImage,
    pub duration_ms: u32,
}

/// Lazy, finite, non-restartable sequence of composited frames.
///
/// Yields one [`ComposedFrame`] per stored frame and terminates when the
/// decoder runs past the last frame; that is the normal end of the sequence,
/// not an error.
pub struct FrameCompositor<R: Read> {
    decoder: Decoder<R>,
    canvas: RgbaImage,
}

impl<R: Read> FrameCompositor<R> {
    /// Wraps a decoder configured for [`ColorOutput::RGBA`] output.
    pub fn new(decoder: Decoder<R>) -> Self {
        let canvas = RgbaImage::new(u32::from(decoder.width()), u32::from(decoder.height()));
        Self { decoder, canvas }
    }
}

impl<R: Read> Iterator for FrameCompositor<R> {
    type Item = Result<ComposedFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = match self.decoder.read_next_frame() {
            Ok(Some(frame)) => frame,
            Ok(None) => return None,
            Err(e) => return Some(Err(e.into())),
        };

        let mut duration_ms = u32::from(frame.delay) * 10;
        if duration_ms == 0 {
            duration_ms = DEFAULT_FRAME_DURATION_MS;
        }

        // The decoder yields RGBA for the frame's own sub-rectangle only.
        let patch = match RgbaImage::from_raw(
            u32::from(frame.width),
            u32::from(frame.height),
            frame.buffer.to_vec(),
        ) {
            Some(patch) => patch,
            None => {
                return Some(Err(Error::Processing(
                    "frame buffer does not match its declared dimensions".to_string(),
                )));
            }
        };

        // Source-over blend onto the running composite. For the first frame
        // the canvas is fully transparent, so this is the frame itself.
        imageops::overlay(
            &mut self.canvas,
            &patch,
            i64::from(frame.left),
            i64::from(frame.top),
        );

        Some(Ok(ComposedFrame {
            image: self.canvas.clone(),
            duration_ms,
        }))
    }
}

/// An animation after compositing and cropping, ready to re-encode.
pub struct CroppedAnimation {
    pub frames: Vec<ComposedFrame>,
    pub repeat: Repeat,
    pub width: u16,
    pub height: u16,
}

/// Decodes `input`, reconstructs every full frame, and crops each one to
/// `crop`.
///
/// Fails with [`Error::OutOfBounds`] before any frame is read when the box
/// is not fully contained in the logical screen, or is degenerate.
pub fn crop_frames<R: Read>(input: R, crop: CropBox) -> Result<CroppedAnimation> {
    let mut options = DecodeOptions::new();
    options.set_color_output(ColorOutput::RGBA);
    let decoder = options.read_info(input)?;

    let width = u32::from(decoder.width());
    let height = u32::from(decoder.height());
    crop.validate(width, height)?;

    let repeat = decoder.repeat();
    debug!(
        "source {}x{}, crop {}, repeat {:?}",
        width, height, crop, repeat
    );

    let mut frames = Vec::new();
    for composed in FrameCompositor::new(decoder) {
        let composed = composed?;
        let image = imageops::crop_imm(
            &composed.image,
            crop.x(),
            crop.y(),
            crop.width(),
            crop.height(),
        )
        .to_image();
        frames.push(ComposedFrame {
            image,
            duration_ms: composed.duration_ms,
        });
    }
    debug!("composited {} frames", frames.len());

    Ok(CroppedAnimation {
        frames,
        repeat,
        width: crop.width() as u16,
        height: crop.height() as u16,
    })
}

/// Re-encodes cropped frames as an indexed-color GIF.
///
/// Each frame is quantized to its own adaptive palette and tagged with
/// [`DisposalMethod::Background`] so renderers clear the canvas between the
/// now fully-composited frames. Per-frame delays and the repeat count are
/// written through unchanged.
pub fn write_gif<W: Write>(output: W, animation: &CroppedAnimation) -> Result<()> {
    let mut encoder = gif::Encoder::new(output, animation.width, animation.height, &[])?;
    encoder.set_repeat(animation.repeat)?;

    for frame in &animation.frames {
        let mut pixels = frame.image.clone().into_raw();
        let mut encoded =
            gif::Frame::from_rgba_speed(animation.width, animation.height, &mut pixels, QUANTIZE_SPEED);
        encoded.delay = (frame.duration_ms / 10) as u16;
        encoded.dispose = DisposalMethod::Background;
        encoder.write_frame(&encoded)?;
    }
    Ok(())
}
