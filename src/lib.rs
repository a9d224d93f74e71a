#![doc = r#"
imgprep — small utilities for preparing web images.

Three independent tools, shipped as binaries and as a library:

- `crop-gif` — crop an animated GIF by a pixel box. Optimized GIFs store
  frames as deltas; the cropper composites every frame back to its full
  visual content first, crops, re-quantizes, and re-encodes with the
  original per-frame durations and loop count.
- `crop-avatar` — center square-crop a photo, mask it to the inscribed
  circle, and place it on a white canvas with a configurable border.
- `trim-image` — remove uniform-color margins, sampling the background
  color from the top-left pixel.

Quick start
-----------
```rust,no_run
use std::path::Path;
use imgprep::{CropBox, Result, avatar_file, crop_gif_file, trim_file};

fn main() -> Result<()> {
    crop_gif_file(
        Path::new("input.gif"),
        Path::new("cropped.gif"),
        CropBox::new(50, 50, 250, 250),
    )?;

    avatar_file(Path::new("photo.jpg"), Path::new("avatar.png"), 20)?;

    let written = trim_file(Path::new("render.gif"), Path::new("trimmed.gif"))?;
    if !written {
        // The input was uniformly the background color; nothing to trim.
    }
    Ok(())
}
```

In-memory processing
--------------------
The `core` modules operate on in-memory buffers when file paths are not the
right interface:

```rust
use image::RgbaImage;
use imgprep::core::avatar::circle_with_border;
use imgprep::core::trim::trim_margins;

let photo = RgbaImage::new(128, 96);
let avatar = circle_with_border(&photo, 10);
assert_eq!(avatar.width(), 96 + 2 * 10);
assert!(trim_margins(&photo).is_none());
```

Error handling
--------------
All public functions return [`Result`]; match on [`Error`] to handle
specific cases, e.g. a crop box outside the image bounds.

Useful modules
--------------
- [`api`] — high-level, path-to-path entry points.
- [`core`] — compositing, masking, and trimming primitives.
- [`types`] — shared value types (`CropBox`).
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use api::{avatar_file, crop_gif_file, trim_file};
pub use core::avatar::{DEFAULT_BORDER, circle_with_border};
pub use core::gif::{ComposedFrame, CroppedAnimation, FrameCompositor, crop_frames, write_gif};
pub use core::trim::{content_bbox, trim_margins};
pub use error::{Error, Result};
pub use types::CropBox;
