//! Shared value types used across the utilities.
//! Currently this is the `CropBox` rectangle consumed by the GIF cropper
//! and produced by the margin-trim bounding-box scan.
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A pixel crop rectangle in `(left, top, right, bottom)` form.
///
/// Coordinates are signed so that out-of-range CLI input can be carried here
/// verbatim and rejected by [`CropBox::validate`] with the offending values
/// intact in the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropBox {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl CropBox {
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The full-image box for a `width x height` source (a no-op crop).
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, i64::from(width), i64::from(height))
    }

    /// Checks containment within `(0, 0)-(width, height)`.
    ///
    /// Degenerate boxes (`right <= left` or `bottom <= top`) are rejected
    /// with the same [`Error::OutOfBounds`] as boxes that spill outside the
    /// image.
    pub fn validate(&self, width: u32, height: u32) -> Result<()> {
        let contained = self.left >= 0
            && self.top >= 0
            && self.right <= i64::from(width)
            && self.bottom <= i64::from(height)
            && self.left < self.right
            && self.top < self.bottom;
        if contained {
            Ok(())
        } else {
            Err(Error::out_of_bounds(*self, width, height))
        }
    }

    /// Left edge as an unsigned offset. Call after [`CropBox::validate`].
    pub fn x(&self) -> u32 {
        self.left as u32
    }

    /// Top edge as an unsigned offset. Call after [`CropBox::validate`].
    pub fn y(&self) -> u32 {
        self.top as u32
    }

    pub fn width(&self) -> u32 {
        (self.right - self.left) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top) as u32
    }
}

impl std::fmt::Display for CropBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_contained_boxes() {
        assert!(CropBox::new(0, 0, 100, 80).validate(100, 80).is_ok());
        assert!(CropBox::new(20, 20, 80, 60).validate(100, 80).is_ok());
        assert!(CropBox::new(99, 79, 100, 80).validate(100, 80).is_ok());
    }

    #[test]
    fn rejects_boxes_outside_the_image() {
        for bad in [
            CropBox::new(-1, 0, 50, 50),
            CropBox::new(0, -1, 50, 50),
            CropBox::new(0, 0, 101, 50),
            CropBox::new(0, 0, 50, 81),
        ] {
            assert!(matches!(
                bad.validate(100, 80),
                Err(Error::OutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn rejects_degenerate_boxes() {
        for bad in [
            CropBox::new(30, 10, 30, 50),
            CropBox::new(40, 10, 30, 50),
            CropBox::new(10, 30, 50, 30),
            CropBox::new(10, 40, 50, 30),
        ] {
            assert!(matches!(
                bad.validate(100, 80),
                Err(Error::OutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn full_box_matches_dimensions() {
        let full = CropBox::full(100, 80);
        assert!(full.validate(100, 80).is_ok());
        assert_eq!(full.width(), 100);
        assert_eq!(full.height(), 80);
    }
}
