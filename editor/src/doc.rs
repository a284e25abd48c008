//! Document model: sprite boxes, box sets, image dimensions, manual edits.
//!
//! A [`SpriteBox`] is stored as two inclusive pixel corners. The engine only
//! normalizes corner order when a drag completes, so code reading a box that
//! may be mid-drag should go through [`SpriteBox::normalized`].
//!
//! [`BoxFields`] is the `x / y / width / height` view shown by the host's info
//! panel. It is the only path by which text input reaches a box, and it is
//! where invalid values are rejected.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

/// Ordered boxes for one image. Position in the vector is the box's identity.
pub type BoxSet = Vec<SpriteBox>;

/// An integer pixel coordinate in image space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box with inclusive corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteBox {
    pub top_left: PixelPos,
    pub bottom_right: PixelPos,
}

impl SpriteBox {
    #[must_use]
    pub fn new(top_left: PixelPos, bottom_right: PixelPos) -> Self {
        Self { top_left, bottom_right }
    }

    /// Build a box from its four inclusive edges.
    #[must_use]
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            top_left: PixelPos::new(left, top),
            bottom_right: PixelPos::new(right, bottom),
        }
    }

    #[must_use]
    pub fn left(&self) -> i32 {
        self.top_left.x
    }

    #[must_use]
    pub fn top(&self) -> i32 {
        self.top_left.y
    }

    #[must_use]
    pub fn right(&self) -> i32 {
        self.bottom_right.x
    }

    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.bottom_right.y
    }

    /// Inclusive width: `right - left + 1`.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.right() - self.left() + 1
    }

    /// Inclusive height: `bottom - top + 1`.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.bottom() - self.top() + 1
    }

    /// Whether `top_left <= bottom_right` componentwise.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.left() <= self.right() && self.top() <= self.bottom()
    }

    /// The same box with corners reordered so `top_left <= bottom_right`.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self::from_edges(
            self.left().min(self.right()),
            self.top().min(self.bottom()),
            self.left().max(self.right()),
            self.top().max(self.bottom()),
        )
    }

    /// The info-panel view of this box.
    #[must_use]
    pub fn fields(&self) -> BoxFields {
        BoxFields {
            x: i64::from(self.left()),
            y: i64::from(self.top()),
            width: i64::from(self.width()).abs(),
            height: i64::from(self.height()).abs(),
        }
    }
}

/// Pixel dimensions of the loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Largest valid x coordinate (`width - 1`), never negative.
    #[must_use]
    pub fn max_x(&self) -> i32 {
        last_index(self.width)
    }

    /// Largest valid y coordinate (`height - 1`), never negative.
    #[must_use]
    pub fn max_y(&self) -> i32 {
        last_index(self.height)
    }

    /// Clamp a position into `[0, width-1] × [0, height-1]`.
    #[must_use]
    pub fn clamp(&self, pos: PixelPos) -> PixelPos {
        PixelPos::new(pos.x.clamp(0, self.max_x()), pos.y.clamp(0, self.max_y()))
    }
}

fn last_index(len: u32) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX).saturating_sub(1).max(0)
}

// =============================================================================
// MANUAL EDITS
// =============================================================================

/// Errors produced when a manual box edit is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// A field did not parse as an integer.
    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    /// Width or height was zero or negative.
    #[error("box would be empty ({width}x{height})")]
    Degenerate { width: i64, height: i64 },

    /// The box would extend past the image.
    #[error("box {width}x{height} at ({x}, {y}) does not fit in {image_width}x{image_height}")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        image_width: u32,
        image_height: u32,
    },

    /// There is no selected box to edit.
    #[error("no box is selected")]
    NoSelection,

    /// A drag is in progress.
    #[error("cannot edit a box while it is being dragged")]
    Dragging,
}

/// Top-left corner and inclusive size of a box, as edited in the info panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoxFields {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl BoxFields {
    /// Parse the four text fields. Blank fields read as zero.
    pub fn parse(x: &str, y: &str, width: &str, height: &str) -> Result<Self, EditError> {
        Ok(Self {
            x: parse_field("x", x)?,
            y: parse_field("y", y)?,
            width: parse_field("width", width)?,
            height: parse_field("height", height)?,
        })
    }

    /// Convert to a box, rejecting empty boxes and boxes that leave the image.
    pub fn to_box(&self, image: ImageSize) -> Result<SpriteBox, EditError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(EditError::Degenerate { width: self.width, height: self.height });
        }

        let fits_x = self.x >= 0 && self.x.checked_add(self.width).is_some_and(|r| r <= i64::from(image.width));
        let fits_y = self.y >= 0 && self.y.checked_add(self.height).is_some_and(|b| b <= i64::from(image.height));
        let out_of_bounds = || EditError::OutOfBounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            image_width: image.width,
            image_height: image.height,
        };
        if !fits_x || !fits_y {
            return Err(out_of_bounds());
        }

        let left = i32::try_from(self.x).map_err(|_| out_of_bounds())?;
        let top = i32::try_from(self.y).map_err(|_| out_of_bounds())?;
        let right = i32::try_from(self.x + self.width - 1).map_err(|_| out_of_bounds())?;
        let bottom = i32::try_from(self.y + self.height - 1).map_err(|_| out_of_bounds())?;
        Ok(SpriteBox::from_edges(left, top, right, bottom))
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<i64, EditError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| EditError::NotANumber { field, value: raw.to_string() })
}
