#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::doc::ImageSize;

/// A point in either screen or image space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Floating-point rectangle in image space. Edges are inclusive for containment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A square of side `size` centered on `center`.
    #[must_use]
    pub fn square_around(center: Point, size: f64) -> Self {
        Self::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Shrink by `margin` on every side. Returns `None` when nothing is left.
    #[must_use]
    pub fn inset(&self, margin: f64) -> Option<Rect> {
        let width = self.width - 2.0 * margin;
        let height = self.height - 2.0 * margin;
        (width > 0.0 && height > 0.0).then(|| Rect::new(self.x + margin, self.y + margin, width, height))
    }
}

/// Allowed zoom range for one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
}

impl ZoomLimits {
    /// `max` is chosen so at least `min_visible_pixels` image pixels always span
    /// the shorter image side. Small images collapse to `[min, min]`.
    #[must_use]
    pub fn for_image(image: ImageSize, config: &EditorConfig) -> Self {
        let shorter = f64::from(image.width.min(image.height));
        let max = (shorter / config.min_visible_pixels).max(config.min_zoom);
        Self { min: config.min_zoom, max }
    }

    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

/// View transform: `screen = image * zoom + pan`.
///
/// `pan_x` / `pan_y` are in screen pixels.
/// `zoom` is a scale factor (1.0 = fitted image).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point to image coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert an image-space point to screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a screen-space distance (pixels) to image-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Border width in image units that renders as one device pixel.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.screen_dist_to_world(1.0)
    }

    /// Change zoom while keeping `anchor` (image space) at the same screen position.
    pub fn zoom_about(&mut self, anchor: Point, zoom: f64) {
        let screen = self.world_to_screen(anchor);
        self.zoom = zoom;
        self.pan_x = screen.x - anchor.x * zoom;
        self.pan_y = screen.y - anchor.y * zoom;
    }
}
