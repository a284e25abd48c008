//! Handle-specific drag rules.
//!
//! Deltas are always measured from the pointer position at drag start and
//! applied to the box as it was at drag start, so repeated moves never drift.
//! Every result lies inside `[0, width-1] × [0, height-1]`.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::camera::Point;
use crate::doc::{ImageSize, SpriteBox};
use crate::hit::{HitPart, ResizeAnchor};

/// Compute the box produced by dragging `part` of `start` by `delta` image units.
#[must_use]
pub fn drag_box(part: HitPart, start: &SpriteBox, delta: Point, image: ImageSize) -> SpriteBox {
    match part {
        HitPart::Body => move_box(start, delta, image),
        HitPart::ResizeHandle(anchor) => resize_box(anchor, start, delta, image),
    }
}

/// Translate the whole box. When the raw translation would push the trailing
/// edge past the image, the trailing edge is pinned to the boundary instead, so
/// width and height never change.
#[must_use]
pub fn move_box(start: &SpriteBox, delta: Point, image: ImageSize) -> SpriteBox {
    let (dx, dy) = pixel_delta(delta);
    let (left, right) = move_span(i64::from(start.left()), i64::from(start.right()), dx, i64::from(image.max_x()));
    let (top, bottom) = move_span(i64::from(start.top()), i64::from(start.bottom()), dy, i64::from(image.max_y()));
    clamp_to_image(&edges(left, top, right, bottom), image)
}

/// Move only the edges named by `anchor`. A moving edge is clamped to the image
/// and cannot cross the opposite, fixed edge.
#[must_use]
pub fn resize_box(anchor: ResizeAnchor, start: &SpriteBox, delta: Point, image: ImageSize) -> SpriteBox {
    let (dx, dy) = pixel_delta(delta);
    let max_x = i64::from(image.max_x());
    let max_y = i64::from(image.max_y());

    let mut left = i64::from(start.left());
    let mut top = i64::from(start.top());
    let mut right = i64::from(start.right());
    let mut bottom = i64::from(start.bottom());

    if anchor.moves_left() {
        left = (left + dx).clamp(0, max_x).min(right);
    }
    if anchor.moves_right() {
        right = (right + dx).clamp(0, max_x).max(left);
    }
    if anchor.moves_top() {
        top = (top + dy).clamp(0, max_y).min(bottom);
    }
    if anchor.moves_bottom() {
        bottom = (bottom + dy).clamp(0, max_y).max(top);
    }

    clamp_to_image(&edges(left, top, right, bottom), image)
}

/// Clamp every coordinate into the image. A no-op on in-bounds boxes.
#[must_use]
pub fn clamp_to_image(b: &SpriteBox, image: ImageSize) -> SpriteBox {
    SpriteBox::new(image.clamp(b.top_left), image.clamp(b.bottom_right))
}

fn move_span(lead: i64, trail: i64, delta: i64, max: i64) -> (i64, i64) {
    let span = trail - lead;
    let mut new_lead = lead + delta;
    if new_lead + span > max {
        new_lead = max - span;
    }
    new_lead = new_lead.max(0);
    (new_lead, new_lead + span)
}

/// Whole-pixel delta. Fractions floor, so the edge lands on the pixel under the pointer.
#[allow(clippy::cast_possible_truncation)]
fn pixel_delta(delta: Point) -> (i64, i64) {
    const LIMIT: f64 = 1e12;
    let whole = |v: f64| v.floor().clamp(-LIMIT, LIMIT) as i64;
    (whole(delta.x), whole(delta.y))
}

#[allow(clippy::cast_possible_truncation)]
fn edges(left: i64, top: i64, right: i64, bottom: i64) -> SpriteBox {
    let narrow = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    SpriteBox::from_edges(narrow(left), narrow(top), narrow(right), narrow(bottom))
}
