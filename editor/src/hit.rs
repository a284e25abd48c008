//! Control points, hit-testing, and cursor hints.
//!
//! All functions here are pure. Sizes that must look constant on screen are
//! passed in already divided by the zoom factor, so a 10 px handle square is
//! `10 / zoom` image units wide.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Point, Rect};
use crate::doc::SpriteBox;

/// Which part of a box was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// The rectangle interior; dragging moves the whole box.
    Body,
    ResizeHandle(ResizeAnchor),
}

/// Anchor position for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    /// Handles in hit-test order: corners first, then edge midpoints.
    pub const HIT_ORDER: [ResizeAnchor; 8] = [
        ResizeAnchor::Nw,
        ResizeAnchor::Ne,
        ResizeAnchor::Sw,
        ResizeAnchor::Se,
        ResizeAnchor::N,
        ResizeAnchor::S,
        ResizeAnchor::W,
        ResizeAnchor::E,
    ];

    /// Whether dragging this handle moves the left edge.
    #[must_use]
    pub fn moves_left(self) -> bool {
        match self {
            Self::W | Self::Nw | Self::Sw => true,
            Self::N | Self::Ne | Self::E | Self::Se | Self::S => false,
        }
    }

    /// Whether dragging this handle moves the right edge.
    #[must_use]
    pub fn moves_right(self) -> bool {
        match self {
            Self::E | Self::Ne | Self::Se => true,
            Self::N | Self::S | Self::Sw | Self::W | Self::Nw => false,
        }
    }

    /// Whether dragging this handle moves the top edge.
    #[must_use]
    pub fn moves_top(self) -> bool {
        match self {
            Self::N | Self::Ne | Self::Nw => true,
            Self::E | Self::Se | Self::S | Self::Sw | Self::W => false,
        }
    }

    /// Whether dragging this handle moves the bottom edge.
    #[must_use]
    pub fn moves_bottom(self) -> bool {
        match self {
            Self::S | Self::Se | Self::Sw => true,
            Self::N | Self::Ne | Self::E | Self::W | Self::Nw => false,
        }
    }

    /// Where this handle sits on `rect`.
    #[must_use]
    pub fn position(self, rect: &Rect) -> Point {
        let center = rect.center();
        match self {
            Self::Nw => Point::new(rect.x, rect.y),
            Self::Ne => Point::new(rect.right(), rect.y),
            Self::Sw => Point::new(rect.x, rect.bottom()),
            Self::Se => Point::new(rect.right(), rect.bottom()),
            Self::N => Point::new(center.x, rect.y),
            Self::S => Point::new(center.x, rect.bottom()),
            Self::W => Point::new(rect.x, center.y),
            Self::E => Point::new(rect.right(), center.y),
        }
    }

    /// Cursor shown while hovering this handle.
    #[must_use]
    pub fn cursor(self) -> CursorHint {
        match self {
            Self::Nw | Self::Se => CursorHint::ResizeNwse,
            Self::Ne | Self::Sw => CursorHint::ResizeNesw,
            Self::N | Self::S => CursorHint::ResizeNs,
            Self::E | Self::W => CursorHint::ResizeEw,
        }
    }
}

/// Result of a hit test against a box set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// Index of the hit box in its box set.
    pub index: usize,
    pub part: HitPart,
}

/// Pointer cursor the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    Move,
    ResizeNwse,
    ResizeNesw,
    ResizeNs,
    ResizeEw,
}

impl CursorHint {
    /// CSS cursor keyword for this hint.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Move => "move",
            Self::ResizeNwse => "nwse-resize",
            Self::ResizeNesw => "nesw-resize",
            Self::ResizeNs => "ns-resize",
            Self::ResizeEw => "ew-resize",
        }
    }
}

/// The drawn rectangle for a box: one unit larger than the raw corner delta,
/// so an inclusive box covers exactly its pixels.
#[must_use]
pub fn render_rect(b: &SpriteBox) -> Rect {
    Rect::new(
        f64::from(b.left()),
        f64::from(b.top()),
        f64::from(b.right() - b.left() + 1),
        f64::from(b.bottom() - b.top() + 1),
    )
}

/// The eight handle positions of `rect`, in hit-test order.
#[must_use]
pub fn control_points(rect: &Rect) -> [(ResizeAnchor, Point); 8] {
    ResizeAnchor::HIT_ORDER.map(|anchor| (anchor, anchor.position(rect)))
}

/// Hit-test a single rectangle. Handle squares win over the body.
#[must_use]
pub fn hit_rect(pt: Point, rect: &Rect, handle_size: f64) -> Option<HitPart> {
    for (anchor, center) in control_points(rect) {
        if Rect::square_around(center, handle_size).contains(pt) {
            return Some(HitPart::ResizeHandle(anchor));
        }
    }
    rect.contains(pt).then_some(HitPart::Body)
}

/// Find what is under `pt`, checking the selected box first, then every box in
/// index order. The first hit wins.
#[must_use]
pub fn hit_test(pt: Point, boxes: &[SpriteBox], selected: Option<usize>, handle_size: f64) -> Option<Hit> {
    let hit_at = |index: usize, b: &SpriteBox| hit_rect(pt, &render_rect(b), handle_size).map(|part| Hit { index, part });

    selected
        .and_then(|index| hit_at(index, boxes.get(index)?))
        .or_else(|| {
            boxes
                .iter()
                .enumerate()
                .filter(|(index, _)| Some(*index) != selected)
                .find_map(|(index, b)| hit_at(index, b))
        })
}

/// Cursor for hovering `pt` over the selected box.
///
/// Handles map to their resize cursor. The move cursor only shows inside the
/// rectangle shrunk by `inset`, leaving a band near the border that keeps the
/// default arrow.
#[must_use]
pub fn cursor_hint(pt: Point, selected: Option<&SpriteBox>, handle_size: f64, inset: f64) -> CursorHint {
    let Some(b) = selected else {
        return CursorHint::Default;
    };
    let rect = render_rect(b);

    for (anchor, center) in control_points(&rect) {
        if Rect::square_around(center, handle_size).contains(pt) {
            return anchor.cursor();
        }
    }

    match rect.inset(inset) {
        Some(inner) if inner.contains(pt) => CursorHint::Move,
        _ => CursorHint::Default,
    }
}
