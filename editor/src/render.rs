//! Rendering: turns editor state into a flat draw list.
//!
//! The host owns the actual surface (a window canvas, or an image buffer in
//! the preview command) and replays the [`Scene`] in order. Coordinates are
//! image space; the host applies the camera transform itself. Widths are
//! pre-divided by the zoom so borders come out one device pixel wide.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::Rect;
use crate::consts::{BOX_STROKE, SELECTED_STROKE};
use crate::engine::EditorCore;
use crate::hit::{control_points, render_rect};

/// One primitive, in image-space coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawItem {
    /// Outline `rect` with a `width`-wide stroke in `color` (CSS hex).
    StrokeRect { rect: Rect, color: &'static str, width: f64 },
    FillRect { rect: Rect, color: &'static str },
}

/// Everything to draw for one frame, bottom first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    /// Border width in image units.
    pub stroke_width: f64,
    pub items: Vec<DrawItem>,
}

impl Scene {
    /// Number of box outlines in the scene.
    #[must_use]
    pub fn outline_count(&self) -> usize {
        self.items.iter().filter(|item| matches!(item, DrawItem::StrokeRect { .. })).count()
    }
}

/// Build the draw list for the current editor state.
///
/// Boxes are outlined in index order. The selected box is outlined in the
/// highlight color and its eight handle squares are drawn last, on top of
/// every outline.
#[must_use]
pub fn scene(core: &EditorCore) -> Scene {
    let stroke_width = core.stroke_width();
    let selected = core.selection();

    let mut items: Vec<DrawItem> = core
        .boxes()
        .iter()
        .enumerate()
        .map(|(index, b)| DrawItem::StrokeRect {
            rect: render_rect(b),
            color: if Some(index) == selected { SELECTED_STROKE } else { BOX_STROKE },
            width: stroke_width,
        })
        .collect();

    if let Some(b) = core.selected_box() {
        let handle_size = core.handle_size();
        items.extend(control_points(&render_rect(&b)).into_iter().map(|(_, center)| DrawItem::FillRect {
            rect: Rect::square_around(center, handle_size),
            color: SELECTED_STROKE,
        }));
    }

    Scene { stroke_width, items }
}
