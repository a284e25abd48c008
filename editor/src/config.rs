//! Editor tunables.
//!
//! Defaults come from [`crate::consts`]. Hosts override individual fields,
//! typically from environment variables, before constructing an editor.

use std::time::Duration;

use crate::consts::{
    HANDLE_SIZE_PX, MIN_VISIBLE_PIXELS, MIN_ZOOM, MOVE_CURSOR_INSET_PX, REDRAW_DEBOUNCE_MS, ZOOM_IN_FACTOR,
    ZOOM_OUT_FACTOR,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Control-point hit square side, in screen pixels.
    pub handle_size_px: f64,
    /// Move-cursor inset from the box border, in screen pixels.
    pub move_cursor_inset_px: f64,
    pub min_zoom: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    /// Fewest image pixels allowed across the shorter image side at max zoom.
    pub min_visible_pixels: f64,
    /// Quiet period after the last zoom step before the border redraw fires.
    pub redraw_delay: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            handle_size_px: HANDLE_SIZE_PX,
            move_cursor_inset_px: MOVE_CURSOR_INSET_PX,
            min_zoom: MIN_ZOOM,
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
            min_visible_pixels: MIN_VISIBLE_PIXELS,
            redraw_delay: Duration::from_millis(REDRAW_DEBOUNCE_MS),
        }
    }
}
