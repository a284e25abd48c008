//! Shared numeric constants for the editor crate.

// ── Hit-testing ─────────────────────────────────────────────────

/// Side of a control-point hit square, in screen pixels.
pub const HANDLE_SIZE_PX: f64 = 10.0;

/// Inset of the "move" cursor region from the box border, in screen pixels.
pub const MOVE_CURSOR_INSET_PX: f64 = 5.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Lower zoom bound; 1.0 shows the image at its fitted size.
pub const MIN_ZOOM: f64 = 1.0;

/// Multiplier applied per zoom-in step.
pub const ZOOM_IN_FACTOR: f64 = 1.1;

/// Multiplier applied per zoom-out step.
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// Fewest image pixels allowed across the view's shorter side at max zoom.
pub const MIN_VISIBLE_PIXELS: f64 = 10.0;

// ── Rendering ───────────────────────────────────────────────────

/// Delay between the last zoom step and the border-accurate redraw.
pub const REDRAW_DEBOUNCE_MS: u64 = 100;

/// Stroke color for unselected boxes.
pub const BOX_STROKE: &str = "#FF0000";

/// Stroke and handle fill color for the selected box.
pub const SELECTED_STROKE: &str = "#00FF00";
