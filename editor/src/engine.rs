use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::camera::{Camera, Point, ZoomLimits};
use crate::config::EditorConfig;
use crate::doc::{BoxFields, BoxSet, EditError, ImageSize, PixelPos, SpriteBox};
use crate::drag::{clamp_to_image, drag_box};
use crate::hit::{CursorHint, cursor_hint, hit_test, render_rect};
use crate::input::{Button, ButtonsHeld, DragAnchor, InputState, Key, Modifiers, UiState, ZoomDirection};
use crate::timer::{DelayedTask, TaskHandle};
use crate::undo::UndoStack;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Change events returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The live box set changed.
    BoxesChanged(BoxSet),
    SelectionChanged(Option<usize>),
    /// Whether unsaved changes exist flipped.
    DirtyChanged(bool),
    SetCursor(CursorHint),
    /// Pointer position in whole image pixels, clamped to the image.
    PointerPixel(PixelPos),
    /// Zoom or pan changed; the host should update its view transform now.
    ViewChanged(Camera),
    /// A border-accurate redraw is due after `delay` unless superseded.
    RedrawScheduled { handle: TaskHandle, delay: Duration },
    /// A manual edit was refused; `current` is the box to show again.
    EditRejected { error: EditError, current: Option<SpriteBox> },
    /// Edits were committed as the new baseline and should be persisted.
    Saved(BoxSet),
    RenderNeeded,
}

/// Core editor state: all logic that doesn't depend on a host toolkit.
///
/// Separated from [`Editor`] so it can be driven and tested without a box
/// store or subscribers.
#[derive(Debug, Clone)]
pub struct EditorCore {
    config: EditorConfig,
    image_path: Option<PathBuf>,
    image: ImageSize,
    boxes: BoxSet,
    original: BoxSet,
    ui: UiState,
    input: InputState,
    camera: Camera,
    zoom_limits: ZoomLimits,
    undo: UndoStack,
    redraw: DelayedTask,
    cursor: CursorHint,
    dirty: bool,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorCore {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            image_path: None,
            image: ImageSize::default(),
            boxes: BoxSet::new(),
            original: BoxSet::new(),
            ui: UiState::default(),
            input: InputState::Idle,
            camera: Camera::default(),
            zoom_limits: ZoomLimits { min: config.min_zoom, max: config.min_zoom },
            undo: UndoStack::new(),
            redraw: DelayedTask::new(config.redraw_delay),
            cursor: CursorHint::Default,
            dirty: false,
        }
    }

    // --- Image lifecycle ---

    /// Show a new image with its boxes. Loading the path that is already
    /// shown does nothing, so unsaved edits survive re-selecting the same file.
    /// Incoming boxes are normalized and clamped into the image.
    pub fn load_image(&mut self, path: impl AsRef<Path>, image: ImageSize, boxes: BoxSet) -> Vec<Action> {
        let path = path.as_ref();
        if self.image_path.as_deref() == Some(path) {
            return Vec::new();
        }
        let fitted: BoxSet = boxes.iter().map(|b| clamp_to_image(&b.normalized(), image)).collect();
        let clamped = fitted.iter().zip(&boxes).filter(|(a, b)| a != b).count();
        if clamped > 0 {
            tracing::warn!(path = %path.display(), clamped, "fitted loaded boxes into the image");
        }
        let boxes = fitted;
        tracing::debug!(path = %path.display(), boxes = boxes.len(), "loading image into editor");

        self.image_path = Some(path.to_path_buf());
        self.image = image;
        self.original.clone_from(&boxes);
        self.boxes = boxes;
        self.ui.selected = None;
        self.input = InputState::Idle;
        self.undo.clear();
        self.redraw.cancel();
        self.camera = Camera::default();
        self.zoom_limits = ZoomLimits::for_image(image, &self.config);

        let mut actions = vec![
            Action::BoxesChanged(self.boxes.clone()),
            Action::SelectionChanged(None),
            Action::ViewChanged(self.camera),
        ];
        self.sync_dirty(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Make the live boxes the new baseline and clear the undo history.
    pub fn save(&mut self) -> Vec<Action> {
        if let InputState::Dragging { index, .. } = self.input {
            self.input = InputState::Idle;
            if let Some(b) = self.boxes.get_mut(index) {
                *b = b.normalized();
            }
        }
        self.original.clone_from(&self.boxes);
        self.undo.clear();
        tracing::debug!(boxes = self.boxes.len(), "saved box edits");

        let mut actions = vec![Action::Saved(self.boxes.clone())];
        self.sync_dirty(&mut actions);
        actions
    }

    /// Throw away all edits since the last load or save.
    pub fn cancel(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        self.boxes.clone_from(&self.original);
        self.undo.clear();
        tracing::debug!(boxes = self.boxes.len(), "discarded box edits");

        let mut actions = vec![Action::BoxesChanged(self.boxes.clone())];
        self.drop_stale_selection(&mut actions);
        self.sync_dirty(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Select box `index` directly, as a host-side list would. Out-of-range
    /// indices and calls during a drag are ignored.
    pub fn select_box(&mut self, index: Option<usize>) -> Vec<Action> {
        if self.input.is_dragging() || index.is_some_and(|i| i >= self.boxes.len()) {
            return Vec::new();
        }
        let mut actions = Vec::new();
        self.set_selection(index, &mut actions);
        if !actions.is_empty() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Pointer input ---

    /// Pick the handle or body under `pt` and start dragging it, or clear the
    /// selection when nothing is hit. The selected box is tested first so it
    /// stays grabbable where boxes overlap.
    pub fn pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || self.input.is_dragging() {
            return Vec::new();
        }

        let mut actions = Vec::new();
        let hit = hit_test(pt, &self.boxes, self.ui.selected, self.handle_size());
        match hit {
            Some(hit) => {
                let start = self.boxes[hit.index];
                self.input = InputState::Dragging {
                    index: hit.index,
                    part: hit.part,
                    anchor: DragAnchor { pointer: pt, rect: render_rect(&start), start },
                };
                self.set_selection(Some(hit.index), &mut actions);
            }
            None => {
                self.input = InputState::Idle;
                self.set_selection(None, &mut actions);
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Update the dragged box, or the hover cursor when not dragging.
    pub fn pointer_move(&mut self, pt: Point, buttons: ButtonsHeld) -> Vec<Action> {
        let mut actions = vec![Action::PointerPixel(self.pointer_pixel(pt))];

        match self.input {
            InputState::Dragging { index, part, anchor } => {
                if !buttons.primary {
                    return actions;
                }
                let moved = drag_box(part, &anchor.start, pt.delta_from(anchor.pointer), self.image);
                if self.boxes.get(index).is_some_and(|b| *b != moved) {
                    self.boxes[index] = moved;
                    actions.push(Action::BoxesChanged(self.boxes.clone()));
                    self.sync_dirty(&mut actions);
                    actions.push(Action::RenderNeeded);
                }
            }
            InputState::Idle => {
                let selected = self.selected_box();
                let cursor = cursor_hint(
                    pt,
                    selected.as_ref(),
                    self.handle_size(),
                    self.camera.screen_dist_to_world(self.config.move_cursor_inset_px),
                );
                if cursor != self.cursor {
                    self.cursor = cursor;
                    actions.push(Action::SetCursor(cursor));
                }
            }
        }
        actions
    }

    /// Finish a drag: normalize the box and record the pre-drag state for undo.
    pub fn pointer_up(&mut self, _pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let InputState::Dragging { index, anchor, .. } = self.input else {
            return Vec::new();
        };
        self.input = InputState::Idle;

        let mut actions = Vec::new();
        let Some(current) = self.boxes.get(index).copied() else {
            return actions;
        };

        let committed = current.normalized();
        self.boxes[index] = committed;
        if committed != anchor.start {
            let mut before = self.boxes.clone();
            before[index] = anchor.start;
            self.undo.push(before);
            tracing::debug!(index, ?committed, undo_depth = self.undo.len(), "committed drag");
        }
        if committed != current {
            actions.push(Action::BoxesChanged(self.boxes.clone()));
        }
        self.sync_dirty(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Abandon an in-progress drag (e.g. lost pointer capture). The box keeps
    /// its last computed position and nothing is recorded for undo.
    pub fn pointer_cancel(&mut self) -> Vec<Action> {
        if !self.input.is_dragging() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        tracing::debug!("drag cancelled");

        let mut actions = Vec::new();
        self.sync_dirty(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Keyboard ---

    /// `Delete` removes the selected box, the undo shortcut undoes, and
    /// `Escape` cancels a drag. Other keys are ignored.
    pub fn key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if key.is_delete() {
            self.delete_selected()
        } else if key.is_undo(modifiers) {
            self.undo()
        } else if key.is_escape() {
            self.pointer_cancel()
        } else {
            Vec::new()
        }
    }

    /// Remove the selected box. Ignored while dragging.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        if self.input.is_dragging() {
            return Vec::new();
        }
        let Some(index) = self.ui.selected.filter(|i| *i < self.boxes.len()) else {
            return Vec::new();
        };

        self.undo.push(self.boxes.clone());
        let removed = self.boxes.remove(index);
        tracing::debug!(index, ?removed, undo_depth = self.undo.len(), "deleted box");

        let mut actions = vec![Action::BoxesChanged(self.boxes.clone())];
        self.set_selection(None, &mut actions);
        self.sync_dirty(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Restore the most recent snapshot. Ignored while dragging.
    pub fn undo(&mut self) -> Vec<Action> {
        if self.input.is_dragging() {
            return Vec::new();
        }
        let Some(snapshot) = self.undo.pop() else {
            return Vec::new();
        };
        self.boxes = snapshot;
        tracing::debug!(undo_depth = self.undo.len(), "undo");

        let mut actions = vec![Action::BoxesChanged(self.boxes.clone())];
        self.drop_stale_selection(&mut actions);
        self.sync_dirty(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Manual edits ---

    /// Replace the selected box from info-panel values. On error nothing changes.
    pub fn edit_selected(&mut self, fields: BoxFields) -> Result<Vec<Action>, EditError> {
        if self.input.is_dragging() {
            return Err(EditError::Dragging);
        }
        let index = self
            .ui
            .selected
            .filter(|i| *i < self.boxes.len())
            .ok_or(EditError::NoSelection)?;
        let edited = fields.to_box(self.image)?;
        if self.boxes[index] == edited {
            return Ok(Vec::new());
        }

        self.undo.push(self.boxes.clone());
        self.boxes[index] = edited;
        tracing::debug!(index, ?edited, "applied manual edit");

        let mut actions = vec![Action::BoxesChanged(self.boxes.clone())];
        self.sync_dirty(&mut actions);
        actions.push(Action::RenderNeeded);
        Ok(actions)
    }

    // --- Zoom ---

    /// One discrete zoom input, anchored at `anchor` in image space.
    pub fn zoom_step(&mut self, direction: ZoomDirection, anchor: Point) -> Vec<Action> {
        self.zoom_step_at(direction, anchor, Instant::now())
    }

    /// [`Self::zoom_step`] with an explicit clock.
    ///
    /// The view updates immediately; the border-accurate redraw is deferred
    /// until no zoom step has arrived for the configured delay.
    pub fn zoom_step_at(&mut self, direction: ZoomDirection, anchor: Point, now: Instant) -> Vec<Action> {
        let factor = match direction {
            ZoomDirection::In => self.config.zoom_in_factor,
            ZoomDirection::Out => self.config.zoom_out_factor,
        };
        let zoom = self.zoom_limits.clamp(self.camera.zoom * factor);
        if (zoom - self.camera.zoom).abs() < f64::EPSILON {
            return Vec::new();
        }

        self.camera.zoom_about(anchor, zoom);
        let handle = self.redraw.schedule(now);
        vec![
            Action::ViewChanged(self.camera),
            Action::RedrawScheduled { handle, delay: self.redraw.delay() },
        ]
    }

    /// Poll the zoom redraw timer.
    pub fn tick(&mut self) -> Vec<Action> {
        self.tick_at(Instant::now())
    }

    /// [`Self::tick`] with an explicit clock.
    pub fn tick_at(&mut self, now: Instant) -> Vec<Action> {
        match self.redraw.poll(now) {
            Some(_) => vec![Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    /// Deliver a host timer firing for `handle`. Superseded handles are ignored.
    pub fn fire_redraw(&mut self, handle: TaskHandle) -> Vec<Action> {
        if self.redraw.fire(handle) { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn image_path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }

    #[must_use]
    pub fn image(&self) -> ImageSize {
        self.image
    }

    /// The live, possibly unsaved boxes.
    #[must_use]
    pub fn boxes(&self) -> &[SpriteBox] {
        &self.boxes
    }

    /// The boxes as of the last load or save.
    #[must_use]
    pub fn original_boxes(&self) -> &[SpriteBox] {
        &self.original
    }

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.ui.selected
    }

    #[must_use]
    pub fn selected_box(&self) -> Option<SpriteBox> {
        self.ui.selected.and_then(|i| self.boxes.get(i).copied())
    }

    #[must_use]
    pub fn input_state(&self) -> InputState {
        self.input
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.zoom_limits
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Whether there are unsaved changes.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn cursor(&self) -> CursorHint {
        self.cursor
    }

    #[must_use]
    pub fn redraw_deadline(&self) -> Option<Instant> {
        self.redraw.deadline()
    }

    /// Handle hit-square side in image units at the current zoom.
    #[must_use]
    pub fn handle_size(&self) -> f64 {
        self.camera.screen_dist_to_world(self.config.handle_size_px)
    }

    /// Border width in image units at the current zoom.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.camera.stroke_width()
    }

    /// `pt` as whole image pixels, clamped to the image.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn pointer_pixel(&self, pt: Point) -> PixelPos {
        let max_x = f64::from(self.image.max_x());
        let max_y = f64::from(self.image.max_y());
        let x = pt.x.floor().clamp(0.0, max_x);
        let y = pt.y.floor().clamp(0.0, max_y);
        PixelPos::new(x as i32, y as i32)
    }

    // --- Internals ---

    fn set_selection(&mut self, selected: Option<usize>, actions: &mut Vec<Action>) {
        if self.ui.selected != selected {
            self.ui.selected = selected;
            actions.push(Action::SelectionChanged(selected));
        }
    }

    fn drop_stale_selection(&mut self, actions: &mut Vec<Action>) {
        if self.ui.selected.is_some_and(|i| i >= self.boxes.len()) {
            self.set_selection(None, actions);
        }
    }

    fn sync_dirty(&mut self, actions: &mut Vec<Action>) {
        let dirty = !self.undo.is_empty() || self.boxes != self.original;
        if dirty != self.dirty {
            self.dirty = dirty;
            actions.push(Action::DirtyChanged(dirty));
        }
    }
}

// =============================================================================
// EDITOR SURFACE
// =============================================================================

/// Where box sets live between editing sessions, keyed by image path.
pub trait BoxStore {
    /// Boxes for `path`, or `None` when the store has nothing for it.
    fn load(&mut self, path: &Path) -> Option<BoxSet>;

    /// Replace the boxes for `path`.
    fn store(&mut self, path: &Path, boxes: BoxSet);
}

/// Receives every [`Action`] the editor publishes.
pub trait Subscriber {
    fn notify(&mut self, action: &Action);
}

impl<F: FnMut(&Action)> Subscriber for F {
    fn notify(&mut self, action: &Action) {
        self(action);
    }
}

/// The host-facing editor. Wraps [`EditorCore`], reads and writes a
/// [`BoxStore`], and publishes actions to subscribers.
pub struct Editor<S: BoxStore> {
    core: EditorCore,
    store: S,
    subscribers: Vec<Box<dyn Subscriber>>,
}

impl<S: BoxStore> Editor<S> {
    #[must_use]
    pub fn new(store: S, config: EditorConfig) -> Self {
        Self { core: EditorCore::new(config), store, subscribers: Vec::new() }
    }

    /// Read-only view of the editor state. Changes go through the methods
    /// below so every resulting action is published.
    #[must_use]
    pub fn core(&self) -> &EditorCore {
        &self.core
    }

    pub fn subscribe(&mut self, subscriber: impl Subscriber + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    // --- Lifecycle ---

    /// Show `path`, seeding its boxes from the store.
    pub fn select_image(&mut self, path: impl AsRef<Path>, image: ImageSize) -> Vec<Action> {
        let path = path.as_ref();
        if self.core.image_path() == Some(path) {
            return Vec::new();
        }
        let boxes = self.store.load(path).unwrap_or_default();
        let actions = self.core.load_image(path, image, boxes);
        self.publish(actions)
    }

    /// Show `path` with explicitly supplied boxes.
    pub fn load_image(&mut self, path: impl AsRef<Path>, image: ImageSize, boxes: BoxSet) -> Vec<Action> {
        let actions = self.core.load_image(path, image, boxes);
        self.publish(actions)
    }

    /// Commit edits and write them back to the store under the current path.
    pub fn save(&mut self) -> Vec<Action> {
        let Some(path) = self.core.image_path().map(Path::to_path_buf) else {
            return Vec::new();
        };
        let actions = self.core.save();
        self.store.store(&path, self.core.boxes().to_vec());
        tracing::info!(path = %path.display(), boxes = self.core.boxes().len(), "stored boxes");
        self.publish(actions)
    }

    pub fn cancel(&mut self) -> Vec<Action> {
        let actions = self.core.cancel();
        self.publish(actions)
    }

    // --- Input ---

    pub fn select_box(&mut self, index: Option<usize>) -> Vec<Action> {
        let actions = self.core.select_box(index);
        self.publish(actions)
    }

    pub fn pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        let actions = self.core.pointer_down(pt, button);
        self.publish(actions)
    }

    pub fn pointer_move(&mut self, pt: Point, buttons: ButtonsHeld) -> Vec<Action> {
        let actions = self.core.pointer_move(pt, buttons);
        self.publish(actions)
    }

    pub fn pointer_up(&mut self, pt: Point, button: Button) -> Vec<Action> {
        let actions = self.core.pointer_up(pt, button);
        self.publish(actions)
    }

    pub fn pointer_cancel(&mut self) -> Vec<Action> {
        let actions = self.core.pointer_cancel();
        self.publish(actions)
    }

    pub fn key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        let actions = self.core.key_down(key, modifiers);
        self.publish(actions)
    }

    pub fn delete_selected(&mut self) -> Vec<Action> {
        let actions = self.core.delete_selected();
        self.publish(actions)
    }

    pub fn undo(&mut self) -> Vec<Action> {
        let actions = self.core.undo();
        self.publish(actions)
    }

    pub fn zoom_step(&mut self, direction: ZoomDirection, anchor: Point) -> Vec<Action> {
        let actions = self.core.zoom_step(direction, anchor);
        self.publish(actions)
    }

    pub fn zoom_step_at(&mut self, direction: ZoomDirection, anchor: Point, now: Instant) -> Vec<Action> {
        let actions = self.core.zoom_step_at(direction, anchor, now);
        self.publish(actions)
    }

    pub fn tick(&mut self) -> Vec<Action> {
        let actions = self.core.tick();
        self.publish(actions)
    }

    pub fn tick_at(&mut self, now: Instant) -> Vec<Action> {
        let actions = self.core.tick_at(now);
        self.publish(actions)
    }

    pub fn fire_redraw(&mut self, handle: TaskHandle) -> Vec<Action> {
        let actions = self.core.fire_redraw(handle);
        self.publish(actions)
    }

    // --- Manual edits ---

    /// Apply info-panel values. A rejected edit leaves the box unchanged and
    /// publishes [`Action::EditRejected`] so the panel can show the old values.
    pub fn edit_selected(&mut self, fields: BoxFields) -> Vec<Action> {
        let actions = match self.core.edit_selected(fields) {
            Ok(actions) => actions,
            Err(error) => {
                tracing::warn!(%error, "manual box edit rejected");
                vec![Action::EditRejected { error, current: self.core.selected_box() }]
            }
        };
        self.publish(actions)
    }

    /// Parse and apply raw info-panel text.
    pub fn edit_selected_text(&mut self, x: &str, y: &str, width: &str, height: &str) -> Vec<Action> {
        match BoxFields::parse(x, y, width, height) {
            Ok(fields) => self.edit_selected(fields),
            Err(error) => {
                tracing::warn!(%error, "manual box edit rejected");
                let current = self.core.selected_box();
                self.publish(vec![Action::EditRejected { error, current }])
            }
        }
    }

    fn publish(&mut self, actions: Vec<Action>) -> Vec<Action> {
        for action in &actions {
            for subscriber in &mut self.subscribers {
                subscriber.notify(action);
            }
        }
        actions
    }
}
