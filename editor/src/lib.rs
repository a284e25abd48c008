//! Interactive box-editing engine for the sprite splitter.
//!
//! The host window owns the image, the panels and the file dialogs. This crate
//! owns everything that happens between a pointer event and a changed box set:
//! picking the box under the pointer, telling a resize handle from the body
//! from empty space, turning drag deltas into clamped integer boxes, keeping
//! the undo history, and describing what to draw so borders stay one device
//! pixel wide at any zoom. Results flow back to the host as [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EditorCore`] state machine and the [`engine::Editor`] surface |
//! | [`doc`] | Box, box set, image size, and manual-edit fields |
//! | [`camera`] | Zoom/pan camera and coordinate conversions |
//! | [`input`] | Input event types and the drag state |
//! | [`hit`] | Control points, hit-testing, cursor hints |
//! | [`drag`] | Handle-specific drag rules and boundary clamps |
//! | [`undo`] | Snapshot undo stack |
//! | [`timer`] | Cancelable delayed task used to debounce zoom redraws |
//! | [`render`] | Draw-list construction for the host renderer |
//! | [`config`] | Tunables with their defaults |
//! | [`consts`] | Shared numeric constants |

pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod drag;
pub mod engine;
pub mod hit;
pub mod input;
pub mod render;
pub mod timer;
pub mod undo;

pub use config::EditorConfig;
pub use doc::{BoxFields, BoxSet, EditError, ImageSize, PixelPos, SpriteBox};
pub use engine::{Action, BoxStore, Editor, EditorCore, Subscriber};
