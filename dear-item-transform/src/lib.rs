#![deny(missing_docs)]
//! Transform editing panel for a selected housing item, for `dear-imgui-rs`.
//!
//! The crate reconciles three sources of truth for one item's pose every
//! frame: the value held by the game process, the per-axis locks the user
//! pinned, and whatever the user edited in the current frame.
//!
//! Two layers:
//! - Core (always available): [`Transform`], [`AxisLocks`], [`GridIncrement`],
//!   the [`HousingMemory`] seam, [`TransformSync`] and the [`ItemControls`]
//!   event reducer. No ImGui types, so the whole protocol is testable headless.
//! - ImGui (`imgui` feature): drag fields, numeric inputs, wheel nudging, lock
//!   toggles and copy/paste buttons that emit [`ControlEvent`]s into the core,
//!   plus a [`TransformPanel`] hosting the whole window body.
//!
//! Frame order is fixed: sync first, widgets second. Writes are immediate, so
//! the last write in render order wins.

mod clipboard;
mod controls;
mod grid;
mod lock;
mod memory;
#[cfg(feature = "imgui")]
mod panel;
mod settings;
mod sync;
mod transform;
#[cfg(feature = "imgui")]
mod ui;

pub use clipboard::ClipboardSnapshot;
pub use controls::{ControlError, ControlEvent, ControlOutcome, FrameReport, ItemControls};
pub use grid::GridIncrement;
pub use lock::{AxisLocks, AxisSet, LockState};
pub use memory::{Availability, HousingMemory, LayoutMode};
#[cfg(feature = "imgui")]
pub use panel::{PanelResponse, RESET_POSITION, TransformPanel, WINDOW_FLAGS};
pub use settings::PanelSettings;
pub use sync::{SyncOutcome, TransformSync, WriteBack};
pub use transform::{Axis, Field, Transform};
#[cfg(feature = "imgui")]
pub use ui::{ItemControlsExt, ItemControlsUi};

/// Re-export of `dear-imgui-rs` so hosts can match the version this crate renders with.
#[cfg(feature = "imgui")]
pub use dear_imgui_rs as imgui;
