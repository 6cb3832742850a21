//! Dear ImGui rendering of the transform controls.
//!
//! Widgets never touch the game directly: each change becomes a
//! [`ControlEvent`] that is applied to the core the moment it happens, so a
//! value mid-drag is already visible in the game.

mod fields;

use dear_imgui_rs::Ui;
#[cfg(feature = "tracing")]
use tracing::warn;

use crate::controls::{ControlError, ControlEvent, ControlOutcome, FrameReport, ItemControls};
use crate::grid::GridIncrement;
use crate::memory::{Availability, HousingMemory};
use crate::transform::{Axis, Field, Transform};

const DRAG_WIDTH: f32 = 73.0;
const INPUT_WIDTH: f32 = 150.0;

/// Borrowed state for one frame of widgets.
struct EditSession<'a, M: HousingMemory + ?Sized> {
    controls: &'a mut ItemControls,
    transform: &'a mut Transform,
    memory: &'a mut M,
    grid: GridIncrement,
    availability: Availability,
    results: Vec<Result<ControlOutcome, ControlError>>,
}

impl<M: HousingMemory + ?Sized> EditSession<'_, M> {
    fn emit(&mut self, event: ControlEvent) {
        let res = self.controls.apply_gated(
            self.availability,
            event,
            &mut *self.transform,
            &mut *self.memory,
            self.grid,
        );
        #[cfg(feature = "tracing")]
        if let Err(err) = &res {
            warn!(?event, %err, "control event rejected");
        }
        self.results.push(res);
    }
}

/// Transform controls bound to a [`Ui`].
pub struct ItemControlsUi<'ui> {
    /// The frame's UI
    pub ui: &'ui Ui,
}

/// Extend [`Ui`] with the transform controls entry point.
pub trait ItemControlsExt {
    /// Entry point for drawing the transform controls.
    fn item_controls(&self) -> ItemControlsUi<'_>;
}

impl ItemControlsExt for Ui {
    fn item_controls(&self) -> ItemControlsUi<'_> {
        ItemControlsUi { ui: self }
    }
}

impl<'ui> ItemControlsUi<'ui> {
    /// Sync with the game, then draw the controls and apply every edit.
    ///
    /// This is the per-frame entry point. When sync is skipped the widgets
    /// still draw the stale local transform, but edits that would touch the
    /// game are rejected.
    pub fn render<M: HousingMemory + ?Sized>(
        &self,
        controls: &mut ItemControls,
        transform: &mut Transform,
        memory: &mut M,
        grid: GridIncrement,
    ) -> FrameReport {
        let sync = controls.sync(&mut *memory, &mut *transform);
        let events = self.draw_gated(sync.availability(), controls, transform, memory, grid);
        FrameReport { sync, events }
    }

    /// Draw the controls without syncing first.
    pub fn draw<M: HousingMemory + ?Sized>(
        &self,
        controls: &mut ItemControls,
        transform: &mut Transform,
        memory: &mut M,
        grid: GridIncrement,
    ) -> Vec<Result<ControlOutcome, ControlError>> {
        let availability = Availability::evaluate(&*memory);
        self.draw_gated(availability, controls, transform, memory, grid)
    }

    fn draw_gated<M: HousingMemory + ?Sized>(
        &self,
        availability: Availability,
        controls: &mut ItemControls,
        transform: &mut Transform,
        memory: &mut M,
        grid: GridIncrement,
    ) -> Vec<Result<ControlOutcome, ControlError>> {
        let ui = self.ui;
        let mut session = EditSession {
            controls,
            transform,
            memory,
            grid,
            availability,
            results: Vec::new(),
        };

        ui.group(|| {
            let _width = ui.push_item_width(DRAG_WIDTH);
            session.drag_field(ui, "##item-drag-x", Field::X);
            session.drag_field(ui, "##item-drag-y", Field::Y);
            session.drag_field(ui, "##item-drag-z", Field::Z);
            ui.text("Position");

            session.drag_field(ui, "##item-drag-ry", Field::RotationY);
            ui.text("Rotation");
        });
        if ui.is_item_hovered() {
            ui.tooltip(|| {
                ui.text("Click and drag to move the item");
                ui.text("The grid size below sets the drag step");
            });
        }

        ui.same_line();
        ui.group(|| {
            if ui.button("Copy") {
                session.emit(ControlEvent::Copy);
            }
            if ui.is_item_hovered() {
                ui.set_tooltip("Copy position and rotation");
            }

            let _disabled = ui.begin_disabled_with_cond(!session.controls.can_paste());
            if ui.button("Paste") && session.controls.can_paste() {
                session.emit(ControlEvent::Paste);
            }
            if ui.is_item_hovered() {
                ui.set_tooltip("Paste position and rotation");
            }
        });

        let _width = ui.push_item_width(INPUT_WIDTH);
        session.locked_input_field(ui, "X##item-x", Axis::X);
        session.locked_input_field(ui, "Y##item-y", Axis::Y);
        session.locked_input_field(ui, "Z##item-z", Axis::Z);
        session.input_field(ui, "Rotation##item-ry", Field::RotationY);

        session.results
    }
}
