use dear_imgui_rs::Ui;

use super::EditSession;
use crate::controls::ControlEvent;
use crate::memory::HousingMemory;
use crate::transform::{Axis, Field};

/// `Scroll` event if the mouse wheel moved over the last item.
fn wheel_over_last_item(ui: &Ui, field: Field) -> Option<ControlEvent> {
    if !ui.is_mouse_hovering_rect(ui.item_rect_min(), ui.item_rect_max()) {
        return None;
    }
    let wheel = ui.io().mouse_wheel();
    (wheel != 0.0).then_some(ControlEvent::Scroll { field, wheel })
}

impl<M: HousingMemory + ?Sized> EditSession<'_, M> {
    /// Drag field for one value, followed by wheel handling.
    ///
    /// Leaves the cursor on the same line.
    pub(super) fn drag_field(&mut self, ui: &Ui, id: &str, field: Field) {
        let mut value = self.transform.get(field);
        if ui
            .drag_config(id)
            .speed(self.grid.get())
            .display_format("%.3f")
            .build(ui, &mut value)
        {
            self.emit(ControlEvent::Set { field, value });
        }
        ui.same_line_with_spacing(0.0, 4.0);
        if let Some(event) = wheel_over_last_item(ui, field) {
            self.emit(event);
        }
    }

    /// Numeric input with +/- buttons stepping by the grid, followed by wheel handling.
    pub(super) fn input_field(&mut self, ui: &Ui, label: &str, field: Field) {
        let mut value = self.transform.get(field);
        if ui
            .input_float_config(label)
            .step(self.grid.get())
            .format("%.3f")
            .build(&mut value)
        {
            self.emit(ControlEvent::Set { field, value });
        }
        if let Some(event) = wheel_over_last_item(ui, field) {
            self.emit(event);
        }
    }

    /// Position input with its lock toggle on the same line.
    pub(super) fn locked_input_field(&mut self, ui: &Ui, label: &str, axis: Axis) {
        self.input_field(ui, label, axis.into());
        ui.same_line();

        let locked = self.controls.locks().get(axis);
        let caption = if locked.is_some() { "Locked" } else { "Unlocked" };
        if ui.small_button(format!("{caption}###item-lock-{}", axis.name())) {
            self.emit(ControlEvent::ToggleLock(axis));
        }
        if ui.is_item_hovered() {
            match locked {
                Some(v) => ui.set_tooltip(format!(
                    "{} pinned at {v:.3}, click to release",
                    axis.name()
                )),
                None => ui.set_tooltip(format!("Pin {} at its current value", axis.name())),
            }
        }
    }
}
