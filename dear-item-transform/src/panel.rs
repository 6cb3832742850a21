//! Window body hosting the settings toggles, availability hints, the item
//! controls, the grid size input and the game window toggles.

use dear_imgui_rs::{Condition, Ui, WindowFlags};
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::controls::{FrameReport, ItemControls};
use crate::memory::{Availability, HousingMemory};
use crate::settings::PanelSettings;
use crate::transform::Transform;
use crate::ui::ItemControlsExt;

const ERROR_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GRID_INPUT_STEP: f32 = 0.05;
const WINDOW_TITLE: &str = "Item transform##item-transform";

/// Where [`TransformPanel::window`] puts the window after a reset.
pub const RESET_POSITION: [f32; 2] = [69.0, 69.0];

/// Flags of the window built by [`TransformPanel::window`]. Mouse wheel
/// scrolling is off so the wheel nudges fields instead.
pub const WINDOW_FLAGS: WindowFlags = WindowFlags::NO_SCROLLBAR
    .union(WindowFlags::NO_SCROLL_WITH_MOUSE)
    .union(WindowFlags::NO_RESIZE)
    .union(WindowFlags::ALWAYS_AUTO_RESIZE);

/// What the host needs to act on after a panel frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelResponse {
    /// Settings were edited this frame and should be saved.
    pub settings_changed: bool,
    /// Controls availability this frame.
    pub availability: Availability,
    /// Sync and edit results, when the controls were shown.
    pub frame: Option<FrameReport>,
    /// The furniture list button was clicked. Opening the list is up to the host.
    pub open_list_requested: bool,
    /// The window was moved back to [`RESET_POSITION`] this frame.
    pub position_reset: bool,
}

/// The transform panel: settings plus the item controls.
///
/// Draw it inside a host window created with `NO_SCROLL_WITH_MOUSE`, so the
/// mouse wheel nudges fields instead of scrolling the window.
#[derive(Clone, Debug, Default)]
pub struct TransformPanel {
    /// Locks and clipboard
    pub controls: ItemControls,
    /// Local copy of the selected item's transform
    pub transform: Transform,
    /// Panel options, persisted by the host
    pub settings: PanelSettings,
    reset_pending: bool,
}

impl TransformPanel {
    /// Panel starting from loaded settings.
    pub fn new(settings: PanelSettings) -> Self {
        Self {
            controls: ItemControls::with_write_back(settings.write_back),
            transform: Transform::default(),
            settings,
            reset_pending: false,
        }
    }

    /// Move the window back to [`RESET_POSITION`] the next time
    /// [`TransformPanel::window`] builds it.
    pub fn request_reset(&mut self) {
        self.reset_pending = true;
    }

    /// Build the panel in its own auto-sized window.
    ///
    /// Returns `None` when the window is collapsed or clipped.
    pub fn window<M: HousingMemory + ?Sized>(
        &mut self,
        ui: &Ui,
        memory: &mut M,
    ) -> Option<PanelResponse> {
        let reset = std::mem::take(&mut self.reset_pending);
        let mut window = ui.window(WINDOW_TITLE).flags(WINDOW_FLAGS);
        if reset {
            window = window.position(RESET_POSITION, Condition::Always);
        }
        window.build(|| {
            let mut response = self.draw(ui, memory);
            response.position_reset = reset;
            response
        })
    }

    /// Draw one frame of the panel.
    pub fn draw<M: HousingMemory + ?Sized>(&mut self, ui: &Ui, memory: &mut M) -> PanelResponse {
        let mut response = PanelResponse::default();

        let mut place_anywhere = self.settings.place_anywhere;
        if ui.checkbox("Place anywhere", &mut place_anywhere) {
            memory.set_place_anywhere(place_anywhere);
            self.settings.place_anywhere = place_anywhere;
            response.settings_changed = true;
        }
        if ui.is_item_hovered() {
            ui.set_tooltip("Lift the game's placement restrictions");
        }

        ui.same_line();
        if ui.checkbox("Gizmo", &mut self.settings.use_gizmo) {
            response.settings_changed = true;
        }
        if ui.is_item_hovered() {
            ui.set_tooltip("Show a move gizmo on the selected item");
        }

        ui.same_line();
        if ui.checkbox("Snap to grid", &mut self.settings.snap_to_grid) {
            response.settings_changed = true;
        }
        if ui.is_item_hovered() {
            ui.set_tooltip("Snap gizmo movement to the grid size below");
        }

        ui.separator();

        let availability = Availability::evaluate(&*memory);
        response.availability = availability;
        match availability.message() {
            Some(hint) => {
                ui.text_colored(ERROR_COLOR, hint);
                if let Some(help) = availability.help() {
                    help_marker(ui, help);
                }
            }
            None => {
                self.controls.set_write_back(self.settings.write_back);
                response.frame = Some(ui.item_controls().render(
                    &mut self.controls,
                    &mut self.transform,
                    memory,
                    self.settings.grid,
                ));
            }
        }

        ui.separator();

        let mut grid = self.settings.grid.get();
        if ui
            .input_float_config("Grid size")
            .step(GRID_INPUT_STEP)
            .format("%.3f")
            .build(&mut grid)
            && self.settings.grid.set(grid)
        {
            #[cfg(feature = "tracing")]
            debug!(grid = self.settings.grid.get(), "grid size changed");
            response.settings_changed = true;
        }
        if ui.is_item_hovered() {
            ui.set_tooltip("Step for dragging, scrolling and snapping");
        }

        let mut goods_visible = memory.housing_goods_visible();
        if ui.checkbox("Show furnishings", &mut goods_visible) {
            memory.set_housing_goods_visible(goods_visible);
        }
        ui.same_line();
        let mut inventory_visible = memory.inventory_visible();
        if ui.checkbox("Show inventory", &mut inventory_visible) {
            memory.set_inventory_visible(inventory_visible);
        }

        if ui.button("Open furniture list") {
            #[cfg(feature = "tracing")]
            debug!("furniture list requested");
            response.open_list_requested = true;
        }
        if ui.is_item_hovered() {
            ui.tooltip(|| {
                ui.text("List nearby furniture sorted by distance and select one");
                ui.text("Outdoor furnishings are not listed");
            });
        }

        if ui.checkbox("Open automatically", &mut self.settings.auto_visible) {
            response.settings_changed = true;
        }

        response
    }
}

/// Greyed `(?)` on the same line with `text` as its tooltip.
fn help_marker(ui: &Ui, text: &str) {
    ui.same_line();
    ui.text_disabled("(?)");
    if ui.is_item_hovered() {
        ui.set_tooltip(text);
    }
}
