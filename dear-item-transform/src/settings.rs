use crate::grid::GridIncrement;
use crate::sync::WriteBack;

/// User-facing options of the transform panel.
///
/// The host owns loading and saving; enable the `serde` feature to
/// (de)serialize this struct with any serde format. Missing fields fall back
/// to their defaults and an out-of-range grid is clamped on load.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelSettings {
    /// Step for drag, wheel and numeric inputs.
    pub grid: GridIncrement,
    /// Lift the game's placement restrictions.
    pub place_anywhere: bool,
    /// Show the on-screen gizmo (drawn by the host).
    pub use_gizmo: bool,
    /// Snap gizmo movement to the grid.
    pub snap_to_grid: bool,
    /// Open the panel automatically when entering housing mode.
    pub auto_visible: bool,
    /// When the start-of-frame sync writes the position back.
    pub write_back: WriteBack,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            grid: GridIncrement::default(),
            place_anywhere: false,
            use_gizmo: false,
            snap_to_grid: false,
            auto_visible: true,
            write_back: WriteBack::Always,
        }
    }
}
