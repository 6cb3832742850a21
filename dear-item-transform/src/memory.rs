use glam::Vec3;

/// Housing layout mode reported by the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Not in housing layout at all.
    #[default]
    None,
    /// Moving items.
    Move,
    /// Rotating items. The only mode the controls edit in.
    Rotate,
    /// Removing items.
    Remove,
    /// Storing items.
    Store,
    /// Any mode this crate does not distinguish.
    Other,
}

/// Access to the selected housing item inside the game process.
///
/// Implementations wrap the raw reads and writes of the game's housing
/// structure. All calls happen on the render thread, once or a few times per
/// frame, and are expected to be cheap and synchronous. Position and rotation
/// reads are only made while [`Availability::evaluate`] returns
/// [`Availability::Ready`].
pub trait HousingMemory {
    /// Current position of the selected item.
    fn read_position(&self) -> Vec3;
    /// Set the position of the selected item. Writing the same value again
    /// must have no visible effect.
    fn write_position(&mut self, position: Vec3);
    /// Current rotation of the selected item as euler angles.
    fn read_rotation(&self) -> Vec3;
    /// Set the full rotation of the selected item.
    fn write_rotation(&mut self, rotation: Vec3);
    /// Whether an item is currently selected.
    fn is_object_selected(&self) -> bool;
    /// Current layout mode.
    fn layout_mode(&self) -> LayoutMode;
    /// Whether the game is driven by a gamepad, which the controls do not support.
    fn gamepad_mode(&self) -> bool {
        false
    }
    /// Lift the game's placement restrictions. Default: not supported, no-op.
    fn set_place_anywhere(&mut self, enabled: bool) {
        let _ = enabled;
    }
    /// Whether the game's housing goods window is shown. Default: `false`.
    fn housing_goods_visible(&self) -> bool {
        false
    }
    /// Show or hide the housing goods window. Default: no-op.
    fn set_housing_goods_visible(&mut self, visible: bool) {
        let _ = visible;
    }
    /// Whether the game's inventory window is shown. Default: `false`.
    fn inventory_visible(&self) -> bool {
        false
    }
    /// Show or hide the inventory window. Default: no-op.
    fn set_inventory_visible(&mut self, visible: bool) {
        let _ = visible;
    }
}

impl<M: HousingMemory + ?Sized> HousingMemory for &mut M {
    fn read_position(&self) -> Vec3 {
        (**self).read_position()
    }
    fn write_position(&mut self, position: Vec3) {
        (**self).write_position(position)
    }
    fn read_rotation(&self) -> Vec3 {
        (**self).read_rotation()
    }
    fn write_rotation(&mut self, rotation: Vec3) {
        (**self).write_rotation(rotation)
    }
    fn is_object_selected(&self) -> bool {
        (**self).is_object_selected()
    }
    fn layout_mode(&self) -> LayoutMode {
        (**self).layout_mode()
    }
    fn gamepad_mode(&self) -> bool {
        (**self).gamepad_mode()
    }
    fn set_place_anywhere(&mut self, enabled: bool) {
        (**self).set_place_anywhere(enabled)
    }
    fn housing_goods_visible(&self) -> bool {
        (**self).housing_goods_visible()
    }
    fn set_housing_goods_visible(&mut self, visible: bool) {
        (**self).set_housing_goods_visible(visible)
    }
    fn inventory_visible(&self) -> bool {
        (**self).inventory_visible()
    }
    fn set_inventory_visible(&mut self, visible: bool) {
        (**self).set_inventory_visible(visible)
    }
}

/// Whether the transform controls can run this frame.
///
/// Anything other than `Ready` is an expected, transient state: the frame
/// skips sync and shows a hint instead of the controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Availability {
    /// The game is not in housing layout mode.
    #[default]
    NotInHousingMode,
    /// Gamepad input is active.
    GamepadMode,
    /// No item is selected, or the layout mode is not `Rotate`.
    NoItemSelected,
    /// An item is selected in rotate mode.
    Ready,
}

impl Availability {
    /// Fold the gating predicates of `memory`, first failing check wins.
    pub fn evaluate<M: HousingMemory + ?Sized>(memory: &M) -> Self {
        let mode = memory.layout_mode();
        if mode == LayoutMode::None {
            Availability::NotInHousingMode
        } else if memory.gamepad_mode() {
            Availability::GamepadMode
        } else if !memory.is_object_selected() || mode != LayoutMode::Rotate {
            Availability::NoItemSelected
        } else {
            Availability::Ready
        }
    }

    /// Whether sync and edits may touch the item.
    pub fn is_ready(self) -> bool {
        matches!(self, Availability::Ready)
    }

    /// Hint shown in place of the controls, `None` when ready.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Availability::NotInHousingMode => Some("Enter housing mode to get started"),
            Availability::GamepadMode => Some("Gamepad mode is not supported"),
            Availability::NoItemSelected => Some("Select a housing item in rotate mode"),
            Availability::Ready => None,
        }
    }

    /// Extra help shown next to the hint, for states that usually mean the
    /// host's memory lookup is off.
    pub fn help(self) -> Option<&'static str> {
        match self {
            Availability::NoItemSelected => Some(
                "Item selected but still nothing? Check the housing structure \
                 lookup with the host's debug command and report it.",
            ),
            _ => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeHousing;
    use super::*;

    #[test]
    fn availability_precedence_matches_panel_hints() {
        let mut mem = FakeHousing::default();
        assert_eq!(Availability::evaluate(&mem), Availability::NotInHousingMode);

        mem.mode = LayoutMode::Move;
        mem.gamepad = true;
        assert_eq!(Availability::evaluate(&mem), Availability::GamepadMode);

        mem.gamepad = false;
        mem.selected = true;
        assert_eq!(Availability::evaluate(&mem), Availability::NoItemSelected);

        mem.mode = LayoutMode::Rotate;
        assert_eq!(Availability::evaluate(&mem), Availability::Ready);
        assert!(Availability::Ready.message().is_none());
    }

    #[test]
    fn rotate_mode_without_selection_is_not_ready() {
        let mut mem = FakeHousing::ready(Vec3::ZERO, Vec3::ZERO);
        mem.selected = false;
        assert!(!Availability::evaluate(&mem).is_ready());
    }

    #[test]
    fn only_missing_selection_carries_help() {
        assert!(Availability::NoItemSelected.help().is_some());
        assert!(Availability::NotInHousingMode.help().is_none());
        assert!(Availability::GamepadMode.help().is_none());
        assert!(Availability::Ready.help().is_none());
        assert_eq!(Availability::default(), Availability::NotInHousingMode);
    }

    #[test]
    fn window_toggles_default_to_hidden_no_ops() {
        let mut mem = FakeHousing::default();
        mem.set_housing_goods_visible(true);
        mem.set_inventory_visible(true);
        assert!(!mem.housing_goods_visible());
        assert!(!mem.inventory_visible());
    }
}
