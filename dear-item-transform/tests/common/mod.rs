#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard, OnceLock};

use dear_item_transform::{HousingMemory, LayoutMode};
use glam::Vec3;

/// Serializes tests that create a Dear ImGui context.
pub fn test_guard() -> MutexGuard<'static, ()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner())
}

/// Every call the controls made into the game, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    ReadPosition,
    WritePosition(Vec3),
    ReadRotation,
    WriteRotation(Vec3),
    PlaceAnywhere(bool),
    HousingGoodsVisible(bool),
    InventoryVisible(bool),
}

/// Scripted housing memory recording every call.
#[derive(Debug, Default)]
pub struct ScriptedHousing {
    pub position: Vec3,
    pub rotation: Vec3,
    pub selected: bool,
    pub mode: LayoutMode,
    pub gamepad: bool,
    pub housing_goods_visible: bool,
    pub inventory_visible: bool,
    pub calls: std::cell::RefCell<Vec<Call>>,
}

impl ScriptedHousing {
    pub fn ready(position: Vec3, rotation_y: f32) -> Self {
        Self {
            position,
            rotation: Vec3::new(0.0, rotation_y, 0.0),
            selected: true,
            mode: LayoutMode::Rotate,
            ..Self::default()
        }
    }

    pub fn position_writes(&self) -> Vec<Vec3> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::WritePosition(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn rotation_writes(&self) -> Vec<Vec3> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::WriteRotation(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl HousingMemory for ScriptedHousing {
    fn read_position(&self) -> Vec3 {
        self.calls.borrow_mut().push(Call::ReadPosition);
        self.position
    }
    fn write_position(&mut self, position: Vec3) {
        self.calls.borrow_mut().push(Call::WritePosition(position));
        self.position = position;
    }
    fn read_rotation(&self) -> Vec3 {
        self.calls.borrow_mut().push(Call::ReadRotation);
        self.rotation
    }
    fn write_rotation(&mut self, rotation: Vec3) {
        self.calls.borrow_mut().push(Call::WriteRotation(rotation));
        self.rotation = rotation;
    }
    fn is_object_selected(&self) -> bool {
        self.selected
    }
    fn layout_mode(&self) -> LayoutMode {
        self.mode
    }
    fn gamepad_mode(&self) -> bool {
        self.gamepad
    }
    fn set_place_anywhere(&mut self, enabled: bool) {
        self.calls.borrow_mut().push(Call::PlaceAnywhere(enabled));
    }
    fn housing_goods_visible(&self) -> bool {
        self.housing_goods_visible
    }
    fn set_housing_goods_visible(&mut self, visible: bool) {
        self.calls
            .borrow_mut()
            .push(Call::HousingGoodsVisible(visible));
        self.housing_goods_visible = visible;
    }
    fn inventory_visible(&self) -> bool {
        self.inventory_visible
    }
    fn set_inventory_visible(&mut self, visible: bool) {
        self.calls.borrow_mut().push(Call::InventoryVisible(visible));
        self.inventory_visible = visible;
    }
}
