use glam::Vec3;

use crate::transform::Transform;

/// Single-slot copy buffer for position and yaw.
///
/// Pasting reads it without consuming it, so one copy can be pasted onto
/// any number of items.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipboardSnapshot {
    /// Copied position
    pub position: Vec3,
    /// Copied yaw
    pub rotation_y: f32,
}

impl ClipboardSnapshot {
    /// Capture the current transform.
    pub fn capture(transform: &Transform) -> Self {
        Self {
            position: transform.position,
            rotation_y: transform.rotation_y,
        }
    }

    /// The transform this snapshot restores.
    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.rotation_y)
    }
}

impl From<Transform> for ClipboardSnapshot {
    fn from(transform: Transform) -> Self {
        Self::capture(&transform)
    }
}
