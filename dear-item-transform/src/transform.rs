use glam::Vec3;

/// Position axis of a housing item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis
    X,
    /// Y axis (vertical)
    Y,
    /// Z axis
    Z,
}

impl Axis {
    /// All axes in display order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Read this axis from a vector.
    pub fn get(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Write this axis into a vector.
    pub fn set(self, v: &mut Vec3, value: f32) {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
            Axis::Z => v.z = value,
        }
    }

    /// Short uppercase name ("X", "Y", "Z").
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// One editable value of the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Position along X
    X,
    /// Position along Y
    Y,
    /// Position along Z
    Z,
    /// Yaw (rotation around Y)
    RotationY,
}

impl Field {
    /// All fields in render order.
    pub const ALL: [Field; 4] = [Field::X, Field::Y, Field::Z, Field::RotationY];

    /// The position axis this field edits, or `None` for the rotation field.
    pub fn axis(self) -> Option<Axis> {
        match self {
            Field::X => Some(Axis::X),
            Field::Y => Some(Axis::Y),
            Field::Z => Some(Axis::Z),
            Field::RotationY => None,
        }
    }
}

impl From<Axis> for Field {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::X => Field::X,
            Axis::Y => Field::Y,
            Axis::Z => Field::Z,
        }
    }
}

/// Frame-scoped local copy of the selected item's pose.
///
/// The game process owns the real value; this copy is refreshed by
/// [`TransformSync`](crate::TransformSync) and edited by
/// [`ItemControls`](crate::ItemControls). Only yaw is tracked: the other
/// rotation axes stay in the game process and are merged back on write.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    /// World position
    pub position: Vec3,
    /// Rotation around the vertical axis
    pub rotation_y: f32,
}

impl Transform {
    /// Create a transform from a position and yaw.
    pub fn new(position: Vec3, rotation_y: f32) -> Self {
        Self {
            position,
            rotation_y,
        }
    }

    /// Current value of a field.
    pub fn get(&self, field: Field) -> f32 {
        match field.axis() {
            Some(axis) => axis.get(self.position),
            None => self.rotation_y,
        }
    }

    /// Overwrite a field.
    pub fn set(&mut self, field: Field, value: f32) {
        match field.axis() {
            Some(axis) => axis.set(&mut self.position, value),
            None => self.rotation_y = value,
        }
    }

    /// Replace the yaw component of a full rotation, leaving the other axes untouched.
    pub fn merge_rotation(&self, mut rotation: Vec3) -> Vec3 {
        rotation.y = self.rotation_y;
        rotation
    }
}

#[cfg(feature = "mint")]
impl From<Transform> for (mint::Vector3<f32>, f32) {
    fn from(t: Transform) -> Self {
        (t.position.into(), t.rotation_y)
    }
}

#[cfg(feature = "mint")]
impl From<(mint::Vector3<f32>, f32)> for Transform {
    fn from((position, rotation_y): (mint::Vector3<f32>, f32)) -> Self {
        Self::new(position.into(), rotation_y)
    }
}
