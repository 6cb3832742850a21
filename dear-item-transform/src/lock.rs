use bitflags::bitflags;
use glam::Vec3;

use crate::transform::Axis;

bitflags! {
    /// Set of position axes, e.g. the axes a sync pass overrode.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AxisSet: u8 {
        /// X axis
        const X = 1 << 0;
        /// Y axis
        const Y = 1 << 1;
        /// Z axis
        const Z = 1 << 2;
    }
}

impl From<Axis> for AxisSet {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::X => AxisSet::X,
            Axis::Y => AxisSet::Y,
            Axis::Z => AxisSet::Z,
        }
    }
}

/// State of a single axis lock after a toggle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LockState {
    /// The axis follows the game value.
    Unlocked,
    /// The axis is pinned to this value.
    Locked(f32),
}

/// Per-axis position overrides.
///
/// A locked axis is forced to its pinned value on every sync, whatever the
/// game reports, until the user toggles it off again. Locks live only for
/// the session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisLocks {
    x: Option<f32>,
    y: Option<f32>,
    z: Option<f32>,
}

impl AxisLocks {
    /// All axes unlocked.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, axis: Axis) -> &mut Option<f32> {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }

    /// Pinned value for an axis, if locked.
    pub fn get(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Whether an axis is locked.
    pub fn is_locked(&self, axis: Axis) -> bool {
        self.get(axis).is_some()
    }

    /// Whether any axis is locked.
    pub fn any(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.z.is_some()
    }

    /// Flip an axis: unlocked captures `current`, locked clears.
    pub fn toggle(&mut self, axis: Axis, current: f32) -> LockState {
        let slot = self.slot(axis);
        *slot = match slot.take() {
            Some(_) => None,
            None => Some(current),
        };
        match *slot {
            Some(v) => LockState::Locked(v),
            None => LockState::Unlocked,
        }
    }

    /// Drop every lock.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Force locked axes of `position` to their pinned values.
    ///
    /// Returns the resolved position and the axes whose value actually changed.
    pub fn apply(&self, mut position: Vec3) -> (Vec3, AxisSet) {
        let mut forced = AxisSet::empty();
        for axis in Axis::ALL {
            if let Some(pinned) = self.get(axis) {
                if axis.get(position) != pinned {
                    forced |= AxisSet::from(axis);
                }
                axis.set(&mut position, pinned);
            }
        }
        (position, forced)
    }
}
