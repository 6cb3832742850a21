/// Step size shared by drag, wheel and numeric-input adjustments.
///
/// Always within `[GridIncrement::MIN, GridIncrement::MAX]`: every way of
/// building or changing one clamps. `NaN` falls back to the default.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "f32", into = "f32"))]
pub struct GridIncrement(f32);

impl GridIncrement {
    /// Smallest allowed step.
    pub const MIN: f32 = 0.001;
    /// Largest allowed step.
    pub const MAX: f32 = 10.0;
    /// Step used when nothing is configured.
    pub const DEFAULT: f32 = 0.05;

    /// Build a step, clamping into the allowed range.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(Self::DEFAULT);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// The clamped step.
    pub fn get(self) -> f32 {
        self.0
    }

    /// Replace the step. Returns `true` if the stored value changed.
    pub fn set(&mut self, value: f32) -> bool {
        let next = Self::new(value);
        let changed = next.0 != self.0;
        *self = next;
        changed
    }

    /// Scale a number of steps (drag ticks, wheel notches) into a value delta.
    pub fn scale(self, steps: f32) -> f32 {
        steps * self.0
    }
}

impl Default for GridIncrement {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<f32> for GridIncrement {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<GridIncrement> for f32 {
    fn from(grid: GridIncrement) -> Self {
        grid.0
    }
}
