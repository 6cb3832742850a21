//! Lock/clipboard state and the reducer that turns widget events into writes.
//!
//! Events are free of ImGui types so the whole edit protocol can be driven
//! from tests or from non-UI callers (chat commands, scripted moves).

use thiserror::Error;
#[cfg(feature = "tracing")]
use tracing::{debug, warn};

use crate::clipboard::ClipboardSnapshot;
use crate::grid::GridIncrement;
use crate::lock::{AxisLocks, LockState};
use crate::memory::{Availability, HousingMemory};
use crate::sync::{SyncOutcome, TransformSync, WriteBack};
use crate::transform::{Axis, Field, Transform};

/// A user interaction with the transform controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlEvent {
    /// A widget produced a new value for a field.
    Set {
        /// Edited field
        field: Field,
        /// New value
        value: f32,
    },
    /// Drag by a number of grid steps.
    Drag {
        /// Dragged field
        field: Field,
        /// Grid steps, may be fractional or negative
        ticks: f32,
    },
    /// Mouse wheel over a field; one notch moves one grid step.
    Scroll {
        /// Hovered field
        field: Field,
        /// Wheel delta as reported by the platform
        wheel: f32,
    },
    /// Lock or unlock a position axis at its current value.
    ToggleLock(Axis),
    /// Remember the current position and yaw.
    Copy,
    /// Apply the remembered position and yaw.
    Paste,
}

impl ControlEvent {
    /// Whether applying the event reads or writes the selected item.
    ///
    /// `ToggleLock` and `Copy` only change local state.
    pub fn touches_game(&self) -> bool {
        !matches!(self, ControlEvent::ToggleLock(_) | ControlEvent::Copy)
    }
}

/// What an applied event did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlOutcome {
    /// Nothing changed and nothing was written.
    Unchanged,
    /// The position was written.
    PositionWritten,
    /// The rotation was written.
    RotationWritten,
    /// A lock changed state. The position is written by the next sync.
    LockToggled(Axis, LockState),
    /// The clipboard now holds a snapshot.
    Copied,
    /// Position and rotation were written from the clipboard.
    Pasted,
}

/// Rejected control events. Nothing is written when one is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ControlError {
    /// Paste was requested before anything was copied.
    #[error("nothing has been copied yet")]
    NoSnapshot,
    /// The edit would write NaN or infinity into the game.
    #[error("non-finite value for {field:?}")]
    NonFiniteValue {
        /// Field the edit targeted
        field: Field,
    },
    /// The event would touch the game while no item can be edited.
    #[error("controls unavailable: {0:?}")]
    Unavailable(Availability),
}

/// Everything that happened during one [`ItemControls::frame`].
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// Result of the start-of-frame sync.
    pub sync: SyncOutcome,
    /// One result per event, in order.
    pub events: Vec<Result<ControlOutcome, ControlError>>,
}

/// Session state of the transform controls: axis locks and the clipboard.
#[derive(Clone, Debug, Default)]
pub struct ItemControls {
    locks: AxisLocks,
    clipboard: Option<ClipboardSnapshot>,
    sync: TransformSync,
}

impl ItemControls {
    /// Controls with nothing locked or copied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controls using the given sync write-back policy.
    pub fn with_write_back(write_back: WriteBack) -> Self {
        Self {
            sync: TransformSync::new(write_back),
            ..Self::default()
        }
    }

    /// Change the sync write-back policy.
    pub fn set_write_back(&mut self, write_back: WriteBack) {
        self.sync = TransformSync::new(write_back);
    }

    /// Current axis locks.
    pub fn locks(&self) -> &AxisLocks {
        &self.locks
    }

    /// Mutable access to the axis locks, e.g. to clear them when the host
    /// switches items.
    pub fn locks_mut(&mut self) -> &mut AxisLocks {
        &mut self.locks
    }

    /// The clipboard content, if anything was copied.
    pub fn clipboard(&self) -> Option<&ClipboardSnapshot> {
        self.clipboard.as_ref()
    }

    /// Whether paste has something to apply.
    pub fn can_paste(&self) -> bool {
        self.clipboard.is_some()
    }

    /// Start-of-frame sync with the current locks.
    pub fn sync<M: HousingMemory + ?Sized>(
        &self,
        memory: &mut M,
        transform: &mut Transform,
    ) -> SyncOutcome {
        self.sync.run(memory, &self.locks, transform)
    }

    /// Apply one event to `transform` and write the affected group through
    /// `memory` at once.
    ///
    /// Position edits write the full position; yaw edits read the current
    /// rotation and write it back with only yaw replaced.
    pub fn apply<M: HousingMemory + ?Sized>(
        &mut self,
        event: ControlEvent,
        transform: &mut Transform,
        memory: &mut M,
        grid: GridIncrement,
    ) -> Result<ControlOutcome, ControlError> {
        let outcome = match event {
            ControlEvent::Set { field, value } => {
                edit_field(field, value, transform, memory)?
            }
            ControlEvent::Drag { field, ticks } => {
                let value = transform.get(field) + grid.scale(ticks);
                edit_field(field, value, transform, memory)?
            }
            ControlEvent::Scroll { field, wheel } => {
                let delta = grid.scale(wheel);
                if delta == 0.0 {
                    ControlOutcome::Unchanged
                } else {
                    edit_field(field, transform.get(field) + delta, transform, memory)?
                }
            }
            ControlEvent::ToggleLock(axis) => {
                let state = self.locks.toggle(axis, axis.get(transform.position));
                #[cfg(feature = "tracing")]
                debug!(axis = axis.name(), ?state, "axis lock toggled");
                ControlOutcome::LockToggled(axis, state)
            }
            ControlEvent::Copy => {
                self.clipboard = Some(ClipboardSnapshot::capture(transform));
                #[cfg(feature = "tracing")]
                debug!(position = ?transform.position, rotation_y = transform.rotation_y, "transform copied");
                ControlOutcome::Copied
            }
            ControlEvent::Paste => {
                let snapshot = self.clipboard.ok_or(ControlError::NoSnapshot)?;
                *transform = snapshot.transform();
                memory.write_position(transform.position);
                let rotation = transform.merge_rotation(memory.read_rotation());
                memory.write_rotation(rotation);
                #[cfg(feature = "tracing")]
                debug!(position = ?transform.position, rotation_y = transform.rotation_y, "transform pasted");
                ControlOutcome::Pasted
            }
        };
        Ok(outcome)
    }

    /// Apply `event` only if the item can be touched under `availability`.
    ///
    /// Events that read or write the game are rejected with
    /// [`ControlError::Unavailable`] unless `availability` is ready; lock
    /// toggles and copy still update local state.
    pub fn apply_gated<M: HousingMemory + ?Sized>(
        &mut self,
        availability: Availability,
        event: ControlEvent,
        transform: &mut Transform,
        memory: &mut M,
        grid: GridIncrement,
    ) -> Result<ControlOutcome, ControlError> {
        if event.touches_game() && !availability.is_ready() {
            return Err(ControlError::Unavailable(availability));
        }
        self.apply(event, transform, memory, grid)
    }

    /// Run one frame: sync first, then every event in render order.
    ///
    /// When sync was skipped, events that would touch the game are rejected
    /// and only lock toggles and copy apply. Rejected events are reported,
    /// not fatal.
    pub fn frame<M, I>(
        &mut self,
        memory: &mut M,
        transform: &mut Transform,
        grid: GridIncrement,
        events: I,
    ) -> FrameReport
    where
        M: HousingMemory + ?Sized,
        I: IntoIterator<Item = ControlEvent>,
    {
        let sync = self.sync(&mut *memory, &mut *transform);
        let availability = sync.availability();
        let events = events
            .into_iter()
            .map(|event| {
                let res =
                    self.apply_gated(availability, event, &mut *transform, &mut *memory, grid);
                #[cfg(feature = "tracing")]
                if let Err(err) = &res {
                    warn!(?event, %err, "control event rejected");
                }
                res
            })
            .collect();
        FrameReport { sync, events }
    }
}

fn edit_field<M: HousingMemory + ?Sized>(
    field: Field,
    value: f32,
    transform: &mut Transform,
    memory: &mut M,
) -> Result<ControlOutcome, ControlError> {
    if !value.is_finite() {
        return Err(ControlError::NonFiniteValue { field });
    }
    if transform.get(field) == value {
        return Ok(ControlOutcome::Unchanged);
    }
    transform.set(field, value);
    if field.axis().is_some() {
        memory.write_position(transform.position);
        Ok(ControlOutcome::PositionWritten)
    } else {
        let rotation = transform.merge_rotation(memory.read_rotation());
        memory.write_rotation(rotation);
        Ok(ControlOutcome::RotationWritten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::testing::FakeHousing;
    use approx::assert_relative_eq;
    use glam::Vec3;
    use pretty_assertions::assert_eq;

    fn grid(v: f32) -> GridIncrement {
        GridIncrement::new(v)
    }

    #[test]
    fn drag_moves_by_grid_steps_and_writes_once() {
        let mut mem = FakeHousing::ready(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        let mut controls = ItemControls::new();
        let mut t = Transform::new(mem.position, 0.0);

        let out = controls.apply(
            ControlEvent::Drag {
                field: Field::X,
                ticks: 2.0,
            },
            &mut t,
            &mut mem,
            grid(0.25),
        );

        assert_eq!(out, Ok(ControlOutcome::PositionWritten));
        assert_eq!(t.position, Vec3::new(1.5, 2.0, 3.0));
        assert_eq!(mem.position_writes, vec![Vec3::new(1.5, 2.0, 3.0)]);
        assert!(mem.rotation_writes.is_empty());
    }

    #[test]
    fn scroll_scales_wheel_by_grid() {
        let mut mem = FakeHousing::ready(Vec3::ZERO, Vec3::ZERO);
        let mut controls = ItemControls::new();
        let mut t = Transform::default();

        let out = controls.apply(
            ControlEvent::Scroll {
                field: Field::Z,
                wheel: -3.0,
            },
            &mut t,
            &mut mem,
            grid(0.5),
        );
        assert_eq!(out, Ok(ControlOutcome::PositionWritten));
        assert_relative_eq!(t.position.z, -1.5);
        assert_eq!(mem.position_writes.len(), 1);
    }

    #[test]
    fn zero_wheel_and_zero_drag_do_not_write() {
        let mut mem = FakeHousing::ready(Vec3::ONE, Vec3::ZERO);
        let mut controls = ItemControls::new();
        let mut t = Transform::new(Vec3::ONE, 0.0);

        for event in [
            ControlEvent::Scroll {
                field: Field::X,
                wheel: 0.0,
            },
            ControlEvent::Drag {
                field: Field::Y,
                ticks: 0.0,
            },
            ControlEvent::Set {
                field: Field::Z,
                value: 1.0,
            },
        ] {
            let out = controls.apply(event, &mut t, &mut mem, grid(1.0));
            assert_eq!(out, Ok(ControlOutcome::Unchanged));
        }
        assert!(mem.position_writes.is_empty());
    }

    #[test]
    fn yaw_edits_merge_into_the_game_rotation() {
        let mut mem = FakeHousing::ready(Vec3::ZERO, Vec3::new(0.3, 1.0, -0.4));
        let mut controls = ItemControls::new();
        let mut t = Transform::new(Vec3::ZERO, 1.0);

        let out = controls.apply(
            ControlEvent::Scroll {
                field: Field::RotationY,
                wheel: 1.0,
            },
            &mut t,
            &mut mem,
            grid(0.5),
        );

        assert_eq!(out, Ok(ControlOutcome::RotationWritten));
        assert_eq!(mem.rotation_writes, vec![Vec3::new(0.3, 1.5, -0.4)]);
        assert!(mem.position_writes.is_empty());
    }

    #[test]
    fn non_finite_edits_are_rejected_without_writing() {
        let mut mem = FakeHousing::ready(Vec3::ZERO, Vec3::ZERO);
        let mut controls = ItemControls::new();
        let mut t = Transform::default();

        let out = controls.apply(
            ControlEvent::Set {
                field: Field::Y,
                value: f32::NAN,
            },
            &mut t,
            &mut mem,
            grid(1.0),
        );
        assert_eq!(out, Err(ControlError::NonFiniteValue { field: Field::Y }));
        assert_eq!(t, Transform::default());
        assert!(mem.position_writes.is_empty());
    }

    #[test]
    fn lock_toggle_captures_current_value_without_writing() {
        let mut mem = FakeHousing::ready(Vec3::ZERO, Vec3::ZERO);
        let mut controls = ItemControls::new();
        let mut t = Transform::new(Vec3::new(0.0, 2.0, 0.0), 0.0);

        let out = controls.apply(ControlEvent::ToggleLock(Axis::Y), &mut t, &mut mem, grid(1.0));
        assert_eq!(
            out,
            Ok(ControlOutcome::LockToggled(Axis::Y, LockState::Locked(2.0)))
        );
        assert_eq!(controls.locks().get(Axis::Y), Some(2.0));
        assert!(mem.position_writes.is_empty());

        let out = controls.apply(ControlEvent::ToggleLock(Axis::Y), &mut t, &mut mem, grid(1.0));
        assert_eq!(
            out,
            Ok(ControlOutcome::LockToggled(Axis::Y, LockState::Unlocked))
        );
    }

    #[test]
    fn paste_without_copy_is_rejected() {
        let mut mem = FakeHousing::ready(Vec3::ZERO, Vec3::ZERO);
        let mut controls = ItemControls::new();
        let mut t = Transform::default();

        assert!(!controls.can_paste());
        let out = controls.apply(ControlEvent::Paste, &mut t, &mut mem, grid(1.0));
        assert_eq!(out, Err(ControlError::NoSnapshot));
        assert!(mem.position_writes.is_empty());
        assert!(mem.rotation_writes.is_empty());
    }

    #[test]
    fn copy_then_paste_restores_position_and_yaw_only() {
        let mut mem = FakeHousing::ready(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.1, 90.0, 0.2));
        let mut controls = ItemControls::new();
        let mut t = Transform::new(mem.position, 90.0);

        assert_eq!(
            controls.apply(ControlEvent::Copy, &mut t, &mut mem, grid(1.0)),
            Ok(ControlOutcome::Copied)
        );
        assert!(mem.position_writes.is_empty());

        // Another item, with different pitch/roll.
        mem.position = Vec3::new(-5.0, 0.0, 8.0);
        mem.rotation = Vec3::new(0.7, 10.0, -0.7);
        t = Transform::new(mem.position, 10.0);

        let out = controls.apply(ControlEvent::Paste, &mut t, &mut mem, grid(1.0));
        assert_eq!(out, Ok(ControlOutcome::Pasted));
        assert_eq!(t, Transform::new(Vec3::new(1.0, 2.0, 3.0), 90.0));
        assert_eq!(mem.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(mem.rotation, Vec3::new(0.7, 90.0, -0.7));
        // Paste is non-destructive.
        assert!(controls.can_paste());
    }

    #[test]
    fn frame_runs_sync_before_edits() {
        let mut mem = FakeHousing::ready(Vec3::new(1.0, 5.0, 3.0), Vec3::ZERO);
        let mut controls = ItemControls::new();
        controls.locks_mut().toggle(Axis::Y, 2.0);
        let mut t = Transform::default();

        let report = controls.frame(
            &mut mem,
            &mut t,
            grid(1.0),
            [ControlEvent::Set {
                field: Field::Y,
                value: 4.0,
            }],
        );

        assert!(report.sync.is_synced());
        assert_eq!(report.events, vec![Ok(ControlOutcome::PositionWritten)]);
        // Sync wrote the lock, then the edit won for this frame.
        assert_eq!(
            mem.position_writes,
            vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 4.0, 3.0)]
        );

        // The lock is back in force on the next frame.
        controls.frame(&mut mem, &mut t, grid(1.0), []);
        assert_eq!(t.position.y, 2.0);
    }

    #[test]
    fn skipped_frame_only_applies_local_events() {
        let mut mem = FakeHousing::ready(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        let mut controls = ItemControls::new();
        let mut t = Transform::default();
        controls.frame(&mut mem, &mut t, grid(1.0), [ControlEvent::Copy]);
        mem.position_writes.clear();

        mem.selected = false;
        let report = controls.frame(
            &mut mem,
            &mut t,
            grid(1.0),
            [
                ControlEvent::Paste,
                ControlEvent::Scroll {
                    field: Field::RotationY,
                    wheel: 1.0,
                },
                ControlEvent::ToggleLock(Axis::X),
            ],
        );

        let unavailable = Err(ControlError::Unavailable(Availability::NoItemSelected));
        assert_eq!(
            report.events,
            vec![
                unavailable,
                unavailable,
                Ok(ControlOutcome::LockToggled(Axis::X, LockState::Locked(1.0))),
            ]
        );
        assert!(mem.position_writes.is_empty());
        assert!(mem.rotation_writes.is_empty());
    }
}
