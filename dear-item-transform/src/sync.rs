//! Start-of-frame reconciliation between the game value and the axis locks.

#[cfg(feature = "tracing")]
use tracing::trace;

use crate::lock::{AxisLocks, AxisSet};
use crate::memory::{Availability, HousingMemory};
use crate::transform::Transform;

/// When the sync pass writes the resolved position back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WriteBack {
    /// Write every synced frame, echoing the read when no lock applies.
    /// Requires an idempotent `write_position`.
    #[default]
    Always,
    /// Write only when a lock changed at least one axis. For hosts whose
    /// position write has side effects on redundant writes.
    WhenForced,
}

/// Result of one sync pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyncOutcome {
    /// The controls are not available; nothing was read or written.
    Skipped(Availability),
    /// The local transform was refreshed from the game.
    Synced {
        /// Axes a lock overrode this frame.
        forced: AxisSet,
        /// Whether the resolved position was written back.
        wrote: bool,
    },
}

impl SyncOutcome {
    /// Whether the pass ran.
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncOutcome::Synced { .. })
    }

    /// Availability the pass saw. A pass only runs when the item is ready.
    pub fn availability(&self) -> Availability {
        match self {
            SyncOutcome::Skipped(availability) => *availability,
            SyncOutcome::Synced { .. } => Availability::Ready,
        }
    }
}

/// Pulls the game transform, applies axis locks and pushes the result back.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransformSync {
    write_back: WriteBack,
}

impl TransformSync {
    /// Sync pass with the given write-back policy.
    pub fn new(write_back: WriteBack) -> Self {
        Self { write_back }
    }

    /// Current write-back policy.
    pub fn write_back(&self) -> WriteBack {
        self.write_back
    }

    /// Run the pass for this frame.
    ///
    /// On anything but [`Availability::Ready`] this is a no-op and `transform`
    /// keeps its stale value.
    pub fn run<M: HousingMemory + ?Sized>(
        &self,
        memory: &mut M,
        locks: &AxisLocks,
        transform: &mut Transform,
    ) -> SyncOutcome {
        let availability = Availability::evaluate(&*memory);
        if !availability.is_ready() {
            #[cfg(feature = "tracing")]
            trace!(?availability, "transform sync skipped");
            return SyncOutcome::Skipped(availability);
        }

        let (position, forced) = locks.apply(memory.read_position());
        transform.position = position;
        transform.rotation_y = memory.read_rotation().y;

        let wrote = match self.write_back {
            WriteBack::Always => true,
            WriteBack::WhenForced => !forced.is_empty(),
        };
        if wrote {
            memory.write_position(position);
        }
        SyncOutcome::Synced { forced, wrote }
    }
}
