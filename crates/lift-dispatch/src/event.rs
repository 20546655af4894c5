//! Inbound events — everything the host simulation reports to the controller.

use lift_core::{Direction, ElevatorId, FloorId};

/// One event delivered by the host.
///
/// Events are delivered one at a time; each handler runs to completion before
/// the next event arrives.  The host guarantees per-elevator physical order
/// (a stop at a floor is never delivered before the passing events for the
/// floors crossed on the way there).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// An elevator has nothing to do.  Reserved: the reference policy takes
    /// no action, but [`DispatchPolicy`][crate::DispatchPolicy] implementors
    /// may act on it.
    Idle { elevator: ElevatorId },

    /// A passenger inside `elevator` pressed a destination button.  Reserved:
    /// the host's own pressed-floor mechanics already guarantee the visit.
    FloorButtonPressed { elevator: ElevatorId, floor: FloorId },

    /// `elevator` is about to pass `floor` (without currently stopping)
    /// while moving in `direction`.
    PassingFloor {
        elevator:  ElevatorId,
        floor:     FloorId,
        direction: Direction,
    },

    /// `elevator` has come to rest at `floor`.
    StoppedAtFloor { elevator: ElevatorId, floor: FloorId },

    /// A floor-side call button was pressed at `floor` requesting travel in
    /// `direction`.
    CallButtonPressed { floor: FloorId, direction: Direction },
}
