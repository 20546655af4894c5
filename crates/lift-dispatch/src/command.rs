//! Outbound commands — the controller's fire-and-forget instructions to the
//! host's elevator model.

use lift_core::{ElevatorId, FloorId};

/// An instruction for the host to apply to one elevator.
///
/// Commands are produced by [`DispatchPolicy`][crate::DispatchPolicy] hooks
/// and returned from [`Controller::handle`][crate::Controller::handle]; the
/// host applies them in order.  Issuing a new command is the only way to
/// abort in-flight intent — there is no cancellation channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Send `elevator` to `floor`.
    ///
    /// With `immediate` set, the host inserts the floor at the *front* of the
    /// elevator's destination queue (an ad-hoc stop); otherwise it appends.
    GoToFloor {
        elevator:  ElevatorId,
        floor:     FloorId,
        immediate: bool,
    },

    /// Clear `elevator`'s destination queue and halt it.
    ///
    /// Part of the host contract; the reference policy never issues it, but
    /// in-transit-rescheduling policies may.
    Stop { elevator: ElevatorId },
}

impl Command {
    /// Convenience constructor for the common non-immediate case.
    #[inline]
    pub fn go_to(elevator: ElevatorId, floor: FloorId) -> Command {
        Command::GoToFloor { elevator, floor, immediate: false }
    }

    /// The elevator this command addresses.
    #[inline]
    pub fn elevator(&self) -> ElevatorId {
        match *self {
            Command::GoToFloor { elevator, .. } => elevator,
            Command::Stop { elevator } => elevator,
        }
    }
}
