//! The `DispatchPolicy` trait — the main extension point for user code.

use lift_core::{Direction, ElevatorId, FloorId};
use lift_demand::DemandLedger;

use crate::{Command, Fleet};

/// Pluggable dispatch policy.
///
/// Implement this trait to define how the controller reacts to building
/// events.  Hooks read live elevator status through the [`Fleet`] boundary
/// and return [`Command`]s for the host to apply; they never mutate host
/// state directly.
///
/// # Ledger access
///
/// The [`Controller`][crate::Controller] owns the [`DemandLedger`] and is the
/// only place call-button presses are recorded.  Hooks receive the ledger
/// read-only, except [`on_stopped`][Self::on_stopped], which may clear the
/// demand it commits to serving — the ledger's only shrink path.
///
/// # Required methods
///
/// `on_call`, `on_stopped`, and `on_passing` carry the policy.  The idle and
/// in-cab button hooks default to no-ops: in the reference policy the host's
/// own pressed-floor mechanics already guarantee in-cab requests are served,
/// so no extra bookkeeping is needed — but the seam is here for policies
/// that want it.
pub trait DispatchPolicy {
    /// A floor-side call button was pressed (the press is already recorded
    /// in `ledger` when this runs).  Return an assignment for an idle
    /// elevator, or nothing to leave the demand for a later stop decision.
    fn on_call(
        &self,
        floor:     FloorId,
        direction: Direction,
        ledger:    &DemandLedger,
        fleet:     &dyn Fleet,
    ) -> Vec<Command>;

    /// `elevator` came to rest at `floor`.  Choose its next destination and
    /// clear the demand being committed to.
    fn on_stopped(
        &self,
        elevator: ElevatorId,
        floor:    FloorId,
        ledger:   &mut DemandLedger,
        fleet:    &dyn Fleet,
    ) -> Vec<Command>;

    /// `elevator` is about to pass `floor` moving in `direction`.  May
    /// request an ad-hoc stop.
    fn on_passing(
        &self,
        elevator:  ElevatorId,
        floor:     FloorId,
        direction: Direction,
        ledger:    &DemandLedger,
        fleet:     &dyn Fleet,
    ) -> Vec<Command>;

    /// `elevator` reported idle.  Default: no action.
    fn on_idle(
        &self,
        _elevator: ElevatorId,
        _ledger:   &DemandLedger,
        _fleet:    &dyn Fleet,
    ) -> Vec<Command> {
        vec![]
    }

    /// A passenger inside `elevator` pressed the button for `floor`.
    /// Default: no action — the elevator's own pressed-floor mechanics
    /// (owned by the host) already ensure the floor will be visited.
    fn on_floor_button(
        &self,
        _elevator: ElevatorId,
        _floor:    FloorId,
        _ledger:   &DemandLedger,
        _fleet:    &dyn Fleet,
    ) -> Vec<Command> {
        vec![]
    }
}
