//! A no-op policy — never issues a command.

use lift_core::{Direction, ElevatorId, FloorId};
use lift_demand::DemandLedger;

use crate::{Command, DispatchPolicy, Fleet};

/// A [`DispatchPolicy`] that returns no commands from every hook.
///
/// Useful as a placeholder in tests: the controller still records demand for
/// every call, so ledger bookkeeping can be asserted in isolation from any
/// dispatch decisions.
pub struct NoopPolicy;

impl DispatchPolicy for NoopPolicy {
    fn on_call(
        &self,
        _floor:     FloorId,
        _direction: Direction,
        _ledger:    &DemandLedger,
        _fleet:     &dyn Fleet,
    ) -> Vec<Command> {
        vec![]
    }

    fn on_stopped(
        &self,
        _elevator: ElevatorId,
        _floor:    FloorId,
        _ledger:   &mut DemandLedger,
        _fleet:    &dyn Fleet,
    ) -> Vec<Command> {
        vec![]
    }

    fn on_passing(
        &self,
        _elevator:  ElevatorId,
        _floor:     FloorId,
        _direction: Direction,
        _ledger:    &DemandLedger,
        _fleet:     &dyn Fleet,
    ) -> Vec<Command> {
        vec![]
    }
}
