//! The `Controller` — routes host events to the policy and owns the ledger.

use lift_core::{BuildingConfig, FloorId};
use lift_demand::DemandLedger;

use crate::{Command, DispatchObserver, DispatchPolicy, Event, Fleet};
use crate::{DispatchResult, NoopObserver};

/// The long-lived dispatch controller for one simulation run.
///
/// Owns the [`DemandLedger`] and a policy `P`, and converts each inbound
/// [`Event`] into zero or more [`Command`]s for the host to apply:
///
/// - `CallButtonPressed` → record on the ledger, then the policy's idle
///   assignment.
/// - `StoppedAtFloor`    → the policy's stop decision (which also clears the
///   served direction at that floor).
/// - `PassingFloor`      → the policy's ad-hoc stop check.
/// - `Idle`, `FloorButtonPressed` → reserved hooks (no-ops in the reference
///   policy).
///
/// All state is built fresh at construction; nothing persists across runs.
/// Single-threaded by design — the host delivers one event at a time and
/// each handler runs to completion.
pub struct Controller<P: DispatchPolicy> {
    config: BuildingConfig,
    ledger: DemandLedger,
    policy: P,
}

impl<P: DispatchPolicy> Controller<P> {
    /// Validate `config` and build a controller with an all-zero ledger.
    pub fn new(config: BuildingConfig, policy: P) -> DispatchResult<Self> {
        config.validate()?;
        let ledger = DemandLedger::new(config.floor_count)?;
        Ok(Self { config, ledger, policy })
    }

    /// Handle one host event, notifying `observer` of the event, every
    /// command produced, and the ledger's post-event state.
    ///
    /// # Panics
    /// Panics if the event names a floor outside the building — a host
    /// contract violation, never silently clamped.
    pub fn handle<O: DispatchObserver>(
        &mut self,
        event:    Event,
        fleet:    &dyn Fleet,
        observer: &mut O,
    ) -> Vec<Command> {
        observer.on_event(&event);

        let commands = match event {
            Event::CallButtonPressed { floor, direction } => {
                self.assert_in_building(floor);
                // The ledger's only increment site.
                self.ledger.record(floor, direction);
                self.policy.on_call(floor, direction, &self.ledger, fleet)
            }
            Event::StoppedAtFloor { elevator, floor } => {
                self.assert_in_building(floor);
                self.policy.on_stopped(elevator, floor, &mut self.ledger, fleet)
            }
            Event::PassingFloor { elevator, floor, direction } => {
                self.assert_in_building(floor);
                self.policy.on_passing(elevator, floor, direction, &self.ledger, fleet)
            }
            Event::Idle { elevator } => {
                self.policy.on_idle(elevator, &self.ledger, fleet)
            }
            Event::FloorButtonPressed { elevator, floor } => {
                self.assert_in_building(floor);
                self.policy.on_floor_button(elevator, floor, &self.ledger, fleet)
            }
        };

        for command in &commands {
            observer.on_command(&event, command);
        }
        observer.on_demand_snapshot(&self.ledger);

        commands
    }

    /// [`handle`][Self::handle] without diagnostics.
    pub fn handle_silent(&mut self, event: Event, fleet: &dyn Fleet) -> Vec<Command> {
        self.handle(event, fleet, &mut NoopObserver)
    }

    /// Periodic host tick hook.  Reserved for time-based rebalancing; the
    /// reference controller takes no action and must stay a safe no-op.
    pub fn update(&mut self, _dt_secs: f64) -> Vec<Command> {
        vec![]
    }

    /// The demand ledger, for diagnostics and assertions.
    pub fn ledger(&self) -> &DemandLedger {
        &self.ledger
    }

    /// The building configuration this controller was built with.
    pub fn config(&self) -> &BuildingConfig {
        &self.config
    }

    #[track_caller]
    fn assert_in_building(&self, floor: FloorId) {
        assert!(
            self.config.contains(floor),
            "event floor {floor} outside building (floor_count = {})",
            self.config.floor_count,
        );
    }
}
