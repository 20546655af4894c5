//! `GreedyPolicy` — the reference dispatch policy.
//!
//! Three rules, one per hook:
//!
//! - **Idle assignment**: a new call goes to the first idle elevator in
//!   index order; if none is idle the demand simply stays on the ledger.
//! - **Stop decision**: a full elevator unloads its own passengers first;
//!   otherwise it chases the hottest floor on the ledger, then its own
//!   pressed floors, and finally parks at ground.
//! - **Ad-hoc stop**: an under-capacity elevator passing a floor with
//!   same-direction demand stops for it.

use lift_core::{Direction, ElevatorId, FloorId};
use lift_demand::DemandLedger;

use crate::{Command, DispatchPolicy, Fleet};

/// The reference policy.  Stateless: every decision is a pure function of
/// the ledger and the fleet's live status.
#[derive(Clone, Debug)]
pub struct GreedyPolicy {
    /// Load-factor gate: `> threshold` is full (serve own passengers first),
    /// `< threshold` has spare capacity (eligible for ad-hoc stops).
    /// Exactly at the threshold neither rule applies.
    pub full_load_threshold: f64,
}

impl GreedyPolicy {
    pub fn new(full_load_threshold: f64) -> Self {
        Self { full_load_threshold }
    }

    /// The pressed floor closest to `current` by absolute distance.
    ///
    /// Ties break to the lowest floor index: the scan runs in ascending
    /// floor order and keeps the first strictly-closer candidate.  Returns
    /// `None` for an empty set — callers must check non-emptiness first.
    fn closest_pressed(current: FloorId, pressed: &[FloorId]) -> Option<FloorId> {
        let mut sorted = pressed.to_vec();
        sorted.sort_unstable();
        sorted
            .into_iter()
            .min_by_key(|&floor| floor.distance(current))
    }
}

impl Default for GreedyPolicy {
    fn default() -> Self {
        Self::new(lift_core::DEFAULT_FULL_LOAD_THRESHOLD)
    }
}

impl DispatchPolicy for GreedyPolicy {
    /// Assign the call to the first idle elevator, scanning in index order.
    ///
    /// First match wins — not necessarily the nearest car.  The O(E) scan is
    /// cheap and the lowest-index-first rule keeps runs reproducible.  With
    /// no idle elevator there is nothing to do here: the press is already on
    /// the ledger and will be picked up by whichever elevator next finishes
    /// its work.
    fn on_call(
        &self,
        floor:      FloorId,
        _direction: Direction,
        _ledger:    &DemandLedger,
        fleet:      &dyn Fleet,
    ) -> Vec<Command> {
        for i in 0..fleet.elevator_count() {
            let elevator = ElevatorId(i as u16);
            if fleet.is_idle(elevator) {
                return vec![Command::go_to(elevator, floor)];
            }
        }
        vec![]
    }

    /// Choose the next destination, first matching branch wins:
    ///
    /// 1. full and carrying passengers → closest pressed floor;
    /// 2. outstanding demand somewhere else → hottest floor;
    /// 3. carrying passengers → closest pressed floor;
    /// 4. nothing to do → park at ground.
    ///
    /// Then clear the ledger at the stop floor for the inferred direction of
    /// travel only — opposite-direction demand stays outstanding and must be
    /// served by a later stop, possibly this elevator's return trip.
    fn on_stopped(
        &self,
        elevator: ElevatorId,
        floor:    FloorId,
        ledger:   &mut DemandLedger,
        fleet:    &dyn Fleet,
    ) -> Vec<Command> {
        let pressed = fleet.pressed_floors(elevator);
        let load = fleet.load_factor(elevator);
        let hottest = ledger.hottest_floor();
        let hottest_demand = ledger.combined(hottest);

        let destination = if load > self.full_load_threshold && !pressed.is_empty() {
            // Guarded: closest_pressed is only reached with a non-empty set.
            Self::closest_pressed(floor, &pressed)
        } else if hottest_demand > 0 && hottest != floor {
            Some(hottest)
        } else if !pressed.is_empty() {
            Self::closest_pressed(floor, &pressed)
        } else {
            Some(FloorId::GROUND)
        };

        match destination {
            Some(destination) => {
                let direction = Direction::of_travel(floor, destination);
                ledger.clear(floor, direction);
                vec![Command::go_to(elevator, destination)]
            }
            // Unreachable in practice (both closest_pressed branches are
            // behind non-empty checks); issuing nothing is the safe answer.
            None => vec![],
        }
    }

    /// Stop for the passed floor when the elevator has spare capacity and
    /// the floor has demand in the direction of travel.
    ///
    /// The stop is inserted at the front of the destination queue.  The
    /// ledger is untouched here — clearing happens only when the elevator
    /// actually stops and the stop decision runs.
    fn on_passing(
        &self,
        elevator:  ElevatorId,
        floor:     FloorId,
        direction: Direction,
        ledger:    &DemandLedger,
        fleet:     &dyn Fleet,
    ) -> Vec<Command> {
        if fleet.load_factor(elevator) < self.full_load_threshold
            && ledger.demand(floor, direction) > 0
        {
            return vec![Command::GoToFloor { elevator, floor, immediate: true }];
        }
        vec![]
    }
}
