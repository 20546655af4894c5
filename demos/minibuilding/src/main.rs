//! minibuilding — smallest runnable demo of the rust_lift controller.
//!
//! A 6-floor, 2-elevator toy building with randomly arriving passengers,
//! driven for a fixed number of ticks.  The building host owns motion and
//! passengers; the controller owns dispatch.  Deterministic under SEED.

mod building;

use anyhow::Result;

use lift_core::BuildingConfig;
use lift_dispatch::{Command, Controller, DispatchObserver, Event, GreedyPolicy};

use building::Building;

// ── Constants ─────────────────────────────────────────────────────────────────

const FLOOR_COUNT:    u16   = 6;
const ELEVATOR_COUNT: u16   = 2;
const CAR_CAPACITY:   usize = 4;
const SPAWN_PROB:     f64   = 0.35; // chance of a new passenger per tick
const SEED:           u64   = 42;
const TICKS:          usize = 500;

// ── Command tallying observer ─────────────────────────────────────────────────

#[derive(Default)]
struct CommandTally {
    events:        usize,
    dispatches:    usize,
    ad_hoc_stops:  usize,
}

impl DispatchObserver for CommandTally {
    fn on_event(&mut self, _event: &Event) {
        self.events += 1;
    }

    fn on_command(&mut self, _event: &Event, command: &Command) {
        match command {
            Command::GoToFloor { immediate: true, .. } => self.ad_hoc_stops += 1,
            Command::GoToFloor { immediate: false, .. } => self.dispatches += 1,
            Command::Stop { .. } => {}
        }
    }
}

fn main() -> Result<()> {
    let config = BuildingConfig::new(FLOOR_COUNT, ELEVATOR_COUNT);
    let mut controller = Controller::new(config, GreedyPolicy::default())?;

    let mut building = Building::new(FLOOR_COUNT, ELEVATOR_COUNT, CAR_CAPACITY, SPAWN_PROB, SEED);
    let mut tally = CommandTally::default();

    for tick in 0..TICKS {
        building.tick(&mut controller, &mut tally);
        // The reserved periodic hook; a safe no-op in the reference policy.
        let rebalance = controller.update(1.0);
        debug_assert!(rebalance.is_empty());
        if tick % 100 == 0 {
            println!(
                "tick {tick}: {} delivered, {} waiting, {} outstanding calls",
                building.stats.delivered,
                building.still_waiting(),
                controller.ledger().total(),
            );
        }
    }

    let summary = serde_json::json!({
        "ticks":             TICKS,
        "passengers": {
            "spawned":       building.stats.spawned,
            "delivered":     building.stats.delivered,
            "still_waiting": building.still_waiting(),
        },
        "elevator_stops":    building.stats.stops,
        "commands": {
            "dispatches":    tally.dispatches,
            "ad_hoc_stops":  tally.ad_hoc_stops,
        },
        "events_handled":    tally.events,
        "outstanding_calls": controller.ledger().total(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
