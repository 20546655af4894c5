//! Dispatch observer trait for diagnostics and data collection.

use lift_demand::DemandLedger;

use crate::{Command, Event};

/// Callbacks invoked by [`Controller::handle`][crate::Controller::handle] at
/// key points of event processing.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — call counter
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct CommandCounter { issued: usize }
///
/// impl DispatchObserver for CommandCounter {
///     fn on_command(&mut self, _event: &Event, _command: &Command) {
///         self.issued += 1;
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Called once per delivered event, before the policy runs.
    fn on_event(&mut self, _event: &Event) {}

    /// Called for every command the policy produced for `event`.
    fn on_command(&mut self, _event: &Event, _command: &Command) {}

    /// Called after the event is fully handled, with the ledger's new state.
    fn on_demand_snapshot(&mut self, _ledger: &DemandLedger) {}
}

/// A [`DispatchObserver`] that does nothing.  Use when you need to call
/// `handle` but don't want diagnostics.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}

/// Prints one line per event and per command to stdout — the controller's
/// console diagnostics.
pub struct ConsoleObserver;

impl DispatchObserver for ConsoleObserver {
    fn on_event(&mut self, event: &Event) {
        match event {
            Event::CallButtonPressed { floor, direction } => {
                println!("floor {} called for {direction}", floor.0);
            }
            Event::StoppedAtFloor { elevator, floor } => {
                println!("elevator {} stopped at floor {}", elevator.0, floor.0);
            }
            Event::PassingFloor { elevator, floor, direction } => {
                println!(
                    "elevator {} passing floor {} going {direction}",
                    elevator.0, floor.0
                );
            }
            Event::Idle { .. } | Event::FloorButtonPressed { .. } => {}
        }
    }

    fn on_command(&mut self, _event: &Event, command: &Command) {
        match command {
            Command::GoToFloor { elevator, floor, immediate: true } => {
                println!(
                    "elevator {} making ad-hoc stop at floor {}",
                    elevator.0, floor.0
                );
            }
            Command::GoToFloor { elevator, floor, immediate: false } => {
                println!("elevator {} going to floor {}", elevator.0, floor.0);
            }
            Command::Stop { elevator } => {
                println!("elevator {} halted", elevator.0);
            }
        }
    }

    fn on_demand_snapshot(&mut self, ledger: &DemandLedger) {
        let counts: Vec<u32> = ledger.combined_all().map(|(_, c)| c).collect();
        println!("floor demand: {counts:?}");
    }
}
