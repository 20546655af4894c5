//! `lift-dispatch` — events, commands, and the dispatch decision core.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`event`]      | `Event` — inbound host events                            |
//! | [`command`]    | `Command` — outbound elevator instructions               |
//! | [`fleet`]      | `Fleet` — read-only elevator status boundary             |
//! | [`policy`]     | `DispatchPolicy` trait                                   |
//! | [`greedy`]     | `GreedyPolicy` — the reference policy                    |
//! | [`noop`]       | `NoopPolicy` — placeholder that never issues commands    |
//! | [`controller`] | `Controller<P>` — event router owning the demand ledger  |
//! | [`observer`]   | `DispatchObserver`, `NoopObserver`, `ConsoleObserver`    |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`                     |
//!
//! # Design notes
//!
//! Handlers never call back into the host.  Each event produces a
//! `Vec<Command>` the host applies afterwards — a produce/apply split that
//! keeps every policy decision a pure function of (event, ledger, fleet
//! status) and therefore directly assertable in tests.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::BuildingConfig;
//! use lift_dispatch::{Controller, Event, GreedyPolicy, NoopObserver};
//!
//! let mut controller = Controller::new(
//!     BuildingConfig::new(floors, elevators),
//!     GreedyPolicy::default(),
//! )?;
//! for event in host_events {
//!     for command in controller.handle(event, &fleet, &mut NoopObserver) {
//!         fleet.apply(command);
//!     }
//! }
//! ```

pub mod command;
pub mod controller;
pub mod error;
pub mod event;
pub mod fleet;
pub mod greedy;
pub mod noop;
pub mod observer;
pub mod policy;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use command::Command;
pub use controller::Controller;
pub use error::{DispatchError, DispatchResult};
pub use event::Event;
pub use fleet::Fleet;
pub use greedy::GreedyPolicy;
pub use noop::NoopPolicy;
pub use observer::{ConsoleObserver, DispatchObserver, NoopObserver};
pub use policy::DispatchPolicy;
