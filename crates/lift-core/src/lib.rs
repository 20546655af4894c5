//! `lift-core` — foundational types for the `rust_lift` dispatch controller.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                   |
//! |---------------|--------------------------------------------|
//! | [`ids`]       | `FloorId`, `ElevatorId`                    |
//! | [`direction`] | `Direction` enum and travel inference      |
//! | [`config`]    | `BuildingConfig`                           |
//! | [`error`]     | `LiftError`, `LiftResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BuildingConfig, DEFAULT_FULL_LOAD_THRESHOLD};
pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use ids::{ElevatorId, FloorId};
