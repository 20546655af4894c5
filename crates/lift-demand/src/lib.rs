//! `lift-demand` — the outstanding-call ledger for the rust_lift controller.
//!
//! | Module     | Contents                              |
//! |------------|---------------------------------------|
//! | [`ledger`] | `DemandLedger`                        |
//! | [`error`]  | `DemandError`, `DemandResult<T>`      |

pub mod error;
pub mod ledger;

#[cfg(test)]
mod tests;

pub use error::{DemandError, DemandResult};
pub use ledger::DemandLedger;
