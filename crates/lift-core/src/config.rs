//! Building topology and policy thresholds, fixed at initialization.

use crate::{FloorId, LiftError, LiftResult};

/// Default load-factor threshold separating "full" from "has spare capacity".
pub const DEFAULT_FULL_LOAD_THRESHOLD: f64 = 0.7;

/// Static description of the building a controller is dispatching for.
///
/// Constructed once per simulation run and never mutated.  The host owns the
/// actual floors and elevators; the controller only needs their counts and
/// the load gate.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingConfig {
    /// Number of floors, indexed `0..floor_count`.  Must be non-zero.
    pub floor_count: u16,

    /// Number of elevator cars, indexed `0..elevator_count`.  Must be non-zero.
    pub elevator_count: u16,

    /// Load-factor gate used by the dispatch policy.  An elevator with
    /// `load_factor > threshold` is treated as full (routes to its own
    /// pressed floors first); one with `load_factor < threshold` has spare
    /// capacity (eligible for ad-hoc stops).  Exactly at the threshold
    /// neither gate triggers.
    pub full_load_threshold: f64,
}

impl BuildingConfig {
    /// Config with the default 0.7 load threshold.
    pub fn new(floor_count: u16, elevator_count: u16) -> Self {
        Self {
            floor_count,
            elevator_count,
            full_load_threshold: DEFAULT_FULL_LOAD_THRESHOLD,
        }
    }

    /// Reject degenerate buildings and nonsensical thresholds.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floor_count == 0 {
            return Err(LiftError::Config("floor_count must be non-zero".into()));
        }
        if self.elevator_count == 0 {
            return Err(LiftError::Config("elevator_count must be non-zero".into()));
        }
        if !(self.full_load_threshold > 0.0 && self.full_load_threshold <= 1.0) {
            return Err(LiftError::Config(format!(
                "full_load_threshold {} outside (0, 1]",
                self.full_load_threshold
            )));
        }
        Ok(())
    }

    /// `true` if `floor` is a valid index in this building.
    #[inline]
    pub fn contains(&self, floor: FloorId) -> bool {
        floor.0 < self.floor_count
    }

    /// The default parking floor.
    #[inline]
    pub fn ground_floor(&self) -> FloorId {
        FloorId::GROUND
    }
}
