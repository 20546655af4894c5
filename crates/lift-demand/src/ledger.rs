//! `DemandLedger` — per-floor, per-direction outstanding-call counters.
//!
//! # Why this exists
//!
//! Calls that cannot be assigned to an idle elevator immediately must not be
//! lost: they stay recorded here until some elevator, finishing its current
//! work, commits to the floor.  The ledger is the single source of truth for
//! "how much unmet demand exists at each floor, per direction".
//!
//! # Mutation contract
//!
//! Counters grow only via [`record`][DemandLedger::record] and shrink only
//! via [`clear`][DemandLedger::clear].  Keeping exactly two mutation paths is
//! what guarantees no call is double-counted or silently dropped when several
//! elevators make dispatch decisions against the same floor.
//!
//! # Performance note
//!
//! Floors are dense integers, so the counters are two floor-indexed
//! `Vec<u32>`s rather than hash maps.  Every operation is O(1) except
//! [`hottest_floor`][DemandLedger::hottest_floor], which is an O(F) scan —
//! F is a building's floor count, so the constant is tiny.

use lift_core::{Direction, FloorId};

use crate::{DemandError, DemandResult};

/// Outstanding call-button presses per floor, tracked separately for the
/// up and down directions.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemandLedger {
    up:   Vec<u32>,
    down: Vec<u32>,
}

impl DemandLedger {
    /// Create a ledger with all counters zero.
    ///
    /// A zero-floor building is rejected: the controller's default-parking
    /// and hottest-floor conventions both assume floor 0 exists.
    pub fn new(floor_count: u16) -> DemandResult<Self> {
        if floor_count == 0 {
            return Err(DemandError::Config(
                "demand ledger requires at least one floor".into(),
            ));
        }
        Ok(Self {
            up:   vec![0; floor_count as usize],
            down: vec![0; floor_count as usize],
        })
    }

    /// Number of floors this ledger tracks.
    #[inline]
    pub fn floor_count(&self) -> u16 {
        self.up.len() as u16
    }

    // ── Mutation (the only two paths) ─────────────────────────────────────

    /// Record one call-button press at `floor` in `direction`.
    ///
    /// # Panics
    /// Panics if `floor` is out of range — an out-of-range floor in an event
    /// is a host/controller contract violation, not a runtime condition.
    pub fn record(&mut self, floor: FloorId, direction: Direction) {
        self.assert_in_range(floor);
        self.counters_mut(direction)[floor.index()] += 1;
    }

    /// Reset `floor`'s counter for `direction` to zero.
    ///
    /// Called exactly when an elevator commits to serve `floor` while moving
    /// in `direction` — not when merely passing.  The opposite direction's
    /// counter is untouched.
    ///
    /// # Panics
    /// Panics if `floor` is out of range.
    pub fn clear(&mut self, floor: FloorId, direction: Direction) {
        self.assert_in_range(floor);
        self.counters_mut(direction)[floor.index()] = 0;
    }

    // ── Queries (pure) ────────────────────────────────────────────────────

    /// Outstanding calls at `floor` in `direction`.
    ///
    /// # Panics
    /// Panics if `floor` is out of range.
    pub fn demand(&self, floor: FloorId, direction: Direction) -> u32 {
        self.assert_in_range(floor);
        self.counters(direction)[floor.index()]
    }

    /// Combined up + down calls at `floor`.
    ///
    /// # Panics
    /// Panics if `floor` is out of range.
    pub fn combined(&self, floor: FloorId) -> u32 {
        self.assert_in_range(floor);
        self.up[floor.index()] + self.down[floor.index()]
    }

    /// Combined demand for every floor, in ascending floor order.
    pub fn combined_all(&self) -> impl Iterator<Item = (FloorId, u32)> + '_ {
        self.up
            .iter()
            .zip(&self.down)
            .enumerate()
            .map(|(i, (u, d))| (FloorId(i as u16), u + d))
    }

    /// The floor with the strictly greatest combined demand.
    ///
    /// Ties break to the lowest floor index (first encountered in the
    /// ascending scan).  If every counter is zero, returns the ground floor
    /// by convention — a deliberate default, not an error.
    pub fn hottest_floor(&self) -> FloorId {
        let mut hottest = FloorId::GROUND;
        let mut best = 0u32;
        for (floor, count) in self.combined_all() {
            if count > best {
                hottest = floor;
                best = count;
            }
        }
        hottest
    }

    /// Sum of every counter in both directions.  Diagnostics and tests.
    pub fn total(&self) -> u32 {
        self.up.iter().chain(&self.down).sum()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn counters(&self, direction: Direction) -> &[u32] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }

    fn counters_mut(&mut self, direction: Direction) -> &mut [u32] {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }

    #[track_caller]
    fn assert_in_range(&self, floor: FloorId) {
        assert!(
            floor.index() < self.up.len(),
            "floor {floor} out of range (floor_count = {})",
            self.up.len(),
        );
    }
}
