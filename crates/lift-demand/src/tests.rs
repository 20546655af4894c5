//! Unit tests for the demand ledger.

use lift_core::{Direction, FloorId};

use crate::DemandLedger;

fn ledger(floors: u16) -> DemandLedger {
    DemandLedger::new(floors).unwrap()
}

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn starts_all_zero() {
        let l = ledger(4);
        assert_eq!(l.floor_count(), 4);
        assert_eq!(l.total(), 0);
        for (_, count) in l.combined_all() {
            assert_eq!(count, 0);
        }
    }

    #[test]
    fn rejects_zero_floors() {
        assert!(DemandLedger::new(0).is_err());
    }
}

#[cfg(test)]
mod record_and_clear {
    use super::*;

    #[test]
    fn record_increments_one_direction() {
        let mut l = ledger(3);
        l.record(FloorId(1), Direction::Up);
        l.record(FloorId(1), Direction::Up);
        l.record(FloorId(1), Direction::Down);
        assert_eq!(l.demand(FloorId(1), Direction::Up), 2);
        assert_eq!(l.demand(FloorId(1), Direction::Down), 1);
        assert_eq!(l.combined(FloorId(1)), 3);
        assert_eq!(l.combined(FloorId(0)), 0);
    }

    #[test]
    fn clear_resets_only_named_direction() {
        let mut l = ledger(3);
        l.record(FloorId(2), Direction::Up);
        l.record(FloorId(2), Direction::Down);
        l.clear(FloorId(2), Direction::Up);
        assert_eq!(l.demand(FloorId(2), Direction::Up), 0);
        // Opposite-direction demand stays outstanding.
        assert_eq!(l.demand(FloorId(2), Direction::Down), 1);
    }

    #[test]
    fn clear_on_zero_counter_is_harmless() {
        let mut l = ledger(2);
        l.clear(FloorId(0), Direction::Down);
        assert_eq!(l.total(), 0);
    }

    // Demand conservation: after any record/clear sequence, a counter equals
    // calls recorded minus full resets — exercised here as an interleaving.
    #[test]
    fn conservation_across_interleaving() {
        let mut l = ledger(4);
        l.record(FloorId(3), Direction::Up);
        l.record(FloorId(3), Direction::Up);
        l.clear(FloorId(3), Direction::Up);
        assert_eq!(l.demand(FloorId(3), Direction::Up), 0);
        l.record(FloorId(3), Direction::Up);
        assert_eq!(l.demand(FloorId(3), Direction::Up), 1);
        assert_eq!(l.total(), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn record_out_of_range_panics() {
        let mut l = ledger(2);
        l.record(FloorId(2), Direction::Up);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn demand_out_of_range_panics() {
        let l = ledger(2);
        let _ = l.demand(FloorId(9), Direction::Down);
    }
}

#[cfg(test)]
mod hottest_floor {
    use super::*;

    #[test]
    fn all_zero_defaults_to_ground() {
        assert_eq!(ledger(5).hottest_floor(), FloorId(0));
    }

    #[test]
    fn picks_strictly_greatest() {
        let mut l = ledger(5);
        l.record(FloorId(1), Direction::Up);
        l.record(FloorId(4), Direction::Down);
        l.record(FloorId(4), Direction::Up);
        assert_eq!(l.hottest_floor(), FloorId(4));
    }

    #[test]
    fn combined_across_directions() {
        let mut l = ledger(5);
        l.record(FloorId(1), Direction::Up);
        l.record(FloorId(1), Direction::Down);
        l.record(FloorId(3), Direction::Up);
        assert_eq!(l.hottest_floor(), FloorId(1));
    }

    #[test]
    fn tie_breaks_to_lowest_floor() {
        let mut l = ledger(6);
        for _ in 0..3 {
            l.record(FloorId(2), Direction::Up);
            l.record(FloorId(5), Direction::Down);
        }
        l.record(FloorId(0), Direction::Up);
        assert_eq!(l.hottest_floor(), FloorId(2));
    }
}
