//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ElevatorId, FloorId};

    #[test]
    fn index_roundtrip() {
        let id = FloorId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(FloorId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(FloorId(0) < FloorId(1));
        assert!(ElevatorId(100) > ElevatorId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(FloorId::INVALID.0, u16::MAX);
        assert_eq!(ElevatorId::INVALID.0, u16::MAX);
        assert_eq!(FloorId::default(), FloorId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(FloorId(7).to_string(), "FloorId(7)");
        assert_eq!(ElevatorId(0).to_string(), "ElevatorId(0)");
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(FloorId(2).distance(FloorId(5)), 3);
        assert_eq!(FloorId(5).distance(FloorId(2)), 3);
        assert_eq!(FloorId(4).distance(FloorId(4)), 0);
    }

    #[test]
    fn ground_is_zero() {
        assert_eq!(FloorId::GROUND, FloorId(0));
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, FloorId};

    #[test]
    fn travel_up_iff_strictly_above() {
        assert_eq!(Direction::of_travel(FloorId(1), FloorId(3)), Direction::Up);
        assert_eq!(Direction::of_travel(FloorId(3), FloorId(1)), Direction::Down);
        // Same floor infers Down.
        assert_eq!(Direction::of_travel(FloorId(2), FloorId(2)), Direction::Down);
    }

    #[test]
    fn opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
    }

    #[test]
    fn display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Down.to_string(), "down");
    }
}

#[cfg(test)]
mod config {
    use crate::{BuildingConfig, FloorId};

    #[test]
    fn defaults() {
        let cfg = BuildingConfig::new(5, 2);
        assert_eq!(cfg.full_load_threshold, 0.7);
        assert_eq!(cfg.ground_floor(), FloorId(0));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_zero_floors() {
        assert!(BuildingConfig::new(0, 2).validate().is_err());
    }

    #[test]
    fn rejects_zero_elevators() {
        assert!(BuildingConfig::new(5, 0).validate().is_err());
    }

    #[test]
    fn rejects_bad_threshold() {
        let mut cfg = BuildingConfig::new(5, 2);
        cfg.full_load_threshold = 0.0;
        assert!(cfg.validate().is_err());
        cfg.full_load_threshold = 1.5;
        assert!(cfg.validate().is_err());
        cfg.full_load_threshold = 1.0;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn contains_bounds() {
        let cfg = BuildingConfig::new(3, 1);
        assert!(cfg.contains(FloorId(0)));
        assert!(cfg.contains(FloorId(2)));
        assert!(!cfg.contains(FloorId(3)));
        assert!(!cfg.contains(FloorId::INVALID));
    }
}
