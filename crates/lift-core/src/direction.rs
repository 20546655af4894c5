//! Travel direction shared by call buttons, passing-floor events, and the
//! demand ledger's directional counters.

use crate::FloorId;

/// The direction of a call or of an elevator's travel.
///
/// There is deliberately no `Stopped` variant: a stationary elevator has no
/// direction, and every place a `Direction` appears (call buttons, passing
/// events, demand counters) is inherently two-valued.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The direction an elevator travels from `from` to `to`.
    ///
    /// `Up` iff `to` is strictly above `from`; a destination at or below the
    /// current floor infers `Down`.
    #[inline]
    pub fn of_travel(from: FloorId, to: FloorId) -> Direction {
        if to > from { Direction::Up } else { Direction::Down }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Human-readable label, useful for log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
