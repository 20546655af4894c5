//! The read-only host boundary: live elevator status queries.

use lift_core::{ElevatorId, FloorId};

/// Read-only view of the host's elevator fleet.
///
/// The controller holds no elevator state of its own — it looks up live
/// status through this trait at decision time.  Implementations are provided
/// by the host simulation (or by test doubles); all methods are cheap,
/// synchronous reads.
///
/// The trait is object-safe so policies can take `&dyn Fleet` and stay free
/// of host-type generics.
pub trait Fleet {
    /// Number of elevator cars, indexed `0..elevator_count`.
    fn elevator_count(&self) -> usize;

    /// The floor `elevator` currently occupies.  Only meaningful when the
    /// elevator is stopped or idle.
    fn current_floor(&self, elevator: ElevatorId) -> FloorId;

    /// Normalized occupancy estimate in `[0, 1]`.
    fn load_factor(&self, elevator: ElevatorId) -> f64;

    /// Floors requested by passengers already inside, unordered.
    fn pressed_floors(&self, elevator: ElevatorId) -> Vec<FloorId>;

    /// Floors the elevator is scheduled to visit, highest priority first.
    fn destination_queue(&self, elevator: ElevatorId) -> Vec<FloorId>;

    /// `true` if `elevator` has no pressed floors and no queued destinations
    /// — truly idle with no pending work.
    fn is_idle(&self, elevator: ElevatorId) -> bool {
        self.pressed_floors(elevator).is_empty() && self.destination_queue(elevator).is_empty()
    }
}
