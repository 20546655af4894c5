//! A toy in-memory building host.
//!
//! Owns the physics the controller is not allowed to: one-floor-per-tick car
//! motion, passenger spawning/boarding/alighting, and event delivery.  The
//! controller only sees [`Event`]s and a read-only [`Fleet`] snapshot, and
//! answers with [`Command`]s — exactly the boundary a real host presents.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use lift_core::{Direction, ElevatorId, FloorId};
use lift_dispatch::{Command, Controller, DispatchObserver, DispatchPolicy, Event, Fleet};

// ── Passengers and cars ───────────────────────────────────────────────────────

#[derive(Clone, Copy)]
struct Passenger {
    destination: FloorId,
}

#[derive(Clone)]
struct Car {
    floor:     FloorId,
    queue:     Vec<FloorId>,
    occupants: Vec<Passenger>,
    /// Set after an Idle event fires so it fires once per idle period.
    announced_idle: bool,
}

// ── Read-only fleet snapshot ──────────────────────────────────────────────────

/// Point-in-time copy of car status handed to the controller.
///
/// Taken before each event delivery, the way a real host's accessors would
/// read live state.  Cheap at toy scale.
pub struct FleetView {
    capacity: usize,
    cars:     Vec<Car>,
}

impl Fleet for FleetView {
    fn elevator_count(&self) -> usize {
        self.cars.len()
    }

    fn current_floor(&self, elevator: ElevatorId) -> FloorId {
        self.cars[elevator.index()].floor
    }

    fn load_factor(&self, elevator: ElevatorId) -> f64 {
        self.cars[elevator.index()].occupants.len() as f64 / self.capacity as f64
    }

    fn pressed_floors(&self, elevator: ElevatorId) -> Vec<FloorId> {
        let mut floors: Vec<FloorId> = self.cars[elevator.index()]
            .occupants
            .iter()
            .map(|p| p.destination)
            .collect();
        floors.sort_unstable();
        floors.dedup();
        floors
    }

    fn destination_queue(&self, elevator: ElevatorId) -> Vec<FloorId> {
        self.cars[elevator.index()].queue.clone()
    }
}

// ── Building ──────────────────────────────────────────────────────────────────

/// Run statistics reported at the end of a demo run.
#[derive(Default)]
pub struct Stats {
    pub spawned:   usize,
    pub delivered: usize,
    pub stops:     usize,
}

pub struct Building {
    floor_count: u16,
    capacity:    usize,
    spawn_prob:  f64,
    cars:        Vec<Car>,
    waiting:     Vec<Vec<Passenger>>,
    rng:         SmallRng,
    pub stats:   Stats,
}

impl Building {
    pub fn new(floor_count: u16, elevator_count: u16, capacity: usize, spawn_prob: f64, seed: u64) -> Self {
        let car = Car {
            floor:          FloorId::GROUND,
            queue:          vec![],
            occupants:      vec![],
            announced_idle: false,
        };
        Self {
            floor_count,
            capacity,
            spawn_prob,
            cars: vec![car; elevator_count as usize],
            waiting: vec![vec![]; floor_count as usize],
            rng: SmallRng::seed_from_u64(seed),
            stats: Stats::default(),
        }
    }

    /// Waiting passengers across all floors (for the end-of-run summary).
    pub fn still_waiting(&self) -> usize {
        self.waiting.iter().map(Vec::len).sum()
    }

    /// Advance the building by one tick, delivering events to `controller`
    /// and applying whatever commands come back.
    pub fn tick<P: DispatchPolicy, O: DispatchObserver>(
        &mut self,
        controller: &mut Controller<P>,
        observer:   &mut O,
    ) {
        self.maybe_spawn_passenger(controller, observer);
        for i in 0..self.cars.len() {
            self.step_car(ElevatorId(i as u16), controller, observer);
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn snapshot(&self) -> FleetView {
        FleetView { capacity: self.capacity, cars: self.cars.clone() }
    }

    fn deliver<P: DispatchPolicy, O: DispatchObserver>(
        &mut self,
        event:      Event,
        controller: &mut Controller<P>,
        observer:   &mut O,
    ) {
        let view = self.snapshot();
        for command in controller.handle(event, &view, observer) {
            self.apply(command);
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::GoToFloor { elevator, floor, immediate } => {
                let car = &mut self.cars[elevator.index()];
                // Already parked there with nothing queued: the command is
                // satisfied as-is, and enqueueing it would re-trigger a stop
                // at the same floor every tick.
                if !immediate && car.queue.is_empty() && car.floor == floor {
                    return;
                }
                if immediate {
                    car.queue.insert(0, floor);
                } else {
                    car.queue.push(floor);
                }
                car.announced_idle = false;
            }
            Command::Stop { elevator } => self.cars[elevator.index()].queue.clear(),
        }
    }

    fn maybe_spawn_passenger<P: DispatchPolicy, O: DispatchObserver>(
        &mut self,
        controller: &mut Controller<P>,
        observer:   &mut O,
    ) {
        if self.floor_count < 2 || !self.rng.gen_bool(self.spawn_prob) {
            return;
        }
        let origin = FloorId(self.rng.gen_range(0..self.floor_count));
        let destination = loop {
            let f = FloorId(self.rng.gen_range(0..self.floor_count));
            if f != origin {
                break f;
            }
        };
        self.waiting[origin.index()].push(Passenger { destination });
        self.stats.spawned += 1;

        let direction = Direction::of_travel(origin, destination);
        self.deliver(
            Event::CallButtonPressed { floor: origin, direction },
            controller,
            observer,
        );
    }

    fn step_car<P: DispatchPolicy, O: DispatchObserver>(
        &mut self,
        elevator:   ElevatorId,
        controller: &mut Controller<P>,
        observer:   &mut O,
    ) {
        let car = &mut self.cars[elevator.index()];
        let Some(&target) = car.queue.first() else {
            if !car.announced_idle {
                car.announced_idle = true;
                self.deliver(Event::Idle { elevator }, controller, observer);
            }
            return;
        };

        if car.floor == target {
            self.serve_stop(elevator, controller, observer);
            return;
        }

        // Move one floor toward the queue head.
        let direction = Direction::of_travel(car.floor, target);
        car.floor = match direction {
            Direction::Up => FloorId(car.floor.0 + 1),
            Direction::Down => FloorId(car.floor.0 - 1),
        };

        if car.floor == target {
            self.serve_stop(elevator, controller, observer);
        } else {
            let floor = car.floor;
            self.deliver(
                Event::PassingFloor { elevator, floor, direction },
                controller,
                observer,
            );
        }
    }

    fn serve_stop<P: DispatchPolicy, O: DispatchObserver>(
        &mut self,
        elevator:   ElevatorId,
        controller: &mut Controller<P>,
        observer:   &mut O,
    ) {
        let idx = elevator.index();
        let floor = self.cars[idx].floor;
        self.stats.stops += 1;

        // Drop every queue entry for this floor, not just the head —
        // an ad-hoc insertion can duplicate an already-queued stop.
        self.cars[idx].queue.retain(|&f| f != floor);

        // Alight.
        let before = self.cars[idx].occupants.len();
        self.cars[idx].occupants.retain(|p| p.destination != floor);
        self.stats.delivered += before - self.cars[idx].occupants.len();

        // Board FIFO up to capacity; boarders press their destinations.
        let mut pressed = vec![];
        while self.cars[idx].occupants.len() < self.capacity {
            if self.waiting[floor.index()].is_empty() {
                break;
            }
            let passenger = self.waiting[floor.index()].remove(0);
            self.cars[idx].occupants.push(passenger);
            pressed.push(passenger.destination);
        }
        for destination in pressed {
            self.deliver(
                Event::FloorButtonPressed { elevator, floor: destination },
                controller,
                observer,
            );
        }

        // Passengers left on the landing press the call button again.
        let repress: Vec<Direction> = {
            let mut dirs: Vec<Direction> = self.waiting[floor.index()]
                .iter()
                .map(|p| Direction::of_travel(floor, p.destination))
                .collect();
            dirs.sort_by_key(|d| *d == Direction::Down);
            dirs.dedup();
            dirs
        };
        for direction in repress {
            self.deliver(
                Event::CallButtonPressed { floor, direction },
                controller,
                observer,
            );
        }

        self.deliver(Event::StoppedAtFloor { elevator, floor }, controller, observer);
    }
}
