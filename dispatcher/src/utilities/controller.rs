use std::time::Duration;

use shared_resources::call::Call;
use shared_resources::config::DispatchSettings;
use shared_resources::direction::TravelDirection;
use shared_resources::signal::Signal;

use super::elevator::{Car, ElevatorRecord};
use super::elevator_status::{ElevatorStatus, FleetStatus};
use super::floor::FloorRecord;
use super::queue;
use super::scanner;
use super::stop_decision::{self, StopDecision};

/// Reacts to engine signals for a whole fleet.
///
/// Each elevator is implicitly moving to a destination, idle and scanning,
/// or stopped and servicing a floor; the engine's signals move it between
/// those. Elevator ids and floor numbers in signals must be in range; a
/// violation panics.
#[derive(Debug)]
pub struct Controller<C> {
    elevators: Vec<ElevatorRecord<C>>,
    floors: Vec<FloorRecord>,
    num_floors: u8,
    settings: DispatchSettings,
}

impl<C: Car> Controller<C> {
    pub fn new(cars: Vec<C>, num_floors: u8, settings: DispatchSettings) -> Self {
        assert!(num_floors > 0, "a building needs at least one floor");
        let top_floor = num_floors - 1;
        let elevators = cars
            .into_iter()
            .enumerate()
            .map(|(id, car)| {
                let assigned_floor = u8::try_from(id).map_or(top_floor, |floor| floor.min(top_floor));
                let mut elevator = ElevatorRecord::new(id, assigned_floor, car);
                elevator.going_up();
                elevator
            })
            .collect();

        Controller {
            elevators: elevators,
            floors: (0..num_floors).map(FloorRecord::new).collect(),
            num_floors: num_floors,
            settings: settings,
        }
    }

    pub fn handle(&mut self, signal: Signal) {
        tracing::debug!(?signal, "handling signal");
        match signal {
            Signal::FloorButtonPressed { elevator, floor } => self.on_floor_button_pressed(elevator, floor),
            Signal::Idle { elevator } => self.on_idle(elevator),
            Signal::PassingFloor { elevator, floor, direction } => self.on_passing_floor(elevator, floor, direction),
            Signal::StoppedAtFloor { elevator, floor } => self.on_stopped_at_floor(elevator, floor),
            Signal::UpButtonPressed { floor } | Signal::DownButtonPressed { floor } => {
                if let Some(call) = signal.hall_call() {
                    self.on_hall_button_pressed(floor, call);
                }
            }
        }
    }

    /// Per-tick hook. Nothing is scheduled on ticks.
    pub fn update(&mut self, dt: Duration) {
        tracing::trace!(dt_ms = dt.as_millis() as u64, "tick");
    }

    pub fn elevator(&self, id: usize) -> &ElevatorRecord<C> {
        &self.elevators[self.checked_elevator(id)]
    }

    pub fn elevator_mut(&mut self, id: usize) -> &mut ElevatorRecord<C> {
        let id = self.checked_elevator(id);
        &mut self.elevators[id]
    }

    pub fn floor(&self, level: u8) -> &FloorRecord {
        &self.floors[self.checked_floor(level)]
    }

    pub fn status(&self) -> FleetStatus {
        FleetStatus {
            elevators: self
                .elevators
                .iter()
                .map(|elevator| ElevatorStatus {
                    id: elevator.id,
                    floor: elevator.current_floor(),
                    load_factor: elevator.load_factor(),
                    indicator: elevator.indicator(),
                    destination_queue: elevator.destination_queue.clone(),
                })
                .collect(),
            floors: self.floors.iter().map(|floor| floor.button_state).collect(),
        }
    }

    fn checked_elevator(&self, id: usize) -> usize {
        assert!(
            id < self.elevators.len(),
            "signal for elevator {} but the fleet has {} elevators",
            id,
            self.elevators.len()
        );
        id
    }

    fn checked_floor(&self, floor: u8) -> usize {
        assert!(
            floor < self.num_floors,
            "signal for floor {} in a {}-floor building",
            floor,
            self.num_floors
        );
        floor as usize
    }

    fn on_floor_button_pressed(&mut self, id: usize, floor: u8) {
        self.checked_floor(floor);
        self.elevator_mut(id).go_to_floor(floor, false);
    }

    fn on_idle(&mut self, id: usize) {
        let id = self.checked_elevator(id);
        self.head_for_nearest_request(id);
    }

    fn on_passing_floor(&mut self, id: usize, floor: u8, direction: TravelDirection) {
        let id = self.checked_elevator(id);
        let level = self.checked_floor(floor);
        let decision = stop_decision::decide(&self.elevators[id], &self.floors[level], self.settings.load_threshold);
        if decision.should_stop() {
            tracing::debug!(elevator = id, floor, ?decision, "stopping on the way {}", direction.as_string());
            self.elevators[id].go_to_priority_destination(floor);
        } else if decision == StopDecision::Full {
            tracing::debug!(
                elevator = id,
                floor,
                load_factor = self.elevators[id].load_factor(),
                "passing waiting passengers, car is full"
            );
        }
    }

    fn on_stopped_at_floor(&mut self, id: usize, floor: u8) {
        let id = self.checked_elevator(id);
        let level = self.checked_floor(floor);
        let num_floors = self.num_floors;

        self.elevators[id].set_direction(num_floors);
        // The arrived floor is still queued; the next leg is whatever follows it.
        let next_stop = self.elevators[id]
            .destination_queue
            .iter()
            .copied()
            .find(|&queued| queued != floor);
        match next_stop {
            Some(next) => self.elevators[id].set_direction_based_on_floor_to_visit(next, num_floors),
            None => self.head_for_nearest_request(id),
        }

        let elevator = &mut self.elevators[id];
        queue::remove_all(&mut elevator.destination_queue, floor);
        elevator.check_destination_queue();
        self.floors[level].reset_requests();
        elevator.going_anywhere();
        tracing::debug!(elevator = id, floor, queue = ?elevator.destination_queue, "serviced floor");
    }

    fn on_hall_button_pressed(&mut self, floor: u8, call: Call) {
        let level = self.checked_floor(floor);
        self.floors[level].press(call);
    }

    /// Scans for the nearest pending call, points the indicator at it and
    /// replaces the queue with that single stop.
    fn head_for_nearest_request(&mut self, id: usize) {
        let num_floors = self.num_floors;
        let elevator = &mut self.elevators[id];
        let target = scanner::find_nearest_pending_floor(elevator, &mut self.floors);
        elevator.set_direction_based_on_floor_to_visit(target, num_floors);
        elevator.go_to_floor(target, true);
        tracing::debug!(elevator = id, target, "heading to nearest request");
    }
}
