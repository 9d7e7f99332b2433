use super::indicator::Indicator;

/// Engine side of one elevator car.
///
/// The engine owns position and load; the controller only reads them and
/// hands back its committed destination queue and direction lamps.
pub trait Car {
    fn current_floor(&self) -> u8;

    /// Fractional occupancy in `[0, 1]`.
    fn load_factor(&self) -> f64;

    /// Commits the queue so the engine re-evaluates its next stop.
    fn check_destination_queue(&mut self, queue: &[u8]);

    fn set_indicators(&mut self, going_up: bool, going_down: bool);
}

/// Controller-owned state wrapped around an engine car.
#[derive(Debug, Clone)]
pub struct ElevatorRecord<C> {
    pub id: usize,
    /// Home floor used when no floor has a pending request.
    pub assigned_floor: u8,
    pub destination_queue: Vec<u8>,
    indicator: Indicator,
    car: C,
}

impl<C: Car> ElevatorRecord<C> {
    pub fn new(id: usize, assigned_floor: u8, car: C) -> Self {
        ElevatorRecord {
            id: id,
            assigned_floor: assigned_floor,
            destination_queue: Vec::new(),
            indicator: Indicator::Idle,
            car: car,
        }
    }

    pub fn current_floor(&self) -> u8 {
        self.car.current_floor()
    }

    pub fn load_factor(&self) -> f64 {
        self.car.load_factor()
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn set_indicator(&mut self, indicator: Indicator) {
        self.indicator = indicator;
        let (going_up, going_down) = indicator.lamps();
        self.car.set_indicators(going_up, going_down);
    }

    pub fn car(&self) -> &C {
        &self.car
    }

    pub fn car_mut(&mut self) -> &mut C {
        &mut self.car
    }

    pub fn check_destination_queue(&mut self) {
        self.car.check_destination_queue(&self.destination_queue);
    }

    /// Appends `floor` (optionally after dropping every queued stop) and
    /// commits. A floor equal to the current tail is not queued twice.
    pub fn go_to_floor(&mut self, floor: u8, clear_queue_first: bool) {
        if clear_queue_first {
            self.destination_queue.clear();
        }
        if self.destination_queue.last() != Some(&floor) {
            self.destination_queue.push(floor);
        }
        self.check_destination_queue();
    }

    /// Puts `floor` in front of every other stop and commits.
    pub fn go_to_priority_destination(&mut self, floor: u8) {
        if self.destination_queue.first() != Some(&floor) {
            self.destination_queue.insert(0, floor);
        }
        self.check_destination_queue();
    }
}
