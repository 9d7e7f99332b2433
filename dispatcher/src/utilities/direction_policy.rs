use super::elevator::{Car, ElevatorRecord};
use super::indicator::Indicator;

impl<C: Car> ElevatorRecord<C> {
    pub fn going_up(&mut self) {
        self.set_indicator(Indicator::Up);
    }

    pub fn going_down(&mut self) {
        self.set_indicator(Indicator::Down);
    }

    /// Lets passengers for either direction board before the next leg commits.
    pub fn going_anywhere(&mut self) {
        self.set_indicator(Indicator::Anywhere);
    }

    /// Forces a direction at the ends of the shaft; leaves it alone in between.
    pub fn set_direction(&mut self, num_floors: u8) {
        let floor = self.current_floor();
        if floor == num_floors.saturating_sub(1) {
            self.going_down();
        } else if floor == 0 {
            self.going_up();
        }
    }

    pub fn set_direction_based_on_floor_to_visit(&mut self, floor_to_visit: u8, num_floors: u8) {
        let floor = self.current_floor();
        if floor_to_visit > floor {
            self.going_up();
        } else if floor_to_visit < floor {
            self.going_down();
        } else {
            self.set_direction(num_floors);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::modules::replay::ReplayCar;
    use crate::utilities::elevator::ElevatorRecord;
    use crate::utilities::indicator::Indicator;

    const NUM_FLOORS: u8 = 10;

    fn at(floor: u8, indicator: Indicator) -> ElevatorRecord<ReplayCar> {
        let mut elevator = ElevatorRecord::new(0, 0, ReplayCar::new(floor, 0.0));
        elevator.set_indicator(indicator);
        elevator
    }

    #[test]
    fn target_above_lights_up_only() {
        let mut elevator = at(4, Indicator::Anywhere);
        elevator.set_direction_based_on_floor_to_visit(8, NUM_FLOORS);
        assert!(elevator.indicator().going_up());
        assert!(!elevator.indicator().going_down());
    }

    #[test]
    fn target_below_lights_down_only() {
        let mut elevator = at(4, Indicator::Anywhere);
        elevator.set_direction_based_on_floor_to_visit(1, NUM_FLOORS);
        assert!(!elevator.indicator().going_up());
        assert!(elevator.indicator().going_down());
    }

    #[test]
    fn target_here_falls_back_to_boundary_policy() {
        let mut elevator = at(0, Indicator::Anywhere);
        elevator.set_direction_based_on_floor_to_visit(0, NUM_FLOORS);
        assert_eq!(elevator.indicator(), Indicator::Up);

        let mut elevator = at(5, Indicator::Anywhere);
        elevator.set_direction_based_on_floor_to_visit(5, NUM_FLOORS);
        assert_eq!(elevator.indicator(), Indicator::Anywhere);
    }

    #[test]
    fn bottom_floor_never_goes_down() {
        for start in [Indicator::Idle, Indicator::Up, Indicator::Down, Indicator::Anywhere] {
            let mut elevator = at(0, start);
            elevator.set_direction(NUM_FLOORS);
            assert!(!elevator.indicator().going_down());
        }
    }

    #[test]
    fn top_floor_never_goes_up() {
        for start in [Indicator::Idle, Indicator::Up, Indicator::Down, Indicator::Anywhere] {
            let mut elevator = at(NUM_FLOORS - 1, start);
            elevator.set_direction(NUM_FLOORS);
            assert!(!elevator.indicator().going_up());
        }
    }

    #[test]
    fn middle_floor_keeps_indicator() {
        let mut elevator = at(3, Indicator::Down);
        elevator.set_direction(NUM_FLOORS);
        assert_eq!(elevator.indicator(), Indicator::Down);
    }

    #[test]
    fn anywhere_lights_both_lamps() {
        let mut elevator = at(3, Indicator::Up);
        elevator.going_anywhere();
        assert_eq!(elevator.car().lamps, (true, true));
    }
}
