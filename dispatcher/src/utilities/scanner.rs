use super::elevator::{Car, ElevatorRecord};
use super::floor::FloorRecord;

/// Picks the nearest floor with a pending call in the direction the
/// indicator currently shows, or the elevator's assigned floor.
///
/// The chosen floor's requests are cleared immediately, so a press there
/// before the elevator arrives is absorbed.
pub fn find_nearest_pending_floor<C: Car>(
    elevator: &ElevatorRecord<C>,
    floors: &mut [FloorRecord],
) -> u8 {
    let current = elevator.current_floor() as usize;
    assert!(
        current < floors.len(),
        "elevator {} reports floor {} in a {}-floor building",
        elevator.id,
        current,
        floors.len()
    );

    let nearest = if elevator.indicator().going_down() {
        floors[..current]
            .iter_mut()
            .rev()
            .find(|floor| floor.has_pending_request())
    } else {
        floors[current + 1..]
            .iter_mut()
            .find(|floor| floor.has_pending_request())
    };

    match nearest {
        Some(floor) => {
            floor.reset_requests();
            floor.level
        }
        None => elevator.assigned_floor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shared_resources::call::Call;

    use crate::modules::replay::ReplayCar;
    use crate::utilities::indicator::Indicator;

    fn building(num_floors: u8) -> Vec<FloorRecord> {
        (0..num_floors).map(FloorRecord::new).collect()
    }

    fn car_at(floor: u8, indicator: Indicator, assigned_floor: u8) -> ElevatorRecord<ReplayCar> {
        let mut elevator = ElevatorRecord::new(0, assigned_floor, ReplayCar::new(floor, 0.0));
        elevator.set_indicator(indicator);
        elevator
    }

    #[test]
    fn going_up_picks_nearest_above() {
        let mut floors = building(10);
        floors[3].press(Call::HallUp);
        floors[7].press(Call::HallDown);
        let elevator = car_at(5, Indicator::Up, 0);

        assert_eq!(find_nearest_pending_floor(&elevator, &mut floors), 7);
        assert!(!floors[7].has_pending_request());
        assert!(floors[3].has_pending_request());
    }

    #[test]
    fn going_down_picks_nearest_below() {
        let mut floors = building(10);
        floors[1].press(Call::HallUp);
        floors[3].press(Call::HallUp);
        floors[8].press(Call::HallUp);
        let elevator = car_at(5, Indicator::Down, 0);

        assert_eq!(find_nearest_pending_floor(&elevator, &mut floors), 3);
        assert!(floors[1].has_pending_request());
        assert!(floors[8].has_pending_request());
    }

    #[test]
    fn anywhere_scans_downwards() {
        let mut floors = building(10);
        floors[2].press(Call::HallDown);
        floors[6].press(Call::HallDown);
        let elevator = car_at(4, Indicator::Anywhere, 0);

        assert_eq!(find_nearest_pending_floor(&elevator, &mut floors), 2);
    }

    #[test]
    fn current_floor_is_never_scanned() {
        let mut floors = building(10);
        floors[5].press(Call::HallUp);
        let elevator = car_at(5, Indicator::Up, 9);

        assert_eq!(find_nearest_pending_floor(&elevator, &mut floors), 9);
        assert!(floors[5].has_pending_request());
    }

    #[test]
    fn falls_back_to_assigned_floor() {
        let mut floors = building(10);
        let elevator = car_at(5, Indicator::Up, 2);
        assert_eq!(find_nearest_pending_floor(&elevator, &mut floors), 2);

        let elevator = car_at(0, Indicator::Down, 1);
        assert_eq!(find_nearest_pending_floor(&elevator, &mut floors), 1);
    }

    #[test]
    #[should_panic(expected = "10-floor building")]
    fn floor_outside_building_fails_fast() {
        let mut floors = building(10);
        let elevator = car_at(12, Indicator::Up, 0);
        find_nearest_pending_floor(&elevator, &mut floors);
    }

    proptest! {
        #[test]
        fn picks_a_pending_floor_on_the_indicated_side(
            pending in prop::collection::vec(any::<bool>(), 10),
            current in 0u8..10,
            going_down in any::<bool>(),
        ) {
            let mut floors = building(10);
            for (floor, pressed) in floors.iter_mut().zip(&pending) {
                if *pressed {
                    floor.press(Call::HallUp);
                }
            }
            let indicator = if going_down { Indicator::Down } else { Indicator::Up };
            let elevator = car_at(current, indicator, 0);

            let side: Vec<usize> = if going_down {
                (0..current as usize).collect()
            } else {
                (current as usize + 1..10).collect()
            };
            let expected = side
                .iter()
                .copied()
                .filter(|&f| pending[f])
                .min_by_key(|&f| (f as i32 - current as i32).abs());

            let picked = find_nearest_pending_floor(&elevator, &mut floors);
            match expected {
                Some(floor) => {
                    prop_assert_eq!(picked as usize, floor);
                    prop_assert_ne!(picked, current);
                    prop_assert!(!floors[floor].has_pending_request());
                }
                None => {
                    prop_assert_eq!(picked, 0);
                }
            }
        }
    }
}
