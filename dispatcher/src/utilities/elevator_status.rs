use super::floor::ButtonState;
use super::indicator::Indicator;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct ElevatorStatus {
    pub id: usize,
    pub floor: u8,
    pub load_factor: f64,
    pub indicator: Indicator,
    pub destination_queue: Vec<u8>,
}

/// Snapshot of the whole controller, published after every handled event.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct FleetStatus {
    pub elevators: Vec<ElevatorStatus>,
    pub floors: Vec<ButtonState>,
}

impl FleetStatus {
    pub fn pending_floors(&self) -> Vec<u8> {
        self.floors
            .iter()
            .enumerate()
            .filter(|(_, state)| state.up || state.down)
            .map(|(level, _)| level as u8)
            .collect()
    }

    pub fn elevators_at(&self, floor: u8) -> Vec<usize> {
        self.elevators
            .iter()
            .filter(|elevator| elevator.floor == floor)
            .map(|elevator| elevator.id)
            .collect()
    }
}
