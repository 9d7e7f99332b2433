use crate::call::Call;
use crate::direction::TravelDirection;

/// Inbound events from the simulation engine, delivered one at a time.
///
/// Elevator signals carry the elevator's fleet index; floor signals carry the
/// floor level. Both are guaranteed in range by the engine.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum Signal {
    FloorButtonPressed { elevator: usize, floor: u8 },
    Idle { elevator: usize },
    PassingFloor { elevator: usize, floor: u8, direction: TravelDirection },
    StoppedAtFloor { elevator: usize, floor: u8 },
    UpButtonPressed { floor: u8 },
    DownButtonPressed { floor: u8 },
}

impl Signal {
    /// Elevator the signal is addressed to, `None` for floor signals.
    pub fn elevator(&self) -> Option<usize> {
        match *self {
            Signal::FloorButtonPressed { elevator, .. }
            | Signal::Idle { elevator }
            | Signal::PassingFloor { elevator, .. }
            | Signal::StoppedAtFloor { elevator, .. } => Some(elevator),
            Signal::UpButtonPressed { .. } | Signal::DownButtonPressed { .. } => None,
        }
    }

    /// Floor named by the signal, if any.
    pub fn floor(&self) -> Option<u8> {
        match *self {
            Signal::FloorButtonPressed { floor, .. }
            | Signal::PassingFloor { floor, .. }
            | Signal::StoppedAtFloor { floor, .. }
            | Signal::UpButtonPressed { floor }
            | Signal::DownButtonPressed { floor } => Some(floor),
            Signal::Idle { .. } => None,
        }
    }

    /// Hall call carried by a floor button signal.
    pub fn hall_call(&self) -> Option<Call> {
        match self {
            Signal::UpButtonPressed { .. } => Some(Call::HallUp),
            Signal::DownButtonPressed { .. } => Some(Call::HallDown),
            _ => None,
        }
    }
}
