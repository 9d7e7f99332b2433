use shared_resources::call::Call;

/// Hall call lamps on one floor. Both off means no pending call.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub up: bool,
    pub down: bool,
}

impl ButtonState {
    pub fn get(&self, call: Call) -> bool {
        match call {
            Call::HallUp => self.up,
            Call::HallDown => self.down,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorRecord {
    pub level: u8,
    pub button_state: ButtonState,
}

impl FloorRecord {
    pub fn new(level: u8) -> Self {
        FloorRecord {
            level: level,
            button_state: ButtonState::default(),
        }
    }

    pub fn press(&mut self, call: Call) {
        match call {
            Call::HallUp => self.button_state.up = true,
            Call::HallDown => self.button_state.down = true,
        }
    }

    pub fn has_pending_request(&self) -> bool {
        self.button_state.up || self.button_state.down
    }

    /// Clears both directions; the controller does not track which one was served.
    pub fn reset_requests(&mut self) {
        self.button_state.up = false;
        self.button_state.down = false;
    }
}
