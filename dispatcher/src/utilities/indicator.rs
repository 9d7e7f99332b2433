/// Direction lamps shown to waiting passengers.
///
/// The engine exposes two independent lamps; `Anywhere` is both lit and
/// `Idle` is both dark. Motion is driven by the destination queue, never by
/// the indicator.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Idle,
    Up,
    Down,
    Anywhere,
}

impl Indicator {
    pub fn from_lamps(going_up: bool, going_down: bool) -> Self {
        match (going_up, going_down) {
            (false, false) => Indicator::Idle,
            (true, false) => Indicator::Up,
            (false, true) => Indicator::Down,
            (true, true) => Indicator::Anywhere,
        }
    }

    /// `(going_up, going_down)` as the engine sees them.
    pub fn lamps(self) -> (bool, bool) {
        (self.going_up(), self.going_down())
    }

    pub fn going_up(self) -> bool {
        matches!(self, Indicator::Up | Indicator::Anywhere)
    }

    pub fn going_down(self) -> bool {
        matches!(self, Indicator::Down | Indicator::Anywhere)
    }

    pub fn as_string(self) -> String {
        match self {
            Indicator::Idle => String::from("idle"),
            Indicator::Up => String::from("up"),
            Indicator::Down => String::from("down"),
            Indicator::Anywhere => String::from("anywhere"),
        }
    }
}
