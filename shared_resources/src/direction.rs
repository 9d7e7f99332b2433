/// Direction of travel reported by the engine while an elevator is moving.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TravelDirection {
    Down,
    Up,
}

impl TravelDirection {
    pub fn as_string(self) -> String {
        match self {
            TravelDirection::Down => String::from("down"),
            TravelDirection::Up => String::from("up"),
        }
    }
}
