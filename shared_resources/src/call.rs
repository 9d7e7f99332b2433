/// A hall call button on a floor.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Call {
    HallUp,
    HallDown,
}

impl Call {
    pub fn as_string(self) -> String {
        match self {
            Call::HallUp => String::from("up"),
            Call::HallDown => String::from("down"),
        }
    }
}
