//! ----- REPLAY MODULE -----
//! Stands in for the simulation engine: loads a scripted scenario, feeds its
//! events to the dispatch thread one at a time, and provides the in-memory
//! car the controller talks to.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crossbeam_channel::Sender;
use shared_resources::signal::Signal;
use thiserror::Error;

use crate::utilities::elevator::Car;
use crate::utilities::indicator::Indicator;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("could not read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("scenario has no elevators")]
    NoElevators,

    #[error("elevator {elevator} starts on floor {floor}, outside the {num_floors}-floor building")]
    StartFloor { elevator: usize, floor: u8, num_floors: u8 },

    #[error("step {step}: floor {floor} is outside the {num_floors}-floor building")]
    Floor { step: usize, floor: u8, num_floors: u8 },

    #[error("step {step}: elevator {elevator} is not in the fleet of {num_elevators}")]
    Elevator { step: usize, elevator: usize, num_elevators: usize },

    #[error("elevator {elevator}: load factor {load_factor} is outside [0, 1]")]
    LoadFactor { elevator: usize, load_factor: f64 },
}

/// Engine-side car state, updated by `moved` and `load` events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayCar {
    pub floor: u8,
    pub load_factor: f64,
    pub committed_queue: Vec<u8>,
    pub commits: usize,
    pub lamps: (bool, bool),
    /// Every lamp state the controller pushed, oldest first.
    pub lamp_changes: Vec<(bool, bool)>,
}

impl ReplayCar {
    pub fn new(floor: u8, load_factor: f64) -> Self {
        ReplayCar {
            floor: floor,
            load_factor: load_factor,
            ..Default::default()
        }
    }

    pub fn indicator(&self) -> Indicator {
        Indicator::from_lamps(self.lamps.0, self.lamps.1)
    }
}

impl Car for ReplayCar {
    fn current_floor(&self) -> u8 {
        self.floor
    }

    fn load_factor(&self) -> f64 {
        self.load_factor
    }

    fn check_destination_queue(&mut self, queue: &[u8]) {
        self.committed_queue = queue.to_vec();
        self.commits += 1;
    }

    fn set_indicators(&mut self, going_up: bool, going_down: bool) {
        self.lamps = (going_up, going_down);
        self.lamp_changes.push(self.lamps);
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CarSetup {
    #[serde(default)]
    pub floor: u8,
    #[serde(default)]
    pub load_factor: f64,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ReplayEvent {
    Moved { elevator: usize, floor: u8 },
    Load { elevator: usize, load_factor: f64 },
    Signal(Signal),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Scenario {
    pub elevators: Vec<CarSetup>,
    pub steps: Vec<ReplayEvent>,
}

impl Scenario {
    pub fn load(path: &Path, num_floors: u8) -> Result<Self, ScenarioError> {
        let contents = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents, num_floors)
    }

    /// Parses and checks every index so the controller never sees an
    /// out-of-range elevator or floor.
    pub fn from_json(contents: &str, num_floors: u8) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(contents)?;
        scenario.validate(num_floors)?;
        Ok(scenario)
    }

    pub fn cars(&self) -> Vec<ReplayCar> {
        self.elevators
            .iter()
            .map(|setup| ReplayCar::new(setup.floor, setup.load_factor))
            .collect()
    }

    fn validate(&self, num_floors: u8) -> Result<(), ScenarioError> {
        let num_elevators = self.elevators.len();
        if num_elevators == 0 {
            return Err(ScenarioError::NoElevators);
        }
        for (elevator, setup) in self.elevators.iter().enumerate() {
            if setup.floor >= num_floors {
                return Err(ScenarioError::StartFloor { elevator, floor: setup.floor, num_floors });
            }
            check_load_factor(elevator, setup.load_factor)?;
        }

        for (step, event) in self.steps.iter().enumerate() {
            let (elevator, floor) = match *event {
                ReplayEvent::Moved { elevator, floor } => (Some(elevator), Some(floor)),
                ReplayEvent::Load { elevator, load_factor } => {
                    check_load_factor(elevator, load_factor)?;
                    (Some(elevator), None)
                }
                ReplayEvent::Signal(signal) => (signal.elevator(), signal.floor()),
            };
            if let Some(elevator) = elevator.filter(|&e| e >= num_elevators) {
                return Err(ScenarioError::Elevator { step, elevator, num_elevators });
            }
            if let Some(floor) = floor.filter(|&f| f >= num_floors) {
                return Err(ScenarioError::Floor { step, floor, num_floors });
            }
        }
        Ok(())
    }
}

fn check_load_factor(elevator: usize, load_factor: f64) -> Result<(), ScenarioError> {
    if (0.0..=1.0).contains(&load_factor) {
        Ok(())
    } else {
        Err(ScenarioError::LoadFactor { elevator, load_factor })
    }
}

pub fn main(steps: Vec<ReplayEvent>, step_period: Duration, replay_event_tx: Sender<ReplayEvent>) {
    let num_steps = steps.len();
    for event in steps {
        if replay_event_tx.send(event).is_err() {
            tracing::warn!("dispatcher stopped listening, ending replay early");
            return;
        }
        if !step_period.is_zero() {
            thread::sleep(step_period);
        }
    }
    tracing::info!(steps = num_steps, "replay finished");
}
