use super::elevator::{Car, ElevatorRecord};
use super::floor::FloorRecord;

/// Outcome of checking a floor the elevator is about to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopDecision {
    /// The floor is already a committed destination.
    Queued,
    /// Someone is waiting and there is room.
    PendingRequest,
    /// Someone is waiting but the car is at or above the load threshold.
    Full,
    Pass,
}

impl StopDecision {
    pub fn should_stop(self) -> bool {
        matches!(self, StopDecision::Queued | StopDecision::PendingRequest)
    }
}

pub fn decide<C: Car>(elevator: &ElevatorRecord<C>, floor: &FloorRecord, load_threshold: f64) -> StopDecision {
    if elevator.destination_queue.contains(&floor.level) {
        StopDecision::Queued
    } else if !floor.has_pending_request() {
        StopDecision::Pass
    } else if elevator.load_factor() < load_threshold {
        StopDecision::PendingRequest
    } else {
        StopDecision::Full
    }
}
