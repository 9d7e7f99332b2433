pub mod controller;
pub mod debug;
pub mod direction_policy;
pub mod elevator;
pub mod elevator_status;
pub mod floor;
pub mod indicator;
pub mod queue;
pub mod scanner;
pub mod stop_decision;
