pub mod call;
pub mod config;
pub mod direction;
pub mod signal;
