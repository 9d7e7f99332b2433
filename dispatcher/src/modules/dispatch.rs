//! ----- DISPATCH MODULE -----
//! Owns the controller. Receives engine events one at a time, forwards
//! signals to the controller, drives the per-tick hook and publishes a
//! status snapshot after every event.

use std::time::Duration;

use crossbeam_channel::{select, tick, Receiver, Sender};

use crate::modules::replay::{ReplayCar, ReplayEvent};
use crate::utilities::controller::Controller;
use crate::utilities::elevator_status::FleetStatus;

pub fn main(
    mut controller: Controller<ReplayCar>,
    tick_period: Duration,
    replay_event_rx: Receiver<ReplayEvent>,
    fleet_status_tx: Sender<FleetStatus>,
) -> Controller<ReplayCar> {
    let timer = tick(tick_period);

    loop {
        select! {
            recv(replay_event_rx) -> msg => {
                match msg {
                    Ok(event) => apply(&mut controller, event),
                    Err(_) => break,
                }
                if fleet_status_tx.send(controller.status()).is_err() {
                    tracing::warn!("status listener is gone, stopping dispatch");
                    break;
                }
            },
            recv(timer) -> _ => {
                controller.update(tick_period);
            },
        }
    }
    controller
}

pub fn apply(controller: &mut Controller<ReplayCar>, event: ReplayEvent) {
    match event {
        ReplayEvent::Moved { elevator, floor } => controller.elevator_mut(elevator).car_mut().floor = floor,
        ReplayEvent::Load { elevator, load_factor } => {
            controller.elevator_mut(elevator).car_mut().load_factor = load_factor
        }
        ReplayEvent::Signal(signal) => controller.handle(signal),
    }
}
