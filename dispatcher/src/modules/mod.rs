use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::unbounded;
use shared_resources::config::DispatcherConfig;

use crate::utilities::controller::Controller;
use crate::utilities::debug::Debug;
use crate::utilities::elevator_status::FleetStatus;

pub mod dispatch;
pub mod replay;

use replay::Scenario;

/// Replays the configured scenario through a fresh controller and returns
/// the final fleet status.
pub fn run(config: DispatcherConfig) -> Result<FleetStatus> {
    let num_floors = config.fleet.num_floors;
    let scenario = Scenario::load(&config.replay.scenario, num_floors)
        .with_context(|| format!("loading scenario {}", config.replay.scenario.display()))?;
    tracing::info!(
        elevators = scenario.elevators.len(),
        floors = num_floors,
        steps = scenario.steps.len(),
        "starting dispatcher"
    );

    // INITIALIZE CHANNELS
    let (replay_event_tx, replay_event_rx) = unbounded();
    let (fleet_status_tx, fleet_status_rx) = unbounded();

    let controller = Controller::new(scenario.cars(), num_floors, config.dispatch.clone());

    // INITIALIZE THREAD FOR ENGINE EVENTS
    let replay_handle = {
        let step_period = Duration::from_millis(config.replay.step_ms);
        let steps = scenario.steps;
        thread::Builder::new()
            .name("replay".to_string())
            .spawn(move || replay::main(steps, step_period, replay_event_tx))?
    };

    // INITIALIZE THREAD FOR DISPATCH
    let dispatch_handle = {
        let tick_period = Duration::from_millis(config.dispatch.tick_ms);
        thread::Builder::new()
            .name("dispatch".to_string())
            .spawn(move || dispatch::main(controller, tick_period, replay_event_rx, fleet_status_tx))?
    };

    let mut debug = config.replay.show_status.then(Debug::new);

    // Ends when the dispatch thread drops its sender.
    for status in fleet_status_rx.iter() {
        match debug.as_mut() {
            Some(debug) => debug.printstatus(&status).context("drawing status")?,
            None => tracing::debug!(pending = ?status.pending_floors(), "fleet updated"),
        }
    }

    let controller = dispatch_handle
        .join()
        .map_err(|_| anyhow!("dispatch thread panicked"))?;
    replay_handle
        .join()
        .map_err(|_| anyhow!("replay thread panicked"))?;
    tracing::info!("dispatcher finished");
    Ok(controller.status())
}
