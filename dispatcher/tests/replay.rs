use std::fs;
use std::path::PathBuf;

use dispatcher::modules;
use dispatcher::utilities::indicator::Indicator;
use shared_resources::config::DispatcherConfig;

fn write_scenario(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("dispatcher-{}-{}.json", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

fn config(scenario: &PathBuf) -> DispatcherConfig {
    let json = serde_json::json!({
        "fleet": { "num_floors": 6 },
        "dispatch": { "tick_ms": 5 },
        "replay": { "scenario": scenario, "step_ms": 0 }
    });
    DispatcherConfig::from_json(&json.to_string()).unwrap()
}

#[test]
fn replays_a_full_trip() {
    let scenario = write_scenario(
        "trip",
        r#"{
            "elevators": [{ "floor": 0 }, { "floor": 0 }],
            "steps": [
                { "signal": { "signal": "up_button_pressed", "floor": 4 } },
                { "signal": { "signal": "idle", "elevator": 0 } },
                { "moved": { "elevator": 0, "floor": 1 } },
                { "signal": { "signal": "passing_floor", "elevator": 0, "floor": 2, "direction": "up" } },
                { "moved": { "elevator": 0, "floor": 4 } },
                { "signal": { "signal": "stopped_at_floor", "elevator": 0, "floor": 4 } },
                { "load": { "elevator": 0, "load_factor": 0.3 } },
                { "signal": { "signal": "floor_button_pressed", "elevator": 0, "floor": 1 } },
                { "signal": { "signal": "idle", "elevator": 1 } }
            ]
        }"#,
    );

    let status = modules::run(config(&scenario)).unwrap();
    fs::remove_file(&scenario).ok();

    assert!(status.pending_floors().is_empty());
    let first = &status.elevators[0];
    assert_eq!(first.floor, 4);
    assert_eq!(first.load_factor, 0.3);
    assert_eq!(first.indicator, Indicator::Anywhere);
    // Nothing was waiting above floor 4, so the car headed home before the cab press.
    assert_eq!(first.destination_queue, vec![0, 1]);
    assert_eq!(status.elevators[1].destination_queue, vec![1]);
}

#[test]
fn invalid_scenario_is_reported() {
    let scenario = write_scenario(
        "invalid",
        r#"{ "elevators": [{ "floor": 0 }], "steps": [{ "moved": { "elevator": 0, "floor": 6 } }] }"#,
    );

    let error = modules::run(config(&scenario)).unwrap_err();
    fs::remove_file(&scenario).ok();

    assert!(format!("{:#}", error).contains("floor 6 is outside the 6-floor building"));
}
