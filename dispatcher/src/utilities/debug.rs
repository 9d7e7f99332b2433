use std::io::{stdout, Result, Stdout, Write};

use crossterm::{cursor, terminal, ExecutableCommand};
use shared_resources::call::Call;

use super::elevator_status::FleetStatus;

/// Redraws the fleet tables in place on every status update.
pub struct Debug {
    stdout: Stdout,
    status_size: u16,
}

impl Debug {
    pub fn new() -> Self {
        Debug {
            stdout: stdout(),
            status_size: 0,
        }
    }

    pub fn printstatus(&mut self, status: &FleetStatus) -> Result<()> {
        if self.status_size > 0 {
            self.stdout.execute(cursor::MoveUp(self.status_size))?;
            self.stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        }

        let lines = render(status);
        for line in &lines {
            writeln!(self.stdout, "{}", line)?;
        }
        self.status_size = lines.len() as u16;
        self.stdout.flush()
    }
}

impl Default for Debug {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(status: &FleetStatus) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(String::from("+---------------------------------------------------+"));
    lines.push(String::from("| HALL CALLS                                        |"));
    lines.push(String::from("+------------+------------+------------+------------+"));
    lines.push(format!(
        "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |",
        "FLOOR",
        format!("HALL {}", Call::HallUp.as_string().to_uppercase()),
        format!("HALL {}", Call::HallDown.as_string().to_uppercase()),
        "CARS"
    ));
    for (level, state) in status.floors.iter().enumerate().rev() {
        lines.push(String::from("+------------+------------+------------+------------+"));
        let cars: Vec<String> = status.elevators_at(level as u8).iter().map(|id| id.to_string()).collect();
        lines.push(format!(
            "| {0:<10} | {1:<10} | {2:<10} | {3:<10} |",
            level,
            state.get(Call::HallUp),
            state.get(Call::HallDown),
            cars.join(",")
        ));
    }
    lines.push(String::from("+------------+------------+------------+------------+"));
    lines.push(String::new());

    lines.push(String::from("+------------+------------+------------+------------+------------------+"));
    lines.push(format!(
        "| {0:<10} | {1:<10} | {2:<10} | {3:<10} | {4:<16} |",
        "ELEVATOR", "FLOOR", "LOAD", "DIRECTION", "QUEUE"
    ));
    for elevator in &status.elevators {
        lines.push(String::from("+------------+------------+------------+------------+------------------+"));
        let queue: Vec<String> = elevator.destination_queue.iter().map(|f| f.to_string()).collect();
        lines.push(format!(
            "| {0:<10} | {1:<10} | {2:<10.2} | {3:<10} | {4:<16} |",
            elevator.id,
            elevator.floor,
            elevator.load_factor,
            elevator.indicator.as_string(),
            queue.join(" ")
        ));
    }
    lines.push(String::from("+------------+------------+------------+------------+------------------+"));

    lines
}
