//! Command pattern demo: a radio controller driving a drone and a car

use std::io::Write;

use super::{Category, Pattern, PatternInfo, RunContext};
use crate::command_log::{Issued, RadioController, RcCar, RcDrone};
use crate::errors::Result;

pub struct CommandPattern;

impl Pattern for CommandPattern {
    fn info(&self) -> PatternInfo {
        PatternInfo {
            key: "command",
            name: "Command Pattern",
            category: Category::Behavioral,
            description: "Instead of establishing direct communication between the sender \
                and receiver, we provide a list of commands for the receiver to execute. \
                By encapsulating each command, we gain flexibility in controlling command \
                execution.",
        }
    }

    fn run(&self, ctx: &mut RunContext<'_>) -> Result<()> {
        let out = ctx.out();
        drone_flight(out)?;
        car_drive(out)?;
        Ok(())
    }
}

fn drone_flight(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Drone command execution example:")?;

    let drone = RcDrone::new();
    let mut controller = RadioController::new();
    controller.connect_horizontal(drone.horizontal());
    controller.connect_vertical(drone.vertical());

    narrate(out, "move 98", controller.move_by(98.0))?;
    writeln!(out, "[Drone] {}", drone.status())?;

    narrate(out, "rotate 14", controller.rotate_by(14.0))?;
    let reverted = controller.home();
    writeln!(out, "home: reverted {} action(s)", reverted)?;
    writeln!(out, "[Drone] {}", drone.status())?;

    narrate(out, "move 250", controller.move_by(250.0))?;
    narrate(out, "rise 11", controller.rise_by(11.0))?;
    writeln!(out, "[Drone] {}", drone.status())?;
    Ok(())
}

fn car_drive(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\nCar command execution example:")?;

    let car = RcCar::new();
    let mut controller = RadioController::new();
    controller.connect_horizontal(car.horizontal());

    narrate(out, "move 124", controller.move_by(124.0))?;
    writeln!(out, "[Car] {}", car.status())?;

    narrate(out, "rotate 52", controller.rotate_by(52.0))?;
    narrate(out, "move 23", controller.move_by(23.0))?;
    writeln!(out, "[Car] {}", car.status())?;

    // The car has no vertical receiver, so this is reported and skipped
    narrate(out, "rise 80", controller.rise_by(80.0))?;
    let reverted = controller.home();
    writeln!(out, "home: reverted {} action(s)", reverted)?;
    writeln!(out, "[Car] {}", car.status())?;
    Ok(())
}

fn narrate(out: &mut dyn Write, label: &str, issued: Result<Issued>) -> Result<()> {
    match issued {
        Ok(Issued::Applied { depth }) => writeln!(out, "{} (stack depth {})", label, depth)?,
        Ok(Issued::NoOp) => writeln!(out, "{} (no-op)", label)?,
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string() -> String {
        let mut out = Vec::new();
        let mut ctx = RunContext::new(&mut out);
        CommandPattern.run(&mut ctx).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_drone_returns_home_before_second_leg() {
        let text = run_to_string();
        assert!(text.contains(
            "[Drone] pos: x[98.000000], y[0.000000], z[0.000000]; angle: 0.000000"
        ));
        assert!(text.contains(
            "[Drone] pos: x[0.000000], y[0.000000], z[0.000000]; angle: 0.000000"
        ));
        assert!(text.contains(
            "[Drone] pos: x[250.000000], y[0.000000], z[11.000000]; angle: 0.000000"
        ));
    }

    #[test]
    fn test_car_reports_missing_vertical_receiver() {
        let text = run_to_string();
        assert!(text.contains("Command `rise` failed to execute"));
        assert!(text.contains("home: reverted 3 action(s)"));
        assert!(text.ends_with("[Car] pos: x[0.000000], y[0.000000]; angle: 0.000000\n"));
    }
}
