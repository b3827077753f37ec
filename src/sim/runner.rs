use tracing::{debug, info};

use crate::config::AircraftConfig;
use crate::pilot::{AltitudeHoldPilot, Pilot};
use crate::state::{Controls, FlightState, SimConfig};

use super::stepper::step;

// ---------------------------------------------------------------------------
// Full flight simulation
// ---------------------------------------------------------------------------

/// Fly a complete flight with a custom pilot.
/// Returns the trajectory and the controls applied at each step.
///
/// The loop stops on crash, once a landed aircraft has rolled to a stop,
/// or at `max_time`.
pub fn fly_with(
    config: &AircraftConfig,
    initial: FlightState,
    sim: &SimConfig,
    pilot: &mut dyn Pilot,
) -> (Vec<FlightState>, Vec<Controls>) {
    let mut state = initial;

    let capacity = (sim.max_time / sim.dt) as usize + 1;
    let cap = capacity.min(200_000);
    let mut trajectory = Vec::with_capacity(cap);
    let mut applied = Vec::with_capacity(cap);

    trajectory.push(state.clone());
    applied.push(Controls::NEUTRAL);

    info!(aircraft = %config.name, pilot = pilot.name(), "flight start");

    while state.time < sim.max_time {
        let controls = pilot.control(&state, sim.dt);
        let next = step(&state, config, &controls, sim.dt);

        if next.stalled && !state.stalled {
            debug!(time = next.time, airspeed = next.airspeed, "stall");
        } else if !next.stalled && state.stalled && next.airborne() {
            debug!(time = next.time, airspeed = next.airspeed, "stall recovery");
        }

        let was_airborne = state.airborne();
        state = next;
        trajectory.push(state.clone());
        applied.push(controls);

        if state.crashed {
            info!(time = state.time, "crash");
            break;
        }
        if was_airborne && !state.airborne() {
            info!(time = state.time, airspeed = state.airspeed, "touchdown");
        }
        if !state.airborne() && state.airspeed == 0.0 {
            // Rolled to a stop
            break;
        }
    }

    (trajectory, applied)
}

/// Fly hands-off: an altitude-hold pilot keeping the initial altitude.
pub fn fly(
    config: &AircraftConfig,
    initial: FlightState,
    sim: &SimConfig,
) -> (Vec<FlightState>, Vec<Controls>) {
    let mut pilot = AltitudeHoldPilot::new(initial.altitude);
    fly_with(config, initial, sim, &mut pilot)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;
    use crate::pilot::ScriptedPilot;
    use approx::assert_relative_eq;

    #[test]
    fn altitude_hold_keeps_level_cruise() {
        let config = presets::trainer();
        let sim = SimConfig { dt: 1.0 / 60.0, max_time: 120.0 };
        let initial = FlightState::level_flight(150.0, 3000.0);
        let (trajectory, _) = fly(&config, initial, &sim);

        let last = trajectory.last().unwrap();
        assert!(!last.crashed);
        assert_relative_eq!(last.altitude, 3000.0, epsilon = 50.0);
    }

    #[test]
    fn scripted_climb_gains_altitude() {
        let config = presets::trainer();
        let sim = SimConfig { dt: 1.0 / 60.0, max_time: 30.0 };
        let mut pilot = ScriptedPilot::new()
            .hold(5.0, Controls { pitch: 1.0, throttle: 1.0, ..Controls::NEUTRAL })
            .hold(10.0, Controls { throttle: 1.0, ..Controls::NEUTRAL });
        let (trajectory, _) = fly_with(&config, FlightState::default(), &sim, &mut pilot);

        let last = trajectory.last().unwrap();
        assert!(!last.crashed, "Climb script should not crash");
        assert!(
            last.altitude > 1000.0,
            "Expected a climb above 1000 ft, got {:.0}",
            last.altitude
        );
    }

    #[test]
    fn dive_ends_the_flight_early() {
        let config = presets::trainer();
        let sim = SimConfig { dt: 1.0 / 60.0, max_time: 300.0 };
        let mut pilot = ScriptedPilot::new()
            .hold(300.0, Controls { pitch: -1.0, ..Controls::NEUTRAL });
        let (trajectory, _) = fly_with(&config, FlightState::default(), &sim, &mut pilot);

        let last = trajectory.last().unwrap();
        assert!(last.crashed, "Sustained full nose-down must end in a crash");
        assert!(
            last.time < sim.max_time / 2.0,
            "Crash should end the loop early, ran to t={:.1}",
            last.time
        );
        // Nothing recorded past the crash
        assert_eq!(trajectory.iter().filter(|s| s.crashed).count(), 1);
    }

    #[test]
    fn glide_lands_and_rolls_to_a_stop() {
        let config = presets::trainer();
        let sim = SimConfig { dt: 1.0 / 60.0, max_time: 300.0 };
        let initial = FlightState {
            altitude: 50.0,
            airspeed: 80.0,
            pitch: -1.0,
            throttle: 0.0,
            ..FlightState::default()
        };
        let mut pilot = ScriptedPilot::new(); // hands off, all neutral
        let (trajectory, _) = fly_with(&config, initial, &sim, &mut pilot);

        let last = trajectory.last().unwrap();
        assert!(!last.crashed, "Shallow glide should land, not crash");
        assert!(!last.airborne());
        assert_eq!(last.airspeed, 0.0);
        assert!(last.time < sim.max_time, "Loop should stop once parked");
    }

    #[test]
    fn trajectory_and_controls_stay_in_lockstep() {
        let config = presets::trainer();
        let sim = SimConfig { dt: 1.0 / 60.0, max_time: 10.0 };
        let (trajectory, applied) = fly(&config, FlightState::default(), &sim);
        assert_eq!(trajectory.len(), applied.len());
    }
}
