use crate::config::AircraftConfig;
use crate::physics;
use crate::state::{Controls, FlightState};

// ---------------------------------------------------------------------------
// Fixed-step state update
// ---------------------------------------------------------------------------

/// Advance the flight state by one fixed timestep.
///
/// Pure function of (state, config, controls, dt): no I/O, no hidden state,
/// identical inputs give identical outputs. A crashed state is terminal and
/// is returned unchanged.
///
/// Update order: throttle, pitch, roll, airspeed, vertical speed, altitude,
/// stall flag, ground contact.
pub fn step(state: &FlightState, config: &AircraftConfig, controls: &Controls, dt: f64) -> FlightState {
    if state.crashed {
        return state.clone();
    }

    let controls = controls.clamped();
    let was_airborne = state.airborne();
    let was_stalled = state.stalled;

    let mut next = state.clone();
    next.time = state.time + dt;

    // Control surfaces
    next.throttle =
        (state.throttle + controls.throttle * config.throttle_rate * dt).clamp(0.0, 1.0);
    next.pitch = (state.pitch + controls.pitch * config.pitch_rate * dt)
        .clamp(-config.max_pitch, config.max_pitch);
    next.roll = if controls.roll != 0.0 {
        (state.roll + controls.roll * config.roll_rate * dt).clamp(-config.max_roll, config.max_roll)
    } else {
        // Wings level toward zero with a neutral stick, never overshooting
        let centering = config.roll_centering * dt;
        if state.roll.abs() <= centering {
            0.0
        } else {
            state.roll - centering * state.roll.signum()
        }
    };

    // Forces
    let accel = physics::airspeed_accel(state.airspeed, next.pitch, next.throttle, config);
    next.airspeed = (state.airspeed + accel * dt).clamp(0.0, config.max_speed);
    next.vertical_speed = physics::vertical_speed(next.airspeed, next.pitch, was_stalled, config);
    next.altitude = (state.altitude + next.vertical_speed * dt).max(0.0);

    // Stall: too slow to fly, and not sitting on the ground
    next.stalled = next.airspeed < config.stall_speed && next.altitude > 0.0;

    // Ground contact. The stall flag carried into the step decides a stall
    // crash; the recomputation above already cleared it at zero altitude.
    if was_airborne && !next.airborne() {
        let hard = next.vertical_speed < -config.crash_sink_rate;
        let banked = next.roll.abs() > config.crash_roll_limit;
        if hard || banked || was_stalled {
            next.crashed = true;
            next.airspeed = 0.0;
            next.vertical_speed = 0.0;
        } else {
            // Survivable touchdown
            next.vertical_speed = 0.0;
        }
    } else if !was_airborne && !next.airborne() {
        // Rollout: friction sheds speed until the aircraft stops
        next.vertical_speed = 0.0;
        next.airspeed = (next.airspeed * (1.0 - config.ground_friction * dt)).max(0.0);
        if next.airspeed < 1.0 {
            next.airspeed = 0.0;
        }
    }

    next
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::presets;
    use approx::assert_relative_eq;

    const DT: f64 = 1.0 / 60.0;

    fn cruise() -> FlightState {
        FlightState::level_flight(150.0, 3000.0)
    }

    fn held(pitch: f64, roll: f64, throttle: f64) -> Controls {
        Controls { pitch, roll, throttle }
    }

    #[test]
    fn throttle_stays_in_unit_range() {
        let config = presets::trainer();
        let mut state = cruise();
        for i in 0..2000 {
            let axis = if i % 3 == 0 { 1.0 } else { -1.0 };
            state = step(&state, &config, &held(0.0, 0.0, axis * 5.0), DT);
            assert!(
                (0.0..=1.0).contains(&state.throttle),
                "Throttle escaped [0,1]: {}",
                state.throttle
            );
        }
    }

    #[test]
    fn throttle_ramp_is_linear_until_saturation() {
        let config = presets::trainer();
        let mut state = FlightState { throttle: 0.0, ..cruise() };
        for n in 1..=400 {
            state = step(&state, &config, &held(0.0, 0.0, 1.0), DT);
            let expected = (n as f64 * config.throttle_rate * DT).min(1.0);
            assert_relative_eq!(state.throttle, expected, epsilon = 1e-9);
        }
        assert_relative_eq!(state.throttle, 1.0);
    }

    #[test]
    fn altitude_and_airspeed_never_negative() {
        let config = presets::trainer();
        // Full nose-down, idle throttle: the worst case for both clamps
        let mut state = FlightState { throttle: 0.0, ..cruise() };
        for _ in 0..6000 {
            state = step(&state, &config, &held(-1.0, 0.0, -1.0), DT);
            assert!(state.altitude >= 0.0, "Altitude went negative: {}", state.altitude);
            assert!(state.airspeed >= 0.0, "Airspeed went negative: {}", state.airspeed);
        }
    }

    #[test]
    fn pitch_and_roll_respect_limits() {
        let config = presets::trainer();
        let mut state = cruise();
        for _ in 0..2000 {
            state = step(&state, &config, &held(1.0, 1.0, 0.0), DT);
        }
        assert_relative_eq!(state.pitch, config.max_pitch);
        assert_relative_eq!(state.roll, config.max_roll);
    }

    #[test]
    fn wings_level_with_neutral_stick() {
        let config = presets::trainer();
        let mut state = FlightState { roll: 25.0, ..cruise() };
        for _ in 0..(3.0 / DT) as usize {
            state = step(&state, &config, &Controls::NEUTRAL, DT);
        }
        assert_relative_eq!(state.roll, 0.0);
    }

    #[test]
    fn stall_triggers_on_threshold_crossing_and_recovers() {
        let config = presets::trainer();
        // Nose high, engine at idle: airspeed bleeds off
        let mut state = FlightState {
            pitch: 30.0,
            throttle: 0.0,
            ..cruise()
        };
        let mut stalled_at = None;
        for _ in 0..6000 {
            let prev_speed = state.airspeed;
            state = step(&state, &config, &Controls::NEUTRAL, DT);
            if state.stalled {
                assert!(
                    prev_speed >= config.stall_speed,
                    "Flag must rise on the crossing step, not later"
                );
                stalled_at = Some(state.airspeed);
                break;
            }
        }
        let speed = stalled_at.expect("Nose-high idle flight should stall");
        assert!(speed < config.stall_speed, "Stalled above threshold: {speed} kt");

        // Recover: nose down, full power, flag must clear above threshold
        for _ in 0..6000 {
            if state.crashed {
                panic!("Recovery dive hit the ground");
            }
            state = step(&state, &config, &held(-1.0, 0.0, 1.0), DT);
            if !state.stalled && state.airborne() {
                assert!(state.airspeed >= config.stall_speed);
                return;
            }
        }
        panic!("Stall flag never cleared");
    }

    #[test]
    fn steep_descent_crashes_on_impact_step() {
        let config = presets::trainer();
        // Low altitude, steep nose-down dive at idle
        let mut state = FlightState {
            altitude: 10.0,
            vertical_speed: -50.0,
            pitch: -30.0,
            throttle: 0.0,
            airspeed: 120.0,
            ..FlightState::default()
        };
        let mut prev_altitude = state.altitude;
        for _ in 0..600 {
            state = step(&state, &config, &Controls::NEUTRAL, DT);
            if state.crashed {
                assert!(prev_altitude > 0.0, "Crash must fire on the impact step");
                assert_eq!(state.altitude, 0.0);
                assert_eq!(state.airspeed, 0.0);
                assert_eq!(state.vertical_speed, 0.0);
                return;
            }
            prev_altitude = state.altitude;
        }
        panic!("Dive never reached the ground");
    }

    #[test]
    fn crashed_state_is_a_fixed_point() {
        let config = presets::trainer();
        let mut state = FlightState {
            altitude: 5.0,
            pitch: -45.0,
            throttle: 0.0,
            airspeed: 200.0,
            ..FlightState::default()
        };
        while !state.crashed {
            state = step(&state, &config, &Controls::NEUTRAL, DT);
        }
        let terminal = state.clone();
        for _ in 0..100 {
            // Any controls at all: the wreck must not move
            state = step(&state, &config, &held(1.0, -1.0, 1.0), DT);
            assert_eq!(state, terminal, "Terminal state must be bit-for-bit stable");
        }
    }

    #[test]
    fn stalled_touchdown_is_a_crash() {
        let config = presets::trainer();
        let mut state = FlightState {
            altitude: 40.0,
            airspeed: 40.0, // below stall speed
            pitch: 0.0,
            throttle: 0.0,
            stalled: true,
            ..FlightState::default()
        };
        while state.airborne() && !state.crashed {
            state = step(&state, &config, &Controls::NEUTRAL, DT);
        }
        assert!(state.crashed, "Falling out of a stall into the ground must crash");
    }

    #[test]
    fn gentle_touchdown_rolls_out_and_stops() {
        let config = presets::trainer();
        // Shallow glide just above the ground, wings level, healthy airspeed
        let mut state = FlightState {
            altitude: 3.0,
            airspeed: 80.0,
            pitch: -1.0,
            throttle: 0.0,
            ..FlightState::default()
        };
        for _ in 0..(30.0 / DT) as usize {
            state = step(&state, &config, &Controls::NEUTRAL, DT);
            if !state.airborne() && state.airspeed == 0.0 {
                break;
            }
        }
        assert!(!state.crashed, "Gentle touchdown must not crash");
        assert!(!state.airborne());
        assert_eq!(state.airspeed, 0.0, "Friction should stop the rollout");
        assert_eq!(state.vertical_speed, 0.0);
    }

    #[test]
    fn banked_touchdown_is_a_crash() {
        let config = presets::trainer();
        let mut state = FlightState {
            altitude: 3.0,
            airspeed: 80.0,
            pitch: -1.0,
            roll: 45.0,
            throttle: 0.0,
            ..FlightState::default()
        };
        // Hold the bank in so the wings cannot auto-level before impact
        while state.airborne() && !state.crashed {
            state = step(&state, &config, &held(0.0, 1.0, 0.0), DT);
        }
        assert!(state.crashed, "Touching down banked past the limit must crash");
    }

    #[test]
    fn identical_inputs_give_identical_trajectories() {
        let config = presets::trainer();
        let script = |i: usize| -> Controls {
            match i % 4 {
                0 => held(1.0, 0.0, 1.0),
                1 => held(0.0, -1.0, 0.0),
                2 => held(-1.0, 1.0, -1.0),
                _ => Controls::NEUTRAL,
            }
        };
        let mut a = cruise();
        let mut b = cruise();
        for i in 0..3000 {
            a = step(&a, &config, &script(i), DT);
            b = step(&b, &config, &script(i), DT);
            assert_eq!(a, b, "Trajectories diverged at step {i}");
        }
    }
}
