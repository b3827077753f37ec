use crate::config::AircraftConfig;

// ---------------------------------------------------------------------------
// Force terms (all per-mass, in HUD units)
// ---------------------------------------------------------------------------

/// Engine acceleration, kt/s. Linear in throttle.
pub fn thrust_accel(throttle: f64, config: &AircraftConfig) -> f64 {
    throttle * config.thrust_factor
}

/// Drag deceleration, kt/s. Quadratic in airspeed.
pub fn drag_decel(airspeed: f64, config: &AircraftConfig) -> f64 {
    airspeed * airspeed * config.drag_factor
}

/// Along-path gravity component, kt/s. Positive nose-up bleeds airspeed,
/// nose-down trades altitude for airspeed.
pub fn pitch_gravity_decel(pitch_deg: f64, config: &AircraftConfig) -> f64 {
    pitch_deg.to_radians().sin() * config.gravity_factor
}

/// Net airspeed rate of change, kt/s.
pub fn airspeed_accel(airspeed: f64, pitch_deg: f64, throttle: f64, config: &AircraftConfig) -> f64 {
    thrust_accel(throttle, config)
        - drag_decel(airspeed, config)
        - pitch_gravity_decel(pitch_deg, config)
}

/// Vertical speed, ft/s, fully derived from the current step's airspeed and
/// pitch. A stalled wing sinks regardless of attitude.
pub fn vertical_speed(airspeed: f64, pitch_deg: f64, stalled: bool, config: &AircraftConfig) -> f64 {
    let climb = airspeed * pitch_deg.to_radians().sin() * config.climb_factor;
    if stalled {
        climb - config.stall_sink_rate
    } else {
        climb
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
