use crate::state::{Controls, FlightState};

use super::Pilot;

// ---------------------------------------------------------------------------
// PID (single axis, clamped output)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Pid {
    kp: f64,
    ki: f64,
    kd: f64,
    limit: f64, // symmetric output clamp
    integral: f64,
    prev_error: f64,
}

impl Pid {
    fn new(kp: f64, ki: f64, kd: f64, limit: f64) -> Self {
        Self { kp, ki, kd, limit, integral: 0.0, prev_error: 0.0 }
    }

    fn update(&mut self, error: f64, dt: f64) -> f64 {
        self.integral += error * dt;
        // Anti-windup: keep the integral from saturating the output alone
        let integral_cap = if self.ki > 0.0 { self.limit / self.ki } else { 0.0 };
        self.integral = self.integral.clamp(-integral_cap, integral_cap);
        let derivative = if dt > 0.0 { (error - self.prev_error) / dt } else { 0.0 };
        self.prev_error = error;
        (self.kp * error + self.ki * self.integral + self.kd * derivative)
            .clamp(-self.limit, self.limit)
    }

    fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_error = 0.0;
    }
}

// ---------------------------------------------------------------------------
// Altitude hold: PID on altitude error commanding the pitch axis
// ---------------------------------------------------------------------------

/// Holds a target altitude with the pitch axis and a fixed throttle.
/// The roll axis stays neutral, so the wing-leveling in the update rules
/// keeps the aircraft upright.
#[derive(Debug, Clone)]
pub struct AltitudeHoldPilot {
    pub target_altitude: f64, // ft
    pub cruise_throttle: f64, // axis command in [-1, 1]
    pitch_pid: Pid,
}

impl AltitudeHoldPilot {
    pub fn new(target_altitude: f64) -> Self {
        Self {
            target_altitude,
            cruise_throttle: 0.0,
            // Gentle gains: full stick only beyond ~200 ft of error
            pitch_pid: Pid::new(0.005, 0.0005, 0.002, 1.0),
        }
    }
}

impl Pilot for AltitudeHoldPilot {
    fn control(&mut self, state: &FlightState, dt: f64) -> Controls {
        let error = self.target_altitude - state.altitude;
        Controls {
            pitch: self.pitch_pid.update(error, dt),
            roll: 0.0,
            throttle: self.cruise_throttle,
        }
    }

    fn reset(&mut self) {
        self.pitch_pid.reset();
    }

    fn name(&self) -> &str {
        "AltitudeHold"
    }
}
