// ---------------------------------------------------------------------------
// Flight state: the scalar variables the simulation owns
// ---------------------------------------------------------------------------

/// Full aircraft state at a single point in time.
///
/// Units are the loose HUD units of the simulation: knots for airspeed,
/// feet for altitude, feet per second for vertical speed, degrees for
/// attitude angles.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightState {
    pub time: f64,           // s
    pub airspeed: f64,       // kt, clamped to [0, max_speed]
    pub altitude: f64,       // ft, clamped to >= 0
    pub vertical_speed: f64, // ft/s, derived each step
    pub pitch: f64,          // deg, positive = nose up
    pub roll: f64,           // deg, positive = right wing down
    pub throttle: f64,       // fraction in [0, 1]
    pub stalled: bool,       // recomputed each step
    pub crashed: bool,       // terminal, sticky
}

impl FlightState {
    /// Level flight at the given airspeed and altitude, half throttle, t = 0.
    pub fn level_flight(airspeed: f64, altitude: f64) -> Self {
        Self {
            time: 0.0,
            airspeed,
            altitude,
            vertical_speed: 0.0,
            pitch: 0.0,
            roll: 0.0,
            throttle: 0.5,
            stalled: false,
            crashed: false,
        }
    }

    pub fn airborne(&self) -> bool {
        self.altitude > 0.0
    }

    /// Derived phase of flight for display and event detection.
    pub fn phase(&self) -> FlightPhase {
        if self.crashed {
            FlightPhase::Crashed
        } else if !self.airborne() {
            FlightPhase::Landed
        } else if self.stalled {
            FlightPhase::Stalled
        } else {
            FlightPhase::Flying
        }
    }
}

impl Default for FlightState {
    /// The demo starting point: 100 kt at 1000 ft.
    fn default() -> Self {
        Self::level_flight(100.0, 1000.0)
    }
}

// ---------------------------------------------------------------------------
// Phase of flight
// ---------------------------------------------------------------------------

/// Flying and Stalled trade freely on the airspeed threshold; Crashed is
/// one-way and terminal; Landed covers the rollout after a survivable
/// touchdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    Flying,
    Stalled,
    Landed,
    Crashed,
}

impl FlightPhase {
    /// Short tag for trajectory tables and the HUD.
    pub fn label(self) -> &'static str {
        match self {
            FlightPhase::Flying => "FLY",
            FlightPhase::Stalled => "STALL",
            FlightPhase::Landed => "GROUND",
            FlightPhase::Crashed => "CRASH",
        }
    }
}

// ---------------------------------------------------------------------------
// Control axes
// ---------------------------------------------------------------------------

/// Pilot input for one step. Each axis is a fraction in [-1, 1]; held keys
/// map to the extremes, a pilot may command anything in between.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Controls {
    pub pitch: f64,    // positive = nose up
    pub roll: f64,     // positive = roll right
    pub throttle: f64, // positive = open throttle
}

impl Controls {
    pub const NEUTRAL: Controls = Controls { pitch: 0.0, roll: 0.0, throttle: 0.0 };

    /// Out-of-range axes are clamped, never rejected.
    pub fn clamped(self) -> Controls {
        Controls {
            pitch: self.pitch.clamp(-1.0, 1.0),
            roll: self.roll.clamp(-1.0, 1.0),
            throttle: self.throttle.clamp(-1.0, 1.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,       // fixed timestep, s
    pub max_time: f64, // hard stop, s
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0, // one display frame
            max_time: 600.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
