use thiserror::Error;

// ---------------------------------------------------------------------------
// Aircraft tuning constants
// ---------------------------------------------------------------------------

/// Handling and force-model constants for one aircraft.
///
/// These are the knobs the update rules read; they are injected at startup
/// and never live in module globals.
#[derive(Debug, Clone)]
pub struct AircraftConfig {
    pub name: String,
    pub pitch_rate: f64,       // deg/s at full stick
    pub roll_rate: f64,        // deg/s at full stick
    pub throttle_rate: f64,    // throttle fraction per second
    pub thrust_factor: f64,    // kt/s of acceleration at full throttle
    pub drag_factor: f64,      // kt/s of deceleration per kt^2
    pub gravity_factor: f64,   // kt/s of deceleration at 90 deg nose-up
    pub climb_factor: f64,     // ft/s of climb per kt of along-path speed
    pub stall_speed: f64,      // kt
    pub max_speed: f64,        // kt
    pub max_pitch: f64,        // deg, symmetric limit
    pub max_roll: f64,         // deg, symmetric limit
    pub roll_centering: f64,   // deg/s of wing leveling with neutral stick
    pub stall_sink_rate: f64,  // ft/s of extra sink while stalled
    pub crash_sink_rate: f64,  // ft/s; touching down faster than this is a crash
    pub crash_roll_limit: f64, // deg; touching down banked past this is a crash
    pub ground_friction: f64,  // fraction of airspeed shed per second on the ground
}

impl AircraftConfig {
    /// Check the constants are mutually consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("pitch_rate", self.pitch_rate),
            ("roll_rate", self.roll_rate),
            ("throttle_rate", self.throttle_rate),
            ("thrust_factor", self.thrust_factor),
            ("drag_factor", self.drag_factor),
            ("climb_factor", self.climb_factor),
            ("max_pitch", self.max_pitch),
            ("max_roll", self.max_roll),
            ("crash_sink_rate", self.crash_sink_rate),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.stall_speed >= self.max_speed {
            return Err(ConfigError::StallAboveMax {
                stall: self.stall_speed,
                max: self.max_speed,
            });
        }
        Ok(())
    }

    /// Airspeed where full-throttle thrust balances drag: sqrt(thrust/drag).
    pub fn top_speed(&self) -> f64 {
        (self.thrust_factor / self.drag_factor).sqrt().min(self.max_speed)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("stall speed {stall} kt must be below max speed {max} kt")]
    StallAboveMax { stall: f64, max: f64 },
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

pub struct AircraftConfigBuilder {
    config: AircraftConfig,
}

impl AircraftConfigBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: AircraftConfig {
                name: name.into(),
                ..presets::trainer()
            },
        }
    }

    pub fn pitch_rate(mut self, v: f64) -> Self { self.config.pitch_rate = v; self }
    pub fn roll_rate(mut self, v: f64) -> Self { self.config.roll_rate = v; self }
    pub fn throttle_rate(mut self, v: f64) -> Self { self.config.throttle_rate = v; self }
    pub fn thrust_factor(mut self, v: f64) -> Self { self.config.thrust_factor = v; self }
    pub fn drag_factor(mut self, v: f64) -> Self { self.config.drag_factor = v; self }
    pub fn gravity_factor(mut self, v: f64) -> Self { self.config.gravity_factor = v; self }
    pub fn climb_factor(mut self, v: f64) -> Self { self.config.climb_factor = v; self }
    pub fn stall_speed(mut self, v: f64) -> Self { self.config.stall_speed = v; self }
    pub fn max_speed(mut self, v: f64) -> Self { self.config.max_speed = v; self }
    pub fn max_pitch(mut self, v: f64) -> Self { self.config.max_pitch = v; self }
    pub fn max_roll(mut self, v: f64) -> Self { self.config.max_roll = v; self }
    pub fn roll_centering(mut self, v: f64) -> Self { self.config.roll_centering = v; self }
    pub fn stall_sink_rate(mut self, v: f64) -> Self { self.config.stall_sink_rate = v; self }
    pub fn crash_sink_rate(mut self, v: f64) -> Self { self.config.crash_sink_rate = v; self }
    pub fn crash_roll_limit(mut self, v: f64) -> Self { self.config.crash_roll_limit = v; self }
    pub fn ground_friction(mut self, v: f64) -> Self { self.config.ground_friction = v; self }

    pub fn build(self) -> Result<AircraftConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

// ---------------------------------------------------------------------------
// Preset aircraft
// ---------------------------------------------------------------------------

pub mod presets {
    use super::AircraftConfig;

    /// Docile single-engine trainer. Self-consistent: thrust balances drag
    /// exactly at max_speed (sqrt(24 / 1.5e-4) = 400 kt), and climb_factor
    /// is the kt -> ft/s conversion.
    pub fn trainer() -> AircraftConfig {
        AircraftConfig {
            name: "Trainer".into(),
            pitch_rate: 20.0,
            roll_rate: 40.0,
            throttle_rate: 0.25,
            thrust_factor: 24.0,
            drag_factor: 1.5e-4,
            gravity_factor: 32.0,
            climb_factor: 1.687_81,
            stall_speed: 60.0,
            max_speed: 400.0,
            max_pitch: 80.0,
            max_roll: 80.0,
            roll_centering: 12.0,
            stall_sink_rate: 45.0,
            crash_sink_rate: 15.0,
            crash_roll_limit: 30.0,
            ground_friction: 1.2,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
