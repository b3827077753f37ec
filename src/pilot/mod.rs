pub mod autopilot;
pub mod scripted;

pub use autopilot::AltitudeHoldPilot;
pub use scripted::ScriptedPilot;

use crate::state::{Controls, FlightState};

/// Trait for anything that flies the aircraft.
///
/// Implement this to plug a control source into the simulation loop: a
/// scripted timeline, an autopilot, or a live input device.
pub trait Pilot {
    /// Produce control axes for the coming step.
    fn control(&mut self, state: &FlightState, dt: f64) -> Controls;

    /// Reset internal state (e.g. autopilot integrators).
    fn reset(&mut self) {}

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}
