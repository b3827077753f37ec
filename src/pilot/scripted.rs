use crate::state::{Controls, FlightState};

use super::Pilot;

// ---------------------------------------------------------------------------
// Scripted pilot: a fixed timeline of control segments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct Segment {
    until: f64, // s, end of this segment
    controls: Controls,
}

/// Replays a fixed control timeline. Segments are held until their end
/// time; past the last segment the controls go neutral. Deterministic, so
/// two flights from the same script are identical.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPilot {
    segments: Vec<Segment>,
}

impl ScriptedPilot {
    pub fn new() -> Self {
        Self { segments: Vec::new() }
    }

    /// Append a segment holding `controls` until `until` seconds.
    /// Segments must be appended in increasing time order.
    pub fn hold(mut self, until: f64, controls: Controls) -> Self {
        debug_assert!(
            self.segments.last().map_or(true, |s| until > s.until),
            "Script segments must be ordered by time"
        );
        self.segments.push(Segment { until, controls });
        self
    }
}

impl Pilot for ScriptedPilot {
    fn control(&mut self, state: &FlightState, _dt: f64) -> Controls {
        self.segments
            .iter()
            .find(|s| state.time < s.until)
            .map(|s| s.controls)
            .unwrap_or(Controls::NEUTRAL)
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}
