use crate::state::FlightState;

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

/// Kinds of discrete flight events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    StallEntry,
    StallRecovery,
    Touchdown,
    Crash,
    Custom(String),
}

/// A discrete event that occurred during a flight.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub state: FlightState,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive states and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &FlightState, current: &FlightState) -> Option<EventKind>;
}

/// Detects the stall flag being raised or cleared.
pub struct StallDetector;

impl EventDetector for StallDetector {
    fn check(&mut self, prev: &FlightState, current: &FlightState) -> Option<EventKind> {
        match (prev.stalled, current.stalled) {
            (false, true) => Some(EventKind::StallEntry),
            (true, false) if current.airborne() => Some(EventKind::StallRecovery),
            _ => None,
        }
    }
}

/// Detects ground contact, fatal or survivable.
pub struct GroundDetector;

impl EventDetector for GroundDetector {
    fn check(&mut self, prev: &FlightState, current: &FlightState) -> Option<EventKind> {
        if current.crashed && !prev.crashed {
            Some(EventKind::Crash)
        } else if prev.airborne() && !current.airborne() && !current.crashed {
            Some(EventKind::Touchdown)
        } else {
            None
        }
    }
}

/// Detects an altitude crossing (climbing or descending). Fires once.
pub struct AltitudeDetector {
    pub altitude: f64,
    pub climbing: bool,
    fired: bool,
}

impl AltitudeDetector {
    pub fn new(altitude: f64, climbing: bool) -> Self {
        Self { altitude, climbing, fired: false }
    }
}

impl EventDetector for AltitudeDetector {
    fn check(&mut self, prev: &FlightState, current: &FlightState) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        let crossed = if self.climbing {
            prev.altitude < self.altitude && current.altitude >= self.altitude
        } else {
            prev.altitude > self.altitude && current.altitude <= self.altitude
        };
        if crossed {
            self.fired = true;
            Some(EventKind::Custom(format!(
                "Altitude {:.0}ft ({})",
                self.altitude,
                if self.climbing { "climbing" } else { "descending" }
            )))
        } else {
            None
        }
    }
}

/// Run the standard detectors over a whole trajectory.
pub fn detect_events(trajectory: &[FlightState]) -> Vec<SimEvent> {
    let mut detectors: Vec<Box<dyn EventDetector>> =
        vec![Box::new(StallDetector), Box::new(GroundDetector)];
    let mut events = Vec::new();
    for pair in trajectory.windows(2) {
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&pair[0], &pair[1]) {
                events.push(SimEvent {
                    time: pair[1].time,
                    kind,
                    state: pair[1].clone(),
                });
            }
        }
    }
    events
}
