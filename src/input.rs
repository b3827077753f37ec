use crate::state::Controls;

// ---------------------------------------------------------------------------
// Input mapping: held keys -> control axes
// ---------------------------------------------------------------------------

/// Which control keys are currently held. Nothing is retained between
/// frames; the windowing layer rebuilds this from the live key state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub pitch_up: bool,    // Up arrow
    pub pitch_down: bool,  // Down arrow
    pub roll_left: bool,   // Left arrow
    pub roll_right: bool,  // Right arrow
    pub throttle_up: bool,   // PageUp or W
    pub throttle_down: bool, // PageDown or S
}

impl KeyState {
    /// Fold held keys into control axes. Opposing keys cancel.
    pub fn controls(&self) -> Controls {
        Controls {
            pitch: axis(self.pitch_down, self.pitch_up),
            roll: axis(self.roll_left, self.roll_right),
            throttle: axis(self.throttle_down, self.throttle_up),
        }
    }
}

fn axis(negative: bool, positive: bool) -> f64 {
    match (negative, positive) {
        (false, true) => 1.0,
        (true, false) => -1.0,
        _ => 0.0,
    }
}
