pub mod config;
pub mod hud;
pub mod input;
pub mod io;
pub mod physics;
pub mod pilot;
pub mod sim;
pub mod state;

// Convenience re-exports: the surface most callers need
pub mod types {
    pub use crate::config::{presets, AircraftConfig, AircraftConfigBuilder, ConfigError};
    pub use crate::state::{Controls, FlightPhase, FlightState, SimConfig};
}
