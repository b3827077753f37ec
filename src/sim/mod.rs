pub mod event;
pub mod runner;
pub mod stepper;

pub use runner::{fly, fly_with};
pub use stepper::step;
