pub mod button;
pub mod calibration;
pub mod display;
pub mod sensor;

pub use button::{ModeButton, Polarity, Press};
pub use calibration::{Outcome, Stage};
pub use display::LedBar;
pub use sensor::Accelerometer;
