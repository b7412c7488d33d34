//! Accelerometer G-meter firmware.
//!
//! Samples an analog accelerometer one axis at a time, maps the averaged
//! reading against stored calibration bounds and lights a 9-LED bar (four
//! left, one center, four right) to show force magnitude and direction.
//! A push button toggles the displayed axis on a short press and starts a
//! guided calibration sequence on a long press.
//!
//! All drivers are generic over `embedded-hal` traits so the logic runs in
//! host tests; the register-level ATmega128 HAL lives in [`hal`] and is only
//! compiled for AVR targets.

#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod config;
pub mod drivers;
pub mod state;
pub mod storage;

#[cfg(target_arch = "avr")]
pub mod hal;

pub use application::Application;
pub use state::{Axis, CalibrationBounds, DeviceState, DisplayMode};
