//! Register-level HAL for the ATmega128 target.
//!
//! Everything here implements the `embedded-hal` traits the drivers are
//! generic over, so this module is the only place that touches registers.

pub mod adc;
pub mod board;
pub mod eeprom;
pub mod gpio;
pub mod pwm;
pub mod timer;
pub mod uart;

pub use adc::{Adc, AnalogPin};
pub use eeprom::Eeprom;
pub use gpio::{Input, Output, Pin, Port};
pub use pwm::{Pwm, PwmChannel, PwmLed};
pub use timer::{delay_ms, Delay};
pub use uart::Uart;
