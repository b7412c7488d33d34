//! Application layer: boot sequence and the main-loop body.
//!
//! Owns the [`DeviceState`]; the hardware components are passed in by the
//! caller so the same logic drives the AVR board and the host tests.

use crate::drivers::button::{ModeButton, Press};
use crate::drivers::calibration::{self, Outcome};
use crate::drivers::display::LedBar;
use crate::drivers::sensor::Accelerometer;
use crate::state::{CalibrationBounds, DeviceState};
use crate::storage::{CalibrationMemory, CalibrationStore};
use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use embedded_hal::PwmPin;
use ufmt::{uWrite, uwriteln};

pub struct Application {
    state: DeviceState,
}

impl Application {
    pub fn new() -> Self {
        Self {
            state: DeviceState::default(),
        }
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Loads and validates the stored calibration, then plays the startup
    /// show and leaves the bar in the ready state. Implausible stored
    /// bounds get the error flash and the defaults; nothing is written
    /// back until the user actually recalibrates.
    pub fn boot<M, P, PWM, DD, C, E>(
        &mut self,
        store: &mut CalibrationStore<M>,
        display: &mut LedBar<P, PWM, DD>,
        console: &mut C,
    ) -> Result<(), E>
    where
        M: CalibrationMemory<Error = E>,
        P: OutputPin<Error = E>,
        PWM: PwmPin<Duty = u8>,
        DD: DelayMs<u16>,
        C: uWrite,
    {
        let stored = store.load()?;
        if stored.is_valid() {
            self.state.bounds = stored;
        } else {
            uwriteln!(console, "calibration invalid, using defaults").ok();
            display.error_flash()?;
            self.state.bounds = CalibrationBounds::default();
        }

        display.startup_show()?;
        display.ready()
    }

    /// One main-loop pass: classify a button interaction, then render the
    /// active axis.
    ///
    /// A long press runs the calibration workflow and skips rendering for
    /// this pass; a short press toggles the displayed axis first.
    #[allow(clippy::type_complexity)]
    pub fn update<BTN, BD, P, PWM, DD, ADC, A, X, Y, Z, SD, M, C, E>(
        &mut self,
        button: &mut ModeButton<BTN, BD>,
        display: &mut LedBar<P, PWM, DD>,
        sensor: &mut Accelerometer<ADC, A, X, Y, Z, SD>,
        store: &mut CalibrationStore<M>,
        console: &mut C,
    ) -> Result<(), E>
    where
        BTN: InputPin<Error = E>,
        BD: DelayMs<u16>,
        P: OutputPin<Error = E>,
        PWM: PwmPin<Duty = u8>,
        DD: DelayMs<u16>,
        A: OneShot<ADC, u16, X, Error = E>
            + OneShot<ADC, u16, Y, Error = E>
            + OneShot<ADC, u16, Z, Error = E>,
        X: Channel<ADC>,
        Y: Channel<ADC>,
        Z: Channel<ADC>,
        SD: DelayMs<u16>,
        M: CalibrationMemory<Error = E>,
        C: uWrite,
    {
        match button.poll()? {
            Some(Press::Long) => {
                uwriteln!(console, "calibration start").ok();
                match calibration::run(button, display, sensor, store)? {
                    Outcome::Saved(bounds) => {
                        self.state.bounds = bounds;
                        uwriteln!(console, "calibration saved").ok();
                    }
                    Outcome::Rejected => {
                        uwriteln!(console, "calibration rejected").ok();
                    }
                }
                display.ready()?;
                return Ok(());
            }
            Some(Press::Short) => {
                self.state.mode = self.state.mode.toggled();
                display.mode_blink(self.state.mode)?;
            }
            None => {}
        }

        let raw = sensor.read_axis(self.state.mode.axis())?;
        let mapped = self.state.bounds.map(self.state.mode, raw);
        display.set_magnitude(mapped)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}
