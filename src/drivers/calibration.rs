//! Guided calibration workflow.
//!
//! Walks the user through four orientations in a fixed order, captures one
//! averaged reading per orientation and persists all four bounds together.
//! A single implausible capture discards the whole run; a half-calibrated
//! device would be worse than an uncalibrated one.

use crate::drivers::button::ModeButton;
use crate::drivers::display::LedBar;
use crate::drivers::sensor::Accelerometer;
use crate::state::{in_range, Axis, CalibrationBounds};
use crate::storage::{CalibrationMemory, CalibrationStore};
use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use embedded_hal::PwmPin;

/// Calibration orientations, in prompt order.
///
/// The order doubles as the low/high pairing: the first capture of each
/// axis becomes the low bound, the second the high bound. A user who tilts
/// the device the wrong way round produces an inverted calibration and the
/// workflow has no way to tell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Stage {
    Left,
    Right,
    Front,
    Rear,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Left, Stage::Right, Stage::Front, Stage::Rear];

    pub fn axis(self) -> Axis {
        match self {
            Stage::Left | Stage::Right => Axis::Lateral,
            Stage::Front | Stage::Rear => Axis::Longitudinal,
        }
    }
}

/// How a calibration run ended. Both variants leave the device operable;
/// a rejected run keeps whatever bounds were in effect before.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    Saved(CalibrationBounds),
    Rejected,
}

/// Runs the whole workflow. Blocks until the user has confirmed all four
/// orientations or a capture fails validation.
#[allow(clippy::type_complexity)]
pub fn run<BTN, BD, P, PWM, DD, ADC, A, X, Y, Z, SD, M, E>(
    button: &mut ModeButton<BTN, BD>,
    display: &mut LedBar<P, PWM, DD>,
    sensor: &mut Accelerometer<ADC, A, X, Y, Z, SD>,
    store: &mut CalibrationStore<M>,
) -> Result<Outcome, E>
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
{
    let mut captured = [0i16; 4];

    for (slot, &stage) in captured.iter_mut().zip(Stage::ALL.iter()) {
        // keep the orientation prompt visible until the user confirms
        loop {
            display.show_stage(stage)?;
            if button.poll_advance()? {
                break;
            }
        }

        let raw = sensor.read_axis(stage.axis())?;
        if !in_range(raw) {
            // discard the whole run, including earlier captures
            display.error_flash()?;
            return Ok(Outcome::Rejected);
        }
        *slot = raw;
    }

    let bounds = CalibrationBounds {
        lr_low: captured[0],
        lr_high: captured[1],
        fr_low: captured[2],
        fr_high: captured[3],
    };
    store.save(&bounds)?;
    Ok(Outcome::Saved(bounds))
}
