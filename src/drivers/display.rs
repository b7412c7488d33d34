//! Nine-LED force bar driver.
//!
//! Layout, innermost position first on each side:
//!
//! ```text
//!   [L-outer] [L2] [L1] [L0]  [center]  [R0] [R1] [R2] [R-outer]
//! ```
//!
//! The six inner LEDs per side are PWM-dimmable; the outer pair and the
//! center LED are plain on/off. The outer LEDs double as saturation
//! indicators when the mapped value runs off the scale. The driver also
//! owns every cosmetic sequence: startup show, mode-change blink, error
//! flash and the calibration stage prompts.

use crate::config::{BRIGHTNESS_STEPS, DISPLAY_RANGE};
use crate::drivers::calibration::Stage;
use crate::state::DisplayMode;
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::OutputPin;
use embedded_hal::PwmPin;

/// PWM duty per magnitude-within-step; the last entry is full-on.
pub const BRIGHTNESS: [u8; 9] = [0, 32, 64, 96, 128, 160, 192, 224, 255];

const FULL_ON: u8 = BRIGHTNESS[8];

const CENTER_BLINK_MS: u16 = 300;
const SWEEP_STEP_MS: u16 = 80;
const ALL_ON_MS: u16 = 400;
const MODE_BLINK_MS: u16 = 200;
const MODE_BLINKS: u8 = 3;
const ERROR_FLASH_MS: u16 = 400;
const ERROR_FLASHES: u8 = 5;

/// Signed bar positions for the startup sweep: out to the left edge and
/// back to center, then mirrored to the right.
const SWEEP: [i8; 16] = [-1, -2, -3, -4, -3, -2, -1, 0, 1, 2, 3, 4, 3, 2, 1, 0];

/// Splits an absolute magnitude into fully-lit LEDs and the partial duty
/// of the next one.
fn decompose(level: i32) -> (i32, u8) {
    let steps = i32::from(BRIGHTNESS_STEPS);
    (level / steps, BRIGHTNESS[(level % steps) as usize])
}

pub struct LedBar<P, PWM, D> {
    left: [PWM; 3],
    right: [PWM; 3],
    left_outer: P,
    right_outer: P,
    center: P,
    delay: D,
}

impl<P, PWM, D, E> LedBar<P, PWM, D>
where
    P: OutputPin<Error = E>,
    PWM: PwmPin<Duty = u8>,
    D: DelayMs<u16>,
{
    pub fn new(
        left: [PWM; 3],
        left_outer: P,
        center: P,
        right: [PWM; 3],
        right_outer: P,
        delay: D,
    ) -> Self {
        let mut bar = Self {
            left,
            right,
            left_outer,
            right_outer,
            center,
            delay,
        };
        for led in bar.left.iter_mut().chain(bar.right.iter_mut()) {
            led.enable();
            led.set_duty(0);
        }
        bar
    }

    /// Renders a signed mapped magnitude. Positive values light the right
    /// side, zero and negative the left. The center LED is not touched so
    /// it can stay lit as the power indicator.
    pub fn set_magnitude(&mut self, value: i16) -> Result<(), E> {
        let level = i32::from(value).abs();
        let (step, partial) = decompose(level);

        let (active, active_outer, idle, idle_outer) = if value > 0 {
            (
                &mut self.right,
                &mut self.right_outer,
                &mut self.left,
                &mut self.left_outer,
            )
        } else {
            (
                &mut self.left,
                &mut self.left_outer,
                &mut self.right,
                &mut self.right_outer,
            )
        };

        for led in idle.iter_mut() {
            led.set_duty(0);
        }
        idle_outer.set_low()?;

        for (i, led) in active.iter_mut().enumerate() {
            let threshold = i as i32;
            let duty = if step > threshold {
                FULL_ON
            } else if step == threshold {
                partial
            } else {
                0
            };
            led.set_duty(duty);
        }

        if level >= i32::from(DISPLAY_RANGE) {
            active_outer.set_high()?;
        } else {
            active_outer.set_low()?;
        }
        Ok(())
    }

    pub fn all_off(&mut self, include_center: bool) -> Result<(), E> {
        for led in self.left.iter_mut().chain(self.right.iter_mut()) {
            led.set_duty(0);
        }
        self.left_outer.set_low()?;
        self.right_outer.set_low()?;
        if include_center {
            self.center.set_low()?;
        }
        Ok(())
    }

    pub fn all_on(&mut self, include_center: bool) -> Result<(), E> {
        for led in self.left.iter_mut().chain(self.right.iter_mut()) {
            led.set_duty(FULL_ON);
        }
        self.left_outer.set_high()?;
        self.right_outer.set_high()?;
        if include_center {
            self.center.set_high()?;
        }
        Ok(())
    }

    /// The idle display: bar dark, center lit.
    pub fn ready(&mut self) -> Result<(), E> {
        self.all_off(true)?;
        self.center.set_high()
    }

    /// Power-on light show: center blink, a sweep out and back across both
    /// sides, then everything on and off again.
    pub fn startup_show(&mut self) -> Result<(), E> {
        self.all_off(true)?;
        for _ in 0..2 {
            self.center.set_high()?;
            self.delay.delay_ms(CENTER_BLINK_MS);
            self.center.set_low()?;
            self.delay.delay_ms(CENTER_BLINK_MS);
        }

        for &pos in SWEEP.iter() {
            self.light_single(pos)?;
            self.delay.delay_ms(SWEEP_STEP_MS);
        }

        self.all_on(true)?;
        self.delay.delay_ms(ALL_ON_MS);
        self.all_off(true)
    }

    /// Mode-change feedback: the outer pair blinks for left/right, the
    /// center for front/rear. Leaves the center lit either way.
    pub fn mode_blink(&mut self, mode: DisplayMode) -> Result<(), E> {
        self.all_off(true)?;
        for _ in 0..MODE_BLINKS {
            match mode {
                DisplayMode::LeftRight => {
                    self.left_outer.set_high()?;
                    self.right_outer.set_high()?;
                }
                DisplayMode::FrontRear => self.center.set_high()?,
            }
            self.delay.delay_ms(MODE_BLINK_MS);
            match mode {
                DisplayMode::LeftRight => {
                    self.left_outer.set_low()?;
                    self.right_outer.set_low()?;
                }
                DisplayMode::FrontRear => self.center.set_low()?,
            }
            self.delay.delay_ms(MODE_BLINK_MS);
        }
        self.center.set_high()
    }

    /// Flashes every LED five times. Signals both invalid stored
    /// calibration at boot and a rejected calibration attempt.
    pub fn error_flash(&mut self) -> Result<(), E> {
        for _ in 0..ERROR_FLASHES {
            self.all_on(true)?;
            self.delay.delay_ms(ERROR_FLASH_MS);
            self.all_off(true)?;
            self.delay.delay_ms(ERROR_FLASH_MS);
        }
        Ok(())
    }

    /// Static prompt telling the user which way to tilt the device for
    /// the given calibration stage.
    pub fn show_stage(&mut self, stage: Stage) -> Result<(), E> {
        self.all_off(true)?;
        match stage {
            Stage::Left => {
                for led in self.left.iter_mut() {
                    led.set_duty(FULL_ON);
                }
                self.left_outer.set_high()?;
            }
            Stage::Right => {
                for led in self.right.iter_mut() {
                    led.set_duty(FULL_ON);
                }
                self.right_outer.set_high()?;
            }
            Stage::Front => {
                self.center.set_high()?;
                self.left[0].set_duty(FULL_ON);
                self.right[0].set_duty(FULL_ON);
            }
            Stage::Rear => {
                self.center.set_high()?;
                self.left_outer.set_high()?;
                self.right_outer.set_high()?;
            }
        }
        Ok(())
    }

    fn light_single(&mut self, pos: i8) -> Result<(), E> {
        self.all_off(true)?;
        match pos {
            0 => self.center.set_high()?,
            -4 => self.left_outer.set_high()?,
            4 => self.right_outer.set_high()?,
            -3..=-1 => self.left[(-pos - 1) as usize].set_duty(FULL_ON),
            1..=3 => self.right[(pos - 1) as usize].set_duty(FULL_ON),
            _ => {}
        }
        Ok(())
    }
}
