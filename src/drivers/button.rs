//! Mode button: debounce and short/long press classification.
//!
//! The classifier is deliberately blocking. There is one thread of control
//! and nothing useful to do while the user holds the button, so the poll
//! simply occupies the CPU until release, counting elapsed milliseconds at
//! a fixed tick.

use crate::config::{DEBOUNCE_MS, HOLD_TIMEOUT_MS, LONG_PRESS_MS, POLL_TICK_MS};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::InputPin;

/// A classified button interaction.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Press {
    Short,
    Long,
}

/// Which electrical level counts as "pressed". The stock switch is
/// normally closed and wired active-low, but boards have been built both
/// ways, so the wiring picks.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Polarity {
    ActiveLow,
    ActiveHigh,
}

pub struct ModeButton<BTN, D> {
    pin: BTN,
    delay: D,
    polarity: Polarity,
}

impl<BTN, D, E> ModeButton<BTN, D>
where
    BTN: InputPin<Error = E>,
    D: DelayMs<u16>,
{
    pub fn new(pin: BTN, delay: D, polarity: Polarity) -> Self {
        Self {
            pin,
            delay,
            polarity,
        }
    }

    /// Samples the button once and, if pressed, blocks until release.
    ///
    /// Returns `None` for an idle pin, for contact noise that does not
    /// survive the debounce interval, and for holds past the stuck-switch
    /// bound. Otherwise classifies by hold duration.
    pub fn poll(&mut self) -> Result<Option<Press>, E> {
        if !self.pressed()? {
            return Ok(None);
        }

        self.delay.delay_ms(DEBOUNCE_MS);
        if !self.pressed()? {
            // contact noise
            return Ok(None);
        }

        let mut held_ms: u32 = 0;
        while self.pressed()? {
            self.delay.delay_ms(POLL_TICK_MS);
            held_ms += u32::from(POLL_TICK_MS);
            if held_ms > HOLD_TIMEOUT_MS {
                break;
            }
        }

        Ok(classify(held_ms))
    }

    /// Debounced press-and-release cycle without duration classification.
    /// Used by the calibration prompts: returns `true` as soon as the user
    /// confirms the current orientation, `false` when the pin is idle or
    /// noisy so the caller can keep redrawing its prompt.
    pub fn poll_advance(&mut self) -> Result<bool, E> {
        if !self.pressed()? {
            return Ok(false);
        }

        self.delay.delay_ms(DEBOUNCE_MS);
        if !self.pressed()? {
            return Ok(false);
        }

        while self.pressed()? {
            self.delay.delay_ms(POLL_TICK_MS);
        }
        Ok(true)
    }

    fn pressed(&self) -> Result<bool, E> {
        match self.polarity {
            Polarity::ActiveLow => self.pin.is_low(),
            Polarity::ActiveHigh => self.pin.is_high(),
        }
    }

    /// Releases the pin and delay provider.
    pub fn free(self) -> (BTN, D) {
        (self.pin, self.delay)
    }
}

fn classify(held_ms: u32) -> Option<Press> {
    if held_ms > HOLD_TIMEOUT_MS {
        // timer rollover or a shorted switch, not a user action
        None
    } else if held_ms > LONG_PRESS_MS {
        Some(Press::Long)
    } else {
        Some(Press::Short)
    }
}
