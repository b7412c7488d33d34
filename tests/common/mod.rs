//! Shared embedded-hal test doubles for the G-meter drivers.
//!
//! The display fakes hand out `Rc`-backed handles so a test can keep
//! observing LED state after the driver has taken ownership of the pins.

#![allow(dead_code)]

use core::convert::Infallible;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use embedded_hal::PwmPin;
use gmeter_firmware::drivers::display::LedBar;
use gmeter_firmware::storage::CalibrationMemory;

pub struct NoopDelay;

impl DelayMs<u16> for NoopDelay {
    fn delay_ms(&mut self, _ms: u16) {}
}

/// On/off LED pin whose state stays observable through clones.
#[derive(Clone, Default)]
pub struct SharedPin {
    state: Rc<Cell<bool>>,
}

impl SharedPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.state.get()
    }
}

impl OutputPin for SharedPin {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.state.set(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.state.set(false);
        Ok(())
    }
}

/// Dimmable LED pin; the most recent duty stays observable.
#[derive(Clone, Default)]
pub struct SharedPwm {
    duty: Rc<Cell<u8>>,
    enabled: Rc<Cell<bool>>,
}

impl SharedPwm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duty(&self) -> u8 {
        self.duty.get()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }
}

impl PwmPin for SharedPwm {
    type Duty = u8;

    fn disable(&mut self) {
        self.enabled.set(false);
    }

    fn enable(&mut self) {
        self.enabled.set(true);
    }

    fn get_duty(&self) -> u8 {
        self.duty.get()
    }

    fn get_max_duty(&self) -> u8 {
        u8::MAX
    }

    fn set_duty(&mut self, duty: u8) {
        self.duty.set(duty);
    }
}

/// Button pin fed from a fixed script of electrical levels. Each sample
/// consumes one entry; an exhausted script keeps returning `rest`.
#[derive(Clone)]
pub struct ScriptPin {
    levels_low: Rc<RefCell<VecDeque<bool>>>,
    rest: bool,
}

impl ScriptPin {
    pub fn new(levels_low: &[bool], rest: bool) -> Self {
        Self {
            levels_low: Rc::new(RefCell::new(levels_low.iter().copied().collect())),
            rest,
        }
    }

    /// A pin that never reads pressed (active-low wiring).
    pub fn released() -> Self {
        Self::new(&[], false)
    }

    fn next_low(&self) -> bool {
        self.levels_low
            .borrow_mut()
            .pop_front()
            .unwrap_or(self.rest)
    }
}

impl InputPin for ScriptPin {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(!self.next_low())
    }

    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(self.next_low())
    }
}

/// Script fragment for one confirmed press-and-release: sample, debounce
/// confirmation, `held` timing samples, release.
pub fn press_cycle(held: usize) -> Vec<bool> {
    let mut levels = vec![true; held + 2];
    levels.push(false);
    levels
}

/// Three-channel ADC where each channel replays a sample queue and then
/// repeats its last value.
pub struct FakeAdc {
    channels: [VecDeque<u16>; 3],
    last: [u16; 3],
}

impl FakeAdc {
    pub fn new(lateral: &[u16], longitudinal: &[u16], vertical: &[u16]) -> Self {
        Self {
            channels: [
                lateral.iter().copied().collect(),
                longitudinal.iter().copied().collect(),
                vertical.iter().copied().collect(),
            ],
            last: [0; 3],
        }
    }

    pub fn constant(lateral: u16, longitudinal: u16, vertical: u16) -> Self {
        let mut adc = Self::new(&[], &[], &[]);
        adc.last = [lateral, longitudinal, vertical];
        adc
    }

    fn next(&mut self, channel: usize) -> u16 {
        if let Some(sample) = self.channels[channel].pop_front() {
            self.last[channel] = sample;
        }
        self.last[channel]
    }
}

pub struct LateralPin;
pub struct LongitudinalPin;
pub struct VerticalPin;

macro_rules! impl_fake_channel {
    ($pin:ident, $id:expr) => {
        impl Channel<FakeAdc> for $pin {
            type ID = u8;

            fn channel() -> u8 {
                $id
            }
        }

        impl OneShot<FakeAdc, u16, $pin> for FakeAdc {
            type Error = Infallible;

            fn read(&mut self, _pin: &mut $pin) -> nb::Result<u16, Infallible> {
                Ok(self.next($id))
            }
        }
    };
}

impl_fake_channel!(LateralPin, 0);
impl_fake_channel!(LongitudinalPin, 1);
impl_fake_channel!(VerticalPin, 2);

/// Four-word calibration memory with a physical-write counter.
pub struct FakeMemory {
    words: [i16; 4],
    pub writes: usize,
}

impl FakeMemory {
    /// Erased EEPROM reads 0xFF in every byte.
    pub fn erased() -> Self {
        Self {
            words: [-1; 4],
            writes: 0,
        }
    }

    pub fn with(words: [i16; 4]) -> Self {
        Self { words, writes: 0 }
    }

    pub fn words(&self) -> [i16; 4] {
        self.words
    }
}

impl CalibrationMemory for FakeMemory {
    type Error = Infallible;

    fn read_i16(&mut self, offset: u16) -> Result<i16, Infallible> {
        Ok(self.words[usize::from(offset / 2)])
    }

    fn write_i16(&mut self, offset: u16, value: i16) -> Result<(), Infallible> {
        self.words[usize::from(offset / 2)] = value;
        self.writes += 1;
        Ok(())
    }
}

/// Captures diagnostic output.
#[derive(Default)]
pub struct FakeConsole {
    pub log: String,
}

impl ufmt::uWrite for FakeConsole {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.log.push_str(s);
        Ok(())
    }
}

/// Observation handles for every LED of a fake bar.
pub struct BarHandles {
    pub left: [SharedPwm; 3],
    pub right: [SharedPwm; 3],
    pub left_outer: SharedPin,
    pub right_outer: SharedPin,
    pub center: SharedPin,
}

impl BarHandles {
    pub fn left_duties(&self) -> [u8; 3] {
        [self.left[0].duty(), self.left[1].duty(), self.left[2].duty()]
    }

    pub fn right_duties(&self) -> [u8; 3] {
        [
            self.right[0].duty(),
            self.right[1].duty(),
            self.right[2].duty(),
        ]
    }

    pub fn bar_is_dark(&self) -> bool {
        self.left_duties() == [0; 3]
            && self.right_duties() == [0; 3]
            && !self.left_outer.is_set()
            && !self.right_outer.is_set()
    }
}

pub fn led_bar() -> (LedBar<SharedPin, SharedPwm, NoopDelay>, BarHandles) {
    let handles = BarHandles {
        left: [SharedPwm::new(), SharedPwm::new(), SharedPwm::new()],
        right: [SharedPwm::new(), SharedPwm::new(), SharedPwm::new()],
        left_outer: SharedPin::new(),
        right_outer: SharedPin::new(),
        center: SharedPin::new(),
    };
    let bar = LedBar::new(
        handles.left.clone(),
        handles.left_outer.clone(),
        handles.center.clone(),
        handles.right.clone(),
        handles.right_outer.clone(),
        NoopDelay,
    );
    (bar, handles)
}

/// Expands per-stage capture values into full 30-sample runs.
pub fn stage_samples(values: &[u16]) -> Vec<u16> {
    values
        .iter()
        .flat_map(|&v| std::iter::repeat(v).take(30))
        .collect()
}
