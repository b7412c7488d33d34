//! G-meter board wiring.
//!
//! Maps logical display positions and sensor axes onto concrete pins and
//! channels in one place, so everything above this module stays
//! hardware-agnostic.
//!
//! ```text
//! LED bar    left PWM   inner..outer  OC1A OC1B OC1C  (PB5 PB6 PB7)
//!            right PWM  inner..outer  OC3A OC3B OC3C  (PE3 PE4 PE5)
//!            left outer PA0, right outer PA1, center PA2
//! button     PD0, internal pull-up, normally-closed switch (active low)
//! sensor     ADC0 lateral, ADC1 longitudinal, ADC2 vertical
//! ```

use super::adc::{Adc, AnalogPin};
use super::eeprom::Eeprom;
use super::gpio::{Input, Output, Pin, Port};
use super::pwm::{Pwm, PwmChannel, PwmLed};
use super::timer::Delay;
use crate::drivers::button::{ModeButton, Polarity};
use crate::drivers::display::LedBar;
use crate::drivers::sensor::Accelerometer;
use crate::storage::CalibrationStore;

pub type Display = LedBar<Pin<Output>, PwmLed, Delay>;
pub type Button = ModeButton<Pin<Input>, Delay>;
pub type Sensor = Accelerometer<Adc, Adc, AnalogPin<0>, AnalogPin<1>, AnalogPin<2>, Delay>;
pub type Store = CalibrationStore<Eeprom>;

pub fn led_bar() -> Display {
    let pwm = Pwm::new();
    LedBar::new(
        [
            pwm.channel(PwmChannel::Timer1A),
            pwm.channel(PwmChannel::Timer1B),
            pwm.channel(PwmChannel::Timer1C),
        ],
        Pin::output(Port::A, 0),
        Pin::output(Port::A, 2),
        [
            pwm.channel(PwmChannel::Timer3A),
            pwm.channel(PwmChannel::Timer3B),
            pwm.channel(PwmChannel::Timer3C),
        ],
        Pin::output(Port::A, 1),
        Delay::new(),
    )
}

pub fn mode_button() -> Button {
    ModeButton::new(Pin::pull_up_input(Port::D, 0), Delay::new(), Polarity::ActiveLow)
}

pub fn accelerometer() -> Sensor {
    Accelerometer::new(
        Adc::new(),
        AnalogPin::new(),
        AnalogPin::new(),
        AnalogPin::new(),
        Delay::new(),
    )
}

pub fn calibration_store() -> Store {
    CalibrationStore::new(Eeprom::new())
}
