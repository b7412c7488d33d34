//! ADC driver: one-shot conversions on the accelerometer channels.

use avr_device::atmega128a::ADC;
use core::convert::Infallible;
use embedded_hal::adc::{Channel, OneShot};

/// The ADC peripheral, configured for AVCC reference and a conversion
/// clock of 125 kHz (16 MHz / 128).
pub struct Adc {
    _private: (),
}

impl Adc {
    pub fn new() -> Self {
        unsafe {
            let p = ADC::ptr();
            // Enable ADC, prescaler div128
            (*p).adcsra.write(|w| w.bits(0x87));
            // Reference voltage = AVCC
            (*p).admux.write(|w| w.bits(0x40));
        }
        Self { _private: () }
    }

    fn read_channel(&mut self, channel: u8) -> u16 {
        unsafe {
            let p = ADC::ptr();

            // Select channel, keep reference bits
            (*p).admux.modify(|r, w| w.bits((r.bits() & 0xE0) | (channel & 0x1F)));

            // Start conversion
            (*p).adcsra.modify(|r, w| w.bits(r.bits() | 0x40));

            // Wait for completion
            while (*p).adcsra.read().bits() & 0x40 != 0 {}

            (*p).adc.read().bits()
        }
    }
}

impl Default for Adc {
    fn default() -> Self {
        Self::new()
    }
}

/// Marker for one analog input, `N` being the MUX channel number.
pub struct AnalogPin<const N: u8> {
    _private: (),
}

impl<const N: u8> AnalogPin<N> {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl<const N: u8> Default for AnalogPin<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: u8> Channel<Adc> for AnalogPin<N> {
    type ID = u8;

    fn channel() -> u8 {
        N
    }
}

impl<const N: u8> OneShot<Adc, u16, AnalogPin<N>> for Adc {
    type Error = Infallible;

    fn read(&mut self, _pin: &mut AnalogPin<N>) -> nb::Result<u16, Infallible> {
        Ok(self.read_channel(N))
    }
}
