//! Busy-wait millisecond delays on Timer0.

use avr_device::atmega128a::TC0;
use embedded_hal::blocking::delay::DelayMs;

/// Blocks for `ms` milliseconds by counting Timer0 ticks.
pub fn delay_ms(ms: u16) {
    unsafe {
        let p = TC0::ptr();

        // clk/64: 16MHz / 64 = 250kHz, 250 ticks per millisecond
        (*p).tccr0.write(|w| w.bits(0x04));
        (*p).tcnt0.write(|w| w.bits(0));

        for _ in 0..ms {
            while (*p).tcnt0.read().bits() < 250 {}
            (*p).tcnt0.write(|w| w.bits(0));
        }

        // stop the timer again
        (*p).tccr0.write(|w| w.bits(0));
    }
}

/// Zero-sized delay provider for the drivers.
#[derive(Copy, Clone, Default)]
pub struct Delay;

impl Delay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        delay_ms(ms);
    }
}
