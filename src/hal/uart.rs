//! Blocking diagnostic console on USART0.
//!
//! TX only; nothing in normal operation reads from the serial port, and
//! polling keeps this out of interrupt territory.

use crate::config::{CPU_FREQ_HZ, UART_BAUD};
use avr_device::atmega128a::USART0;
use core::convert::Infallible;
use ufmt::uWrite;

const TXEN0: u8 = 0x08;
const UDRE0: u8 = 0x20;

pub struct Uart {
    _private: (),
}

impl Uart {
    pub fn new() -> Self {
        let ubrr = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;
        unsafe {
            let p = USART0::ptr();
            (*p).ubrr0.write(|w| w.bits(ubrr));
            // 8N1, transmitter only
            (*p).ucsr0c.write(|w| w.bits(0x06));
            (*p).ucsr0b.write(|w| w.bits(TXEN0));
        }
        Self { _private: () }
    }

    pub fn write_byte(&mut self, byte: u8) {
        unsafe {
            let p = USART0::ptr();
            while (*p).ucsr0a.read().bits() & UDRE0 == 0 {}
            (*p).udr0.write(|w| w.bits(byte));
        }
    }
}

impl Default for Uart {
    fn default() -> Self {
        Self::new()
    }
}

impl uWrite for Uart {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}
