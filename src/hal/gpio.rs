//! Runtime-indexed GPIO pins.
//!
//! The LED bar wants arrays of interchangeable pins, so unlike a typestate
//! HAL the port is a value here, not a type parameter. Mode is still
//! tracked at the type level.

use avr_device::atmega128a::{PORTA, PORTB, PORTC, PORTD, PORTE, PORTF};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

#[derive(Copy, Clone)]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
}

pub struct Input;
pub struct Output;

pub struct Pin<MODE> {
    port: Port,
    mask: u8,
    _mode: PhantomData<MODE>,
}

fn set_ddr(port: Port, mask: u8, output: bool) {
    unsafe {
        match port {
            Port::A => (*PORTA::ptr()).ddra.modify(|r, w| {
                w.bits(if output { r.bits() | mask } else { r.bits() & !mask })
            }),
            Port::B => (*PORTB::ptr()).ddrb.modify(|r, w| {
                w.bits(if output { r.bits() | mask } else { r.bits() & !mask })
            }),
            Port::C => (*PORTC::ptr()).ddrc.modify(|r, w| {
                w.bits(if output { r.bits() | mask } else { r.bits() & !mask })
            }),
            Port::D => (*PORTD::ptr()).ddrd.modify(|r, w| {
                w.bits(if output { r.bits() | mask } else { r.bits() & !mask })
            }),
            Port::E => (*PORTE::ptr()).ddre.modify(|r, w| {
                w.bits(if output { r.bits() | mask } else { r.bits() & !mask })
            }),
            Port::F => (*PORTF::ptr()).ddrf.modify(|r, w| {
                w.bits(if output { r.bits() | mask } else { r.bits() & !mask })
            }),
        }
    }
}

fn write_out(port: Port, mask: u8, high: bool) {
    unsafe {
        match port {
            Port::A => (*PORTA::ptr()).porta.modify(|r, w| {
                w.bits(if high { r.bits() | mask } else { r.bits() & !mask })
            }),
            Port::B => (*PORTB::ptr()).portb.modify(|r, w| {
                w.bits(if high { r.bits() | mask } else { r.bits() & !mask })
            }),
            Port::C => (*PORTC::ptr()).portc.modify(|r, w| {
                w.bits(if high { r.bits() | mask } else { r.bits() & !mask })
            }),
            Port::D => (*PORTD::ptr()).portd.modify(|r, w| {
                w.bits(if high { r.bits() | mask } else { r.bits() & !mask })
            }),
            Port::E => (*PORTE::ptr()).porte.modify(|r, w| {
                w.bits(if high { r.bits() | mask } else { r.bits() & !mask })
            }),
            Port::F => (*PORTF::ptr()).portf.modify(|r, w| {
                w.bits(if high { r.bits() | mask } else { r.bits() & !mask })
            }),
        }
    }
}

fn read_level(port: Port, mask: u8) -> bool {
    unsafe {
        let bits = match port {
            Port::A => (*PORTA::ptr()).pina.read().bits(),
            Port::B => (*PORTB::ptr()).pinb.read().bits(),
            Port::C => (*PORTC::ptr()).pinc.read().bits(),
            Port::D => (*PORTD::ptr()).pind.read().bits(),
            Port::E => (*PORTE::ptr()).pine.read().bits(),
            Port::F => (*PORTF::ptr()).pinf.read().bits(),
        };
        bits & mask != 0
    }
}

impl Pin<Output> {
    pub fn output(port: Port, n: u8) -> Self {
        let mask = 1 << n;
        set_ddr(port, mask, true);
        write_out(port, mask, false);
        Self {
            port,
            mask,
            _mode: PhantomData,
        }
    }
}

impl Pin<Input> {
    pub fn input(port: Port, n: u8) -> Self {
        let mask = 1 << n;
        set_ddr(port, mask, false);
        write_out(port, mask, false);
        Self {
            port,
            mask,
            _mode: PhantomData,
        }
    }

    /// Input with the internal pull-up enabled (PORTx bit while DDRx is 0).
    pub fn pull_up_input(port: Port, n: u8) -> Self {
        let mask = 1 << n;
        set_ddr(port, mask, false);
        write_out(port, mask, true);
        Self {
            port,
            mask,
            _mode: PhantomData,
        }
    }
}

impl OutputPin for Pin<Output> {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Infallible> {
        write_out(self.port, self.mask, true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        write_out(self.port, self.mask, false);
        Ok(())
    }
}

impl InputPin for Pin<Input> {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(read_level(self.port, self.mask))
    }

    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(!read_level(self.port, self.mask))
    }
}
