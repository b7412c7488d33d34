//! Internal EEPROM access for the calibration words.

use crate::storage::CalibrationMemory;
use avr_device::atmega128a::EEPROM;
use core::convert::Infallible;

const EERE: u8 = 0x01;
const EEWE: u8 = 0x02;
const EEMWE: u8 = 0x04;

pub struct Eeprom {
    _private: (),
}

impl Eeprom {
    pub fn new() -> Self {
        Self { _private: () }
    }

    pub fn read_byte(&mut self, addr: u16) -> u8 {
        unsafe {
            let p = EEPROM::ptr();
            while (*p).eecr.read().bits() & EEWE != 0 {}
            (*p).eear.write(|w| w.bits(addr));
            (*p).eecr.modify(|r, w| w.bits(r.bits() | EERE));
            (*p).eedr.read().bits()
        }
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) {
        unsafe {
            let p = EEPROM::ptr();
            while (*p).eecr.read().bits() & EEWE != 0 {}
            (*p).eear.write(|w| w.bits(addr));
            (*p).eedr.write(|w| w.bits(value));
            // EEMWE must be followed by EEWE within four cycles
            (*p).eecr.modify(|r, w| w.bits(r.bits() | EEMWE));
            (*p).eecr.modify(|r, w| w.bits(r.bits() | EEWE));
        }
    }
}

impl Default for Eeprom {
    fn default() -> Self {
        Self::new()
    }
}

impl CalibrationMemory for Eeprom {
    type Error = Infallible;

    fn read_i16(&mut self, offset: u16) -> Result<i16, Infallible> {
        let lo = self.read_byte(offset);
        let hi = self.read_byte(offset + 1);
        Ok(i16::from_le_bytes([lo, hi]))
    }

    fn write_i16(&mut self, offset: u16, value: i16) -> Result<(), Infallible> {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(offset, lo);
        self.write_byte(offset + 1, hi);
        Ok(())
    }
}
