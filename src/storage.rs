//! Calibration persistence: fixed storage layout, write-if-changed policy.

use crate::state::CalibrationBounds;

/// Byte offsets of the four bounds. Each value is a little-endian i16.
pub const OFFSET_LR_LOW: u16 = 0;
pub const OFFSET_LR_HIGH: u16 = 2;
pub const OFFSET_FR_LOW: u16 = 4;
pub const OFFSET_FR_HIGH: u16 = 6;

/// Word-level access to whatever non-volatile memory holds the
/// calibration. The AVR implementation sits on the internal EEPROM.
pub trait CalibrationMemory {
    type Error;

    fn read_i16(&mut self, offset: u16) -> Result<i16, Self::Error>;
    fn write_i16(&mut self, offset: u16, value: i16) -> Result<(), Self::Error>;
}

/// Owns the layout and the write policy. EEPROM cells wear out, so a word
/// is only physically written when it differs from what is stored.
pub struct CalibrationStore<M> {
    mem: M,
}

impl<M, E> CalibrationStore<M>
where
    M: CalibrationMemory<Error = E>,
{
    pub fn new(mem: M) -> Self {
        Self { mem }
    }

    pub fn load(&mut self) -> Result<CalibrationBounds, E> {
        Ok(CalibrationBounds {
            lr_low: self.mem.read_i16(OFFSET_LR_LOW)?,
            lr_high: self.mem.read_i16(OFFSET_LR_HIGH)?,
            fr_low: self.mem.read_i16(OFFSET_FR_LOW)?,
            fr_high: self.mem.read_i16(OFFSET_FR_HIGH)?,
        })
    }

    pub fn save(&mut self, bounds: &CalibrationBounds) -> Result<(), E> {
        self.update(OFFSET_LR_LOW, bounds.lr_low)?;
        self.update(OFFSET_LR_HIGH, bounds.lr_high)?;
        self.update(OFFSET_FR_LOW, bounds.fr_low)?;
        self.update(OFFSET_FR_HIGH, bounds.fr_high)?;
        Ok(())
    }

    fn update(&mut self, offset: u16, value: i16) -> Result<(), E> {
        if self.mem.read_i16(offset)? != value {
            self.mem.write_i16(offset, value)?;
        }
        Ok(())
    }

    /// Releases the underlying memory.
    pub fn free(self) -> M {
        self.mem
    }
}
