//! Averaged analog accelerometer reads.
//!
//! The raw signal carries engine vibration and ADC noise, so a single
//! conversion is useless. Each read takes 30 consecutive samples with a
//! 2 ms pause in between (about 60 ms per call) and returns the truncating
//! integer mean.

use crate::config::{SAMPLE_DELAY_MS, SENSOR_SAMPLES};
use crate::state::Axis;
use core::marker::PhantomData;
use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayMs;
use nb::block;

pub struct Accelerometer<ADC, A, X, Y, Z, D> {
    adc: A,
    lateral: X,
    longitudinal: Y,
    vertical: Z,
    delay: D,
    _adc: PhantomData<ADC>,
}

impl<ADC, A, X, Y, Z, D, E> Accelerometer<ADC, A, X, Y, Z, D>
where
    A: OneShot<ADC, u16, X, Error = E>
        + OneShot<ADC, u16, Y, Error = E>
        + OneShot<ADC, u16, Z, Error = E>,
    X: Channel<ADC>,
    Y: Channel<ADC>,
    Z: Channel<ADC>,
    D: DelayMs<u16>,
{
    pub fn new(adc: A, lateral: X, longitudinal: Y, vertical: Z, delay: D) -> Self {
        Self {
            adc,
            lateral,
            longitudinal,
            vertical,
            delay,
            _adc: PhantomData,
        }
    }

    /// Denoised reading of one axis, in raw ADC units.
    pub fn read_axis(&mut self, axis: Axis) -> Result<i16, E> {
        match axis {
            Axis::Lateral => averaged_read(&mut self.adc, &mut self.lateral, &mut self.delay),
            Axis::Longitudinal => {
                averaged_read(&mut self.adc, &mut self.longitudinal, &mut self.delay)
            }
            Axis::Vertical => averaged_read(&mut self.adc, &mut self.vertical, &mut self.delay),
        }
    }

    /// Releases the ADC, pins and delay provider.
    pub fn free(self) -> (A, X, Y, Z, D) {
        (
            self.adc,
            self.lateral,
            self.longitudinal,
            self.vertical,
            self.delay,
        )
    }
}

fn averaged_read<ADC, A, P, D, E>(adc: &mut A, pin: &mut P, delay: &mut D) -> Result<i16, E>
where
    A: OneShot<ADC, u16, P, Error = E>,
    P: Channel<ADC>,
    D: DelayMs<u16>,
{
    let mut sum: u32 = 0;
    for _ in 0..SENSOR_SAMPLES {
        sum += u32::from(block!(adc.read(pin))?);
        delay.delay_ms(SAMPLE_DELAY_MS);
    }
    Ok((sum / u32::from(SENSOR_SAMPLES)) as i16)
}
