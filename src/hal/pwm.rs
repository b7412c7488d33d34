//! Hardware PWM for the six dimmable bar LEDs.
//!
//! Timer1 drives the left side (OC1A/B/C on PB5..PB7), Timer3 the right
//! (OC3A/B/C on PE3..PE5). Both run 8-bit fast PWM at clk/64, about
//! 980 Hz, plenty above flicker.

use avr_device::atmega128a::{PORTB, PORTE, TC1, TC3};
use embedded_hal::PwmPin;

#[derive(Copy, Clone)]
pub enum PwmChannel {
    Timer1A,
    Timer1B,
    Timer1C,
    Timer3A,
    Timer3B,
    Timer3C,
}

/// Owns the timer configuration; hands out per-channel handles.
pub struct Pwm {
    _private: (),
}

impl Pwm {
    pub fn new() -> Self {
        unsafe {
            // OC pins must be outputs for the waveform to reach them
            (*PORTB::ptr()).ddrb.modify(|r, w| w.bits(r.bits() | 0xE0));
            (*PORTE::ptr()).ddre.modify(|r, w| w.bits(r.bits() | 0x38));

            // 8-bit fast PWM (WGM = 0101), clk/64, compare outputs
            // enabled per channel through PwmLed::enable
            (*TC1::ptr()).tccr1a.write(|w| w.bits(0x01));
            (*TC1::ptr()).tccr1b.write(|w| w.bits(0x0B));
            (*TC3::ptr()).tccr3a.write(|w| w.bits(0x01));
            (*TC3::ptr()).tccr3b.write(|w| w.bits(0x0B));
        }
        Self { _private: () }
    }

    pub fn channel(&self, channel: PwmChannel) -> PwmLed {
        PwmLed { channel, duty: 0 }
    }
}

impl Default for Pwm {
    fn default() -> Self {
        Self::new()
    }
}

/// One PWM compare channel as an 8-bit dimmable LED.
pub struct PwmLed {
    channel: PwmChannel,
    duty: u8,
}

impl PwmLed {
    /// COMx1 bit of this channel in TCCRxA.
    fn com_mask(&self) -> u8 {
        match self.channel {
            PwmChannel::Timer1A | PwmChannel::Timer3A => 0x80,
            PwmChannel::Timer1B | PwmChannel::Timer3B => 0x20,
            PwmChannel::Timer1C | PwmChannel::Timer3C => 0x08,
        }
    }

    fn set_com(&mut self, connect: bool) {
        let mask = self.com_mask();
        unsafe {
            match self.channel {
                PwmChannel::Timer1A | PwmChannel::Timer1B | PwmChannel::Timer1C => {
                    (*TC1::ptr()).tccr1a.modify(|r, w| {
                        w.bits(if connect { r.bits() | mask } else { r.bits() & !mask })
                    })
                }
                PwmChannel::Timer3A | PwmChannel::Timer3B | PwmChannel::Timer3C => {
                    (*TC3::ptr()).tccr3a.modify(|r, w| {
                        w.bits(if connect { r.bits() | mask } else { r.bits() & !mask })
                    })
                }
            }
        }
    }
}

impl PwmPin for PwmLed {
    type Duty = u8;

    fn disable(&mut self) {
        self.set_com(false);
    }

    fn enable(&mut self) {
        self.set_com(true);
    }

    fn get_duty(&self) -> u8 {
        self.duty
    }

    fn get_max_duty(&self) -> u8 {
        u8::MAX
    }

    fn set_duty(&mut self, duty: u8) {
        self.duty = duty;
        unsafe {
            match self.channel {
                PwmChannel::Timer1A => (*TC1::ptr()).ocr1a.write(|w| w.bits(u16::from(duty))),
                PwmChannel::Timer1B => (*TC1::ptr()).ocr1b.write(|w| w.bits(u16::from(duty))),
                PwmChannel::Timer1C => (*TC1::ptr()).ocr1c.write(|w| w.bits(u16::from(duty))),
                PwmChannel::Timer3A => (*TC3::ptr()).ocr3a.write(|w| w.bits(u16::from(duty))),
                PwmChannel::Timer3B => (*TC3::ptr()).ocr3b.write(|w| w.bits(u16::from(duty))),
                PwmChannel::Timer3C => (*TC3::ptr()).ocr3c.write(|w| w.bits(u16::from(duty))),
            }
        }
    }
}
