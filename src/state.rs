//! Device state: display mode, calibration bounds and the mapping math.

use crate::config::{BOUNDS_MAX, BOUNDS_MIN, DEFAULT_HIGH, DEFAULT_LOW, DISPLAY_RANGE};

/// One of the accelerometer's sensing directions.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Axis {
    /// Left/right
    Lateral,
    /// Front/rear
    Longitudinal,
    /// Up/down (wired but not shown by any display mode)
    Vertical,
}

/// Which axis the LED bar currently shows.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DisplayMode {
    LeftRight,
    FrontRear,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::LeftRight => DisplayMode::FrontRear,
            DisplayMode::FrontRear => DisplayMode::LeftRight,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            DisplayMode::LeftRight => Axis::Lateral,
            DisplayMode::FrontRear => Axis::Longitudinal,
        }
    }
}

/// True if a raw reading is plausible as a calibration bound.
pub fn in_range(value: i16) -> bool {
    (BOUNDS_MIN..=BOUNDS_MAX).contains(&value)
}

/// User-calibrated -1G/+1G reference points for both display axes,
/// in raw ADC units.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CalibrationBounds {
    pub lr_low: i16,
    pub lr_high: i16,
    pub fr_low: i16,
    pub fr_high: i16,
}

impl Default for CalibrationBounds {
    fn default() -> Self {
        Self {
            lr_low: DEFAULT_LOW,
            lr_high: DEFAULT_HIGH,
            fr_low: DEFAULT_LOW,
            fr_high: DEFAULT_HIGH,
        }
    }
}

impl CalibrationBounds {
    /// All four bounds must sit in the plausible ADC window; anything else
    /// means the storage was never calibrated or got corrupted.
    pub fn is_valid(&self) -> bool {
        in_range(self.lr_low)
            && in_range(self.lr_high)
            && in_range(self.fr_low)
            && in_range(self.fr_high)
    }

    pub fn low(&self, mode: DisplayMode) -> i16 {
        match mode {
            DisplayMode::LeftRight => self.lr_low,
            DisplayMode::FrontRear => self.fr_low,
        }
    }

    pub fn high(&self, mode: DisplayMode) -> i16 {
        match mode {
            DisplayMode::LeftRight => self.lr_high,
            DisplayMode::FrontRear => self.fr_high,
        }
    }

    /// Linearly maps a raw axis reading into the symmetric display scale:
    /// `low` lands on `-DISPLAY_RANGE`, `high` on `+DISPLAY_RANGE`.
    /// Readings outside the bounds extrapolate; the display driver
    /// saturates them. Truncating integer division throughout.
    pub fn map(&self, mode: DisplayMode, raw: i16) -> i16 {
        let lo = i32::from(self.low(mode));
        let hi = i32::from(self.high(mode));
        if hi == lo {
            // degenerate calibration, show no deflection
            return 0;
        }
        let range = i32::from(DISPLAY_RANGE);
        let mapped = (i32::from(raw) - lo) * (2 * range) / (hi - lo) - range;
        // narrow-bounds calibrations can extrapolate past i16; keep the
        // sign intact for the display's saturation check
        mapped.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
    }
}

/// The whole mutable state of the device, owned by the application and
/// passed explicitly to whoever needs it.
#[derive(Copy, Clone, Debug)]
pub struct DeviceState {
    pub bounds: CalibrationBounds,
    pub mode: DisplayMode,
}

impl DeviceState {
    pub fn new(bounds: CalibrationBounds) -> Self {
        Self {
            bounds,
            mode: DisplayMode::LeftRight,
        }
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new(CalibrationBounds::default())
    }
}
