//! Configuration constants for the G-meter firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate for the diagnostic console
pub const UART_BAUD: u32 = 9600;

/// Samples averaged into one axis reading
pub const SENSOR_SAMPLES: u16 = 30;

/// Pause between consecutive samples in milliseconds
pub const SAMPLE_DELAY_MS: u16 = 2;

/// Button debounce time in milliseconds
pub const DEBOUNCE_MS: u16 = 50;

/// Poll interval while timing a held button, in milliseconds
pub const POLL_TICK_MS: u16 = 1;

/// Holds longer than this start the calibration sequence
pub const LONG_PRESS_MS: u32 = 2_000;

/// Holds longer than this are treated as a stuck switch
pub const HOLD_TIMEOUT_MS: u32 = 10_000;

/// Brightness sub-levels per LED along the bar
pub const BRIGHTNESS_STEPS: i16 = 8;

/// Half-width of the symmetric display scale
pub const DISPLAY_RANGE: i16 = 3 * BRIGHTNESS_STEPS + 1;

/// Lowest raw reading accepted as a calibration bound
pub const BOUNDS_MIN: i16 = 200;

/// Highest raw reading accepted as a calibration bound
pub const BOUNDS_MAX: i16 = 800;

/// Fallback low bound installed when stored calibration is invalid
pub const DEFAULT_LOW: i16 = 400;

/// Fallback high bound installed when stored calibration is invalid
pub const DEFAULT_HIGH: i16 = 600;
