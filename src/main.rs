#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use gmeter_firmware::hal::{board, Uart};
    use gmeter_firmware::Application;
    use ufmt::uwriteln;

    // Claim the peripherals once; the HAL works on raw register blocks.
    let _dp = avr_device::atmega128a::Peripherals::take();

    let mut console = Uart::new();
    let mut display = board::led_bar();
    let mut button = board::mode_button();
    let mut sensor = board::accelerometer();
    let mut store = board::calibration_store();

    uwriteln!(&mut console, "G-meter firmware v0.1.0").ok();

    let mut app = Application::new();
    app.boot(&mut store, &mut display, &mut console).ok();

    loop {
        app.update(
            &mut button,
            &mut display,
            &mut sensor,
            &mut store,
            &mut console,
        )
        .ok();
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    // The firmware entry point only exists for AVR targets; host builds
    // are for the test suite.
}
