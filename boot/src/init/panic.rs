use core::panic::PanicInfo;

use soc::leds::Leds;

/// Every LED lit.
const PANIC_PATTERN: u32 = !0;

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    // The UART belongs to the load protocol; the LEDs are all we have.
    Leds::new().set(PANIC_PATTERN);
    loop {
        rv32::wfi();
    }
}
