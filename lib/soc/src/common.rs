/// Serial peripheral register block.
pub const UART_BASE: usize = 0x0100_0000;

/// LED bank; one bit per LED.
pub const LEDS_BASE: usize = 0x0200_0000;
