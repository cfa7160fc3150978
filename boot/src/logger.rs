use log::{Level, LevelFilter, Metadata, Record};
use soc::leds::Leds;

/// Shows the level of the latest record on the LEDs. Messages are dropped:
/// the UART carries nothing but the load protocol.
struct LedLogger;
static LOGGER: LedLogger = LedLogger;

/// Upper LED nibble, so the chunk counter in the low bits stays readable.
fn pattern(level: Level) -> u32 {
    match level {
        Level::Error => 0b1111 << 4,
        Level::Warn => 0b0111 << 4,
        Level::Info => 0b0011 << 4,
        Level::Debug => 0b0001 << 4,
        Level::Trace => 0,
    }
}

impl log::Log for LedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut leds = Leds::new();
            leds.off(0b1111 << 4);
            leds.on(pattern(record.level()));
        }
    }

    fn flush(&self) {}
}

pub unsafe fn init_logger() {
    if log::set_logger_racy(&LOGGER).is_ok() {
        log::set_max_level(if option_env!("VERBOSE_BUILD").is_some() {
            LevelFilter::Trace
        } else {
            LevelFilter::Warn
        });
    }
}
