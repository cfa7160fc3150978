#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]

#[cfg(not(test))]
mod init;
mod logger;

use chunkload::{Handoff, Image, Progress, CHUNK_SIZE};
use log::{error, info};
use soc::leds::Leds;
use soc::uart::Uart;

/// Start address of the binary to load.
const BINARY_START_ADDR: usize = 0x1000;
/// Lowest address of the bootloader's stack.
const BOOTLOADER_STACK_ADDR: usize = 0xF000;

/// Pointer to where the loaded binary expects to be loaded.
const BINARY_START: *mut u8 = BINARY_START_ADDR as *mut u8;

/// Free space between the loaded binary's start address and the bootloader's
/// stack.
const MAX_BINARY_SIZE: usize = BOOTLOADER_STACK_ADDR - BINARY_START_ADDR;

/// Low LED nibble: count of chunks seen so far, wrapping.
const CHUNK_LEDS: u32 = 0b1111;

fn show_progress(progress: Progress) {
    if let Progress::Chunk { offset, .. } = progress {
        let chunks = (offset / CHUNK_SIZE) as u32 + 1;
        let mut leds = Leds::new();
        leds.off(CHUNK_LEDS);
        leds.on(chunks & CHUNK_LEDS);
    }
}

/// Parks the hart for good.
fn halt() -> ! {
    loop {
        rv32::wfi();
    }
}

fn bootloader() -> ! {
    unsafe { logger::init_logger() };

    let uart = Uart::new();
    let mut image = unsafe { Image::from_raw_parts(BINARY_START, MAX_BINARY_SIZE) };

    match chunkload::load_with_progress(uart, &mut image, show_progress) {
        Handoff::Jump { entry, len } => {
            info!("jumping to {:#x}, {} bytes loaded", entry, len);
            unsafe { rv32::jump_to(entry) }
        }
        Handoff::Halt(err) => {
            error!("{}", err);
            halt()
        }
    }
}
