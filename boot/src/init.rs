use core::arch::global_asm;
use core::mem::zeroed;
use core::ptr::{addr_of_mut, write_volatile};
mod panic;

use crate::bootloader;

global_asm!(include_str!("init/init.s"));

unsafe fn zeros_bss() {
    extern "C" {
        static mut __bss_beg: u32;
        static mut __bss_end: u32;
    }

    let mut iter: *mut u32 = addr_of_mut!(__bss_beg);
    let end: *mut u32 = addr_of_mut!(__bss_end);

    while iter < end {
        write_volatile(iter, zeroed());
        iter = iter.add(1);
    }
}

/// Loader entrypoint, reached from `_start` with `gp` and `sp` set up.
#[no_mangle]
pub unsafe extern "C" fn kinit() -> ! {
    zeros_bss();
    bootloader();
}
