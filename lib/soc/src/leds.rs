use shim::const_assert_size;
use volatile::prelude::*;
use volatile::Volatile;

use crate::common::LEDS_BASE;

#[repr(C)]
#[allow(non_snake_case)]
struct Registers {
    STATE: Volatile<u32>,
}

const_assert_size!(Registers, 4);

/// The board's LED bank. Bit `n` of the state word drives LED `n`.
pub struct Leds {
    registers: &'static mut Registers,
}

impl Leds {
    /// Returns a handle to the board's LED bank.
    pub fn new() -> Leds {
        unsafe { Leds::at(LEDS_BASE) }
    }

    /// Returns a handle to an LED bank mapped at `base`.
    ///
    /// # Safety
    ///
    /// `base` must be the address of an LED register.
    pub unsafe fn at(base: usize) -> Leds {
        Leds {
            registers: &mut *(base as *mut Registers),
        }
    }

    /// Returns the current LED pattern.
    pub fn get(&self) -> u32 {
        self.registers.STATE.read()
    }

    /// Replaces the LED pattern.
    pub fn set(&mut self, pattern: u32) {
        self.registers.STATE.write(pattern);
    }

    /// Turns on the LEDs in `mask`, leaving the others alone.
    pub fn on(&mut self, mask: u32) {
        self.registers.STATE.or_mask(mask);
    }

    /// Turns off the LEDs in `mask`, leaving the others alone.
    pub fn off(&mut self, mask: u32) {
        self.registers.STATE.and_mask(!mask);
    }
}
