#![cfg_attr(not(test), no_std)]

pub mod common;
pub mod leds;
pub mod uart;
