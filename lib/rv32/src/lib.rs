#![no_std]

pub mod asm;

pub use asm::*;
