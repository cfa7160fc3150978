#![cfg_attr(not(test), no_std)]

//! Wrappers that force every access to a memory-mapped register through
//! `read_volatile`/`write_volatile`.
//!
//! Register blocks are declared as `#[repr(C)]` structs of these wrappers and
//! then overlaid on the peripheral's base address:
//!
//! ```ignore
//! #[repr(C)]
//! struct Registers {
//!     DATA: Volatile<u32>,
//!     STATUS: ReadVolatile<u32>,
//! }
//! ```

mod traits;

pub use traits::*;

pub mod prelude {
    pub use crate::traits::{Readable, ReadableWriteable, Writeable};
}

/// A read/write register.
#[repr(C)]
pub struct Volatile<T>(T);

/// A read-only register.
#[repr(C)]
pub struct ReadVolatile<T>(T);

/// A write-only register.
#[repr(C)]
pub struct WriteVolatile<T>(T);

/// A register-sized hole in a register block. Cannot be accessed.
#[repr(C)]
pub struct Reserved<T>(T);

macro_rules! constructor {
    ($($W:ident),*) => {
        $(
            impl<T> $W<T> {
                /// Wraps an initial value. Used when a register block lives
                /// in ordinary memory, e.g. a software model of a device.
                pub const fn new(value: T) -> $W<T> {
                    $W(value)
                }
            }
        )*
    };
}

constructor!(Volatile, ReadVolatile, WriteVolatile, Reserved);

macro_rules! readable {
    ($($W:ident),*) => {
        $(
            impl<T> Readable<T> for $W<T> {
                #[inline(always)]
                fn as_ptr(&self) -> *const T {
                    &self.0 as *const T
                }
            }
        )*
    };
}

macro_rules! writeable {
    ($($W:ident),*) => {
        $(
            impl<T> Writeable<T> for $W<T> {
                #[inline(always)]
                fn as_mut_ptr(&mut self) -> *mut T {
                    &mut self.0 as *mut T
                }
            }
        )*
    };
}

readable!(Volatile, ReadVolatile);
writeable!(Volatile, WriteVolatile);

impl<T> ReadableWriteable<T> for Volatile<T> {}
