#![cfg_attr(feature = "no_std", no_std)]

#[macro_use]
mod macros;

cfg_if::cfg_if! {
    if #[cfg(feature = "no_std")] {
        /// `core2`'s copy of `std::io`, usable without an allocator.
        pub use core2::io;
    } else {
        pub use std::io;
    }
}
