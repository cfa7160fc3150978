#![cfg_attr(feature = "no_std", no_std)]

//! The chunked load protocol: a byte stream of `[len][len bytes]` chunks in
//! which a length of `255` means "full chunk, more follow" and any other
//! length ends the transfer.
//!
//! The receiving side is split into a [`Framer`] (the state machine reading
//! length and payload bytes), an [`Image`] (the append-only destination
//! memory) and a [`Handoff`] (what to do once the stream ends). The sending
//! side is [`transmit`].

mod error;
mod frame;
mod handoff;
mod image;
mod progress;
mod transmit;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use frame::{Framer, State};
pub use handoff::{load, load_with_progress, Handoff};
pub use image::Image;
pub use progress::{noop, Progress, ProgressFn};
pub use transmit::{transmit, transmit_with_progress};

/// Length byte of a full chunk that is followed by at least one more.
pub const CONTINUE: u8 = 255;

/// Payload bytes carried by a full chunk.
pub const CHUNK_SIZE: usize = CONTINUE as usize;
