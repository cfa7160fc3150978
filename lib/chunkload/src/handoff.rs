use log::error;
use shim::io;

use crate::progress::{self, ProgressFn};
use crate::{Error, Framer, Image};

/// What the loader does once a session ends. There is no return to the
/// loader after either.
#[derive(Debug)]
pub enum Handoff {
    /// Transfer control to `entry`; the image holds `len` bytes.
    Jump { entry: usize, len: usize },
    /// Stop for good without running the image.
    Halt(Error),
}

/// Runs a whole load session: reads chunks from `from` into `image` until the
/// final chunk, then decides where control goes.
pub fn load<R: io::Read>(from: R, image: &mut Image) -> Handoff {
    load_with_progress(from, image, progress::noop)
}

/// Like `load`, reporting progress to `f`.
pub fn load_with_progress<R: io::Read>(from: R, image: &mut Image, f: ProgressFn) -> Handoff {
    let mut framer = Framer::new_with_progress(from, f);
    match framer.receive(image) {
        Ok(len) => Handoff::Jump {
            entry: image.entry(),
            len,
        },
        Err(err) => {
            error!("halting without jump at state {:?}", framer.state());
            Handoff::Halt(err)
        }
    }
}
