use log::{debug, error, trace};
use shim::io;

use crate::progress::{self, Progress, ProgressFn};
use crate::{Error, Image, CONTINUE};

/// Where the framer is in the byte stream.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    /// The next byte is a chunk's length.
    AwaitLength,
    /// `read` of the chunk's `len` payload bytes have been consumed.
    ReadPayload { len: u8, read: u8 },
    /// All payload of a chunk of length `len` has been consumed.
    CheckContinue { len: u8 },
    /// The final chunk has been consumed; the image holds `total` bytes.
    Done { total: usize },
}

/// Reads chunks from a transport and appends their payload to an [`Image`].
pub struct Framer<R> {
    inner: R,
    state: State,
    progress: ProgressFn,
}

impl<R: io::Read> Framer<R> {
    /// Returns a framer reading from `inner`, waiting for the first length
    /// byte.
    pub fn new(inner: R) -> Self {
        Framer::new_with_progress(inner, progress::noop)
    }

    /// Like `new`, reporting each chunk and the end of the stream to `f`.
    pub fn new_with_progress(inner: R, f: ProgressFn) -> Self {
        Framer {
            inner,
            state: State::AwaitLength,
            progress: f,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the transport.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn read_byte(&mut self) -> io::Result<u8> {
        let mut byte = [0u8; 1];
        self.inner.read_exact(&mut byte)?;
        Ok(byte[0])
    }

    /// Performs one transition, reading at most one byte from the transport
    /// and writing at most one byte to `image`. Returns the new state.
    /// `Done` is absorbing.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the transport fails and `CapacityExceeded` if the
    /// payload would run past the end of `image`. The state is left
    /// unchanged on error.
    pub fn step(&mut self, image: &mut Image) -> Result<State, Error> {
        let next = match self.state {
            State::AwaitLength => {
                let len = self.read_byte()?;
                trace!("chunk of {} bytes at offset {}", len, image.len());
                (self.progress)(Progress::Chunk {
                    len,
                    offset: image.len(),
                });

                if len == 0 {
                    State::CheckContinue { len }
                } else {
                    State::ReadPayload { len, read: 0 }
                }
            }
            State::ReadPayload { len, read } => {
                let byte = self.read_byte()?;
                if let Err(err) = image.append(byte) {
                    error!("{}", err);
                    return Err(err);
                }

                let read = read + 1;
                if read == len {
                    State::CheckContinue { len }
                } else {
                    State::ReadPayload { len, read }
                }
            }
            State::CheckContinue { len } => {
                if len == CONTINUE {
                    State::AwaitLength
                } else {
                    State::Done { total: image.len() }
                }
            }
            done @ State::Done { .. } => done,
        };

        self.state = next;
        Ok(next)
    }

    /// Steps until the final chunk has been consumed. Returns the number of
    /// bytes in `image`.
    pub fn receive(&mut self, image: &mut Image) -> Result<usize, Error> {
        loop {
            if let State::Done { total } = self.step(image)? {
                debug!("load complete: {} bytes", total);
                (self.progress)(Progress::Done { total });
                return Ok(total);
            }
        }
    }
}
