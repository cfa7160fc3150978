use core::fmt;

use shim::io;

/// Reasons a load session ends without a jump.
#[derive(Debug)]
pub enum Error {
    /// The transport failed. Hardware transports never fail; test doubles
    /// report running out of input this way.
    Io(io::Error),
    /// A payload byte was destined for `offset`, past the end of an image
    /// of `capacity` bytes.
    CapacityExceeded { offset: usize, capacity: usize },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "transport error: {}", err),
            Error::CapacityExceeded { offset, capacity } => write!(
                f,
                "image byte at offset {} exceeds capacity of {} bytes",
                offset, capacity
            ),
        }
    }
}
