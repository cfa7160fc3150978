use log::{debug, trace};
use shim::io;

use crate::progress::{self, Progress, ProgressFn};
use crate::CHUNK_SIZE;

/// Reads from `data` until `buf` is full or `data` is exhausted.
fn fill<R: io::Read>(data: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match data.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Sends everything in `data` to `to` as a chunk stream. Returns the number
/// of payload bytes sent.
///
/// Full chunks carry `CHUNK_SIZE` bytes. When the data ends on a chunk
/// boundary (or is empty) a zero-length chunk closes the stream.
pub fn transmit<R: io::Read, W: io::Write>(data: R, to: W) -> io::Result<usize> {
    transmit_with_progress(data, to, progress::noop)
}

/// Like `transmit`, reporting each chunk and completion to `f`.
pub fn transmit_with_progress<R: io::Read, W: io::Write>(
    mut data: R,
    mut to: W,
    f: ProgressFn,
) -> io::Result<usize> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0;

    loop {
        let len = fill(&mut data, &mut buf)?;
        trace!("sending chunk of {} bytes", len);
        f(Progress::Chunk {
            len: len as u8,
            offset: total,
        });

        to.write_all(&[len as u8])?;
        to.write_all(&buf[..len])?;
        total += len;

        if len < CHUNK_SIZE {
            break;
        }
    }

    to.flush()?;
    debug!("sent {} bytes", total);
    f(Progress::Done { total });
    Ok(total)
}
