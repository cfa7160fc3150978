use core::slice;

use crate::Error;

/// The destination of a load: a fixed region the loaded program will run
/// from, filled front to back with no gaps.
pub struct Image<'a> {
    buf: &'a mut [u8],
    offset: usize,
}

impl<'a> Image<'a> {
    /// Wraps `buf` as an empty image.
    pub fn new(buf: &'a mut [u8]) -> Image<'a> {
        Image { buf, offset: 0 }
    }

    /// Wraps the `capacity` bytes of memory starting at `base`.
    ///
    /// # Safety
    ///
    /// `base..base + capacity` must be writable memory that nothing else
    /// references for the lifetime of the image.
    pub unsafe fn from_raw_parts(base: *mut u8, capacity: usize) -> Image<'static> {
        Image::new(slice::from_raw_parts_mut(base, capacity))
    }

    /// Address of the first byte; the loaded program's entry point.
    pub fn entry(&self) -> usize {
        self.buf.as_ptr() as usize
    }

    /// Size of the region in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes written so far. Also the offset of the next write.
    pub fn len(&self) -> usize {
        self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.offset == 0
    }

    /// The bytes loaded so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.offset]
    }

    /// Stores `value` at `entry() + offset`.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` without writing anything if `offset` lies
    /// outside the region.
    pub fn write_byte_at_offset(&mut self, offset: usize, value: u8) -> Result<(), Error> {
        match self.buf.get_mut(offset) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::CapacityExceeded {
                offset,
                capacity: self.capacity(),
            }),
        }
    }

    /// Stores `value` right after the last byte written.
    pub fn append(&mut self, value: u8) -> Result<(), Error> {
        self.write_byte_at_offset(self.offset, value)?;
        self.offset += 1;
        Ok(())
    }
}
