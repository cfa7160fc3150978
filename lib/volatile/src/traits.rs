use core::ops::{BitAnd, BitOr};
use core::ptr::{read_volatile, write_volatile};

/// A register that can be read.
pub trait Readable<T> {
    /// Pointer to the underlying storage.
    fn as_ptr(&self) -> *const T;

    /// Performs a volatile read of the register.
    #[inline(always)]
    fn read(&self) -> T {
        unsafe { read_volatile(self.as_ptr()) }
    }

    /// Returns `true` if every bit set in `mask` is set in the register.
    #[inline(always)]
    fn has_mask(&self, mask: T) -> bool
    where
        T: BitAnd<Output = T> + PartialEq + Copy,
    {
        (self.read() & mask) == mask
    }
}

/// A register that can be written.
pub trait Writeable<T> {
    /// Mutable pointer to the underlying storage.
    fn as_mut_ptr(&mut self) -> *mut T;

    /// Performs a volatile write of `val` to the register.
    #[inline(always)]
    fn write(&mut self, val: T) {
        unsafe { write_volatile(self.as_mut_ptr(), val) }
    }
}

/// A register supporting read-modify-write.
pub trait ReadableWriteable<T>: Readable<T> + Writeable<T> {
    /// Sets the bits in `mask`.
    #[inline(always)]
    fn or_mask(&mut self, mask: T)
    where
        T: BitOr<Output = T>,
    {
        let value = self.read() | mask;
        self.write(value);
    }

    /// Keeps only the bits in `mask`.
    #[inline(always)]
    fn and_mask(&mut self, mask: T)
    where
        T: BitAnd<Output = T>,
    {
        let value = self.read() & mask;
        self.write(value);
    }
}
