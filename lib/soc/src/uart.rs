use core::fmt;
use core::hint::spin_loop;

use shim::const_assert_size;
use shim::io;
use volatile::prelude::*;
use volatile::{ReadVolatile, Reserved, Volatile};

use crate::common::UART_BASE;

/// Bit 0 of `RD_FLAG`: a byte is waiting in `RD_DATA`.
const RD_AVAILABLE: u32 = 1 << 0;
/// Bit 0 of `WR_BUF_FULL`: a write now would be dropped.
const WR_FULL: u32 = 1 << 0;

#[repr(C)]
#[allow(non_snake_case)]
struct Registers {
    RD_DATA: ReadVolatile<u32>,     // 0x00 read data, undefined unless RD_AVAILABLE
    RD_FLAG: ReadVolatile<u32>,     // 0x04 read data available
    RD_BUF_CNT: ReadVolatile<u32>,  // 0x08 words waiting in the read buffer
    __r0: Reserved<u32>,            // 0x0C
    WR_DATA: Volatile<u32>,         // 0x10 write data
    WR_BUF_FULL: ReadVolatile<u32>, // 0x14 write buffer full
    WR_BUF_CNT: ReadVolatile<u32>,  // 0x18 words waiting in the write buffer
}

const_assert_size!(Registers, 0x1C);

/// The serial peripheral.
///
/// Every blocking operation is a busy-wait on a status flag; there are no
/// timeouts.
pub struct Uart {
    registers: &'static mut Registers,
}

impl Uart {
    /// Returns a handle to the board's UART.
    pub fn new() -> Uart {
        unsafe { Uart::at(UART_BASE) }
    }

    /// Returns a handle to a UART register block mapped at `base`.
    ///
    /// # Safety
    ///
    /// `base` must be the address of a UART register block, and no other
    /// handle to the same block may be live.
    pub unsafe fn at(base: usize) -> Uart {
        Uart {
            registers: &mut *(base as *mut Registers),
        }
    }

    /// Returns `true` if a byte can be read without blocking.
    pub fn has_byte(&self) -> bool {
        self.registers.RD_FLAG.has_mask(RD_AVAILABLE)
    }

    /// Returns `true` if the write buffer cannot accept a byte.
    pub fn is_full(&self) -> bool {
        self.registers.WR_BUF_FULL.has_mask(WR_FULL)
    }

    /// Number of words waiting in the read buffer.
    pub fn rx_count(&self) -> u32 {
        self.registers.RD_BUF_CNT.read()
    }

    /// Number of words waiting in the write buffer.
    pub fn tx_count(&self) -> u32 {
        self.registers.WR_BUF_CNT.read()
    }

    /// Spins until a byte is available.
    pub fn wait_for_byte(&self) {
        while !self.has_byte() {
            spin_loop();
        }
    }

    /// Spins until the write buffer has room.
    pub fn wait_for_space(&self) {
        while self.is_full() {
            spin_loop();
        }
    }

    /// Blocks until a byte is received and returns it.
    pub fn read_byte(&mut self) -> u8 {
        self.wait_for_byte();
        self.registers.RD_DATA.read() as u8
    }

    /// Blocks until the write buffer has room, then sends `byte`.
    pub fn write_byte(&mut self, byte: u8) {
        self.wait_for_space();
        self.registers.WR_DATA.write(byte as u32);
    }

    /// Sends bytes from `data` until all are sent or a NUL byte is reached.
    /// The NUL itself is not sent. Returns the number of bytes sent.
    pub fn write_until_nul(&mut self, data: &[u8]) -> usize {
        let mut sent = 0;
        for &byte in data.iter().take_while(|&&byte| byte != 0) {
            self.write_byte(byte);
            sent += 1;
        }
        sent
    }

    /// Blocks until exactly `buf.len()` bytes have been received into `buf`.
    pub fn read_into(&mut self, buf: &mut [u8]) {
        for slot in buf.iter_mut() {
            *slot = self.read_byte();
        }
    }
}

impl io::Read for Uart {
    /// Blocks for the first byte, then takes whatever else is already
    /// buffered without blocking again.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        buf[0] = self.read_byte();
        let mut read = 1;
        while read < buf.len() && self.has_byte() {
            buf[read] = self.read_byte();
            read += 1;
        }

        Ok(read)
    }
}

impl io::Write for Uart {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &byte in buf {
            self.write_byte(byte);
        }
        Ok(buf.len())
    }

    /// Waits for the hardware write buffer to drain.
    fn flush(&mut self) -> io::Result<()> {
        while self.tx_count() != 0 {
            spin_loop();
        }
        Ok(())
    }
}

impl fmt::Write for Uart {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            if byte == b'\n' {
                self.write_byte(b'\r');
            }
            self.write_byte(byte);
        }
        Ok(())
    }
}
