//! Single-instruction helpers. Off a RISC-V target (host builds of the
//! workspace) they degrade to spin hints so dependents still compile.

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
use core::arch::asm;

/// Wait for interrupt not to burn CPU.
#[inline(always)]
pub fn wfi() {
    #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
    unsafe {
        asm!("wfi", options(nomem, nostack))
    };

    #[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
    core::hint::spin_loop();
}

/// Instruction fetch fence: makes stores to instruction memory visible to
/// subsequent fetches on this hart.
#[inline(always)]
pub fn fence_i() {
    // Raw encoding of `fence.i`; base RV32I targets don't enable Zifencei.
    #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
    unsafe {
        asm!(".4byte 0x0000100f", options(nostack, preserves_flags))
    };
}

/// Branches to the address `addr` unconditionally, after fencing
/// instruction fetch against the stores that just filled it.
///
/// # Safety
///
/// `addr` must hold valid code for this hart. Nothing the caller owns
/// survives the jump.
#[inline(always)]
pub unsafe fn jump_to(addr: usize) -> ! {
    fence_i();

    #[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
    asm!("jr {dest}", dest = in(reg) addr, options(noreturn));

    #[cfg(not(any(target_arch = "riscv32", target_arch = "riscv64")))]
    panic!("cannot transfer control to {:#x} off a RISC-V target", addr);
}
