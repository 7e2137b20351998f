//! Process entry and panic handling for programs linked without libc.
//!
//! The kernel jumps to `_start` with the stack pointer at `argc`. Nothing is
//! parsed from there; the stack is aligned and control passes to the
//! program's `extern "C" fn main() -> !`.

#[cfg(all(feature = "lang_items", not(test), target_arch = "x86_64"))]
core::arch::global_asm!(
    ".globl _start",
    "_start:",
    "xor ebp, ebp",
    "and rsp, -16",
    "call main",
    "ud2",
);

#[cfg(all(feature = "lang_items", not(test), target_arch = "aarch64"))]
core::arch::global_asm!(
    ".globl _start",
    "_start:",
    "mov x29, xzr",
    "mov x30, xzr",
    "mov x9, sp",
    "and x9, x9, #-16",
    "mov sp, x9",
    "bl main",
    "brk #0",
);

#[cfg(all(feature = "lang_items", not(test), target_arch = "riscv64"))]
core::arch::global_asm!(
    ".globl _start",
    "_start:",
    ".option push",
    ".option norelax",
    "la gp, __global_pointer$",
    ".option pop",
    "andi sp, sp, -16",
    "call main",
    "unimp",
);

#[cfg(all(feature = "lang_items", not(test)))]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo<'_>) -> ! {
    crate::eprintln!("init: panic: {info}");
    // PID 1 exiting brings the kernel down; stay alive instead.
    loop {
        core::hint::spin_loop();
    }
}
