//! The first process the kernel starts, expected at `/sbin/init`.
//!
//! Prints the welcome banner, then a heartbeat forever.

#![no_std]
#![no_main]

use tlenix_user_lib::{init, os::linux::syscall::ffi::Linux, thread};

#[unsafe(no_mangle)]
extern "C" fn main() -> ! {
    init::run(&Linux, thread::delay)
}
