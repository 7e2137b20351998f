//! The PID 1 control loop.

use tlenix_params::{BANNER, DELAY_TIME, HEARTBEAT};

use crate::{io, os::linux::syscall::ffi::Kernel};

/// Prints the banner once, then a heartbeat after every `pause(DELAY_TIME)`,
/// forever.
///
/// Write results are dropped: a failing console changes nothing about what
/// is attempted next.
pub fn run<K, P>(kernel: &K, mut pause: P) -> !
where
    K: Kernel + ?Sized,
    P: FnMut(u64),
{
    let _ = io::print(kernel, BANNER);
    loop {
        pause(DELAY_TIME);
        let _ = io::print(kernel, HEARTBEAT);
    }
}
