#![cfg_attr(not(test), no_std)]

use core::ffi::CStr;

const fn nul_terminated(bytes: &'static [u8]) -> &'static CStr {
    match CStr::from_bytes_with_nul(bytes) {
        Ok(s) => s,
        Err(_) => panic!("parameter string must end with its only NUL byte"),
    }
}

/// Banner printed once when init starts.
pub const BANNER: &CStr = nul_terminated(
    concat!("Welcome to tlenix v", env!("CARGO_PKG_VERSION"), "!\n\0").as_bytes(),
);

/// Heartbeat printed after every delay.
pub const HEARTBEAT: &CStr = c"TICK!\n";

/// Busy-wait iterations between two heartbeats.
///
/// Not tied to any clock; the wall-clock period depends on the CPU.
pub const DELAY_TIME: u64 = 1_000_000_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_text() {
        assert_eq!(BANNER.to_bytes(), b"Welcome to tlenix v0.1.0!\n");
    }

    #[test]
    fn heartbeat_text() {
        assert_eq!(HEARTBEAT.to_bytes(), b"TICK!\n");
    }
}
