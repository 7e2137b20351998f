//! NUL-terminated byte strings.

pub use core::ffi::CStr;

/// Counts the bytes in front of the first NUL at `s`.
///
/// # Safety
///
/// `s` must point to a NUL-terminated byte sequence that stays readable
/// for the whole scan.
#[must_use]
pub unsafe fn strlen(s: *const u8) -> usize {
    let mut len = 0;
    // SAFETY: every byte up to and including the terminator is readable.
    while unsafe { s.add(len).read() } != 0 {
        len += 1;
    }
    len
}

/// Length of `s` in bytes, terminator excluded.
#[must_use]
pub fn length(s: &CStr) -> usize {
    // SAFETY: a `CStr` is always NUL-terminated.
    unsafe { strlen(s.as_ptr().cast()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(length(c""), 0);
    }

    #[test]
    fn ascii() {
        assert_eq!(length(c"abc"), 3);
        assert_eq!(length(c"TICK!\n"), 6);
    }

    #[test]
    fn any_non_zero_byte_counts() {
        assert_eq!(length(c"\x01\x7f\x80\xff"), 4);
    }

    #[test]
    fn stops_at_first_nul() {
        let bytes = b"ab\0cd\0";
        assert_eq!(unsafe { strlen(bytes.as_ptr()) }, 2);
        assert_eq!(unsafe { strlen(bytes[3..].as_ptr()) }, 2);
        assert_eq!(unsafe { strlen(bytes[2..].as_ptr()) }, 0);
    }

    #[test]
    fn matches_core() {
        for s in [c"", c"x", c"Welcome to tlenix v0.1.0!\n"] {
            assert_eq!(length(s), s.to_bytes().len());
        }
    }
}
