use core::{
    fmt::{self, Write as _},
    slice,
};

use crate::{
    error::TlenixError,
    ffi::{self, CStr},
    os::linux::syscall::{
        self, RawFd,
        ffi::{Kernel, Linux},
    },
};

/// Writes `s` to standard output with a single `write`.
///
/// Nothing is buffered and a short write is not retried.
pub fn print<K>(kernel: &K, s: &CStr) -> Result<usize, TlenixError>
where
    K: Kernel + ?Sized,
{
    let len = ffi::length(s);
    // SAFETY: `len` bytes in front of the terminator belong to `s`.
    let buf = unsafe { slice::from_raw_parts(s.as_ptr().cast::<u8>(), len) };
    syscall::write(kernel, RawFd::STDOUT, buf)
}

/// Unbuffered standard error for formatted diagnostics.
pub struct RawStderr<'k, K>
where
    K: Kernel + ?Sized,
{
    kernel: &'k K,
}

impl<'k, K> RawStderr<'k, K>
where
    K: Kernel + ?Sized,
{
    #[must_use]
    pub fn new(kernel: &'k K) -> Self {
        Self { kernel }
    }
}

impl<K> fmt::Write for RawStderr<'_, K>
where
    K: Kernel + ?Sized,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut rest = s.as_bytes();
        while !rest.is_empty() {
            match syscall::write(self.kernel, RawFd::STDERR, rest) {
                Ok(0) | Err(_) => return Err(fmt::Error),
                Ok(n) => rest = &rest[n..],
            }
        }
        Ok(())
    }
}

#[doc(hidden)]
pub fn eprint_fmt(args: fmt::Arguments<'_>) {
    // Nowhere left to report a failed diagnostic.
    let _ = RawStderr::new(&Linux).write_fmt(args);
}
