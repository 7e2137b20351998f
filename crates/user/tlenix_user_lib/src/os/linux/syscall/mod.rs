use tlenix_syscall::UserSlice;
pub use tlenix_syscall::{RawFd, SyscallCode};

use self::ffi::{Kernel, SyscallExt as _, syscall};
use crate::error::TlenixError;

pub mod ffi;

/// Hands `buf` to the kernel for writing to `fd`.
///
/// Issues exactly one `write`; a short count is returned as is.
pub fn write<K>(kernel: &K, fd: RawFd, buf: &[u8]) -> Result<usize, TlenixError>
where
    K: Kernel + ?Sized,
{
    // SAFETY: `buf` is borrowed until the syscall returns.
    let res = unsafe { syscall::Write::try_call(kernel, (fd, UserSlice::new(buf))) }?;
    let nwritten = res?;
    Ok(nwritten)
}
