use strum::FromRepr;

/// Largest errno the kernel encodes into a syscall return word.
pub const MAX_ERRNO: isize = 4095;

/// Failure codes a `write` can come back with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, thiserror::Error)]
#[repr(isize)]
pub enum SyscallError {
    // EPERM
    #[error("operation not permitted")]
    NotPermitted = 1,
    // EINTR
    #[error("interrupted system call")]
    Interrupted = 4,
    // EIO
    #[error("input/output error")]
    Io = 5,
    // EBADF
    #[error("bad file descriptor")]
    BadFileDescriptor = 9,
    // EAGAIN
    #[error("resource temporarily unavailable")]
    WouldBlock = 11,
    // EFAULT
    #[error("bad address")]
    BadAddress = 14,
    // EINVAL
    #[error("invalid argument")]
    InvalidInput = 22,
    // EFBIG
    #[error("file too large")]
    FileTooLarge = 27,
    // ENOSPC
    #[error("no space left on device")]
    StorageFull = 28,
    // EPIPE
    #[error("broken pipe")]
    BrokenPipe = 32,
    // ENOSYS
    #[error("function not implemented")]
    Unsupported = 38,
    // EDESTADDRREQ
    #[error("destination address required")]
    DestinationAddressRequired = 89,
    // EDQUOT
    #[error("disk quota exceeded")]
    QuotaExceeded = 122,
}

impl SyscallError {
    #[must_use]
    pub const fn errno(self) -> isize {
        self as isize
    }
}
