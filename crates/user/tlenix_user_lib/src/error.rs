use tlenix_syscall::{RegisterDecodeError, error::SyscallError};

#[derive(Debug, thiserror::Error)]
pub enum TlenixError {
    #[error(transparent)]
    Syscall(#[from] SyscallError),
    #[error("malformed syscall return: {0}")]
    Decode(#[from] RegisterDecodeError),
}

impl TlenixError {
    /// Returns the kernel errno, if the kernel reported one.
    #[must_use]
    pub fn errno(&self) -> Option<isize> {
        match self {
            Self::Syscall(e) => Some(e.errno()),
            Self::Decode(_) => None,
        }
    }
}
