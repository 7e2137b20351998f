#![cfg_attr(not(test), no_std)]

use core::{convert::Infallible, fmt, marker::PhantomData, num::TryFromIntError};

use strum::{Display, FromRepr};

pub mod error;
mod register;
pub mod syscall;

/// Number of argument registers the kernel reads on every syscall.
pub const MAX_ARGS: usize = 6;

#[cfg(target_arch = "x86_64")]
mod nr {
    pub const WRITE: usize = 1;
}

// aarch64, riscv64 and the other ports share the generic syscall table.
#[cfg(not(target_arch = "x86_64"))]
mod nr {
    pub const WRITE: usize = 64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRepr, Display)]
#[repr(usize)]
#[strum(serialize_all = "snake_case")]
pub enum SyscallCode {
    Write = nr::WRITE,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct RawFd(u32);

impl RawFd {
    pub const STDOUT: Self = Self::new(1);
    pub const STDERR: Self = Self::new(2);

    #[must_use]
    pub const fn new(fd: u32) -> Self {
        Self(fd)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

pub trait Syscall {
    const CODE: SyscallCode;
    type Arg: RegisterValue;
    type Return: RegisterValue;
}

/// A buffer handed to the kernel by address and element count.
///
/// The kernel dereferences the address during the call, so the buffer must
/// stay where it is until the syscall returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct UserSlice<T> {
    addr: usize,
    len: usize,
    _phantom: PhantomData<T>,
}

impl<T> UserSlice<T> {
    #[must_use]
    pub fn new(s: &[T]) -> Self {
        Self {
            addr: s.as_ptr().expose_provenance(),
            len: s.len(),
            _phantom: PhantomData,
        }
    }

    #[must_use]
    pub const fn from_raw_parts(addr: usize, len: usize) -> Self {
        Self {
            addr,
            len,
            _phantom: PhantomData,
        }
    }

    #[must_use]
    pub const fn addr(&self) -> usize {
        self.addr
    }

    #[expect(clippy::len_without_is_empty)]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }
}

pub type ReturnTypeRepr<T> = <<T as Syscall>::Return as RegisterValue>::Repr;

/// `N` machine words holding an encoded `T`.
#[must_use]
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub struct Register<T, const N: usize> {
    pub a: [usize; N],
    _phantom: PhantomData<T>,
}

impl<T, const N: usize> Copy for Register<T, N> {}
impl<T, const N: usize> Clone for Register<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterDecodeError {
    #[error("int conversion: {0}")]
    IntConversion(#[from] TryFromIntError),
    #[error("invalid syscall error number: {0}")]
    InvalidSyscallErrorNo(isize),
}

impl From<Infallible> for RegisterDecodeError {
    fn from(_: Infallible) -> Self {
        unreachable!()
    }
}

pub trait RegisterValue
where
    Self: Sized,
{
    type DecodeError: fmt::Debug;
    type Repr;

    fn encode(self) -> Self::Repr;
    fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError>;
}
