//! The raw kernel boundary.
//!
//! [`Kernel::invoke`] is the only way user code reaches the kernel; every
//! typed wrapper in [`super`] funnels through it.

pub use tlenix_syscall::{MAX_ARGS, SyscallCode, syscall};
use tlenix_syscall::{Register, RegisterValue, ReturnTypeRepr, Syscall};

/// Something that can service syscalls.
///
/// [`Linux`] traps into the running kernel. Tests substitute a recorder.
pub trait Kernel {
    /// Issues syscall `code` with all six argument registers loaded from
    /// `args` and returns the kernel's result word untouched.
    ///
    /// Unused argument slots must be zero.
    ///
    /// # Safety
    ///
    /// Every address in `args` must point to memory that is valid, in the
    /// layout `code` expects, for the whole duration of the call.
    unsafe fn invoke(&self, code: SyscallCode, args: [usize; MAX_ARGS]) -> usize;
}

/// The kernel this process runs on.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linux;

impl Kernel for Linux {
    #[cfg(target_arch = "x86_64")]
    unsafe fn invoke(&self, code: SyscallCode, args: [usize; MAX_ARGS]) -> usize {
        let [a0, a1, a2, a3, a4, a5] = args;
        let ret: usize;
        unsafe {
            core::arch::asm!(
                "syscall",
                inlateout("rax") code as usize => ret,
                in("rdi") a0,
                in("rsi") a1,
                in("rdx") a2,
                in("r10") a3,
                in("r8") a4,
                in("r9") a5,
                lateout("rcx") _, // clobbered
                lateout("r11") _, // clobbered
                options(nostack, preserves_flags),
            );
        }
        ret
    }

    #[cfg(target_arch = "aarch64")]
    unsafe fn invoke(&self, code: SyscallCode, args: [usize; MAX_ARGS]) -> usize {
        let [a0, a1, a2, a3, a4, a5] = args;
        let ret: usize;
        unsafe {
            core::arch::asm!(
                "svc 0",
                inlateout("x0") a0 => ret,
                in("x1") a1,
                in("x2") a2,
                in("x3") a3,
                in("x4") a4,
                in("x5") a5,
                in("x8") code as usize,
                options(nostack),
            );
        }
        ret
    }

    #[cfg(target_arch = "riscv64")]
    unsafe fn invoke(&self, code: SyscallCode, args: [usize; MAX_ARGS]) -> usize {
        let [a0, a1, a2, a3, a4, a5] = args;
        let ret: usize;
        unsafe {
            core::arch::asm!(
                "ecall",
                inlateout("a0") a0 => ret,
                in("a1") a1,
                in("a2") a2,
                in("a3") a3,
                in("a4") a4,
                in("a5") a5,
                in("a7") code as usize,
                options(nostack),
            );
        }
        ret
    }

    #[cfg(not(any(
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "riscv64"
    )))]
    unsafe fn invoke(&self, _code: SyscallCode, _args: [usize; MAX_ARGS]) -> usize {
        unimplemented!()
    }
}

pub trait SyscallExt: Syscall {
    /// Encodes `arg` into the argument registers and traps.
    ///
    /// # Safety
    ///
    /// Any buffer described by `arg` must outlive the call.
    unsafe fn call_raw<K>(kernel: &K, arg: Self::Arg) -> ReturnTypeRepr<Self>
    where
        K: Kernel + ?Sized;

    /// Like [`Self::call_raw`], decoding the result word.
    ///
    /// # Safety
    ///
    /// Same contract as [`Self::call_raw`].
    unsafe fn try_call<K>(
        kernel: &K,
        arg: Self::Arg,
    ) -> Result<Self::Return, <Self::Return as RegisterValue>::DecodeError>
    where
        K: Kernel + ?Sized,
    {
        let ret = unsafe { Self::call_raw(kernel, arg) };
        Self::Return::try_decode(ret)
    }
}

macro_rules! syscall {
    ($name:ident) => {
        impl SyscallExt for syscall::$name {
            unsafe fn call_raw<K>(kernel: &K, arg: Self::Arg) -> ReturnTypeRepr<Self>
            where
                K: Kernel + ?Sized,
            {
                let args = Self::Arg::encode(arg).into_args();
                let ret = unsafe { kernel.invoke(Self::CODE, args) };
                Register::new([ret])
            }
        }
    };
}

syscall!(Write);
