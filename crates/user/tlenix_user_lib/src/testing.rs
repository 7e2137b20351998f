//! A recording kernel for host-side tests.

use std::{
    cell::RefCell,
    panic::{self, AssertUnwindSafe},
    ptr, slice,
};

use tlenix_syscall::{MAX_ARGS, RegisterValue as _, error::SyscallError};

use crate::os::linux::syscall::ffi::{Kernel, SyscallCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SyscallRecord {
    pub(crate) code: SyscallCode,
    pub(crate) args: [usize; MAX_ARGS],
    /// Bytes the `(addr, len)` pair in `args[1..3]` pointed at during the call.
    pub(crate) bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Syscall(SyscallRecord),
    Pause(u64),
}

/// Panic payload the mock raises to stop a loop that never returns.
#[derive(Debug)]
pub(crate) struct Halt;

pub(crate) struct MockKernel {
    events: RefCell<Vec<Event>>,
    reply: Box<dyn Fn(usize) -> usize>,
    halt_after: Option<usize>,
}

impl MockKernel {
    /// Accepts every byte of every write.
    pub(crate) fn new() -> Self {
        Self::replying(|len| len)
    }

    /// Answers each call with `reply(requested_len)`.
    pub(crate) fn replying(reply: impl Fn(usize) -> usize + 'static) -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            reply: Box::new(reply),
            halt_after: None,
        }
    }

    /// Fails every call with `error`.
    pub(crate) fn failing(error: SyscallError) -> Self {
        let [word] = Err::<usize, _>(error).encode().a;
        Self::replying(move |_| word)
    }

    /// Raises [`Halt`] once the `n`th write to standard output has been
    /// recorded. Other calls do not count.
    pub(crate) fn halt_after(mut self, n: usize) -> Self {
        self.halt_after = Some(n);
        self
    }

    pub(crate) fn pause(&self, iterations: u64) {
        self.events.borrow_mut().push(Event::Pause(iterations));
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub(crate) fn syscalls(&self) -> Vec<SyscallRecord> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Syscall(record) => Some(record.clone()),
                Event::Pause(_) => None,
            })
            .collect()
    }

    /// Decodes every captured buffer back into text.
    pub(crate) fn written(&self) -> Vec<String> {
        self.syscalls()
            .into_iter()
            .map(|record| String::from_utf8(record.bytes).unwrap())
            .collect()
    }
}

impl Kernel for MockKernel {
    unsafe fn invoke(&self, code: SyscallCode, args: [usize; MAX_ARGS]) -> usize {
        let [_, addr, len, ..] = args;
        let bytes = if len == 0 {
            Vec::new()
        } else {
            // SAFETY: the caller keeps the buffer alive for the whole call.
            unsafe { slice::from_raw_parts(ptr::with_exposed_provenance::<u8>(addr), len) }
                .to_vec()
        };

        let nstdout = {
            let mut events = self.events.borrow_mut();
            events.push(Event::Syscall(SyscallRecord { code, args, bytes }));
            events
                .iter()
                .filter(|event| {
                    matches!(event, Event::Syscall(record) if is_stdout_write(record))
                })
                .count()
        };
        if is_stdout_write_args(code, &args) && self.halt_after == Some(nstdout) {
            panic::panic_any(Halt);
        }

        (self.reply)(len)
    }
}

fn is_stdout_write_args(code: SyscallCode, args: &[usize; MAX_ARGS]) -> bool {
    code == SyscallCode::Write && args[0] == 1
}

fn is_stdout_write(record: &SyscallRecord) -> bool {
    is_stdout_write_args(record.code, &record.args)
}

/// Runs `f` until the mock kernel raises [`Halt`].
pub(crate) fn run_until_halt(f: impl FnOnce()) {
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    let payload = outcome.expect_err("halted loop must not return on its own");
    assert!(payload.is::<Halt>(), "loop stopped by an unexpected panic");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::os::linux::syscall::{RawFd, write};

    #[test]
    fn halt_counts_only_stdout_writes() {
        let kernel = MockKernel::new().halt_after(2);
        run_until_halt(|| {
            for _ in 0..3 {
                let _ = write(&kernel, RawFd::STDERR, b"e");
            }
            let _ = write(&kernel, RawFd::STDOUT, b"1");
            let _ = write(&kernel, RawFd::STDERR, b"e");
            let _ = write(&kernel, RawFd::STDOUT, b"2");
            panic!("second stdout write did not halt");
        });
        assert_eq!(kernel.written(), ["e", "e", "e", "1", "e", "2"]);
    }
}
