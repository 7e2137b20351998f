#![cfg_attr(not(test), no_std)]

#[macro_use]
mod macros;

pub mod error;
pub mod ffi;
pub mod init;
pub mod io;
pub mod os;
mod rt;
pub mod thread;

#[cfg(test)]
mod testing;
