mod stdio;

pub use self::stdio::{RawStderr, eprint_fmt, print};
