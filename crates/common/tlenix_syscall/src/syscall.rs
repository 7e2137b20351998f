use crate::{RawFd, Syscall, SyscallCode, UserSlice, error::SyscallError};

macro_rules! syscall {
    ($( struct $name:ident (fn($($arg:ty),* $(,)?) -> $ret:ty ) ;) *) => {
        $(
            #[derive(Debug)]
            pub struct $name {}

            impl Syscall for $name {
                type Arg = ( $($arg ,)* );
                type Return = $ret;

                const CODE: SyscallCode = SyscallCode::$name;
            }
        )*
    };
}

syscall! {
    struct Write(fn(RawFd, UserSlice<u8>) -> Result<usize, SyscallError>);
}
