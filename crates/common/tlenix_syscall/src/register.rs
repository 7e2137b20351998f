use core::{convert::Infallible, marker::PhantomData};

use crate::{
    MAX_ARGS, RawFd, Register, RegisterDecodeError, RegisterValue, UserSlice,
    error::{MAX_ERRNO, SyscallError},
};

impl<T, const N: usize> Register<T, N> {
    pub fn new(a: [usize; N]) -> Self {
        Self {
            a,
            _phantom: PhantomData,
        }
    }

    fn map_type<U>(self) -> Register<U, N> {
        Register {
            a: self.a,
            _phantom: PhantomData,
        }
    }

    pub fn try_decode(self) -> Result<T, T::DecodeError>
    where
        T: RegisterValue<Repr = Self>,
    {
        T::try_decode(self)
    }

    /// Widens the encoding to the full argument register set.
    ///
    /// Slots past `N` are zero.
    #[must_use]
    pub fn into_args(self) -> [usize; MAX_ARGS] {
        const {
            assert!(N <= MAX_ARGS, "syscalls take at most six arguments");
        }
        let mut args = [0; MAX_ARGS];
        for (slot, word) in args.iter_mut().zip(self.a) {
            *slot = word;
        }
        args
    }
}

macro_rules! impl_value {
    ([$($bound:tt)*] $ty:ty, $err:ty, $n:expr, $enc:ident, $dec:ident) => {
        impl<$($bound)*> RegisterValue for $ty {
            type DecodeError = $err;
            type Repr = Register<Self, $n>;

            fn encode(self) -> Self::Repr {
                $enc(self)
            }

            fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError> {
                $dec(repr)
            }
        }
    };
}

impl RegisterValue for usize {
    type DecodeError = Infallible;
    type Repr = Register<Self, 1>;

    fn encode(self) -> Self::Repr {
        Register::new([self])
    }

    fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError> {
        Ok(repr.a[0])
    }
}

impl RegisterValue for isize {
    type DecodeError = Infallible;
    type Repr = Register<Self, 1>;

    fn encode(self) -> Self::Repr {
        Register::new([self.cast_unsigned()])
    }

    fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError> {
        let [a0] = repr.a;
        Ok(a0.cast_signed())
    }
}

impl RegisterValue for RawFd {
    type DecodeError = RegisterDecodeError;
    type Repr = Register<Self, 1>;

    fn encode(self) -> Self::Repr {
        usize::try_from(self.get())
            .unwrap_or(usize::MAX)
            .encode()
            .map_type()
    }

    fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError> {
        let n: usize = repr.map_type().try_decode()?;
        Ok(Self::new(n.try_into()?))
    }
}

impl<T> RegisterValue for UserSlice<T> {
    type DecodeError = Infallible;
    type Repr = Register<Self, 2>;

    fn encode(self) -> Self::Repr {
        let [a0] = self.addr.encode().a;
        let [a1] = self.len.encode().a;
        Self::Repr::new([a0, a1])
    }

    fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError> {
        let [a0, a1] = repr.a;
        let addr = Register::new([a0]).try_decode()?;
        let len = Register::new([a1]).try_decode()?;
        Ok(Self::from_raw_parts(addr, len))
    }
}

impl RegisterValue for SyscallError {
    type DecodeError = RegisterDecodeError;
    type Repr = Register<Self, 1>;

    fn encode(self) -> Self::Repr {
        (-self.errno()).encode().map_type()
    }

    fn try_decode(repr: Self::Repr) -> Result<Self, Self::DecodeError> {
        let n: isize = repr.map_type().try_decode()?;
        Self::from_repr(-n).ok_or(RegisterDecodeError::InvalidSyscallErrorNo(-n))
    }
}

/// Kernel return words in `-MAX_ERRNO..=-1` carry a negated errno.
fn is_error_word(word: usize) -> bool {
    (-MAX_ERRNO..0).contains(&word.cast_signed())
}

fn result_encode_1<T>(res: Result<T, SyscallError>) -> Register<Result<T, SyscallError>, 1>
where
    T: RegisterValue<Repr = Register<T, 1>>,
{
    match res {
        Ok(v) => v.encode().map_type(),
        Err(e) => e.encode().map_type(),
    }
}

fn result_decode_1<T>(
    repr: Register<Result<T, SyscallError>, 1>,
) -> Result<Result<T, SyscallError>, RegisterDecodeError>
where
    T: RegisterValue<Repr = Register<T, 1>>,
    RegisterDecodeError: From<T::DecodeError>,
{
    let [a0] = repr.a;
    if is_error_word(a0) {
        let e = SyscallError::try_decode(Register::new([a0]))?;
        return Ok(Err(e));
    }
    let v = Register::new([a0]).try_decode()?;
    Ok(Ok(v))
}

impl_value!([] Result<usize, SyscallError>, RegisterDecodeError, 1, result_encode_1, result_decode_1);

fn tuple_encode_12<T, U>((v0, v1): (T, U)) -> Register<(T, U), 3>
where
    T: RegisterValue<Repr = Register<T, 1>>,
    U: RegisterValue<Repr = Register<U, 2>>,
{
    let [a0] = v0.encode().a;
    let [a1, a2] = v1.encode().a;
    Register::new([a0, a1, a2])
}

fn tuple_decode_12<T, U, E>(repr: Register<(T, U), 3>) -> Result<(T, U), E>
where
    T: RegisterValue<Repr = Register<T, 1>>,
    U: RegisterValue<Repr = Register<U, 2>>,
    E: From<T::DecodeError> + From<U::DecodeError>,
{
    let [a0, a1, a2] = repr.a;
    let v0 = Register::new([a0]).try_decode()?;
    let v1 = Register::new([a1, a2]).try_decode()?;
    Ok((v0, v1))
}

impl_value!([T] (RawFd, UserSlice<T>), RegisterDecodeError, 3, tuple_encode_12, tuple_decode_12);
