/// Fails compilation unless `size_of::<$T>() == $size`.
#[macro_export]
macro_rules! const_assert_size {
    ($T:ty, $size:expr) => {
        const _: () = assert!(::core::mem::size_of::<$T>() == $size);
    };
}

/// Fails compilation unless both constant expressions are equal.
#[macro_export]
macro_rules! const_assert_eq {
    ($left:expr, $right:expr) => {
        const _: () = assert!($left == $right);
    };
}

/// Builds an `io::Error` of kind `$kind` carrying a static message.
#[macro_export]
macro_rules! newioerr {
    ($kind:ident, $msg:expr) => {
        $crate::io::Error::new($crate::io::ErrorKind::$kind, $msg)
    };
}

/// `Err(newioerr!(..))`.
#[macro_export]
macro_rules! ioerr {
    ($kind:ident, $msg:expr) => {
        Err($crate::newioerr!($kind, $msg))
    };
}
