//! Format macros for the constructors
//!
//! Each macro takes `format!`-style arguments. An optional leading
//! `TYPE =>` classifies the new layer.

/// Build a root error, see [`errorf`](crate::errorf())
///
/// ```
/// use weberr::{errorf, get_type, ErrorType};
///
/// let err = errorf!("missing key {}", "id");
/// assert_eq!(err.to_string(), "missing key id");
///
/// let err = errorf!(ErrorType::NOT_FOUND => "no user {}", 7);
/// assert_eq!(get_type(&err), ErrorType::NOT_FOUND);
/// ```
#[macro_export]
macro_rules! errorf {
    ($kind:expr => $($arg:tt)+) => {
        $crate::ErrorType::errorf($kind, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::errorf(format_args!($($arg)+))
    };
}

/// Build a root error with a user message, see [`user_errorf`](crate::user_errorf())
#[macro_export]
macro_rules! user_errorf {
    ($kind:expr => $($arg:tt)+) => {
        $crate::ErrorType::user_errorf($kind, format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::user_errorf(format_args!($($arg)+))
    };
}

/// Wrap a cause with a technical message, see [`wrapf`](crate::wrapf())
///
/// ```
/// use weberr::{errorf, wrapf};
///
/// let inner = errorf!("{}", 1);
/// assert_eq!(wrapf!(inner, "{}", "2").to_string(), "2: 1");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($kind:expr => $cause:expr, $($arg:tt)+) => {
        $crate::ErrorType::wrapf($kind, $cause, format_args!($($arg)+))
    };
    ($cause:expr, $($arg:tt)+) => {
        $crate::wrapf($cause, format_args!($($arg)+))
    };
}

/// Wrap a cause with a user message, see [`user_wrapf`](crate::user_wrapf())
#[macro_export]
macro_rules! user_wrapf {
    ($kind:expr => $cause:expr, $($arg:tt)+) => {
        $crate::ErrorType::user_wrapf($kind, $cause, format_args!($($arg)+))
    };
    ($cause:expr, $($arg:tt)+) => {
        $crate::user_wrapf($cause, format_args!($($arg)+))
    };
}
