//! Extension traits for building chains from `Result` and `Option`

use super::detail::Detail;
use super::kind::ErrorType;
use super::types::{Cause, Result};
use std::fmt;

/// Wrap the error side of a `Result`
pub trait ResultExt<T> {
    /// [`wrapf`](crate::wrapf()) the error with a technical message
    fn wrap_err(self, message: impl fmt::Display) -> Result<T>;

    /// [`user_wrapf`](crate::user_wrapf()) the error with a user message
    fn user_wrap_err(self, message: impl fmt::Display) -> Result<T>;

    /// Classify the error, see [`ErrorType::set`]
    fn with_type(self, kind: ErrorType) -> Result<T>;

    /// Attach details to the error
    fn with_details<I, D>(self, details: I) -> Result<T>
    where
        I: IntoIterator<Item = D>,
        D: Into<Option<Detail>>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Cause>,
{
    #[track_caller]
    fn wrap_err(self, message: impl fmt::Display) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => Err(ErrorType::NO_TYPE.wrapf(cause, message)),
        }
    }

    #[track_caller]
    fn user_wrap_err(self, message: impl fmt::Display) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => Err(ErrorType::NO_TYPE.user_wrapf(cause, message)),
        }
    }

    #[track_caller]
    fn with_type(self, kind: ErrorType) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => Err(kind.set(cause)),
        }
    }

    #[track_caller]
    fn with_details<I, D>(self, details: I) -> Result<T>
    where
        I: IntoIterator<Item = D>,
        D: Into<Option<Detail>>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => Err(ErrorType::NO_TYPE.add_details(cause, details)),
        }
    }
}

/// Turn a missing value into an error
pub trait OptionExt<T> {
    /// `None` becomes an unclassified root error
    fn ok_or_errorf(self, message: impl fmt::Display) -> Result<T>;

    /// `None` becomes a root error of type `kind`
    fn ok_or_typed(self, kind: ErrorType, message: impl fmt::Display) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn ok_or_errorf(self, message: impl fmt::Display) -> Result<T> {
        match self {
            Some(value) => Ok(value),
            None => Err(ErrorType::NO_TYPE.errorf(message)),
        }
    }

    #[track_caller]
    fn ok_or_typed(self, kind: ErrorType, message: impl fmt::Display) -> Result<T> {
        match self {
            Some(value) => Ok(value),
            None => Err(kind.errorf(message)),
        }
    }
}
