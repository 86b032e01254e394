//! Error constructors
//!
//! Every constructor adds exactly one layer and records its caller's site.
//! Free functions build unclassified layers; the same operations on an
//! [`ErrorType`] classify the new layer with that type.

use super::detail::Detail;
use super::kind::ErrorType;
use super::types::{Cause, Error, Node};
use crate::site;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

impl Error {
    fn layer(
        cause: Cause,
        message: String,
        user_message: Option<String>,
        kind: ErrorType,
        details: Vec<Detail>,
        caller: &'static Location<'static>,
    ) -> Self {
        Self {
            inner: Arc::new(Node {
                cause,
                message,
                user_message,
                kind,
                details,
                site: site::capture(caller),
            }),
        }
    }
}

fn present<I, D>(details: I) -> Vec<Detail>
where
    I: IntoIterator<Item = D>,
    D: Into<Option<Detail>>,
{
    details.into_iter().filter_map(Into::into).collect()
}

impl ErrorType {
    /// Root error of this type with a technical message
    #[track_caller]
    pub fn errorf(self, message: impl fmt::Display) -> Error {
        Error::layer(
            Cause::Absent,
            message.to_string(),
            None,
            self,
            Vec::new(),
            Location::caller(),
        )
    }

    /// Root error of this type whose technical and user messages are both
    /// `message`
    #[track_caller]
    pub fn user_errorf(self, message: impl fmt::Display) -> Error {
        let text = message.to_string();
        Error::layer(
            Cause::Absent,
            text.clone(),
            Some(text),
            self,
            Vec::new(),
            Location::caller(),
        )
    }

    /// Wrap `cause` with a technical message
    #[track_caller]
    pub fn wrapf(self, cause: impl Into<Cause>, message: impl fmt::Display) -> Error {
        Error::layer(
            cause.into(),
            message.to_string(),
            None,
            self,
            Vec::new(),
            Location::caller(),
        )
    }

    /// Wrap `cause` with a user message, leaving the technical message to the
    /// cause
    #[track_caller]
    pub fn user_wrapf(self, cause: impl Into<Cause>, message: impl fmt::Display) -> Error {
        Error::layer(
            cause.into(),
            String::new(),
            Some(message.to_string()),
            self,
            Vec::new(),
            Location::caller(),
        )
    }

    /// Classify `cause` as this type without adding any text
    #[track_caller]
    pub fn set(self, cause: impl Into<Cause>) -> Error {
        Error::layer(
            cause.into(),
            String::new(),
            None,
            self,
            Vec::new(),
            Location::caller(),
        )
    }

    /// Classify `err` as this type and attach the present `details`
    ///
    /// Unlike [`add_details`], this always yields a layer: the type is itself
    /// new information.
    #[track_caller]
    pub fn add_details<I, D>(self, err: impl Into<Cause>, details: I) -> Error
    where
        I: IntoIterator<Item = D>,
        D: Into<Option<Detail>>,
    {
        Error::layer(
            err.into(),
            String::new(),
            None,
            self,
            present(details),
            Location::caller(),
        )
    }
}

/// Unclassified root error with a technical message
#[track_caller]
pub fn errorf(message: impl fmt::Display) -> Error {
    ErrorType::NO_TYPE.errorf(message)
}

/// Unclassified root error whose technical and user messages are both
/// `message`
#[track_caller]
pub fn user_errorf(message: impl fmt::Display) -> Error {
    ErrorType::NO_TYPE.user_errorf(message)
}

/// Wrap `cause` with a technical message
///
/// ```
/// use weberr::{wrapf, Cause};
///
/// let eof = std::io::Error::from(std::io::ErrorKind::UnexpectedEof);
/// let err = wrapf(eof, "reading header");
/// assert_eq!(err.to_string(), "reading header: unexpected end of file");
/// assert_eq!(wrapf(Cause::Absent, "alone").to_string(), "alone");
/// ```
#[track_caller]
pub fn wrapf(cause: impl Into<Cause>, message: impl fmt::Display) -> Error {
    ErrorType::NO_TYPE.wrapf(cause, message)
}

/// Wrap `cause` with a user message
///
/// The technical message is left to `cause`.
#[track_caller]
pub fn user_wrapf(cause: impl Into<Cause>, message: impl fmt::Display) -> Error {
    ErrorType::NO_TYPE.user_wrapf(cause, message)
}

/// Attach the present `details` to `err`
///
/// `None` entries are skipped. When `err` is absent and nothing is left to
/// attach the result is `None`, i.e. still the nil error.
#[track_caller]
pub fn add_details<I, D>(err: impl Into<Cause>, details: I) -> Option<Error>
where
    I: IntoIterator<Item = D>,
    D: Into<Option<Detail>>,
{
    let cause = err.into();
    let details = present(details);
    if cause.is_absent() && details.is_empty() {
        return None;
    }
    Some(Error::layer(
        cause,
        String::new(),
        None,
        ErrorType::NO_TYPE,
        details,
        Location::caller(),
    ))
}
