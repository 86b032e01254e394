//! Structured error chains for services
//!
//! Wrap a lower-level failure with higher-level context without losing it.
//! Every layer may carry:
//! - a technical message, rendered by `Display` as `"outer: inner"`
//! - a user-facing message, composed separately by [`get_user_message`]
//! - an [`ErrorType`] classification, resolved by [`get_type`]
//! - opaque [`Detail`] payloads, collected by [`get_details`]
//! - the site it was built at, listed by [`get_stack_trace`]
//!
//! ```
//! use weberr::{get_type, get_user_message, user_wrapf, ErrorType};
//!
//! let err = ErrorType::BAD_REQUEST.user_errorf("Internal");
//! let err = user_wrapf(err, "External");
//!
//! assert_eq!(err.to_string(), "Internal");
//! assert_eq!(get_user_message(&err), "External: Internal");
//! assert_eq!(get_type(&err), ErrorType::BAD_REQUEST);
//! ```
//!
//! Resolvers accept anything convertible into a [`Link`]: chain errors,
//! foreign errors and the nil error alike.
//!
//! # Capture sites
//!
//! With the default `full-backtrace` feature each constructor resolves the
//! calling function's name by symbolizing the stack. That is expensive; where
//! errors are built on hot paths, install [`CallerLocation`] at startup to
//! record only file, line and column:
//!
//! ```
//! weberr::install_site_provider(Box::new(weberr::CallerLocation))
//!     .map_err(|e| e.to_string())?;
//! # Ok::<(), String>(())
//! ```

pub mod error;
pub mod site;

pub use error::*;
pub use site::{install_site_provider, CallerLocation, CaptureSite, SiteError, SiteProvider};

#[cfg(feature = "full-backtrace")]
pub use site::SymbolizedCaller;
