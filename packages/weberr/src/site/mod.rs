//! Capture-site recording
//!
//! Every constructor records where it was called from. The location comes from
//! `#[track_caller]`; turning it into a [`CaptureSite`] is delegated to a
//! process-wide [`SiteProvider`] so tests can substitute a deterministic stub.

#[cfg(feature = "full-backtrace")]
mod symbolized;

#[cfg(feature = "full-backtrace")]
pub use symbolized::SymbolizedCaller;

use log::{debug, warn};
use once_cell::sync::OnceCell;
use std::fmt;
use std::panic::Location;
use thiserror::Error;

static PROVIDER: OnceCell<Box<dyn SiteProvider>> = OnceCell::new();

/// Source location recorded when a chain node is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSite {
    /// Symbolic name of the enclosing function, when it could be resolved
    pub function: Option<String>,
    /// Source file of the call
    pub file: &'static str,
    /// Line of the call
    pub line: u32,
    /// Column of the call
    pub column: u32,
}

impl CaptureSite {
    /// Site for a caller location with no resolved function name
    #[must_use]
    pub fn from_location(caller: &'static Location<'static>) -> Self {
        Self {
            function: None,
            file: caller.file(),
            line: caller.line(),
            column: caller.column(),
        }
    }

    /// Attach a function name to this site
    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }
}

impl fmt::Display for CaptureSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(function) = &self.function {
            write!(f, "{function} at ")?;
        }
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Turns a caller location into a [`CaptureSite`]
pub trait SiteProvider: Send + Sync {
    /// Build the site for one constructor call
    fn capture(&self, caller: &'static Location<'static>) -> CaptureSite;
}

/// Records the caller location only
#[derive(Debug, Default, Clone, Copy)]
pub struct CallerLocation;

impl SiteProvider for CallerLocation {
    fn capture(&self, caller: &'static Location<'static>) -> CaptureSite {
        CaptureSite::from_location(caller)
    }
}

/// Errors from configuring the capture-site recorder
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiteError {
    /// A provider was installed already, or the default one is in use
    #[error("capture-site provider already installed")]
    AlreadyInstalled,
}

/// Install the process-wide site provider
///
/// Succeeds only before the first error is constructed and only once.
///
/// # Errors
///
/// Returns [`SiteError::AlreadyInstalled`] if a provider is already active.
pub fn install_site_provider(provider: Box<dyn SiteProvider>) -> Result<(), SiteError> {
    match PROVIDER.set(provider) {
        Ok(()) => {
            debug!("capture-site provider installed");
            Ok(())
        }
        Err(_) => {
            warn!("capture-site provider rejected: one is already active");
            Err(SiteError::AlreadyInstalled)
        }
    }
}

fn default_provider() -> Box<dyn SiteProvider> {
    #[cfg(feature = "full-backtrace")]
    {
        Box::new(SymbolizedCaller)
    }
    #[cfg(not(feature = "full-backtrace"))]
    {
        Box::new(CallerLocation)
    }
}

/// Record the site of `caller` with the active provider
pub(crate) fn capture(caller: &'static Location<'static>) -> CaptureSite {
    PROVIDER.get_or_init(default_provider).capture(caller)
}
