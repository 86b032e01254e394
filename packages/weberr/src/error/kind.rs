//! Open classification tags for error chains

use std::fmt;

/// Classification tag attached to a chain layer
///
/// Downstream crates define their own tags as constants:
///
/// ```
/// use weberr::ErrorType;
///
/// const RATE_LIMITED: ErrorType = ErrorType::with_status("RateLimited", 429);
/// assert_eq!(RATE_LIMITED.status_code(), Some(429));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ErrorType {
    tag: Option<&'static str>,
    status: Option<u16>,
}

impl ErrorType {
    /// Sentinel for "unclassified at this layer"
    pub const NO_TYPE: Self = Self {
        tag: None,
        status: None,
    };
    /// Malformed or invalid input
    pub const BAD_REQUEST: Self = Self::with_status("BadRequest", 400);
    /// Missing or invalid credentials
    pub const UNAUTHORIZED: Self = Self::with_status("Unauthorized", 401);
    /// Authenticated but not permitted
    pub const FORBIDDEN: Self = Self::with_status("Forbidden", 403);
    /// Requested entity does not exist
    pub const NOT_FOUND: Self = Self::with_status("NotFound", 404);
    /// Conflicts with current state
    pub const CONFLICT: Self = Self::with_status("Conflict", 409);
    /// Unexpected failure
    pub const INTERNAL: Self = Self::with_status("Internal", 500);

    /// A tag with no status hint
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            tag: Some(name),
            status: None,
        }
    }

    /// A tag that maps to an HTTP status code
    #[must_use]
    pub const fn with_status(name: &'static str, status: u16) -> Self {
        Self {
            tag: Some(name),
            status: Some(status),
        }
    }

    /// Tag name, `"NoType"` for the sentinel
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.tag.unwrap_or("NoType")
    }

    /// Whether this is the [`ErrorType::NO_TYPE`] sentinel
    #[must_use]
    pub const fn is_no_type(&self) -> bool {
        self.tag.is_none()
    }

    /// HTTP status hint, if the tag carries one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        self.status
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
