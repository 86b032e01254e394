//! Core chain types

use super::detail::Detail;
use super::kind::ErrorType;
use crate::site::CaptureSite;
use std::error::Error as StdError;
use std::sync::Arc;

/// One layer of an error chain
///
/// Cheap to clone; layers are immutable once built and can be shared across
/// threads.
#[derive(Clone)]
pub struct Error {
    pub(super) inner: Arc<Node>,
}

pub(super) struct Node {
    /// What this layer wraps
    pub cause: Cause,
    /// Technical message, empty when the layer contributes none
    pub message: String,
    /// User-facing message set at this layer
    pub user_message: Option<String>,
    /// Classification, `NO_TYPE` when unclassified here
    pub kind: ErrorType,
    /// Details attached at this layer, in attachment order
    pub details: Vec<Detail>,
    /// Where the layer was built
    pub site: CaptureSite,
}

impl Drop for Node {
    // Unlink iteratively; dropping a long chain recursively overflows the stack
    fn drop(&mut self) {
        let mut next = std::mem::take(&mut self.cause);
        while let Cause::Chain(error) = next {
            next = match Arc::into_inner(error.inner) {
                Some(mut node) => std::mem::take(&mut node.cause),
                None => break,
            };
        }
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// The error a layer wraps
#[derive(Debug, Default)]
pub enum Cause {
    /// Chain root with nothing below it
    #[default]
    Absent,
    /// Another layer of this library
    Chain(Error),
    /// An error built elsewhere, known only by its message
    Foreign(Box<dyn StdError + Send + Sync>),
}

impl Cause {
    /// Wrap any error value as a cause
    ///
    /// A [`Error`] passed here still becomes a [`Cause::Chain`].
    pub fn foreign<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let boxed: Box<dyn StdError + Send + Sync> = Box::new(error);
        Self::from(boxed)
    }

    /// Whether there is no cause
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrow as a [`Link`]
    #[must_use]
    pub fn as_link(&self) -> Link<'_> {
        Link::from(self)
    }
}

impl From<Error> for Cause {
    fn from(error: Error) -> Self {
        Self::Chain(error)
    }
}

impl From<&Error> for Cause {
    fn from(error: &Error) -> Self {
        Self::Chain(error.clone())
    }
}

impl From<Option<Error>> for Cause {
    fn from(error: Option<Error>) -> Self {
        error.map_or(Self::Absent, Self::Chain)
    }
}

impl From<std::io::Error> for Cause {
    fn from(error: std::io::Error) -> Self {
        Self::Foreign(Box::new(error))
    }
}

impl From<Box<dyn StdError + Send + Sync>> for Cause {
    fn from(error: Box<dyn StdError + Send + Sync>) -> Self {
        match error.downcast::<Error>() {
            Ok(chain) => Self::Chain(*chain),
            Err(foreign) => Self::Foreign(foreign),
        }
    }
}

impl From<anyhow::Error> for Cause {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<Error>() {
            Ok(chain) => Self::Chain(chain),
            Err(other) => {
                let boxed: Box<dyn StdError + Send + Sync> = other.into();
                Self::from(boxed)
            }
        }
    }
}

/// Borrowed view of anything the resolvers accept
#[derive(Debug, Clone, Copy, Default)]
pub enum Link<'a> {
    /// The nil error
    #[default]
    Absent,
    /// A layer of this library
    Chain(&'a Error),
    /// An error built elsewhere
    Foreign(&'a (dyn StdError + 'static)),
}

impl<'a> Link<'a> {
    /// View an error of any type
    ///
    /// An [`Error`] behind the reference is still viewed as [`Link::Chain`].
    pub fn foreign<E: StdError + 'static>(error: &'a E) -> Self {
        Self::from(error as &(dyn StdError + 'static))
    }

    /// Whether this is the nil error
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The chain layer, if this is one
    #[must_use]
    pub fn as_chain(&self) -> Option<&'a Error> {
        match *self {
            Self::Chain(error) => Some(error),
            Self::Absent | Self::Foreign(_) => None,
        }
    }

    /// Chain layers from the outermost inwards
    #[must_use]
    pub fn layers(&self) -> Layers<'a> {
        Layers {
            next: self.as_chain(),
        }
    }

    /// What remains once every chain layer is peeled off
    #[must_use]
    pub fn terminal(&self) -> Link<'a> {
        let mut link = *self;
        while let Self::Chain(error) = link {
            link = error.cause();
        }
        link
    }
}

impl<'a> From<&'a Error> for Link<'a> {
    fn from(error: &'a Error) -> Self {
        Self::Chain(error)
    }
}

impl<'a> From<Option<&'a Error>> for Link<'a> {
    fn from(error: Option<&'a Error>) -> Self {
        error.map_or(Self::Absent, Self::Chain)
    }
}

impl<'a> From<&'a Option<Error>> for Link<'a> {
    fn from(error: &'a Option<Error>) -> Self {
        Self::from(error.as_ref())
    }
}

impl<'a> From<&'a Cause> for Link<'a> {
    fn from(cause: &'a Cause) -> Self {
        match cause {
            Cause::Absent => Self::Absent,
            Cause::Chain(error) => Self::Chain(error),
            Cause::Foreign(error) => Self::from(&**error as &(dyn StdError + 'static)),
        }
    }
}

impl<'a> From<&'a (dyn StdError + 'static)> for Link<'a> {
    fn from(error: &'a (dyn StdError + 'static)) -> Self {
        match error.downcast_ref::<Error>() {
            Some(chain) => Self::Chain(chain),
            None => Self::Foreign(error),
        }
    }
}

impl<'a> From<Option<&'a (dyn StdError + 'static)>> for Link<'a> {
    fn from(error: Option<&'a (dyn StdError + 'static)>) -> Self {
        error.map_or(Self::Absent, Self::from)
    }
}

impl<'a> From<&'a std::io::Error> for Link<'a> {
    fn from(error: &'a std::io::Error) -> Self {
        Self::Foreign(error)
    }
}

/// Iterator over chain layers, outermost first
#[derive(Debug, Clone)]
pub struct Layers<'a> {
    next: Option<&'a Error>,
}

impl<'a> Iterator for Layers<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause().as_chain();
        Some(current)
    }
}

impl Error {
    /// What this layer wraps
    #[must_use]
    pub fn cause(&self) -> Link<'_> {
        Link::from(&self.inner.cause)
    }

    /// Technical message set at this layer only
    #[must_use]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// User message set at this layer only
    #[must_use]
    pub fn own_user_message(&self) -> Option<&str> {
        self.inner.user_message.as_deref()
    }

    /// Type set at this layer only
    #[must_use]
    pub fn own_type(&self) -> ErrorType {
        self.inner.kind
    }

    /// Details attached at this layer only
    #[must_use]
    pub fn own_details(&self) -> &[Detail] {
        &self.inner.details
    }

    /// Where this layer was built
    #[must_use]
    pub fn site(&self) -> &CaptureSite {
        &self.inner.site
    }

    /// This layer and every chain layer below it, outermost first
    #[must_use]
    pub fn layers(&self) -> Layers<'_> {
        Layers { next: Some(self) }
    }

    /// The innermost cause: a foreign error, or absent when the chain is rooted
    /// in this library
    #[must_use]
    pub fn root_cause(&self) -> Link<'_> {
        Link::from(self).terminal()
    }
}
