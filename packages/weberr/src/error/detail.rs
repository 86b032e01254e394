//! Opaque detail payloads

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Anything that can be attached to a chain as a detail
pub trait DetailValue: Any + fmt::Debug + Send + Sync {
    /// View as `Any` for downcasting
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug + Send + Sync> DetailValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Shared handle to a caller-defined detail value
///
/// Equality is identity: clones of one handle compare equal, separately
/// created handles never do.
#[derive(Clone)]
pub struct Detail(Arc<dyn DetailValue>);

impl Detail {
    /// Wrap a value
    pub fn new<T: DetailValue>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Borrow the payload as `T`
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.0).as_any().downcast_ref::<T>()
    }

    /// Whether the payload is a `T`
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        (*self.0).as_any().is::<T>()
    }
}

impl PartialEq for Detail {
    fn eq(&self, other: &Self) -> bool {
        Arc::as_ptr(&self.0).cast::<()>() == Arc::as_ptr(&other.0).cast::<()>()
    }
}

impl Eq for Detail {}

impl fmt::Debug for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
