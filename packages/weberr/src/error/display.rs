//! Technical-message rendering and standard trait implementations

use super::types::{Cause, Error, Link};
use std::fmt;

/// Write the technical message of `link` into `out`
///
/// Layers without a message of their own are transparent; a layer with one
/// prefixes it to whatever its cause renders, separated by `": "`.
pub(crate) fn render_into(link: Link<'_>, out: &mut dyn fmt::Write) -> fmt::Result {
    let mut link = link;
    loop {
        match link {
            Link::Absent => return Ok(()),
            Link::Foreign(error) => return write!(out, "{error}"),
            Link::Chain(error) => {
                let cause = error.cause();
                let message = error.message();
                if !message.is_empty() {
                    out.write_str(message)?;
                    if !cause.is_absent() {
                        out.write_str(": ")?;
                    }
                }
                link = cause;
            }
        }
    }
}

/// Technical message of any error, `""` for the nil error
#[must_use]
pub fn render<'a>(err: impl Into<Link<'a>>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = render_into(err.into(), &mut out);
    out
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_into(Link::Chain(self), f)
    }
}

/// Fields of a single layer, without its cause
struct LayerFields<'a>(&'a Error);

impl fmt::Debug for LayerFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = &self.0.inner;
        f.debug_struct("Layer")
            .field("message", &node.message)
            .field("user_message", &node.user_message)
            .field("type", &node.kind)
            .field("details", &node.details)
            .field("site", &node.site)
            .finish()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        list.entries(self.layers().map(LayerFields));
        if let Link::Foreign(root) = self.root_cause() {
            list.entry(&root);
        }
        list.finish()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.inner.cause {
            Cause::Absent => None,
            Cause::Chain(error) => Some(error),
            Cause::Foreign(error) => Some(&**error),
        }
    }
}
