//! Read-side resolution over whole chains
//!
//! Each resolver walks from the outermost layer inwards. Foreign errors and the
//! nil error end the walk and contribute only what they have: foreign errors a
//! native message, the nil error nothing.

use super::detail::Detail;
use super::kind::ErrorType;
use super::types::{Error, Link};

/// User-facing message composed from every layer that set one
///
/// Outer messages come first, joined by `": "`; layers without a user message
/// are skipped. Foreign and nil errors yield `""`.
#[must_use]
pub fn get_user_message<'a>(err: impl Into<Link<'a>>) -> String {
    let link: Link<'a> = err.into();
    let messages: Vec<&str> = link
        .layers()
        .filter_map(Error::own_user_message)
        .collect();

    messages.iter().rev().fold(String::new(), |inner, outer| {
        if inner.is_empty() {
            (*outer).to_string()
        } else {
            format!("{outer}: {inner}")
        }
    })
}

/// Type of the outermost classified layer, [`ErrorType::NO_TYPE`] if none
#[must_use]
pub fn get_type<'a>(err: impl Into<Link<'a>>) -> ErrorType {
    let link: Link<'a> = err.into();
    link.layers()
        .map(Error::own_type)
        .find(|kind| !kind.is_no_type())
        .unwrap_or(ErrorType::NO_TYPE)
}

/// Every detail in the chain, in the order they were attached
#[must_use]
pub fn get_details<'a>(err: impl Into<Link<'a>>) -> Vec<Detail> {
    let link: Link<'a> = err.into();
    let layers: Vec<&Error> = link.layers().collect();
    layers
        .iter()
        .rev()
        .flat_map(|layer| layer.own_details().iter().cloned())
        .collect()
}

/// Capture sites of the chain, root cause first, one per line
///
/// A foreign root cause opens the trace with its native message.
#[must_use]
pub fn get_stack_trace<'a>(err: impl Into<Link<'a>>) -> String {
    let link: Link<'a> = err.into();
    let layers: Vec<&Error> = link.layers().collect();

    let mut lines = Vec::with_capacity(layers.len() + 1);
    if let Link::Foreign(root) = link.terminal() {
        lines.push(root.to_string());
    }
    lines.extend(layers.iter().rev().map(|layer| layer.site().to_string()));
    lines.join("\n")
}

impl Error {
    /// See [`get_user_message`]
    #[must_use]
    pub fn user_message(&self) -> String {
        get_user_message(self)
    }

    /// See [`get_type`]
    #[must_use]
    pub fn error_type(&self) -> ErrorType {
        get_type(self)
    }

    /// See [`get_details`]
    #[must_use]
    pub fn details(&self) -> Vec<Detail> {
        get_details(self)
    }

    /// See [`get_stack_trace`]
    #[must_use]
    pub fn stack_trace(&self) -> String {
        get_stack_trace(self)
    }
}
