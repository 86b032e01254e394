//! Human-readable diagnostic reports
//!
//! `{}` prints the technical message only; `{:#}` adds the user message, the
//! resolved type, every detail and the stack trace.

use super::display::render_into;
use super::resolve::{get_details, get_stack_trace, get_type, get_user_message};
use super::types::{Error, Link};
use std::fmt;

/// Display adapter that renders a full diagnostic for a chain
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    link: Link<'a>,
}

impl<'a> Report<'a> {
    /// Report on any error, including foreign and nil ones
    pub fn new(err: impl Into<Link<'a>>) -> Self {
        Self { link: err.into() }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_into(self.link, f)?;
        if !f.alternate() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "user message: {}", get_user_message(self.link))?;
        writeln!(f, "type: {}", get_type(self.link))?;

        let details = get_details(self.link);
        if !details.is_empty() {
            writeln!(f, "details:")?;
            for detail in &details {
                writeln!(f, "    {detail:?}")?;
            }
        }

        let trace = get_stack_trace(self.link);
        write!(f, "stack trace:")?;
        for line in trace.lines() {
            write!(f, "\n    {line}")?;
        }
        Ok(())
    }
}

impl Error {
    /// Diagnostic report for this chain
    #[must_use]
    pub fn report(&self) -> Report<'_> {
        Report::new(self)
    }
}
