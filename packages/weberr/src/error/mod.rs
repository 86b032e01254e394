//! Error chains with context propagation
//!
//! Provides:
//! - Layered wrapping that never loses the original cause
//! - Separate technical and user-facing messages
//! - Open classification types and opaque structured details
//! - Capture-site traces, root cause first

pub mod constructors;
pub mod detail;
pub mod display;
pub mod extensions;
pub mod kind;
pub mod logging;
pub mod macros;
pub mod report;
pub mod resolve;
pub mod types;

// Re-export all public types and functions
pub use constructors::{add_details, errorf, user_errorf, user_wrapf, wrapf};
pub use detail::{Detail, DetailValue};
pub use display::render;
pub use extensions::{OptionExt, ResultExt};
pub use kind::ErrorType;
pub use logging::DiagnosticLogger;
pub use report::Report;
pub use resolve::{get_details, get_stack_trace, get_type, get_user_message};
pub use types::{Cause, Error, Layers, Link, Result};
