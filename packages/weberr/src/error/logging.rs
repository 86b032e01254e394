//! Logging of resolved error chains
//!
//! Constructors and resolvers never log; call sites that want a record of a
//! chain use [`DiagnosticLogger`]. Output goes through the `log` facade and
//! `env_logger`, configured via `RUST_LOG`:
//! - `RUST_LOG=warn` - recovered and fatal chains
//! - `RUST_LOG=error` - fatal chains only
//! - `RUST_LOG=weberr=debug` - also capture-site provider changes

use super::display::render;
use super::resolve::{get_details, get_type, get_user_message};
use super::types::Link;
use log::{error, info, warn};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Writes error chains to the `log` facade
pub struct DiagnosticLogger;

impl DiagnosticLogger {
    /// Initialize `env_logger` once at application startup
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("diagnostic logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a chain that aborted `operation`
    pub fn log_chain<'a>(operation: &str, err: impl Into<Link<'a>>) {
        let link = err.into();
        error!("{}", Self::describe(operation, link));
    }

    /// Log a chain that `operation` recovered from
    pub fn log_recovered<'a>(operation: &str, err: impl Into<Link<'a>>) {
        let link = err.into();
        warn!("{}", Self::describe(operation, link));
    }

    /// One-line summary of a chain
    ///
    /// The user message is quoted; details are counted, not printed, since
    /// they may hold sensitive payloads.
    #[must_use]
    pub fn describe(operation: &str, link: Link<'_>) -> String {
        format!(
            "{operation} failed: {} (type: {}, user_message: {:?}, details: {})",
            render(link),
            get_type(link),
            get_user_message(link),
            get_details(link).len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorType;
    use crate::error::{add_details, Detail};
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::sync::Mutex;

    struct Capture {
        records: Mutex<Vec<(Level, String)>>,
    }

    impl Log for Capture {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture {
        records: Mutex::new(Vec::new()),
    };
    static INSTALL: Once = Once::new();

    fn install_capture() {
        INSTALL.call_once(|| {
            if log::set_logger(&CAPTURE).is_ok() {
                log::set_max_level(LevelFilter::Trace);
            }
        });
    }

    fn captured(operation: &str) -> Vec<(Level, String)> {
        let prefix = format!("{operation} failed");
        let Ok(records) = CAPTURE.records.lock() else {
            return Vec::new();
        };
        records
            .iter()
            .filter(|(_, line)| line.starts_with(&prefix))
            .cloned()
            .collect()
    }

    #[test]
    fn test_describe_chain() {
        let err = ErrorType::NOT_FOUND.user_errorf("no such user");
        let err = add_details(err, [Detail::new(42_u32)]);
        let line = DiagnosticLogger::describe("lookup", Link::from(&err));

        assert_eq!(
            line,
            "lookup failed: no such user (type: NotFound, user_message: \"no such user\", details: 1)"
        );
    }

    #[test]
    fn test_describe_nil() {
        let line = DiagnosticLogger::describe("noop", Link::Absent);
        assert_eq!(
            line,
            "noop failed:  (type: NoType, user_message: \"\", details: 0)"
        );
    }

    #[test]
    fn test_chain_records_use_levels() {
        install_capture();

        let err = ErrorType::CONFLICT.errorf("boom");
        DiagnosticLogger::log_chain("write", &err);
        DiagnosticLogger::log_recovered("retry", &err);
        DiagnosticLogger::log_chain("nothing", Link::Absent);

        assert_eq!(
            captured("write"),
            vec![(
                Level::Error,
                DiagnosticLogger::describe("write", Link::from(&err))
            )]
        );
        assert_eq!(
            captured("retry"),
            vec![(
                Level::Warn,
                DiagnosticLogger::describe("retry", Link::from(&err))
            )]
        );
        assert_eq!(
            captured("nothing"),
            vec![(
                Level::Error,
                "nothing failed:  (type: NoType, user_message: \"\", details: 0)".to_string()
            )]
        );
    }
}
