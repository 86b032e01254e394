//! Function-name resolution through the `backtrace` crate

use super::{CaptureSite, SiteProvider};
use std::panic::Location;
use std::path::Path;

/// Resolves the function enclosing the caller location from the live stack
///
/// Falls back to the bare location when no frame matches, e.g. without debug
/// info.
///
/// Every capture walks and symbolizes the live stack, which costs far more
/// than building the layer itself. Processes that build errors on hot paths
/// should install [`CallerLocation`](super::CallerLocation) through
/// [`install_site_provider`](super::install_site_provider) instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymbolizedCaller;

impl SiteProvider for SymbolizedCaller {
    fn capture(&self, caller: &'static Location<'static>) -> CaptureSite {
        let site = CaptureSite::from_location(caller);
        match resolve_function(caller) {
            Some(function) => site.with_function(function),
            None => site,
        }
    }
}

fn resolve_function(caller: &'static Location<'static>) -> Option<String> {
    let wanted = Path::new(caller.file());
    let mut function = None;
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if function.is_some() {
                return;
            }
            let (Some(file), Some(line)) = (symbol.filename(), symbol.lineno()) else {
                return;
            };
            if line == caller.line() && (file.ends_with(wanted) || wanted.ends_with(file)) {
                function = symbol.name().map(|name| strip_hash(&name.to_string()));
            }
        });
        function.is_none()
    });
    function
}

/// Drop the trailing `::h<16 hex>` disambiguator from a demangled symbol
fn strip_hash(symbol: &str) -> String {
    match symbol.rsplit_once("::h") {
        Some((path, hash)) if hash.len() == 16 && hash.chars().all(|c| c.is_ascii_hexdigit()) => {
            path.to_string()
        }
        _ => symbol.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_hash() {
        assert_eq!(strip_hash("app::handler::h0123456789abcdef"), "app::handler");
        assert_eq!(strip_hash("app::handler"), "app::handler");
        assert_eq!(strip_hash("app::hello"), "app::hello");
    }
}
