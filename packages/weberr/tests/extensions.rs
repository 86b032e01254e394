//! Result/Option extensions, anyhow interop, reports and default capture sites

use std::io;
use weberr::{
    errorf, get_details, get_type, get_user_message, Cause, Detail, DiagnosticLogger, Error,
    ErrorType, Link, OptionExt, Report, ResultExt,
};

fn read_header() -> Result<u32, io::Error> {
    Err(io::Error::new(io::ErrorKind::UnexpectedEof, "EOF"))
}

fn load() -> weberr::Result<u32> {
    read_header()
        .wrap_err("reading header")
        .user_wrap_err("The file is damaged")
        .with_type(ErrorType::BAD_REQUEST)
        .with_details([Detail::new("header.bin")])
}

#[test]
fn test_result_ext_builds_chain() {
    let err = match load() {
        Ok(value) => panic!("expected an error, got {value}"),
        Err(err) => err,
    };

    assert_eq!(err.to_string(), "reading header: EOF");
    assert_eq!(get_user_message(&err), "The file is damaged");
    assert_eq!(get_type(&err), ErrorType::BAD_REQUEST);

    let details = get_details(&err);
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].downcast_ref::<&str>(), Some(&"header.bin"));
    assert_eq!(err.layers().count(), 4);
}

#[test]
fn test_result_ext_passes_ok_through() {
    let value: Result<u32, Error> = Ok(7);
    assert_eq!(value.wrap_err("unused").map_err(|e| e.to_string()), Ok(7));
}

#[test]
fn test_option_ext() {
    let found = Some(3).ok_or_errorf("missing");
    assert!(matches!(found, Ok(3)));

    let missing: Option<u32> = None;
    match missing.ok_or_typed(ErrorType::NOT_FOUND, format_args!("user {}", 9)) {
        Ok(value) => panic!("expected an error, got {value}"),
        Err(err) => {
            assert_eq!(err.to_string(), "user 9");
            assert_eq!(err.error_type(), ErrorType::NOT_FOUND);
        }
    }

    match None::<u32>.ok_or_errorf("gone") {
        Ok(value) => panic!("expected an error, got {value}"),
        Err(err) => assert!(err.error_type().is_no_type()),
    }
}

#[test]
fn test_anyhow_interop() {
    fn conflicting() -> weberr::Result<()> {
        let err = ErrorType::CONFLICT.user_errorf("duplicate");
        Err(ErrorType::NO_TYPE.add_details(err, [Detail::new("row 7")]))
    }

    fn fallible() -> anyhow::Result<()> {
        conflicting()?;
        Ok(())
    }

    let err = match fallible() {
        Ok(()) => panic!("expected an error"),
        Err(err) => err,
    };
    assert_eq!(err.to_string(), "duplicate");

    let cause = Cause::from(err);
    assert!(matches!(cause, Cause::Chain(_)));
    assert_eq!(weberr::render(&cause), "duplicate");
    assert_eq!(get_type(&cause), ErrorType::CONFLICT);
    assert_eq!(get_user_message(&cause), "duplicate");
    assert_eq!(get_details(&cause).len(), 1);
    assert_eq!(weberr::get_stack_trace(&cause).lines().count(), 2);

    let foreign = Cause::from(anyhow::anyhow!("plain failure"));
    assert!(matches!(foreign, Cause::Foreign(_)));
    assert_eq!(weberr::render(&foreign), "plain failure");
}

#[test]
fn test_source_view_recovers_chain() {
    use std::error::Error as _;

    let outer = weberr::wrapf(ErrorType::NOT_FOUND.user_errorf("x"), "y");
    let source = outer.source();

    assert!(matches!(Link::from(source), Link::Chain(_)));
    assert_eq!(get_type(source), ErrorType::NOT_FOUND);
    assert_eq!(get_user_message(source), "x");
    assert!(Link::from(errorf("root").source()).is_absent());

    let boxed = Cause::Foreign(Box::new(ErrorType::FORBIDDEN.errorf("boxed")));
    assert_eq!(get_type(&boxed), ErrorType::FORBIDDEN);
    assert!(matches!(Link::foreign(&outer), Link::Chain(_)));

    let io_error = io::Error::new(io::ErrorKind::Other, "disk");
    let dyn_error: &(dyn std::error::Error + 'static) = &io_error;
    assert!(matches!(Link::from(dyn_error), Link::Foreign(_)));
}

#[test]
fn test_report_sections() {
    let err = weberr::add_details(
        ErrorType::NOT_FOUND.user_wrapf(errorf("no row"), "Not found"),
        [Detail::new(404_u16)],
    );

    let plain = Report::new(&err).to_string();
    assert_eq!(plain, "no row");

    let full = format!("{:#}", Report::new(&err));
    assert!(full.starts_with("no row\n"));
    assert!(full.contains("user message: Not found\n"));
    assert!(full.contains("type: NotFound\n"));
    assert!(full.contains("details:\n    404\n"));
    assert!(full.contains("stack trace:\n    "));
    assert_eq!(full.matches("\n    ").count(), 1 + 3);
}

#[test]
fn test_report_on_nil() {
    let full = format!("{:#}", Report::new(Link::Absent));
    assert_eq!(full, "\nuser message: \ntype: NoType\nstack trace:");
}

#[test]
fn test_default_site_records_caller() {
    let (err, line) = (errorf("here"), line!());
    let site = err.site();

    assert_eq!(site.file, file!());
    assert_eq!(site.line, line);
    if let Some(function) = &site.function {
        assert!(function.contains("test_default_site_records_caller"), "{function}");
    }
}

#[test]
fn test_logging_smoke() {
    DiagnosticLogger::init_test();

    let err = errorf("boom");
    DiagnosticLogger::log_chain("write", &err);
    DiagnosticLogger::log_recovered("retry", Link::Absent);
    assert!(DiagnosticLogger::describe("write", Link::from(&err)).contains("boom"));
}
