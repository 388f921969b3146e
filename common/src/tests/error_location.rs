use crate::ErrorLocation;

/// **VALUE**: Verifies that `ErrorLocation::caller()` points at the line that built the error.
///
/// **WHY THIS MATTERS**: Every error in the workspace embeds an `ErrorLocation`. If the
/// captured position drifts, transport and settings failures in the log point nowhere useful.
///
/// **BUG THIS CATCHES**: Would catch if `#[track_caller]` is dropped from `caller()`,
/// which would make every location report `error_location.rs` in the common crate.
#[test]
fn given_caller_when_error_location_captured_then_reports_this_file() {
    // GIVEN / WHEN: Capturing the location inline
    let location = ErrorLocation::caller();

    // THEN: File is the test file, not the common crate's implementation
    assert!(
        location.file.ends_with("tests/error_location.rs"),
        "Should capture the test file, got {}",
        location.file
    );
    assert!(location.line > 0);
    assert!(location.column > 0);
}

/// **VALUE**: Verifies the bracketed `[file:line:column]` display format.
///
/// **WHY THIS MATTERS**: Error messages append the location verbatim; log readers rely on
/// a stable, greppable format.
///
/// **BUG THIS CATCHES**: Would catch changes to the Display implementation.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: A fixed location
    let location = ErrorLocation {
        file: "src/transport.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting
    let formatted = location.to_string();

    // THEN: Exact format
    assert_eq!(formatted, "[src/transport.rs:42:7]");
}

/// **VALUE**: Verifies that location capture propagates through helper constructors.
///
/// **WHY THIS MATTERS**: Error constructors such as `TransportError::disconnected()` are
/// helpers; the location must be the helper's caller, not the helper body.
///
/// **BUG THIS CATCHES**: Would catch if propagation through nested `#[track_caller]`
/// functions breaks.
#[test]
fn given_track_caller_helper_when_called_twice_then_lines_differ() {
    // GIVEN: A helper that captures the location
    #[track_caller]
    fn capture() -> ErrorLocation {
        ErrorLocation::caller()
    }

    // WHEN: Calling from two consecutive lines
    let first = capture();
    let second = capture();

    // THEN: Consecutive lines, same file
    assert_eq!(first.file, second.file);
    assert_eq!(first.line + 1, second.line);
}
