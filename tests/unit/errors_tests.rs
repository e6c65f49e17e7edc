/*!
 * Tests for error types and conversions
 */

use std::error::Error;
use std::io::{Error as IoError, ErrorKind};
use std::path::PathBuf;
use punchout::errors::SheetError;

#[test]
fn test_sheetError_inputNotFound_shouldDisplayPathAndCause() {
    let error = SheetError::InputNotFound {
        path: PathBuf::from("lesson-original.txt"),
        source: IoError::new(ErrorKind::NotFound, "No such file"),
    };
    let display = format!("{}", error);
    assert!(display.contains("Not found"));
    assert!(display.contains("lesson-original.txt"));
    assert!(display.contains("No such file"));
    assert!(error.source().is_some());
}

#[test]
fn test_sheetError_outputCreate_shouldDisplayPath() {
    let error = SheetError::OutputCreate {
        path: PathBuf::from("/readonly/lesson-blanks.txt"),
        source: IoError::new(ErrorKind::PermissionDenied, "Permission denied"),
    };
    let display = format!("{}", error);
    assert!(display.contains("Could not open output file"));
    assert!(display.contains("/readonly/lesson-blanks.txt"));
}

#[test]
fn test_sheetError_fromIoError_shouldWrapAsIo() {
    let io_error = IoError::new(ErrorKind::UnexpectedEof, "stream closed");
    let error: SheetError = io_error.into();
    let display = format!("{}", error);
    assert!(matches!(error, SheetError::Io(_)));
    assert!(display.contains("I/O error"));
    assert!(display.contains("stream closed"));
}

#[test]
fn test_sheetError_fromAnyhow_shouldWrapAsConfig() {
    let error: SheetError = anyhow::anyhow!("bad suffix").into();
    let display = format!("{}", error);
    assert!(display.contains("Configuration error"));
    assert!(display.contains("bad suffix"));
}
