//! Record-level entry points over [`Scanner`].

use std::path::Path;

use tracing::debug;

use crate::error::ParserError;
use crate::scanner::Scanner;
use crate::types::MethodRecord;

/// Extract every method in `source`, in source order of their start.
///
/// # Errors
/// Returns [`ParserError::Malformed`] when the source has unbalanced braces
/// or an unterminated literal or comment.
pub fn extract_methods(source: &str) -> Result<Vec<MethodRecord>, ParserError> {
    extract_methods_in(source, None)
}

/// Like [`extract_methods`], treating `source` as the body of `type_name` so
/// that top-level constructors of that type are skipped.
///
/// # Errors
/// Returns [`ParserError::Malformed`] on malformed source.
pub fn extract_methods_in(
    source: &str,
    type_name: Option<&str>,
) -> Result<Vec<MethodRecord>, ParserError> {
    let mut scanner = Scanner::new(source);
    if let Some(name) = type_name {
        scanner = scanner.with_type_name(name);
    }
    let output = scanner.scan()?;
    Ok(output.records(source))
}

/// Read `path` and extract its methods.
///
/// Invalid UTF-8 is replaced rather than rejected. The file stem is used as
/// the enclosing type name (`Widget.java` -> `Widget`).
///
/// # Errors
/// Returns [`ParserError::Io`] if the file cannot be read and
/// [`ParserError::Malformed`] if its contents are malformed.
pub fn extract_methods_from_file(path: &Path) -> Result<Vec<MethodRecord>, ParserError> {
    let bytes = std::fs::read(path)?;
    let source = String::from_utf8_lossy(&bytes);
    let type_name = path.file_stem().and_then(|stem| stem.to_str());
    debug!(path = %path.display(), ?type_name, bytes = bytes.len(), "extracting methods");
    extract_methods_in(&source, type_name)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::MalformedReason;

    const WIDGET: &str = "public class Widget {\n    Widget() { }\n    Widget(int size) { this(); }\n    void paint() { }\n}\n";

    #[test]
    fn records_carry_text_and_lines() {
        let records = extract_methods("class A {\n    int one() { return 1; }\n}\n")
            .expect("extraction should succeed");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "one");
        assert_eq!(records[0].text, "int one() { return 1; }");
        assert_eq!((records[0].start_line, records[0].end_line), (2, 2));
    }

    #[test]
    fn empty_source_has_no_methods() {
        assert_eq!(extract_methods("").expect("empty source is valid"), vec![]);
    }

    #[test]
    fn malformed_source_is_reported() {
        let error = extract_methods("class A { void f() {").expect_err("should be malformed");
        assert!(matches!(
            error.as_malformed().map(|malformed| malformed.reason),
            Some(MalformedReason::UnclosedBrace { .. })
        ));
    }

    #[test]
    fn file_stem_names_the_enclosing_type() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("Widget.java");
        std::fs::write(&path, WIDGET).expect("write fixture");

        let records = extract_methods_from_file(&path).expect("extraction should succeed");
        let names: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();
        assert_eq!(names, vec!["paint"]);
    }

    #[test]
    fn body_only_file_skips_constructors_by_stem() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("Widget.java");
        std::fs::write(&path, "Widget() { }\nvoid paint() { }\n").expect("write fixture");

        let records = extract_methods_from_file(&path).expect("extraction should succeed");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "paint");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("Bytes.java");
        let mut bytes = b"class Bytes {\n    // caf".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b"\n    void ok() { }\n}\n");
        std::fs::write(&path, bytes).expect("write fixture");

        let records = extract_methods_from_file(&path).expect("lossy decode should succeed");
        assert_eq!(records[0].name, "ok");
        assert_eq!(records[0].start_line, 3);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let error = extract_methods_from_file(&dir.path().join("Missing.java"))
            .expect_err("missing file should fail");
        assert!(matches!(error, ParserError::Io(_)));
    }
}
