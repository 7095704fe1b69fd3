use super::*;
use crate::types::{MethodCandidate, SpanKind};


const TRICKY_CASES: &str = include_str!("../../../tests/fixtures/TrickyCases.java");

fn scan(source: &str) -> ScanOutput {
    Scanner::new(source).scan().expect("scan should succeed")
}

fn scan_err(source: &str) -> MalformedSourceError {
    Scanner::new(source)
        .scan()
        .expect_err("scan should reject malformed input")
}

fn names(output: &ScanOutput) -> Vec<&str> {
    output
        .methods
        .iter()
        .map(|method| method.name.as_str())
        .collect()
}

fn find<'a>(output: &'a ScanOutput, name: &str) -> (usize, &'a MethodCandidate) {
    output
        .methods
        .iter()
        .enumerate()
        .find(|(_, method)| method.name == name)
        .unwrap_or_else(|| panic!("should find method named '{name}'"))
}

/// Open and close braces in code spans inside the candidate's range.
fn code_braces(output: &ScanOutput, source: &str, method: &MethodCandidate) -> (usize, usize) {
    let mut opens = 0;
    let mut closes = 0;
    for span in output.spans.iter().filter(|span| span.kind == SpanKind::Code) {
        let start = span.start.max(method.start);
        let end = span.end.min(method.end + 1);
        if start >= end {
            continue;
        }
        for byte in source[start..end].bytes() {
            match byte {
                b'{' => opens += 1,
                b'}' => closes += 1,
                _ => {}
            }
        }
    }
    (opens, closes)
}
