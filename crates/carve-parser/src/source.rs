//! The immutable text of one source file plus its line index.

use crate::error::{MalformedReason, MalformedSourceError};

/// One source file's text, loaded once and never mutated.
///
/// Offsets are byte offsets into the text; lines are 1-based.
#[derive(Debug, Clone)]
pub struct SourceUnit<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> SourceUnit<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(index, _)| index + 1));
        Self { text, line_starts }
    }

    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of lines, counting a trailing partial line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 1-based line containing `offset`. Offsets past the end map to the last line.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> u32 {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        u32::try_from(line).unwrap_or(u32::MAX)
    }

    pub(crate) fn malformed(&self, offset: usize, reason: MalformedReason) -> MalformedSourceError {
        MalformedSourceError {
            offset,
            line: self.line_of(offset),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_of_maps_offsets_to_one_based_lines() {
        let unit = SourceUnit::new("a\nbc\n\nd");
        assert_eq!(unit.line_of(0), 1);
        assert_eq!(unit.line_of(1), 1);
        assert_eq!(unit.line_of(2), 2);
        assert_eq!(unit.line_of(4), 2);
        assert_eq!(unit.line_of(5), 3);
        assert_eq!(unit.line_of(6), 4);
        assert_eq!(unit.line_count(), 4);
    }

    #[test]
    fn offset_past_end_maps_to_last_line() {
        let unit = SourceUnit::new("x\ny\n");
        assert_eq!(unit.line_of(unit.len()), 3);
    }

    #[test]
    fn malformed_carries_line() {
        let unit = SourceUnit::new("a\n}\n");
        let error = unit.malformed(2, MalformedReason::UnbalancedClose);
        assert_eq!(error.line, 2);
        assert_eq!(error.offset, 2);
    }
}
