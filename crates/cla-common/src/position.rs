//! Line/column mapping for byte offsets into a source file.
//!
//! Diagnostics are reported with a 1-based line number and a 0-based column
//! offset. The parser hands back byte offsets, so the driver builds one
//! `LineMap` per file up front and every offset lookup is a binary search
//! over the recorded line starts.

/// A resolved source location: 1-based line, 0-based column (bytes).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

/// Maps byte offsets to line/column positions for one source file.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offset of the start of each line. Always contains at least
    /// offset 0 for the first line.
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        Self { line_starts }
    }

    /// Resolve a byte offset to its line/column position.
    ///
    /// Offsets past the end of the last line clamp to the last line; this
    /// never panics regardless of input.
    pub fn location(&self, offset: u32) -> Location {
        let line_idx = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line_idx];
        Location {
            line: line_idx as u32 + 1,
            column: offset.saturating_sub(line_start),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_maps_to_first_line() {
        let map = LineMap::new("");
        assert_eq!(map.location(0), Location { line: 1, column: 0 });
    }

    #[test]
    fn offsets_resolve_within_lines() {
        let map = LineMap::new("abc\ndef\n");
        assert_eq!(map.location(0), Location { line: 1, column: 0 });
        assert_eq!(map.location(2), Location { line: 1, column: 2 });
        assert_eq!(map.location(4), Location { line: 2, column: 0 });
        assert_eq!(map.location(6), Location { line: 2, column: 2 });
    }

    #[test]
    fn offset_past_end_clamps_to_last_line() {
        let map = LineMap::new("abc\ndef");
        let loc = map.location(100);
        assert_eq!(loc.line, 2);
    }

    #[test]
    fn newline_belongs_to_the_line_it_ends() {
        let map = LineMap::new("a\nb");
        assert_eq!(map.location(1), Location { line: 1, column: 1 });
        assert_eq!(map.location(2), Location { line: 2, column: 0 });
    }
}
