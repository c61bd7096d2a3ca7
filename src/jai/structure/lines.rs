//! Line index: maps between byte offsets and 1-based line numbers.

use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the first character of each line.
    starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineIndex {
            starts,
            len: text.len(),
        }
    }

    /// Number of lines. Text ending in a newline has an empty last line.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Line containing `offset`; offsets past the end map to the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        self.starts.partition_point(|&start| start <= offset)
    }

    /// Byte range of `line` without its newline. Lines outside the text clamp to the nearest
    /// existing line.
    pub fn range(&self, line: usize) -> Range<usize> {
        let index = line.clamp(1, self.line_count()) - 1;
        let start = self.starts[index];
        let end = self
            .starts
            .get(index + 1)
            .map_or(self.len, |&next| next - 1);
        start..end
    }

    pub fn line_start(&self, line: usize) -> usize {
        self.range(line).start
    }

    pub fn line_end(&self, line: usize) -> usize {
        self.range(line).end
    }
}
