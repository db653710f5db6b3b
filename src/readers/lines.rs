//! Forward-only line reading that keeps line terminators.

use std::io::{self, BufRead};

/// Iterator over the raw lines of a reader.
///
/// Each item holds the line bytes including its `\n` (and a preceding `\r`,
/// if any). The last line is yielded without a terminator when the input does
/// not end in one. Bytes are not decoded, so any encoding passes through.
#[derive(Debug)]
pub struct RawLines<R> {
    reader: R,
    line_number: usize,
}

impl<R: BufRead> RawLines<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
        }
    }

    /// Number of lines yielded so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                Some(Ok(buf))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
