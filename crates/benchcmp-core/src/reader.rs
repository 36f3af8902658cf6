// Dweve Benchcmp - Benchmark Comparison Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Line reader for benchmark output.
//!
//! Reads input line by line with line-number tracking. Benchmark logs are
//! captured from arbitrary processes and may contain bytes that are not valid
//! UTF-8; those are replaced rather than treated as an I/O failure, so only a
//! genuine read error stops a run.

use crate::error::Result;
use std::io::{BufRead, BufReader, Read};

/// Buffered line reader with line number tracking.
///
/// Handles LF and CRLF line endings.
///
/// ```rust
/// use benchcmp_core::reader::LineReader;
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new("PASS\r\nok\n"));
/// assert_eq!(reader.next_line().unwrap(), Some((1, "PASS".to_string())));
/// assert_eq!(reader.next_line().unwrap(), Some((2, "ok".to_string())));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: Vec<u8>,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    /// Create with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    /// Number of lines read so far.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line, without its terminator.
    pub fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        self.buffer.clear();

        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buffer.ends_with(b"\n") {
            self.buffer.pop();
            if self.buffer.ends_with(b"\r") {
                self.buffer.pop();
            }
        }

        let line = String::from_utf8_lossy(&self.buffer).into_owned();
        Ok(Some((self.line_number, line)))
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;
    use std::io::{self, Cursor};

    #[test]
    fn test_read_lines() {
        let mut reader = LineReader::new(Cursor::new("line1\nline2\nline3"));
        assert_eq!(reader.next_line().unwrap(), Some((1, "line1".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((2, "line2".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((3, "line3".to_string())));
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.line_number(), 3);
    }

    #[test]
    fn test_empty_input() {
        let mut reader = LineReader::new(Cursor::new(""));
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.line_number(), 0);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let lines: Vec<_> = LineReader::new(Cursor::new("\n\nx\n"))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(
            lines,
            vec![(1, String::new()), (2, String::new()), (3, "x".to_string())]
        );
    }

    #[test]
    fn test_mixed_line_endings() {
        let mut reader = LineReader::new(Cursor::new("a\r\nb\nc\r\n"));
        assert_eq!(reader.next_line().unwrap(), Some((1, "a".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((2, "b".to_string())));
        assert_eq!(reader.next_line().unwrap(), Some((3, "c".to_string())));
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"ok\n\xff\xfe noise\nlast";
        let lines: Vec<_> = LineReader::with_capacity(bytes, 4)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].1.ends_with(" noise"));
        assert_eq!(lines[2], (3, "last".to_string()));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    #[test]
    fn test_io_error_surfaces() {
        let mut reader = LineReader::new(FailingReader);
        assert!(matches!(reader.next_line(), Err(BenchError::Io(_))));
    }
}
