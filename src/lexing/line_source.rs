//! Line Source
//!
//! Reads the input one physical line at a time. The source is finite and not
//! restartable: it owns the reader and only ever advances it.

use crate::loader::LoadError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A physical line of input together with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

/// Lazy sequence of lines read from a buffered reader
///
/// Lines are split on `\n` and a trailing `\r` is dropped. Invalid UTF-8 is
/// decoded lossily. A read error ends the sequence; it is logged, not returned.
pub struct LineSource<R> {
    reader: R,
    line_number: usize,
    exhausted: bool,
}

impl LineSource<BufReader<File>> {
    /// Open a file for line-by-line reading
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            exhausted: false,
        }
    }

    /// Number of lines handed out so far
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = SourceLine;

    fn next(&mut self) -> Option<SourceLine> {
        if self.exhausted {
            return None;
        }
        match self.read_line() {
            Ok(Some(text)) => {
                self.line_number += 1;
                Some(SourceLine {
                    number: self.line_number,
                    text,
                })
            }
            Ok(None) => {
                self.exhausted = true;
                None
            }
            Err(err) => {
                tracing::warn!(
                    line = self.line_number + 1,
                    error = %err,
                    "read failed, treating as end of input"
                );
                self.exhausted = true;
                None
            }
        }
    }
}
