//! Line-based input capability.
//!
//! The round controller never touches the terminal directly; it asks a
//! [`LineReader`] for the next line. Standard input and scripted test
//! input both implement the trait.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock};
use tracing::{instrument, trace};

/// Source of input lines.
pub trait LineReader {
    /// Reads the next line without its line terminator.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<T: LineReader + ?Sized> LineReader for &mut T {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}

/// Reads lines from any buffered reader.
#[derive(Debug)]
pub struct BufLineReader<B> {
    inner: B,
}

impl<B: BufRead> BufLineReader<B> {
    /// Wraps a buffered reader.
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

impl<B: BufRead> LineReader for BufLineReader<B> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.inner.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and fail validation downstream.
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        trace!(%line, "Line read");
        Ok(Some(line))
    }
}

/// Reader over locked standard input.
pub type StdinReader = BufLineReader<StdinLock<'static>>;

impl StdinReader {
    /// Locks standard input for the life of the reader.
    #[instrument]
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

/// Reader that replays a fixed list of lines.
#[derive(Debug, Clone, Default)]
pub struct ScriptedReader {
    lines: VecDeque<String>,
}

impl ScriptedReader {
    /// Creates a reader that yields `lines` in order, then end-of-input.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
