//! Whitespace-separated token input for the container text format.
//!
//! Vectors and matrices are written as plain element tokens separated by
//! whitespace, with no header. `TokenReader` hands those tokens out one at a
//! time regardless of how they are split across lines, so a matrix written
//! one row per line reads back the same as one written on a single line.
use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::{LinalgError, Result};

pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
    consumed: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
            consumed: 0,
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.inner.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        self.consumed += 1;
        Ok(self.pending.pop_front())
    }

    /// Reads and parses the next token.
    ///
    /// `read` is the index of this element within the caller's container and
    /// `expected` its total element count. Both feed the errors, so positions
    /// are relative to the container being filled, not to the stream.
    pub fn parse_next<T: FromStr>(&mut self, expected: usize, read: usize) -> Result<T> {
        match self.next_token()? {
            Some(token) => token
                .parse::<T>()
                .map_err(|_| LinalgError::Parse { position: read, token }),
            None => Err(LinalgError::UnexpectedEof { expected, read }),
        }
    }

    /// Number of tokens handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
