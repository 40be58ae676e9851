use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use super::error::{Error, Result};

/// Whitespace-separated tokens read lazily, one line at a time, from the judge
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}
impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next<T: FromStr>(&mut self) -> Result<T> {
        let token = self.token()?;
        match token.parse::<T>() {
            Ok(value) => Ok(value),
            Err(_) => Err(Error::Parse { token, expected: std::any::type_name::<T>() }),
        }
    }

    pub fn token(&mut self) -> Result<String> {
        if !self.fill()? { return Err(Error::UnexpectedEof) }
        self.pending.pop_front().ok_or(Error::UnexpectedEof)
    }

    /// The rest of the current line if it has been partially consumed, otherwise the next line.
    /// Used for rows where the characters themselves are the data.
    pub fn line(&mut self) -> Result<String> {
        if !self.pending.is_empty() {
            let rest: Vec<String> = self.pending.drain(..).collect();
            return Ok(rest.join(" "));
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 { return Err(Error::UnexpectedEof) }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// True once only whitespace remains
    pub fn at_eof(&mut self) -> Result<bool> {
        Ok(!self.fill()?)
    }

    fn fill(&mut self) -> Result<bool> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 { return Ok(false) }
            self.pending.extend(line.split_whitespace().map(|token| token.to_string()));
        }
        Ok(true)
    }
}
