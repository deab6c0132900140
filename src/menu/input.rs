//! Line-oriented operator input.

use super::MenuError;
use crate::machine_actor::MachineError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Returns the first whitespace-delimited word of `line`, or `""` for a blank line.
pub fn parse_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

/// Parses the first word of `line` as a non-negative decimal integer.
pub fn parse_int(line: &str) -> Result<u32, MachineError> {
    parse_token(line)
        .parse()
        .map_err(|_| MachineError::ExpectedInteger)
}

/// Reads operator input one line at a time.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a garbled line
/// is just an unrecognized answer.
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    async fn next_line(&mut self) -> Result<Option<String>, MenuError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    /// Reads the next line and returns its first word. `None` once input is exhausted.
    pub async fn read_token(&mut self) -> Result<Option<String>, MenuError> {
        let line = self.next_line().await?;
        Ok(line.map(|line| parse_token(&line).to_string()))
    }

    /// Reads the next line as an integer.
    ///
    /// # Errors
    /// `ExpectedInteger` when the line is not a non-negative integer, or when input is
    /// exhausted.
    pub async fn read_int(&mut self) -> Result<u32, MenuError> {
        match self.next_line().await? {
            Some(line) => Ok(parse_int(&line)?),
            None => Err(MachineError::ExpectedInteger.into()),
        }
    }
}
