use std::io::Write;

use thiserror::Error;

/// Terminator the radio expects after every command.
pub const LINE_TERMINATOR: &[u8] = b"\r\n";

#[derive(Debug, Error)]
pub enum WriteLineError {
    #[error("io error")]
    Io(#[from] std::io::Error),
}

/// Writes CRLF-terminated command lines to an underlying port.
///
/// There is no framing beyond the terminator: no checksum, no length
/// prefix, no response parsing.
pub struct LineCodec<T> {
    inner: T,
}

impl<T> LineCodec<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> LineCodec<T>
where
    T: Write,
{
    /// Writes the UTF-8 bytes of `line` followed by CRLF.
    ///
    /// `line` is not validated or escaped; a line that itself contains CRLF
    /// will read as two commands on the far side.
    pub fn write_line(&mut self, line: &str) -> Result<(), WriteLineError> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(LINE_TERMINATOR)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), std::io::Error> {
        self.inner.flush()
    }
}
