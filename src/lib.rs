pub mod line;
pub mod ping;

use self::line::{LineCodec, WriteLineError};
pub use self::ping::{ping_address, PingError, Pinger};
use serialport::SerialPort;
use std::time::Duration;
use thiserror::Error;

/// Device path used when no other path is configured.
pub const DEFAULT_PATH: &str = "/dev/ttyUSB0";

/// Baud rate the radio's serial link runs at.
pub const DEFAULT_BAUD_RATE: u32 = 230400;

/// An XBee radio attached to a serial port.
///
/// Owns the port for its whole lifetime; the port is closed when the
/// `Device` is dropped.
pub struct Device {
    codec: LineCodec<Box<dyn SerialPort>>,
}

impl Device {
    pub fn new<P: AsRef<str>>(path: P, baud_rate: u32) -> Result<Self, Error> {
        let port = serialport::new(path.as_ref(), baud_rate)
            .timeout(Duration::from_millis(250))
            .open()?;
        Ok(Self {
            codec: LineCodec::new(port),
        })
    }

    /// Transmits `command` on the serial line, terminated with CRLF.
    ///
    /// Nothing is read back; the radio does not acknowledge commands.
    pub fn send_command(&mut self, command: &str) -> Result<(), Error> {
        log::trace!("sending {:?}", command);
        self.codec.write_line(command)?;
        self.codec.flush()?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("serialport: {0}")]
    SerialPort(#[from] serialport::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl From<WriteLineError> for Error {
    fn from(err: WriteLineError) -> Self {
        match err {
            WriteLineError::Io(err) => Self::Io(err),
        }
    }
}
