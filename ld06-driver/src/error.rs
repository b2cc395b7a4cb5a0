use std::error::Error;
use std::fmt::Display;
use std::{fmt, io};

#[derive(Debug)]
pub enum LD06Error {
    InvalidPacketLength(usize),
    InvalidMagicNumber(String),
    ChecksumMismatch(u8, u8),
    MotorError(String),
    SerialError(serialport::Error),
    IoError(io::Error),
}

impl fmt::Display for LD06Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LD06Error::InvalidPacketLength(len) => write!(
                f,
                "Scan packet must be always 47 bytes. Actually {} bytes.",
                len
            ),
            LD06Error::InvalidMagicNumber(magic) => write!(
                f,
                "Packet must start with 0x54 0x2C. Observed = {}.",
                magic
            ),
            LD06Error::ChecksumMismatch(expected, calculated) => write!(
                f,
                "Checksum mismatched. Calculated = {:02X}, expected = {:02X}.",
                calculated, expected
            ),
            LD06Error::MotorError(reason) => write!(f, "Failed to drive the motor: {}", reason),
            LD06Error::IoError(err) => Display::fmt(&err, f),
            LD06Error::SerialError(err) => Display::fmt(&err, f),
        }
    }
}

impl Error for LD06Error {}

impl From<io::Error> for LD06Error {
    fn from(err: io::Error) -> Self {
        LD06Error::IoError(err)
    }
}

impl From<serialport::Error> for LD06Error {
    fn from(err: serialport::Error) -> Self {
        LD06Error::SerialError(err)
    }
}
