use std::fmt;

/// Why a telemetry line was rejected. Never fatal: the line is dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    FieldCount(usize),
    InvalidNumber(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::FieldCount(n) => write!(f, "expected 3 fields, got {n}"),
            ParseError::InvalidNumber(field) => write!(f, "invalid angle: {field:?}"),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug)]
pub enum TelemetryError {
    Io(std::io::Error),
    Serial(serialport::Error),
    ConnectionClosed,
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Io(err) => write!(f, "io error: {err}"),
            TelemetryError::Serial(err) => write!(f, "serial error: {err}"),
            TelemetryError::ConnectionClosed => write!(f, "connection closed"),
        }
    }
}

impl std::error::Error for TelemetryError {}

impl From<std::io::Error> for TelemetryError {
    fn from(err: std::io::Error) -> Self {
        TelemetryError::Io(err)
    }
}

impl From<serialport::Error> for TelemetryError {
    fn from(err: serialport::Error) -> Self {
        TelemetryError::Serial(err)
    }
}
