use std::{fmt::Display, io};

#[derive(Debug)]
pub enum Exception {
    Read(io::Error),
    Write(io::Error),
    Config(String),
}

impl Display for Exception {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(e) => write!(f, "Read error: {e}"),
            Self::Write(e) => write!(f, "Write error: {e}"),
            Self::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for Exception {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(e) | Self::Write(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

/// Reasons a command is refused while the simulation keeps
/// running. Each one is reported back as an output line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    OutsideZone,
    PitDetected,
    RobotDetected,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::OutsideZone => "Outside Zone: Ignored",
            Self::PitDetected => "PIT Detected: Ignored",
            Self::RobotDetected => "ROBOT Detected: Ignored",
        })
    }
}
