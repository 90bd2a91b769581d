use crate::error::{Exception, Rejection};

pub const DEFAULT_ZONE_SIZE: i32 = 10;

/// Whether consecutive invocations of the interpreter share a board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionMode {
    /// Every invocation starts with no robot and no pits.
    #[default]
    Fresh,
    /// Robot, pits and the PIT chain carry over between invocations.
    Continue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Messages {
    pub outside_zone: String,
    pub pit_detected: String,
    pub robot_detected: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            outside_zone: Rejection::OutsideZone.to_string(),
            pit_detected: Rejection::PitDetected.to_string(),
            robot_detected: Rejection::RobotDetected.to_string(),
        }
    }
}

impl Messages {
    pub fn get(&self, rejection: Rejection) -> &str {
        match rejection {
            Rejection::OutsideZone => &self.outside_zone,
            Rejection::PitDetected => &self.pit_detected,
            Rejection::RobotDetected => &self.robot_detected,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Side length of the square zone. Valid coordinates are `0..zone_size`.
    pub zone_size: i32,
    pub messages: Messages,
    pub session: SessionMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zone_size: DEFAULT_ZONE_SIZE,
            messages: Messages::default(),
            session: SessionMode::default(),
        }
    }
}

impl Config {
    /// Builds a config from a user supplied zone size.
    pub fn with_zone_size(size: &str) -> Result<Self, Exception> {
        match size.trim().parse::<i32>() {
            Ok(zone_size) if zone_size > 0 => Ok(Self {
                zone_size,
                ..Default::default()
            }),
            _ => Err(Exception::Config(format!(
                "zone size must be a positive integer, found {size:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.zone_size, 10);
        assert_eq!(config.session, SessionMode::Fresh);
        assert_eq!(
            config.messages.get(Rejection::OutsideZone),
            "Outside Zone: Ignored"
        );
        assert_eq!(
            config.messages.get(Rejection::PitDetected),
            "PIT Detected: Ignored"
        );
        assert_eq!(
            config.messages.get(Rejection::RobotDetected),
            "ROBOT Detected: Ignored"
        );
    }

    #[test]
    fn zone_size() {
        assert_eq!(Config::with_zone_size("25").unwrap().zone_size, 25);
        assert_eq!(Config::with_zone_size(" 3\n").unwrap().zone_size, 3);
        assert!(Config::with_zone_size("0").is_err());
        assert!(Config::with_zone_size("-4").is_err());
        assert!(Config::with_zone_size("ten").is_err());
    }
}
