use std::fmt::Display;

use rover_syntax::ast::{Direction, Position};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Robot {
    pub position: Position,
    pub direction: Direction,
}

impl Robot {
    pub fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// The cell the robot would occupy after one move.
    pub fn ahead(&self) -> Position {
        self.position.step(self.direction)
    }
}

/// Formats the robot as a report line, e.g. `1,0,EAST`.
impl Display for Robot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.position, self.direction)
    }
}
