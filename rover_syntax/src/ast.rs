use std::fmt::Display;

use num_enum::{IntoPrimitive, TryFromPrimitive};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Compass directions, declared in clockwise order. The
/// discriminants are used to rotate through the cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        })
    }
}

impl Direction {
    const COUNT: u8 = 4;

    pub fn from_name(name: &str) -> Option<Self> {
        let direction = match name {
            "NORTH" => Self::North,
            "EAST" => Self::East,
            "SOUTH" => Self::South,
            "WEST" => Self::West,
            _ => return None,
        };
        Some(direction)
    }

    pub fn right(self) -> Self {
        self.turn(1)
    }

    pub fn left(self) -> Self {
        self.turn(Self::COUNT - 1)
    }

    fn turn(self, steps: u8) -> Self {
        let index = (u8::from(self) + steps) % Self::COUNT;
        Self::try_from(index).expect("index is reduced modulo the direction count")
    }

    fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Deploy {
        position: Position,
        direction: Direction,
    },
    Pit(Position),
    Move,
    Left,
    Right,
    Report,
}
