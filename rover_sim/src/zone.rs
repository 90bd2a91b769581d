use std::collections::HashSet;

use log::debug;
use rover_syntax::ast::Position;

use crate::{config::DEFAULT_ZONE_SIZE, error::Rejection};

/// The square area the robot explores, along with every pit placed in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    size: i32,
    pits: HashSet<Position>,
}

impl Default for Zone {
    fn default() -> Self {
        Self::new(DEFAULT_ZONE_SIZE)
    }
}

impl Zone {
    pub fn new(size: i32) -> Self {
        Self {
            size,
            pits: HashSet::default(),
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn contains(&self, position: Position) -> bool {
        (0..self.size).contains(&position.x) && (0..self.size).contains(&position.y)
    }

    pub fn has_pit(&self, position: Position) -> bool {
        self.pits.contains(&position)
    }

    pub fn pit_count(&self) -> usize {
        self.pits.len()
    }

    /// Decides whether the robot may occupy `position`.
    /// Pits are checked before the zone bounds.
    pub fn check(&self, position: Position) -> Result<(), Rejection> {
        if self.has_pit(position) {
            debug!("Pit at {position}");
            return Err(Rejection::PitDetected);
        }
        if !self.contains(position) {
            debug!("{position} is outside the zone");
            return Err(Rejection::OutsideZone);
        }
        Ok(())
    }

    /// Returns false if the pit was already present.
    pub fn add_pit(&mut self, position: Position) -> bool {
        debug!("Add pit {position}");
        self.pits.insert(position)
    }

    pub fn clear(&mut self) {
        debug!("Clear {} pits", self.pits.len());
        self.pits.clear();
    }
}
