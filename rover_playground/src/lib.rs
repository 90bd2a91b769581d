use rover_sim::{
    config::{Config, SessionMode},
    interpret::Interpreter,
};
use rover_syntax::ast::Position;
use std::env;
use wasm_bindgen::prelude::*;

#[cfg(all(feature = "wee_alloc", target_arch = "wasm32"))]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn init() -> String {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    format!(
        "Rover v{} on {} ({}), Copyright (c) {}",
        env!("CARGO_PKG_VERSION"),
        env::consts::OS,
        env::consts::ARCH,
        env!("CARGO_PKG_AUTHORS"),
    )
}

/// A simulation that lives as long as the page does. Every call
/// to `run` continues from where the previous one left off.
#[wasm_bindgen]
pub struct World {
    interpreter: Interpreter,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl World {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let config = Config {
            session: SessionMode::Continue,
            ..Default::default()
        };
        Self {
            interpreter: Interpreter::new(Some(config)),
        }
    }

    /// Runs the commands in `src`, returning the output lines joined by newlines.
    pub fn run(&mut self, src: &str) -> String {
        self.interpreter.interpret_all(src.lines()).join("\n")
    }

    pub fn reset(&mut self) {
        self.interpreter.reset();
    }

    #[wasm_bindgen(js_name = zoneSize)]
    pub fn zone_size(&self) -> i32 {
        self.interpreter.zone().size()
    }

    /// Whether `(x, y)` holds a pit, for drawing the zone.
    #[wasm_bindgen(js_name = hasPit)]
    pub fn has_pit(&self, x: i32, y: i32) -> bool {
        self.interpreter.zone().has_pit(Position::new(x, y))
    }

    /// The current report line, or an empty string before deployment.
    pub fn robot(&self) -> String {
        self.interpreter
            .robot()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_keeps_state_between_runs() {
        let mut world = World::new();
        assert_eq!(world.run("DEPLOY 0,0,NORTH\nPIT 0,1"), "");
        assert!(world.has_pit(0, 1));
        assert_eq!(
            world.run("MOVE\nRIGHT\nMOVE\nREPORT"),
            "PIT Detected: Ignored\n1,0,EAST"
        );
        assert_eq!(world.robot(), "1,0,EAST");

        world.reset();
        assert_eq!(world.robot(), "");
        assert!(!world.has_pit(0, 1));
        assert_eq!(world.zone_size(), 10);
    }
}
