use log::{debug, trace, warn};
use rover_syntax::ast::{Command, Direction, Position};

use crate::{
    config::{Config, SessionMode},
    error::Rejection,
    parse_line,
    robot::Robot,
    zone::Zone,
};

#[derive(Default, Debug)]
pub struct Interpreter {
    config: Config,
    zone: Zone,
    robot: Option<Robot>,
    /// Set by a DEPLOY line and kept alive by the PIT lines directly
    /// following it. Any other line, malformed ones included, clears it.
    pit_chain: bool,
    line: usize,
}

impl Interpreter {
    pub fn new(config: Option<Config>) -> Self {
        let config = config.unwrap_or_default();
        Self {
            zone: Zone::new(config.zone_size),
            config,
            robot: None,
            pit_chain: false,
            line: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// The robot, once it has been deployed.
    pub fn robot(&self) -> Option<&Robot> {
        self.robot.as_ref()
    }

    /// Clears the board: no robot, no pits.
    pub fn reset(&mut self) {
        debug!("Reset");
        self.zone.clear();
        self.robot = None;
        self.pit_chain = false;
        self.line = 0;
    }

    /// Prepares for a new input sequence according to the session mode.
    pub fn start_session(&mut self) {
        match self.config.session {
            SessionMode::Fresh => self.reset(),
            SessionMode::Continue => self.line = 0,
        }
    }

    /// Runs a finite sequence of lines as one session
    /// and collects the produced output lines.
    pub fn interpret_all<I, S>(&mut self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.start_session();
        lines
            .into_iter()
            .filter_map(|line| self.interpret(line.as_ref()))
            .collect()
    }

    /// Interprets the next line of the stream, returning
    /// the output line it produces, if any.
    pub fn interpret(&mut self, source: &str) -> Option<String> {
        let line = self.line;
        self.line += 1;
        match parse_line(source, line) {
            Ok(command) => self.interpret_command(command),
            Err(e) => {
                warn!("{e}");
                self.pit_chain = false;
                None
            }
        }
    }

    fn interpret_command(&mut self, command: Command) -> Option<String> {
        trace!("Interpreting {command:?}");
        let pit_allowed = self.pit_chain;
        self.pit_chain = match command {
            Command::Deploy { .. } => true,
            Command::Pit(_) => self.pit_chain,
            _ => false,
        };

        let result = match command {
            Command::Deploy {
                position,
                direction,
            } => self.interpret_deploy(position, direction),
            Command::Pit(position) => self.interpret_pit(position, pit_allowed),
            Command::Move => self.interpret_move(),
            Command::Left => {
                self.turn(Direction::left);
                Ok(())
            }
            Command::Right => {
                self.turn(Direction::right);
                Ok(())
            }
            Command::Report => return self.robot.as_ref().map(Robot::to_string),
        };
        result
            .err()
            .map(|rejection| self.config.messages.get(rejection).to_string())
    }

    fn interpret_deploy(
        &mut self,
        position: Position,
        direction: Direction,
    ) -> Result<(), Rejection> {
        self.zone.check(position)?;
        debug!("Deploy at {position} facing {direction}");
        self.robot = Some(Robot::new(position, direction));
        Ok(())
    }

    fn interpret_pit(&mut self, position: Position, allowed: bool) -> Result<(), Rejection> {
        let Some(robot) = self.robot else {
            trace!("Ignoring PIT before deployment");
            return Ok(());
        };
        if !allowed {
            trace!("Ignoring PIT that does not follow a DEPLOY");
            return Ok(());
        }
        if robot.position == position {
            return Err(Rejection::RobotDetected);
        }
        self.zone.add_pit(position);
        Ok(())
    }

    fn interpret_move(&mut self) -> Result<(), Rejection> {
        let Some(robot) = self.robot.as_mut() else {
            return Ok(());
        };
        let target = robot.ahead();
        self.zone.check(target)?;
        debug!("Move {} -> {target}", robot.position);
        robot.position = target;
        Ok(())
    }

    fn turn(&mut self, rotate: fn(Direction) -> Direction) {
        if let Some(robot) = self.robot.as_mut() {
            robot.direction = rotate(robot.direction);
            debug!("Face {}", robot.direction);
        }
    }
}
