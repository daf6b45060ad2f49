//! Main game loop
//!
//! The front end turns input into [`Command`]s and feeds them to
//! [`GameLoop::tick`]. Battles and the shop are modal: while one is open the
//! loop only accepts a typed answer.

use log::info;

use crate::combat::{self, BattleReport, Encounter};
use crate::difficulty::Difficulty;
use crate::encounter::{self, Effect};
use crate::map::{self, Map, Tile};
use crate::player::Player;
use crate::rng::GameRng;
use crate::shop::{self, Selection};

/// Movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// (dx, dy) for one step; north is up the screen
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// Player command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
    /// A line typed at the battle or shop prompt
    Respond(String),
}

/// What the game is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Exploring,
    /// Waiting for the player's hand against this monster
    Battle(Encounter),
    /// Waiting for a shop selection
    Shopping,
}

/// Result of a game loop tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// Player died with message
    PlayerDied(String),
    /// Player quit
    PlayerQuit,
    /// Player reached the goal
    PlayerWon,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub map: Map,
    pub player: Player,
    /// Fixed for the session
    pub difficulty: Difficulty,
    pub rng: GameRng,
    /// False once the game has ended (quit, win or death)
    pub running: bool,
    pub phase: Phase,
    /// Messages for the current turn
    pub messages: Vec<String>,
    /// Battle resolved during the current turn, if any
    pub last_battle: Option<BattleReport>,
}

impl GameState {
    /// Generate a fresh map and put the player on the start tile
    pub fn new(difficulty: Difficulty, mut rng: GameRng) -> Self {
        let map = map::generate(difficulty, &mut rng);
        info!("new {} game (seed {})", difficulty, rng.seed());
        Self::with_map(map, difficulty, rng)
    }

    /// Start a session on an existing map
    pub fn with_map(map: Map, difficulty: Difficulty, rng: GameRng) -> Self {
        Self {
            map,
            player: Player::new(),
            difficulty,
            rng,
            running: true,
            phase: Phase::Exploring,
            messages: Vec::new(),
            last_battle: None,
        }
    }

    /// Add a message for this turn
    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    /// Tile under the player
    pub fn current_tile(&self) -> Tile {
        self.map.tile(self.player.x, self.player.y)
    }
}

pub struct GameLoop {
    state: GameState,
    /// Terminal result, repeated for any command after the game ended
    finished: Option<GameLoopResult>,
}

impl GameLoop {
    /// Create a new game loop with the given state
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            finished: None,
        }
    }

    /// Get reference to game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Execute a single game tick
    pub fn tick(&mut self, command: Command) -> GameLoopResult {
        if let Some(result) = &self.finished {
            return result.clone();
        }

        self.state.clear_messages();
        self.state.last_battle = None;

        let result = match (self.state.phase, command) {
            (Phase::Exploring, Command::Move(dir)) => self.do_move(dir),
            (Phase::Exploring, Command::Quit) => {
                self.state.running = false;
                GameLoopResult::PlayerQuit
            }
            (Phase::Battle(enc), Command::Respond(line)) => self.do_battle(&enc, &line),
            (Phase::Shopping, Command::Respond(line)) => self.do_shop(&line),
            _ => GameLoopResult::Continue,
        };

        if result != GameLoopResult::Continue {
            info!("game over: {:?}", result);
            self.finished = Some(result.clone());
        }
        result
    }

    fn do_move(&mut self, dir: Direction) -> GameLoopResult {
        let (dx, dy) = dir.delta();
        if !self.state.player.step(dx, dy) {
            return GameLoopResult::Continue;
        }

        let state = &mut self.state;
        let tile = state.current_tile();
        match encounter::on_arrive(tile, state.difficulty, &mut state.rng) {
            Effect::None => {}
            Effect::Battle => {
                let enc = Encounter::roll(state.difficulty, &mut state.rng);
                state.phase = Phase::Battle(enc);
                state.message(format!("A wild {} appeared!", enc.kind));
            }
            Effect::Shop => {
                state.phase = Phase::Shopping;
                state.message("Welcome! Take a look around.");
            }
            Effect::Win => {
                state.running = false;
                state.message("Congratulations! You made it to the destination!");
                return GameLoopResult::PlayerWon;
            }
        }
        GameLoopResult::Continue
    }

    fn do_battle(&mut self, enc: &Encounter, line: &str) -> GameLoopResult {
        let state = &mut self.state;
        let report = combat::resolve(enc, line, &mut state.player, &mut state.rng);
        for msg in report.messages() {
            state.message(msg);
        }
        state.last_battle = Some(report);
        state.phase = Phase::Exploring;

        if state.player.is_dead() {
            state.running = false;
            state.message("You have no health left... GAME OVER");
            return GameLoopResult::PlayerDied(format!("killed by the {}", enc.kind));
        }
        GameLoopResult::Continue
    }

    fn do_shop(&mut self, line: &str) -> GameLoopResult {
        let state = &mut self.state;
        match Selection::parse(line) {
            Selection::Leave => {
                state.phase = Phase::Exploring;
                state.message("You leave the shop.");
            }
            Selection::Buy(item) => {
                let purchase = shop::buy(&mut state.player, item);
                state.message(purchase.message());
            }
            Selection::Unknown => state.message("Invalid selection."),
        }
        GameLoopResult::Continue
    }
}
