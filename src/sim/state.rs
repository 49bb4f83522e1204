//! Game state and core simulation types
//!
//! Everything the tick mutates lives here, owned by one `GameState`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::{WorldBounds, square_contains};
use super::enemy::{Enemy, EnemyId};
use crate::consts::*;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Entities are being created, nothing is ticking yet
    Initializing,
    /// Frames and spawns are live
    Running,
    /// Player reached home
    Won,
    /// An enemy caught the player
    Lost,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }

    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GamePhase::Won => Some(Outcome::Won),
            GamePhase::Lost => Some(Outcome::Lost),
            _ => None,
        }
    }
}

/// The point the player is walking toward
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Waypoint {
    pub pos: Vec2,
    active: bool,
}

impl Waypoint {
    pub fn activate(&mut self, x: f32, y: f32) {
        self.active = true;
        self.pos = Vec2::new(x, y);
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// The goal square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Home {
    pos: Vec2,
    size: f32,
}

impl Home {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self { pos, size }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Inclusive box test
    pub fn contains(&self, x: f32, y: f32) -> bool {
        square_contains(self.pos, self.size, Vec2::new(x, y))
    }
}

/// The turtle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub speed: f32,
    /// Facing angle in radians (screen space), only used for drawing
    pub heading: f32,
}

impl Player {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            speed,
            heading: 0.0,
        }
    }

    /// Step toward the waypoint if it is active
    ///
    /// Arrival is approximate: once the remaining distance after the step is
    /// below one step, the waypoint is dropped instead of snapping onto it.
    pub fn advance(&mut self, waypoint: &mut Waypoint) {
        if !waypoint.is_active() {
            return;
        }

        let delta = waypoint.pos - self.pos;
        let dist = delta.length();
        if dist == 0.0 {
            // Already there; there is no heading to walk along
            waypoint.deactivate();
            return;
        }

        self.heading = delta.y.atan2(delta.x);
        self.pos += delta / dist * self.speed;

        if self.pos.distance(waypoint.pos) < self.speed {
            waypoint.deactivate();
        }
    }
}

/// Complete game state (deterministic given the seed and the inputs)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG shared by spawning and the random movement policies
    #[serde(skip)]
    pub rng: Pcg32,
    pub bounds: WorldBounds,
    pub phase: GamePhase,
    /// Frames simulated so far
    pub time_ticks: u64,
    pub waypoint: Waypoint,
    pub home: Home,
    pub player: Player,
    /// Active enemies in insertion order
    pub enemies: Vec<Enemy>,
    /// Next enemy ID
    next_id: u32,
}

impl GameState {
    /// Lay out a fresh world: waypoint idle, home near the right edge,
    /// player at the left edge, no enemies yet.
    pub fn new(bounds: WorldBounds, seed: u64) -> Self {
        let mid_y = (bounds.height / 2.0).floor();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds,
            phase: GamePhase::Initializing,
            time_ticks: 0,
            waypoint: Waypoint::default(),
            home: Home::new(Vec2::new(bounds.width - HOME_OFFSET_X, mid_y), HOME_SIZE),
            player: Player::new(Vec2::new(PLAYER_START_X, mid_y), PLAYER_SPEED),
            enemies: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new enemy ID
    pub fn next_enemy_id(&mut self) -> EnemyId {
        let id = EnemyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Enter a terminal phase. Returns false if the game was already over.
    pub fn finish(&mut self, outcome: Outcome) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        self.phase = match outcome {
            Outcome::Won => GamePhase::Won,
            Outcome::Lost => GamePhase::Lost,
        };
        true
    }
}
