//! Enemy generator
//!
//! Every firing builds the same batch: one of each top-level enemy plus a
//! handful of minions clustered on the summoner. The generator re-arms itself
//! on the session's timer queue.

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use super::enemy::{BounceAxes, Enemy};
use super::state::GameState;
use super::timer::{TimerEvent, TimerQueue};
use crate::consts::{SPAWN_FIRST_DELAY_MS, SPAWN_INTERVAL_MS};

/// Minion pairs (one diagonal + one straight) per summoner
pub const MINION_PAIRS: usize = 3;
/// Minions land within this many units of their summoner on each axis
pub const MINION_JITTER: i32 = 10;
/// Random spawns keep clear of the player's starting edge
pub const SPAWN_MIN_X: i32 = 200;
/// ...and of the bottom strip
pub const SPAWN_BOTTOM_MARGIN: i32 = 100;

/// Creates enemies on a timer for as long as the session runs
#[derive(Debug, Clone, Serialize)]
pub struct EnemyGenerator {
    level: u32,
    batches: u32,
}

impl EnemyGenerator {
    pub fn new(level: u32) -> Self {
        Self { level, batches: 0 }
    }

    /// Accepted and reported, but the recipe is the same for every level
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Batches created so far
    pub fn batches(&self) -> u32 {
        self.batches
    }

    /// Arm the first firing shortly after the session starts
    pub fn start(&self, timers: &mut TimerQueue) {
        timers.schedule_once(SPAWN_FIRST_DELAY_MS, TimerEvent::SpawnWave);
    }

    /// Arm the next firing; called from inside the current one
    pub fn rearm(&self, timers: &mut TimerQueue) {
        timers.schedule_once(SPAWN_INTERVAL_MS, TimerEvent::SpawnWave);
    }

    /// Build one batch in creation order
    ///
    /// The caller registers each enemy with the session so it shows up in the
    /// next frame.
    pub fn create_enemies(&mut self, state: &mut GameState) -> Vec<Enemy> {
        self.batches += 1;
        let mut batch = Vec::with_capacity(4 + MINION_PAIRS * 2);

        let pos = random_spawn(state);
        batch.push(Enemy::random_walker(state.next_enemy_id(), pos));

        let pos = random_spawn(state);
        batch.push(Enemy::pursuer(state.next_enemy_id(), pos));

        batch.push(Enemy::patroller(state.next_enemy_id(), state.home.pos()));

        let pos = random_spawn(state);
        let summoner = Enemy::summoner(state.next_enemy_id(), pos);
        let summoner_id = summoner.id;
        let anchor = summoner.pos;
        batch.push(summoner);

        for _ in 0..MINION_PAIRS {
            for axes in [BounceAxes::Both, BounceAxes::Single] {
                let heading = axes.pick_heading(&mut state.rng);
                let pos = jitter_around(anchor, &mut state.rng);
                batch.push(Enemy::minion(state.next_enemy_id(), pos, axes, heading, summoner_id));
            }
        }

        log::debug!(
            "Batch {} (level {}): {} enemies, summoner {:?} at {:?}",
            self.batches,
            self.level,
            batch.len(),
            summoner_id,
            anchor
        );

        batch
    }
}

/// Integer position in `[200, W] x [0, H - 100]`
fn random_spawn(state: &mut GameState) -> Vec2 {
    let max_x = state.bounds.width as i32;
    let max_y = (state.bounds.height as i32 - SPAWN_BOTTOM_MARGIN).max(0);
    let x = state.rng.random_range(SPAWN_MIN_X.min(max_x)..=max_x);
    let y = state.rng.random_range(0..=max_y);
    Vec2::new(x as f32, y as f32)
}

fn jitter_around<R: Rng + ?Sized>(anchor: Vec2, rng: &mut R) -> Vec2 {
    let x = anchor.x as i32;
    let y = anchor.y as i32;
    Vec2::new(
        rng.random_range(x - MINION_JITTER..=x + MINION_JITTER) as f32,
        rng.random_range(y - MINION_JITTER..=y + MINION_JITTER) as f32,
    )
}
