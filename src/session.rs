//! Session controller
//!
//! Owns the game state, the stage, the canvas and the timer queue, and runs
//! the single-threaded event loop: frames and enemy waves are both one-shot
//! timers on the same virtual clock.

use crate::canvas::{Canvas, Coords, Font, ShapeId, ShapeKind, Style, colors};
use crate::config::GameConfig;
use crate::consts::FRAME_INTERVAL_MS;
use crate::sim::{self, Enemy, EnemyGenerator, GamePhase, GameState, Outcome, TimerEvent, TimerQueue};
use crate::stage::{ElementRef, Stage};

const BANNER_FONT: Font = Font {
    family: "Arial",
    size: 36,
    bold: true,
};

/// One game from init to win or loss, drawing onto `C`
pub struct GameSession<C: Canvas> {
    config: GameConfig,
    canvas: C,
    state: GameState,
    stage: Stage,
    timers: TimerQueue,
    generator: EnemyGenerator,
    /// Game-over text, once shown
    banner: Option<ShapeId>,
}

impl<C: Canvas> GameSession<C> {
    /// Build a session and start it
    pub fn new(config: GameConfig, canvas: C) -> Self {
        let mut session = Self {
            state: GameState::new(config.bounds(), config.seed),
            stage: Stage::new(),
            timers: TimerQueue::new(),
            generator: EnemyGenerator::new(config.level),
            banner: None,
            config,
            canvas,
        };
        session.init_game();
        session
    }

    /// Lay out the world, register the fixed elements and arm both timers
    fn init_game(&mut self) {
        log::info!(
            "Starting game: {}x{} level {} seed {}",
            self.config.width,
            self.config.height,
            self.config.level,
            self.config.seed
        );

        self.state = GameState::new(self.config.bounds(), self.config.seed);
        self.timers = TimerQueue::new();
        self.generator = EnemyGenerator::new(self.config.level);

        for element in [ElementRef::Waypoint, ElementRef::Home, ElementRef::Player] {
            self.stage.register(element, &self.state, &mut self.canvas);
        }
        self.stage.render(&self.state, &mut self.canvas);

        self.timers.schedule_once(0, TimerEvent::Frame);
        self.generator.start(&mut self.timers);
        self.state.phase = GamePhase::Running;
    }

    /// Throw the current game away and start over with a new seed
    pub fn restart(&mut self, seed: u64) {
        log::info!("Restarting with seed {}", seed);
        self.stage.teardown(&self.state, &mut self.canvas);
        if let Some(id) = self.banner.take() {
            self.canvas.delete(id);
        }
        self.config.seed = seed;
        self.init_game();
    }

    /// Append an enemy; it updates and renders from the next frame on
    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.state.enemies.push(enemy);
        let index = self.state.enemies.len() - 1;
        self.stage.register(ElementRef::Enemy(index), &self.state, &mut self.canvas);
    }

    /// Left click at canvas coordinates
    pub fn click(&mut self, x: f32, y: f32) {
        self.state.waypoint.activate(x, y);
    }

    /// Run the event loop for `elapsed_ms` of virtual time
    pub fn advance(&mut self, elapsed_ms: u64) {
        let until = self.timers.now_ms() + elapsed_ms;
        while let Some(event) = self.timers.pop_due(until) {
            match event {
                TimerEvent::Frame => self.on_frame(),
                TimerEvent::SpawnWave => self.on_spawn_wave(),
            }
        }
        self.timers.advance_to(until);
    }

    fn on_frame(&mut self) {
        if self.state.phase != GamePhase::Running {
            return;
        }
        self.tick();
        if self.state.phase == GamePhase::Running {
            self.timers.schedule_once(FRAME_INTERVAL_MS, TimerEvent::Frame);
        }
    }

    fn on_spawn_wave(&mut self) {
        if self.state.phase != GamePhase::Running {
            log::debug!("Game over, enemy generator stops");
            return;
        }
        for enemy in self.generator.create_enemies(&mut self.state) {
            self.add_enemy(enemy);
        }
        self.generator.rearm(&mut self.timers);
    }

    /// Update and render every element once
    ///
    /// Returns the outcome if this frame ended the game.
    pub fn tick(&mut self) -> Option<Outcome> {
        let outcome = sim::tick(&mut self.state);
        self.stage.render(&self.state, &mut self.canvas);
        match outcome {
            Some(Outcome::Won) => self.game_over_win(),
            Some(Outcome::Lost) => self.game_over_lose(),
            None => {}
        }
        outcome
    }

    pub fn game_over_win(&mut self) {
        self.game_over(Outcome::Won);
    }

    pub fn game_over_lose(&mut self) {
        self.game_over(Outcome::Lost);
    }

    /// Stop the game and show the banner; later calls change nothing
    fn game_over(&mut self, outcome: Outcome) {
        if self.banner.is_some() {
            return;
        }
        self.state.finish(outcome);
        let Some(outcome) = self.state.phase.outcome() else {
            return;
        };

        let (text, color) = match outcome {
            Outcome::Won => ("You Win", colors::WIN_TEXT),
            Outcome::Lost => ("You Lose", colors::LOSE_TEXT),
        };
        log::info!(
            "{} after {} frames with {} enemies",
            text,
            self.state.time_ticks,
            self.state.enemies.len()
        );

        let id = self
            .canvas
            .create_shape(ShapeKind::Text, Style::text(text, color, BANNER_FONT));
        self.canvas
            .set_coords(id, Coords::Anchor(self.state.bounds.center()));
        self.banner = Some(id);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn generator(&self) -> &EnemyGenerator {
        &self.generator
    }
}
