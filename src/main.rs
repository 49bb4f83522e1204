//! Turtle Adventure entry point
//!
//! On the web: paints the retained scene onto a 2D canvas every animation
//! frame and forwards clicks. Natively: a headless runner that plays one
//! scripted click and reports how the game ended.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use turtle_adventure::canvas::{Coords, Scene, Shape, ShapeKind, colors};
    use turtle_adventure::{GameConfig, GameSession};

    /// Longest real-time gap fed to the event loop in one animation frame (ms)
    const MAX_FRAME_GAP_MS: f64 = 250.0;

    /// Game instance holding all state
    struct Game {
        session: GameSession<Scene>,
        ctx: CanvasRenderingContext2d,
        last_time: f64,
    }

    impl Game {
        fn update(&mut self, time: f64) {
            let elapsed = if self.last_time > 0.0 {
                (time - self.last_time).clamp(0.0, MAX_FRAME_GAP_MS)
            } else {
                0.0
            };
            self.last_time = time;
            self.session.advance(elapsed as u64);
        }

        fn restart(&mut self, seed: u64) {
            self.session.restart(seed);
            self.last_time = 0.0;
        }

        fn render(&self) {
            let config = self.session.config();
            let (w, h) = (config.width as f64, config.height as f64);
            self.ctx.set_fill_style_str(&colors::css(colors::BACKGROUND));
            self.ctx.fill_rect(0.0, 0.0, w, h);

            for shape in self.session.canvas().visible() {
                if let Err(e) = paint(&self.ctx, shape) {
                    log::warn!("Failed to paint {:?}: {:?}", shape.id, e);
                }
            }
        }
    }

    fn paint(ctx: &CanvasRenderingContext2d, shape: &Shape) -> Result<(), JsValue> {
        let style = &shape.style;
        ctx.set_line_width(style.width as f64);
        if let Some(fill) = style.fill {
            ctx.set_fill_style_str(&colors::css(fill));
        }
        if let Some(outline) = style.outline {
            ctx.set_stroke_style_str(&colors::css(outline));
        }

        let Some(coords) = &shape.coords else {
            return Ok(());
        };

        match (shape.kind, coords) {
            (ShapeKind::Text, Coords::Anchor(at)) => {
                if let Some(font) = &style.font {
                    ctx.set_font(&font.css());
                }
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                ctx.fill_text(style.text.as_deref().unwrap_or_default(), at.x as f64, at.y as f64)?;
                return Ok(());
            }
            (ShapeKind::Rectangle, Coords::Box { min, max }) => {
                ctx.begin_path();
                ctx.rect(
                    min.x as f64,
                    min.y as f64,
                    (max.x - min.x) as f64,
                    (max.y - min.y) as f64,
                );
            }
            (ShapeKind::Oval, Coords::Box { min, max }) => {
                let center = (*min + *max) / 2.0;
                let radius = (*max - *min) / 2.0;
                ctx.begin_path();
                ctx.ellipse(
                    center.x as f64,
                    center.y as f64,
                    radius.x as f64,
                    radius.y as f64,
                    0.0,
                    0.0,
                    TAU,
                )?;
            }
            (ShapeKind::Line, Coords::Line { from, to }) => {
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
            }
            (ShapeKind::Polygon, Coords::Points(points)) => {
                let mut points = points.iter();
                let Some(first) = points.next() else {
                    return Ok(());
                };
                ctx.begin_path();
                ctx.move_to(first.x as f64, first.y as f64);
                for p in points {
                    ctx.line_to(p.x as f64, p.y as f64);
                }
                ctx.close_path();
            }
            (kind, coords) => {
                log::warn!("{:?} cannot be placed with {:?}", kind, coords);
                return Ok(());
            }
        }

        if style.fill.is_some() {
            ctx.fill();
        }
        if style.outline.is_some() {
            ctx.stroke();
        }
        Ok(())
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
        }

        log::info!("Turtle Adventure starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let config = GameConfig {
            width: canvas.width(),
            height: canvas.height(),
            seed: js_sys::Date::now() as u64,
            ..Default::default()
        };
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let game = Rc::new(RefCell::new(Game {
            session: GameSession::new(config, Scene::new()),
            ctx,
            last_time: 0.0,
        }));

        setup_input_handlers(&canvas, game.clone())?;
        request_animation_frame(game);

        log::info!("Turtle Adventure running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Left click sets the waypoint
        {
            let game = game.clone();
            let target = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                // Map CSS pixels to canvas pixels
                let sx = target.width() as f32 / target.client_width().max(1) as f32;
                let sy = target.height() as f32 / target.client_height().max(1) as f32;
                game.borrow_mut()
                    .session
                    .click(event.offset_x() as f32 * sx, event.offset_y() as f32 * sy);
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard: R restarts with a fresh seed
        {
            let window = web_sys::window().ok_or("no window")?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if matches!(event.key().as_str(), "r" | "R") {
                    let seed = js_sys::Date::now() as u64;
                    game.borrow_mut().restart(seed);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::Context;
    use clap::Parser;
    use glam::Vec2;
    use serde::Serialize;

    use turtle_adventure::canvas::Scene;
    use turtle_adventure::consts::*;
    use turtle_adventure::sim::{GamePhase, Outcome};
    use turtle_adventure::{GameConfig, GameSession};

    /// Steer the turtle home while enemies swarm the field (headless runner)
    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    pub struct Args {
        /// World width in pixels
        #[arg(long, default_value_t = WORLD_WIDTH)]
        width: u32,

        /// World height in pixels
        #[arg(long, default_value_t = WORLD_HEIGHT)]
        height: u32,

        /// Difficulty level (reported only)
        #[arg(long, default_value_t = 1)]
        level: u32,

        /// RNG seed
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Click here at the start instead of on home
        #[arg(long, num_args = 2, value_names = ["X", "Y"])]
        target: Option<Vec<f32>>,

        /// Give up after this much game time
        #[arg(long, default_value_t = 60_000)]
        duration_ms: u64,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    }

    /// What the runner reports
    #[derive(Debug, Serialize)]
    struct RunSummary {
        seed: u64,
        level: u32,
        phase: GamePhase,
        outcome: Option<Outcome>,
        elapsed_ms: u64,
        frames: u64,
        waves: u32,
        enemies: usize,
        player: Vec2,
    }

    impl RunSummary {
        fn from_session(session: &GameSession<Scene>) -> Self {
            let state = session.state();
            Self {
                seed: state.seed,
                level: session.generator().level(),
                phase: state.phase,
                outcome: state.phase.outcome(),
                elapsed_ms: session.timers().now_ms(),
                frames: state.time_ticks,
                waves: session.generator().batches(),
                enemies: state.enemies.len(),
                player: state.player.pos,
            }
        }
    }

    pub fn run(args: Args) -> anyhow::Result<()> {
        let config = GameConfig {
            width: args.width,
            height: args.height,
            level: args.level,
            seed: args.seed,
        };
        config.validate().context("invalid launch parameters")?;

        let mut session = GameSession::new(config, Scene::new());
        let target = match args.target.as_deref() {
            Some(&[x, y]) => Vec2::new(x, y),
            _ => session.state().home.pos(),
        };
        log::info!("Walking toward {:?}", target);
        session.click(target.x, target.y);

        while !session.phase().is_terminal() && session.timers().now_ms() < args.duration_ms {
            session.advance(FRAME_INTERVAL_MS);
        }

        let summary = RunSummary::from_session(&session);
        if args.json {
            let json = serde_json::to_string_pretty(&summary).context("failed to encode summary")?;
            println!("{}", json);
        } else {
            let verdict = match summary.outcome {
                Some(Outcome::Won) => "You Win",
                Some(Outcome::Lost) => "You Lose",
                None => "Time's up",
            };
            println!(
                "{} after {} ms ({} frames, {} waves, {} enemies)",
                verdict, summary.elapsed_ms, summary.frames, summary.waves, summary.enemies
            );
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    let args = native::Args::parse();
    native::run(args)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
