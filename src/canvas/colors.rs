//! Colors for game elements

/// Linear RGBA, each channel in 0..=1
pub type Color = [f32; 4];

pub const BACKGROUND: Color = [1.0, 1.0, 1.0, 1.0];
pub const WAYPOINT: Color = [0.0, 0.5, 0.0, 1.0];
pub const HOME: Color = [0.65, 0.16, 0.16, 1.0];
pub const PLAYER: Color = [0.0, 0.5, 0.0, 1.0];
pub const WALKER: Color = [1.0, 0.0, 0.0, 1.0];
pub const PURSUER: Color = [1.0, 1.0, 0.0, 1.0];
pub const PATROLLER: Color = [0.0, 0.0, 1.0, 1.0];
pub const SUMMONER: Color = [0.0, 0.5, 0.0, 1.0];
pub const MINION: Color = [1.0, 0.75, 0.8, 1.0];
pub const WIN_TEXT: Color = [0.0, 0.5, 0.0, 1.0];
pub const LOSE_TEXT: Color = [1.0, 0.0, 0.0, 1.0];

/// `rgba(r, g, b, a)` string for 2D canvas contexts
pub fn css(color: Color) -> String {
    let [r, g, b, a] = color;
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgba({}, {}, {}, {})", channel(r), channel(g), channel(b), a)
}
