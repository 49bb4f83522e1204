//! Rendering surface abstraction
//!
//! Game elements draw through the `Canvas` trait the way a retained-mode
//! toolkit works: create a shape once, then move it, hide it or raise it each
//! frame. `Scene` is the in-crate implementation; frontends paint it.

pub mod colors;
pub mod scene;
pub mod shapes;

use glam::Vec2;
use serde::Serialize;

pub use colors::Color;
pub use scene::{Scene, Shape};

/// Handle to a shape owned by a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ShapeId(pub u32);

/// Primitive shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Oval,
    Polygon,
    Text,
}

/// Text font
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub family: &'static str,
    pub size: u32,
    pub bold: bool,
}

impl Font {
    /// CSS-style font shorthand, e.g. `bold 36px Arial`
    pub fn css(&self) -> String {
        let weight = if self.bold { "bold " } else { "" };
        format!("{}{}px {}", weight, self.size, self.family)
    }
}

/// How a shape is painted
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Style {
    pub fill: Option<Color>,
    pub outline: Option<Color>,
    /// Stroke width for outlines and lines
    pub width: f32,
    pub text: Option<String>,
    pub font: Option<Font>,
}

impl Style {
    /// Solid shape, no outline
    pub fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            ..Default::default()
        }
    }

    /// Hollow shape (or a line) stroked with `color`
    pub fn outlined(color: Color, width: f32) -> Self {
        Self {
            outline: Some(color),
            width,
            ..Default::default()
        }
    }

    pub fn text(text: impl Into<String>, color: Color, font: Font) -> Self {
        Self {
            fill: Some(color),
            text: Some(text.into()),
            font: Some(font),
            ..Default::default()
        }
    }
}

/// Where a shape sits
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Coords {
    /// Bounding box for rectangles and ovals
    Box { min: Vec2, max: Vec2 },
    /// Segment endpoints
    Line { from: Vec2, to: Vec2 },
    /// Polygon outline
    Points(Vec<Vec2>),
    /// Center point for text
    Anchor(Vec2),
}

/// The drawing surface game elements render onto
pub trait Canvas {
    fn create_shape(&mut self, kind: ShapeKind, style: Style) -> ShapeId;
    fn set_coords(&mut self, id: ShapeId, coords: Coords);
    fn set_visible(&mut self, id: ShapeId, visible: bool);
    fn delete(&mut self, id: ShapeId);
    /// Move the shape above everything else
    fn raise(&mut self, id: ShapeId);
}
