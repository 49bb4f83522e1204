//! Retained scene: a `Canvas` that remembers every shape
//!
//! Frontends walk `visible()` in stacking order and paint what they find;
//! tests inspect it directly.

use serde::Serialize;

use super::{Canvas, Coords, ShapeId, ShapeKind, Style};

/// One shape as last configured
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub style: Style,
    /// Unset until the first `set_coords`
    pub coords: Option<Coords>,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Scene {
    /// Indexed by `ShapeId`; deleted slots stay `None`
    shapes: Vec<Option<Shape>>,
    /// Bottom to top
    order: Vec<ShapeId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.0 as usize).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        let shape = self.shapes.get_mut(id.0 as usize).and_then(Option::as_mut);
        if shape.is_none() {
            log::warn!("Unknown shape {:?}", id);
        }
        shape
    }

    /// Live shapes
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Shapes that would be painted, bottom to top
    pub fn visible(&self) -> impl Iterator<Item = &Shape> {
        self.order
            .iter()
            .filter_map(|id| self.get(*id))
            .filter(|s| s.visible && s.coords.is_some())
    }

    /// Position of a shape in the stacking order (0 = bottom)
    pub fn depth(&self, id: ShapeId) -> Option<usize> {
        self.order.iter().position(|s| *s == id)
    }

    /// First visible text shape with the given content
    pub fn find_text(&self, text: &str) -> Option<&Shape> {
        self.visible()
            .find(|s| s.kind == ShapeKind::Text && s.style.text.as_deref() == Some(text))
    }
}

impl Canvas for Scene {
    fn create_shape(&mut self, kind: ShapeKind, style: Style) -> ShapeId {
        let id = ShapeId(self.shapes.len() as u32);
        self.shapes.push(Some(Shape {
            id,
            kind,
            style,
            coords: None,
            visible: true,
        }));
        self.order.push(id);
        id
    }

    fn set_coords(&mut self, id: ShapeId, coords: Coords) {
        if let Some(shape) = self.get_mut(id) {
            shape.coords = Some(coords);
        }
    }

    fn set_visible(&mut self, id: ShapeId, visible: bool) {
        if let Some(shape) = self.get_mut(id) {
            shape.visible = visible;
        }
    }

    fn delete(&mut self, id: ShapeId) {
        if let Some(slot) = self.shapes.get_mut(id.0 as usize) {
            if slot.take().is_some() {
                self.order.retain(|s| *s != id);
            }
        }
    }

    fn raise(&mut self, id: ShapeId) {
        if let Some(pos) = self.depth(id) {
            let id = self.order.remove(pos);
            self.order.push(id);
        }
    }
}
