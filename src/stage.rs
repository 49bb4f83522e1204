//! Game-object container
//!
//! Keeps every registered element in insertion order together with the canvas
//! shapes it created. The simulation updates the same elements in the same
//! order (see `sim::tick`); the stage handles their create/render/delete half.

use crate::canvas::{Canvas, ShapeId};
use crate::sim::GameState;

/// The drawable half of the element contract
pub trait Element {
    /// Allocate the shapes this element draws with
    fn create(&self, canvas: &mut dyn Canvas) -> Vec<ShapeId>;

    /// Push the current state into the shapes
    fn render(&self, shapes: &[ShapeId], canvas: &mut dyn Canvas);

    fn delete(&self, shapes: &[ShapeId], canvas: &mut dyn Canvas) {
        for &id in shapes {
            canvas.delete(id);
        }
    }
}

/// Which piece of game state an entry draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRef {
    Waypoint,
    Home,
    Player,
    /// Index into `GameState::enemies`
    Enemy(usize),
}

impl ElementRef {
    fn resolve(self, state: &GameState) -> Option<&dyn Element> {
        match self {
            ElementRef::Waypoint => Some(&state.waypoint),
            ElementRef::Home => Some(&state.home),
            ElementRef::Player => Some(&state.player),
            ElementRef::Enemy(i) => state.enemies.get(i).map(|e| e as &dyn Element),
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    element: ElementRef,
    shapes: Vec<ShapeId>,
}

/// Registered elements in insertion order
#[derive(Debug, Clone, Default)]
pub struct Stage {
    entries: Vec<Entry>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element and let it create its shapes
    pub fn register(&mut self, element: ElementRef, state: &GameState, canvas: &mut dyn Canvas) {
        let Some(target) = element.resolve(state) else {
            log::warn!("Cannot register {:?}: no such element", element);
            return;
        };
        let shapes = target.create(canvas);
        self.entries.push(Entry { element, shapes });
    }

    /// Render every element, bottom to top in registration order
    pub fn render(&self, state: &GameState, canvas: &mut dyn Canvas) {
        for entry in &self.entries {
            if let Some(target) = entry.element.resolve(state) {
                target.render(&entry.shapes, canvas);
            }
        }
    }

    /// Delete every element's shapes and forget them
    pub fn teardown(&mut self, state: &GameState, canvas: &mut dyn Canvas) {
        for entry in self.entries.drain(..) {
            match entry.element.resolve(state) {
                Some(target) => target.delete(&entry.shapes, canvas),
                None => entry.shapes.iter().for_each(|&id| canvas.delete(id)),
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered elements in order
    pub fn elements(&self) -> impl Iterator<Item = ElementRef> + '_ {
        self.entries.iter().map(|e| e.element)
    }

    /// Shapes owned by an element
    pub fn shapes_of(&self, element: ElementRef) -> Option<&[ShapeId]> {
        self.entries
            .iter()
            .find(|e| e.element == element)
            .map(|e| e.shapes.as_slice())
    }
}
