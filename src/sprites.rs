//! How each game element draws itself

use crate::canvas::shapes::{centered_box, cross, turtle};
use crate::canvas::{Canvas, Color, ShapeId, ShapeKind, Style, colors};
use crate::consts::WAYPOINT_ARM;
use crate::sim::{Enemy, EnemyKind, Home, Player, Waypoint};
use crate::stage::Element;

/// Stroke width for outlines and the waypoint cross
const LINE_WIDTH: f32 = 2.0;

impl Element for Waypoint {
    fn create(&self, canvas: &mut dyn Canvas) -> Vec<ShapeId> {
        (0..2)
            .map(|_| canvas.create_shape(ShapeKind::Line, Style::outlined(colors::WAYPOINT, LINE_WIDTH)))
            .collect()
    }

    fn render(&self, shapes: &[ShapeId], canvas: &mut dyn Canvas) {
        if !self.is_active() {
            for &id in shapes {
                canvas.set_visible(id, false);
            }
            return;
        }

        for (&id, coords) in shapes.iter().zip(cross(self.pos, WAYPOINT_ARM)) {
            canvas.set_visible(id, true);
            canvas.raise(id);
            canvas.set_coords(id, coords);
        }
    }
}

impl Element for Home {
    fn create(&self, canvas: &mut dyn Canvas) -> Vec<ShapeId> {
        vec![canvas.create_shape(ShapeKind::Rectangle, Style::outlined(colors::HOME, LINE_WIDTH))]
    }

    fn render(&self, shapes: &[ShapeId], canvas: &mut dyn Canvas) {
        for &id in shapes {
            canvas.set_coords(id, centered_box(self.pos(), self.size()));
        }
    }
}

impl Element for Player {
    fn create(&self, canvas: &mut dyn Canvas) -> Vec<ShapeId> {
        vec![canvas.create_shape(ShapeKind::Polygon, Style::filled(colors::PLAYER))]
    }

    fn render(&self, shapes: &[ShapeId], canvas: &mut dyn Canvas) {
        for &id in shapes {
            canvas.set_coords(id, turtle(self.pos, self.heading, 1.0));
        }
    }
}

/// Shape kind and fill for each enemy archetype
fn enemy_look(kind: EnemyKind) -> (ShapeKind, Color) {
    match kind {
        EnemyKind::Walker => (ShapeKind::Oval, colors::WALKER),
        EnemyKind::Pursuer => (ShapeKind::Oval, colors::PURSUER),
        EnemyKind::Patroller => (ShapeKind::Rectangle, colors::PATROLLER),
        EnemyKind::Summoner => (ShapeKind::Rectangle, colors::SUMMONER),
        EnemyKind::DiagonalMinion | EnemyKind::StraightMinion => (ShapeKind::Rectangle, colors::MINION),
    }
}

impl Element for Enemy {
    fn create(&self, canvas: &mut dyn Canvas) -> Vec<ShapeId> {
        let (kind, color) = enemy_look(self.kind);
        vec![canvas.create_shape(kind, Style::filled(color))]
    }

    fn render(&self, shapes: &[ShapeId], canvas: &mut dyn Canvas) {
        for &id in shapes {
            canvas.set_coords(id, centered_box(self.pos, self.size));
        }
    }
}
