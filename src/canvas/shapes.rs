//! Shape geometry for game elements

use glam::Vec2;

use super::Coords;

/// Classic turtle outline, nose along +x, in unscaled units
const TURTLE_OUTLINE: [(f32, f32); 24] = [
    (16.0, 0.0),
    (14.0, 2.0),
    (10.0, 1.0),
    (7.0, 4.0),
    (9.0, 7.0),
    (8.0, 9.0),
    (5.0, 6.0),
    (1.0, 7.0),
    (-3.0, 5.0),
    (-6.0, 8.0),
    (-8.0, 6.0),
    (-5.0, 4.0),
    (-7.0, 0.0),
    (-5.0, -4.0),
    (-8.0, -6.0),
    (-6.0, -8.0),
    (-3.0, -5.0),
    (1.0, -7.0),
    (5.0, -6.0),
    (8.0, -9.0),
    (9.0, -7.0),
    (7.0, -4.0),
    (10.0, -1.0),
    (14.0, -2.0),
];

/// Bounding box of a square of side `size` centered on `center`
pub fn centered_box(center: Vec2, size: f32) -> Coords {
    let half = Vec2::splat(size / 2.0);
    Coords::Box {
        min: center - half,
        max: center + half,
    }
}

/// The two diagonals of an `arm`-radius square: an X marking `center`
pub fn cross(center: Vec2, arm: f32) -> [Coords; 2] {
    [
        Coords::Line {
            from: center + Vec2::new(-arm, -arm),
            to: center + Vec2::new(arm, arm),
        },
        Coords::Line {
            from: center + Vec2::new(-arm, arm),
            to: center + Vec2::new(arm, -arm),
        },
    ]
}

/// Turtle polygon at `center`, facing `heading` radians (screen space)
pub fn turtle(center: Vec2, heading: f32, scale: f32) -> Coords {
    let rotation = Vec2::from_angle(heading);
    Coords::Points(
        TURTLE_OUTLINE
            .iter()
            .map(|&(x, y)| center + rotation.rotate(Vec2::new(x, y) * scale))
            .collect(),
    )
}
