//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (insertion order, which is also id order)
//! - Virtual clock only, no wall time
//! - No rendering or platform dependencies

pub mod bounds;
pub mod enemy;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod timer;

pub use bounds::{WorldBounds, square_contains, square_overlaps_point};
pub use enemy::{BounceAxes, Direction, Enemy, EnemyId, EnemyKind, MovementPolicy};
pub use spawn::EnemyGenerator;
pub use state::{GamePhase, GameState, Home, Outcome, Player, Waypoint};
pub use tick::tick;
pub use timer::{TimerEvent, TimerQueue};
